//! Geometry correction for GeoJSON trees before emission.
//!
//! GeoJSON (RFC 7946) requires that geometries crossing the ±180° meridian
//! (the antimeridian) be split into parts that do not wrap around the
//! globe, that polygon rings be closed, and that exterior rings wind
//! counterclockwise with holes clockwise. This crate implements those
//! corrections over the [`geojson`] crate's value tree; parsing and
//! serialization stay with that crate.
//!
//! ```
//! use geojson::Value;
//!
//! let line = Value::LineString(vec![
//!     vec![172.0, 34.0],
//!     vec![178.0, 36.0],
//!     vec![-179.0, 37.0],
//! ]);
//!
//! // A line crossing the antimeridian comes back as a MultiLineString
//! // with one part on each side of the meridian.
//! let cut = geocut::cut(&line).unwrap();
//! assert!(matches!(cut, Value::MultiLineString(ref parts) if parts.len() == 2));
//! ```
//!
//! Splitting is planar linear interpolation in lon/lat space; there is no
//! geodesic accuracy, no polar handling and no general polygon clipping.

pub mod bbox;
pub mod contains;
pub mod cut;
pub mod error;
pub mod merge;
pub mod orient;
pub mod ring;
pub mod split;

pub use contains::contains;
pub use cut::{cut, cut_feature, cut_feature_collection, cut_geojson, cut_geometry, cut_polygon};
pub use error::{Error, Result};
pub use merge::{burst, merge};
pub use orient::{enforce_winding, enforce_winding_value, is_counterclockwise};
pub use ring::close_ring;
pub use split::{crosses, split_line, split_ring};
