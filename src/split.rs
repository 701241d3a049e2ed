//! Antimeridian crossing detection and coordinate-string splitting.
//!
//! A segment whose endpoints differ by more than 180° of longitude is taken
//! to wrap the short way around the globe, through the ±180° meridian. The
//! splitter cuts a coordinate string at every such segment, closing the
//! current piece on the meridian and reopening the next piece on the other
//! side. Latitude at the cut is linearly interpolated in lon/lat space.

use geojson::{LineStringType, Position};

use crate::error::{Error, Result};
use crate::ring::{close_ring, is_closed};

/// Offset applied to the longitude of a reopened piece so its first segment
/// cannot re-trigger the crossing detector. Tied to [`LAT_SCALE`]: both
/// constants assume 8 decimal places of precision.
const BOUNDARY_NUDGE: f64 = 1e-8;

/// Interpolated boundary latitudes are rounded to 8 decimal places to keep
/// repeated serialization stable.
const LAT_SCALE: f64 = 1e8;

/// Returns true if the segment between two longitudes should be interpreted
/// as crossing the antimeridian.
pub fn segment_crosses(lon0: f64, lon1: f64) -> bool {
    (lon0 - lon1).abs() > 180.0
}

/// Returns true if any consecutive pair of positions crosses the
/// antimeridian.
pub fn crosses(coords: &[Position]) -> bool {
    coords
        .windows(2)
        .any(|pair| segment_crosses(pair[0][0], pair[1][0]))
}

/// Latitude of the point where the segment meets the antimeridian, found by
/// linear interpolation weighted by each endpoint's longitudinal offset from
/// the meridian.
fn boundary_latitude(p0: &Position, p1: &Position) -> f64 {
    let d0 = ((p0[0] + 360.0) % 360.0 - 180.0).abs();
    let d1 = ((p1[0] + 360.0) % 360.0 - 180.0).abs();
    let lat = (d0 * p0[1] + d1 * p1[1]) / (d0 + d1);
    (lat * LAT_SCALE).round() / LAT_SCALE
}

/// Splits a coordinate string at every antimeridian crossing.
///
/// Each crossing closes the accumulating piece with a point on the meridian
/// (longitude +180 when leaving eastward, −180 when leaving westward) and
/// opens the next piece at the mirrored longitude, nudged inward so the new
/// segment does not cross again. A string with no crossing is returned as a
/// single-element result, unchanged.
pub fn split_line(coords: &[Position]) -> Vec<LineStringType> {
    if coords.len() < 2 {
        return vec![coords.to_vec()];
    }

    let mut parts = Vec::new();
    let mut piece: Vec<Position> = vec![coords[0].clone()];
    for pair in coords.windows(2) {
        let (p0, p1) = (&pair[0], &pair[1]);
        if segment_crosses(p0[0], p1[0]) {
            let lat = boundary_latitude(p0, p1);
            let (closing_lon, reopening_lon) = if p0[0] > 0.0 {
                (180.0, -180.0 + BOUNDARY_NUDGE)
            } else {
                (-180.0, 180.0 - BOUNDARY_NUDGE)
            };
            piece.push(vec![closing_lon, lat]);
            parts.push(piece);
            piece = vec![vec![reopening_lon, lat], p1.clone()];
        } else {
            piece.push(p1.clone());
        }
    }
    parts.push(piece);
    parts
}

/// Splits a closed ring at every antimeridian crossing, producing the set of
/// disjoint closed ring fragments the ring decomposes into.
///
/// When the ring's start vertex is not itself on the meridian, the pairwise
/// walk cuts the run containing it at the array boundary: the last and the
/// first piece are then one continuous run and are merged before closing.
/// Unclosed input is a contract violation of the caller and is rejected.
pub fn split_ring(ring: &[Position]) -> Result<Vec<Vec<Position>>> {
    if !is_closed(ring) {
        return Err(Error::MalformedRing);
    }

    let mut parts = split_line(ring);
    if parts.len() > 1 && parts[0][0][0].abs() != 180.0 {
        if let Some(tail) = parts.pop() {
            let head = std::mem::replace(&mut parts[0], tail);
            // The tail ends on the ring's start vertex, which the head also
            // begins with; drop the duplicate when rejoining.
            parts[0].extend(head.into_iter().skip(1));
        }
    }

    Ok(parts.into_iter().map(close_ring).collect())
}
