//! Ring orientation classification and winding normalization.
//!
//! GeoJSON convention: a polygon's exterior ring is wound counterclockwise,
//! its holes clockwise. [`enforce_winding`] rewrites a ring list to follow
//! that convention; [`is_counterclockwise`] is the underlying classifier.

use geojson::{Geometry, PolygonType, Position, Value};

use crate::error::{Error, Result};
use crate::ring::is_closed;

/// Sign of the turn from `p0 -> p1` towards `p`: positive when `p` lies to
/// the left of the directed segment.
fn is_left(p: &Position, p0: &Position, p1: &Position) -> f64 {
    (p1[0] - p0[0]) * (p[1] - p0[1]) - (p[0] - p0[0]) * (p1[1] - p0[1])
}

/// Determines whether the ring's vertices are ordered counterclockwise.
///
/// The vertex with minimum latitude (ties broken by minimum longitude) is a
/// convex-hull vertex, so the turn direction at it decides the winding of
/// the whole ring. Rings with fewer than 3 distinct vertices are rejected
/// with [`Error::DegenerateRing`].
pub fn is_counterclockwise(ring: &[Position]) -> Result<bool> {
    let stripped = if is_closed(ring) {
        &ring[..ring.len() - 1]
    } else {
        ring
    };

    // Repeated vertices would give the turn test a zero-length edge, so
    // drop consecutive duplicates, including any spanning the wraparound.
    let mut distinct: Vec<&Position> = Vec::with_capacity(stripped.len());
    for pt in stripped {
        if distinct.last().map_or(true, |last| **last != *pt) {
            distinct.push(pt);
        }
    }
    while distinct.len() > 1 && distinct.first() == distinct.last() {
        distinct.pop();
    }

    let m = distinct.len();
    if m < 3 {
        return Err(Error::DegenerateRing { vertices: m });
    }

    let mut imin = 0;
    for (i, pt) in distinct.iter().enumerate().skip(1) {
        let low = distinct[imin];
        if pt[1] < low[1] || (pt[1] == low[1] && pt[0] < low[0]) {
            imin = i;
        }
    }

    let prev = distinct[(imin + m - 1) % m];
    let next = distinct[(imin + 1) % m];
    Ok(is_left(prev, distinct[imin], next) > 0.0)
}

/// Rewinds a polygon's ring list to the GeoJSON convention: ring 0
/// counterclockwise, every following ring clockwise. Rings that already
/// follow the convention are returned unchanged; mismatched rings are
/// reversed. The input is not modified.
pub fn enforce_winding(rings: &[Vec<Position>]) -> Result<PolygonType> {
    rings
        .iter()
        .enumerate()
        .map(|(i, ring)| {
            let reverse = (i != 0) == is_counterclockwise(ring)?;
            Ok(if reverse {
                ring.iter().rev().cloned().collect()
            } else {
                ring.clone()
            })
        })
        .collect()
}

/// Applies [`enforce_winding`] to every polygon ring list found in the
/// value, recursing through multi-polygons and geometry collections. All
/// other variants are returned unchanged.
pub fn enforce_winding_value(value: &Value) -> Result<Value> {
    Ok(match value {
        Value::Polygon(rings) => Value::Polygon(enforce_winding(rings)?),
        Value::MultiPolygon(polygons) => Value::MultiPolygon(
            polygons
                .iter()
                .map(|rings| enforce_winding(rings))
                .collect::<Result<_>>()?,
        ),
        Value::GeometryCollection(geometries) => Value::GeometryCollection(
            geometries
                .iter()
                .map(|geometry| {
                    Ok(Geometry {
                        bbox: geometry.bbox.clone(),
                        value: enforce_winding_value(&geometry.value)?,
                        foreign_members: geometry.foreign_members.clone(),
                    })
                })
                .collect::<Result<_>>()?,
        ),
        other => other.clone(),
    })
}
