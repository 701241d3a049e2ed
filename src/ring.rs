//! Ring closure helpers.

use geojson::Position;

/// Returns true if the coordinate string's first and last positions are equal.
pub fn is_closed(coords: &[Position]) -> bool {
    match (coords.first(), coords.last()) {
        (Some(first), Some(last)) => first == last,
        _ => false,
    }
}

/// Closes a ring by appending a copy of the first position if the last one
/// does not already equal it. Closing an already closed ring is a no-op.
pub fn close_ring(mut coords: Vec<Position>) -> Vec<Position> {
    if !coords.is_empty() && !is_closed(&coords) {
        coords.push(coords[0].clone());
    }
    coords
}
