//! Point-in-ring containment used to reassign hole fragments after a
//! polygon has been cut.

use geojson::Position;

/// 2d bounding rectangle of a coordinate string.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Bounds {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl Bounds {
    fn from_positions(coords: &[Position]) -> Option<Self> {
        let mut positions = coords.iter();
        let first = positions.next()?;
        let mut bounds = Bounds {
            x_min: first[0],
            y_min: first[1],
            x_max: first[0],
            y_max: first[1],
        };

        for p in positions {
            if bounds.x_min > p[0] {
                bounds.x_min = p[0];
            }
            if bounds.y_min > p[1] {
                bounds.y_min = p[1];
            }
            if bounds.x_max < p[0] {
                bounds.x_max = p[0];
            }
            if bounds.y_max < p[1] {
                bounds.y_max = p[1];
            }
        }

        Some(bounds)
    }

    fn overlaps(&self, other: &Self) -> bool {
        self.x_min <= other.x_max
            && other.x_min <= self.x_max
            && self.y_min <= other.y_max
            && other.y_min <= self.y_max
    }
}

/// Sign of the turn from `v0 -> v1` towards `p`.
fn is_left(v0: &Position, v1: &Position, p: &Position) -> f64 {
    (v1[0] - v0[0]) * (p[1] - v0[1]) - (p[0] - v0[0]) * (v1[1] - v0[1])
}

/// Winding number of a point with respect to a closed ring: the number of
/// signed upward and downward edge crossings of the point's latitude. Zero
/// for points outside the ring.
pub fn winding_number(point: &Position, ring: &[Position]) -> i32 {
    let mut wn = 0;
    for pair in ring.windows(2) {
        let (v0, v1) = (&pair[0], &pair[1]);
        if v0[1] <= point[1] {
            if v1[1] > point[1] && is_left(v0, v1, point) > 0.0 {
                wn += 1;
            }
        } else if v1[1] <= point[1] && is_left(v0, v1, point) < 0.0 {
            wn -= 1;
        }
    }
    wn
}

/// Decides whether `candidate` lies inside `exterior`.
///
/// Bounding-rectangle reject first, then a winding-number test on each
/// candidate vertex; any vertex with nonzero winding number decides
/// containment. This samples points rather than testing full polygon
/// enclosure, which is sufficient here: candidates are hole fragments of
/// the same polygon the exterior fragments came from, already split at the
/// antimeridian, so a candidate never straddles the exterior boundary.
pub fn contains(exterior: &[Position], candidate: &[Position]) -> bool {
    let (Some(outer), Some(inner)) = (
        Bounds::from_positions(exterior),
        Bounds::from_positions(candidate),
    ) else {
        return false;
    };
    if !outer.overlaps(&inner) {
        return false;
    }

    candidate
        .iter()
        .any(|point| winding_number(point, exterior) != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Position> {
        vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 1.0],
            vec![1.0, 0.0],
            vec![0.0, 0.0],
        ]
    }

    #[test]
    fn disjoint_bounding_rects_reject() {
        let other = vec![
            vec![2.0, 0.0],
            vec![2.0, 1.0],
            vec![3.0, 1.0],
            vec![3.0, 0.0],
            vec![2.0, 0.0],
        ];
        assert!(!contains(&unit_square(), &other));
        assert!(!contains(&other, &unit_square()));
    }

    #[test]
    fn nested_ring_is_contained() {
        let inner = vec![
            vec![0.25, 0.25],
            vec![0.75, 0.25],
            vec![0.75, 0.75],
            vec![0.25, 0.75],
            vec![0.25, 0.25],
        ];
        assert!(contains(&unit_square(), &inner));
        assert!(!contains(&inner, &unit_square()));
    }

    #[test]
    fn overlapping_rects_but_outside_ring() {
        // The square sits inside the triangle's bounding rectangle but
        // beyond its hypotenuse.
        let triangle = vec![
            vec![0.0, 0.0],
            vec![4.0, 0.0],
            vec![0.0, 4.0],
            vec![0.0, 0.0],
        ];
        let square = vec![
            vec![3.0, 3.0],
            vec![4.0, 3.0],
            vec![4.0, 4.0],
            vec![3.0, 4.0],
            vec![3.0, 3.0],
        ];
        assert!(!contains(&triangle, &square));
    }

    #[test]
    fn orientation_of_either_ring_does_not_matter() {
        let inner_cw: Vec<Position> = vec![
            vec![0.25, 0.25],
            vec![0.25, 0.75],
            vec![0.75, 0.75],
            vec![0.75, 0.25],
            vec![0.25, 0.25],
        ];
        let outer_cw: Vec<Position> = unit_square().into_iter().rev().collect();
        assert!(contains(&outer_cw, &inner_cw));
    }

    #[test]
    fn winding_number_sign_follows_ring_direction() {
        let point = vec![0.5, 0.5];
        let ccw: Vec<Position> = unit_square().into_iter().rev().collect();
        assert_eq!(winding_number(&point, &unit_square()), -1);
        assert_eq!(winding_number(&point, &ccw), 1);
        assert_eq!(winding_number(&vec![5.0, 5.0], &unit_square()), 0);
    }

    #[test]
    fn empty_rings_are_never_contained() {
        assert!(!contains(&unit_square(), &[]));
        assert!(!contains(&[], &unit_square()));
    }
}
