//! Axis-aligned bounding boxes in the GeoJSON layout: all minimums first,
//! then all maximums, one pair per dimension.
//!
//! Polygon boxes consider the exterior ring only, since holes lie inside
//! it. Coordinate strings with mixed dimensionality (a cut geometry mixes
//! 2d boundary points into a 3d string) are reduced to the dimensions all
//! positions share.

use geojson::{Bbox, Feature, FeatureCollection, Geometry, Position, Value};

/// Bounding box of a coordinate string, or `None` for an empty one.
pub fn coord_string_bbox(coords: &[Position]) -> Option<Bbox> {
    let ndim = coords.iter().map(Vec::len).min()?;
    if ndim == 0 {
        return None;
    }

    let mut bbox = vec![0.0; 2 * ndim];
    for dim in 0..ndim {
        bbox[dim] = coords
            .iter()
            .map(|p| p[dim])
            .fold(f64::INFINITY, f64::min);
        bbox[dim + ndim] = coords
            .iter()
            .map(|p| p[dim])
            .fold(f64::NEG_INFINITY, f64::max);
    }
    Some(bbox)
}

/// Merges two boxes into one covering both, truncated to the dimensions
/// they share.
fn merge_bbox(a: Bbox, b: Bbox) -> Bbox {
    let ndim = (a.len() / 2).min(b.len() / 2);
    let mut merged = vec![0.0; 2 * ndim];
    for dim in 0..ndim {
        merged[dim] = a[dim].min(b[dim]);
        merged[dim + ndim] = a[dim + a.len() / 2].max(b[dim + b.len() / 2]);
    }
    merged
}

fn merged_bboxes(boxes: impl Iterator<Item = Option<Bbox>>) -> Option<Bbox> {
    boxes.flatten().reduce(merge_bbox)
}

/// Bounding box of a geometry value.
pub fn value_bbox(value: &Value) -> Option<Bbox> {
    match value {
        Value::Point(p) => {
            if p.is_empty() {
                return None;
            }
            let mut bbox = p.clone();
            bbox.extend_from_slice(p);
            Some(bbox)
        }
        Value::MultiPoint(points) => coord_string_bbox(points),
        Value::LineString(coords) => coord_string_bbox(coords),
        Value::MultiLineString(lines) => {
            merged_bboxes(lines.iter().map(|line| coord_string_bbox(line)))
        }
        Value::Polygon(rings) => coord_string_bbox(rings.first()?),
        Value::MultiPolygon(polygons) => merged_bboxes(
            polygons
                .iter()
                .map(|rings| rings.first().and_then(|e| coord_string_bbox(e))),
        ),
        Value::GeometryCollection(geometries) => {
            merged_bboxes(geometries.iter().map(geometry_bbox))
        }
    }
}

/// Bounding box of a geometry.
pub fn geometry_bbox(geometry: &Geometry) -> Option<Bbox> {
    value_bbox(&geometry.value)
}

/// Bounding box of a feature's geometry.
pub fn feature_bbox(feature: &Feature) -> Option<Bbox> {
    feature.geometry.as_ref().and_then(geometry_bbox)
}

/// Bounding box covering all features of a collection.
pub fn feature_collection_bbox(collection: &FeatureCollection) -> Option<Bbox> {
    merged_bboxes(collection.features.iter().map(feature_bbox))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_bbox_is_degenerate() {
        let bbox = value_bbox(&Value::Point(vec![10.0, 20.0])).unwrap();
        assert_eq!(bbox, vec![10.0, 20.0, 10.0, 20.0]);
    }

    #[test]
    fn line_string_bbox() {
        let bbox = value_bbox(&Value::LineString(vec![
            vec![0.0, 5.0],
            vec![-3.0, 2.0],
            vec![7.0, -1.0],
        ]))
        .unwrap();
        assert_eq!(bbox, vec![-3.0, -1.0, 7.0, 5.0]);
    }

    #[test]
    fn polygon_bbox_ignores_holes() {
        let bbox = value_bbox(&Value::Polygon(vec![
            vec![
                vec![0.0, 0.0],
                vec![4.0, 0.0],
                vec![4.0, 4.0],
                vec![0.0, 4.0],
                vec![0.0, 0.0],
            ],
            vec![
                vec![1.0, 1.0],
                vec![1.0, 2.0],
                vec![2.0, 2.0],
                vec![1.0, 1.0],
            ],
        ]))
        .unwrap();
        assert_eq!(bbox, vec![0.0, 0.0, 4.0, 4.0]);
    }

    #[test]
    fn ragged_dimensions_reduce_to_shared_dims() {
        let bbox = coord_string_bbox(&[vec![1.0, 2.0, 100.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(bbox, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn three_dimensional_bbox() {
        let bbox = coord_string_bbox(&[vec![1.0, 2.0, 100.0], vec![3.0, 4.0, 50.0]]).unwrap();
        assert_eq!(bbox, vec![1.0, 2.0, 50.0, 3.0, 4.0, 100.0]);
    }

    #[test]
    fn multi_polygon_bbox_merges_exteriors() {
        let square = |x0: f64| {
            vec![vec![
                vec![x0, 0.0],
                vec![x0 + 1.0, 0.0],
                vec![x0 + 1.0, 1.0],
                vec![x0, 1.0],
                vec![x0, 0.0],
            ]]
        };
        let bbox = value_bbox(&Value::MultiPolygon(vec![square(0.0), square(5.0)])).unwrap();
        assert_eq!(bbox, vec![0.0, 0.0, 6.0, 1.0]);
    }

    #[test]
    fn collection_bboxes() {
        let collection = Value::GeometryCollection(vec![
            Geometry::new(Value::Point(vec![-5.0, 0.0])),
            Geometry::new(Value::Point(vec![5.0, 3.0])),
        ]);
        assert_eq!(value_bbox(&collection).unwrap(), vec![-5.0, 0.0, 5.0, 3.0]);

        let features = FeatureCollection {
            bbox: None,
            features: vec![
                Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::Point(vec![1.0, 1.0]))),
                    id: None,
                    properties: None,
                    foreign_members: None,
                },
                Feature {
                    bbox: None,
                    geometry: None,
                    id: None,
                    properties: None,
                    foreign_members: None,
                },
            ],
            foreign_members: None,
        };
        assert_eq!(
            feature_collection_bbox(&features).unwrap(),
            vec![1.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn empty_inputs_have_no_bbox() {
        assert_eq!(value_bbox(&Value::MultiPoint(vec![])), None);
        assert_eq!(value_bbox(&Value::Polygon(vec![])), None);
    }
}
