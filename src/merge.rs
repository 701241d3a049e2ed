//! Combining and bursting composite GeoJSON objects.

use geojson::{
    FeatureCollection, GeoJson, Geometry, LineStringType, PointType, PolygonType, Value,
};

use crate::error::{Error, Result};

fn points(geometries: &[Geometry]) -> Option<Vec<PointType>> {
    geometries
        .iter()
        .map(|g| match &g.value {
            Value::Point(p) => Some(p.clone()),
            _ => None,
        })
        .collect()
}

fn line_strings(geometries: &[Geometry]) -> Option<Vec<LineStringType>> {
    geometries
        .iter()
        .map(|g| match &g.value {
            Value::LineString(coords) => Some(coords.clone()),
            _ => None,
        })
        .collect()
}

fn polygons(geometries: &[Geometry]) -> Option<Vec<PolygonType>> {
    geometries
        .iter()
        .map(|g| match &g.value {
            Value::Polygon(rings) => Some(rings.clone()),
            _ => None,
        })
        .collect()
}

/// Combines a sequence of GeoJSON objects into the single most specific
/// type that retains all information:
///
/// * all Points become a MultiPoint, LineStrings a MultiLineString,
///   Polygons a MultiPolygon;
/// * any other combination of bare geometries becomes a
///   GeometryCollection;
/// * Features and FeatureCollections flatten into a FeatureCollection.
///
/// A single-element sequence is returned unchanged. Merging bare
/// geometries with features has no sensible result and is an error, as is
/// an empty sequence.
pub fn merge(mut items: Vec<GeoJson>) -> Result<GeoJson> {
    match items.len() {
        0 => return Err(Error::EmptyMerge),
        1 => return Ok(items.remove(0)),
        _ => {}
    }

    let mut geometries = Vec::new();
    let mut features = Vec::new();
    for item in items {
        match item {
            GeoJson::Geometry(geometry) => geometries.push(geometry),
            GeoJson::Feature(feature) => features.push(feature),
            GeoJson::FeatureCollection(collection) => features.extend(collection.features),
        }
    }

    if !geometries.is_empty() && !features.is_empty() {
        return Err(Error::IncompatibleMerge(
            "bare geometries with features".to_string(),
        ));
    }

    if !features.is_empty() {
        return Ok(GeoJson::FeatureCollection(FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }));
    }

    let value = if let Some(points) = points(&geometries) {
        Value::MultiPoint(points)
    } else if let Some(lines) = line_strings(&geometries) {
        Value::MultiLineString(lines)
    } else if let Some(polygons) = polygons(&geometries) {
        Value::MultiPolygon(polygons)
    } else {
        Value::GeometryCollection(geometries)
    };
    Ok(GeoJson::Geometry(Geometry::new(value)))
}

fn atomic_values(value: Value) -> Vec<Value> {
    match value {
        Value::MultiPoint(positions) => positions.into_iter().map(Value::Point).collect(),
        Value::MultiLineString(lines) => lines.into_iter().map(Value::LineString).collect(),
        Value::MultiPolygon(groups) => groups.into_iter().map(Value::Polygon).collect(),
        atomic => vec![atomic],
    }
}

/// Breaks a composite GeoJSON object into atomic Point, LineString or
/// Polygon geometries, or into individual Features, recursing through
/// collections. Atomic inputs burst into themselves. Foreign members of a
/// burst geometry (the CRS, for one) propagate onto every piece.
pub fn burst(item: GeoJson) -> Vec<GeoJson> {
    match item {
        GeoJson::Geometry(geometry) => {
            let foreign_members = geometry.foreign_members.clone();
            let pieces: Vec<Geometry> = match geometry.value {
                Value::GeometryCollection(members) => members
                    .into_iter()
                    .flat_map(|member| burst(GeoJson::Geometry(member)))
                    .filter_map(|piece| match piece {
                        GeoJson::Geometry(g) => Some(g),
                        _ => None,
                    })
                    .collect(),
                value => atomic_values(value)
                    .into_iter()
                    .map(Geometry::new)
                    .collect(),
            };
            pieces
                .into_iter()
                .map(|mut piece| {
                    if piece.foreign_members.is_none() {
                        piece.foreign_members.clone_from(&foreign_members);
                    }
                    GeoJson::Geometry(piece)
                })
                .collect()
        }
        GeoJson::Feature(_) => vec![item],
        GeoJson::FeatureCollection(collection) => collection
            .features
            .into_iter()
            .map(GeoJson::Feature)
            .collect(),
    }
}
