//! Antimeridian cutting of GeoJSON values.
//!
//! [`cut`] and its wrappers walk a geometry/feature tree and split every
//! geometry that crosses the ±180° meridian into disjoint parts, promoting
//! the variant where needed (LineString to MultiLineString, Polygon to
//! MultiPolygon). Subtrees without a crossing come back value-equal to the
//! input. Ring winding is not touched here; the emission path applies
//! [`crate::orient::enforce_winding_value`] separately.

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, PolygonType, Position, Value};

use crate::bbox::{feature_collection_bbox, value_bbox};
use crate::contains::contains;
use crate::error::Result;
use crate::split::{crosses, split_line, split_ring};

/// Cuts a polygon's ring list at the antimeridian, producing the ring
/// groups of the resulting multi-polygon.
///
/// The exterior ring and every hole are split independently; each hole
/// fragment is then assigned to the exterior fragment that contains it. A
/// polygon whose exterior does not cross is returned as a single-element
/// result, unchanged. Hole fragments contained by no exterior fragment are
/// dropped with a warning.
pub fn cut_polygon(rings: &[Vec<Position>]) -> Result<Vec<PolygonType>> {
    let Some(exterior) = rings.first() else {
        return Ok(Vec::new());
    };
    if !crosses(exterior) {
        return Ok(vec![rings.to_vec()]);
    }

    let exterior_fragments = split_ring(exterior)?;
    let mut hole_fragments = Vec::new();
    for hole in &rings[1..] {
        hole_fragments.extend(split_ring(hole)?);
    }

    let mut assigned = vec![false; hole_fragments.len()];
    let mut groups = Vec::with_capacity(exterior_fragments.len());
    for fragment in exterior_fragments {
        let mut group = vec![fragment];
        for (i, hole) in hole_fragments.iter().enumerate() {
            if !assigned[i] && contains(&group[0], hole) {
                assigned[i] = true;
                group.push(hole.clone());
            }
        }
        groups.push(group);
    }

    let orphaned = assigned.iter().filter(|done| !**done).count();
    if orphaned > 0 {
        log::warn!("dropping {orphaned} hole fragment(s) contained by no exterior fragment");
    }

    Ok(groups)
}

fn polygon_crosses(rings: &[Vec<Position>]) -> bool {
    rings.first().is_some_and(|exterior| crosses(exterior))
}

/// Cuts a geometry value at the antimeridian.
///
/// Point and MultiPoint are never split. A value without any crossing is
/// returned value-equal to the input.
pub fn cut(value: &Value) -> Result<Value> {
    Ok(match value {
        Value::Point(_) | Value::MultiPoint(_) => value.clone(),
        Value::LineString(coords) => {
            if crosses(coords) {
                Value::MultiLineString(split_line(coords))
            } else {
                value.clone()
            }
        }
        Value::MultiLineString(lines) => {
            if lines.iter().any(|line| crosses(line)) {
                Value::MultiLineString(lines.iter().flat_map(|line| split_line(line)).collect())
            } else {
                value.clone()
            }
        }
        Value::Polygon(rings) => {
            if polygon_crosses(rings) {
                Value::MultiPolygon(cut_polygon(rings)?)
            } else {
                value.clone()
            }
        }
        Value::MultiPolygon(polygons) => {
            if polygons.iter().any(|rings| polygon_crosses(rings)) {
                let mut parts = Vec::new();
                for rings in polygons {
                    parts.extend(cut_polygon(rings)?);
                }
                Value::MultiPolygon(parts)
            } else {
                value.clone()
            }
        }
        Value::GeometryCollection(geometries) => Value::GeometryCollection(
            geometries.iter().map(cut_geometry).collect::<Result<_>>()?,
        ),
    })
}

/// Cuts a geometry, carrying its foreign members through unchanged. A
/// `bbox` member is recomputed when the geometry actually changed, so it
/// never goes stale; untouched geometries come back identical.
pub fn cut_geometry(geometry: &Geometry) -> Result<Geometry> {
    let value = cut(&geometry.value)?;
    let bbox = if value == geometry.value {
        geometry.bbox.clone()
    } else {
        geometry.bbox.as_ref().and_then(|_| value_bbox(&value))
    };
    Ok(Geometry {
        bbox,
        value,
        foreign_members: geometry.foreign_members.clone(),
    })
}

/// Cuts a feature's geometry; properties, id and foreign members propagate
/// unchanged.
pub fn cut_feature(feature: &Feature) -> Result<Feature> {
    let geometry = match &feature.geometry {
        Some(geometry) => Some(cut_geometry(geometry)?),
        None => None,
    };
    let bbox = if geometry == feature.geometry {
        feature.bbox.clone()
    } else {
        feature
            .bbox
            .as_ref()
            .and_then(|_| geometry.as_ref().and_then(crate::bbox::geometry_bbox))
    };
    Ok(Feature {
        bbox,
        geometry,
        id: feature.id.clone(),
        properties: feature.properties.clone(),
        foreign_members: feature.foreign_members.clone(),
    })
}

/// Cuts every feature of a collection.
pub fn cut_feature_collection(collection: &FeatureCollection) -> Result<FeatureCollection> {
    let features = collection
        .features
        .iter()
        .map(cut_feature)
        .collect::<Result<Vec<_>>>()?;
    let mut cut = FeatureCollection {
        bbox: collection.bbox.clone(),
        features,
        foreign_members: collection.foreign_members.clone(),
    };
    if cut.bbox.is_some() && cut.features != collection.features {
        cut.bbox = feature_collection_bbox(&cut);
    }
    Ok(cut)
}

/// Cuts any GeoJSON object. This is the entry point an emission path calls
/// before serializing.
pub fn cut_geojson(geojson: &GeoJson) -> Result<GeoJson> {
    Ok(match geojson {
        GeoJson::Geometry(geometry) => GeoJson::Geometry(cut_geometry(geometry)?),
        GeoJson::Feature(feature) => GeoJson::Feature(cut_feature(feature)?),
        GeoJson::FeatureCollection(collection) => {
            GeoJson::FeatureCollection(cut_feature_collection(collection)?)
        }
    })
}
