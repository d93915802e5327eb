//! GeoJSON rendering of geohash cells.
//!
//! A cell becomes a `Feature` whose geometry is the closed rectangle of its
//! bounds (counter-clockwise, `[lon, lat]` order) and whose properties carry
//! the geohash string and its precision.

use crate::cell::Geohash;
use crate::error::{GeohashError, Result};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};
use serde_json::Map;

/// Closed polygon ring around a cell.
fn cell_ring(cell: &Geohash) -> Vec<Vec<f64>> {
    let b = cell.bounds();
    vec![
        vec![b.west, b.south],
        vec![b.east, b.south],
        vec![b.east, b.north],
        vec![b.west, b.north],
        vec![b.west, b.south],
    ]
}

/// Converts a cell to a GeoJSON Feature.
pub fn cell_to_feature(cell: &Geohash) -> Feature {
    let b = cell.bounds();
    let geom = Geometry::new(Value::Polygon(vec![cell_ring(cell)]));

    let mut props = Map::new();
    props.insert("geohash".to_string(), cell.as_str().into());
    props.insert("precision".to_string(), cell.precision().into());

    Feature {
        bbox: Some(vec![b.west, b.south, b.east, b.north]),
        geometry: Some(geom),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

/// Converts a cell to a GeoJSON Feature string.
///
/// # Examples
///
/// ```
/// use geocell::Geohash;
/// use geocell::geojson::cell_to_geojson;
///
/// let json = cell_to_geojson(&Geohash::new("u120fxw")?)?;
/// assert!(json.contains("\"geohash\":\"u120fxw\""));
/// # Ok::<(), geocell::GeohashError>(())
/// ```
pub fn cell_to_geojson(cell: &Geohash) -> Result<String> {
    Ok(serde_json::to_string(&cell_to_feature(cell))?)
}

/// Converts cells to a GeoJSON FeatureCollection string.
pub fn cells_to_feature_collection(cells: &[Geohash]) -> Result<String> {
    let collection = FeatureCollection {
        bbox: None,
        features: cells.iter().map(cell_to_feature).collect(),
        foreign_members: None,
    };
    Ok(serde_json::to_string(&collection)?)
}

/// Parses a Feature produced by [`cell_to_geojson`] back into its cell.
///
/// Only the `geohash` property is read; the geometry is not checked.
/// Unparsable GeoJSON or a non-Feature object is `InvalidInput`; a missing
/// or malformed `geohash` property is `InvalidGeohash`.
pub fn cell_from_geojson(geojson: &str) -> Result<Geohash> {
    let feature = match geojson.parse::<GeoJson>() {
        Ok(GeoJson::Feature(feature)) => feature,
        Ok(_) => {
            return Err(GeohashError::InvalidInput(
                "GeoJSON is not a Feature".to_string(),
            ));
        }
        Err(e) => {
            return Err(GeohashError::InvalidInput(format!(
                "Failed to parse GeoJSON: {}",
                e
            )));
        }
    };

    match feature.property("geohash").and_then(|v| v.as_str()) {
        Some(hash) => Geohash::new(hash),
        None => Err(GeohashError::InvalidGeohash(
            "Feature has no geohash property".to_string(),
        )),
    }
}
