use crate::error::{ReaderError, Result};
use log::warn;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl Bounds {
    pub fn center(&self) -> (f64, f64) {
        (
            (self.west + self.east) / 2.0,
            (self.south + self.north) / 2.0,
        )
    }

    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.west, self.south, self.east, self.north)
    }

    fn extend(acc: Option<Self>, lon: f64, lat: f64) -> Option<Self> {
        Some(match acc {
            None => Self {
                west: lon,
                south: lat,
                east: lon,
                north: lat,
            },
            Some(b) => Self {
                west: b.west.min(lon),
                south: b.south.min(lat),
                east: b.east.max(lon),
                north: b.north.max(lat),
            },
        })
    }
}

/// Bounding box of a GeoJSON geometry or feature.
///
/// Longitudes are not normalized: a footprint crossing the antimeridian
/// yields a box spanning most of the globe rather than a reversed one.
pub fn feature_bounds(geojson: &Value) -> Result<Bounds> {
    let mut acc = None;
    collect(geojson, &mut acc)?;
    let bounds =
        acc.ok_or_else(|| ReaderError::InvalidFootprint("geometry has no coordinates".into()))?;

    if bounds.east - bounds.west > 180.0 {
        warn!(
            "Footprint spans {:.2} degrees of longitude, it may cross the antimeridian",
            bounds.east - bounds.west
        );
    }
    Ok(bounds)
}

fn collect(value: &Value, acc: &mut Option<Bounds>) -> Result<()> {
    match value.get("type").and_then(Value::as_str) {
        Some("Feature") => {
            let geometry = value
                .get("geometry")
                .ok_or_else(|| ReaderError::InvalidFootprint("feature has no geometry".into()))?;
            collect(geometry, acc)
        }
        Some("FeatureCollection") => {
            for feature in array_field(value, "features")? {
                collect(feature, acc)?;
            }
            Ok(())
        }
        Some("GeometryCollection") => {
            for geometry in array_field(value, "geometries")? {
                collect(geometry, acc)?;
            }
            Ok(())
        }
        Some(_) => {
            let coordinates = value
                .get("coordinates")
                .ok_or_else(|| ReaderError::InvalidFootprint("geometry has no coordinates".into()))?;
            collect_positions(coordinates, acc)
        }
        None => Err(ReaderError::InvalidFootprint(
            "missing geometry 'type'".into(),
        )),
    }
}

fn array_field<'a>(value: &'a Value, field: &str) -> Result<&'a Vec<Value>> {
    value
        .get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| ReaderError::InvalidFootprint(format!("'{field}' is not an array")))
}

/// Walks nested coordinate arrays down to `[lon, lat, ...]` positions.
fn collect_positions(value: &Value, acc: &mut Option<Bounds>) -> Result<()> {
    let items = value
        .as_array()
        .ok_or_else(|| ReaderError::InvalidFootprint("coordinates must be arrays".into()))?;

    match items.first() {
        Some(Value::Number(_)) => {
            let lon = items.first().and_then(Value::as_f64);
            let lat = items.get(1).and_then(Value::as_f64);
            match (lon, lat) {
                (Some(lon), Some(lat)) => {
                    *acc = Bounds::extend(acc.take(), lon, lat);
                    Ok(())
                }
                _ => Err(ReaderError::InvalidFootprint(format!(
                    "invalid position: {value}"
                ))),
            }
        }
        _ => {
            for item in items {
                collect_positions(item, acc)?;
            }
            Ok(())
        }
    }
}
