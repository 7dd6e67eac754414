//! Reading the static station dataset
//!
//! Two formats are accepted: a GeoJSON FeatureCollection of Point features,
//! and a `latitude,longitude,name,notes` CSV with an optional header row.

use super::Station;
use crate::cluster::Point;
use csv::ReaderBuilder;
use geojson::{FeatureCollection, GeoJson, JsonObject, Value};
use log::info;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to load the dataset. Fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("parsing GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("feature {index} has no point geometry")]
    NotAPoint { index: usize },

    #[error("record {index}: invalid coordinate {value:?}")]
    BadCoordinate { index: usize, value: String },

    #[error("unsupported dataset format {0:?} (expected .geojson, .json or .csv)")]
    UnsupportedFormat(String),
}

/// Loads stations from a file, picking the format from its extension
pub fn load_path(path: &Path) -> Result<Vec<Station>, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let stations = match extension.as_str() {
        "geojson" | "json" => load_geojson(&fs::read_to_string(path).map_err(io_err)?)?,
        "csv" => load_csv(File::open(path).map_err(io_err)?)?,
        _ => return Err(LoadError::UnsupportedFormat(extension)),
    };

    info!("loaded {} stations from {:?}", stations.len(), path);
    Ok(stations)
}

/// Parses a FeatureCollection; every feature must be a Point
pub fn load_geojson(text: &str) -> Result<Vec<Station>, LoadError> {
    let geojson: GeoJson = text.parse()?;
    let collection = FeatureCollection::try_from(geojson)?;

    collection
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| {
            let position = match feature.geometry.map(|g| g.value) {
                Some(Value::Point(position)) => position,
                _ => return Err(LoadError::NotAPoint { index }),
            };
            let point = match position.as_slice() {
                [lng, lat, ..] if lng.is_finite() && lat.is_finite() => Point([*lng, *lat]),
                _ => {
                    return Err(LoadError::BadCoordinate {
                        index,
                        value: format!("{position:?}"),
                    });
                }
            };
            Ok(Station::with_properties(
                point,
                feature.properties.unwrap_or_default(),
            ))
        })
        .collect()
}

/// Reads `latitude,longitude[,name[,notes]]` rows
///
/// The first row is taken as a header when its first field is not a number.
pub fn load_csv<R: Read>(reader: R) -> Result<Vec<Station>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut stations = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let first = record.get(0).unwrap_or_default().trim();
        if index == 0 && first.parse::<f64>().is_err() {
            continue;
        }

        let coordinate = |i: usize| -> Result<f64, LoadError> {
            let raw = record.get(i).unwrap_or_default().trim();
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| LoadError::BadCoordinate {
                    index,
                    value: raw.to_string(),
                })
        };
        let lat = coordinate(0)?;
        let lng = coordinate(1)?;

        let mut properties = JsonObject::new();
        for (i, key) in [(2, "name"), (3, "notes")] {
            if let Some(value) = record.get(i) {
                properties.insert(key.to_string(), value.into());
            }
        }
        stations.push(Station::with_properties(Point([lng, lat]), properties));
    }

    Ok(stations)
}
