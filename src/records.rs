//! Turning a clustering run into display records
//!
//! Unclustered stations come first, in candidate order, followed by clusters
//! in the order the clustering pass found them.

use crate::cluster::{Clustering, Point};
use crate::error::{Error, Result};
use crate::stations::{Station, StationId};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

/// Discriminator written to the `type` property of each feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Station,
    Cluster,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Station => "station",
            Kind::Cluster => "cluster",
        }
    }
}

/// One map marker
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// A station shown on its own; carries the station's original properties
    Station {
        id: StationId,
        position: Point,
        title: String,
        description: String,
        properties: JsonObject,
    },
    /// Several nearby stations merged into one marker at their centroid
    Cluster {
        ordinal: usize,
        position: Point,
        title: String,
        description: String,
        count: usize,
        bounds: (Point, Point),
    },
}

impl Record {
    pub fn kind(&self) -> Kind {
        match self {
            Record::Station { .. } => Kind::Station,
            Record::Cluster { .. } => Kind::Cluster,
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Record::Station { position, .. } | Record::Cluster { position, .. } => *position,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Record::Station { title, .. } | Record::Cluster { title, .. } => title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Record::Station { description, .. } | Record::Cluster { description, .. } => {
                description
            }
        }
    }

    pub fn to_feature(&self) -> Feature {
        let position = self.position();
        let (mut properties, bbox) = match self {
            Record::Station { properties, .. } => (properties.clone(), None),
            Record::Cluster {
                count,
                bounds: (min, max),
                ..
            } => {
                let mut properties = JsonObject::new();
                properties.insert("count".to_string(), json!(count));
                (properties, Some(vec![min.lng(), min.lat(), max.lng(), max.lat()]))
            }
        };
        properties.insert("title".to_string(), json!(self.title()));
        properties.insert("description".to_string(), json!(self.description()));
        properties.insert("type".to_string(), json!(self.kind().as_str()));

        Feature {
            bbox,
            geometry: Some(Geometry::new(Value::Point(vec![
                position.lng(),
                position.lat(),
            ]))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// Builds the records for one query
///
/// `candidates` are the stations the clustering ran over, in the same order as
/// the points handed to it; the indices in `clustering` refer to this slice.
///
/// # Errors
///
/// `MissingMetadata` when an unclustered station has no string `name` or
/// `notes` property. No partial result is returned.
pub fn assemble(
    candidates: &[(StationId, &Station)],
    clustering: &Clustering,
) -> Result<Vec<Record>> {
    let mut records = Vec::with_capacity(clustering.noise.len() + clustering.clusters.len());

    for &i in &clustering.noise {
        let (id, station) = candidates[i];
        let name = station.name().ok_or(Error::MissingMetadata {
            station: id,
            field: "name",
        })?;
        let notes = station.notes().ok_or(Error::MissingMetadata {
            station: id,
            field: "notes",
        })?;
        records.push(Record::Station {
            id,
            position: station.point,
            title: format!("{name} Station"),
            description: notes.to_string(),
            properties: station.properties.clone(),
        });
    }

    let points: Vec<Point> = candidates.iter().map(|(_, s)| s.point).collect();
    for cluster in &clustering.clusters {
        let Some((center, min, max)) = cluster.centroid_and_bounds(&points) else {
            continue;
        };
        let count = cluster.points.len();
        records.push(Record::Cluster {
            ordinal: cluster.c + 1,
            position: center,
            title: format!("Station Cluster #{}", cluster.c + 1),
            description: format!("Contains {count} stations"),
            count,
            bounds: (min, max),
        });
    }

    Ok(records)
}

/// Wraps records in a GeoJSON FeatureCollection
pub fn to_feature_collection(records: &[Record]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: records.iter().map(Record::to_feature).collect(),
        foreign_members: None,
    }
}
