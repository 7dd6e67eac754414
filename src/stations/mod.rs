//! Station records and the spatial index they are served from
pub mod index;
pub mod loader;


pub use index::{ENTRY_EPSILON, SpatialIndex, StationIndex};
pub use loader::{LoadError, load_csv, load_geojson, load_path};

use crate::cluster::Point;
use geojson::JsonObject;
use serde_json::Value;

/// Position of a station in its dataset, stable for the life of the index
pub type StationId = usize;

/// An immutable station: coordinate plus the properties it was loaded with
///
/// `name` and `notes` are looked up lazily, so a station lacking them only
/// fails the queries that try to display it.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub point: Point,
    pub properties: JsonObject,
}

impl Station {
    pub fn new(point: Point, name: impl Into<String>, notes: impl Into<String>) -> Self {
        let mut properties = JsonObject::new();
        properties.insert("name".to_string(), Value::String(name.into()));
        properties.insert("notes".to_string(), Value::String(notes.into()));
        Station { point, properties }
    }

    pub fn with_properties(point: Point, properties: JsonObject) -> Self {
        Station { point, properties }
    }

    pub fn name(&self) -> Option<&str> {
        self.property_str("name")
    }

    pub fn notes(&self) -> Option<&str> {
        self.property_str("notes")
    }

    /// String-valued property; other JSON types count as absent
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}
