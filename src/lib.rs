//! Viewport queries over a static set of transit stations, with zoom-dependent
//! clustering of markers that would overlap on screen.
//!
//! The pipeline: a viewport string is resolved into a slightly enlarged
//! rectangle, the station index returns what lies inside it, and the
//! candidates are clustered with a radius derived from the zoom level. Lone
//! stations and cluster centroids come back as [`records::Record`]s.

pub mod cluster;
pub mod error;
pub mod records;
pub mod server;
pub mod service;
pub mod stations;
pub mod viewport;

#[cfg(test)]
mod records_test;
#[cfg(test)]
mod viewport_test;

pub use error::{Error, Result};
pub use records::{Kind, Record};
pub use service::StationMap;
pub use stations::{SpatialIndex, Station, StationIndex};
