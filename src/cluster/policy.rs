//! Zoom level to clustering parameters.
//!
//! The constants were tuned by hand against the New York subway map; keep the
//! defaults as they are.

use super::distance::{DEGREE_RAD, EARTH_RADIUS_KM, ground_resolution};
use crate::error::{Error, Result};

/// Zoom level from which stations are shown ungrouped
pub const UNGROUPED_ZOOM: u32 = 14;

/// Radius used at and above [`UNGROUPED_ZOOM`]: only practically coincident
/// stations are merged
pub const UNGROUPED_RADIUS: f64 = 0.01;

/// Min cluster size at and above [`UNGROUPED_ZOOM`]
pub const UNGROUPED_MIN_SIZE: usize = 2;

/// Min cluster size below [`UNGROUPED_ZOOM`]
pub const GROUPED_MIN_SIZE: usize = 3;

/// Station marker image width
pub const STATION_MARKER_WIDTH_PX: f64 = 28.0;

/// Latitude of NYC, used to estimate the size of a pixel at a given zoom
pub const NYC_LATITUDE: f64 = 40.7128;

/// Radius and minimum group size for one clustering run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterParams {
    /// Ground distance in kilometers
    pub radius: f64,
    pub min_size: usize,
}

impl ClusterParams {
    /// Same parameters with the radius expressed in degrees of arc, for
    /// clustering raw lng/lat coordinates
    pub fn in_degrees(&self) -> ClusterParams {
        ClusterParams {
            radius: self.radius / (EARTH_RADIUS_KM * DEGREE_RAD),
            min_size: self.min_size,
        }
    }
}

/// Tunable policy table; `Default` carries the production values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterPolicy {
    pub ungrouped_zoom: u32,
    pub ungrouped_radius: f64,
    pub ungrouped_min_size: usize,
    pub grouped_min_size: usize,
    pub marker_width_px: f64,
    pub reference_latitude: f64,
}

impl Default for ClusterPolicy {
    fn default() -> Self {
        ClusterPolicy {
            ungrouped_zoom: UNGROUPED_ZOOM,
            ungrouped_radius: UNGROUPED_RADIUS,
            ungrouped_min_size: UNGROUPED_MIN_SIZE,
            grouped_min_size: GROUPED_MIN_SIZE,
            marker_width_px: STATION_MARKER_WIDTH_PX,
            reference_latitude: NYC_LATITUDE,
        }
    }
}

impl ClusterPolicy {
    /// Picks the clustering radius and min size for `zoom`
    ///
    /// Below the ungrouped threshold the radius is the ground footprint of a
    /// station marker. It is not clamped, so very low zooms merge far-apart
    /// stations.
    pub fn select_parameters(&self, zoom: i64) -> Result<ClusterParams> {
        let zoom = u32::try_from(zoom).map_err(|_| Error::invalid("zoom", zoom))?;

        if zoom >= self.ungrouped_zoom {
            return Ok(ClusterParams {
                radius: self.ungrouped_radius,
                min_size: self.ungrouped_min_size,
            });
        }
        let resolution = ground_resolution(self.reference_latitude, zoom);
        Ok(ClusterParams {
            radius: resolution * self.marker_width_px,
            min_size: self.grouped_min_size,
        })
    }
}

/// [`ClusterPolicy::select_parameters`] with the default policy
pub fn select_parameters(zoom: i64) -> Result<ClusterParams> {
    ClusterPolicy::default().select_parameters(zoom)
}
