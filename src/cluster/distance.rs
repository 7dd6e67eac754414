use std::f64::consts::PI;

use super::point::Point;

/// Coefficient to translate from degrees to radians
pub const DEGREE_RAD: f64 = PI / 180.0;

/// Equatorial earth radius in kilometers, treating the earth as a sphere
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// Width in pixels of the whole world map at zoom 0 is `2^TILE_SIZE_EXP`
const TILE_SIZE_EXP: f64 = 8.0;

/// Cosine taking its argument in degrees
pub fn cos_deg(degrees: f64) -> f64 {
    (degrees * DEGREE_RAD).cos()
}

/// Distance in km on the ground represented by one map pixel at the given
/// latitude and zoom, under spherical web mercator.
///
/// Latitude is not validated.
pub fn ground_resolution(lat: f64, zoom: u32) -> f64 {
    // Zoom 0 is 256 pixels wide, every zoom level doubles it
    let num_pixels = (TILE_SIZE_EXP + f64::from(zoom)).exp2();
    cos_deg(lat) * 2.0 * PI * EARTH_RADIUS_KM / num_pixels
}

/// Squared planar distance between two points, in degrees
pub fn euclidean_sq(p1: &Point, p2: &Point) -> f64 {
    let v1 = p1.0[0] - p2.0[0];
    let v2 = p1.0[1] - p2.0[1];

    v1 * v1 + v2 * v2
}

/// Planar distance between two points, in degrees
pub fn euclidean(p1: &Point, p2: &Point) -> f64 {
    euclidean_sq(p1, p2).sqrt()
}
