//! Viewport descriptor parsing
//!
//! A viewport arrives as `"swLat,swLng|neLat,neLng"`. The parsed rectangle is
//! grown by a tenth of its span on every side so stations near the edges do
//! not flicker in and out on small pans and zooms.

use crate::cluster::{Point, Rect};
use crate::error::{Error, Result};

/// The origin moves back by span / MARGIN_DIVISOR on each axis
const MARGIN_DIVISOR: f64 = 10.0;

/// Extents grow by this factor, covering the margin on both sides
const GROWTH: f64 = 1.2;

/// Parses a viewport descriptor into an expanded query rectangle
///
/// The corners may come in any order: the rectangle is built from the
/// componentwise min and max.
pub fn parse_viewport(raw: &str) -> Result<Rect> {
    let corners: Vec<&str> = raw.split('|').collect();
    if corners.len() != 2 {
        return Err(Error::malformed(
            "viewport",
            format!("expected 2 corners separated by '|', found {}", corners.len()),
        ));
    }
    let (sw_lat, sw_lng) = parse_corner(corners[0], "sw")?;
    let (ne_lat, ne_lng) = parse_corner(corners[1], "ne")?;

    let min_lat = sw_lat.min(ne_lat);
    let min_lng = sw_lng.min(ne_lng);
    let dist_lat = sw_lat.max(ne_lat) - min_lat;
    let dist_lng = sw_lng.max(ne_lng) - min_lng;

    if dist_lat <= 0.0 || dist_lng <= 0.0 {
        return Err(Error::malformed("viewport", "zero-area rectangle"));
    }

    Ok(Rect::new(
        Point([
            min_lng - dist_lng / MARGIN_DIVISOR,
            min_lat - dist_lat / MARGIN_DIVISOR,
        ]),
        [dist_lng * GROWTH, dist_lat * GROWTH],
    ))
}

fn parse_corner(raw: &str, corner: &str) -> Result<(f64, f64)> {
    let fields: Vec<&str> = raw.split(',').collect();
    if fields.len() != 2 {
        return Err(Error::malformed(
            format!("{corner} corner"),
            format!("expected lat,lng, found {} fields", fields.len()),
        ));
    }
    let lat = parse_component(fields[0], &format!("{corner}Lat"))?;
    let lng = parse_component(fields[1], &format!("{corner}Lng"))?;
    Ok((lat, lng))
}

fn parse_component(raw: &str, component: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| Error::malformed(component, format!("{raw:?}: {e}")))?;
    if !value.is_finite() {
        return Err(Error::malformed(component, format!("{raw:?} is not finite")));
    }
    Ok(value)
}
