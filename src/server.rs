//! HTTP front end serving station markers as GeoJSON
//!
//! `GET /data/subway-stations?viewport=swLat,swLng|neLat,neLng&zoom=N`

use crate::records::to_feature_collection;
use crate::service::{StationMap, parse_zoom};
use crate::stations::SpatialIndex;
use crate::viewport::parse_viewport;
use log::{info, warn};
use rouille::{Request, Response};
use std::error::Error as StdError;
use std::sync::Arc;

pub const STATIONS_PATH: &str = "/data/subway-stations";

/// Status and body of an answer to a stations request
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    fn json(body: String) -> Self {
        Reply {
            status: 200,
            content_type: "application/json",
            body,
        }
    }

    fn error(status: u16, body: String) -> Self {
        warn!("{} {}", status, body);
        Reply {
            status,
            content_type: "text/plain; charset=utf-8",
            body,
        }
    }
}

/// Answers a stations request from its raw `viewport` and `zoom` parameters
pub fn respond<I: SpatialIndex>(
    map: &StationMap<I>,
    viewport: Option<&str>,
    zoom: Option<&str>,
) -> Reply {
    let rect = match parse_viewport(viewport.unwrap_or_default()) {
        Ok(rect) => rect,
        Err(e) => return Reply::error(400, format!("Couldn't parse viewport: {e}")),
    };
    let zoom = match parse_zoom(zoom.unwrap_or_default()) {
        Ok(zoom) => zoom,
        Err(e) => return Reply::error(400, format!("Couldn't parse zoom: {e}")),
    };
    let records = match map.query_rect(&rect, zoom) {
        Ok(records) => records,
        Err(e) => {
            let status = if e.is_client_error() { 400 } else { 500 };
            return Reply::error(status, format!("Couldn't cluster results: {e}"));
        }
    };
    match serde_json::to_string(&to_feature_collection(&records)) {
        Ok(body) => Reply::json(body),
        Err(e) => Reply::error(500, format!("Couldn't encode results: {e}")),
    }
}

/// Routes one HTTP request
pub fn handle<I: SpatialIndex>(map: &StationMap<I>, request: &Request) -> Response {
    if request.method() != "GET" || request.url() != STATIONS_PATH {
        return Response::empty_404();
    }
    let reply = respond(
        map,
        request.get_param("viewport").as_deref(),
        request.get_param("zoom").as_deref(),
    );
    Response::from_data(reply.content_type, reply.body).with_status_code(reply.status)
}

/// Serves `map` on `addr` until the process exits
pub fn serve<I>(
    map: Arc<StationMap<I>>,
    addr: &str,
) -> Result<(), Box<dyn StdError + Send + Sync>>
where
    I: SpatialIndex + Send + Sync + 'static,
{
    let server = rouille::Server::new(addr, move |request| handle(&map, request))?;
    info!("listening on http://{}{}", server.server_addr(), STATIONS_PATH);
    server.run();
    Ok(())
}
