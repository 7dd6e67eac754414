//! The query entry point: viewport and zoom in, display records out

use crate::cluster::{ClusterPolicy, Point, Rect, cluster};
use crate::error::{Error, Result};
use crate::records::{Record, assemble};
use crate::stations::{SpatialIndex, Station, StationId, StationIndex};
use crate::viewport::parse_viewport;
use log::debug;

/// A loaded station set plus the clustering policy it is served with
///
/// Built once at startup, then only read; share it behind an `Arc`.
#[derive(Debug)]
pub struct StationMap<I = StationIndex> {
    index: I,
    policy: ClusterPolicy,
}

impl StationMap<StationIndex> {
    /// Indexes `stations` with the default K-D tree index
    pub fn new(stations: Vec<Station>, policy: ClusterPolicy) -> Self {
        StationMap::with_index(StationIndex::load(stations), policy)
    }
}

impl<I: SpatialIndex> StationMap<I> {
    pub fn with_index(index: I, policy: ClusterPolicy) -> Self {
        StationMap { index, policy }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    pub fn policy(&self) -> &ClusterPolicy {
        &self.policy
    }

    /// Answers one viewport query
    ///
    /// # Errors
    ///
    /// `MalformedInput` for an unparsable viewport, `InvalidParameter` for a
    /// negative zoom, `MissingMetadata` when a station to be shown on its own
    /// lacks its display fields.
    pub fn query(&self, viewport: &str, zoom: i64) -> Result<Vec<Record>> {
        let rect = parse_viewport(viewport)?;
        self.query_rect(&rect, zoom)
    }

    /// Answers a query for an already resolved rectangle
    pub fn query_rect(&self, rect: &Rect, zoom: i64) -> Result<Vec<Record>> {
        let params = self.policy.select_parameters(zoom)?;

        let candidates: Vec<(StationId, &Station)> = self
            .index
            .query_intersect(rect)
            .into_iter()
            .filter_map(|id| self.index.station(id).map(|s| (id, s)))
            .collect();
        let points: Vec<Point> = candidates.iter().map(|(_, s)| s.point).collect();

        // Station coordinates are degrees, the policy radius is km
        let clustering = cluster(&points, params.in_degrees())?;
        debug!(
            "rect {:?} zoom {}: {} candidates, radius {:.4} km, min {} -> {} clusters, {} noise",
            rect,
            zoom,
            candidates.len(),
            params.radius,
            params.min_size,
            clustering.clusters.len(),
            clustering.noise.len()
        );

        assemble(&candidates, &clustering)
    }
}

/// Parses a zoom request parameter: a non-negative integer
pub fn parse_zoom(raw: &str) -> Result<i64> {
    let zoom: i64 = raw
        .trim()
        .parse()
        .map_err(|e| Error::malformed("zoom", format!("{raw:?}: {e}")))?;
    if zoom < 0 {
        return Err(Error::malformed("zoom", format!("{zoom} is negative")));
    }
    Ok(zoom)
}
