use super::{Station, StationId};
use crate::cluster::{KDTree, Point, Rect, new_kd_tree};
use log::info;

/// Half-size of the box each station occupies in the index, in degrees
pub const ENTRY_EPSILON: f64 = 1e-6;

/// A bulk-loaded, read-only index answering rectangle queries over stations
///
/// Implementations are built once and never mutated, so `&self` queries may
/// run from any number of threads at once. A reload builds a fresh index and
/// swaps it in whole.
pub trait SpatialIndex {
    /// Builds the index over `stations`; ids are positions in this vector
    fn load(stations: Vec<Station>) -> Self
    where
        Self: Sized;

    /// Ids of every station whose epsilon box intersects `rect`, ascending
    ///
    /// A malformed rectangle (non-finite, zero or negative extent) yields an
    /// empty result.
    fn query_intersect(&self, rect: &Rect) -> Vec<StationId>;

    /// Every loaded station, indexed by id
    fn stations(&self) -> &[Station];

    fn station(&self, id: StationId) -> Option<&Station> {
        self.stations().get(id)
    }
}

/// [`SpatialIndex`] backed by a K-D tree over station coordinates
#[derive(Debug)]
pub struct StationIndex {
    stations: Vec<Station>,
    tree: KDTree,
}

impl SpatialIndex for StationIndex {
    fn load(stations: Vec<Station>) -> Self {
        let points: Vec<Point> = stations.iter().map(|s| s.point).collect();
        let tree = new_kd_tree(points);
        info!(
            "indexed {} stations (tree height {})",
            stations.len(),
            tree.height()
        );
        StationIndex { stations, tree }
    }

    fn query_intersect(&self, rect: &Rect) -> Vec<StationId> {
        if !rect.is_well_formed() {
            return Vec::new();
        }
        // A station box meets `rect` exactly when its center lies in `rect`
        // grown by the box half-size
        let mut ids = self.tree.in_rect(&rect.expand(ENTRY_EPSILON), Vec::new());
        ids.sort_unstable();
        ids
    }

    fn stations(&self) -> &[Station] {
        &self.stations
    }
}
