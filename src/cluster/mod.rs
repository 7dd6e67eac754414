//! Density clustering of station coordinates, backed by a static K-D tree
pub mod dbscan;
pub mod distance;
pub mod kdtree;
pub mod point;
pub mod policy;

#[cfg(test)]
mod point_test;

pub use dbscan::{db_scan, region_query};
pub use distance::{DEGREE_RAD, EARTH_RADIUS_KM, cos_deg, euclidean, ground_resolution};
pub use kdtree::{KDTree, new_kd_tree};
pub use point::{Cluster, Point, PointList, Rect};
pub use policy::{ClusterParams, ClusterPolicy, select_parameters};

use crate::error::Result;

/// Clustering result: clusters plus the indices of unclustered points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clustering {
    pub clusters: Vec<Cluster>,
    pub noise: Vec<usize>,
}

/// Partitions `points` into clusters and noise using `params`
pub fn cluster(points: &[Point], params: ClusterParams) -> Result<Clustering> {
    let (clusters, noise) = db_scan(points, params.radius, params.min_size)?;
    Ok(Clustering { clusters, noise })
}
