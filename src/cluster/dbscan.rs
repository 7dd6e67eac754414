use super::kdtree::new_kd_tree;
use super::point::{Cluster, Point};
use crate::error::{Error, Result};
use bitvec::prelude::*;

// Density clustering over the reachability graph:
//
// cluster(D, eps, MinSize)
//    C = 0
//    for each unvisited point P in dataset D (in input order)
//       mark P as visited
//       Group = {P}, Frontier = regionQuery(P, eps)
//       while Frontier is not empty
//          take P' from Frontier
//          if P' is not visited
//             mark P' as visited
//             add P' to Group
//             Frontier = Frontier joined with regionQuery(P', eps)
//       if sizeof(Group) >= MinSize
//          emit Group as cluster C, C = next cluster
//       else
//          mark every member of Group as NOISE
//
// regionQuery(P, eps)
//    return all points within P's eps-neighborhood (including P)
//
// Every reached point is expanded, not only dense ones, so a group is exactly
// one connected component of the "distance <= eps" graph. Assignment of points
// to clusters therefore does not depend on input order.

/// Clusters incoming points by euclidean reachability
///
/// # Arguments
///
/// * `points` - List of points to cluster
/// * `eps` - Reachability radius, in the same units as the coordinates
/// * `min_size` - Minimum number of members for a group to count as a cluster
///
/// # Returns
///
/// A tuple `(clusters, noise)` where:
/// - `clusters` is a vector of found clusters, ordered by their lowest member index
/// - `noise` is a vector of point indices not in any cluster, in ascending order
///
/// # Errors
///
/// `InvalidParameter` when `eps` is negative or NaN, or `min_size` is zero.
pub fn db_scan(
    points: &[Point],
    eps: f64,
    min_size: usize,
) -> Result<(Vec<Cluster>, Vec<usize>)> {
    if eps.is_nan() || eps < 0.0 {
        return Err(Error::invalid("radius", eps));
    }
    if min_size < 1 {
        return Err(Error::invalid("min cluster size", min_size));
    }

    let mut visited = bitvec![0; points.len()];
    let mut clusters = Vec::new();
    let mut noise = Vec::new();
    let mut c = 0;
    let kd_tree = new_kd_tree(points.to_vec());
    let mut scratch = Vec::new();

    for i in 0..points.len() {
        if visited[i] {
            continue;
        }
        visited.set(i, true);

        let mut group = vec![i];
        let mut frontier = vec![i];
        while let Some(k) = frontier.pop() {
            scratch.clear();
            scratch = kd_tree.in_range(&points[k], eps, scratch);
            for &p in &scratch {
                if !visited[p] {
                    visited.set(p, true);
                    group.push(p);
                    frontier.push(p);
                }
            }
        }

        if group.len() >= min_size {
            clusters.push(Cluster { c, points: group });
            c += 1;
        } else {
            noise.extend_from_slice(&group);
        }
    }

    noise.sort_unstable();
    Ok((clusters, noise))
}

/// Simple O(N) way to find points in neighbourhood
///
/// This is equivalent to `kd_tree.in_range(points[i], eps, vec![])` up to ordering
pub fn region_query(points: &[Point], p: &Point, eps: f64) -> Vec<usize> {
    points
        .iter()
        .enumerate()
        .filter(|(_, point)| point.sq_dist(p) <= eps * eps)
        .map(|(i, _)| i)
        .collect()
}
