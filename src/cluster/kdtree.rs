//! Static two-dimensional K-D tree over a point list.
//!
//! The tree is built once by median splits on pre-sorted index lists and never
//! mutated afterwards, so a built tree can be shared freely between readers.

use super::point::{Point, PointList, Rect};

/// KD-Tree implementation for efficient spatial queries
///
/// Points are separated from nodes. Nodes hold only indices into the Points slice.
#[derive(Debug)]
pub struct KDTree {
    /// All points in the tree
    pub points: PointList,
    /// Root node of the tree
    root: Option<Box<KDTreeNode>>,
}

/// A node in the K-D tree
#[derive(Debug)]
struct KDTreeNode {
    /// Index of the point associated with this node
    point_id: usize,
    /// Indices of points equal to this node's point
    equal_ids: Vec<usize>,

    split: usize,
    left: Option<Box<KDTreeNode>>,
    right: Option<Box<KDTreeNode>>,
}

impl KDTree {
    /// Finds all points within distance `dist` (inclusive) of `pt`
    ///
    /// To avoid allocation, the `nodes` vector can be pre-allocated with a larger
    /// capacity and re-used across multiple calls.
    pub fn in_range(&self, pt: &Point, dist: f64, mut nodes: Vec<usize>) -> Vec<usize> {
        if dist.is_nan() || dist < 0.0 {
            return nodes;
        }
        self.in_range_recursive(self.root.as_deref(), pt, dist * dist, &mut nodes);
        nodes
    }

    fn in_range_recursive(
        &self,
        t: Option<&KDTreeNode>,
        pt: &Point,
        r2: f64,
        nodes: &mut Vec<usize>,
    ) {
        let t = match t {
            None => return,
            Some(t) => t,
        };

        let node_pt = &self.points[t.point_id];
        let diff = pt.0[t.split] - node_pt.0[t.split];

        let (this_side, other_side) = if diff < 0.0 {
            (t.left.as_deref(), t.right.as_deref())
        } else {
            (t.right.as_deref(), t.left.as_deref())
        };

        self.in_range_recursive(this_side, pt, r2, nodes);
        // The splitting plane is at least |diff| away, so nothing across it can
        // be closer than that
        if diff * diff <= r2 {
            if node_pt.sq_dist(pt) <= r2 {
                nodes.push(t.point_id);
                nodes.extend_from_slice(&t.equal_ids);
            }
            self.in_range_recursive(other_side, pt, r2, nodes);
        }
    }

    /// Finds all points lying inside the closed rectangle `rect`
    ///
    /// Results come out in tree traversal order.
    pub fn in_rect(&self, rect: &Rect, mut nodes: Vec<usize>) -> Vec<usize> {
        if !rect.min.iter().chain(rect.lengths.iter()).all(|v| v.is_finite())
            || rect.lengths.iter().any(|l| *l < 0.0)
        {
            return nodes;
        }
        let min = rect.min_point();
        let max = rect.max_point();
        self.in_rect_recursive(self.root.as_deref(), &min, &max, &mut nodes);
        nodes
    }

    fn in_rect_recursive(
        &self,
        t: Option<&KDTreeNode>,
        min: &Point,
        max: &Point,
        nodes: &mut Vec<usize>,
    ) {
        let t = match t {
            None => return,
            Some(t) => t,
        };

        let node_pt = &self.points[t.point_id];
        let pivot = node_pt.0[t.split];

        // Left subtree holds values strictly below the pivot, right the rest
        if min.0[t.split] < pivot {
            self.in_rect_recursive(t.left.as_deref(), min, max, nodes);
        }
        if node_pt.greater_eq(min) && node_pt.less_eq(max) {
            nodes.push(t.point_id);
            nodes.extend_from_slice(&t.equal_ids);
        }
        if max.0[t.split] >= pivot {
            self.in_rect_recursive(t.right.as_deref(), min, max, nodes);
        }
    }

    /// Returns the height of the K-D tree
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |r| r.height())
    }
}

impl KDTreeNode {
    fn height(&self) -> usize {
        let ht = self.left.as_ref().map_or(0, |l| l.height());
        let rht = self.right.as_ref().map_or(0, |r| r.height());
        ht.max(rht) + 1
    }
}

/// Creates a new K-D tree built from the given points
pub fn new_kd_tree(points: PointList) -> KDTree {
    let root = if points.is_empty() {
        None
    } else {
        build_tree(0, &pre_sort(&points))
    };

    KDTree { points, root }
}

/// Builds a tree node by finding the median point and recursively building left and right subtrees
fn build_tree(depth: usize, nodes: &PreSorted<'_>) -> Option<Box<KDTreeNode>> {
    let split = depth % 2;
    match nodes.cur[split].len() {
        0 => None,
        1 => Some(Box::new(KDTreeNode {
            point_id: nodes.cur[split][0],
            equal_ids: Vec::new(),
            split,
            left: None,
            right: None,
        })),
        _ => {
            let (med, equal, left, right) = nodes.split_med(split);
            Some(Box::new(KDTreeNode {
                point_id: med,
                equal_ids: equal,
                split,
                left: build_tree(depth + 1, &left),
                right: build_tree(depth + 1, &right),
            }))
        }
    }
}

/// Holds nodes pre-sorted on each dimension
struct PreSorted<'a> {
    points: &'a [Point],
    /// Currently sorted set of point IDs by dimension
    cur: [Vec<usize>; 2],
}

/// Pre-sorts nodes on each dimension
fn pre_sort(points: &[Point]) -> PreSorted<'_> {
    let mut p = PreSorted {
        points,
        cur: [Vec::new(), Vec::new()],
    };
    for i in 0..2 {
        p.cur[i] = (0..points.len()).collect();
        // Ties broken on the other dimension, then on index for a stable build
        p.cur[i].sort_by(|&a, &b| {
            points[a].0[i]
                .total_cmp(&points[b].0[i])
                .then(points[a].0[1 - i].total_cmp(&points[b].0[1 - i]))
                .then(a.cmp(&b))
        });
    }
    p
}

impl<'a> PreSorted<'a> {
    /// Returns the median node on the split dimension and two PreSorted structs
    /// that contain the nodes (still sorted on each dimension) that are less than
    /// and greater than or equal to the median node value on the given splitting dimension.
    fn split_med(&self, dim: usize) -> (usize, Vec<usize>, PreSorted<'a>, PreSorted<'a>) {
        let cur = &self.cur[dim];
        let mut m = cur.len() / 2;
        while m > 0 && self.points[cur[m - 1]].0[dim] == self.points[cur[m]].0[dim] {
            m -= 1;
        }
        let mut mh = m;
        while mh < cur.len() - 1 && self.points[cur[mh + 1]] == self.points[cur[m]] {
            mh += 1;
        }
        let med = cur[m];
        let equal = cur[m + 1..=mh].to_vec();
        let pivot = self.points[med].0[dim];

        let mut left = PreSorted {
            points: self.points,
            cur: [Vec::new(), Vec::new()],
        };
        left.cur[dim] = cur[..m].to_vec();

        let mut right = PreSorted {
            points: self.points,
            cur: [Vec::new(), Vec::new()],
        };
        right.cur[dim] = cur[mh + 1..].to_vec();

        let other = 1 - dim;
        left.cur[other] = Vec::with_capacity(self.cur[other].len());
        right.cur[other] = Vec::with_capacity(self.cur[other].len());

        for &n in &self.cur[other] {
            if n == med || equal.contains(&n) {
                continue;
            }
            if self.points[n].0[dim] < pivot {
                left.cur[other].push(n);
            } else {
                right.cur[other].push(n);
            }
        }

        (med, equal, left, right)
    }
}
