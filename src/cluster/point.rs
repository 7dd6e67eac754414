/// Point represents a geographic coordinate (longitude, latitude)
///
/// The point is stored as [longitude, latitude] where:
/// - `[0]` is longitude
/// - `[1]` is latitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub [f64; 2]);

/// PointList is a collection of Points
pub type PointList = Vec<Point>;

/// Cluster represents a result of one clustering run
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Cluster ID, 0-based in discovery order
    pub c: usize,
    /// Indices of points belonging to this cluster
    pub points: Vec<usize>,
}

/// Axis-aligned rectangle in degrees: min corner plus extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Min corner as [longitude, latitude]
    pub min: [f64; 2],
    /// Width (longitude span) and height (latitude span)
    pub lengths: [f64; 2],
}

impl Point {
    pub fn lng(&self) -> f64 {
        self.0[0]
    }

    pub fn lat(&self) -> f64 {
        self.0[1]
    }

    /// Returns squared euclidean distance (in degrees) between two points
    pub fn sq_dist(&self, b: &Point) -> f64 {
        use super::distance::euclidean_sq;
        euclidean_sq(self, b)
    }

    /// Checks if this point is less than or equal to another point
    /// (a <= b)
    pub fn less_eq(&self, b: &Point) -> bool {
        self.0[0] <= b.0[0] && self.0[1] <= b.0[1]
    }

    /// Checks if this point is greater than or equal to another point
    /// (a >= b)
    pub fn greater_eq(&self, b: &Point) -> bool {
        self.0[0] >= b.0[0] && self.0[1] >= b.0[1]
    }
}

impl Rect {
    pub fn new(min: Point, lengths: [f64; 2]) -> Self {
        Rect {
            min: min.0,
            lengths,
        }
    }

    pub fn min_point(&self) -> Point {
        Point(self.min)
    }

    pub fn max_point(&self) -> Point {
        Point([self.min[0] + self.lengths[0], self.min[1] + self.lengths[1]])
    }

    /// Finite corner and strictly positive extents on both axes
    pub fn is_well_formed(&self) -> bool {
        self.min.iter().all(|v| v.is_finite())
            && self.lengths.iter().all(|l| l.is_finite() && *l > 0.0)
    }

    /// Grows the rectangle by `eps` on every side
    pub fn expand(&self, eps: f64) -> Rect {
        Rect {
            min: [self.min[0] - eps, self.min[1] - eps],
            lengths: [self.lengths[0] + 2.0 * eps, self.lengths[1] + 2.0 * eps],
        }
    }
}

impl Cluster {
    /// Calculates center and cluster bounds
    ///
    /// Returns `(center, min, max)` where:
    /// - `center` is the mean of member coordinates
    /// - `min` is the minimum point (bottom-left)
    /// - `max` is the maximum point (top-right)
    ///
    /// Returns `None` for an empty cluster.
    pub fn centroid_and_bounds(&self, points: &[Point]) -> Option<(Point, Point, Point)> {
        if self.points.is_empty() {
            return None;
        }

        let mut min = Point([f64::INFINITY, f64::INFINITY]);
        let mut max = Point([f64::NEG_INFINITY, f64::NEG_INFINITY]);
        let mut center = Point([0.0, 0.0]);

        for &i in &self.points {
            let pt = points[i];

            for j in 0..2 {
                center.0[j] += pt.0[j];
                min.0[j] = min.0[j].min(pt.0[j]);
                max.0[j] = max.0[j].max(pt.0[j]);
            }
        }

        for j in 0..2 {
            center.0[j] /= self.points.len() as f64;
        }

        Some((center, min, max))
    }
}
