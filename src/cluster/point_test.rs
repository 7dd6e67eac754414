#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_centroid_and_bounds() {
        let points = vec![
            Point([30.244759, 59.955982]),
            Point([30.24472, 59.955975]),
            Point([30.244358, 59.96698]),
        ];
        let c1 = Cluster {
            c: 0,
            points: vec![0, 1, 2],
        };

        let (center, min, max) = c1.centroid_and_bounds(&points).unwrap();
        assert!((center.0[0] - 30.244612333333333).abs() < 1e-12);
        assert!((center.0[1] - 59.95964566666667).abs() < 1e-12);
        assert_eq!(min.0[0], 30.244358);
        assert_eq!(min.0[1], 59.955975);
        assert_eq!(max.0[0], 30.244759);
        assert_eq!(max.0[1], 59.96698);
    }

    #[test]
    fn test_centroid_single_member() {
        let points = vec![Point([-73.98, 40.75]), Point([-73.9, 40.8])];
        let c = Cluster {
            c: 0,
            points: vec![1],
        };
        let (center, min, max) = c.centroid_and_bounds(&points).unwrap();
        assert_eq!(center, points[1]);
        assert_eq!(min, points[1]);
        assert_eq!(max, points[1]);
    }

    #[test]
    fn test_centroid_empty_cluster() {
        let c = Cluster {
            c: 0,
            points: vec![],
        };
        assert!(c.centroid_and_bounds(&[]).is_none());
    }

    #[test]
    fn test_rect_expand() {
        let r = Rect::new(Point([0.0, 0.0]), [1.0, 2.0]).expand(0.5);
        assert_eq!(r.min_point(), Point([-0.5, -0.5]));
        assert_eq!(r.max_point(), Point([1.5, 2.5]));
    }

    #[test]
    fn test_rect_well_formed() {
        assert!(Rect::new(Point([0.0, 0.0]), [1.0, 1.0]).is_well_formed());
        assert!(!Rect::new(Point([0.0, 0.0]), [0.0, 1.0]).is_well_formed());
        assert!(!Rect::new(Point([0.0, 0.0]), [-1.0, 1.0]).is_well_formed());
        assert!(!Rect::new(Point([f64::NAN, 0.0]), [1.0, 1.0]).is_well_formed());
    }
}
