#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::viewport::parse_viewport;

    fn component_of(err: Error) -> String {
        match err {
            Error::MalformedInput { component, .. } => component,
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_expanded_rect() {
        let rect = parse_viewport("40.70,-74.01|40.75,-73.95").unwrap();

        let dist_lat = 40.75 - 40.70;
        let dist_lng = -73.95 - -74.01;
        assert_eq!(rect.min[0], -74.01 - dist_lng / 10.0);
        assert_eq!(rect.min[1], 40.70 - dist_lat / 10.0);
        assert_eq!(rect.lengths[0], dist_lng * 1.2);
        assert_eq!(rect.lengths[1], dist_lat * 1.2);
    }

    #[test]
    fn test_reversed_corners() {
        let a = parse_viewport("40.7,-74.0|40.8,-73.9").unwrap();
        let b = parse_viewport("40.8,-73.9|40.7,-74.0").unwrap();
        let c = parse_viewport("40.8,-74.0|40.7,-73.9").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert!(a.is_well_formed());
    }

    #[test]
    fn test_whitespace_tolerated() {
        let a = parse_viewport("40.7, -74.0|40.8, -73.9").unwrap();
        let b = parse_viewport("40.7,-74.0|40.8,-73.9").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wrong_corner_count() {
        assert_eq!(component_of(parse_viewport("40.7,-74.0").unwrap_err()), "viewport");
        assert_eq!(
            component_of(parse_viewport("40.7,-74.0|40.8,-73.9|1,2").unwrap_err()),
            "viewport"
        );
        assert_eq!(component_of(parse_viewport("").unwrap_err()), "viewport");
    }

    #[test]
    fn test_wrong_field_count() {
        assert_eq!(
            component_of(parse_viewport("40.7|40.8,-73.9").unwrap_err()),
            "sw corner"
        );
        assert_eq!(
            component_of(parse_viewport("40.7,-74.0|40.8,-73.9,5").unwrap_err()),
            "ne corner"
        );
    }

    #[test]
    fn test_non_numeric_component_is_named() {
        assert_eq!(
            component_of(parse_viewport("abc,-74.0|40.8,-73.9").unwrap_err()),
            "swLat"
        );
        assert_eq!(
            component_of(parse_viewport("40.7,x|40.8,-73.9").unwrap_err()),
            "swLng"
        );
        assert_eq!(
            component_of(parse_viewport("40.7,-74.0|,-73.9").unwrap_err()),
            "neLat"
        );
        assert_eq!(
            component_of(parse_viewport("40.7,-74.0|40.8,NaN").unwrap_err()),
            "neLng"
        );
    }

    #[test]
    fn test_zero_area_rejected() {
        let err = parse_viewport("40.7,-74.0|40.7,-73.9").unwrap_err();
        assert_eq!(component_of(err), "viewport");
        assert!(parse_viewport("40.7,-74.0|40.7,-74.0").is_err());
    }
}
