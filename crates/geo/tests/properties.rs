//! Property tests for distance and proximity invariants.

use foodshare_geo::{
    calculate_bounding_box, haversine_distance, items_within_radius, score_location_proximity,
    Coordinate, LocatedItem,
};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(a in coordinate()) {
        prop_assert_eq!(haversine_distance(&a, &a), 0.0);
    }

    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        let ab = haversine_distance(&a, &b);
        let ba = haversine_distance(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-6);
        prop_assert!(ab >= 0.0);
    }

    #[test]
    fn proximity_score_is_bounded(a in coordinate(), b in coordinate(), max in 0.0f64..5000.0) {
        let result = score_location_proximity(&a, &b, max);
        prop_assert!((0.0..=1.0).contains(&result.score));
        prop_assert_eq!(result.is_within_range, result.distance_km <= max);
    }

    #[test]
    fn proximity_never_increases_with_distance(
        origin in coordinate(),
        max in 1.0f64..500.0,
        near in 0.0f64..5.0,
        extra in 0.0f64..5.0,
    ) {
        // Move due north along a meridian, away from the pole.
        let lat = origin.latitude.clamp(-80.0, 70.0);
        let user = Coordinate::new(lat, origin.longitude);
        let closer = Coordinate::new(lat + near, origin.longitude);
        let farther = Coordinate::new(lat + near + extra, origin.longitude);

        let s_closer = score_location_proximity(&user, &closer, max).score;
        let s_farther = score_location_proximity(&user, &farther, max).score;
        prop_assert!(s_farther <= s_closer + 1e-12);
    }

    #[test]
    fn bounding_box_contains_center(center in coordinate(), radius in 0.0f64..1000.0) {
        let bbox = calculate_bounding_box(&center, radius);
        prop_assert!(bbox.contains(&center));
    }

    #[test]
    fn radius_search_keeps_every_point_in_range(
        user in coordinate(),
        points in prop::collection::vec(coordinate(), 0..30),
        radius in 1.0f64..3000.0,
    ) {
        let items: Vec<LocatedItem> = points
            .iter()
            .enumerate()
            .map(|(i, p)| LocatedItem { id: format!("{i:03}"), location: Some(*p) })
            .collect();

        let expected = points.iter().filter(|p| haversine_distance(&user, p) <= radius).count();
        prop_assert_eq!(items_within_radius(&user, &items, radius).len(), expected);
    }
}
