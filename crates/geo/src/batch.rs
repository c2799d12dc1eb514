//! Batch proximity calculations with optional parallelism.
//!
//! A batch is scored in one call so that the engine boundary is crossed once
//! per request rather than once per item.

use crate::proximity::proximity_from_distance;
use crate::bbox::covering_box;
use crate::{haversine_distance, Coordinate, ProximityScore};
use serde::{Deserialize, Serialize};

/// Input item for batch proximity scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocatedItem {
    /// Item ID
    pub id: String,
    /// Item location, if known
    #[serde(default)]
    pub location: Option<Coordinate>,
}

/// Proximity of a single item to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximityResult {
    /// The item ID
    pub id: String,
    /// `None` when the item has no location
    pub proximity: Option<ProximityScore>,
}

/// Scores every item's proximity to the user, preserving input order.
///
/// # Example
/// ```
/// use foodshare_geo::{score_proximities, Coordinate, LocatedItem};
///
/// let items = vec![
///     LocatedItem { id: "berlin".into(), location: Some(Coordinate::new(52.5200, 13.4050)) },
///     LocatedItem { id: "unknown".into(), location: None },
/// ];
///
/// let results = score_proximities(&Coordinate::new(52.52, 13.40), &items, 10.0);
/// assert_eq!(results.len(), 2);
/// assert!(results[1].proximity.is_none());
/// ```
pub fn score_proximities(
    user: &Coordinate,
    items: &[LocatedItem],
    max_distance_km: f64,
) -> Vec<ProximityResult> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .par_iter()
            .map(|item| score_single(user, item, max_distance_km))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .map(|item| score_single(user, item, max_distance_km))
            .collect()
    }
}

/// Returns the items within `radius_km`, closest first.
///
/// Items are pre-filtered with a box that covers the whole radius, including
/// across a pole, and then checked with the exact haversine distance. Equal distances are ordered by item ID. Items without a
/// location are dropped.
pub fn items_within_radius(
    user: &Coordinate,
    items: &[LocatedItem],
    radius_km: f64,
) -> Vec<ProximityResult> {
    let bbox = covering_box(user, radius_km);

    let mut results: Vec<ProximityResult> = items
        .iter()
        .filter(|item| item.location.is_some_and(|loc| bbox.contains(&loc)))
        .map(|item| score_single(user, item, radius_km))
        .filter(|r| r.proximity.is_some_and(|p| p.is_within_range))
        .collect();

    results.sort_by(|a, b| distance_of(a).total_cmp(&distance_of(b)).then_with(|| a.id.cmp(&b.id)));

    results
}

#[inline]
fn score_single(user: &Coordinate, item: &LocatedItem, max_distance_km: f64) -> ProximityResult {
    let proximity = item
        .location
        .map(|loc| proximity_from_distance(haversine_distance(user, &loc), max_distance_km));

    ProximityResult {
        id: item.id.clone(),
        proximity,
    }
}

fn distance_of(result: &ProximityResult) -> f64 {
    result.proximity.map_or(f64::INFINITY, |p| p.distance_km)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_items() -> Vec<LocatedItem> {
        vec![
            LocatedItem { id: "berlin".into(), location: Some(Coordinate::new(52.5200, 13.4050)) },
            LocatedItem { id: "paris".into(), location: Some(Coordinate::new(48.8566, 2.3522)) },
            LocatedItem { id: "london".into(), location: Some(Coordinate::new(51.5074, -0.1276)) },
            LocatedItem { id: "nowhere".into(), location: None },
        ]
    }

    // Frankfurt, roughly between Berlin and Paris
    const FRANKFURT: Coordinate = Coordinate { latitude: 50.1109, longitude: 8.6821 };

    #[test]
    fn test_batch_preserves_order() {
        let items = create_test_items();
        let results = score_proximities(&FRANKFURT, &items, 1000.0);

        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["berlin", "paris", "london", "nowhere"]);

        let berlin = results[0].proximity.unwrap();
        assert!(berlin.distance_km > 400.0 && berlin.distance_km < 450.0);
        assert!(results[3].proximity.is_none());
    }

    #[test]
    fn test_radius_filter_sorted() {
        let items = create_test_items();
        let results = items_within_radius(&FRANKFURT, &items, 500.0);

        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["berlin", "paris"]);
    }

    #[test]
    fn test_radius_ties_break_by_id() {
        let here = Coordinate::new(10.0, 10.0);
        let items = vec![
            LocatedItem { id: "b".into(), location: Some(here) },
            LocatedItem { id: "a".into(), location: Some(here) },
        ];
        let results = items_within_radius(&here, &items, 1.0);
        assert_eq!(results[0].id, "a");
        assert_eq!(results[1].id, "b");
    }

    #[test]
    fn test_radius_keeps_points_beyond_flat_longitude_delta() {
        let user = Coordinate::new(60.0, 0.0);
        let items = vec![LocatedItem { id: "east".into(), location: Some(Coordinate::new(60.7, 18.1)) }];

        let results = items_within_radius(&user, &items, 1000.0);
        assert_eq!(results.len(), 1);
        assert!(results[0].proximity.unwrap().distance_km < 1000.0);
    }

    #[test]
    fn test_radius_crossing_pole() {
        let user = Coordinate::new(89.5, 0.0);
        let items = vec![LocatedItem { id: "far-side".into(), location: Some(Coordinate::new(89.7, 180.0)) }];

        let results = items_within_radius(&user, &items, 100.0);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "far-side");
    }

    #[test]
    fn test_empty_batch() {
        assert!(score_proximities(&FRANKFURT, &[], 10.0).is_empty());
        assert!(items_within_radius(&FRANKFURT, &[], 10.0).is_empty());
    }
}
