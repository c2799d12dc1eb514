//! Linear proximity scoring.

use crate::{haversine_distance, Coordinate};
use serde::{Deserialize, Serialize};

/// How close a target is to a user, relative to a maximum distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProximityScore {
    /// Great-circle distance in kilometers
    pub distance_km: f64,
    /// 1.0 at the user's position, falling linearly to 0.0 at the maximum distance
    pub score: f64,
    /// True when `distance_km <= max_distance_km` (boundary inclusive)
    pub is_within_range: bool,
}

/// Scores the proximity of `target` to `user`.
///
/// The score decreases linearly from 1.0 at distance 0 to 0.0 at
/// `max_distance_km` and is clamped to `[0, 1]` beyond that. A non-positive
/// maximum only scores an exact co-location.
///
/// # Example
/// ```
/// use foodshare_geo::{score_location_proximity, Coordinate};
///
/// let here = Coordinate::new(40.7128, -74.0060);
/// let result = score_location_proximity(&here, &here, 10.0);
/// assert_eq!(result.score, 1.0);
/// assert!(result.is_within_range);
/// ```
pub fn score_location_proximity(
    user: &Coordinate,
    target: &Coordinate,
    max_distance_km: f64,
) -> ProximityScore {
    let distance_km = haversine_distance(user, target);
    proximity_from_distance(distance_km, max_distance_km)
}

/// Proximity score for an already computed distance.
pub(crate) fn proximity_from_distance(distance_km: f64, max_distance_km: f64) -> ProximityScore {
    let score = if max_distance_km > 0.0 {
        (1.0 - distance_km / max_distance_km).clamp(0.0, 1.0)
    } else if distance_km == 0.0 {
        1.0
    } else {
        0.0
    };

    ProximityScore {
        distance_km,
        score,
        is_within_range: distance_km <= max_distance_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_is_inclusive_with_zero_score() {
        let result = proximity_from_distance(10.0, 10.0);
        assert_eq!(result.score, 0.0);
        assert!(result.is_within_range);
    }

    #[test]
    fn test_half_distance_scores_half() {
        let result = proximity_from_distance(5.0, 10.0);
        assert!((result.score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_beyond_range_clamps_to_zero() {
        let result = proximity_from_distance(25.0, 10.0);
        assert_eq!(result.score, 0.0);
        assert!(!result.is_within_range);
    }

    #[test]
    fn test_zero_max_distance() {
        assert_eq!(proximity_from_distance(0.0, 0.0).score, 1.0);
        assert!(proximity_from_distance(0.0, 0.0).is_within_range);
        assert_eq!(proximity_from_distance(0.1, 0.0).score, 0.0);
    }

    #[test]
    fn test_real_coordinates() {
        // Manhattan to Brooklyn, roughly 8 km apart
        let manhattan = Coordinate::new(40.7831, -73.9712);
        let brooklyn = Coordinate::new(40.6782, -73.9442);
        let result = score_location_proximity(&manhattan, &brooklyn, 20.0);
        assert!(result.distance_km > 10.0 && result.distance_km < 13.0);
        assert!(result.score > 0.3 && result.score < 0.6);
        assert!(result.is_within_range);
    }
}
