//! Bounding boxes for coarse pre-filtering.
//!
//! A box is a cheap first pass before the exact haversine check. Near the poles
//! and the antimeridian it is deliberately generous, never exact.

use crate::{Coordinate, EARTH_RADIUS_KM};
use serde::{Deserialize, Serialize};

/// Approximate kilometers per degree of latitude.
pub const KM_PER_DEGREE_LATITUDE: f64 = 111.0;

/// Axis-aligned latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Returns true if the coordinate lies inside the box (edges inclusive).
    #[inline]
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.latitude >= self.min_lat
            && coord.latitude <= self.max_lat
            && coord.longitude >= self.min_lon
            && coord.longitude <= self.max_lon
    }
}

/// Calculates a bounding box of `radius_km` around `center`.
///
/// 1° latitude ≈ 111 km; 1° longitude ≈ 111 km × cos(latitude). When the
/// corrected longitude span reaches the antimeridian (or the pole, where the
/// cosine vanishes) the box covers every longitude.
///
/// # Example
/// ```
/// use foodshare_geo::{calculate_bounding_box, Coordinate};
///
/// let bbox = calculate_bounding_box(&Coordinate::new(40.7128, -74.0060), 10.0);
/// assert!(bbox.contains(&Coordinate::new(40.71, -74.0)));
/// assert!(!bbox.contains(&Coordinate::new(50.0, -80.0)));
/// ```
pub fn calculate_bounding_box(center: &Coordinate, radius_km: f64) -> BoundingBox {
    let radius_km = radius_km.max(0.0);
    let lat_delta = radius_km / KM_PER_DEGREE_LATITUDE;

    let min_lat = (center.latitude - lat_delta).max(-90.0);
    let max_lat = (center.latitude + lat_delta).min(90.0);

    let cos_lat = center.latitude.to_radians().cos().abs();
    let lon_delta = radius_km / (KM_PER_DEGREE_LATITUDE * cos_lat);

    let (min_lon, max_lon) = if !lon_delta.is_finite()
        || center.longitude - lon_delta < -180.0
        || center.longitude + lon_delta > 180.0
    {
        (-180.0, 180.0)
    } else {
        (center.longitude - lon_delta, center.longitude + lon_delta)
    };

    BoundingBox { min_lat, max_lat, min_lon, max_lon }
}

/// Degrees of slack added on every side of a covering box.
const COVERING_PAD_DEGREES: f64 = 1e-9;

/// Smallest box guaranteed to contain every point within `radius_km` of `center`.
///
/// Unlike [`calculate_bounding_box`] this uses the exact spherical longitude
/// offset `asin(sin(r/R) / cos(lat))`, and covers every longitude once the
/// radius reaches a pole or the antimeridian.
pub(crate) fn covering_box(center: &Coordinate, radius_km: f64) -> BoundingBox {
    let angular = radius_km.max(0.0) / EARTH_RADIUS_KM;
    let lat_delta = angular.to_degrees() + COVERING_PAD_DEGREES;

    let min_lat = center.latitude - lat_delta;
    let max_lat = center.latitude + lat_delta;
    let full = BoundingBox {
        min_lat: min_lat.max(-90.0),
        max_lat: max_lat.min(90.0),
        min_lon: -180.0,
        max_lon: 180.0,
    };

    if angular >= std::f64::consts::PI || min_lat <= -90.0 || max_lat >= 90.0 {
        return full;
    }

    let ratio = angular.sin() / center.latitude.to_radians().cos();
    if !ratio.is_finite() || ratio >= 1.0 {
        return full;
    }
    let lon_delta = ratio.asin().to_degrees() + COVERING_PAD_DEGREES;

    if center.longitude - lon_delta < -180.0 || center.longitude + lon_delta > 180.0 {
        return full;
    }

    BoundingBox {
        min_lon: center.longitude - lon_delta,
        max_lon: center.longitude + lon_delta,
        ..full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NYC: Coordinate = Coordinate { latitude: 40.7128, longitude: -74.0060 };

    #[test]
    fn test_bounding_box_size() {
        let bbox = calculate_bounding_box(&NYC, 10.0);

        assert!(bbox.min_lat < NYC.latitude && bbox.max_lat > NYC.latitude);
        assert!(bbox.min_lon < NYC.longitude && bbox.max_lon > NYC.longitude);

        // 20km / 111km per degree = ~0.18 degrees
        let lat_span = bbox.max_lat - bbox.min_lat;
        assert!((lat_span - 20.0 / 111.0).abs() < 1e-9);

        // Longitude span is wider than latitude span away from the equator
        let lon_span = bbox.max_lon - bbox.min_lon;
        assert!(lon_span > lat_span);
    }

    #[test]
    fn test_equator_box_is_square() {
        let bbox = calculate_bounding_box(&Coordinate::new(0.0, 0.0), 111.0);
        assert!((bbox.max_lat - 1.0).abs() < 1e-9);
        assert!((bbox.max_lon - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pole_covers_all_longitudes() {
        let bbox = calculate_bounding_box(&Coordinate::new(90.0, 10.0), 50.0);
        assert_eq!(bbox.max_lat, 90.0);
        assert_eq!((bbox.min_lon, bbox.max_lon), (-180.0, 180.0));
    }

    #[test]
    fn test_antimeridian_widens() {
        let bbox = calculate_bounding_box(&Coordinate::new(0.0, 179.9), 50.0);
        assert_eq!((bbox.min_lon, bbox.max_lon), (-180.0, 180.0));
    }

    #[test]
    fn test_covering_box_uses_spherical_longitude_offset() {
        let center = Coordinate::new(60.0, 0.0);
        let target = Coordinate::new(60.7, 18.1);
        assert!(crate::haversine_distance(&center, &target) < 1000.0);

        assert!(!calculate_bounding_box(&center, 1000.0).contains(&target));
        assert!(covering_box(&center, 1000.0).contains(&target));
    }

    #[test]
    fn test_covering_box_over_pole_spans_all_longitudes() {
        let bbox = covering_box(&Coordinate::new(89.5, 0.0), 100.0);
        assert_eq!(bbox.max_lat, 90.0);
        assert_eq!((bbox.min_lon, bbox.max_lon), (-180.0, 180.0));
    }

    #[test]
    fn test_covering_box_stays_tight_at_city_scale() {
        let bbox = covering_box(&NYC, 10.0);
        assert!(bbox.max_lon - bbox.min_lon < 0.3);
        assert!(bbox.contains(&NYC));
    }

    #[test]
    fn test_point_within_bbox() {
        let bbox = calculate_bounding_box(&NYC, 10.0);

        assert!(bbox.contains(&NYC));
        assert!(bbox.contains(&Coordinate::new(40.71, -74.0)));
        assert!(!bbox.contains(&Coordinate::new(50.0, -80.0)));
    }
}
