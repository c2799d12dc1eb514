//! Great-circle distance on a spherical Earth.

use crate::Coordinate;

/// Mean Earth radius used by every distance in the engine.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const EARTH_RADIUS_M: f64 = EARTH_RADIUS_KM * 1000.0;

/// Central angle in radians between two points (haversine form).
fn central_angle(from: &Coordinate, to: &Coordinate) -> f64 {
    let (phi1, lambda1) = from.to_radians();
    let (phi2, lambda2) = to.to_radians();

    let half_dphi = ((phi2 - phi1) / 2.0).sin();
    let half_dlambda = ((lambda2 - lambda1) / 2.0).sin();
    let h = half_dphi * half_dphi + phi1.cos() * phi2.cos() * half_dlambda * half_dlambda;

    // h drifts just outside [0, 1] for antipodal inputs
    let h = h.clamp(0.0, 1.0);
    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Distance in kilometers between two coordinates.
///
/// Symmetric, and exactly zero for identical points.
///
/// # Example
/// ```
/// use foodshare_geo::{haversine_distance, Coordinate};
///
/// let shoreditch = Coordinate::new(51.5265, -0.0798);
/// let brixton = Coordinate::new(51.4613, -0.1156);
///
/// let km = haversine_distance(&shoreditch, &brixton);
/// assert!((km - 7.7).abs() < 0.2);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    EARTH_RADIUS_KM * central_angle(from, to)
}

/// [`haversine_distance`] over raw degrees.
#[inline]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine_distance(&Coordinate::new(lat1, lon1), &Coordinate::new(lat2, lon2))
}

#[inline]
pub fn haversine_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    EARTH_RADIUS_M * central_angle(from, to)
}

/// Equirectangular approximation in kilometers.
///
/// Cheaper than the haversine form and close to it over city-scale
/// distances; error grows with distance and latitude.
#[inline]
pub fn approximate_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let (phi1, lambda1) = from.to_radians();
    let (phi2, lambda2) = to.to_radians();

    let east = (lambda2 - lambda1) * ((phi1 + phi2) / 2.0).cos();
    let north = phi2 - phi1;
    EARTH_RADIUS_KM * east.hypot(north)
}
