//! Geospatial math for FoodShare matching and search.
//!
//! This crate provides:
//! - Haversine distance calculations
//! - Linear proximity scoring against a maximum distance
//! - Bounding boxes for coarse candidate pre-filtering
//! - Batch proximity scoring with optional parallelism
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use foodshare_geo::{haversine_distance, score_location_proximity, Coordinate};
//!
//! let coord1 = Coordinate::new(52.5200, 13.4050); // Berlin
//! let coord2 = Coordinate::new(48.8566, 2.3522);  // Paris
//!
//! let distance_km = haversine_distance(&coord1, &coord2);
//! assert!((distance_km - 878.0).abs() < 10.0); // ~878 km
//!
//! let proximity = score_location_proximity(&coord1, &coord2, 1000.0);
//! assert!(proximity.is_within_range);
//! ```

mod bbox;
mod error;
mod haversine;
mod proximity;
pub mod batch;

#[cfg(feature = "wasm")]
mod wasm;

pub use batch::{items_within_radius, score_proximities, LocatedItem, ProximityResult};
pub use bbox::{calculate_bounding_box, BoundingBox, KM_PER_DEGREE_LATITUDE};
pub use error::{GeoError, GeoErrorCode, Result};
pub use haversine::{
    approximate_distance, distance_km, haversine_distance, haversine_distance_meters,
    EARTH_RADIUS_KM, EARTH_RADIUS_M,
};
pub use proximity::{score_location_proximity, ProximityScore};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// No range checks are applied; use [`Coordinate::try_new`] at validation
    /// boundaries.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a coordinate, rejecting non-finite or out-of-range values.
    ///
    /// # Example
    /// ```
    /// use foodshare_geo::Coordinate;
    ///
    /// assert!(Coordinate::try_new(40.7128, -74.0060).is_ok());
    /// assert!(Coordinate::try_new(91.0, 0.0).is_err());
    /// ```
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        let coord = Self::new(latitude, longitude);
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(GeoError::InvalidCoordinate(format!(
                "latitude {latitude}, longitude {longitude}"
            )))
        }
    }

    /// Returns true if the coordinate has finite, in-range values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}
