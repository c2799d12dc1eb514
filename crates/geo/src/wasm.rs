//! WASM bindings for the geo crate.
//!
//! Structured values cross the boundary as JSON documents; lists are JSON
//! arrays, never delimited strings.

use crate::{
    batch::{items_within_radius, score_proximities, LocatedItem},
    calculate_bounding_box, distance_km, score_location_proximity, Coordinate, GeoError,
};
use wasm_bindgen::prelude::*;

fn to_js_error(err: GeoError) -> JsValue {
    JsValue::from_str(&format!("E{}: {}", err.code() as u32, err))
}

fn parse_items(items_json: &str) -> Result<Vec<LocatedItem>, JsValue> {
    serde_json::from_str(items_json).map_err(|e| to_js_error(e.into()))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| to_js_error(e.into()))
}

/// Great-circle distance in kilometers.
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    distance_km(lat1, lng1, lat2, lng2)
}

/// Proximity score as a JSON object `{distance_km, score, is_within_range}`.
#[wasm_bindgen]
pub fn proximity(
    user_lat: f64,
    user_lng: f64,
    target_lat: f64,
    target_lng: f64,
    max_distance_km: f64,
) -> Result<String, JsValue> {
    let user = Coordinate::try_new(user_lat, user_lng).map_err(to_js_error)?;
    let target = Coordinate::try_new(target_lat, target_lng).map_err(to_js_error)?;
    to_json(&score_location_proximity(&user, &target, max_distance_km))
}

/// Bounding box as a JSON object `{min_lat, max_lat, min_lon, max_lon}`.
#[wasm_bindgen]
pub fn bounding_box(center_lat: f64, center_lng: f64, radius_km: f64) -> Result<String, JsValue> {
    let center = Coordinate::try_new(center_lat, center_lng).map_err(to_js_error)?;
    to_json(&calculate_bounding_box(&center, radius_km))
}

/// Scores a JSON array of `{id, location}` items against the user location.
#[wasm_bindgen]
pub fn batch_proximity(
    user_lat: f64,
    user_lng: f64,
    items_json: &str,
    max_distance_km: f64,
) -> Result<String, JsValue> {
    let user = Coordinate::try_new(user_lat, user_lng).map_err(to_js_error)?;
    let items = parse_items(items_json)?;
    to_json(&score_proximities(&user, &items, max_distance_km))
}

/// Items within `radius_km`, closest first.
#[wasm_bindgen]
pub fn filter_within_radius(
    user_lat: f64,
    user_lng: f64,
    items_json: &str,
    radius_km: f64,
) -> Result<String, JsValue> {
    let user = Coordinate::try_new(user_lat, user_lng).map_err(to_js_error)?;
    let items = parse_items(items_json)?;
    to_json(&items_within_radius(&user, &items, radius_km))
}
