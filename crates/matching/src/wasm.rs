//! WASM bindings for match scoring.
//!
//! Requests and responses are JSON documents with array-valued lists.

use crate::{
    calculate_match_score, evaluate_dietary_compatibility, find_best_matches, CriteriaPreset,
    FactorScores, MatchCandidate, MatchingContext, MatchingError, ScoringPolicy,
};
use wasm_bindgen::prelude::*;

fn to_js_error(err: MatchingError) -> JsValue {
    JsValue::from_str(&format!("E{}: {}", err.code() as u32, err))
}

fn from_json<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| to_js_error(e.into()))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| to_js_error(e.into()))
}

/// Combines a JSON `FactorScores` object under the named preset.
#[wasm_bindgen]
pub fn match_score(factors_json: &str, preset: &str) -> Result<String, JsValue> {
    let preset: CriteriaPreset = preset.parse().map_err(to_js_error)?;
    let factors: FactorScores = from_json(factors_json)?;
    to_json(&calculate_match_score(&factors, preset))
}

/// Evaluates dietary compatibility; each argument is a JSON array of tags.
#[wasm_bindgen]
pub fn dietary_compatibility(
    candidate_json: &str,
    required_json: &str,
    preferred_json: &str,
    excluded_json: &str,
) -> Result<String, JsValue> {
    let candidate: Vec<String> = from_json(candidate_json)?;
    let required: Vec<String> = from_json(required_json)?;
    let preferred: Vec<String> = from_json(preferred_json)?;
    let excluded: Vec<String> = from_json(excluded_json)?;
    let policy = ScoringPolicy::default();
    to_json(&evaluate_dietary_compatibility(
        &candidate,
        &required,
        &preferred,
        &excluded,
        &policy.dietary,
    ))
}

/// Ranks a JSON array of candidates against a JSON context.
///
/// `max_results` of 0 returns every candidate above the floor.
#[wasm_bindgen]
pub fn best_matches(
    candidates_json: &str,
    context_json: &str,
    preset: &str,
    max_results: usize,
) -> Result<String, JsValue> {
    let preset: CriteriaPreset = preset.parse().map_err(to_js_error)?;
    let candidates: Vec<MatchCandidate> = from_json(candidates_json)?;
    let context: MatchingContext = from_json(context_json)?;
    let max = if max_results == 0 { candidates.len() } else { max_results };
    to_json(&find_best_matches(
        &candidates,
        &context,
        preset,
        max,
        &ScoringPolicy::default(),
    ))
}
