//! WASM bindings for search utilities.
//!
//! Structured values cross the boundary as JSON documents.

use crate::{
    levenshtein_distance, RankingConfig, RelevanceRanker, SearchError, SearchUserContext,
    SearchableItem,
};
use wasm_bindgen::prelude::*;

fn to_js_error(err: SearchError) -> JsValue {
    JsValue::from_str(&format!("E{}: {}", err.code() as u32, err))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| to_js_error(e.into()))
}

/// Parses a query into a JSON `ParsedQuery`.
#[wasm_bindgen]
pub fn parse_query(query: &str) -> Result<String, JsValue> {
    to_json(&crate::parse_query(query))
}

/// Spelling correction, synonym expansion and parse as a JSON `QueryAnalysis`.
#[wasm_bindgen]
pub fn prepare_query(query: &str) -> Result<String, JsValue> {
    to_json(&crate::prepare_query(query))
}

/// Ranks a JSON array of items for a query.
///
/// # Arguments
/// * `query` - Raw search text; it is prepared before ranking
/// * `items_json` - JSON array of `SearchableItem`
/// * `context_json` - JSON `SearchUserContext`
/// * `config_json` - JSON `RankingConfig`; empty string for defaults
/// * `max_results` - Maximum results to return (0 for all)
#[wasm_bindgen]
pub fn rank_items(
    query: &str,
    items_json: &str,
    context_json: &str,
    config_json: &str,
    max_results: usize,
) -> Result<String, JsValue> {
    let items: Vec<SearchableItem> =
        serde_json::from_str(items_json).map_err(|e| to_js_error(e.into()))?;
    let context: SearchUserContext =
        serde_json::from_str(context_json).map_err(|e| to_js_error(e.into()))?;
    let config = if config_json.trim().is_empty() {
        RankingConfig::default()
    } else {
        serde_json::from_str(config_json).map_err(|e| to_js_error(e.into()))?
    };
    config.validate().map_err(to_js_error)?;

    let parsed = crate::prepare_query(query).parsed;
    let mut ranked = RelevanceRanker::new(config).rank(&parsed, &items, &context);
    if max_results > 0 {
        ranked.truncate(max_results);
    }
    to_json(&ranked)
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein_distance(a, b)
}

/// Normalized similarity in `[0, 1]`.
#[wasm_bindgen]
pub fn fuzzy_similarity(a: &str, b: &str) -> f64 {
    crate::similarity(a, b)
}
