//! Query understanding and relevance ranking for FoodShare search.
//!
//! This crate provides:
//! - Query normalization, tokenization and intent extraction
//! - Vocabulary-based spelling correction and synonym expansion
//! - Levenshtein edit distance and fuzzy similarity
//! - Additive multi-signal relevance ranking with optional parallelism
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use foodshare_search::{prepare_query, rank_results, SearchUserContext};
//!
//! let analysis = prepare_query("vegn bread near me");
//! assert_eq!(analysis.spelling.corrected_query, "vegan bread near me");
//!
//! let context = SearchUserContext::anonymous(Utc::now());
//! let ranked = rank_results(&analysis.parsed, &[], &context);
//! assert!(ranked.is_empty());
//! ```

mod error;
mod fuzzy;
mod query;
mod relevance;
mod spelling;
mod synonyms;
mod vocabulary;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{Result, SearchError, SearchErrorCode};
pub use fuzzy::{fuzzy_match, levenshtein_distance, similarity, FuzzyMatch};
pub use query::{
    normalize_query, parse_query, prepare_query, tokenize, LocationIntent, ParsedQuery,
    QueryAnalysis, TimeIntent,
};
pub use relevance::{
    find_matched_terms, rank_results, RankedResult, RankingConfig, RelevanceRanker,
    RelevanceScore, SearchUserContext, SearchableItem,
};
pub use spelling::{
    correct_spelling, Correction, SpellingCorrection, SpellingCorrector, MAX_CORRECTION_DISTANCE,
};
pub use synonyms::expand_synonyms;
