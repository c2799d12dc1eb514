//! Weighted match scoring for FoodShare recommendations.
//!
//! This crate provides:
//! - Set-based dietary compatibility evaluation
//! - Named weighting presets as a closed enum
//! - Per-factor scoring (reputation, response time, activity, category)
//! - Best-match search over a candidate batch with optional parallelism
//! - WASM bindings for browser usage
//!
//! Every function is pure: no I/O, no logging, no state kept between calls.
//!
//! # Example
//!
//! ```
//! use foodshare_matching::{calculate_match_score, CriteriaPreset, FactorScores};
//!
//! let factors = FactorScores { proximity: 0.9, ..FactorScores::uniform(0.5) };
//! let result = calculate_match_score(&factors, CriteriaPreset::FoodPickup);
//! assert!(result.passes_threshold);
//! ```

mod dietary;
mod error;
mod matcher;
mod policy;
mod preset;
mod scorer;

#[cfg(feature = "wasm")]
mod wasm;

pub use dietary::{evaluate_dietary_compatibility, DietaryCompatibility, DietaryViolation};
pub use error::{MatchingError, MatchingErrorCode, Result};
pub use matcher::{find_best_matches, score_candidate, MatchCandidate, MatchEntry, MatchingContext};
pub use policy::{DietaryBlend, ResponseTimeCurve, ScoringPolicy};
pub use preset::{CriteriaPreset, FactorWeights};
pub use scorer::{
    calculate_activity_score, calculate_category_score, calculate_match_score,
    calculate_reputation_score, calculate_response_time_score, FactorScores, MatchScoreResult,
    MAX_RATING,
};
