//! Named scoring configuration.
//!
//! Every curve the scorer applies is a value here rather than a constant buried
//! in a function body. The defaults reproduce the documented behaviour; callers
//! may load overrides from configuration files and must `validate()` them.

use crate::{MatchingError, Result};
use serde::{Deserialize, Serialize};

/// Weights blending required-tag satisfaction with preferred-tag credit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DietaryBlend {
    /// Share of the score earned by satisfying required tags
    pub required_weight: f64,
    /// Share of the score earned by matching preferred tags
    pub preferred_weight: f64,
}

impl Default for DietaryBlend {
    fn default() -> Self {
        Self {
            required_weight: 0.6,
            preferred_weight: 0.4,
        }
    }
}

impl DietaryBlend {
    /// Checks both weights are non-negative and sum to 1.0.
    pub fn validate(&self) -> Result<()> {
        if self.required_weight < 0.0 || self.preferred_weight < 0.0 {
            return Err(MatchingError::InvalidPolicy(
                "dietary blend weights must be non-negative".into(),
            ));
        }
        let sum = self.required_weight + self.preferred_weight;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(MatchingError::InvalidPolicy(format!(
                "dietary blend weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

/// Linear decay of the response-time factor.
///
/// 1.0 at or under `fast_minutes`, 0.0 at or beyond `slow_minutes`, linear in
/// between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTimeCurve {
    pub fast_minutes: f64,
    pub slow_minutes: f64,
}

impl Default for ResponseTimeCurve {
    fn default() -> Self {
        Self {
            fast_minutes: 15.0,
            slow_minutes: 180.0,
        }
    }
}

impl ResponseTimeCurve {
    /// Evaluates the curve for a response time in minutes.
    pub fn score(&self, minutes: f64) -> f64 {
        if minutes.is_nan() {
            return 0.0;
        }
        if minutes <= self.fast_minutes {
            return 1.0;
        }
        if minutes >= self.slow_minutes {
            return 0.0;
        }
        let span = self.slow_minutes - self.fast_minutes;
        (1.0 - (minutes - self.fast_minutes) / span).clamp(0.0, 1.0)
    }

    /// Checks the floor lies strictly below the ceiling.
    pub fn validate(&self) -> Result<()> {
        if !(self.fast_minutes >= 0.0 && self.fast_minutes < self.slow_minutes) {
            return Err(MatchingError::InvalidPolicy(format!(
                "response time floor ({}) must be non-negative and below the ceiling ({})",
                self.fast_minutes, self.slow_minutes
            )));
        }
        Ok(())
    }
}

/// Tunables shared by every preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    /// Added to the normalized rating of verified candidates, capped at 1.0
    pub verified_bonus: f64,
    /// Candidates scoring below this are never returned by `find_best_matches`
    pub min_match_score: f64,
    /// Distance at which the proximity factor reaches zero
    pub max_distance_km: f64,
    /// Category factor when the searcher has no category preference
    pub neutral_category_score: f64,
    pub response_time: ResponseTimeCurve,
    pub dietary: DietaryBlend,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            verified_bonus: 0.1,
            min_match_score: 0.3,
            max_distance_km: 10.0,
            neutral_category_score: 0.5,
            response_time: ResponseTimeCurve::default(),
            dietary: DietaryBlend::default(),
        }
    }
}

impl ScoringPolicy {
    /// Validates every nested curve and range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.verified_bonus) {
            return Err(MatchingError::InvalidPolicy(format!(
                "verified_bonus must be within [0, 1], got {}",
                self.verified_bonus
            )));
        }
        if !(0.0..=1.0).contains(&self.min_match_score) {
            return Err(MatchingError::InvalidPolicy(format!(
                "min_match_score must be within [0, 1], got {}",
                self.min_match_score
            )));
        }
        if !(self.max_distance_km > 0.0) {
            return Err(MatchingError::InvalidPolicy(format!(
                "max_distance_km must be positive, got {}",
                self.max_distance_km
            )));
        }
        if !(0.0..=1.0).contains(&self.neutral_category_score) {
            return Err(MatchingError::InvalidPolicy(format!(
                "neutral_category_score must be within [0, 1], got {}",
                self.neutral_category_score
            )));
        }
        self.response_time.validate()?;
        self.dietary.validate()
    }
}
