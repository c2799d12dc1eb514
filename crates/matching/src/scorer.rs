//! Weighted multi-factor match scoring.

use crate::policy::{ResponseTimeCurve, ScoringPolicy};
use crate::CriteriaPreset;
use serde::{Deserialize, Serialize};

/// Highest rating a candidate can hold.
pub const MAX_RATING: f64 = 5.0;

/// Per-factor scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FactorScores {
    pub proximity: f64,
    pub dietary: f64,
    pub category: f64,
    pub activity: f64,
    pub reputation: f64,
    pub response_time: f64,
}

impl FactorScores {
    /// Every factor set to the same value.
    pub const fn uniform(score: f64) -> Self {
        Self {
            proximity: score,
            dietary: score,
            category: score,
            activity: score,
            reputation: score,
            response_time: score,
        }
    }

    /// Copy with every factor clamped to `[0, 1]`; NaN becomes 0.
    pub fn clamped(&self) -> Self {
        Self {
            proximity: unit(self.proximity),
            dietary: unit(self.dietary),
            category: unit(self.category),
            activity: unit(self.activity),
            reputation: unit(self.reputation),
            response_time: unit(self.response_time),
        }
    }

    const fn as_array(&self) -> [f64; 6] {
        [
            self.proximity,
            self.dietary,
            self.category,
            self.activity,
            self.reputation,
            self.response_time,
        ]
    }
}

/// Combined match score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchScoreResult {
    /// Clamped factor inputs
    pub factors: FactorScores,
    /// Weighted sum in `[0, 1]`
    pub total: f64,
    /// `total >= preset.threshold()`
    pub passes_threshold: bool,
    /// `round(total × 100)`, half away from zero
    pub percentage_score: u8,
}

/// Clamps to `[0, 1]`, mapping NaN to 0.
#[inline]
pub(crate) fn unit(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

/// Combines factor scores using the preset's weight vector.
///
/// The weighted sum is divided by the weight total so that six perfect factors
/// yield exactly 1.0 despite floating-point error in the weight table.
///
/// # Example
/// ```
/// use foodshare_matching::{calculate_match_score, CriteriaPreset, FactorScores};
///
/// let result = calculate_match_score(&FactorScores::uniform(1.0), CriteriaPreset::FoodPickup);
/// assert_eq!(result.total, 1.0);
/// assert_eq!(result.percentage_score, 100);
/// assert!(result.passes_threshold);
/// ```
pub fn calculate_match_score(factors: &FactorScores, preset: CriteriaPreset) -> MatchScoreResult {
    let factors = factors.clamped();
    let weights = preset.weights().as_array();

    let mut weighted = 0.0;
    let mut weight_total = 0.0;
    for (weight, score) in weights.iter().zip(factors.as_array()) {
        weighted += weight * score;
        weight_total += weight;
    }

    let total = if weight_total > 0.0 {
        unit(weighted / weight_total)
    } else {
        0.0
    };

    MatchScoreResult {
        factors,
        total,
        passes_threshold: total >= preset.threshold(),
        percentage_score: (total * 100.0).round() as u8,
    }
}

/// Reputation factor: rating normalized to `[0, 1]` plus a verified bonus.
///
/// Ratings outside `[0, 5]` are clamped; the bonus never lifts the result
/// above 1.0.
pub fn calculate_reputation_score(rating: f64, is_verified: bool, verified_bonus: f64) -> f64 {
    let base = unit(rating / MAX_RATING);
    if is_verified {
        unit(base + verified_bonus)
    } else {
        base
    }
}

/// Response-time factor for a response time in minutes.
pub fn calculate_response_time_score(minutes: f64, curve: &ResponseTimeCurve) -> f64 {
    curve.score(minutes)
}

/// Activity factor: similarity between candidate and searcher activity levels.
pub fn calculate_activity_score(candidate_activity: f64, searcher_activity: f64) -> f64 {
    1.0 - (unit(candidate_activity) - unit(searcher_activity)).abs()
}

/// Category factor: share of the searcher's preferred categories the candidate
/// offers, or the policy's neutral score when there is no preference.
pub fn calculate_category_score<C, P>(
    candidate_categories: &[C],
    preferred_categories: &[P],
    policy: &ScoringPolicy,
) -> f64
where
    C: AsRef<str>,
    P: AsRef<str>,
{
    if preferred_categories.is_empty() {
        return policy.neutral_category_score;
    }
    let offered = preferred_categories
        .iter()
        .filter(|wanted| {
            candidate_categories
                .iter()
                .any(|c| c.as_ref().eq_ignore_ascii_case(wanted.as_ref()))
        })
        .count();
    offered as f64 / preferred_categories.len() as f64
}
