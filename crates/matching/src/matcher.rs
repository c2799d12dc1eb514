//! Candidate-to-candidate recommendation.
//!
//! # Pipeline
//! 1. Factor extraction (proximity, dietary, category, activity, reputation,
//!    response time)
//! 2. Weighted combination under the chosen preset
//! 3. Floor filtering and exclusion of dietary conflicts
//! 4. Deterministic ranking and truncation

use crate::dietary::{evaluate_dietary_compatibility, DietaryCompatibility};
use crate::policy::ScoringPolicy;
use crate::scorer::{
    calculate_activity_score, calculate_category_score, calculate_match_score,
    calculate_reputation_score, calculate_response_time_score, FactorScores, MatchScoreResult,
};
use crate::CriteriaPreset;
use foodshare_geo::{score_location_proximity, Coordinate};
use serde::{Deserialize, Serialize};

/// A listing or user being evaluated against the searcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub id: String,
    pub location: Coordinate,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Activity level in `[0, 1]`
    pub activity_level: f64,
    /// Rating in `[0, 5]`
    pub rating: f64,
    pub response_time_minutes: f64,
    #[serde(default)]
    pub is_verified: bool,
}

/// The searcher's side of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingContext {
    /// Never matched against itself when set
    #[serde(default)]
    pub searcher_id: Option<String>,
    pub location: Coordinate,
    /// Tags the searcher would like a candidate to share
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    /// Tags that rule a candidate out entirely
    #[serde(default)]
    pub excluded_dietary_tags: Vec<String>,
    #[serde(default)]
    pub preferred_categories: Vec<String>,
    /// Activity level in `[0, 1]`
    pub activity_level: f64,
}

/// A scored candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub candidate_id: String,
    pub distance_km: f64,
    pub dietary: DietaryCompatibility,
    pub score: MatchScoreResult,
}

/// Extracts every factor for one candidate and combines them.
pub fn score_candidate(
    candidate: &MatchCandidate,
    context: &MatchingContext,
    preset: CriteriaPreset,
    policy: &ScoringPolicy,
) -> MatchEntry {
    let proximity =
        score_location_proximity(&context.location, &candidate.location, policy.max_distance_km);

    let no_requirements: [&str; 0] = [];
    let dietary = evaluate_dietary_compatibility(
        &candidate.dietary_tags,
        &no_requirements,
        &context.dietary_tags,
        &context.excluded_dietary_tags,
        &policy.dietary,
    );

    let factors = FactorScores {
        proximity: proximity.score,
        dietary: dietary.score,
        category: calculate_category_score(
            &candidate.categories,
            &context.preferred_categories,
            policy,
        ),
        activity: calculate_activity_score(candidate.activity_level, context.activity_level),
        reputation: calculate_reputation_score(
            candidate.rating,
            candidate.is_verified,
            policy.verified_bonus,
        ),
        response_time: calculate_response_time_score(
            candidate.response_time_minutes,
            &policy.response_time,
        ),
    };

    MatchEntry {
        candidate_id: candidate.id.clone(),
        distance_km: proximity.distance_km,
        dietary,
        score: calculate_match_score(&factors, preset),
    }
}

/// Finds the best matches for the searcher.
///
/// Candidates below `policy.min_match_score`, candidates carrying an excluded
/// dietary tag and the searcher itself are dropped. The rest are sorted by
/// total score descending, then candidate ID ascending, and truncated to
/// `max_results`.
pub fn find_best_matches(
    candidates: &[MatchCandidate],
    context: &MatchingContext,
    preset: CriteriaPreset,
    max_results: usize,
    policy: &ScoringPolicy,
) -> Vec<MatchEntry> {
    if max_results == 0 {
        return Vec::new();
    }

    let is_eligible = |candidate: &&MatchCandidate| {
        context.searcher_id.as_deref() != Some(candidate.id.as_str())
    };
    let score = |candidate: &MatchCandidate| score_candidate(candidate, context, preset, policy);
    let keep = |entry: &MatchEntry| {
        entry.dietary.is_valid_match && entry.score.total >= policy.min_match_score
    };

    #[cfg(feature = "parallel")]
    let mut entries: Vec<MatchEntry> = {
        use rayon::prelude::*;
        candidates
            .par_iter()
            .filter(|c| is_eligible(c))
            .map(score)
            .filter(keep)
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let mut entries: Vec<MatchEntry> = candidates
        .iter()
        .filter(is_eligible)
        .map(score)
        .filter(keep)
        .collect();

    entries.sort_by(|a, b| {
        b.score
            .total
            .total_cmp(&a.score.total)
            .then_with(|| a.candidate_id.cmp(&b.candidate_id))
    });
    entries.truncate(max_results);

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const NYC: Coordinate = Coordinate { latitude: 40.7128, longitude: -74.0060 };

    fn candidate(id: &str, lat: f64, lon: f64, tags: &[&str]) -> MatchCandidate {
        MatchCandidate {
            id: id.to_string(),
            location: Coordinate::new(lat, lon),
            dietary_tags: tags.iter().map(|t| t.to_string()).collect(),
            categories: vec!["produce".to_string()],
            activity_level: 0.8,
            rating: 4.5,
            response_time_minutes: 10.0,
            is_verified: true,
        }
    }

    fn context() -> MatchingContext {
        MatchingContext {
            searcher_id: Some("me".to_string()),
            location: NYC,
            dietary_tags: vec!["vegan".to_string()],
            excluded_dietary_tags: vec!["contains-nuts".to_string()],
            preferred_categories: vec!["produce".to_string()],
            activity_level: 0.8,
        }
    }

    #[test]
    fn test_perfect_candidate_scores_one() {
        let mut perfect = candidate("a", NYC.latitude, NYC.longitude, &["vegan"]);
        perfect.rating = 5.0;
        let entry = score_candidate(&perfect, &context(), CriteriaPreset::Default, &ScoringPolicy::default());
        assert_eq!(entry.distance_km, 0.0);
        assert_eq!(entry.score.total, 1.0);
        assert_eq!(entry.score.percentage_score, 100);
    }

    #[test]
    fn test_sorted_and_excludes_conflicts() {
        let candidates = vec![
            candidate("far", 40.76, -74.0060, &["vegan"]),
            candidate("near", 40.7130, -74.0060, &["vegan"]),
            candidate("nuts", 40.7128, -74.0060, &["vegan", "Contains-Nuts"]),
            candidate("me", 40.7128, -74.0060, &["vegan"]),
        ];

        let matches = find_best_matches(
            &candidates,
            &context(),
            CriteriaPreset::FoodPickup,
            10,
            &ScoringPolicy::default(),
        );

        let ids: Vec<&str> = matches.iter().map(|m| m.candidate_id.as_str()).collect();
        assert_eq!(ids, ["near", "far"]);
    }

    #[test]
    fn test_respects_max_results_and_floor() {
        let policy = ScoringPolicy::default();
        let candidates: Vec<MatchCandidate> = (0..20)
            .map(|i| candidate(&format!("c{i:02}"), 40.7128 + i as f64 * 0.01, -74.0060, &[]))
            .collect();

        let matches = find_best_matches(&candidates, &context(), CriteriaPreset::Default, 5, &policy);
        assert!(matches.len() <= 5);
        assert!(matches.iter().all(|m| m.score.total >= policy.min_match_score));
    }

    #[test]
    fn test_ties_break_by_candidate_id() {
        let candidates = vec![
            candidate("b", 40.72, -74.0, &["vegan"]),
            candidate("a", 40.72, -74.0, &["vegan"]),
            candidate("c", 40.72, -74.0, &["vegan"]),
        ];
        let matches = find_best_matches(
            &candidates,
            &context(),
            CriteriaPreset::Community,
            10,
            &ScoringPolicy::default(),
        );
        let ids: Vec<&str> = matches.iter().map(|m| m.candidate_id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_inputs() {
        let policy = ScoringPolicy::default();
        assert!(find_best_matches(&[], &context(), CriteriaPreset::Default, 10, &policy).is_empty());
        let one = vec![candidate("a", 40.7128, -74.0060, &[])];
        assert!(find_best_matches(&one, &context(), CriteriaPreset::Default, 0, &policy).is_empty());
    }

    #[test]
    fn test_floor_drops_poor_candidates() {
        let mut poor = candidate("poor", 10.0, 10.0, &[]);
        poor.rating = 0.0;
        poor.response_time_minutes = 500.0;
        poor.activity_level = 0.0;
        poor.is_verified = false;
        poor.categories.clear();

        let matches = find_best_matches(
            &[poor],
            &context(),
            CriteriaPreset::Default,
            10,
            &ScoringPolicy::default(),
        );
        assert!(matches.is_empty());
    }
}
