//! Additive relevance ranking.
//!
//! Unlike match scoring, relevance is an unweighted sum of non-negative
//! contributions: text, category, dietary, recency, distance, personal and
//! popularity. Each contribution's scale lives in [`RankingConfig`].

use crate::fuzzy::fuzzy_match;
use crate::query::ParsedQuery;
use crate::{Result, SearchError};
use chrono::{DateTime, Utc};
use foodshare_geo::{score_location_proximity, Coordinate};
use foodshare_matching::{evaluate_dietary_compatibility, DietaryBlend};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// A listing that can be searched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchableItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<Coordinate>,
    #[serde(default)]
    pub view_count: u64,
}

/// Who is searching, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchUserContext {
    pub user_id: String,
    #[serde(default)]
    pub location: Option<Coordinate>,
    #[serde(default)]
    pub preferred_categories: Vec<String>,
    #[serde(default)]
    pub trusted_authors: Vec<String>,
    /// Carried for callers building suggestions; not used in scoring
    #[serde(default)]
    pub recent_searches: Vec<String>,
    /// Request time; recency is measured against it
    pub now: DateTime<Utc>,
}

impl SearchUserContext {
    /// Context with no location, preferences or history.
    pub fn anonymous(now: DateTime<Utc>) -> Self {
        Self {
            user_id: String::new(),
            location: None,
            preferred_categories: Vec::new(),
            trusted_authors: Vec::new(),
            recent_searches: Vec::new(),
            now,
        }
    }
}

/// Per-signal relevance contributions. Every field is non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RelevanceScore {
    pub text_match: f64,
    pub category_match: f64,
    pub dietary_match: f64,
    pub recency_boost: f64,
    pub distance_boost: f64,
    pub personal_boost: f64,
    pub popularity_boost: f64,
}

impl RelevanceScore {
    /// Unweighted sum of every contribution.
    pub fn total(&self) -> f64 {
        self.text_match
            + self.category_match
            + self.dietary_match
            + self.recency_boost
            + self.distance_boost
            + self.personal_boost
            + self.popularity_boost
    }
}

/// A ranked item with its score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub item: SearchableItem,
    pub total: f64,
    pub score: RelevanceScore,
    /// Search terms found in the title or description, for highlighting
    pub matched_terms: Vec<String>,
}

/// Scale of every relevance signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Credit for a search term found in the title
    pub title_weight: f64,
    /// Credit for a search term found only in the description
    pub description_weight: f64,
    /// Minimum similarity for a fuzzy word match
    pub fuzzy_threshold: f64,
    /// Multiplier applied to fuzzy credit
    pub fuzzy_factor: f64,
    /// Terms shorter than this never match fuzzily
    pub min_fuzzy_term_len: usize,
    pub category_boost: f64,
    /// Scaled by the share of dietary filters the item satisfies
    pub dietary_boost: f64,
    /// Recency boost for an item created at request time
    pub recency_max: f64,
    /// Age at which the recency boost halves
    pub recency_half_life_days: f64,
    /// Distance boost at the user's location
    pub distance_max: f64,
    /// Distance at which the distance boost reaches zero
    pub distance_range_km: f64,
    pub personal_boost: f64,
    /// Multiplier on `log10(1 + views)`
    pub popularity_scale: f64,
    pub popularity_cap: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            title_weight: 3.0,
            description_weight: 1.0,
            fuzzy_threshold: 0.75,
            fuzzy_factor: 0.5,
            min_fuzzy_term_len: 4,
            category_boost: 2.0,
            dietary_boost: 2.0,
            recency_max: 1.0,
            recency_half_life_days: 7.0,
            distance_max: 1.5,
            distance_range_km: 25.0,
            personal_boost: 1.0,
            popularity_scale: 0.5,
            popularity_cap: 1.5,
        }
    }
}

impl RankingConfig {
    /// Rejects negative scales and degenerate ranges.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("title_weight", self.title_weight),
            ("description_weight", self.description_weight),
            ("fuzzy_factor", self.fuzzy_factor),
            ("category_boost", self.category_boost),
            ("dietary_boost", self.dietary_boost),
            ("recency_max", self.recency_max),
            ("distance_max", self.distance_max),
            ("personal_boost", self.personal_boost),
            ("popularity_scale", self.popularity_scale),
            ("popularity_cap", self.popularity_cap),
        ];
        if let Some((name, value)) = non_negative.iter().find(|(_, v)| !(*v >= 0.0)) {
            return Err(SearchError::InvalidConfig(format!(
                "{name} must be non-negative, got {value}"
            )));
        }
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(SearchError::InvalidConfig(format!(
                "fuzzy_threshold must be within [0, 1], got {}",
                self.fuzzy_threshold
            )));
        }
        if !(self.recency_half_life_days > 0.0) || !(self.distance_range_km > 0.0) {
            return Err(SearchError::InvalidConfig(
                "recency_half_life_days and distance_range_km must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Ranks searchable items against a parsed query.
#[derive(Debug, Clone, Default)]
pub struct RelevanceRanker {
    config: RankingConfig,
}

impl RelevanceRanker {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Scores every item and sorts by total descending, then item ID ascending.
    ///
    /// An empty query gives every item a zero score.
    pub fn rank(
        &self,
        query: &ParsedQuery,
        items: &[SearchableItem],
        context: &SearchUserContext,
    ) -> Vec<RankedResult> {
        let rank_one = |item: &SearchableItem| {
            let score = if query.is_empty() {
                RelevanceScore::default()
            } else {
                self.score(query, item, context)
            };
            RankedResult {
                item: item.clone(),
                total: score.total(),
                score,
                matched_terms: find_matched_terms(&query.search_terms, item),
            }
        };

        #[cfg(feature = "parallel")]
        let mut results: Vec<RankedResult> = {
            use rayon::prelude::*;
            items.par_iter().map(rank_one).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let mut results: Vec<RankedResult> = items.iter().map(rank_one).collect();

        results.sort_by(|a, b| {
            b.total
                .total_cmp(&a.total)
                .then_with(|| a.item.id.cmp(&b.item.id))
        });

        results
    }

    /// Relevance breakdown for a single item.
    pub fn score(
        &self,
        query: &ParsedQuery,
        item: &SearchableItem,
        context: &SearchUserContext,
    ) -> RelevanceScore {
        RelevanceScore {
            text_match: self.text_match(query, item),
            category_match: self.category_match(query, item),
            dietary_match: self.dietary_match(query, item),
            recency_boost: self.recency_boost(item.created_at, context.now),
            distance_boost: self.distance_boost(context.location, item.location),
            personal_boost: self.personal_boost(item, context),
            popularity_boost: self.popularity_boost(item.view_count),
        }
    }

    /// Mean credit over the typed search terms. A term's credit is the best of
    /// itself and its synonyms: title hit, else description hit, else the best
    /// fuzzy word match.
    fn text_match(&self, query: &ParsedQuery, item: &SearchableItem) -> f64 {
        let groups = query.term_groups();
        if groups.is_empty() {
            return 0.0;
        }

        let title = item.title.to_lowercase();
        let description = item.description.to_lowercase();
        let title_words: Vec<&str> = title.unicode_words().collect();
        let description_words: Vec<&str> = description.unicode_words().collect();

        let term_credit = |term: &str| {
            let term = term.to_lowercase();
            if title.contains(&term) {
                self.config.title_weight
            } else if description.contains(&term) {
                self.config.description_weight
            } else {
                let in_title = self.best_fuzzy(&term, &title_words) * self.config.title_weight;
                let in_description =
                    self.best_fuzzy(&term, &description_words) * self.config.description_weight;
                in_title.max(in_description) * self.config.fuzzy_factor
            }
        };

        let sum: f64 = groups
            .iter()
            .map(|group| group.iter().map(|term| term_credit(term)).fold(0.0, f64::max))
            .sum();

        sum / groups.len() as f64
    }

    /// Highest similarity of `term` to any word at or above the threshold, else 0.
    fn best_fuzzy(&self, term: &str, words: &[&str]) -> f64 {
        if term.chars().count() < self.config.min_fuzzy_term_len {
            return 0.0;
        }
        words
            .iter()
            .map(|word| fuzzy_match(term, word, self.config.fuzzy_threshold))
            .filter(|m| m.is_match)
            .map(|m| m.similarity)
            .fold(0.0, f64::max)
    }

    fn category_match(&self, query: &ParsedQuery, item: &SearchableItem) -> f64 {
        let matches = query
            .categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(&item.category));
        if matches { self.config.category_boost } else { 0.0 }
    }

    fn dietary_match(&self, query: &ParsedQuery, item: &SearchableItem) -> f64 {
        if query.dietary_filters.is_empty() {
            return 0.0;
        }
        let no_tags: [&str; 0] = [];
        let compatibility = evaluate_dietary_compatibility(
            &item.dietary_tags,
            &no_tags,
            &query.dietary_filters,
            &no_tags,
            &DietaryBlend::default(),
        );
        self.config.dietary_boost * compatibility.matched_count as f64
            / query.dietary_filters.len() as f64
    }

    /// Halves every `recency_half_life_days`; future timestamps count as new.
    fn recency_boost(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
        let age_days = ((now - created_at).num_milliseconds() as f64 / MILLIS_PER_DAY).max(0.0);
        self.config.recency_max * 0.5f64.powf(age_days / self.config.recency_half_life_days)
    }

    fn distance_boost(&self, user: Option<Coordinate>, item: Option<Coordinate>) -> f64 {
        match (user, item) {
            (Some(user), Some(item)) => {
                self.config.distance_max
                    * score_location_proximity(&user, &item, self.config.distance_range_km).score
            }
            _ => 0.0,
        }
    }

    fn personal_boost(&self, item: &SearchableItem, context: &SearchUserContext) -> f64 {
        let preferred = context
            .preferred_categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(&item.category));
        let trusted = context.trusted_authors.iter().any(|a| *a == item.author_id);
        if preferred || trusted {
            self.config.personal_boost
        } else {
            0.0
        }
    }

    /// Logarithmic in views so that volume alone cannot dominate.
    fn popularity_boost(&self, view_count: u64) -> f64 {
        (self.config.popularity_scale * (1.0 + view_count as f64).log10())
            .min(self.config.popularity_cap)
    }
}

/// Ranks items with the default configuration.
pub fn rank_results(
    query: &ParsedQuery,
    items: &[SearchableItem],
    context: &SearchUserContext,
) -> Vec<RankedResult> {
    RelevanceRanker::default().rank(query, items, context)
}

/// Search terms found (case-insensitively) in the item's title or description,
/// in search-term order.
pub fn find_matched_terms(terms: &[String], item: &SearchableItem) -> Vec<String> {
    let haystack = format!("{} {}", item.title, item.description).to_lowercase();
    terms
        .iter()
        .filter(|term| !term.is_empty() && haystack.contains(&term.to_lowercase()))
        .cloned()
        .collect()
}
