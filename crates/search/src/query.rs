//! Query normalization, tokenization and intent extraction.

use crate::spelling::{correct_spelling, SpellingCorrection};
use crate::synonyms::{expand_synonyms, synonyms_of};
use crate::vocabulary::{
    is_non_content, CATEGORY_KEYWORDS, DIETARY_KEYWORDS, DIETARY_PHRASES, LOCATION_INTENTS,
    TIME_INTENTS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the searcher wants the food to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationIntent {
    Nearby,
    WalkingDistance,
    Delivery,
    SpecificArea,
}

/// When the searcher wants the food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeIntent {
    Now,
    Today,
    Tomorrow,
    Weekend,
}

impl LocationIntent {
    /// Name as it appears in JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            LocationIntent::Nearby => "nearby",
            LocationIntent::WalkingDistance => "walkingDistance",
            LocationIntent::Delivery => "delivery",
            LocationIntent::SpecificArea => "specificArea",
        }
    }
}

impl fmt::Display for LocationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TimeIntent {
    /// Name as it appears in JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            TimeIntent::Now => "now",
            TimeIntent::Today => "today",
            TimeIntent::Tomorrow => "tomorrow",
            TimeIntent::Weekend => "weekend",
        }
    }
}

impl fmt::Display for TimeIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A search string broken down for ranking.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// Text exactly as typed
    pub original_text: String,
    /// Trimmed, lowercased, single-spaced
    pub normalized_text: String,
    pub tokens: Vec<String>,
    /// Tokens minus stop words and intent-only words
    pub search_terms: Vec<String>,
    /// Category identifiers, in vocabulary order
    pub categories: Vec<String>,
    /// Dietary filters, in vocabulary order
    pub dietary_filters: Vec<String>,
    pub location_intent: Option<LocationIntent>,
    pub time_intent: Option<TimeIntent>,
    /// Synonyms added to `search_terms`, grouped by the typed term that reached them
    #[serde(default)]
    pub expansions: Vec<TermExpansion>,
}

/// Synonyms that stand in for one typed search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermExpansion {
    pub term: String,
    pub synonyms: Vec<String>,
}

impl ParsedQuery {
    /// True when the query carried no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Typed search terms, each followed by the synonyms added for it.
    ///
    /// Synonyms never form a group of their own, so expansion can widen what a
    /// typed term matches without adding terms an item has to satisfy.
    pub fn term_groups(&self) -> Vec<Vec<&str>> {
        let added: Vec<&str> = self
            .expansions
            .iter()
            .flat_map(|e| e.synonyms.iter().map(String::as_str))
            .collect();

        self.search_terms
            .iter()
            .filter(|term| !added.contains(&term.as_str()))
            .map(|term| {
                let mut group = vec![term.as_str()];
                if let Some(expansion) = self.expansions.iter().find(|e| e.term == *term) {
                    group.extend(expansion.synonyms.iter().map(String::as_str));
                }
                group
            })
            .collect()
    }
}

/// Full analysis of a query: the spelling pass plus the expanded parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryAnalysis {
    pub spelling: SpellingCorrection,
    pub parsed: ParsedQuery,
}

/// Trims, lowercases and collapses internal whitespace to single spaces.
///
/// Lowercasing uses Unicode default case mapping, which does not depend on the
/// process locale.
pub fn normalize_query(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits normalized text on whitespace, trimming punctuation from token edges.
///
/// Inner hyphens and apostrophes survive (`gluten-free`, `mom's`).
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Parses a raw search string.
///
/// Intent keywords are matched as whole words or phrases on the normalized text.
/// When several intents of one kind are present the first in precedence order
/// wins: `walkingDistance`, `nearby`, `delivery`, `specificArea` for location and
/// `now`, `today`, `tomorrow`, `weekend` for time.
///
/// # Example
/// ```
/// use foodshare_search::{parse_query, LocationIntent, TimeIntent};
///
/// let parsed = parse_query("vegan bread near me today");
/// assert_eq!(parsed.dietary_filters, vec!["vegan"]);
/// assert_eq!(parsed.categories, vec!["bakery"]);
/// assert_eq!(parsed.location_intent, Some(LocationIntent::Nearby));
/// assert_eq!(parsed.time_intent, Some(TimeIntent::Today));
/// ```
pub fn parse_query(raw: &str) -> ParsedQuery {
    let normalized_text = normalize_query(raw);
    let tokens = tokenize(&normalized_text);

    let search_terms: Vec<String> = tokens
        .iter()
        .filter(|token| !is_non_content(token))
        .cloned()
        .collect();

    let (categories, dietary_filters) = classify(&tokens);

    let scan_text = intent_scan_text(&tokens);
    let location_intent = first_intent(&scan_text, LOCATION_INTENTS);
    let time_intent = first_intent(&scan_text, TIME_INTENTS);

    ParsedQuery {
        original_text: raw.to_string(),
        normalized_text,
        tokens,
        search_terms,
        categories,
        dietary_filters,
        location_intent,
        time_intent,
        expansions: Vec::new(),
    }
}

/// Runs the full pipeline: spelling correction, parsing, then synonym
/// expansion of the search terms.
///
/// Categories and dietary filters reached only through a correction or a
/// synonym are extracted too.
///
/// # Example
/// ```
/// use foodshare_search::prepare_query;
///
/// let analysis = prepare_query("veggie tomatoe soup");
/// assert!(analysis.spelling.has_corrections);
/// assert!(analysis.parsed.search_terms.contains(&"tomato".to_string()));
/// assert!(analysis.parsed.dietary_filters.contains(&"vegetarian".to_string()));
/// ```
pub fn prepare_query(raw: &str) -> QueryAnalysis {
    let spelling = correct_spelling(raw);
    let mut parsed = parse_query(&spelling.corrected_query);
    parsed.original_text = raw.to_string();

    let typed = &parsed.search_terms;
    let mut expansions: Vec<TermExpansion> = Vec::new();
    for term in typed {
        if expansions.iter().any(|e| e.term == *term) {
            continue;
        }
        let synonyms: Vec<String> = synonyms_of(term)
            .iter()
            .filter(|synonym| !typed.iter().any(|t| t == *synonym))
            .map(|synonym| synonym.to_string())
            .collect();
        if !synonyms.is_empty() {
            expansions.push(TermExpansion { term: term.clone(), synonyms });
        }
    }

    let expanded = expand_synonyms(&parsed.search_terms);
    let mut vocabulary_input = parsed.tokens.clone();
    vocabulary_input.extend(
        expanded
            .iter()
            .filter(|term| !parsed.search_terms.contains(term))
            .cloned(),
    );
    let (categories, dietary_filters) = classify(&vocabulary_input);

    parsed.search_terms = expanded;
    parsed.expansions = expansions;
    parsed.categories = categories;
    parsed.dietary_filters = dietary_filters;

    QueryAnalysis { spelling, parsed }
}

/// Extracts category identifiers and dietary filters, each de-duplicated and in
/// vocabulary order.
fn classify(tokens: &[String]) -> (Vec<String>, Vec<String>) {
    let mut consumed = vec![false; tokens.len()];
    let mut dietary_found: Vec<&str> = Vec::new();

    for i in 0..tokens.len().saturating_sub(1) {
        for (first, second, filter) in DIETARY_PHRASES {
            if tokens[i] == *first && tokens[i + 1] == *second {
                consumed[i] = true;
                consumed[i + 1] = true;
                dietary_found.push(*filter);
            }
        }
    }

    let remaining: Vec<&str> = tokens
        .iter()
        .zip(&consumed)
        .filter(|(_, used)| !**used)
        .map(|(token, _)| token.as_str())
        .collect();

    let dietary_filters = DIETARY_KEYWORDS
        .iter()
        .filter(|(filter, keywords)| {
            dietary_found.contains(filter) || keywords.iter().any(|k| remaining.contains(k))
        })
        .map(|(filter, _)| filter.to_string())
        .collect();

    let categories = CATEGORY_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| remaining.contains(k)))
        .map(|(category, _)| category.to_string())
        .collect();

    (categories, dietary_filters)
}

/// Space-padded token text so phrases match on whole-word boundaries.
fn intent_scan_text(tokens: &[String]) -> String {
    format!(" {} ", tokens.join(" "))
}

fn first_intent<T: Copy>(scan_text: &str, groups: &[(T, &[&str])]) -> Option<T> {
    groups
        .iter()
        .find(|(_, phrases)| {
            phrases
                .iter()
                .any(|phrase| scan_text.contains(&format!(" {phrase} ")))
        })
        .map(|(intent, _)| *intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_query("  Fresh   BREAD\t\nnow "), "fresh bread now");
        assert_eq!(normalize_query(""), "");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_tokenize_trims_punctuation() {
        assert_eq!(tokenize("bread, milk! gluten-free"), vec!["bread", "milk", "gluten-free"]);
        assert!(tokenize("!!! ...").is_empty());
    }

    #[test]
    fn test_scenario_vegan_bread_near_me_today() {
        let parsed = parse_query("vegan bread near me today");
        assert!(parsed.dietary_filters.contains(&"vegan".to_string()));
        assert_eq!(parsed.location_intent, Some(LocationIntent::Nearby));
        assert_eq!(parsed.time_intent, Some(TimeIntent::Today));
        assert_eq!(parsed.search_terms, vec!["vegan", "bread"]);
        assert_eq!(parsed.tokens.len(), 5);
    }

    #[test]
    fn test_empty_query() {
        let parsed = parse_query("   ");
        assert!(parsed.is_empty());
        assert!(parsed.search_terms.is_empty());
        assert!(parsed.categories.is_empty());
        assert_eq!(parsed.location_intent, None);
        assert_eq!(parsed.time_intent, None);
    }

    #[test]
    fn test_location_precedence_is_fixed() {
        // Both nearby and walking-distance keywords: walking distance wins
        let parsed = parse_query("soup near me within walking distance");
        assert_eq!(parsed.location_intent, Some(LocationIntent::WalkingDistance));

        // Order in the text does not matter
        let parsed = parse_query("delivery or nearby");
        assert_eq!(parsed.location_intent, Some(LocationIntent::Nearby));
    }

    #[test]
    fn test_time_precedence_is_fixed() {
        let parsed = parse_query("pizza this weekend or tomorrow");
        assert_eq!(parsed.time_intent, Some(TimeIntent::Tomorrow));

        let parsed = parse_query("tomorrow or right now");
        assert_eq!(parsed.time_intent, Some(TimeIntent::Now));
    }

    #[test]
    fn test_intent_matches_whole_words_only() {
        // "snowpea" contains "now" but is not the word "now"
        let parsed = parse_query("snowpea");
        assert_eq!(parsed.time_intent, None);
    }

    #[test]
    fn test_dietary_phrase_does_not_select_dairy_category() {
        let parsed = parse_query("dairy free cheese");
        assert_eq!(parsed.dietary_filters, vec!["dairy-free"]);
        assert_eq!(parsed.categories, vec!["dairy"]);

        let parsed = parse_query("gluten free pasta");
        assert_eq!(parsed.dietary_filters, vec!["gluten-free"]);
        assert_eq!(parsed.categories, vec!["pantry"]);
    }

    #[test]
    fn test_categories_in_vocabulary_order() {
        let parsed = parse_query("milk and apples and more milk");
        assert_eq!(parsed.categories, vec!["produce", "dairy"]);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let a = parse_query("Organic veggies delivered tonight near downtown");
        let b = parse_query("Organic veggies delivered tonight near downtown");
        assert_eq!(a, b);
        assert_eq!(a.location_intent, Some(LocationIntent::Nearby));
        assert_eq!(a.time_intent, Some(TimeIntent::Today));
    }

    #[test]
    fn test_intent_display_matches_json_names() {
        for intent in [
            LocationIntent::Nearby,
            LocationIntent::WalkingDistance,
            LocationIntent::Delivery,
            LocationIntent::SpecificArea,
        ] {
            assert_eq!(serde_json::to_value(intent).unwrap(), intent.to_string());
        }
        for intent in [TimeIntent::Now, TimeIntent::Today, TimeIntent::Tomorrow, TimeIntent::Weekend] {
            assert_eq!(serde_json::to_value(intent).unwrap(), intent.to_string());
        }
        assert_eq!(LocationIntent::WalkingDistance.to_string(), "walkingDistance");
    }

    #[test]
    fn test_misspelled_intents_still_extracted() {
        let analysis = prepare_query("bread tomorow");
        assert_eq!(analysis.parsed.time_intent, Some(TimeIntent::Tomorrow));
        assert_eq!(analysis.parsed.search_terms, vec!["bread"]);

        let analysis = prepare_query("milk delivry");
        assert_eq!(analysis.parsed.location_intent, Some(LocationIntent::Delivery));
        assert_eq!(analysis.parsed.search_terms, vec!["milk"]);

        let analysis = prepare_query("soup nearbyy");
        assert_eq!(analysis.parsed.location_intent, Some(LocationIntent::Nearby));

        let analysis = prepare_query("pizza tonite");
        assert_eq!(analysis.parsed.time_intent, Some(TimeIntent::Today));
        assert!(!analysis.spelling.has_corrections);
    }

    #[test]
    fn test_prepare_query_expands_synonyms() {
        let analysis = prepare_query("plant-based meals");
        assert_eq!(analysis.parsed.search_terms, vec!["plant-based", "meals", "vegan"]);
        assert_eq!(analysis.parsed.dietary_filters, vec!["vegan"]);
        assert_eq!(analysis.parsed.categories, vec!["prepared"]);
        assert!(!analysis.spelling.has_corrections);
    }

    #[test]
    fn test_synonyms_grouped_under_typed_term() {
        let analysis = prepare_query("produce soda");
        let parsed = &analysis.parsed;
        assert_eq!(parsed.search_terms, vec!["produce", "soda", "vegetables", "fruit", "drinks"]);
        assert_eq!(
            parsed.term_groups(),
            vec![vec!["produce", "vegetables", "fruit"], vec!["soda", "drinks"]]
        );
    }

    #[test]
    fn test_typed_synonym_stays_its_own_group() {
        let parsed = prepare_query("produce fruit").parsed;
        assert_eq!(parsed.term_groups(), vec![vec!["produce", "vegetables"], vec!["fruit"]]);
    }

    #[test]
    fn test_bare_parse_has_one_group_per_term() {
        let parsed = parse_query("produce soda");
        assert!(parsed.expansions.is_empty());
        assert_eq!(parsed.term_groups(), vec![vec!["produce"], vec!["soda"]]);
    }

    #[test]
    fn test_prepare_query_keeps_original_text() {
        let analysis = prepare_query("Breaad");
        assert_eq!(analysis.parsed.original_text, "Breaad");
        assert_eq!(analysis.parsed.search_terms, vec!["bread"]);
        assert_eq!(analysis.parsed.categories, vec!["bakery"]);
    }
}
