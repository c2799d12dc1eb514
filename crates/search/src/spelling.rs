//! Vocabulary-bounded spelling correction.
//!
//! A token is replaced only when a vocabulary word lies within a small edit
//! distance: one edit for tokens of up to five characters, two otherwise.
//! Equally close candidates resolve to the lexicographically smallest word.

use crate::fuzzy::levenshtein_distance;
use crate::query::{normalize_query, tokenize};
use crate::vocabulary::{is_non_content, SPELLING_VOCABULARY};
use serde::{Deserialize, Serialize};
use once_cell::sync::Lazy;
use std::collections::BTreeSet;

/// Tokens shorter than this are never corrected.
const MIN_CORRECTABLE_LEN: usize = 3;

/// Tokens up to this length may be corrected by a single edit only.
const SHORT_TOKEN_LEN: usize = 5;

/// Largest edit distance ever applied.
pub const MAX_CORRECTION_DISTANCE: usize = 2;

/// A single token replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    pub original: String,
    pub corrected: String,
    pub distance: usize,
}

/// Outcome of correcting a whole query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingCorrection {
    pub original_query: String,
    /// Normalized tokens with corrections applied, single-spaced
    pub corrected_query: String,
    pub has_corrections: bool,
    pub corrections: Vec<Correction>,
}

/// Spelling corrector over a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    vocabulary: BTreeSet<String>,
}

impl Default for SpellingCorrector {
    fn default() -> Self {
        Self {
            vocabulary: SPELLING_VOCABULARY.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl SpellingCorrector {
    /// Corrector over the built-in food vocabulary plus `extra_words`.
    ///
    /// Extra words are lowercased before insertion.
    pub fn with_extra_words<I, S>(extra_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corrector = Self::default();
        corrector
            .vocabulary
            .extend(extra_words.into_iter().map(|w| w.as_ref().to_lowercase()));
        corrector
    }

    /// Returns true if the word is spelled correctly.
    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Nearest vocabulary word within the bound for `token`, if it needs fixing.
    pub fn suggest(&self, token: &str) -> Option<Correction> {
        let len = token.chars().count();
        if len < MIN_CORRECTABLE_LEN
            || self.contains(token)
            || is_non_content(token)
            || token.chars().any(|c| c.is_numeric())
        {
            return None;
        }

        let bound = if len <= SHORT_TOKEN_LEN { 1 } else { MAX_CORRECTION_DISTANCE };

        let mut best: Option<(&str, usize)> = None;
        // BTreeSet iterates in lexicographic order, so the first of several
        // equally close words is kept.
        for word in &self.vocabulary {
            let word_len = word.chars().count();
            if word_len.abs_diff(len) > bound {
                continue;
            }
            let distance = levenshtein_distance(token, word);
            if distance <= bound && best.is_none_or(|(_, d)| distance < d) {
                best = Some((word.as_str(), distance));
            }
        }

        best.map(|(word, distance)| Correction {
            original: token.to_string(),
            corrected: word.to_string(),
            distance,
        })
    }

    /// Corrects every token of `query`.
    pub fn correct(&self, query: &str) -> SpellingCorrection {
        let tokens = tokenize(&normalize_query(query));
        let mut corrections = Vec::new();

        let corrected: Vec<String> = tokens
            .into_iter()
            .map(|token| match self.suggest(&token) {
                Some(correction) => {
                    let word = correction.corrected.clone();
                    corrections.push(correction);
                    word
                }
                None => token,
            })
            .collect();

        SpellingCorrection {
            original_query: query.to_string(),
            corrected_query: corrected.join(" "),
            has_corrections: !corrections.is_empty(),
            corrections,
        }
    }
}

/// Corrects `query` against the built-in vocabulary.
///
/// # Example
/// ```
/// use foodshare_search::correct_spelling;
///
/// let result = correct_spelling("fresh tomatoe");
/// assert_eq!(result.corrected_query, "fresh tomato");
/// assert!(result.has_corrections);
/// ```
pub fn correct_spelling(query: &str) -> SpellingCorrection {
    DEFAULT_CORRECTOR.correct(query)
}

static DEFAULT_CORRECTOR: Lazy<SpellingCorrector> = Lazy::new(SpellingCorrector::default);
