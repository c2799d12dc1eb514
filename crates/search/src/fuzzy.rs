//! Fuzzy matching algorithms.
//!
//! Lengths are measured in Unicode scalar values so that accented input
//! behaves the same on every platform.

use serde::{Deserialize, Serialize};

/// Calculate Levenshtein edit distance between two strings.
///
/// Runs in O(len(a)·len(b)) time with a single rolling row sized to the
/// shorter input.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Keep the row over the shorter string.
    let (long, short) = if a_chars.len() >= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, long_char) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, short_char) in short.iter().enumerate() {
            let cost = usize::from(long_char != short_char);
            let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }

    row[short.len()]
}

/// Result of comparing a query against a candidate string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    /// `similarity >= threshold`
    pub is_match: bool,
    /// `1 − edit_distance / max(len)`; 1.0 when both inputs are empty
    pub similarity: f64,
    /// Levenshtein distance between the inputs
    pub edit_distance: usize,
}

/// Normalized similarity in `[0, 1]` between two strings.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}

/// Compares `query` against `candidate` with an edit-distance threshold.
///
/// The comparison is case-sensitive; callers normalize first.
///
/// # Example
/// ```
/// use foodshare_search::fuzzy_match;
///
/// let result = fuzzy_match("tomatoe", "tomato", 0.7);
/// assert!(result.is_match);
/// assert_eq!(result.edit_distance, 1);
/// ```
pub fn fuzzy_match(query: &str, candidate: &str, threshold: f64) -> FuzzyMatch {
    let query_len = query.chars().count();
    let candidate_len = candidate.chars().count();
    let max_len = query_len.max(candidate_len);

    let edit_distance = levenshtein_distance(query, candidate);
    let similarity = if max_len == 0 {
        1.0
    } else {
        1.0 - edit_distance as f64 / max_len as f64
    };

    FuzzyMatch {
        is_match: similarity >= threshold,
        similarity,
        edit_distance,
    }
}
