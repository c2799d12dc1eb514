//! Static synonym expansion.

use crate::vocabulary::SYNONYM_MAP;

/// Expands tokens with their dictionary synonyms.
///
/// The original tokens come first, in order; added synonyms follow in the
/// order they were first reached. Nothing is ever removed, and no term appears
/// twice.
///
/// # Example
/// ```
/// use foodshare_search::expand_synonyms;
///
/// let expanded = expand_synonyms(&["veggie", "soup"]);
/// assert_eq!(expanded, vec!["veggie", "soup", "vegetarian"]);
/// ```
pub fn expand_synonyms<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut expanded: Vec<String> = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.as_ref();
        if !expanded.iter().any(|t| t == token) {
            expanded.push(token.to_string());
        }
    }

    let additions: Vec<&str> = tokens
        .iter()
        .filter_map(|token| SYNONYM_MAP.get(token.as_ref()))
        .flat_map(|synonyms| synonyms.iter().copied())
        .collect();

    for synonym in additions {
        if !expanded.iter().any(|t| t == synonym) {
            expanded.push(synonym.to_string());
        }
    }

    expanded
}

/// Dictionary synonyms of a single term; empty when it has none.
pub fn synonyms_of(term: &str) -> &'static [&'static str] {
    SYNONYM_MAP.get(term).copied().unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_originals_always_kept() {
        let expanded = expand_synonyms(&["produce"]);
        assert_eq!(expanded, vec!["produce", "vegetables", "fruit"]);
    }

    #[test]
    fn test_no_synonyms() {
        assert_eq!(expand_synonyms(&["bread"]), vec!["bread"]);
        assert!(expand_synonyms::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_no_duplicates() {
        let expanded = expand_synonyms(&["veggie", "vegetarian", "veggie"]);
        assert_eq!(expanded, vec!["veggie", "vegetarian"]);
    }

    #[test]
    fn test_synonyms_of() {
        assert_eq!(synonyms_of("soda"), ["drinks"]);
        assert!(synonyms_of("bread").is_empty());
    }

    #[test]
    fn test_multiple_tokens_preserve_order() {
        let expanded = expand_synonyms(&["sweets", "soda"]);
        assert_eq!(expanded, vec!["sweets", "soda", "snacks", "candy", "drinks"]);
    }
}
