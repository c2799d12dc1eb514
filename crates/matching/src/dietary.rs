//! Set-based dietary compatibility.
//!
//! Tags are compared ASCII case-insensitively so that `"Vegan"` and `"vegan"`
//! agree on every platform regardless of locale.

use crate::policy::DietaryBlend;
use serde::{Deserialize, Serialize};

/// A reason a candidate's tags conflict with the searcher's constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "tag", rename_all = "camelCase")]
pub enum DietaryViolation {
    /// A required tag is absent from the candidate
    MissingRequired(String),
    /// An excluded tag is present on the candidate
    Excluded(String),
}

/// Outcome of a dietary compatibility evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietaryCompatibility {
    /// Blended score in `[0, 1]`; 0.0 whenever an excluded tag is present
    pub score: f64,
    /// Every required tag is present on the candidate
    pub meets_required: bool,
    /// `meets_required` and no excluded tag present
    pub is_valid_match: bool,
    /// Number of preferred tags present on the candidate
    pub matched_count: usize,
    /// Unmet requirements and excluded tags, in input order
    pub violations: Vec<DietaryViolation>,
}

impl DietaryCompatibility {
    /// True if any excluded tag was found.
    pub fn has_exclusion(&self) -> bool {
        self.violations
            .iter()
            .any(|v| matches!(v, DietaryViolation::Excluded(_)))
    }
}

#[inline]
fn has_tag<S: AsRef<str>>(tags: &[S], tag: &str) -> bool {
    tags.iter().any(|t| t.as_ref().eq_ignore_ascii_case(tag))
}

/// Evaluates candidate tags against required, preferred and excluded tags.
///
/// # Example
/// ```
/// use foodshare_matching::{evaluate_dietary_compatibility, DietaryBlend};
///
/// let result = evaluate_dietary_compatibility(
///     &["vegan", "gluten-free"],
///     &["vegan"],
///     &["organic", "gluten-free"],
///     &["nuts"],
///     &DietaryBlend::default(),
/// );
/// assert!(result.is_valid_match);
/// assert_eq!(result.matched_count, 1);
/// assert!((result.score - 0.8).abs() < 1e-12);
/// ```
pub fn evaluate_dietary_compatibility<C, R, P, E>(
    candidate_tags: &[C],
    required_tags: &[R],
    preferred_tags: &[P],
    excluded_tags: &[E],
    blend: &DietaryBlend,
) -> DietaryCompatibility
where
    C: AsRef<str>,
    R: AsRef<str>,
    P: AsRef<str>,
    E: AsRef<str>,
{
    let mut violations = Vec::new();

    let mut satisfied_required = 0usize;
    for tag in required_tags {
        let tag = tag.as_ref();
        if has_tag(candidate_tags, tag) {
            satisfied_required += 1;
        } else {
            violations.push(DietaryViolation::MissingRequired(tag.to_string()));
        }
    }
    let meets_required = satisfied_required == required_tags.len();

    let mut excluded_present = false;
    for tag in excluded_tags {
        let tag = tag.as_ref();
        if has_tag(candidate_tags, tag) {
            excluded_present = true;
            violations.push(DietaryViolation::Excluded(tag.to_string()));
        }
    }

    let matched_count = preferred_tags
        .iter()
        .filter(|tag| has_tag(candidate_tags, tag.as_ref()))
        .count();

    let is_valid_match = meets_required && !excluded_present;

    let score = if excluded_present {
        0.0
    } else {
        let required_part = ratio_or_full(satisfied_required, required_tags.len());
        let preferred_part = ratio_or_full(matched_count, preferred_tags.len());
        (blend.required_weight * required_part + blend.preferred_weight * preferred_part)
            .clamp(0.0, 1.0)
    };

    DietaryCompatibility {
        score,
        meets_required,
        is_valid_match,
        matched_count,
        violations,
    }
}

/// `part / whole`, or full credit when there is nothing to satisfy.
#[inline]
fn ratio_or_full(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        1.0
    } else {
        part as f64 / whole as f64
    }
}
