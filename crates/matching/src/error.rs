//! Error types for the matching crate.

use thiserror::Error;

/// Result type alias for matching operations.
pub type Result<T> = std::result::Result<T, MatchingError>;

/// Errors raised at the matching crate's boundary.
///
/// Scoring itself never fails; these cover parsing and configuration.
#[derive(Debug, Error)]
pub enum MatchingError {
    /// Preset name not recognized
    #[error("Unknown preset: {0} (expected one of default, foodPickup, dietaryFocused, community)")]
    UnknownPreset(String),

    /// Scoring policy failed validation
    #[error("Invalid scoring policy: {0}")]
    InvalidPolicy(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for programmatic handling across the engine boundary.
/// Range: 11xxx for matching errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchingErrorCode {
    /// Preset name not recognized
    UnknownPreset = 11001,
    /// Scoring policy failed validation
    InvalidPolicy = 11002,
    /// JSON parsing error
    JsonParsing = 11003,
}

impl MatchingError {
    /// Returns the error code for this error.
    pub fn code(&self) -> MatchingErrorCode {
        match self {
            MatchingError::UnknownPreset(_) => MatchingErrorCode::UnknownPreset,
            MatchingError::InvalidPolicy(_) => MatchingErrorCode::InvalidPolicy,
            MatchingError::JsonError(_) => MatchingErrorCode::JsonParsing,
        }
    }
}
