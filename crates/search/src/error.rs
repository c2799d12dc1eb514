//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur at the search crate's boundary.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Ranking configuration failed validation
    #[error("Invalid ranking config: {0}")]
    InvalidConfig(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for programmatic handling across the engine boundary.
/// Range: 12xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    InvalidConfig = 12001,
    JsonParsing = 12002,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidConfig(_) => SearchErrorCode::InvalidConfig,
            SearchError::JsonError(_) => SearchErrorCode::JsonParsing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RankingConfig;

    #[test]
    fn test_codes_start_at_range_base() {
        let err = RankingConfig { title_weight: -1.0, ..Default::default() }
            .validate()
            .unwrap_err();
        assert_eq!(err.code(), SearchErrorCode::InvalidConfig);
        assert_eq!(err.code() as u32, 12001);

        let err = SearchError::from(serde_json::from_str::<RankingConfig>("{").unwrap_err());
        assert_eq!(err.code() as u32, 12002);
    }
}
