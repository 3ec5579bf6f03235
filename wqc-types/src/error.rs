/// Error types for the water quality clusters dashboard
use thiserror::Error;

/// Main error type for loading, filtering and rendering observations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WqcError {
    /// The source table could not be read
    #[error("Data unavailable for '{source_id}': {reason}")]
    DataUnavailable { source_id: String, reason: String },

    /// The filtered view has no rows, so there is nothing to aggregate or center on
    #[error("No observations match the current filters")]
    EmptyFilterResult,

    /// Month range outside 1-12 or reversed
    #[error("Invalid month range: {start}-{end}")]
    InvalidMonthRange { start: u32, end: u32 },

    /// Clustering method name not recognised
    #[error("Unknown clustering method: {0}")]
    UnknownMethod(String),

    /// Cluster list could not be parsed
    #[error("Invalid cluster list: {0}")]
    InvalidClusterList(String),
}

impl WqcError {
    /// Shorthand for a `DataUnavailable` error.
    pub fn data_unavailable(source_id: &str, reason: impl ToString) -> Self {
        WqcError::DataUnavailable {
            source_id: source_id.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Type alias for Results using WqcError
pub type Result<T> = std::result::Result<T, WqcError>;
