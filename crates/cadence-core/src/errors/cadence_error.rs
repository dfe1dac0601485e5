use super::StorageError;

/// Top-level error for every Cadence operation.
///
/// Only [`CadenceError::DataUnavailable`] and [`CadenceError::InvalidInput`]
/// cross a public operation boundary. The remaining variants are produced by
/// collaborators and absorbed by the aggregator as documented defaults.
#[derive(Debug, thiserror::Error)]
pub enum CadenceError {
    #[error("data unavailable from {source_name}: {reason}")]
    DataUnavailable { source_name: String, reason: String },

    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("{component} fell back to its default: {reason}")]
    PartialDataDefault { component: String, reason: String },

    #[error("{component} timed out after {millis}ms")]
    Timeout { component: String, millis: u64 },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("config error: {0}")]
    ConfigError(String),
}

impl CadenceError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Fatal errors propagate to the caller; everything else degrades to a default.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::DataUnavailable { .. } | Self::InvalidInput { .. })
    }
}

pub type CadenceResult<T> = Result<T, CadenceError>;
