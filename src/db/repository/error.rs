//! Error types for repository operations.

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Requested entity was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The caller's snapshot went stale between read and write.
    /// Retryable: reload and validate again.
    #[error("version conflict: snapshot at {expected}, store at {actual}")]
    VersionConflict { expected: u64, actual: u64 },

    /// Persisted document could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or initialization error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal/unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Whether retrying the whole read-validate-write sequence can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::VersionConflict { .. })
    }
}
