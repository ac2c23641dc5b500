/// Core error types for Aux Jams
use thiserror::Error;

/// Result type alias using `JamsError`
pub type Result<T> = std::result::Result<T, JamsError>;

/// Core error type for Aux Jams
#[derive(Error, Debug)]
pub enum JamsError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Storage backend rejected a write because the quota was exhausted
    #[error("Storage quota exceeded: {requested} bytes requested, limit is {limit} bytes")]
    QuotaExceeded {
        /// Bytes the write would have occupied
        requested: usize,
        /// Configured quota in bytes
        limit: usize,
    },

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Invalid input rejected before any mutation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Export/generation errors
    #[error("Export error: {0}")]
    Export(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl JamsError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an export error
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}
