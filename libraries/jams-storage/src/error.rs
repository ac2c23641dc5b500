/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Write rejected because the backend quota is exhausted
    #[error("Quota exceeded: write of {requested} bytes over the {limit} byte limit")]
    QuotaExceeded {
        /// Total bytes the backend would hold after the write
        requested: usize,
        /// Configured quota in bytes
        limit: usize,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Backing file is not a valid store document
    #[error("Corrupt store file {path}: {message}")]
    Corrupt { path: String, message: String },

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for jams_core::JamsError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::QuotaExceeded { requested, limit } => {
                jams_core::JamsError::QuotaExceeded { requested, limit }
            }
            StorageError::Io(e) => jams_core::JamsError::Io(e),
            other => jams_core::JamsError::storage(other.to_string()),
        }
    }
}
