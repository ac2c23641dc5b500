/// Export-specific errors
use thiserror::Error;

/// Result type alias using `ExportError`
pub type Result<T> = std::result::Result<T, ExportError>;

/// Export error types
#[derive(Error, Debug)]
pub enum ExportError {
    /// Another export is still pending; operations are attempt-once and
    /// not queued
    #[error("An export is already in progress")]
    Busy,

    /// Serialization error building the export document
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error writing the export file
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<ExportError> for jams_core::JamsError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Io(e) => jams_core::JamsError::Io(e),
            other => jams_core::JamsError::export(other.to_string()),
        }
    }
}
