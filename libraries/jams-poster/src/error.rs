/// Poster-specific errors
use thiserror::Error;

/// Result type alias using `PosterError`
pub type Result<T> = std::result::Result<T, PosterError>;

/// Poster error types
#[derive(Error, Debug)]
pub enum PosterError {
    /// Another generation is still pending
    #[error("A poster generation is already in progress")]
    Busy,

    /// Export requested before any poster was generated
    #[error("No poster generated")]
    NoPoster,

    /// I/O error writing the poster export
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<PosterError> for jams_core::JamsError {
    fn from(err: PosterError) -> Self {
        match err {
            PosterError::Io(e) => jams_core::JamsError::Io(e),
            other => jams_core::JamsError::export(other.to_string()),
        }
    }
}
