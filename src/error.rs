//! Error types shared across the rendering pipeline.

use crate::fetch::FetchError;

/// Errors that can occur while turning an image into terminal output.
#[derive(Debug, thiserror::Error)]
pub enum TvError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Interrupted")]
    Interrupted,
}

impl TvError {
    /// Shorthand for an [`TvError::InvalidInput`] with a formatted message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        TvError::InvalidInput(msg.into())
    }

    /// Shorthand for a [`TvError::Geometry`] with a formatted message.
    pub fn geometry(msg: impl Into<String>) -> Self {
        TvError::Geometry(msg.into())
    }

    /// Whether the host may carry on with the next input after this error.
    ///
    /// Only remote retrieval failures are scoped to a single input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TvError::Fetch(_))
    }
}

pub type Result<T> = std::result::Result<T, TvError>;
