//! Error types for SVG processing.

use thiserror::Error;

/// Result type for SVG operations.
pub type SvgResult<T> = Result<T, SvgError>;

/// Errors that can occur while reading or writing map markup.
#[derive(Debug, Error)]
pub enum SvgError {
    /// The markup is not well-formed XML.
    #[error("Malformed SVG at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    /// Writing the rewritten markup failed.
    #[error("Failed to write SVG: {0}")]
    Write(String),

    /// The rewritten markup is not valid UTF-8.
    #[error("Rewritten SVG is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl SvgError {
    pub(crate) fn malformed(position: u64, err: impl std::fmt::Display) -> Self {
        Self::Malformed {
            position,
            message: err.to_string(),
        }
    }

    pub(crate) fn write(err: impl std::fmt::Display) -> Self {
        Self::Write(err.to_string())
    }
}
