//! Error types for the core domain.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while decoding or validating domain data.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A catalog document could not be parsed.
    #[error("Failed to parse {document}: {source}")]
    InvalidDocument {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A signup request lacks one of its required fields.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
