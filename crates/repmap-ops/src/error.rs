//! Error types for the operations layer.

use std::path::PathBuf;

use repmap_core::CoreError;
use thiserror::Error;

/// Result type for operations.
pub type OpsResult<T> = Result<T, OpsError>;

/// Errors that can occur during operations.
#[derive(Debug, Error)]
pub enum OpsError {
    /// A required data file does not exist.
    #[error("Data file not found: {path}")]
    DataFileMissing { path: PathBuf },

    /// The catalog documents are malformed.
    #[error(transparent)]
    Catalog(#[from] CoreError),

    /// The selected store backend lacks required settings.
    #[error("Store '{backend}' is not configured: {missing}")]
    StoreNotConfigured {
        backend: &'static str,
        missing: &'static str,
    },

    /// The store rejected or failed to persist a record.
    #[error("{0}")]
    Store(String),

    /// HTTP error talking to a remote store.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
