use repmap_core::CoreError;
use thiserror::Error;

/// Failures of the runtime and its HTTP backend.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid server URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Catalog(#[from] CoreError),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Message reported by the signup endpoint.
    #[error("{0}")]
    Server(String),

    #[error("Widget runtime has stopped")]
    Closed,
}

pub type WidgetResult<T> = Result<T, WidgetError>;
