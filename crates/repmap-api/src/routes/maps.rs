//! District map files.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::types::ApiState;

/// GET /states/{file}, e.g. `/states/new-york.svg`.
pub async fn map_handler(State(state): State<Arc<ApiState>>, Path(file): Path<String>) -> Response {
    match state.maps.read(&file).await {
        Ok(Some(markup)) => {
            debug!(file = %file, bytes = markup.len(), "map_handler: served");
            ([(header::CONTENT_TYPE, "image/svg+xml")], markup).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, "SVG not found.").into_response(),
        Err(e) => {
            error!(file = %file, error = %e, "map_handler: read failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "SVG could not be read.").into_response()
        }
    }
}
