//! Health check endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::types::{ApiResponse, ApiState, HealthResponse};

/// Handler for GET /api/health
pub async fn health_handler(
    State(state): State<Arc<ApiState>>,
) -> Json<ApiResponse<HealthResponse>> {
    let response = HealthResponse {
        status: "ok".to_string(),
        states: state.catalog.options.state_count(),
        districts: state.catalog.districts.len(),
        store: state.store.backend().to_string(),
    };
    Json(ApiResponse::new(response))
}
