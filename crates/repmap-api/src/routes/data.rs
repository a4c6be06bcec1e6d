//! Catalog documents, served as loaded at startup.

use std::sync::Arc;

use axum::{extract::State, Json};
use repmap_core::{DistrictToRep, RepresentativeOptions};

use crate::types::ApiState;

/// GET /data/stateOptions.json
pub async fn state_options_handler(
    State(state): State<Arc<ApiState>>,
) -> Json<RepresentativeOptions> {
    Json(state.catalog.options.clone())
}

/// GET /data/districtToRep.json
pub async fn district_to_rep_handler(State(state): State<Arc<ApiState>>) -> Json<DistrictToRep> {
    Json(state.catalog.districts.clone())
}
