//! API route handlers.

mod data;
mod health;
mod maps;
mod submit;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::types::ApiState;

/// Create the site router: static data, maps and the `/api` endpoints.
pub fn create_router(state: Arc<ApiState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/submit",
            post(submit::submit_handler).fallback(submit::method_not_allowed),
        );

    Router::new()
        // Catalog documents
        .route("/data/stateOptions.json", get(data::state_options_handler))
        .route("/data/districtToRep.json", get(data::district_to_rep_handler))
        // District maps
        .route("/states/{file}", get(maps::map_handler))
        .nest("/api", api)
        // Request tracing (enable with RUST_LOG=tower_http=info or higher)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
