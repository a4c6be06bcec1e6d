//! Signup submission.
//!
//! `POST /api/submit` with `{email, state, rep_name}`:
//!
//! - 200 `{message, data}` once the store accepted the record
//! - 400 `{error}` when a field is missing or the body is not JSON
//! - 405 `{error}` for any other method
//! - 500 `{error}` when the store fails

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use repmap_core::{
    SignupRequest, SubmitFailure, SubmitSuccess, MISSING_FIELDS_MESSAGE, SIGNUP_SUCCESS_MESSAGE,
};
use tracing::{error, info, warn};

use crate::types::ApiState;

/// Handler for POST /api/submit
pub async fn submit_handler(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "submit: unreadable body");
            SignupRequest::default()
        }
    };

    let record = match request.into_record() {
        Ok(record) => record,
        Err(e) => {
            warn!(error = %e, "submit: rejected");
            return (
                StatusCode::BAD_REQUEST,
                Json(SubmitFailure::new(MISSING_FIELDS_MESSAGE)),
            )
                .into_response();
        }
    };

    match state.store.insert(&record).await {
        Ok(data) => {
            info!(
                state = %record.state,
                rep = %record.rep_name,
                store = state.store.backend(),
                "signup_stored"
            );
            (
                StatusCode::OK,
                Json(SubmitSuccess {
                    message: SIGNUP_SUCCESS_MESSAGE.to_string(),
                    data,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, store = state.store.backend(), "submit: store failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmitFailure::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Any method other than POST on /api/submit.
pub async fn method_not_allowed() -> (StatusCode, Json<SubmitFailure>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(SubmitFailure::new("Method not allowed. Use POST.")),
    )
}
