//! Signup payloads exchanged with `POST /api/submit`.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Message returned when a signup is stored.
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Signup successful!";
/// Message returned when the body lacks a required field.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing email, state, or option.";

/// A signup as persisted: one row, no uniqueness constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRecord {
    pub email: String,
    pub state: String,
    pub rep_name: String,
}

/// Incoming request body. Every field is optional so that a partial body
/// decodes and can be rejected with a field-level message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub state: Option<String>,
    pub rep_name: Option<String>,
}

impl SignupRequest {
    /// Turn the request into a record, rejecting missing or empty fields.
    pub fn into_record(self) -> CoreResult<SignupRecord> {
        fn required(value: Option<String>, field: &'static str) -> CoreResult<String> {
            value
                .filter(|v| !v.is_empty())
                .ok_or(CoreError::MissingField(field))
        }

        Ok(SignupRecord {
            email: required(self.email, "email")?,
            state: required(self.state, "state")?,
            rep_name: required(self.rep_name, "rep_name")?,
        })
    }
}

/// Body of a 200 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitSuccess {
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Body of any error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitFailure {
    pub error: String,
}

impl SubmitFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
