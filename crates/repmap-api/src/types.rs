//! API types and DTOs.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use repmap_core::Catalog;
use repmap_ops::{MapLibrary, SignupStore};
use serde::{Deserialize, Serialize};

/// Shared application state for the API.
pub struct ApiState {
    /// Catalog loaded at startup; never mutated.
    pub catalog: Arc<Catalog>,
    /// District map files.
    pub maps: MapLibrary,
    /// Where signups go.
    pub store: Arc<dyn SignupStore>,
}

/// Response wrapper with timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response data.
    pub data: T,
    /// Unix timestamp in milliseconds.
    pub timestamp: u64,
}

impl<T> ApiResponse<T> {
    /// Create a new API response with current timestamp.
    pub fn new(data: T) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self { data, timestamp }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Number of states with a representative list.
    pub states: usize,
    /// Number of mapped districts.
    pub districts: usize,
    /// Signup store backend name.
    pub store: String,
}
