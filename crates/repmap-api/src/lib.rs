//! HTTP service for the repmap signup widget.
//!
//! Serves the static data the widget needs and accepts signups.
//!
//! ## Endpoints
//!
//! - `GET /data/stateOptions.json` - state code → representative names
//! - `GET /data/districtToRep.json` - district id → representative name
//! - `GET /states/{key}.svg` - district map of one state
//! - `POST /api/submit` - store `{email, state, rep_name}`
//! - `GET /api/health` - catalog counts and store backend
//!
//! ## Usage
//!
//! ```rust,no_run
//! use repmap_api::{create_api_state, create_router};
//! use repmap_ops::{load_catalog, open_store, Config, MapLibrary};
//!
//! # fn main() -> repmap_ops::OpsResult<()> {
//! let config = Config::load()?;
//! let state = create_api_state(
//!     load_catalog(&config.data_dir)?,
//!     MapLibrary::new(&config.states_dir),
//!     open_store(&config)?,
//! );
//! let router = create_router(state);
//! # let _ = router;
//! # Ok(())
//! # }
//! ```

mod routes;
mod types;

pub use routes::create_router;
pub use types::{ApiResponse, ApiState, HealthResponse};

use std::sync::Arc;

use repmap_core::Catalog;
use repmap_ops::{MapLibrary, SignupStore};

/// Create the shared API state.
pub fn create_api_state(
    catalog: Catalog,
    maps: MapLibrary,
    store: Arc<dyn SignupStore>,
) -> Arc<ApiState> {
    Arc::new(ApiState {
        catalog: Arc::new(catalog),
        maps,
        store,
    })
}
