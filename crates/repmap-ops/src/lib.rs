//! repmap operations layer.
//!
//! Shared by the HTTP service and the CLI: configuration loading, reading the
//! static catalog and map files from disk, and the pluggable signup store.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use repmap_ops::{load_catalog, open_store, Config};
//!
//! #[tokio::main]
//! async fn main() -> repmap_ops::OpsResult<()> {
//!     let config = Config::load()?;
//!     let catalog = load_catalog(&config.data_dir)?;
//!     let store = open_store(&config)?;
//!
//!     println!(
//!         "{} states, {} districts, store = {}",
//!         catalog.options.state_count(),
//!         catalog.districts.len(),
//!         store.backend()
//!     );
//!     Ok(())
//! }
//! ```

mod config;
mod data;
mod error;
mod store;

pub use config::{Config, StoreKind, CONFIG_KEYS};
pub use data::{load_catalog, MapLibrary};
pub use error::{OpsError, OpsResult};
pub use store::{open_store, JsonlStore, MemoryStore, SignupStore, SupabaseStore};
