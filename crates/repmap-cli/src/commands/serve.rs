//! Serve command implementation.
//!
//! ## Layout
//!
//! - `/data/*.json`, `/states/*.svg`, `/api/*` - via repmap-api
//! - `/` - the page assets from `public_dir`, when configured

use std::net::SocketAddr;

use anyhow::{Context, Result};
use repmap_api::{create_api_state, create_router};
use repmap_ops::{load_catalog, open_store, Config, MapLibrary};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::{info, warn};

/// Execute the serve command.
pub async fn execute(config: &Config) -> Result<()> {
    let catalog = load_catalog(&config.data_dir)
        .with_context(|| format!("Failed to load catalog from {}", config.data_dir.display()))?;
    let maps = MapLibrary::new(&config.states_dir);
    let missing = maps.missing_states();
    if !missing.is_empty() {
        warn!(
            count = missing.len(),
            dir = %config.states_dir.display(),
            "Some states have no map file"
        );
    }
    let store = open_store(config)?;

    println!(
        "✅ Catalog: {} states, {} representatives, {} districts",
        catalog.options.state_count(),
        catalog.options.rep_count(),
        catalog.districts.len()
    );

    let mut app = create_router(create_api_state(catalog, maps, store.clone()));
    if let Some(public_dir) = &config.public_dir {
        info!(dir = %public_dir.display(), "serving page assets");
        app = app.fallback_service(ServeDir::new(public_dir));
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    // Print server info
    println!();
    println!("🚀 repmap server");
    println!("   URL:   http://localhost:{}", config.port);
    println!("   API:   http://localhost:{}/api/health", config.port);
    println!("   Store: {}", store.backend());
    println!();
    println!("   Press Ctrl+C to stop");
    println!();

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
