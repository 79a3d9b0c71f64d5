//! designkit showcase server
//!
//! Builds the token store and component registry, reports catalog health
//! and serves the showcase SPA. Any build-time error or a bind failure
//! exits non-zero.
//!
//! # Usage
//! ```sh
//! SHOWCASE_PORT=3000 SHOWCASE_DIST_DIR=apps/showcase/dist cargo run --bin showcase
//! ```
//!
//! # Environment Variables
//! - `SHOWCASE_BIND_ADDRESS`, `SHOWCASE_PORT` - listen address (default: 0.0.0.0:3000)
//! - `SHOWCASE_DIST_DIR`, `SHOWCASE_ENTRY` - built assets and SPA entry (default: dist/index.html)
//! - `TOKENS_FILE`, `CATALOG_MANIFEST`, `CATALOG_SCAN_DIR`, `DASHBOARD_ROUTES` - catalog sources
//! - `OBSERVABILITY_ENABLED` - Enable metrics reporting (default: true)
//! - `OBSERVABILITY_INTERVAL` - Interval in seconds between metric outputs (default: 60)

use anyhow::Result;
use designkit::application::system::Application;
use designkit::config::Config;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("designkit showcase {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: Listen={}, Dist={}",
        config.showcase.socket_addr(),
        config.showcase.dist_dir.display()
    );

    let app = Application::build(config)?;
    let handle = app.start().await?;
    info!(
        "Showcase running on http://{} ({} components, {} routes). Press Ctrl+C to shutdown.",
        handle.server.local_addr(),
        handle.registry.len(),
        handle.routes.len()
    );

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received. Exiting...");
    handle.server.shutdown().await?;

    Ok(())
}
