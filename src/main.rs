//! Placard server entry point.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use dotenvy::dotenv;
use placard::{config::AppConfig, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before config reads the environment
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED)
    telemetry::init();

    let config = Arc::new(AppConfig::load()?);
    tracing::info!(
        name: "config.loaded",
        port = config.server.port,
        identity_required = config.security.identity_required,
        catalog = ?config.catalog.path,
        "Configuration loaded"
    );

    server::start_server(config).await
}
