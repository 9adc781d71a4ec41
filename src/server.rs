use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::api;
use crate::catalog::TemplateCatalog;
use crate::config::AppConfig;
use crate::security::{middleware::identity_middleware, rate_limit::rate_limit_middleware};

/// Request bodies above this size are rejected.
const BODY_LIMIT: usize = 1024 * 1024;

/// Load the configured catalog, falling back to the built-in templates.
pub fn load_catalog(config: &AppConfig) -> anyhow::Result<TemplateCatalog> {
    let catalog = match &config.catalog.path {
        Some(path) => TemplateCatalog::load_from_file(path)?,
        None => {
            let catalog = TemplateCatalog::builtin()?;
            info!(templates = catalog.len(), "Using built-in template catalog");
            catalog
        }
    };
    Ok(catalog)
}

/// Build the full application router with middleware applied.
///
/// Layers run outermost first: rate limit, timeout, body limit, trace,
/// identity.
pub fn build_router(state: AppState) -> Router {
    // A disabled timeout still keeps the layer so the router type stays the
    // same; it just never fires in practice.
    let timeout_duration = if state.config.resilience.timeout_disabled {
        Duration::from_secs(365 * 24 * 60 * 60) // 1 year
    } else {
        Duration::from_secs(state.config.resilience.timeout_secs)
    };

    api::router()
        .nest_service("/static", ServeDir::new("static"))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            identity_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(middleware::from_fn(move |req: Request, next: Next| {
            let duration = timeout_duration;
            async move {
                match tokio::time::timeout(duration, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
                }
            }
        }))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let catalog = load_catalog(&config)?;
    let state = AppState::new((*config).clone(), catalog);
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
