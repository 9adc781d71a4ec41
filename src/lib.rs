//! Placard
//!
//! A template catalog that presents each template's substitution
//! placeholders as chips or as an inline sentence, rendered server-side.
//!
//! # Architecture
//!
//! - **Server**: Axum router with JSON API, HTML pages and HTMX fragments
//! - **Catalog**: In-memory, YAML-backed template store
//! - **UI**: Leptos SSR components styled by a typed Tailwind theme
//! - **Security**: Explicit identity context built from a gateway header
//!
//! # Modules
//!
//! - [`placeholder`]: Placeholder records and their two renderings
//! - [`catalog`]: Templates, validation and filling
//! - [`ui`]: Components, pages and fragments
//! - [`theme`]: Theme tokens, CSS variables and Tailwind config
//! - [`security`]: Identity context and rate limiting
//! - [`server`]: Router construction and startup

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::implicit_hasher)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod placeholder;
pub mod security;
pub mod server;
pub mod telemetry;
pub mod theme;
pub mod ui;

use crate::catalog::TemplateCatalog;
use crate::config::AppConfig;
use crate::security::rate_limit::RateLimiter;
use crate::theme::Theme;

use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Template catalog.
    pub catalog: TemplateCatalog,
    /// Theme served to pages and as CSS/Tailwind config.
    pub theme: Arc<Theme>,
    /// Global Rate Limiter
    pub rate_limiter: Arc<RateLimiter>,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Assemble state from configuration and an already loaded catalog.
    #[must_use]
    pub fn new(config: AppConfig, catalog: TemplateCatalog) -> Self {
        let rate_limiter = Arc::new(RateLimiter::new(
            config.resilience.requests_per_second,
            config.resilience.burst_size,
        ));
        Self {
            catalog,
            theme: Arc::new(config.theme.clone()),
            rate_limiter,
            config: Arc::new(config),
        }
    }
}
