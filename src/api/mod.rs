//! HTTP handlers.
//!
//! - [`templates`]: JSON API over the catalog and the placeholder renderer
//! - [`pages`]: HTML documents, HTMX fragments and theme assets

pub mod pages;
pub mod templates;

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::AppState;
use crate::security::{AuthContext, CurrentUser};

/// Every route, without middleware or state.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/me", get(me))
        .route(
            "/api/templates",
            get(templates::list_templates).post(templates::create_template),
        )
        .route(
            "/api/templates/{id}",
            get(templates::get_template).delete(templates::delete_template),
        )
        .route(
            "/api/templates/{id}/placeholders",
            get(templates::template_placeholders),
        )
        .route("/api/templates/{id}/fill", post(templates::fill_template))
        .route(
            "/api/placeholders/render",
            post(templates::render_placeholders),
        )
        .route("/api/theme", get(pages::tailwind_theme))
        .route("/theme.css", get(pages::theme_css))
        .route("/", get(pages::index))
        .route("/templates/{id}", get(pages::template))
        .route(
            "/fragments/templates/{id}/placeholders",
            get(pages::placeholder_fragment),
        )
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /api/me - The identity attached to this request.
async fn me(CurrentUser(context): CurrentUser) -> Json<AuthContext> {
    Json(context)
}
