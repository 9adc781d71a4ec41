use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde_json::Value;

use super::templates::ModeQuery;
use crate::AppState;
use crate::error::AppError;
use crate::ui::pages;

/// GET / - Catalog overview.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(pages::index_page(state.catalog.list()))
}

/// GET /templates/{id} - Template editor.
pub async fn template(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog.get(&id) {
        Some(template) => Html(pages::template_page(template)).into_response(),
        None => (StatusCode::NOT_FOUND, Html(pages::not_found_page(&id))).into_response(),
    }
}

/// GET /fragments/templates/{id}/placeholders - HTMX swap target.
pub async fn placeholder_fragment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ModeQuery>,
) -> Result<Html<String>, AppError> {
    let records = state.catalog.placeholders(&id)?;
    Ok(Html(pages::placeholder_fragment(records, query.mode)))
}

/// GET /api/theme - Tailwind configuration object.
pub async fn tailwind_theme(State(state): State<AppState>) -> Json<Value> {
    Json(state.theme.tailwind_config())
}

/// GET /theme.css - CSS custom properties.
pub async fn theme_css(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        state.theme.css_variables(),
    )
}
