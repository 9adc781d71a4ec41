use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::AppState;
use crate::catalog::{CatalogError, Template, TemplateDefinition, TemplateSummary};
use crate::error::AppError;
use crate::placeholder::{PlaceholderRecord, RenderMode, render};
use crate::security::CurrentUser;
use crate::ui::pages;

/// Query string selecting a render mode.
#[derive(Debug, Deserialize)]
pub struct ModeQuery {
    #[serde(default)]
    pub mode: RenderMode,
}

/// Output encoding for ad-hoc renders.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Json,
    Html,
}

/// Request body for POST /api/placeholders/render.
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub placeholders: Vec<PlaceholderRecord>,
    #[serde(default)]
    pub mode: RenderMode,
    #[serde(default)]
    pub format: RenderFormat,
}

/// Request body for POST /api/templates/{id}/fill.
#[derive(Debug, Deserialize)]
pub struct FillRequest {
    pub values: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct FillResponse {
    pub text: String,
}

fn rendered_json(records: &[PlaceholderRecord], mode: RenderMode) -> Result<Value, AppError> {
    serde_json::to_value(render(records, mode)).map_err(|e| AppError::Internal(e.to_string()))
}

/// GET /api/templates
pub async fn list_templates(State(state): State<AppState>) -> Json<Vec<TemplateSummary>> {
    Json(state.catalog.list())
}

/// POST /api/templates
pub async fn create_template(
    State(state): State<AppState>,
    user: Option<CurrentUser>,
    Json(definition): Json<TemplateDefinition>,
) -> Result<(StatusCode, Json<Template>), AppError> {
    let template = state.catalog.insert(definition)?;
    tracing::info!(
        name: "catalog.template.created",
        template_id = %template.id,
        placeholders = template.placeholders.len(),
        user_id = user.as_ref().map(|CurrentUser(ctx)| ctx.user_id.as_str()),
        "Template created"
    );
    Ok((StatusCode::CREATED, Json(template)))
}

/// GET /api/templates/{id}
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Template>, AppError> {
    state
        .catalog
        .get(&id)
        .map(Json)
        .ok_or_else(|| CatalogError::NotFound(id).into())
}

/// DELETE /api/templates/{id}
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.catalog.remove(&id) {
        tracing::info!(name: "catalog.template.deleted", template_id = %id, "Template deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CatalogError::NotFound(id).into())
    }
}

/// GET /api/templates/{id}/placeholders?mode=chips|inline
pub async fn template_placeholders(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ModeQuery>,
) -> Result<Json<Value>, AppError> {
    let records = state.catalog.placeholders(&id)?;
    Ok(Json(rendered_json(&records, query.mode)?))
}

/// POST /api/templates/{id}/fill
pub async fn fill_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<FillRequest>,
) -> Result<Json<FillResponse>, AppError> {
    let template = state
        .catalog
        .get(&id)
        .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
    let text = template.fill(&req.values)?;
    tracing::debug!(template_id = %id, "Template filled");
    Ok(Json(FillResponse { text }))
}

/// POST /api/placeholders/render - Render a caller-supplied sequence.
pub async fn render_placeholders(Json(req): Json<RenderRequest>) -> Result<Response, AppError> {
    match req.format {
        RenderFormat::Json => Ok(Json(rendered_json(&req.placeholders, req.mode)?).into_response()),
        RenderFormat::Html => {
            Ok(Html(pages::placeholder_fragment(req.placeholders, req.mode)).into_response())
        }
    }
}
