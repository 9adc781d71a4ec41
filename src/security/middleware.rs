use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::claims::{AuthContext, decode_identity};
use crate::AppState;
use crate::error::AppError;

/// Attach the gateway-provided identity to the request.
///
/// The header holds base64url JSON claims that were verified upstream; nothing
/// is verified here.
pub async fn identity_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let security = &state.config.security;

    // 1. Get identity header
    let header_val = request
        .headers()
        .get(security.identity_header.as_str())
        .map(|h| {
            h.to_str()
                .map(str::to_owned)
                .map_err(|e| AppError::MalformedIdentity(e.to_string()))
        })
        .transpose()?;

    let Some(header_val) = header_val else {
        if security.identity_required {
            return Err(AppError::Unauthenticated);
        }
        return Ok(next.run(request).await);
    };

    // 2. Decode claims
    let claims = decode_identity(&header_val).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected identity header");
    })?;

    // 3. Inject context
    let context = AuthContext::from(claims);
    tracing::debug!(user_id = %context.user_id, "Identity attached");
    request.extensions_mut().insert(context);
    Ok(next.run(request).await)
}
