//! HTTP-facing error type.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::catalog::CatalogError;

/// Errors surfaced by handlers and middleware.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Catalog lookup, validation or fill failure.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// No identity attached where one is required.
    #[error("Authentication required")]
    Unauthenticated,

    /// The identity header could not be decoded.
    #[error("Malformed identity header: {0}")]
    MalformedIdentity(String),

    /// The global request budget is exhausted.
    #[error("Too many requests, retry in {retry_after}s")]
    RateLimited {
        /// Seconds until a token is available.
        retry_after: u64,
    },

    /// Anything else that is the server's fault.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Status code sent for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Catalog(err) => match err {
                CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
                CatalogError::DuplicateTemplate(_) | CatalogError::DuplicateKey { .. } => {
                    StatusCode::CONFLICT
                }
                CatalogError::Invalid(_) | CatalogError::MissingValue(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                CatalogError::Io(_) | CatalogError::Yaml(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::MalformedIdentity(_) => StatusCode::BAD_REQUEST,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }
        let mut response = (status, Json(json!({ "error": self.to_string() }))).into_response();
        if let Self::RateLimited { retry_after } = self {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(retry_after));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_map_to_client_statuses() {
        let cases = [
            (CatalogError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (CatalogError::DuplicateTemplate("x".into()), StatusCode::CONFLICT),
            (
                CatalogError::MissingValue("k".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn rate_limited_sets_retry_after() {
        let response = AppError::RateLimited { retry_after: 3 }.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "3");
    }

    #[test]
    fn response_carries_message() {
        let response = AppError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
