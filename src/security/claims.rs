use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::request::Parts,
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Claims forwarded by the gateway.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthClaims {
    pub sub: String, // User ID (Subject)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: usize, // Expiration time (UNIX timestamp)
}

/// Identity attached to a request by the identity middleware.
#[derive(Clone, Debug, Serialize)]
pub struct AuthContext {
    pub user_id: String,
    pub claims: AuthClaims,
}

impl From<AuthClaims> for AuthContext {
    fn from(claims: AuthClaims) -> Self {
        Self {
            user_id: claims.sub.clone(),
            claims,
        }
    }
}

impl AuthContext {
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.claims.roles.iter().any(|r| r == role)
    }
}

/// Encode claims the way the gateway does: base64url JSON, unpadded.
pub fn encode_identity(claims: &AuthClaims) -> Result<String, serde_json::Error> {
    Ok(URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?))
}

/// Inverse of [`encode_identity`].
pub fn decode_identity(value: &str) -> Result<AuthClaims, AppError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(value.trim())
        .map_err(|e| AppError::MalformedIdentity(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| AppError::MalformedIdentity(e.to_string()))
}

/// Extractor for the caller's [`AuthContext`].
///
/// `CurrentUser` rejects with 401 when no identity is attached;
/// `Option<CurrentUser>` never rejects.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub AuthContext);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .map(Self)
            .ok_or(AppError::Unauthenticated)
    }
}

impl<S> OptionalFromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<AuthContext>().cloned().map(Self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> AuthClaims {
        AuthClaims {
            sub: "user-1".to_string(),
            name: Some("Ada".to_string()),
            email: None,
            roles: vec!["editor".to_string()],
            exp: 4_102_444_800,
        }
    }

    #[test]
    fn identity_header_round_trips() {
        let encoded = encode_identity(&claims()).unwrap();
        assert!(!encoded.contains('='));
        assert_eq!(decode_identity(&encoded).unwrap(), claims());
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(
            decode_identity("not base64!"),
            Err(AppError::MalformedIdentity(_))
        ));
        let not_json = URL_SAFE_NO_PAD.encode(b"hello");
        assert!(matches!(
            decode_identity(&not_json),
            Err(AppError::MalformedIdentity(_))
        ));
    }

    #[test]
    fn roles_default_to_empty() {
        let encoded = URL_SAFE_NO_PAD.encode(br#"{"sub":"u","exp":1}"#);
        let context = AuthContext::from(decode_identity(&encoded).unwrap());
        assert_eq!(context.user_id, "u");
        assert!(!context.has_role("editor"));
    }

    #[test]
    fn context_checks_roles() {
        let context = AuthContext::from(claims());
        assert!(context.has_role("editor"));
        assert!(!context.has_role("admin"));
    }
}
