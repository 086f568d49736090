//! Session-token lookup and verification.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use cosmos_core::error::CoreError;
use cosmos_core::types::DbId;

use crate::auth::cookie::{read_cookie, AUTH_COOKIE};
use crate::auth::jwt::{verify_token, Claims, JwtConfig};

/// Authenticated user taken from a verified session token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub username: String,
    /// Role at token issuance.
    pub role: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
            role: claims.role,
        }
    }
}

/// Locate the session token: the `auth_token` cookie first, then an
/// `Authorization: Bearer` header.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    if let Some(token) = read_cookie(headers, AUTH_COOKIE).filter(|t| !t.is_empty()) {
        return Some(token);
    }
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Verify the request's session token, whatever its role.
pub fn authenticate(headers: &HeaderMap, jwt: &JwtConfig) -> Result<Claims, CoreError> {
    let token = extract_token(headers)
        .ok_or_else(|| CoreError::Unauthorized("Missing session token".into()))?;

    verify_token(token, jwt).map_err(|err| {
        tracing::debug!(reason = %err, "Rejected session token");
        CoreError::Unauthorized("Invalid or expired session".into())
    })
}
