//! The admin gate.
//!
//! Every administrative handler takes [`RequireAdmin`], so the role check
//! happens before the handler body (and therefore before any repository
//! call) runs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use cosmos_core::error::CoreError;
use cosmos_core::roles::ROLE_ADMIN;

use super::auth::{authenticate, AuthUser};
use crate::auth::jwt::{Claims, JwtConfig};
use crate::error::AppError;
use crate::state::AppState;

/// Check that the request carries a valid token with the `admin` role.
///
/// A missing or invalid token is `Unauthorized` (rendered as a redirect to
/// the login page); a valid non-admin token is `Forbidden`.
pub fn authorize_admin(headers: &HeaderMap, jwt: &JwtConfig) -> Result<Claims, CoreError> {
    let claims = authenticate(headers, jwt)?;
    if claims.role != ROLE_ADMIN {
        tracing::info!(
            user_id = claims.user_id,
            role = %claims.role,
            "Non-admin denied access to admin area"
        );
        return Err(CoreError::Forbidden(
            "You do not have administrator rights".into(),
        ));
    }
    Ok(claims)
}

/// Requires the `admin` role.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Html<String>> {
///     // admin is guaranteed to hold the admin role here
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = authorize_admin(&parts.headers, &state.config.jwt)?;
        Ok(RequireAdmin(claims.into()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::header::{AUTHORIZATION, COOKIE};
    use axum::http::HeaderValue;

    use super::*;
    use crate::auth::jwt::{issue_token, issue_token_at};

    fn jwt() -> JwtConfig {
        JwtConfig {
            secret: "gate-test-secret".into(),
            expiry_hours: 24,
        }
    }

    fn with_cookie(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("auth_token={token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn admin_token_passes() {
        let token = issue_token("root", "admin", 1, &jwt()).unwrap();
        let claims = authorize_admin(&with_cookie(&token), &jwt()).unwrap();
        assert_eq!(claims.user_id, 1);
        assert_eq!(claims.username, "root");
    }

    #[test]
    fn bearer_admin_token_passes() {
        let token = issue_token("root", "admin", 1, &jwt()).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        assert!(authorize_admin(&headers, &jwt()).is_ok());
    }

    #[test]
    fn non_admin_is_forbidden() {
        let token = issue_token("visitor", "user", 5, &jwt()).unwrap();
        assert_matches!(
            authorize_admin(&with_cookie(&token), &jwt()),
            Err(CoreError::Forbidden(_))
        );
    }

    #[test]
    fn missing_or_bad_token_is_unauthorized() {
        assert_matches!(
            authorize_admin(&HeaderMap::new(), &jwt()),
            Err(CoreError::Unauthorized(_))
        );
        assert_matches!(
            authorize_admin(&with_cookie("garbage"), &jwt()),
            Err(CoreError::Unauthorized(_))
        );

        let stale = issue_token_at("root", "admin", 1, &jwt(), 1_000_000).unwrap();
        assert_matches!(
            authorize_admin(&with_cookie(&stale), &jwt()),
            Err(CoreError::Unauthorized(_))
        );
    }
}
