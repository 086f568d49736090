//! HS256 session tokens.
//!
//! A token carries the identity and role the user had at login. Verification
//! never consults the database, so a role change only takes effect once the
//! old token expires.

use chrono::Utc;
use cosmos_core::types::DbId;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Default session lifetime in hours.
pub const DEFAULT_EXPIRY_HOURS: i64 = 24;

/// Longest accepted session lifetime in hours (one year).
pub const MAX_EXPIRY_HOURS: i64 = 24 * 365;

/// JWT claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub username: String,
    /// Role name at issuance (`"admin"` or `"user"`).
    pub role: String,
    pub user_id: DbId,
    /// Issued-at (UTC Unix timestamp).
    pub iat: i64,
    /// Not-before (UTC Unix timestamp).
    pub nbf: i64,
    /// Expiration (UTC Unix timestamp).
    pub exp: i64,
}

/// Signing secret and session lifetime, resolved once at startup.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_hours: i64,
}

impl JwtConfig {
    /// Session lifetime in seconds. Also used as the cookie `Max-Age`.
    pub fn ttl_secs(&self) -> i64 {
        self.expiry_hours.saturating_mul(3600)
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiry_hours", &self.expiry_hours)
            .finish()
    }
}

/// Why a token was rejected (or could not be produced).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token signature does not match")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("token is not valid yet")]
    NotYetValid,
    #[error("token is malformed")]
    Malformed,
    #[error("token could not be signed: {0}")]
    Signing(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::InvalidSignature,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::ImmatureSignature => TokenError::NotYetValid,
            _ => TokenError::Malformed,
        }
    }
}

/// Issue a session token valid from now until now + the configured lifetime.
pub fn issue_token(
    username: &str,
    role: &str,
    user_id: DbId,
    config: &JwtConfig,
) -> Result<String, TokenError> {
    issue_token_at(username, role, user_id, config, Utc::now().timestamp())
}

/// Issue a token as if the current time were `now`.
pub fn issue_token_at(
    username: &str,
    role: &str,
    user_id: DbId,
    config: &JwtConfig,
    now: i64,
) -> Result<String, TokenError> {
    let claims = Claims {
        username: username.to_string(),
        role: role.to_string(),
        user_id,
        iat: now,
        nbf: now,
        exp: now.saturating_add(config.ttl_secs()),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| TokenError::Signing(e.to_string()))
}

/// Verify the signature and validity window of a token.
///
/// No clock leeway is applied: a token is rejected the second after `exp`.
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.set_required_spec_claims(&["exp", "nbf", "iat"]);

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_hours: DEFAULT_EXPIRY_HOURS,
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let config = test_config();
        let token = issue_token("andromeda", "admin", 7, &config).unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.username, "andromeda");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.nbf, claims.iat);
        assert_eq!(claims.exp, claims.iat + 24 * 3600);
    }

    #[test]
    fn test_claims_survive_round_trip_exactly() {
        let config = test_config();
        let now = Utc::now().timestamp();
        let token = issue_token_at("vega", "user", 3, &config, now).unwrap();

        let expected = Claims {
            username: "vega".into(),
            role: "user".into(),
            user_id: 3,
            iat: now,
            nbf: now,
            exp: now.saturating_add(config.ttl_secs()),
        };
        assert_eq!(verify_token(&token, &config).unwrap(), expected);
    }

    #[test]
    fn test_expired_token() {
        let config = test_config();
        let issued = Utc::now().timestamp() - config.ttl_secs() - 300;
        let token = issue_token_at("vega", "admin", 1, &config, issued).unwrap();

        assert_eq!(verify_token(&token, &config), Err(TokenError::Expired));
    }

    #[test]
    fn test_token_from_the_future() {
        let config = test_config();
        let issued = Utc::now().timestamp() + 3600;
        let token = issue_token_at("vega", "admin", 1, &config, issued).unwrap();

        assert_eq!(verify_token(&token, &config), Err(TokenError::NotYetValid));
    }

    #[test]
    fn test_different_secret() {
        let token = issue_token("vega", "admin", 1, &test_config()).unwrap();
        let other = JwtConfig {
            secret: "a-completely-different-secret".into(),
            expiry_hours: DEFAULT_EXPIRY_HOURS,
        };

        assert_eq!(verify_token(&token, &other), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_garbage_is_malformed() {
        let config = test_config();
        assert_eq!(verify_token("not-a-token", &config), Err(TokenError::Malformed));
        assert_eq!(verify_token("", &config), Err(TokenError::Malformed));
    }

    #[test]
    fn test_huge_lifetime_saturates() {
        let config = JwtConfig {
            expiry_hours: i64::MAX,
            ..test_config()
        };
        assert_eq!(config.ttl_secs(), i64::MAX);
        assert!(issue_token_at("captain", "admin", 1, &config, 1_700_000_000).is_ok());
    }

    #[test]
    fn test_debug_hides_secret() {
        let rendered = format!("{:?}", test_config());
        assert!(!rendered.contains("long-enough"));
    }
}
