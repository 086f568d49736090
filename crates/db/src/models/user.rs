//! User entity model and DTOs.

use cosmos_core::error::CoreError;
use cosmos_core::roles::is_known_role;
use cosmos_core::types::{DbId, Timestamp};
use cosmos_core::validation::{require_text, validate_email};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize or render this directly.
/// Use [`UserResponse`] for anything that leaves the process.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
}

/// Safe user representation (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: Timestamp,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// DTO for updating a user. `password_hash: None` keeps the current password.
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub username: String,
    pub email: String,
    pub role: String,
    pub password_hash: Option<String>,
}

fn validate_identity(username: &str, email: &str, role: &str) -> Result<(), CoreError> {
    require_text("Username", username)?;
    require_text("Email", email)?;
    validate_email(email)?;
    if !is_known_role(role) {
        return Err(CoreError::Validation(
            "Role must be 'admin' or 'user'".into(),
        ));
    }
    Ok(())
}

impl CreateUser {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_identity(&self.username, &self.email, &self.role)
    }
}

impl UpdateUser {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_identity(&self.username, &self.email, &self.role)
    }
}
