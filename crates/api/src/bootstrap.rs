//! First-start seeding of the administrator account.

use cosmos_core::error::CoreError;
use cosmos_db::error::RepoError;
use cosmos_db::models::user::CreateUser;
use cosmos_db::repositories::UserRepo;
use cosmos_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::config::AdminConfig;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Invalid admin account settings: {0}")]
    Invalid(#[from] CoreError),

    #[error("Failed to hash the admin password: {0}")]
    Hash(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<RepoError> for BootstrapError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Validation(core) => BootstrapError::Invalid(core),
            RepoError::Database(db) => BootstrapError::Database(db),
        }
    }
}

/// Create the configured administrator if the `users` table is empty.
///
/// On a fresh database the seeded row receives id 1, which makes it the
/// protected account. Returns whether a row was inserted.
pub async fn seed_admin(pool: &DbPool, admin: &AdminConfig) -> Result<bool, BootstrapError> {
    if UserRepo::count(pool).await? > 0 {
        tracing::debug!("Users already present, skipping admin bootstrap");
        return Ok(false);
    }

    validate_password_strength(&admin.password, MIN_PASSWORD_LENGTH)
        .map_err(CoreError::Validation)?;
    let input = CreateUser {
        username: admin.username.clone(),
        email: admin.email.clone(),
        password_hash: hash_password(&admin.password)
            .map_err(|e| BootstrapError::Hash(e.to_string()))?,
        role: cosmos_core::roles::ROLE_ADMIN.to_string(),
    };

    match UserRepo::create_first(pool, &input).await? {
        Some(user) => {
            tracing::info!(
                user_id = user.id,
                username = %user.username,
                "Seeded administrator account"
            );
            Ok(true)
        }
        // Another instance seeded concurrently.
        None => Ok(false),
    }
}
