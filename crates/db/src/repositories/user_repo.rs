//! Repository for the `users` table.

use cosmos_core::roles::PROTECTED_USER_ID;
use cosmos_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User};
use crate::error::RepoError;
use crate::models::DeleteOutcome;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, role, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Validate and insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, RepoError> {
        input.validate()?;
        let query = format!(
            "INSERT INTO users (username, email, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_one(pool)
            .await?;
        Ok(user)
    }

    /// Insert a user only if the table is empty, in a single statement.
    ///
    /// Returns `None` when at least one user already existed.
    pub async fn create_first(
        pool: &PgPool,
        input: &CreateUser,
    ) -> Result<Option<User>, RepoError> {
        input.validate()?;
        let query = format!(
            "INSERT INTO users (username, email, password_hash, role)
             SELECT $1, $2, $3, $4
             WHERE NOT EXISTS (SELECT 1 FROM users)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if another user already owns `username` or `email`.
    ///
    /// `exclude_id` skips the user being edited.
    pub async fn identity_taken(
        pool: &PgPool,
        username: &str,
        email: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM users
                WHERE (username = $1 OR email = $2)
                  AND ($3::BIGINT IS NULL OR id <> $3)
             )",
        )
        .bind(username)
        .bind(email)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// List all users, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id DESC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }

    pub async fn count_by_role(pool: &PgPool, role: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(role)
            .fetch_one(pool)
            .await
    }

    /// Update a user's identity and role; the password hash changes only
    /// when `input.password_hash` is `Some`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, RepoError> {
        input.validate()?;
        let query = format!(
            "UPDATE users SET
                username = $2,
                email = $3,
                role = $4,
                password_hash = COALESCE($5, password_hash)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.role)
            .bind(&input.password_hash)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Permanently delete a user. The bootstrap account is never removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<DeleteOutcome, sqlx::Error> {
        if id == PROTECTED_USER_ID {
            return Ok(DeleteOutcome::Protected);
        }
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() > 0 {
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::NotFound)
        }
    }
}
