//! Error type for repository writes.

use cosmos_core::error::CoreError;

/// Failure of a repository write.
///
/// Inputs are validated before any statement runs, so a `Validation`
/// error guarantees nothing was written.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl RepoError {
    /// The underlying driver error, if the database rejected the statement.
    pub fn as_database_error(&self) -> Option<&dyn sqlx::error::DatabaseError> {
        match self {
            RepoError::Database(err) => err.as_database_error(),
            RepoError::Validation(_) => None,
        }
    }
}
