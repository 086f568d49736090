//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - An input DTO with a `validate` method that must pass
//!   before the DTO is handed to a repository

pub mod galaxy;
pub mod planet;
pub mod user;

use cosmos_core::error::CoreError;
use cosmos_core::types::DbId;

/// Result of a repository delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Exactly one row was removed.
    Deleted,
    /// No row with the given id exists.
    NotFound,
    /// Rows in another table still reference this one; nothing was removed.
    HasDependents { count: i64, dependent: &'static str },
    /// The row is covered by a fixed protection policy; nothing was removed.
    Protected,
}

impl DeleteOutcome {
    /// Translate the outcome into the domain error taxonomy.
    pub fn into_result(self, entity: &'static str, id: DbId) -> Result<(), CoreError> {
        match self {
            DeleteOutcome::Deleted => Ok(()),
            DeleteOutcome::NotFound => Err(CoreError::NotFound { entity, id }),
            DeleteOutcome::HasDependents { count, dependent } => Err(CoreError::Conflict(format!(
                "{entity} with id {id} still has {count} {dependent}(s). \
                 Remove or reassign them first."
            ))),
            DeleteOutcome::Protected => Err(CoreError::Conflict(format!(
                "{entity} with id {id} is protected and cannot be deleted"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn deleted_is_ok() {
        assert!(DeleteOutcome::Deleted.into_result("Galaxy", 1).is_ok());
    }

    #[test]
    fn missing_row_is_not_found() {
        assert_matches!(
            DeleteOutcome::NotFound.into_result("Planet", 9),
            Err(CoreError::NotFound { entity: "Planet", id: 9 })
        );
    }

    #[test]
    fn dependents_and_protection_are_conflicts() {
        let blocked = DeleteOutcome::HasDependents {
            count: 3,
            dependent: "planet",
        };
        assert_matches!(
            blocked.into_result("Galaxy", 2),
            Err(CoreError::Conflict(msg)) if msg.contains("3 planet(s)")
        );
        assert_matches!(
            DeleteOutcome::Protected.into_result("User", 1),
            Err(CoreError::Conflict(msg)) if msg.contains("protected")
        );
    }
}
