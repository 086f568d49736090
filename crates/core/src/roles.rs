//! Well-known role names and account policies.
//!
//! Role names must match the `ck_users_role` constraint in
//! `20260301000001_create_users_table.sql`.

use crate::types::DbId;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Every role a user row may carry.
pub const ALL_ROLES: [&str; 2] = [ROLE_ADMIN, ROLE_USER];

/// The bootstrap administrator. This account can never be deleted.
pub const PROTECTED_USER_ID: DbId = 1;

/// Returns `true` if `role` is one of [`ALL_ROLES`].
pub fn is_known_role(role: &str) -> bool {
    ALL_ROLES.contains(&role)
}
