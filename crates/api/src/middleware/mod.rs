//! Authentication and authorization.
//!
//! - [`auth::authenticate`] -- verifies any holder of a valid session token.
//! - [`rbac::RequireAdmin`] -- extractor requiring the `admin` role.

pub mod auth;
pub mod rbac;
