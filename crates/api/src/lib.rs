//! Cosmos catalog web server library.
//!
//! Exposes the building blocks (config, state, auth, handlers, routes,
//! views) so integration tests and the binary entrypoint can both use them.

pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
