pub mod admin;
pub mod auth;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Every HTML route of the site.
///
/// ```text
/// /                                      home
/// /planets, /planets/{id}                public planet pages
/// /galaxies, /galaxies/{id}              public galaxy pages
///
/// /admin/login, /admin/logout            session (public)
/// /admin                                 dashboard (admin only)
/// /admin/{planets,galaxies,users}/...    management (admin only)
/// ```
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .merge(auth::router())
        .merge(admin::router())
}
