//! Route definitions for the admin area.

use axum::routing::get;
use axum::Router;

use crate::handlers::{dashboard, galaxies, planets, users};
use crate::state::AppState;

/// All routes require the `admin` role (enforced by the `RequireAdmin`
/// extractor in each handler).
///
/// ```text
/// GET       /admin                           -> dashboard
/// GET       /admin/planets                   -> planets::list
/// GET|POST  /admin/planets/new               -> planets::new_form / create
/// GET|POST  /admin/planets/{id}/edit         -> planets::edit_form / update
/// GET|POST  /admin/planets/{id}/delete       -> planets::confirm_delete / delete
/// (same for /admin/galaxies)
/// GET       /admin/users                     -> users::list
/// GET       /admin/users/{id}                -> users::show
/// GET|POST  /admin/users/new | {id}/edit | {id}/delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(dashboard::dashboard))
        // Planets
        .route("/admin/planets", get(planets::list))
        .route(
            "/admin/planets/new",
            get(planets::new_form).post(planets::create),
        )
        .route(
            "/admin/planets/{id}/edit",
            get(planets::edit_form).post(planets::update),
        )
        .route(
            "/admin/planets/{id}/delete",
            get(planets::confirm_delete).post(planets::delete),
        )
        // Galaxies
        .route("/admin/galaxies", get(galaxies::list))
        .route(
            "/admin/galaxies/new",
            get(galaxies::new_form).post(galaxies::create),
        )
        .route(
            "/admin/galaxies/{id}/edit",
            get(galaxies::edit_form).post(galaxies::update),
        )
        .route(
            "/admin/galaxies/{id}/delete",
            get(galaxies::confirm_delete).post(galaxies::delete),
        )
        // Users
        .route("/admin/users", get(users::list))
        .route("/admin/users/new", get(users::new_form).post(users::create))
        .route("/admin/users/{id}", get(users::show))
        .route(
            "/admin/users/{id}/edit",
            get(users::edit_form).post(users::update),
        )
        .route(
            "/admin/users/{id}/delete",
            get(users::confirm_delete).post(users::delete),
        )
}
