use axum::routing::get;
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Read-only catalog pages, no authentication.
///
/// ```text
/// GET /                -> home
/// GET /planets         -> list_planets
/// GET /planets/{id}    -> show_planet
/// GET /galaxies        -> list_galaxies
/// GET /galaxies/{id}   -> show_galaxy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(public::home))
        .route("/planets", get(public::list_planets))
        .route("/planets/{id}", get(public::show_planet))
        .route("/galaxies", get(public::list_galaxies))
        .route("/galaxies/{id}", get(public::show_galaxy))
}
