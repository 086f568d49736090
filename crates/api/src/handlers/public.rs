//! Public catalog pages.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use cosmos_core::error::CoreError;
use cosmos_db::repositories::{GalaxyRepo, PlanetRepo};

use super::EntityId;
use crate::error::AppResult;
use crate::state::AppState;
use crate::views;

/// GET /
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let planets = PlanetRepo::count(&state.pool).await?;
    let galaxies = GalaxyRepo::count(&state.pool).await?;
    Ok(Html(views::public::home(planets, galaxies)))
}

/// GET /planets
pub async fn list_planets(State(state): State<AppState>) -> AppResult<Html<String>> {
    let planets = PlanetRepo::list(&state.pool).await?;
    Ok(Html(views::public::planet_list(&planets)))
}

/// GET /planets/{id}
pub async fn show_planet(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Html<String>> {
    let planet = PlanetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Planet",
            id,
        })?;
    Ok(Html(views::public::planet_detail(&planet)))
}

/// GET /galaxies
pub async fn list_galaxies(State(state): State<AppState>) -> AppResult<Html<String>> {
    let galaxies = GalaxyRepo::list(&state.pool).await?;
    Ok(Html(views::public::galaxy_list(&galaxies)))
}

/// GET /galaxies/{id}
pub async fn show_galaxy(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Html<String>> {
    let galaxy = GalaxyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Galaxy",
            id,
        })?;
    let planets = PlanetRepo::list_by_galaxy(&state.pool, id).await?;
    Ok(Html(views::public::galaxy_detail(&galaxy, &planets)))
}

/// Fallback for unknown paths.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(views::error_page(
            StatusCode::NOT_FOUND,
            "The page you are looking for does not exist",
        )),
    )
}
