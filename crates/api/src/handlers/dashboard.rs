use axum::extract::State;
use axum::response::Html;
use cosmos_core::roles::ROLE_ADMIN;
use cosmos_db::repositories::{GalaxyRepo, PlanetRepo, UserRepo};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;
use crate::views;
use crate::views::admin::DashboardStats;

/// GET /admin
pub async fn dashboard(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> AppResult<Html<String>> {
    let stats = DashboardStats {
        planets: PlanetRepo::count(&state.pool).await?,
        galaxies: GalaxyRepo::count(&state.pool).await?,
        users: UserRepo::count(&state.pool).await?,
        admins: UserRepo::count_by_role(&state.pool, ROLE_ADMIN).await?,
    };
    Ok(Html(views::admin::dashboard(&admin.username, stats)))
}
