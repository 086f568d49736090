use axum::routing::get;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// GET  /admin/login    -> login_page
/// POST /admin/login    -> login
/// GET  /admin/logout   -> logout
/// POST /admin/logout   -> logout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/login", get(auth::login_page).post(auth::login))
        .route("/admin/logout", get(auth::logout).post(auth::logout))
}
