//! Admin login and logout.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use cosmos_core::error::CoreError;
use cosmos_core::roles::ROLE_ADMIN;
use cosmos_db::models::user::User;
use cosmos_db::repositories::UserRepo;

use crate::auth::cookie::{clear_session_cookie, session_cookie};
use crate::auth::jwt::issue_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult, LOGIN_PATH};
use crate::forms::LoginForm;
use crate::middleware::rbac::authorize_admin;
use crate::state::AppState;
use crate::views;

const INVALID_CREDENTIALS: &str = "Invalid username or password";
const NOT_AN_ADMIN: &str = "You do not have administrator rights";

/// GET /admin/login
///
/// Visitors who already hold a valid admin session go straight to the dashboard.
pub async fn login_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if authorize_admin(&headers, &state.config.jwt).is_ok() {
        return Redirect::to("/admin").into_response();
    }
    Html(views::admin::login("", None)).into_response()
}

/// POST /admin/login
///
/// A submission from a valid admin session is not processed.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Response {
    if authorize_admin(&headers, &state.config.jwt).is_ok() {
        return Redirect::to("/admin").into_response();
    }

    let username = form.username.trim();

    let user = match check_credentials(&state, username, &form.password).await {
        Ok(user) => user,
        Err(err) => return login_failed(username, err),
    };

    let token = match issue_token(&user.username, &user.role, user.id, &state.config.jwt) {
        Ok(token) => token,
        Err(e) => {
            return login_failed(
                username,
                AppError::InternalError(format!("Token signing failed: {e}")),
            )
        }
    };

    let cookie = session_cookie(
        &token,
        state.config.jwt.ttl_secs(),
        state.config.environment.is_production(),
    );
    tracing::info!(user_id = user.id, username = %user.username, "Admin logged in");

    ([(SET_COOKIE, cookie)], Redirect::to("/admin")).into_response()
}

/// GET|POST /admin/logout
pub async fn logout() -> Response {
    ([(SET_COOKIE, clear_session_cookie())], Redirect::to(LOGIN_PATH)).into_response()
}

/// Resolve the user behind a login attempt and require the admin role.
///
/// Unknown users and wrong passwords produce the same message.
async fn check_credentials(state: &AppState, username: &str, password: &str) -> AppResult<User> {
    if username.is_empty() || password.is_empty() {
        return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()).into());
    }

    let user = UserRepo::find_by_username(&state.pool, username)
        .await?
        .ok_or_else(|| CoreError::Unauthorized(INVALID_CREDENTIALS.into()))?;

    let password_valid = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()).into());
    }

    if user.role != ROLE_ADMIN {
        return Err(CoreError::Forbidden(NOT_AN_ADMIN.into()).into());
    }

    Ok(user)
}

/// Re-render the login form for a failed attempt.
fn login_failed(username: &str, err: AppError) -> Response {
    let (status, message) = match err {
        AppError::Core(CoreError::Unauthorized(msg)) => {
            tracing::info!(username, "Failed login attempt");
            (StatusCode::UNAUTHORIZED, msg)
        }
        AppError::Core(CoreError::Forbidden(msg)) => {
            tracing::info!(username, "Login refused for non-admin user");
            (StatusCode::FORBIDDEN, msg)
        }
        other => {
            tracing::error!(error = %other, "Login failed with a server error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong on our side. Please try again.".to_string(),
            )
        }
    };
    (status, Html(views::admin::login(username, Some(message.as_str())))).into_response()
}
