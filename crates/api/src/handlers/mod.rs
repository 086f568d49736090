//! Request handlers.
//!
//! Public pages are read only. Every admin handler takes
//! [`RequireAdmin`](crate::middleware::rbac::RequireAdmin) so the gate runs
//! before any repository call.

pub mod auth;
pub mod dashboard;
pub mod galaxies;
pub mod planets;
pub mod public;
pub mod users;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use cosmos_core::error::CoreError;
use cosmos_core::types::DbId;

use crate::error::{AppError, AppResult};

/// The `{id}` segment of an entity route.
///
/// A malformed id renders the HTML 400 page instead of axum's plain-text
/// rejection.
pub struct EntityId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for EntityId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(id))
    }
}

/// Redirect to an admin list, carrying a `?success=` message.
pub(crate) fn redirect_with_success(path: &str, message: &str) -> Response {
    let target = format!("{path}?success={}", urlencoding::encode(message));
    Redirect::to(&target).into_response()
}

/// A form page re-rendered because the submission was rejected.
pub(crate) fn rejected_form(html: String) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response()
}

/// Keep a validation message for inline display; propagate anything else.
pub(crate) fn validation_message(err: AppError) -> AppResult<String> {
    match err {
        AppError::Core(CoreError::Validation(msg)) => Ok(msg),
        other => Err(other),
    }
}
