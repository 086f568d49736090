use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use cosmos_core::error::CoreError;
use cosmos_db::error::RepoError;

use crate::views;

/// Where unauthenticated visitors of the admin area are sent.
pub const LOGIN_PATH: &str = "/admin/login";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce an HTML error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Validation(core) => AppError::Core(core),
            RepoError::Database(db) => AppError::Database(db),
        }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                CoreError::Unauthorized(msg) => {
                    tracing::debug!(reason = %msg, "Redirecting to login");
                    return Redirect::to(LOGIN_PATH).into_response();
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Html(views::error_page(status, &message))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and a visitor-safe message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations on `uq_*` constraints map to 409.
/// - Foreign key violations map to 409 (the row is still referenced, or
///   the referenced row vanished).
/// - Check violations on `ck_*` constraints map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) => {
            match db_err.code().as_deref() {
                Some("23505") => {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    if constraint.starts_with("uq_") {
                        return (
                            StatusCode::CONFLICT,
                            format!("Duplicate value violates unique constraint: {constraint}"),
                        );
                    }
                }
                Some("23514") => {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    if constraint.starts_with("ck_") {
                        return (
                            StatusCode::BAD_REQUEST,
                            format!("Value violates check constraint: {constraint}"),
                        );
                    }
                }
                Some("23503") => {
                    return (
                        StatusCode::CONFLICT,
                        "The record is referenced by other records and cannot be changed this way"
                            .to_string(),
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::header::LOCATION;
    use http_body_util::BodyExt;

    use super::*;

    #[test]
    fn unauthorized_redirects_to_login() {
        let response = AppError::Core(CoreError::Unauthorized("no token".into())).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], LOGIN_PATH);
    }

    #[test]
    fn status_codes() {
        let cases = [
            (
                AppError::Core(CoreError::NotFound { entity: "Planet", id: 4 }),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::Core(CoreError::Validation("Planet name is required".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Core(CoreError::Conflict("still has planets".into())),
                StatusCode::CONFLICT,
            ),
            (
                AppError::Core(CoreError::Forbidden("admins only".into())),
                StatusCode::FORBIDDEN,
            ),
            (AppError::Database(sqlx::Error::RowNotFound), StatusCode::NOT_FOUND),
            (
                AppError::InternalError("disk on fire".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn repository_validation_is_a_bad_request() {
        let invalid = CoreError::Validation("Planet name is required".into());
        let err: AppError = RepoError::Validation(invalid).into();
        assert_matches!(&err, AppError::Core(CoreError::Validation(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err: AppError = RepoError::Database(sqlx::Error::RowNotFound).into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn internal_detail_is_not_rendered() {
        let response = AppError::InternalError("disk on fire".into()).into_response();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("An internal error occurred"));
        assert!(!body.contains("disk on fire"));
    }
}
