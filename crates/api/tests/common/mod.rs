#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use cosmos_api::auth::jwt::issue_token;
use cosmos_api::auth::password::hash_password;
use cosmos_api::config::ServerConfig;
use cosmos_api::router::build_app_router;
use cosmos_api::state::AppState;
use cosmos_core::types::DbId;
use cosmos_db::models::user::{CreateUser, User};
use cosmos_db::repositories::UserRepo;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` through the regular loader.
pub fn test_config() -> ServerConfig {
    ServerConfig::from_source(|key| match key {
        "JWT_SECRET" => Some(TEST_SECRET.to_string()),
        "ADMIN_PASSWORD" => Some("bootstrap-pass".to_string()),
        _ => None,
    })
    .expect("test config should load")
}

/// Build the full application router, with the production middleware stack,
/// on top of the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(
    app: Router,
    uri: &str,
    body: &str,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::post(uri).header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response.headers()[LOCATION].to_str().unwrap()
}

pub fn set_cookie(response: &Response<Body>) -> &str {
    response.headers()[SET_COOKIE].to_str().unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user with a real Argon2 hash.
pub async fn create_user(pool: &PgPool, username: &str, role: &str, password: &str) -> User {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@cosmos.test"),
        password_hash: hash_password(password).unwrap(),
        role: role.to_string(),
    };
    UserRepo::create(pool, &input).await.unwrap()
}

/// A `Cookie` header value carrying a fresh session token.
pub fn session_for(user_id: DbId, username: &str, role: &str) -> String {
    let token = issue_token(username, role, user_id, &test_config().jwt).unwrap();
    format!("auth_token={token}")
}

/// Admin session cookie. The token is not backed by a user row.
pub fn admin_session() -> String {
    session_for(1, "admin", "admin")
}
