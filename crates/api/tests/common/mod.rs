//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are driven through the full production middleware stack via
//! [`build_app_router`], using `tower::ServiceExt::oneshot` -- no sockets.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE};
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::util::ServiceExt;

use inkstream_api::auth::jwt::JwtConfig;
use inkstream_api::config::ServerConfig;
use inkstream_api::router::build_app_router;
use inkstream_api::state::AppState;

/// JWT secret shared by the test config and tests that mint tokens by hand.
pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        cookie_secure: false,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            token_expiry_hours: 24,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery, envelope stamping) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request without authentication.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.clone().oneshot(request).await.expect("request should run")
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.clone().oneshot(request).await.expect("request should run")
}

/// Send a GET request carrying a raw Cookie header.
pub async fn get_with_cookie(app: &Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .expect("request should build");
    app.clone().oneshot(request).await.expect("request should run")
}

/// Send a JSON POST request without authentication.
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.clone().oneshot(request).await.expect("request should run")
}

/// Send a JSON POST request with a bearer token.
pub async fn post_json_auth(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.clone().oneshot(request).await.expect("request should run")
}

/// Send a JSON PUT request with a bearer token.
pub async fn put_json_auth(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.clone().oneshot(request).await.expect("request should run")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
