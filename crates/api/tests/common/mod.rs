#![allow(dead_code)]

pub mod memory;

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use noteful_api::config::ServerConfig;
use noteful_api::router::build_app_router;
use noteful_api::state::AppState;
use noteful_db::repositories::{FolderStore, NoteStore};

use self::memory::MemoryStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
    }
}

/// Build the full application router on a real database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState::with_pool(pool), &test_config()).unwrap()
}

/// Build the full application router on an in-memory store.
pub fn build_memory_app(store: Arc<MemoryStore>) -> Router {
    build_app_with(store.clone(), store)
}

/// Build the full application router on arbitrary persistence adapters.
pub fn build_app_with(folders: Arc<dyn FolderStore>, notes: Arc<dyn NoteStore>) -> Router {
    build_app_router(AppState { folders, notes }, &test_config()).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PATCH, uri, body).await
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Send a body verbatim (for malformed-JSON cases).
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

/// The uniform error body for `message`.
pub fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({ "error": { "message": message } })
}
