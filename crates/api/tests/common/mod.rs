#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use manual_api::auth::gate::JwtAccessGate;
use manual_api::auth::jwt::{generate_access_token, JwtConfig};
use manual_api::config::{MutationNotFoundPolicy, ServerConfig, StoreBackend};
use manual_api::router::build_app_router;
use manual_api::service::ManualService;
use manual_api::state::AppState;
use manual_db::store::{ManualStore, MemoryManualStore};

pub use manual_api::router::{ADMIN_PREFIX as BASE, PUBLIC_PREFIX as PUBLIC};

const TEST_JWT_SECRET: &str = "integration-test-secret";

fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry_mins: 15,
    }
}

/// Build a test `ServerConfig` with safe defaults and the in-memory store.
pub fn test_config(policy: MutationNotFoundPolicy) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        public_url: "http://localhost:3000".to_string(),
        default_per_page: 15,
        max_per_page: None,
        mutation_not_found: policy,
        store_backend: StoreBackend::Memory,
        jwt: jwt_config(),
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack. Clone the returned router to send several
/// requests against the same store.
pub fn build_test_app() -> Router {
    build_test_app_with(MutationNotFoundPolicy::NotFound)
}

pub fn build_test_app_with(policy: MutationNotFoundPolicy) -> Router {
    build_test_app_over(Arc::new(MemoryManualStore::new()), policy)
}

/// Build the router over a caller-supplied store.
pub fn build_test_app_over(store: Arc<dyn ManualStore>, policy: MutationNotFoundPolicy) -> Router {
    let config = test_config(policy);
    let state = AppState {
        manuals: ManualService::new(store, config.default_per_page, config.max_per_page),
        gate: Arc::new(JwtAccessGate::new(config.jwt.clone())),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A valid bearer token signed with the test secret.
pub fn token() -> String {
    generate_access_token(1, "admin", &jwt_config()).expect("token should sign")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

async fn send(app: Router, method: Method, uri: &str, body: Option<&Value>, auth: bool) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if auth {
        builder = builder.header("Authorization", format!("Bearer {}", token()));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, false).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(&body), false).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(&body), false).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, false).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(&body), true).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(&body), true).await
}

pub async fn patch_json_auth(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PATCH, uri, Some(&body), true).await
}

pub async fn delete_auth(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, true).await
}

/// Send a raw (possibly malformed) body with a valid token.
pub async fn post_raw_auth(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token()))
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Create a manual through the API and return its JSON `data`.
pub async fn create_manual(app: &Router, body: Value) -> Value {
    let response = post_json_auth(app.clone(), BASE, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"].clone()
}
