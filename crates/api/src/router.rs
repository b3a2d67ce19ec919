//! Application router: route mounting plus the shared middleware stack.
//!
//! Both `main.rs` and `tests/common/mod.rs` call [`build_app_router`], so
//! integration tests run behind exactly the layers production uses.
//!
//! ```text
//! /health                                  liveness + store health
//! /api/admin/auth/v1/user-manual           create (auth required)
//! /api/admin/auth/v1/user-manual/{id}      update, delete (auth required)
//! /api/admin/public/user-manual            list (public)
//! /api/admin/public/user-manual/{id}       get (public)
//! ```

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes::{health, user_manual};
use crate::state::AppState;

/// Prefix for user manual mutations.
pub const ADMIN_PREFIX: &str = "/api/admin/auth/v1/user-manual";

/// Prefix for user manual reads.
pub const PUBLIC_PREFIX: &str = "/api/admin/public/user-manual";

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the full application [`Router`].
///
/// Layers run outermost first: CORS, request id assignment, tracing,
/// request id propagation, timeout, panic recovery.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let middleware = ServiceBuilder::new()
        .layer(build_cors_layer(config))
        .map_response(|res: axum::http::Response<_>| res.map(axum::body::Body::new))
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(CatchPanicLayer::new());

    Router::new()
        .merge(health::router())
        .nest(ADMIN_PREFIX, user_manual::admin_router())
        .nest(PUBLIC_PREFIX, user_manual::public_router())
        .layer(middleware)
        .with_state(state)
}

/// CORS for the configured origins, allowing bearer credentials.
///
/// Panics at startup if any configured origin is not a valid header value.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
