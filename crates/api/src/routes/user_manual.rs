//! Route definitions for the user manual resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::user_manual;
use crate::state::AppState;

/// Authenticated routes mounted at `/api/admin/auth/v1/user-manual`.
///
/// ```text
/// POST   /        -> create
/// PUT    /{id}    -> update
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(user_manual::create))
        .route(
            "/{id}",
            put(user_manual::update)
                .patch(user_manual::update)
                .delete(user_manual::delete),
        )
}

/// Public routes mounted at `/api/admin/public/user-manual`.
///
/// ```text
/// GET    /        -> list (?page=&per_page=&search=&direction=)
/// GET    /{id}    -> get_by_id
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(user_manual::list))
        .route("/{id}", get(user_manual::get_by_id))
}
