//! Bearer-credential extractor backed by the configured access gate.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::gate::{bearer_token, Identity};
use crate::error::AppError;
use crate::state::AppState;

/// Identity resolved from the `Authorization: Bearer <token>` header.
///
/// Rejects with 401 when the header is missing, malformed, or carries a
/// token the gate refuses.
#[derive(Debug, Clone)]
pub struct AuthIdentity(pub Identity);

impl FromRequestParts<AppState> for AuthIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .map(|v| v.to_str().unwrap_or_default());

        let token = bearer_token(header)?;
        let identity = state.gate.authorize(token)?;
        Ok(AuthIdentity(identity))
    }
}
