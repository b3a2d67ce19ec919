//! Capability extractors for mutating routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use manual_core::error::CoreError;

use super::auth::AuthIdentity;
use crate::auth::gate::{Capability, Identity};
use crate::error::AppError;
use crate::state::AppState;

/// Requires an identity allowed to create, update, and delete user manuals.
/// Rejects with 401 when unauthenticated and 403 when the capability is missing.
///
/// ```ignore
/// async fn create(RequireManualWriter(identity): RequireManualWriter) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireManualWriter(pub Identity);

impl FromRequestParts<AppState> for RequireManualWriter {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthIdentity(identity) = AuthIdentity::from_request_parts(parts, state).await?;
        if !identity.can(Capability::ManageManuals) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Not allowed to manage user manuals".into(),
            )));
        }
        Ok(RequireManualWriter(identity))
    }
}
