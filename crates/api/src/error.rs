use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use manual_core::error::{CoreError, FieldErrors};
use manual_db::store::StoreError;
use serde::Serialize;

use crate::auth::gate::AuthError;
use crate::config::MutationNotFoundPolicy;

/// Message returned with every 422 response.
pub const VALIDATION_MESSAGE: &str = "The given data was invalid.";

/// Message returned with every 401 response.
pub const UNAUTHENTICATED_MESSAGE: &str = "Unauthenticated.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{ success: false, ... }`
/// error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `manual_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure inside the record store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The access gate refused the credential.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request body could not be read as a JSON object.
    #[error("Unprocessable body: {0}")]
    UnprocessableBody(String),

    /// Update/delete hit a missing record under [`MutationNotFoundPolicy::Fault`].
    #[error("Failed to {action} user manual {id}")]
    MutationFailed { action: &'static str, id: i64 },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Apply the configured not-found policy to an update/delete failure.
    pub fn on_mutation(self, policy: MutationNotFoundPolicy, action: &'static str) -> Self {
        match (self, policy) {
            (AppError::Core(CoreError::NotFound { id, .. }), MutationNotFoundPolicy::Fault) => {
                AppError::MutationFailed { action, id }
            }
            (other, _) => other,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut errors = None;

        let (status, code, message) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                ),
                CoreError::Validation(fields) => {
                    errors = Some(fields);
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        "VALIDATION_ERROR",
                        VALIDATION_MESSAGE.to_string(),
                    )
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg),
            },

            // --- Store errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- Access gate ---
            AppError::Auth(err) => {
                tracing::debug!(reason = %err, "Refused credential");
                (
                    StatusCode::UNAUTHORIZED,
                    "UNAUTHORIZED",
                    UNAUTHENTICATED_MESSAGE.to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::UnprocessableBody(msg) => {
                tracing::debug!(error = %msg, "Rejected request body");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INVALID_BODY",
                    VALIDATION_MESSAGE.to_string(),
                )
            }
            AppError::MutationFailed { action, id } => {
                tracing::error!(action, manual_id = id, "User manual mutation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    format!("Failed to {action} user manual"),
                )
            }
        };

        let body = ErrorResponse {
            success: false,
            message,
            code,
            errors,
        };

        (status, axum::Json(body)).into_response()
    }
}
