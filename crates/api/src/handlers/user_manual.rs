//! Handlers for the user manual resource.
//!
//! Mutations live under `/api/admin/auth/v1/user-manual` and require
//! [`RequireManualWriter`]; reads live under `/api/admin/public/user-manual`
//! and are open.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use manual_core::types::DbId;
use manual_db::models::user_manual::UserManual;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireManualWriter;
use crate::query::ListParams;
use crate::response::{DataResponse, PageUrls, PaginatedResponse};
use crate::state::AppState;

/// POST /api/admin/auth/v1/user-manual
pub async fn create(
    State(state): State<AppState>,
    RequireManualWriter(identity): RequireManualWriter,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<UserManual>>)> {
    let fields = object_body(payload)?;
    let manual = state.manuals.create(&fields).await?;
    tracing::info!(manual_id = manual.id, user_id = identity.subject, "Created user manual");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("User manual created successfully", manual)),
    ))
}

/// GET /api/admin/public/user-manual
pub async fn list(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    params: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<Json<PaginatedResponse<UserManual>>> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let (items, meta) = state.manuals.list(&params).await?;

    let urls = PageUrls::new(
        format!("{}{}", state.config.public_url, uri.path()),
        params.carried_query(),
    );
    Ok(Json(PaginatedResponse::new(
        "User manuals retrieved successfully",
        items,
        meta,
        &urls,
    )))
}

/// GET /api/admin/public/user-manual/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<DataResponse<UserManual>>> {
    let id = record_id(id)?;
    let manual = state.manuals.get(id, false).await?;
    Ok(Json(DataResponse::new(
        "User manual retrieved successfully",
        manual,
    )))
}

/// PUT|PATCH /api/admin/auth/v1/user-manual/{id}
///
/// Both verbs apply patch semantics: only keys present in the body change.
pub async fn update(
    State(state): State<AppState>,
    RequireManualWriter(identity): RequireManualWriter,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<DataResponse<UserManual>>> {
    let id = record_id(id)?;
    let fields = object_body(payload)?;
    let manual = state
        .manuals
        .update(id, &fields)
        .await
        .map_err(|e| e.on_mutation(state.config.mutation_not_found, "update"))?;
    tracing::info!(manual_id = id, user_id = identity.subject, "Updated user manual");
    Ok(Json(DataResponse::new(
        "User manual updated successfully",
        manual,
    )))
}

/// DELETE /api/admin/auth/v1/user-manual/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireManualWriter(identity): RequireManualWriter,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<DataResponse<UserManual>>> {
    let id = record_id(id)?;
    let manual = state
        .manuals
        .delete(id)
        .await
        .map_err(|e| e.on_mutation(state.config.mutation_not_found, "delete"))?;
    tracing::info!(manual_id = id, user_id = identity.subject, "Deleted user manual");
    Ok(Json(DataResponse::new(
        "User manual deleted successfully",
        manual,
    )))
}

/// Unwrap the `{id}` segment, reporting a non-integer id as 400.
fn record_id(id: Result<Path<DbId>, PathRejection>) -> AppResult<DbId> {
    let Path(id) = id.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(id)
}

/// Unwrap a JSON body that must be an object.
fn object_body(payload: Result<Json<Value>, JsonRejection>) -> AppResult<Map<String, Value>> {
    match payload {
        Ok(Json(Value::Object(fields))) => Ok(fields),
        Ok(Json(_)) => Err(AppError::UnprocessableBody(
            "Request body must be a JSON object".into(),
        )),
        Err(rejection) => Err(AppError::UnprocessableBody(rejection.body_text())),
    }
}
