//! User manual orchestration: validation, store calls, and outcome mapping.
//!
//! Mutations validate first and return without touching the store on any
//! violation. Reads go straight to the store and never consult the access
//! gate; that happens in the route extractors.

use std::sync::Arc;

use manual_core::error::CoreError;
use manual_core::manual::{
    validate_manual_fields, validate_new_manual, ValidationMode, ENTITY_NAME,
};
use manual_core::pagination::{PageMeta, PageRequest};
use manual_core::types::DbId;
use manual_db::models::user_manual::{ManualListQuery, UserManual};
use manual_db::store::ManualStore;
use serde_json::{Map, Value};

use crate::error::AppResult;
use crate::query::ListParams;

/// Resource service for user manuals.
#[derive(Clone)]
pub struct ManualService {
    store: Arc<dyn ManualStore>,
    default_per_page: i64,
    max_per_page: Option<i64>,
}

impl ManualService {
    pub fn new(
        store: Arc<dyn ManualStore>,
        default_per_page: i64,
        max_per_page: Option<i64>,
    ) -> Self {
        Self {
            store,
            default_per_page,
            max_per_page,
        }
    }

    /// Validate in create mode and persist.
    pub async fn create(&self, payload: &Map<String, Value>) -> AppResult<UserManual> {
        let input = validate_new_manual(payload).map_err(CoreError::Validation)?;
        let manual = self.store.create(&input).await?;
        tracing::info!(manual_id = manual.id, "User manual created");
        Ok(manual)
    }

    /// Validate in update mode and apply as a patch.
    pub async fn update(&self, id: DbId, payload: &Map<String, Value>) -> AppResult<UserManual> {
        let changes = validate_manual_fields(payload, ValidationMode::Update)
            .map_err(CoreError::Validation)?;
        let manual = self
            .store
            .update(id, &changes)
            .await?
            .ok_or(not_found(id))?;
        tracing::info!(manual_id = id, "User manual updated");
        Ok(manual)
    }

    /// Soft-delete a live record, returning it with `deleted_at` set.
    pub async fn delete(&self, id: DbId) -> AppResult<UserManual> {
        if !self.store.soft_delete(id).await? {
            return Err(not_found(id).into());
        }
        tracing::info!(manual_id = id, "User manual soft-deleted");
        let manual = self
            .store
            .find_by_id(id, true)
            .await?
            .ok_or(not_found(id))?;
        Ok(manual)
    }

    /// Fetch one record. Soft-deleted records only with `include_deleted`.
    pub async fn get(&self, id: DbId, include_deleted: bool) -> AppResult<UserManual> {
        let manual = self
            .store
            .find_by_id(id, include_deleted)
            .await?
            .ok_or(not_found(id))?;
        Ok(manual)
    }

    /// One page of live records, optionally filtered by a title substring.
    pub async fn list(&self, params: &ListParams) -> AppResult<(Vec<UserManual>, PageMeta)> {
        let page = PageRequest::new(
            params.page,
            params.per_page,
            self.default_per_page,
            self.max_per_page,
        );
        let query = ManualListQuery {
            page,
            search: params.search.clone(),
            direction: params.direction.unwrap_or_default(),
            include_deleted: false,
        };

        let result = self.store.list(&query).await?;
        let meta = PageMeta::new(page, result.total, result.items.len());
        tracing::debug!(
            page = meta.current_page,
            per_page = meta.per_page,
            total = meta.total,
            search = query.search_term(),
            "Listed user manuals"
        );
        Ok((result.items, meta))
    }

    /// Confirm the backing store is reachable.
    pub async fn ping(&self) -> AppResult<()> {
        Ok(self.store.ping().await?)
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY_NAME,
        id,
    }
}
