//! The record store behind the user manual service.
//!
//! [`ManualStore`] is the seam between request handling and persistence.
//! Every lookup takes an explicit `include_deleted` flag so soft-deleted
//! rows never leak into default-scope reads by accident.

use async_trait::async_trait;
use manual_core::types::DbId;

use crate::models::user_manual::{ManualChanges, ManualListQuery, ManualPage, NewManual, UserManual};

mod memory;
mod postgres;

pub use memory::MemoryManualStore;
pub use postgres::PgManualStore;

/// Failure inside the persistence engine.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// CRUD, soft-delete, and paginated search over user manuals.
///
/// Conflicting writes to the same record are serialized by the
/// implementation; concurrent updates are last-write-wins.
#[async_trait]
pub trait ManualStore: Send + Sync {
    /// Persist a new record, assigning its id and timestamps.
    async fn create(&self, input: &NewManual) -> Result<UserManual, StoreError>;

    async fn find_by_id(
        &self,
        id: DbId,
        include_deleted: bool,
    ) -> Result<Option<UserManual>, StoreError>;

    /// Merge `changes` into a live record and bump `updated_at`.
    ///
    /// Returns `None` if the record is missing or soft-deleted.
    async fn update(
        &self,
        id: DbId,
        changes: &ManualChanges,
    ) -> Result<Option<UserManual>, StoreError>;

    /// Mark a live record deleted. Returns `false` if there was nothing to delete.
    async fn soft_delete(&self, id: DbId) -> Result<bool, StoreError>;

    /// Clear `deleted_at` on a soft-deleted record.
    async fn restore(&self, id: DbId) -> Result<bool, StoreError>;

    async fn list(&self, query: &ManualListQuery) -> Result<ManualPage, StoreError>;

    /// Confirm the backing engine is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
