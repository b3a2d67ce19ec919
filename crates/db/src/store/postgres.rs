use async_trait::async_trait;
use manual_core::types::DbId;

use super::{ManualStore, StoreError};
use crate::models::user_manual::{ManualChanges, ManualListQuery, ManualPage, NewManual, UserManual};
use crate::repositories::UserManualRepo;
use crate::DbPool;

/// [`ManualStore`] backed by the `user_manuals` PostgreSQL table.
#[derive(Clone)]
pub struct PgManualStore {
    pool: DbPool,
}

impl PgManualStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ManualStore for PgManualStore {
    async fn create(&self, input: &NewManual) -> Result<UserManual, StoreError> {
        Ok(UserManualRepo::create(&self.pool, input).await?)
    }

    async fn find_by_id(
        &self,
        id: DbId,
        include_deleted: bool,
    ) -> Result<Option<UserManual>, StoreError> {
        Ok(UserManualRepo::find_by_id(&self.pool, id, include_deleted).await?)
    }

    async fn update(
        &self,
        id: DbId,
        changes: &ManualChanges,
    ) -> Result<Option<UserManual>, StoreError> {
        Ok(UserManualRepo::update(&self.pool, id, changes).await?)
    }

    async fn soft_delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(UserManualRepo::soft_delete(&self.pool, id).await?)
    }

    async fn restore(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(UserManualRepo::restore(&self.pool, id).await?)
    }

    async fn list(&self, query: &ManualListQuery) -> Result<ManualPage, StoreError> {
        let total = UserManualRepo::count(&self.pool, query).await?;
        let items = UserManualRepo::list(&self.pool, query).await?;
        tracing::debug!(total, returned = items.len(), "Listed user manuals");
        Ok(ManualPage { items, total })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
