use async_trait::async_trait;
use chrono::Utc;
use manual_core::pagination::SortDirection;
use manual_core::types::DbId;
use tokio::sync::RwLock;

use super::{ManualStore, StoreError};
use crate::models::user_manual::{ManualChanges, ManualListQuery, ManualPage, NewManual, UserManual};

/// [`ManualStore`] held entirely in process memory.
///
/// Rows are kept in insertion order and ids are assigned from a counter, so
/// ordering matches the PostgreSQL store. All writes go through one lock.
#[derive(Default)]
pub struct MemoryManualStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: DbId,
    rows: Vec<UserManual>,
}

impl Inner {
    fn row_mut(&mut self, id: DbId) -> Option<&mut UserManual> {
        self.rows.iter_mut().find(|row| row.id == id)
    }
}

impl MemoryManualStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ManualStore for MemoryManualStore {
    async fn create(&self, input: &NewManual) -> Result<UserManual, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let now = Utc::now();
        let row = UserManual {
            id: inner.last_id,
            title: input.title.clone(),
            serial_number: input.serial_number,
            description: input.description.clone(),
            video_link: input.video_link.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        inner.rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(
        &self,
        id: DbId,
        include_deleted: bool,
    ) -> Result<Option<UserManual>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .iter()
            .find(|row| row.id == id && (include_deleted || !row.is_deleted()))
            .cloned())
    }

    async fn update(
        &self,
        id: DbId,
        changes: &ManualChanges,
    ) -> Result<Option<UserManual>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(row) = inner.row_mut(id).filter(|row| !row.is_deleted()) else {
            return Ok(None);
        };

        if let Some(title) = &changes.title {
            row.title = title.clone();
        }
        if let Some(serial_number) = changes.serial_number {
            row.serial_number = serial_number;
        }
        if let Some(description) = &changes.description {
            row.description = description.clone();
        }
        if let Some(video_link) = &changes.video_link {
            row.video_link = video_link.clone();
        }
        row.updated_at = Utc::now().max(row.updated_at);

        Ok(Some(row.clone()))
    }

    async fn soft_delete(&self, id: DbId) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.row_mut(id).filter(|row| !row.is_deleted()) {
            Some(row) => {
                row.deleted_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn restore(&self, id: DbId) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.row_mut(id).filter(|row| row.is_deleted()) {
            Some(row) => {
                row.deleted_at = None;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self, query: &ManualListQuery) -> Result<ManualPage, StoreError> {
        let inner = self.inner.read().await;
        let needle = query.search_term().map(str::to_lowercase);

        let mut matching: Vec<&UserManual> = inner
            .rows
            .iter()
            .filter(|row| query.include_deleted || !row.is_deleted())
            .filter(|row| match &needle {
                Some(needle) => row.title.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .collect();

        if query.direction == SortDirection::Desc {
            matching.reverse();
        }

        let total = matching.len() as i64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(query.page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(query.page.limit()).unwrap_or(0))
            .cloned()
            .collect();

        Ok(ManualPage { items, total })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
