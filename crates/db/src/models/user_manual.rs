//! User manual entity model and query types.

use manual_core::manual::{FIELD_VIDEO_LINK, FIELD_VIDEO_LINK_ALIAS};
use manual_core::pagination::{PageRequest, SortDirection};
use manual_core::types::{DbId, Timestamp};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use sqlx::FromRow;

pub use manual_core::manual::{ManualChanges, NewManual};

/// A row from the `user_manuals` table.
///
/// Serializes `video_link` a second time under the legacy `youtube_link`
/// key so older clients can read back what they wrote.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserManual {
    pub id: DbId,
    pub title: String,
    pub serial_number: Option<i64>,
    pub description: Option<String>,
    pub video_link: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl UserManual {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl Serialize for UserManual {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut row = serializer.serialize_struct("UserManual", 9)?;
        row.serialize_field("id", &self.id)?;
        row.serialize_field("title", &self.title)?;
        row.serialize_field("serial_number", &self.serial_number)?;
        row.serialize_field("description", &self.description)?;
        row.serialize_field(FIELD_VIDEO_LINK, &self.video_link)?;
        row.serialize_field(FIELD_VIDEO_LINK_ALIAS, &self.video_link)?;
        row.serialize_field("created_at", &self.created_at)?;
        row.serialize_field("updated_at", &self.updated_at)?;
        row.serialize_field("deleted_at", &self.deleted_at)?;
        row.end()
    }
}

/// Filter, ordering, and page selection for a list query.
#[derive(Debug, Clone, Default)]
pub struct ManualListQuery {
    pub page: PageRequest,
    /// Case-insensitive substring to match against `title`.
    pub search: Option<String>,
    pub direction: SortDirection,
    pub include_deleted: bool,
}

impl ManualListQuery {
    /// The search term, or `None` if absent or blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .filter(|term| !term.trim().is_empty())
    }
}

/// One page of list results plus the unpaginated match count.
#[derive(Debug, Clone)]
pub struct ManualPage {
    pub items: Vec<UserManual>,
    pub total: i64,
}
