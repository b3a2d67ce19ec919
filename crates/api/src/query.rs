//! Shared query parameter types for API handlers.

use manual_core::pagination::SortDirection;
use serde::Deserialize;

/// Query parameters for the user manual list (`?page=&per_page=&search=&direction=`).
///
/// Values are clamped in the service via
/// [`manual_core::pagination::PageRequest::new`].
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub search: Option<String>,
    pub direction: Option<SortDirection>,
}

impl ListParams {
    /// Non-page parameters to carry into pagination URLs.
    pub fn carried_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        if let Some(search) = self.search.as_ref().filter(|s| !s.is_empty()) {
            query.push(("search", search.clone()));
        }
        if let Some(direction) = self.direction {
            let value = match direction {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            };
            query.push(("direction", value.to_string()));
        }
        query
    }
}
