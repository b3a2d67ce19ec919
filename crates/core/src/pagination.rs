//! Page-number pagination math shared by the store and the list envelope.
//!
//! Pages are 1-indexed. A page past the end is not an error; it simply
//! yields no items while still reporting the real `total` and `last_page`.

use serde::{Deserialize, Serialize};

/// Default number of records per page.
pub const DEFAULT_PER_PAGE: i64 = 15;

/// Ordering of list results by insertion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Oldest first.
    #[default]
    Asc,
    /// Newest first.
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A clamped page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    /// Build a page request from optional caller input.
    ///
    /// Missing or non-positive values fall back to page 1 and
    /// `default_per_page`. `per_page` is capped only when `max_per_page`
    /// is set.
    pub fn new(
        page: Option<i64>,
        per_page: Option<i64>,
        default_per_page: i64,
        max_per_page: Option<i64>,
    ) -> Self {
        let page = page.filter(|p| *p >= 1).unwrap_or(1);
        let per_page = per_page.filter(|p| *p >= 1).unwrap_or(default_per_page);
        let per_page = match max_per_page {
            Some(max) => per_page.min(max),
            None => per_page,
        }
        .max(1);
        Self { page, per_page }
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Number of rows to take.
    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Derived pagination metadata for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub current_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub last_page: i64,
    /// 1-based position of the first item on this page, `None` when empty.
    pub from: Option<i64>,
    /// 1-based position of the last item on this page, `None` when empty.
    pub to: Option<i64>,
}

impl PageMeta {
    pub fn new(request: PageRequest, total: i64, items_on_page: usize) -> Self {
        let last_page = if total <= 0 {
            1
        } else {
            (total - 1) / request.per_page + 1
        };

        let (from, to) = if items_on_page == 0 {
            (None, None)
        } else {
            let from = request.offset() + 1;
            (Some(from), Some(from + items_on_page as i64 - 1))
        };

        Self {
            current_page: request.page,
            per_page: request.per_page,
            total,
            last_page,
            from,
            to,
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}
