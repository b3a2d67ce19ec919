//! Shared response envelope types for API handlers.
//!
//! Every response carries `success` and `message`. Successful single-record
//! responses add `data`; list responses use [`PaginatedResponse`], which
//! flattens the page metadata and navigation URLs next to `data`.

use manual_core::pagination::PageMeta;
use serde::Serialize;

/// Pages shown around the current one before links collapse into `...`.
const LINK_WINDOW: i64 = 3;

/// Standard `{ "success": true, "message": ..., "data": T }` envelope.
///
/// ```ignore
/// Ok(Json(DataResponse::new("User manual retrieved successfully", manual)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self {
            success: true,
            message,
            data,
        }
    }
}

/// One entry of the `links` array rendered by pagination UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

/// List envelope with pagination metadata and navigation URLs.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    pub success: bool,
    pub message: &'static str,
    pub data: Vec<T>,
    #[serde(flatten)]
    pub meta: PageMeta,
    pub path: String,
    pub first_page_url: String,
    pub last_page_url: String,
    pub next_page_url: Option<String>,
    pub prev_page_url: Option<String>,
    pub links: Vec<PageLink>,
}

/// Builds page URLs for one list request.
///
/// `query` holds the caller's non-page parameters (e.g. `per_page`,
/// `search`) so that navigation keeps the same filter.
pub struct PageUrls {
    path: String,
    query: Vec<(&'static str, String)>,
}

impl PageUrls {
    pub fn new(path: String, query: Vec<(&'static str, String)>) -> Self {
        Self { path, query }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn url_for(&self, page: i64) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::with_capacity(self.query.len() + 1);
        pairs.push(("page", page.to_string()));
        pairs.extend(self.query.iter().cloned());
        match serde_urlencoded::to_string(&pairs) {
            Ok(qs) => format!("{}?{qs}", self.path),
            Err(_) => format!("{}?page={page}", self.path),
        }
    }
}

impl<T: Serialize> PaginatedResponse<T> {
    pub fn new(message: &'static str, data: Vec<T>, meta: PageMeta, urls: &PageUrls) -> Self {
        let next_page_url = meta.has_next().then(|| urls.url_for(meta.current_page + 1));
        let prev_page_url = meta.has_prev().then(|| urls.url_for(meta.current_page - 1));

        Self {
            success: true,
            message,
            data,
            meta,
            path: urls.path().to_string(),
            first_page_url: urls.url_for(1),
            last_page_url: urls.url_for(meta.last_page),
            links: page_links(&meta, urls, prev_page_url.clone(), next_page_url.clone()),
            next_page_url,
            prev_page_url,
        }
    }
}

/// Previous link, one link per visible page, next link.
///
/// With more than `2 * LINK_WINDOW + 7` pages the middle collapses into
/// `...` separators, keeping the first two, last two, and a window around
/// the current page.
fn page_links(
    meta: &PageMeta,
    urls: &PageUrls,
    prev: Option<String>,
    next: Option<String>,
) -> Vec<PageLink> {
    let mut links = vec![PageLink {
        url: prev,
        label: "&laquo; Previous".to_string(),
        active: false,
    }];

    let mut last_shown = 0;
    for page in visible_pages(meta.current_page, meta.last_page) {
        if page > last_shown + 1 {
            links.push(PageLink {
                url: None,
                label: "...".to_string(),
                active: false,
            });
        }
        links.push(PageLink {
            url: Some(urls.url_for(page)),
            label: page.to_string(),
            active: page == meta.current_page,
        });
        last_shown = page;
    }

    links.push(PageLink {
        url: next,
        label: "Next &raquo;".to_string(),
        active: false,
    });
    links
}

/// A `current` past `last` centres the window on `last`.
fn visible_pages(current: i64, last: i64) -> Vec<i64> {
    if last <= 2 * LINK_WINDOW + 7 {
        return (1..=last).collect();
    }
    let current = current.clamp(1, last);
    let window_start = current.saturating_sub(LINK_WINDOW).max(1);
    let window_end = current.saturating_add(LINK_WINDOW).min(last);
    let mut pages: Vec<i64> = [1, 2]
        .into_iter()
        .chain(window_start..=window_end)
        .chain([last - 1, last])
        .collect();
    pages.sort_unstable();
    pages.dedup();
    pages
}

#[cfg(test)]
mod tests {
    use manual_core::pagination::PageRequest;

    use super::*;

    fn urls() -> PageUrls {
        PageUrls::new(
            "http://localhost:3000/api/admin/public/user-manual".to_string(),
            vec![("per_page", "5".to_string())],
        )
    }

    fn meta(page: i64, total: i64, on_page: usize) -> PageMeta {
        PageMeta::new(PageRequest::new(Some(page), Some(5), 15, Some(100)), total, on_page)
    }

    #[test]
    fn url_keeps_extra_query_and_encodes_search() {
        let urls = PageUrls::new(
            "http://h/list".to_string(),
            vec![("search", "Unique Test&Title".to_string())],
        );
        assert_eq!(urls.url_for(2), "http://h/list?page=2&search=Unique+Test%26Title");
    }

    #[test]
    fn envelope_for_middle_page() {
        let resp = PaginatedResponse::new("ok", vec![1, 2, 3, 4, 5], meta(2, 15, 5), &urls());
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["current_page"], 2);
        assert_eq!(json["per_page"], 5);
        assert_eq!(json["total"], 15);
        assert_eq!(json["last_page"], 3);
        assert_eq!(json["from"], 6);
        assert_eq!(json["to"], 10);
        assert_eq!(
            json["first_page_url"],
            "http://localhost:3000/api/admin/public/user-manual?page=1&per_page=5"
        );
        assert_eq!(
            json["next_page_url"],
            "http://localhost:3000/api/admin/public/user-manual?page=3&per_page=5"
        );
        assert_eq!(
            json["prev_page_url"],
            "http://localhost:3000/api/admin/public/user-manual?page=1&per_page=5"
        );

        // prev, 1, 2, 3, next
        let links = json["links"].as_array().unwrap();
        assert_eq!(links.len(), 5);
        assert_eq!(links[2]["label"], "2");
        assert_eq!(links[2]["active"], true);
    }

    #[test]
    fn edges_have_no_prev_or_next() {
        let resp = PaginatedResponse::<i32>::new("ok", vec![], meta(1, 0, 0), &urls());
        assert_eq!(resp.prev_page_url, None);
        assert_eq!(resp.next_page_url, None);
        assert_eq!(resp.meta.from, None);
        assert_eq!(resp.links.first().unwrap().url, None);
        assert_eq!(resp.links.last().unwrap().url, None);
    }

    #[test]
    fn many_pages_collapse_into_separators() {
        assert_eq!(visible_pages(1, 10), (1..=10).collect::<Vec<_>>());
        assert_eq!(visible_pages(10, 20), vec![1, 2, 7, 8, 9, 10, 11, 12, 13, 19, 20]);
        assert_eq!(visible_pages(1, 20), vec![1, 2, 3, 4, 19, 20]);

        let resp = PaginatedResponse::<i32>::new("ok", vec![], meta(10, 100, 0), &urls());
        let labels: Vec<&str> = resp.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "&laquo; Previous", "1", "2", "...", "7", "8", "9", "10", "11", "12", "13", "...",
                "19", "20", "Next &raquo;"
            ]
        );
    }

    #[test]
    fn page_far_past_the_end_keeps_links_in_range() {
        assert_eq!(visible_pages(i64::MAX, 20), vec![1, 2, 17, 18, 19, 20]);

        let meta = PageMeta::new(PageRequest::new(Some(i64::MAX), Some(1), 15, None), 14, 0);
        let resp = PaginatedResponse::<i32>::new("ok", vec![], meta, &urls());
        assert_eq!(resp.next_page_url, None);
        assert_eq!(
            resp.prev_page_url.as_deref(),
            Some(
                "http://localhost:3000/api/admin/public/user-manual?page=9223372036854775806&per_page=5"
            )
        );
        assert!(resp.links.iter().all(|link| !link.active));
        let labels: Vec<&str> = resp.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            ["&laquo; Previous", "1", "2", "...", "11", "12", "13", "14", "Next &raquo;"]
        );
    }
}
