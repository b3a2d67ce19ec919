//! Shape check for video reference links.
//!
//! Two YouTube forms are accepted:
//!
//! ```text
//! https://www.youtube.com/watch?v=<id>[&<query>]
//! https://www.youtube.com/embed/<id>[?<query>]
//! ```
//!
//! where `<id>` is exactly 11 characters from `[A-Za-z0-9_-]`. Links are
//! never rewritten; an accepted link is stored exactly as submitted.

use std::sync::LazyLock;

use regex::Regex;

/// Watch page link, optionally followed by extra `&key=value` parameters.
static WATCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://www\.youtube\.com/watch\?v=([A-Za-z0-9_-]{11})(?:&[^\s#]*)?$")
        .expect("valid regex")
});

/// Embeddable player link, optionally followed by a query string (e.g. `?start=10`).
static EMBED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://www\.youtube\.com/embed/([A-Za-z0-9_-]{11})(?:\?[^\s#]*)?$")
        .expect("valid regex")
});

/// Which accepted form a link matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoLinkShape {
    Watch,
    Embed,
}

/// Classify a link, returning `None` if it matches no accepted form.
pub fn classify(link: &str) -> Option<VideoLinkShape> {
    if WATCH_RE.is_match(link) {
        Some(VideoLinkShape::Watch)
    } else if EMBED_RE.is_match(link) {
        Some(VideoLinkShape::Embed)
    } else {
        None
    }
}

/// Whether `link` matches one of the accepted shapes.
pub fn accepts(link: &str) -> bool {
    classify(link).is_some()
}

/// Extract the 11-character video id from an accepted link.
pub fn video_id(link: &str) -> Option<&str> {
    WATCH_RE
        .captures(link)
        .or_else(|| EMBED_RE.captures(link))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
