//! `Link` header parsing
//!
//! Header grammar: comma-separated list of `<URL>; rel="name"` entries,
//! e.g. `Link: <https://api.github.com/...?page=2>; rel="next",
//! <https://...?page=7>; rel="last"`. Only `rel="next"` is consulted by
//! the aggregation loop.

use reqwest::header::{HeaderMap, LINK};

/// Extract the next-page URL from a response header map, if present
pub fn next_page(headers: &HeaderMap) -> Option<String> {
    headers
        .get(LINK)
        .and_then(|value| value.to_str().ok())
        .and_then(|header| rel_target(header, "next"))
}

/// Extract the URL for the given rel from a raw `Link` header value
pub fn rel_target(header: &str, target_rel: &str) -> Option<String> {
    for entry in header.split(',') {
        let entry = entry.trim();
        let mut url = None;
        let mut rel = None;

        for segment in entry.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                url = Some(&segment[1..segment.len() - 1]);
            } else if let Some(value) = segment.strip_prefix("rel=") {
                rel = Some(value.trim_matches('"'));
            }
        }

        if let (Some(url), Some(rel)) = (url, rel) {
            if rel == target_rel {
                return Some(url.to_string());
            }
        }
    }

    None
}
