//! Tests for Link header parsing

use super::*;
use reqwest::header::{HeaderMap, HeaderValue, LINK};

#[test]
fn test_rel_target_single_entry() {
    let header = r#"<https://api.github.com/repos?page=2>; rel="next""#;
    assert_eq!(
        rel_target(header, "next").as_deref(),
        Some("https://api.github.com/repos?page=2")
    );
}

#[test]
fn test_rel_target_among_other_relations() {
    let header = concat!(
        r#"<https://api.github.com/repos?page=1>; rel="prev", "#,
        r#"<https://api.github.com/repos?page=3>; rel="next", "#,
        r#"<https://api.github.com/repos?page=9>; rel="last""#,
    );
    assert_eq!(
        rel_target(header, "next").as_deref(),
        Some("https://api.github.com/repos?page=3")
    );
    assert_eq!(
        rel_target(header, "last").as_deref(),
        Some("https://api.github.com/repos?page=9")
    );
}

#[test]
fn test_rel_target_absent() {
    let header = r#"<https://api.github.com/repos?page=1>; rel="prev""#;
    assert_eq!(rel_target(header, "next"), None);
    assert_eq!(rel_target("", "next"), None);
}

#[test]
fn test_rel_target_tolerates_whitespace() {
    let header = r#"  <https://a.example/p2> ;  rel="next"  "#;
    assert_eq!(rel_target(header, "next").as_deref(), Some("https://a.example/p2"));
}

#[test]
fn test_next_page_from_header_map() {
    let mut headers = HeaderMap::new();
    headers.insert(
        LINK,
        HeaderValue::from_static(r#"<https://a.example/p2>; rel="next""#),
    );
    assert_eq!(next_page(&headers).as_deref(), Some("https://a.example/p2"));
}

#[test]
fn test_next_page_without_link_header() {
    assert_eq!(next_page(&HeaderMap::new()), None);
}
