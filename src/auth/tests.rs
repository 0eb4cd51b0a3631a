//! Tests for credential resolution

use super::*;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

fn config(username: &str, password: &str, token: &str) -> Configuration {
    Configuration::builder("https://api.github.com")
        .username(username)
        .password(password)
        .token(token)
        .build()
}

#[test]
fn test_anonymous_without_credentials() {
    let creds = Credentials::resolve(&config("", "", ""));
    assert_eq!(creds, Credentials::Anonymous);
    assert_eq!(creds.header_value(), None);
}

#[test]
fn test_basic_auth_header() {
    let creds = Credentials::resolve(&config("user", "pass", ""));
    let header = creds.header_value().unwrap();

    let encoded = header.strip_prefix("Basic ").unwrap();
    let decoded = STANDARD.decode(encoded).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), "user:pass");
}

#[test]
fn test_bearer_auth_header() {
    let creds = Credentials::resolve(&config("", "", "t0ken"));
    assert_eq!(creds.header_value().unwrap(), "bearer t0ken");
}

#[test]
fn test_basic_takes_precedence_over_bearer() {
    let creds = Credentials::resolve(&config("user", "pass", "t0ken"));
    assert!(matches!(creds, Credentials::Basic { .. }));

    let header = creds.header_value().unwrap();
    assert!(header.starts_with("Basic "));
    assert!(!header.contains("t0ken"));
}

#[test]
fn test_bearer_prefix_applied_exactly_once() {
    let header = authorization_header(&config("", "", "bearer t0ken")).unwrap();
    assert_eq!(header, "bearer t0ken");

    let header = authorization_header(&config("", "", "Bearer t0ken")).unwrap();
    assert_eq!(header, "bearer t0ken");
}

#[test]
fn test_bearer_prefix_only_stripped_at_start() {
    // A token that merely contains the word keeps it
    let header = authorization_header(&config("", "", "abcbearer")).unwrap();
    assert_eq!(header, "bearer abcbearer");
}

#[test]
fn test_authorization_header_shortcut() {
    assert_eq!(authorization_header(&config("", "", "")), None);
    assert!(authorization_header(&config("u", "p", ""))
        .unwrap()
        .starts_with("Basic "));
}
