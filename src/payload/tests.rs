//! Tests for payload narrowing

use super::*;
use serde_json::json;

#[test]
fn test_kind_names() {
    assert_eq!(kind(&json!(null)), "null");
    assert_eq!(kind(&json!(true)), "boolean");
    assert_eq!(kind(&json!(1.5)), "number");
    assert_eq!(kind(&json!("x")), "string");
    assert_eq!(kind(&json!([])), "array");
    assert_eq!(kind(&json!({})), "object");
}

#[test]
fn test_str_field() {
    let payload = json!({"name": "hubwire", "stars": 42});
    assert_eq!(str_field(&payload, "name").unwrap(), "hubwire");
}

#[test]
fn test_str_field_wrong_variant() {
    let payload = json!({"stars": 42});
    let err = str_field(&payload, "stars").unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedType {
            expected: "string",
            found: "number"
        }
    ));
}

#[test]
fn test_missing_field() {
    let payload = json!({"name": "hubwire"});
    let err = int_field(&payload, "stars").unwrap_err();
    assert!(matches!(err, Error::MissingField { field } if field == "stars"));
}

#[test]
fn test_field_on_non_object() {
    let err = field(&json!([1, 2]), "name").unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedType {
            expected: "object",
            found: "array"
        }
    ));
}

#[test]
fn test_int_field_rejects_fraction() {
    let payload = json!({"ratio": 0.5});
    let err = int_field(&payload, "ratio").unwrap_err();
    assert!(matches!(err, Error::UnexpectedType { expected: "integer", .. }));
}

#[test]
fn test_bool_and_float_fields() {
    let payload = json!({"private": false, "score": 9.5});
    assert!(!bool_field(&payload, "private").unwrap());
    assert!((float_field(&payload, "score").unwrap() - 9.5).abs() < f64::EPSILON);
}

#[test]
fn test_elements() {
    let items = json!([{"id": 1}, {"id": 2}]);
    assert_eq!(elements(&items).unwrap().len(), 2);

    let err = elements(&json!({"id": 1})).unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedType {
            expected: "array",
            found: "object"
        }
    ));
}

// ============================================================================
// Resource
// ============================================================================

async fn dry_run_connection() -> Connection {
    let config = crate::Configuration::builder("https://api.github.com")
        .dry_run(true)
        .build();
    Connection::connect(config).await.unwrap()
}

#[tokio::test]
async fn test_resource_accessors() {
    let connection = dry_run_connection().await;
    let resource = Resource::new(&connection, json!({"name": "widget", "stars": 42}));

    assert_eq!(resource.str_field("name").unwrap(), "widget");
    assert_eq!(resource.int_field("stars").unwrap(), 42);
    assert!(resource.field("owner").is_err());
    assert_eq!(resource.into_payload()["name"], "widget");
}

#[tokio::test]
async fn test_resource_fetch_reuses_connection() {
    let connection = dry_run_connection().await;
    let resource = Resource::new(&connection, json!({"url": "/repos/acme/widget"}));

    // Dry-run connections synthesize empty objects without the network
    let related = resource.fetch("/repos/acme/widget").await.unwrap();
    assert_eq!(related.payload(), &json!({}));
}
