//! Tests for decoder module

use super::*;
use crate::error::Error;
use serde_json::json;

// ============================================================================
// JSON Decoder Tests
// ============================================================================

#[test]
fn test_decode_list_page() {
    let body = br#"{
        "data": [{"attributes": {"name": "a"}}, {"attributes": {"name": "b"}}],
        "links": {"next": "https://leader.example.com/api/sp/managed_objects/?page=2"},
        "meta": {"api_version": "3", "sp_version": "8.4"}
    }"#;

    let doc = JsonDecoder::new().decode(body).unwrap();

    assert!(matches!(doc.data(), Some(RecordSet::List(items)) if items.len() == 2));
    assert!(doc.has_links());
    assert_eq!(
        doc.next_link(),
        Some("https://leader.example.com/api/sp/managed_objects/?page=2")
    );
    assert_eq!(doc.api_version().api_version, "3");
    assert_eq!(doc.api_version().sp_version, "8.4");
}

#[test]
fn test_decode_single_record_page() {
    let doc = JsonDecoder::new()
        .decode(br#"{"data": {"attributes": {"name": "only"}}}"#)
        .unwrap();

    match doc.data() {
        Some(RecordSet::Single(value)) => assert_eq!(value["attributes"]["name"], "only"),
        other => panic!("Expected Single, got {other:?}"),
    }
    assert!(!doc.has_links());
    assert!(doc.next_link().is_none());
}

#[test]
fn test_decode_empty_input() {
    let result = JsonDecoder::new().decode(b"");
    assert!(matches!(result, Err(Error::EmptyPayload)));
}

#[test]
fn test_decode_malformed_input() {
    let result = JsonDecoder::new().decode(b"{\"data\": [");
    match result {
        Err(Error::Decode { message }) => {
            assert!(message.contains("line 1"), "message was: {message}");
        }
        other => panic!("Expected Decode error, got {other:?}"),
    }
}

#[test]
fn test_decode_html_error_page() {
    let result = JsonDecoder::new().decode(b"<html><body>502 Bad Gateway</body></html>");
    assert!(matches!(result, Err(Error::Decode { .. })));
}

#[test]
fn test_decode_non_object_root() {
    let doc = JsonDecoder::new().decode(b"[1, 2, 3]").unwrap();
    assert!(doc.data().is_none());
    assert!(!doc.has_links());
    assert_eq!(doc.api_version(), ApiVersion::default());
}

#[test]
fn test_decode_raw() {
    let value = JsonDecoder::new().decode_raw(br#"{"a": 1}"#).unwrap();
    assert_eq!(value, json!({"a": 1}));
}

// ============================================================================
// RecordSet Tests
// ============================================================================

#[test]
fn test_record_set_from_array() {
    let set = RecordSet::from_value(json!([{"id": 1}, {"id": 2}]));
    assert_eq!(set.len(), 2);
    let ids: Vec<_> = set.iter().map(|v| v["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_record_set_from_object() {
    let set = RecordSet::from_value(json!({"id": 7}));
    assert_eq!(set.len(), 1);
    assert!(!set.is_empty());
    assert_eq!(set.iter().next().unwrap()["id"], 7);
}

#[test]
fn test_record_set_from_scalar() {
    assert!(RecordSet::from_value(json!(null)).is_empty());
    assert!(RecordSet::from_value(json!("text")).is_empty());
    assert_eq!(RecordSet::from_value(json!(3)).iter().count(), 0);
}

#[test]
fn test_record_set_empty_array() {
    let set = RecordSet::from_value(json!([]));
    assert!(set.is_empty());
    assert_eq!(set.iter().count(), 0);
}

// ============================================================================
// Links / Meta Tests
// ============================================================================

#[test]
fn test_next_link_null() {
    let doc = PageDocument::from_value(json!({"data": [], "links": {"next": null}}));
    assert!(doc.has_links());
    assert!(doc.next_link().is_none());
}

#[test]
fn test_next_link_non_string() {
    let doc = PageDocument::from_value(json!({"data": [], "links": {"next": 2}}));
    assert!(doc.next_link().is_none());
}

#[test]
fn test_next_link_links_not_object() {
    let doc = PageDocument::from_value(json!({"data": [], "links": "nope"}));
    assert!(doc.has_links());
    assert!(doc.next_link().is_none());
}

#[test]
fn test_null_fields_are_present() {
    let doc = PageDocument::from_value(json!({"data": null, "links": null, "meta": null}));
    assert!(matches!(doc.data(), Some(set) if set.is_empty()));
    assert!(doc.has_links());
    assert!(doc.next_link().is_none());
    assert_eq!(doc.api_version(), ApiVersion::default());
}

#[test]
fn test_api_version_partial_meta() {
    let doc = PageDocument::from_value(json!({"meta": {"sp_version": "9.0", "api_version": 3}}));
    let version = doc.api_version();
    assert_eq!(version.sp_version, "9.0");
    assert_eq!(version.api_version, "");
}

#[test]
fn test_api_version_missing_meta() {
    let doc = PageDocument::from_value(json!({"data": []}));
    assert_eq!(doc.api_version(), ApiVersion::default());
}
