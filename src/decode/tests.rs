//! Tests for decoder module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct NameResponse {
    #[allow(dead_code)]
    id: String,
    name: String,
}

impl SingleResult for NameResponse {
    type Output = String;

    fn into_result(self) -> String {
        self.name
    }
}

#[derive(Debug, Deserialize)]
struct NumbersResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    results: Vec<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    continuation_token: String,
}

impl PageResult for NumbersResponse {
    type Item = u32;

    fn into_page(self) -> Page<u32> {
        Page::new(self.results, self.continuation_token)
    }
}

// ============================================================================
// Page Tests
// ============================================================================

#[test]
fn test_page_accessors() {
    let page = Page::new(vec![1, 2], "next");
    assert_eq!(page.len(), 2);
    assert!(!page.is_empty());
    assert_eq!(page.token, "next");

    let empty: Page<u32> = Page::new(vec![], "still-a-token");
    assert!(empty.is_empty());
}

// ============================================================================
// Single Value Tests
// ============================================================================

#[test]
fn test_decode_single_extracts_value() {
    let body = br#"{"id": "1", "name": "jack", "extra": [1, 2, 3]}"#;
    let name = decode_single::<NameResponse>(body).unwrap();
    assert_eq!(name, "jack");
}

#[test]
fn test_decode_single_direct() {
    let body = br#"{"a": 1}"#;
    let value = decode_single::<Direct<serde_json::Value>>(body).unwrap();
    assert_eq!(value, serde_json::json!({"a": 1}));
}

#[test]
fn test_decode_single_schema_mismatch() {
    let err = decode_single::<NameResponse>(br#"{"id": "1"}"#).unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn test_decode_single_malformed() {
    let err = decode_single::<NameResponse>(b"<html>").unwrap_err();
    assert!(err.is_decode());
}

// ============================================================================
// Page Tests
// ============================================================================

#[test]
fn test_decode_page() {
    let body = br#"{"results": [3, 1, 2], "continuation_token": "abc"}"#;
    let page = decode_page::<NumbersResponse>(body).unwrap();
    assert_eq!(page, Page::new(vec![3, 1, 2], "abc"));
}

#[test]
fn test_decode_page_missing_and_null_fields() {
    let page = decode_page::<NumbersResponse>(b"{}").unwrap();
    assert!(page.is_empty());
    assert_eq!(page.token, "");

    let page =
        decode_page::<NumbersResponse>(br#"{"results": null, "continuation_token": null}"#)
            .unwrap();
    assert!(page.is_empty());
    assert_eq!(page.token, "");
}

#[test]
fn test_decode_page_is_all_or_nothing() {
    let body = br#"{"results": [1, 2, "three"], "continuation_token": "abc"}"#;
    let err = decode_page::<NumbersResponse>(body).unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn test_decode_page_truncated_body() {
    let err = decode_page::<NumbersResponse>(br#"{"results": [1, 2"#).unwrap_err();
    assert!(err.is_decode());
}
