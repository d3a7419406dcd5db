//! Tests for pagination module

use super::*;
use crate::decode::{null_as_default, Page, PageResult};
use crate::error::{Error, Result};
use crate::http::Fetch;
use crate::types::{segments, Param};
use async_trait::async_trait;
use bytes::Bytes;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Deserialize)]
struct LettersResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    results: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    continuation_token: String,
}

impl PageResult for LettersResponse {
    type Item = String;

    fn into_page(self) -> Page<String> {
        Page::new(self.results, self.continuation_token)
    }
}

/// Replays canned responses and records every request it sees
struct ScriptedSource {
    responses: Mutex<VecDeque<Result<Bytes>>>,
    requests: Mutex<Vec<(Vec<String>, Vec<Param>)>>,
}

impl ScriptedSource {
    fn new(responses: Vec<Result<Bytes>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::default(),
        }
    }

    fn pages(pages: Vec<(Vec<&str>, &str)>) -> Self {
        Self::new(
            pages
                .into_iter()
                .map(|(items, token)| {
                    Ok(Bytes::from(
                        json!({"results": items, "continuation_token": token}).to_string(),
                    ))
                })
                .collect(),
        )
    }

    fn requests(&self) -> Vec<(Vec<String>, Vec<Param>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetch for ScriptedSource {
    async fn fetch(&self, path: &[String], params: &[Param]) -> Result<Bytes> {
        self.requests
            .lock()
            .unwrap()
            .push((path.to_vec(), params.to_vec()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected extra request")
    }
}

fn base_params() -> Vec<Param> {
    vec![Param::new("user_id", "42"), Param::new("limit", 100)]
}

// ============================================================================
// PageRequest Tests
// ============================================================================

#[test]
fn test_page_request_initial() {
    let request = PageRequest::new(segments(&["user", "followers"]), base_params());
    assert_eq!(request.path(), segments(&["user", "followers"]).as_slice());
    assert_eq!(request.params(), base_params().as_slice());
    assert_eq!(request.page(), 0);
    assert!(!request.is_continuation());
}

#[test]
fn test_page_request_first_advance() {
    let mut request = PageRequest::new(segments(&["user", "followers"]), base_params());
    request.advance("tok1");

    assert_eq!(
        request.path(),
        segments(&["user", "followers", CONTINUATION_SEGMENT]).as_slice()
    );
    assert_eq!(
        request.params().last(),
        Some(&Param::new(CONTINUATION_TOKEN_PARAM, "tok1"))
    );
    assert_eq!(request.params().len(), 3);
    assert_eq!(request.page(), 1);
    assert!(request.is_continuation());
}

#[test]
fn test_page_request_later_advances_replace_token() {
    let mut request = PageRequest::new(segments(&["tweet", "replies"]), vec![]);
    request.advance("tok1");
    request.advance("tok2");
    request.advance("");

    assert_eq!(
        request.path(),
        segments(&["tweet", "replies", "continuation"]).as_slice()
    );
    assert_eq!(
        request.params(),
        &[Param::new(CONTINUATION_TOKEN_PARAM, "")]
    );
    assert_eq!(request.page(), 3);
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_state_after_fetch() {
    let state = PaginationState::after_fetch(Page::new(vec![1], "t"));
    assert_eq!(state, PaginationState::Appending(Page::new(vec![1], "t")));
    assert!(!state.is_done());

    let state: PaginationState<u8> = PaginationState::after_fetch(Page::new(vec![], "t"));
    assert!(state.is_done());
}

// ============================================================================
// Paginator Tests
// ============================================================================

#[tokio::test]
async fn test_collects_pages_in_order() {
    let source = ScriptedSource::pages(vec![
        (vec!["a", "b"], "t1"),
        (vec!["c"], "t2"),
        (vec![], ""),
    ]);

    let items = paginate::<LettersResponse, _>(
        &source,
        segments(&["user", "followers"]),
        base_params(),
    )
    .await
    .unwrap();

    assert_eq!(items, vec!["a", "b", "c"]);

    let requests = source.requests();
    assert_eq!(requests.len(), 3);

    assert_eq!(requests[0].0, segments(&["user", "followers"]));
    assert_eq!(requests[0].1, base_params());

    let continuation = segments(&["user", "followers", "continuation"]);
    assert_eq!(requests[1].0, continuation);
    assert_eq!(
        requests[1].1,
        vec![
            Param::new("user_id", "42"),
            Param::new("limit", 100),
            Param::new("continuation_token", "t1"),
        ]
    );
    assert_eq!(requests[2].0, continuation);
    assert_eq!(requests[2].1[2], Param::new("continuation_token", "t2"));
}

#[tokio::test]
async fn test_first_page_empty() {
    let source = ScriptedSource::pages(vec![(vec![], "ignored")]);

    let items = Paginator::new(&source)
        .collect::<LettersResponse>(segments(&["tweet", "replies"]), vec![])
        .await
        .unwrap();

    assert!(items.is_empty());
    assert_eq!(source.requests().len(), 1);
}

#[tokio::test]
async fn test_empty_items_stop_even_with_token() {
    let source = ScriptedSource::pages(vec![(vec!["a"], "t1"), (vec![], "more-but-ignored")]);

    let items = paginate::<LettersResponse, _>(&source, segments(&["x"]), vec![])
        .await
        .unwrap();

    assert_eq!(items, vec!["a"]);
    assert_eq!(source.requests().len(), 2);
}

#[tokio::test]
async fn test_empty_token_still_fetches_next_page() {
    let source = ScriptedSource::pages(vec![(vec!["a"], ""), (vec!["b"], ""), (vec![], "")]);

    let items = paginate::<LettersResponse, _>(&source, segments(&["x"]), vec![])
        .await
        .unwrap();

    assert_eq!(items, vec!["a", "b"]);
    let requests = source.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[1].1, vec![Param::new("continuation_token", "")]);
}

#[tokio::test]
async fn test_error_on_first_fetch() {
    let source = ScriptedSource::new(vec![Err(Error::http_status(404))]);

    let err = paginate::<LettersResponse, _>(&source, segments(&["x"]), vec![])
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().starts_with("get page 1"));
    assert_eq!(source.requests().len(), 1);
}

#[tokio::test]
async fn test_error_mid_stream_discards_items() {
    let source = ScriptedSource::new(vec![
        Ok(Bytes::from(
            json!({"results": ["a"], "continuation_token": "t1"}).to_string(),
        )),
        Err(Error::http_status(500)),
    ]);

    let result = paginate::<LettersResponse, _>(&source, segments(&["x"]), vec![]).await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().starts_with("get page 2"));
}

#[tokio::test]
async fn test_malformed_page_is_decode_error() {
    let source = ScriptedSource::new(vec![
        Ok(Bytes::from(
            json!({"results": ["a"], "continuation_token": "t1"}).to_string(),
        )),
        Ok(Bytes::from_static(b"{\"results\": [")),
    ]);

    let err = paginate::<LettersResponse, _>(&source, segments(&["x"]), vec![])
        .await
        .unwrap_err();

    assert!(err.is_decode());
    assert!(err.to_string().starts_with("decode page 2"));
    assert_eq!(source.requests().len(), 2);
}
