//! Decoder implementations
//!
//! A decode either produces the whole value or fails with the parse error;
//! unknown fields in the body are ignored.

use super::types::{Page, PageResult, SingleResult};
use crate::error::Result;

/// Decode a body into the single value carried by `R`
pub fn decode_single<R: SingleResult>(body: &[u8]) -> Result<R::Output> {
    let response: R = serde_json::from_slice(body)?;
    Ok(response.into_result())
}

/// Decode a body into a page of `R::Item`
pub fn decode_page<R: PageResult>(body: &[u8]) -> Result<Page<R::Item>> {
    let response: R = serde_json::from_slice(body)?;
    Ok(response.into_page())
}
