//! Pagination module
//!
//! Walks continuation-token result sets to completion.
//!
//! # Overview
//!
//! The remote serves the first page of a collection at `{resource}` and every
//! later page at `{resource}/continuation?...&continuation_token={token}`.
//! A page with no items ends the stream, whatever its token says. The
//! [`Paginator`] fetches pages strictly in order, appends their items and
//! returns the whole collection, or an error and nothing at all.

mod paginator;
mod types;

pub use paginator::{paginate, Paginator};
pub use types::{
    PageRequest, PaginationState, CONTINUATION_SEGMENT, CONTINUATION_TOKEN_PARAM,
};

#[cfg(test)]
mod tests;
