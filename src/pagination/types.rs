//! Pagination types
//!
//! Request threading between pages and the states of the fetch loop.

use crate::decode::Page;
use crate::types::{Param, PathSegments};

/// Path segment appended for every page after the first
pub const CONTINUATION_SEGMENT: &str = "continuation";

/// Query parameter carrying the previous page's token
pub const CONTINUATION_TOKEN_PARAM: &str = "continuation_token";

/// States of one paginated call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationState<T> {
    /// Request the next page
    Fetching,
    /// Merge a non-empty page and move on
    Appending(Page<T>),
    /// An empty page was seen
    Done,
}

impl<T> PaginationState<T> {
    /// State that follows a successfully decoded page
    pub fn after_fetch(page: Page<T>) -> Self {
        if page.is_empty() {
            Self::Done
        } else {
            Self::Appending(page)
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Path and parameters for the next page request
///
/// Starts out as the resource path with the caller's parameters. The first
/// [`advance`] switches to the continuation path and appends the token
/// parameter; later calls only replace the token value.
///
/// [`advance`]: PageRequest::advance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    path: PathSegments,
    params: Vec<Param>,
    token_index: Option<usize>,
    page: usize,
}

impl PageRequest {
    pub fn new(path: PathSegments, params: Vec<Param>) -> Self {
        Self {
            path,
            params,
            token_index: None,
            page: 0,
        }
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Zero-based index of the page this request fetches
    pub fn page(&self) -> usize {
        self.page
    }

    /// Whether the request targets the continuation path
    pub fn is_continuation(&self) -> bool {
        self.token_index.is_some()
    }

    /// Prepare the request for the page after one carrying `token`
    pub fn advance(&mut self, token: impl Into<String>) {
        let token = token.into();
        match self.token_index {
            Some(index) => self.params[index].set_value(token),
            None => {
                self.path.push(CONTINUATION_SEGMENT.to_string());
                self.params.push(Param::new(CONTINUATION_TOKEN_PARAM, token));
                self.token_index = Some(self.params.len() - 1);
            }
        }
        self.page += 1;
    }
}
