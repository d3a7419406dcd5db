//! Continuation-token paginator

use super::types::{PageRequest, PaginationState};
use crate::decode::{decode_page, PageResult};
use crate::error::{Result, ResultExt};
use crate::http::Fetch;
use crate::types::{Param, PathSegments};
use tracing::debug;

/// Drives the fetch/append loop over a [`Fetch`] source
pub struct Paginator<'a, F: ?Sized> {
    source: &'a F,
}

impl<'a, F: Fetch + ?Sized> Paginator<'a, F> {
    pub fn new(source: &'a F) -> Self {
        Self { source }
    }

    /// Fetch every page of a collection and return all items in order
    ///
    /// Pages are requested one after another; each request depends on the
    /// token of the page before it. The loop ends on the first page with no
    /// items, so a collection of `n` non-empty pages costs `n + 1` round
    /// trips. Any failure aborts the walk and discards what was collected.
    pub async fn collect<R: PageResult>(
        &self,
        path: PathSegments,
        params: Vec<Param>,
    ) -> Result<Vec<R::Item>> {
        let mut request = PageRequest::new(path, params);
        let mut items = Vec::new();
        let mut state = PaginationState::Fetching;

        loop {
            state = match state {
                PaginationState::Fetching => {
                    let page_number = request.page() + 1;
                    let body = self
                        .source
                        .fetch(request.path(), request.params())
                        .await
                        .with_context(|| format!("get page {page_number}"))?;
                    let page = decode_page::<R>(&body)
                        .with_context(|| format!("decode page {page_number}"))?;
                    debug!(page = page_number, items = page.len(), "Fetched page");
                    PaginationState::after_fetch(page)
                }
                PaginationState::Appending(page) => {
                    items.extend(page.items);
                    request.advance(page.token);
                    PaginationState::Fetching
                }
                PaginationState::Done => {
                    debug!(
                        pages = request.page() + 1,
                        items = items.len(),
                        "Pagination complete"
                    );
                    return Ok(items);
                }
            };
        }
    }
}

/// Collect every page of `path` through `source`
pub async fn paginate<R, F>(
    source: &F,
    path: PathSegments,
    params: Vec<Param>,
) -> Result<Vec<R::Item>>
where
    R: PageResult,
    F: Fetch + ?Sized,
{
    Paginator::new(source).collect::<R>(path, params).await
}
