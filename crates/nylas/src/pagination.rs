//! Cursor pagination over list endpoints.
//!
//! The provider's list endpoints expose a forward cursor and no total
//! count: a present `next_cursor` means more pages may exist, an absent
//! one means the last page. [`Paginator`] wraps that into a caller-driven
//! "fetch everything matching these filters" traversal.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::error::{Error, Result};
use crate::resources::base;
use crate::response::ListResponse;
use crate::transport::{Query, Transport};

/// Iterates over every page of a filtered list endpoint.
///
/// The paginator is restartable: [`Paginator::restart`] re-issues the
/// first page with no `page_token`. It is not resumable across process
/// restarts unless the caller persists the cursor itself.
#[derive(Debug)]
pub struct Paginator<'c, T> {
    transport: &'c Transport,
    path: String,
    filters: Query,
    limit: u32,
    next_cursor: Option<String>,
    exhausted: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<'c, T: DeserializeOwned> Paginator<'c, T> {
    /// Creates a paginator over `path` with the given filters.
    ///
    /// `limit` is the per-page size: defaults to
    /// [`DEFAULT_PAGE_SIZE`](crate::config::DEFAULT_PAGE_SIZE), and values
    /// above [`MAX_PAGE_SIZE`](crate::config::MAX_PAGE_SIZE) are rejected
    /// here rather than silently clamped by the provider.
    pub(crate) fn new(
        transport: &'c Transport,
        path: String,
        filters: Query,
        limit: Option<u32>,
    ) -> Result<Self> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE);
        if limit > MAX_PAGE_SIZE {
            return Err(Error::Validation(format!(
                "page limit {limit} exceeds provider maximum {MAX_PAGE_SIZE}"
            )));
        }
        Ok(Self {
            transport,
            path,
            filters,
            limit,
            next_cursor: None,
            exhausted: false,
            _marker: PhantomData,
        })
    }

    /// Fetches the next page, or `None` once the traversal is exhausted.
    ///
    /// The cursor returned by each page is passed back verbatim as
    /// `page_token`; the paginator never inspects or constructs cursors.
    pub async fn next_page(&mut self) -> Result<Option<ListResponse<T>>> {
        if self.exhausted {
            return Ok(None);
        }

        let query = self
            .filters
            .clone()
            .with("limit", self.limit)
            .with_opt("page_token", self.next_cursor.clone());

        let page: ListResponse<T> = base::list(self.transport, self.path.clone(), query).await?;

        match page.next_cursor.clone() {
            Some(cursor) => self.next_cursor = Some(cursor),
            None => {
                debug!(path = %self.path, "pagination exhausted");
                self.exhausted = true;
            }
        }
        Ok(Some(page))
    }

    /// Drains every remaining page and returns the concatenated items.
    pub async fn collect_all(mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(page.data);
        }
        Ok(items)
    }

    /// Resets the traversal to the first page.
    pub fn restart(&mut self) {
        self.next_cursor = None;
        self.exhausted = false;
    }
}
