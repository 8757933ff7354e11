//! Page arithmetic for list views.
//!
//! [`paginate`] turns a raw page token, a total item count, and a page size
//! into a [`Pagination`]: the current page, how many pages exist, where the
//! page starts, and its neighbours. A successfully built value always
//! satisfies `1 <= page <= count`, so callers can feed `offset` straight into
//! a query and render navigation without re-checking anything.

use std::num::ParseIntError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason reported when the count or page size is out of range.
const INVALID_QUANTITY: &str = "invalid quantity or per-page";

/// Reason reported when the page number falls outside `1..=count`.
const INVALID_PAGE: &str = "invalid page";

/// Errors produced while building a [`Pagination`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The page token, item count, or page size was rejected.
    ///
    /// The reason is for diagnostics only.
    #[error("Invalid pagination input: {0}")]
    InvalidInput(String),
}

impl From<ParseIntError> for PaginationError {
    fn from(err: ParseIntError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

/// Query parameters for paginated list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Raw page token (1-indexed), parsed by [`paginate`].
    #[serde(default = "default_page")]
    pub page: String,
}

fn default_page() -> String {
    "1".to_string()
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
        }
    }
}

impl PageRequest {
    /// Builds the pagination for this request over `n` items, `per` at a time.
    ///
    /// # Errors
    ///
    /// See [`paginate`].
    pub fn paginate(&self, n: i64, per: i64) -> Result<Pagination, PaginationError> {
        paginate(&self.page, n, per)
    }
}

/// Navigation descriptor for one page of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    page: i64,
    count: i64,
    offset: i64,
    prev: Option<i64>,
    next: Option<i64>,
}

impl Pagination {
    /// Current page number (1-indexed).
    pub const fn page(&self) -> i64 {
        self.page
    }

    /// Total number of pages, never less than 1.
    pub const fn count(&self) -> i64 {
        self.count
    }

    /// Index of the first item on the current page.
    pub const fn offset(&self) -> i64 {
        self.offset
    }

    /// Previous page number, `None` on the first page.
    pub const fn prev(&self) -> Option<i64> {
        self.prev
    }

    /// Next page number, `None` on the last page.
    pub const fn next(&self) -> Option<i64> {
        self.next
    }

    /// All page numbers, for rendering navigation links.
    #[must_use]
    pub fn pages(&self) -> Vec<i64> {
        pages(self.count)
    }
}

/// Builds a [`Pagination`] for `page_token` over `n` items shown `per` at a time.
///
/// An empty collection still has one (empty) page.
///
/// # Errors
///
/// Returns [`PaginationError::InvalidInput`] if `n` is negative, `per` is not
/// positive, `page_token` is not an integer, or the page is outside
/// `1..=count`.
pub fn paginate(page_token: &str, n: i64, per: i64) -> Result<Pagination, PaginationError> {
    if n < 0 || per <= 0 {
        return Err(PaginationError::InvalidInput(INVALID_QUANTITY.to_string()));
    }

    let page: i64 = page_token.parse()?;

    let count = page_count(n, per);
    if page < 1 || page > count {
        return Err(PaginationError::InvalidInput(INVALID_PAGE.to_string()));
    }

    // (page - 1) * per < n here, so this cannot overflow.
    let offset = (page - 1) * per;

    Ok(Pagination {
        page,
        count,
        offset,
        prev: (page > 1).then(|| page - 1),
        next: (page < count).then(|| page + 1),
    })
}

/// Page numbers `1..=count`; empty when `count < 1`.
#[must_use]
pub fn pages(count: i64) -> Vec<i64> {
    (1..=count).collect()
}

/// Number of pages needed for `n` items, at least 1. Requires `per > 0`.
const fn page_count(n: i64, per: i64) -> i64 {
    let count = n / per + if n % per == 0 { 0 } else { 1 };
    if count == 0 { 1 } else { count }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
