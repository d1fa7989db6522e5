//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Largest page a client may request; anything outside `1..=MAX_PAGE_SIZE`
/// is replaced by it.
pub const MAX_PAGE_SIZE: u64 = 10;

/// Request parameters for paginated queries.
///
/// Values are kept signed so that out-of-range input reaches the service
/// instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page_number")]
    pub page_number: i64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page_number() -> i64 {
    1
}

#[allow(clippy::cast_possible_wrap)]
fn default_page_size() -> i64 {
    MAX_PAGE_SIZE as i64
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
        }
    }
}

impl PageRequest {
    /// Creates a page request.
    #[must_use]
    pub const fn new(page_number: i64, page_size: i64) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Returns true if the page number is a valid 1-indexed page.
    #[must_use]
    pub const fn has_valid_page_number(&self) -> bool {
        self.page_number >= 1
    }

    /// Returns the page size after clamping into `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn effective_page_size(&self) -> u64 {
        match u64::try_from(self.page_size) {
            Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => size,
            _ => MAX_PAGE_SIZE,
        }
    }

    /// Calculates the number of records to skip.
    #[must_use]
    pub fn skip(&self) -> u64 {
        let page_index = u64::try_from(self.page_number.saturating_sub(1)).unwrap_or(0);
        page_index.saturating_mul(self.effective_page_size())
    }
}

/// One page of results plus paging metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    /// The items in the current page.
    pub items: Vec<T>,
    /// Current page number.
    pub page_number: u64,
    /// Items per page after clamping.
    pub page_size: u64,
    /// Total number of matching items across all pages.
    pub total_count: u64,
    /// Total number of pages; zero when nothing matched.
    pub total_pages: u64,
}

impl<T> PagedResult<T> {
    /// Creates a page, deriving `total_pages` from the count and page size.
    #[must_use]
    pub fn new(items: Vec<T>, page_number: u64, page_size: u64, total_count: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_count.div_ceil(page_size)
        };

        Self {
            items,
            page_number,
            page_size,
            total_count,
            total_pages,
        }
    }

    /// Converts the items while keeping the paging metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
