//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_PAGE_SIZE: i64 = 25;
/// Maximum page size.
pub const MAX_PAGE_SIZE: i64 = 200;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: i64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

impl PageRequest {
    /// Create a new page request, clamping into the accepted range.
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Number of rows to skip (SQL `OFFSET`).
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.page_size.max(0))
    }

    /// Maximum number of rows to return (SQL `LIMIT`).
    pub fn limit(&self) -> i64 {
        self.page_size.max(0)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Number of items matching the filters, before pagination.
    pub total: i64,
    /// Current page number (1-based).
    pub page: i64,
    /// Number of items per page.
    pub page_size: i64,
    /// Total number of pages (never less than 1).
    pub total_pages: i64,
}

impl<T> PageResponse<T> {
    /// Create a paginated response for `request` out of `total` matches.
    pub fn new(items: Vec<T>, request: &PageRequest, total: i64) -> Self {
        Self {
            items,
            total,
            page: request.page,
            page_size: request.page_size,
            total_pages: total_pages(total, request.page_size),
        }
    }

    /// Convert the items while keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

/// Number of pages needed for `total` items.
///
/// A non-positive `page_size` yields 1, and so does an empty result set.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if page_size <= 0 {
        return 1;
    }
    (total.max(0).saturating_add(page_size - 1) / page_size).max(1)
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(31, 10), 4);
        assert_eq!(total_pages(1, 200), 1);
        assert_eq!(total_pages(401, 200), 3);
    }

    #[test]
    fn test_total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 25), 1);
        assert_eq!(total_pages(0, 1), 1);
    }

    #[test]
    fn test_total_pages_non_positive_page_size() {
        assert_eq!(total_pages(100, 0), 1);
        assert_eq!(total_pages(100, -5), 1);
    }

    #[test]
    fn test_total_pages_matches_ceil_for_small_grid() {
        for total in 0..=60_i64 {
            for page_size in 1..=12_i64 {
                let expected = ((total as f64) / (page_size as f64)).ceil().max(1.0) as i64;
                assert_eq!(total_pages(total, page_size), expected, "{total}/{page_size}");
            }
        }
    }

    #[test]
    fn test_offset_and_limit() {
        let page = PageRequest::new(3, 10);
        assert_eq!(page.offset(), 20);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn test_new_clamps_values() {
        let page = PageRequest::new(0, 1000);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::new(1, 0).page_size, 1);
    }

    #[test]
    fn test_default_request() {
        let page = PageRequest::default();
        assert_eq!((page.page, page.page_size), (1, DEFAULT_PAGE_SIZE));
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_response_metadata() {
        let response = PageResponse::new(vec![1, 2, 3], &PageRequest::new(2, 3), 7);
        assert_eq!(response.total_pages, 3);
        assert_eq!(response.page, 2);

        let mapped = response.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20, 30]);
        assert_eq!(mapped.total, 7);
    }
}
