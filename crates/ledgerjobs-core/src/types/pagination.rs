//! Pagination types for the job feed and list endpoints.

use serde::{Deserialize, Serialize};

/// Number of jobs per page (fixed feed page size).
pub const PAGE_SIZE: u64 = 24;
/// Maximum page size accepted from API callers.
const MAX_PAGE_SIZE: u64 = 100;

/// A fixed-size slice of the ordered result set.
///
/// Pages are 0-based: page `n` covers offsets `[n * page_size,
/// (n + 1) * page_size - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Page number (0-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
}

impl PageWindow {
    /// Create a window for the given page with the standard page size.
    pub fn new(page: u64) -> Self {
        Self {
            page,
            page_size: PAGE_SIZE,
        }
    }

    /// Create a window with an explicit page size (clamped to 1..=100).
    pub fn with_size(page: u64, page_size: u64) -> Self {
        Self {
            page,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// The SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        self.page * self.page_size
    }

    /// The SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// The window for the next page.
    pub fn next(&self) -> Self {
        Self {
            page: self.page + 1,
            page_size: self.page_size,
        }
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Paginated response wrapper for list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (0-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_count: u64,
    /// Whether additional pages exist past this one.
    pub has_more: bool,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, window: &PageWindow, total_count: u64) -> Self {
        let has_more = (window.page + 1) * window.page_size < total_count;
        Self {
            items,
            page: window.page,
            page_size: window.page_size,
            total_count,
            has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_offsets_are_zero_based() {
        let w = PageWindow::new(0);
        assert_eq!(w.offset(), 0);
        assert_eq!(w.limit(), PAGE_SIZE);

        let w = PageWindow::new(2);
        assert_eq!(w.offset(), 2 * PAGE_SIZE);
        assert_eq!(w.next().page, 3);
    }

    #[test]
    fn with_size_clamps() {
        assert_eq!(PageWindow::with_size(0, 0).page_size, 1);
        assert_eq!(PageWindow::with_size(0, 1000).page_size, 100);
    }

    #[test]
    fn has_more_tracks_total() {
        let w = PageWindow::with_size(0, 10);
        let full: Vec<u32> = (0..10).collect();
        assert!(PageResponse::new(full.clone(), &w, 11).has_more);
        assert!(!PageResponse::new(full, &w, 10).has_more);
        assert!(!PageResponse::new(Vec::<u32>::new(), &w, 0).has_more);
    }
}
