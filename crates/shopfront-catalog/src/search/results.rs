//! Search results and pagination.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Records shown per page.
pub const PAGE_SIZE: usize = 12;

/// Pagination info.
///
/// `total_pages` is never zero, and `page` is always in `1..=total_pages`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

/// `max(1, ceil(total / per_page))`.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1)).max(1)
}

impl Pagination {
    /// Create pagination info, clamping `page` into `1..=total_pages`.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total_pages(total, per_page);
        let page = page.clamp(1, total_pages);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Pagination over `total` items with the fixed page size.
    pub fn with_page_size(page: usize, total: usize) -> Self {
        Self::new(page, PAGE_SIZE, total)
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    /// Index range of this page's items.
    pub fn range(&self) -> Range<usize> {
        let start = self.offset().min(self.total);
        let end = (self.page * self.per_page).min(self.total);
        start..end
    }

    /// Slice a sequence down to this page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        &items[range.start.min(end)..end]
    }

    /// Same pagination on another page (clamped).
    pub fn at_page(&self, page: usize) -> Self {
        Self::new(page, self.per_page, self.total)
    }

    /// The previous page, stopping at 1.
    pub fn prev(&self) -> Self {
        self.at_page(self.page.saturating_sub(1))
    }

    /// The next page, stopping at the last page.
    pub fn next(&self) -> Self {
        self.at_page(self.page + 1)
    }

    /// Check whether `page` is a selectable page number.
    pub fn contains_page(&self, page: usize) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    /// All page numbers for the page selector.
    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }

    /// Get start item number (1-indexed).
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        (self.page * self.per_page).min(self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::with_page_size(1, 0)
    }
}

/// Search results container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults<T> {
    /// The items on the current page.
    pub items: Vec<T>,
    /// Pagination info.
    pub pagination: Pagination,
}

impl<T> SearchResults<T> {
    /// Create new search results.
    pub fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self { items, pagination }
    }

    /// Create empty results.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::default(),
        }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for SearchResults<T> {
    fn default() -> Self {
        Self::empty()
    }
}
