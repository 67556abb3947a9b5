//! Pagination envelope types

use serde::Serialize;

/// One page of a filtered, sorted result set
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// The records on this page, in display order
    pub items: Vec<T>,

    /// Pagination metadata
    pub meta: PageMeta,
}

impl<T> Page<T> {
    /// An empty page (the empty-state, not an error)
    pub fn empty(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            meta: PageMeta::new(1, page_size, 0),
        }
    }

    /// Whether the filtered set had no records at all
    pub fn is_empty_state(&self) -> bool {
        self.meta.total == 0
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Current page number (starts at 1), after clamping
    pub page: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Total number of records (after filters)
    pub total: usize,

    /// Total number of pages; 0 when the filtered set is empty
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PageMeta {
    /// Create pagination metadata for a clamped page number
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        // page_size of at least 1 avoids division by zero
        let page_size = page_size.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(page_size) };
        let start = (page - 1) * page_size;

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: start + page_size < total,
            has_prev: page > 1,
        }
    }
}
