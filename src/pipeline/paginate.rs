//! Pagination stage
//!
//! Slices the sorted subset into fixed-size pages. Out-of-range page
//! requests are clamped to the nearest valid page; an empty result set is
//! the empty-state, not an error.

use crate::core::page::{Page, PageMeta};

/// Return the slice for the requested page
pub fn paginate<T>(items: Vec<T>, requested_page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let total_pages = if total == 0 { 0 } else { total.div_ceil(page_size) };

    if total_pages == 0 {
        return Page::empty(page_size);
    }

    let page = requested_page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let slice: Vec<T> = items.into_iter().skip(start).take(page_size).collect();

    Page {
        items: slice,
        meta: PageMeta::new(page, page_size, total),
    }
}
