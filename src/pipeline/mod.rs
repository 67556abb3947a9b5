//! The list pipeline: Record Store → filter → sort → paginate
//!
//! Every stage is a pure function over owned vectors; nothing here reads
//! the clock or touches a store. The view layer feeds the pipeline a
//! snapshot of the store, the current [`ListState`], and an explicit
//! `now` instant for the date-range cutoff.

pub mod filter;
pub mod paginate;
pub mod sort;

pub use filter::apply_filters;
pub use paginate::paginate;
pub use sort::apply_sort;

use crate::core::page::Page;
use crate::core::record::Record;
use crate::core::state::ListState;
use chrono::{DateTime, Utc};

/// Run the full pipeline for one view state
pub fn run_pipeline<R: Record>(
    records: Vec<R>,
    state: &ListState,
    page_size: usize,
    now: DateTime<Utc>,
) -> Page<R> {
    let filtered = apply_filters(records, state, now);
    let sorted = apply_sort(filtered, &state.sort);
    paginate(sorted, state.page, page_size)
}
