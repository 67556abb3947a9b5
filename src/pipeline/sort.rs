//! Sort stage
//!
//! Orders a filtered subset by the active sort key. The sort is stable:
//! records with equal keys keep their input order in both directions, so
//! no secondary tie-break field is needed.

use crate::core::record::Record;
use crate::core::state::{SortDirection, SortKey};

/// Return the records ordered by the sort key
pub fn apply_sort<R: Record>(records: Vec<R>, sort: &SortKey) -> Vec<R> {
    let mut sorted = records;
    sorted.sort_by(|a, b| {
        let ordering = a.sort_key(&sort.field).compare(&b.sort_key(&sort.field));
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}
