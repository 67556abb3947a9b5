//! Filter stage
//!
//! Applies the active criteria as a logical AND: free-text search,
//! categorical filters, and the date-range window. Always produces a
//! derived vector; the backing store is never mutated.

use crate::core::record::Record;
use crate::core::state::ListState;
use chrono::{DateTime, Utc};

/// Return the records satisfying every active criterion
pub fn apply_filters<R: Record>(
    records: Vec<R>,
    state: &ListState,
    now: DateTime<Utc>,
) -> Vec<R> {
    let cutoff = state.date_range.cutoff(now);

    records
        .into_iter()
        .filter(|record| record.matches_search(&state.search))
        .filter(|record| {
            state.filters.iter().all(|(field, value)| {
                record.field_text(field).as_deref() == Some(value.as_str())
            })
        })
        .filter(|record| cutoff.is_none_or(|c| record.occurred_at() >= c))
        .collect()
}
