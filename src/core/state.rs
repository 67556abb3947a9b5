//! Per-view list state and the intents that mutate it
//!
//! Every view holds one [`ListState`]: the active search text, categorical
//! filters, date range, sort key, and requested page. The state is plain
//! data (serializable, comparable) and is passed by reference into the
//! pure pipeline stages, so the whole pipeline can be exercised without a
//! rendering environment.

use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Sentinel filter value that disables a categorical filter
pub const FILTER_ALL: &str = "all";

/// Named date-range windows for the occurrence-time filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DateRange {
    #[serde(rename = "7days")]
    Last7Days,
    #[serde(rename = "30days")]
    Last30Days,
    #[serde(rename = "90days")]
    Last90Days,
    #[serde(rename = "all")]
    #[default]
    AllTime,
}

impl DateRange {
    /// Cutoff instant for the window, or `None` when the filter is off
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let days = match self {
            DateRange::Last7Days => 7,
            DateRange::Last30Days => 30,
            DateRange::Last90Days => 90,
            DateRange::AllTime => return None,
        };
        Some(now - Duration::days(days))
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The field and direction ordering a filtered result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    /// A descending key, the default for a freshly selected field
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// The active filter/sort/page criteria of one view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListState {
    /// Free-text search query; empty matches everything
    pub search: String,

    /// Active categorical filters, field name → selected value
    ///
    /// Absent field means "all". Insertion order is kept so serialized
    /// state stays deterministic.
    pub filters: IndexMap<String, String>,

    /// Active date-range window
    pub date_range: DateRange,

    /// Active sort key
    pub sort: SortKey,

    /// Requested page number (1-based); clamped by the pagination stage
    pub page: usize,
}

impl ListState {
    /// Fresh state sorting by the given field, descending, page 1
    pub fn new(default_sort_field: impl Into<String>) -> Self {
        Self {
            search: String::new(),
            filters: IndexMap::new(),
            date_range: DateRange::AllTime,
            sort: SortKey::descending(default_sort_field),
            page: 1,
        }
    }

    /// Intent: set the free-text search query
    ///
    /// Resets the page to 1.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.page = 1;
    }

    /// Intent: set a categorical filter
    ///
    /// The sentinel value [`FILTER_ALL`] removes the filter. Resets the
    /// page to 1.
    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        if value == FILTER_ALL {
            self.filters.shift_remove(&field);
        } else {
            self.filters.insert(field, value);
        }
        self.page = 1;
    }

    /// Intent: set the date-range window
    ///
    /// Resets the page to 1.
    pub fn set_date_range(&mut self, range: DateRange) {
        self.date_range = range;
        self.page = 1;
    }

    /// Intent: select a sort field
    ///
    /// Selecting the current field toggles the direction; selecting a new
    /// field makes it primary with the default direction (descending).
    /// Resets the page to 1.
    pub fn set_sort(&mut self, field: impl Into<String>) {
        let field = field.into();
        if self.sort.field == field {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortKey::descending(field);
        }
        self.page = 1;
    }

    /// Intent: request a page
    ///
    /// Stored as requested; the pagination stage clamps it to the valid
    /// range once the filtered total is known.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}
