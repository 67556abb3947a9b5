//! Core module containing fundamental traits and types for the crate

pub mod error;
pub mod field;
pub mod format;
pub mod page;
pub mod record;
pub mod state;
pub mod validation;

pub use error::{PaydeskError, RecordError, ValidationError};
pub use field::{FieldFormat, SortValue};
pub use page::{Page, PageMeta};
pub use record::Record;
pub use state::{DateRange, FILTER_ALL, ListState, SortDirection, SortKey};
