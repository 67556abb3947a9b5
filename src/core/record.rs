//! The record trait defining the polymorphic shape of list entries
//!
//! Each view owns a store of one concrete record variant (transactions or
//! workers). The pipeline stages only ever talk to records through this
//! trait, so search and sort stay agnostic of the concrete shape.

use crate::core::field::SortValue;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A list record that can be searched, filtered, and sorted
pub trait Record: Clone + Send + Sync + 'static {
    /// The record type name (e.g., "transaction", "worker")
    fn record_type() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> Uuid;

    /// The instant the record occurred (used by the date-range filter)
    fn occurred_at(&self) -> DateTime<Utc>;

    /// The formatted strings free-text search matches against
    ///
    /// These are display strings, formatted exactly as the presentation
    /// layer renders them. A missing optional field is simply absent from
    /// the list; it never excludes the record on its own.
    fn searchable_fields(&self) -> Vec<String>;

    /// Fields accepted by [`Record::sort_key`]
    fn sortable_fields() -> &'static [&'static str];

    /// The field a fresh view sorts by
    fn default_sort_field() -> &'static str;

    /// Extract the sort key for a field
    ///
    /// Unknown fields and absent optional fields yield
    /// [`SortValue::Missing`].
    fn sort_key(&self, field: &str) -> SortValue;

    /// Raw categorical value for exact-match filtering (e.g. status,
    /// category, role)
    fn field_text(&self, field: &str) -> Option<String>;

    /// Check whether this record matches a free-text query
    ///
    /// Case-insensitive substring match over [`Record::searchable_fields`];
    /// a record matches if any field contains the query. The empty query
    /// matches everything.
    fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Memo {
        id: Uuid,
        at: DateTime<Utc>,
        subject: String,
        author: Option<String>,
    }

    impl Record for Memo {
        fn record_type() -> &'static str {
            "memo"
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            self.at
        }

        fn searchable_fields(&self) -> Vec<String> {
            let mut fields = vec![self.subject.clone()];
            if let Some(author) = &self.author {
                fields.push(author.clone());
            }
            fields
        }

        fn sortable_fields() -> &'static [&'static str] {
            &["subject"]
        }

        fn default_sort_field() -> &'static str {
            "subject"
        }

        fn sort_key(&self, field: &str) -> SortValue {
            match field {
                "subject" => SortValue::Text(self.subject.clone()),
                _ => SortValue::Missing,
            }
        }

        fn field_text(&self, _field: &str) -> Option<String> {
            None
        }
    }

    fn memo(subject: &str, author: Option<&str>) -> Memo {
        Memo {
            id: Uuid::new_v4(),
            at: Utc::now(),
            subject: subject.to_string(),
            author: author.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(memo("Quarterly Bonus", None).matches_search(""));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let m = memo("Monthly Payroll", Some("Sarah Johnson"));
        assert!(m.matches_search("payroll"));
        assert!(m.matches_search("SARAH"));
        assert!(!m.matches_search("tax"));
    }

    #[test]
    fn test_missing_optional_field_does_not_exclude() {
        // No author: the subject still matches, and an author-only query
        // simply finds nothing.
        let m = memo("Monthly Payroll", None);
        assert!(m.matches_search("monthly"));
        assert!(!m.matches_search("sarah"));
    }
}
