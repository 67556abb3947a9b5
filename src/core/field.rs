//! Sort key values and field format validation

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::OnceLock;

/// A polymorphic sort key extracted from a record field
///
/// Comparison is type-aware: instants and numbers compare numerically,
/// text compares case-insensitively. A record that has no value for the
/// requested field yields [`SortValue::Missing`], which orders before any
/// present value in both directions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SortValue {
    Instant(DateTime<Utc>),
    Number(f64),
    Text(String),
    Missing,
}

impl SortValue {
    /// Total ordering across all variants
    ///
    /// Mixed-variant comparisons fall back to a fixed variant rank so the
    /// ordering stays total even for heterogeneous keys.
    pub fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Instant(a), SortValue::Instant(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortValue::Missing => 0,
            SortValue::Instant(_) => 1,
            SortValue::Number(_) => 2,
            SortValue::Text(_) => 3,
        }
    }

    /// Check if the value is missing
    pub fn is_missing(&self) -> bool {
        matches!(self, SortValue::Missing)
    }
}

/// Field format validators for input validation
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Email,
    Custom(Regex),
}

impl FieldFormat {
    /// Validate a string value against this format
    pub fn validate(&self, value: &str) -> bool {
        match self {
            FieldFormat::Email => Self::is_valid_email(value),
            FieldFormat::Custom(regex) => regex.is_match(value),
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        });
        regex.is_match(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_instant_comparison() {
        let earlier = Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2023, 3, 5, 0, 0, 0).unwrap();

        assert_eq!(
            SortValue::Instant(earlier).compare(&SortValue::Instant(later)),
            Ordering::Less
        );
        assert_eq!(
            SortValue::Instant(later).compare(&SortValue::Instant(earlier)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_number_comparison() {
        assert_eq!(
            SortValue::Number(500.0).compare(&SortValue::Number(1250.0)),
            Ordering::Less
        );
        assert_eq!(
            SortValue::Number(-102.5).compare(&SortValue::Number(0.0)),
            Ordering::Less
        );
        assert_eq!(
            SortValue::Number(750.0).compare(&SortValue::Number(750.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_text_comparison_is_case_insensitive() {
        assert_eq!(
            SortValue::Text("alice".to_string()).compare(&SortValue::Text("Bob".to_string())),
            Ordering::Less
        );
        assert_eq!(
            SortValue::Text("Payroll".to_string())
                .compare(&SortValue::Text("payroll".to_string())),
            Ordering::Equal
        );
    }

    #[test]
    fn test_missing_orders_before_present_values() {
        assert_eq!(
            SortValue::Missing.compare(&SortValue::Text("anything".to_string())),
            Ordering::Less
        );
        assert_eq!(
            SortValue::Number(0.0).compare(&SortValue::Missing),
            Ordering::Greater
        );
        assert_eq!(SortValue::Missing.compare(&SortValue::Missing), Ordering::Equal);
        assert!(SortValue::Missing.is_missing());
    }

    #[test]
    fn test_email_validation() {
        let format = FieldFormat::Email;

        assert!(format.validate("test@example.com"));
        assert!(format.validate("user.name+tag@example.co.uk"));
        assert!(!format.validate("invalid-email"));
        assert!(!format.validate("@example.com"));
        assert!(!format.validate("user@nodot"));
    }

    #[test]
    fn test_custom_regex_validation() {
        let format = FieldFormat::Custom(Regex::new(r"^REF-\d{6}$").unwrap());

        assert!(format.validate("REF-123456"));
        assert!(!format.validate("REF-12"));
        assert!(!format.validate("ref-123456"));
    }
}
