//! Reusable input filters
//!
//! These filters normalize draft field values before validation.

/// Filter: trim surrounding whitespace
pub fn trim(value: &str) -> String {
    value.trim().to_string()
}

/// Filter: lowercase the value (used for email addresses)
pub fn lowercase(value: &str) -> String {
    value.to_lowercase()
}
