//! Reusable field validators
//!
//! Each validator checks one field value and reports a
//! [`FieldValidationError`] naming the field, so a draft can collect
//! every failure in one pass instead of stopping at the first.

use crate::core::error::FieldValidationError;
use crate::core::field::FieldFormat;
use crate::core::format;

/// Validator: field must be non-empty after trimming
pub fn required(field: &str, value: &str) -> Result<(), FieldValidationError> {
    if value.trim().is_empty() {
        Err(FieldValidationError {
            field: field.to_string(),
            message: "is required".to_string(),
        })
    } else {
        Ok(())
    }
}

/// Validator: field must look like an email address
pub fn email(field: &str, value: &str) -> Result<(), FieldValidationError> {
    if FieldFormat::Email.validate(value) {
        Ok(())
    } else {
        Err(FieldValidationError {
            field: field.to_string(),
            message: "is not a valid email address".to_string(),
        })
    }
}

/// Validator: field must parse as a finite monetary amount
///
/// Accepts the same lenient forms the display layer does (`"1250"`,
/// `"$1,250.00"`). Returns the parsed value on success.
pub fn amount(field: &str, value: &str) -> Result<f64, FieldValidationError> {
    format::parse_amount(value).map_err(|_| FieldValidationError {
        field: field.to_string(),
        message: "must be a finite number".to_string(),
    })
}
