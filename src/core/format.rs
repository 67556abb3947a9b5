//! Fixed-locale display formatting for currency and dates
//!
//! Formatting here is part of the observable contract: free-text search
//! matches against these formatted strings, so a user searching
//! "$1,250.00" finds exactly what the table shows. The locale is fixed to
//! en-US / USD.

use crate::core::error::FormatError;
use chrono::{DateTime, Datelike, Utc};

/// Sentinel shown in place of an amount that cannot be parsed
pub const INVALID_AMOUNT: &str = "Invalid Amount";

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a monetary amount as en-US USD, e.g. `$1,250.00` or `-$102.50`
///
/// Non-finite values degrade to the [`INVALID_AMOUNT`] sentinel rather
/// than erroring.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return INVALID_AMOUNT.to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let fraction = cents % 100;
    let sign = if amount.is_sign_negative() && cents > 0 {
        "-"
    } else {
        ""
    };

    format!("{}${}.{:02}", sign, group_thousands(dollars), fraction)
}

/// Format an instant as an en-US short date, e.g. `Mar 5, 2023`
pub fn format_date(instant: DateTime<Utc>) -> String {
    let month = MONTHS[instant.month0() as usize];
    format!("{} {}, {}", month, instant.day(), instant.year())
}

/// Parse a free-form amount string leniently
///
/// Strips every character that is not a digit, a decimal point, or a
/// minus sign before parsing, so `"$1,250.00"` and `"1250"` both yield
/// `1250.0`. The result must be finite.
pub fn parse_amount(input: &str) -> Result<f64, FormatError> {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| FormatError::UnparseableAmount {
            value: input.to_string(),
        })
}

/// Render a raw amount string for display, degrading to the sentinel
pub fn display_amount(input: &str) -> String {
    match parse_amount(input) {
        Ok(amount) => format_currency(amount),
        Err(_) => INVALID_AMOUNT.to_string(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits: Vec<char> = value.to_string().chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out
}
