//! # Formatting Helpers
//!
//! Locale-aware rendering of amounts and dates for tables, charts and the
//! printable quotation. All functions are pure; callers pass in the date.
//!
//! ```text
//!                    vi                       en
//! currency   14.300.000 VNĐ              ₫14,300,000
//! date       18 tháng 10, 2026           October 18, 2026
//! ```

use chrono::{Days, NaiveDate};

use crate::money::Money;
use crate::types::Locale;

// =============================================================================
// Currency
// =============================================================================

/// Formats an amount for display.
///
/// ## Example
/// ```rust
/// use quote_core::format::format_currency;
/// use quote_core::{Locale, Money};
///
/// let amount = Money::from_dong(14_300_000);
/// assert_eq!(format_currency(amount, Locale::Vi), "14.300.000 VNĐ");
/// assert_eq!(format_currency(amount, Locale::En), "₫14,300,000");
/// ```
pub fn format_currency(amount: Money, locale: Locale) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let magnitude = amount.dong().unsigned_abs();

    match locale {
        Locale::Vi => format!("{}{} VNĐ", sign, group_thousands(magnitude, '.')),
        Locale::En => format!("{}₫{}", sign, group_thousands(magnitude, ',')),
    }
}

/// Formats a plain number with the locale's grouping, no currency marker.
pub fn format_number(value: i64, locale: Locale) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let separator = match locale {
        Locale::Vi => '.',
        Locale::En => ',',
    };
    format!("{}{}", sign, group_thousands(value.unsigned_abs(), separator))
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    grouped
}

/// Formats basis points as a percentage with one decimal place.
///
/// ## Example
/// ```rust
/// use quote_core::format::format_percent_bps;
///
/// assert_eq!(format_percent_bps(1667), "16.7%");
/// assert_eq!(format_percent_bps(2000), "20.0%");
/// ```
pub fn format_percent_bps(bps: u32) -> String {
    let tenths = (bps as u64 + 5) / 10;
    format!("{}.{}%", tenths / 10, tenths % 10)
}

// =============================================================================
// Dates
// =============================================================================

/// Formats a date in the locale's long form.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use quote_core::format::format_date;
/// use quote_core::Locale;
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// assert_eq!(format_date(date, Locale::Vi), "18 tháng 10, 2026");
/// assert_eq!(format_date(date, Locale::En), "October 18, 2026");
/// ```
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::Vi => date.format("%-d tháng %-m, %Y").to_string(),
        Locale::En => date.format("%B %-d, %Y").to_string(),
    }
}

/// Shifts a date by a number of days (negative moves backwards).
///
/// Saturates at chrono's supported date range.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let shift = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(shift).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(shift).unwrap_or(NaiveDate::MIN)
    }
}

// =============================================================================
// Input Parsing
// =============================================================================

/// Parses an amount typed into a form field.
///
/// Every non-digit character is dropped first, so grouped input in either
/// locale parses the same way. Anything unparseable becomes zero.
///
/// ## Example
/// ```rust
/// use quote_core::format::parse_amount_input;
///
/// assert_eq!(parse_amount_input("6.500.000").dong(), 6_500_000);
/// assert_eq!(parse_amount_input("6,500,000 VNĐ").dong(), 6_500_000);
/// assert_eq!(parse_amount_input("abc").dong(), 0);
/// ```
pub fn parse_amount_input(value: &str) -> Money {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    Money::from_dong(digits.parse::<i64>().unwrap_or(0))
}

// =============================================================================
// Unit Tests
// =============================================================================
