//! # Display Formatting
//!
//! en-US presentation of calculator results: dollar amounts with thousands separators,
//! grouped plain numbers, percentages and long-form dates.
//!
//! Rounding follows the exact binary value of the `f64`, the same as a browser's
//! `Number.prototype.toFixed`.
//!
//! ```rust
//! # use calckit::prelude::*;
//! assert_eq!(currency(1769.7905, 2), "$1,769.79");
//! assert_eq!(currency(-250_000.0, 0), "-$250,000");
//! assert_eq!(grouped(1234.56789, 4), "1,234.5679");
//! assert_eq!(percent(0.2214, 1), "22.1%");
//! ```

use chrono::NaiveDate;

/// Dollar amount with thousands separators and a fixed number of decimals.
pub fn currency(amount: f64, decimals: usize) -> String {
    if !amount.is_finite() {
        return non_finite(amount);
    }
    let fixed = format!("{:.*}", decimals, amount.abs());
    let sign = if amount < 0.0 && !is_zero(&fixed) {
        "-"
    } else {
        ""
    };
    format!("{sign}${}", group_fixed(&fixed))
}

/// Plain number with thousands separators and at most `max_fraction_digits` decimals.
///
/// Trailing zeros in the fraction are dropped.
pub fn grouped(value: f64, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let fixed = format!("{:.*}", max_fraction_digits, value.abs());
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    let sign = if value < 0.0 && !is_zero(trimmed) {
        "-"
    } else {
        ""
    };
    format!("{sign}{}", group_fixed(trimmed))
}

/// Whole count with thousands separators.
pub fn count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{}", group_digits(&digits))
}

/// Fraction shown as a percentage with a fixed number of decimals (0.22 → "22.0%").
pub fn percent(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

/// "Monday, January 6, 2025"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "1/6/2025"
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

// =======================================
// PRIVATE FUNCTIONS
// =======================================

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "∞".to_string()
    } else {
        "-∞".to_string()
    }
}

fn is_zero(fixed: &str) -> bool {
    fixed.chars().all(|c| c == '0' || c == '.')
}

// Groups the integer part of an unsigned fixed-point string
fn group_fixed(fixed: &str) -> String {
    match fixed.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{frac_part}", group_digits(int_part)),
        None => group_digits(fixed),
    }
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
