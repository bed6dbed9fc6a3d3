use crate::CalcResult;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

// ================================================
// PUBLIC FUNCTIONS
// ================================================

/// Parse a `YYYY-MM-DD` form value as a calendar date in local time.
///
/// The value is never interpreted as a UTC instant, so users west of UTC do not
/// see the date shift back by one day. Invalid triples such as `2023-02-30`
/// are rejected rather than rolled over.
///
/// # Example
/// ```rust
/// # use calckit::prelude::*;
/// let date = parse_local_date("2024-02-29")?;
/// assert_eq!(date.to_string(), "2024-02-29");
/// assert!(parse_local_date("2023-02-29").is_err());
/// # CalcResult::Ok(())
/// ```
pub fn parse_local_date(value: &str) -> CalcResult<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return Err("date field is empty".into());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|err| format!("invalid date '{value}': {err}").into())
}

/// Local midnight at the start of `date`.
pub fn local_midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Number of days in the given month (28 to 31, leap years included).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // never reached for a valid month, keeps the function total
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Calendar-aware (years, months, days) between `from` and `to`.
///
/// Subtracts field by field, then fixes underflow:
/// - day underflow borrows a month and adds the length of the month preceding `to`'s month
/// - month underflow borrows a year
///
/// `from` is expected to be on or before `to`.
pub fn calendar_diff(from: NaiveDate, to: NaiveDate) -> (i32, i32, i32) {
    let mut years = to.year() - from.year();
    let mut months = to.month() as i32 - from.month() as i32;
    let mut days = to.day() as i32 - from.day() as i32;

    // Fix day underflow
    if days < 0 {
        months -= 1;
        let (prev_year, prev_month) = if to.month() == 1 {
            (to.year() - 1, 12)
        } else {
            (to.year(), to.month() - 1)
        };
        days += days_in_month(prev_year, prev_month) as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    (years, months, days)
}

/// Build a date from a year, a zero-based month offset and a day, letting
/// out-of-range months and days roll forward into the following period.
///
/// `month0` may be negative or exceed 11 (it is normalised into the year), and a
/// `day` past the end of the month spills over, so `(2023, 1, 29)` is March 1st.
/// Returns `None` only when the result leaves chrono's supported range.
pub fn date_with_overflow(year: i32, month0: i64, day: u32) -> Option<NaiveDate> {
    let year = i64::from(year) + month0.div_euclid(12);
    let month = month0.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)?;
    first.checked_add_signed(Duration::days(i64::from(day) - 1))
}

/// Add a signed number of calendar months to `date`, keeping its day of month
/// and rolling any excess into the next month.
pub fn add_months_overflowing(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let month0 = i64::from(date.month0()) + months;
    date_with_overflow(date.year(), month0, date.day())
}

/// Whole days elapsed between two instants, rounded towards negative infinity.
pub fn floor_days(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Days between two instants, rounded towards positive infinity.
pub fn ceil_days(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    let millis = (to - from).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// Parse a numeric form field the way a browser's `parseFloat` does.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"12.5%"` reads as `12.5`. Returns `None` when no number can be read.
pub fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let bytes = value.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    // Accept "Infinity" the way parseFloat does
    if value[end..].starts_with("Infinity") {
        return value[..end + "Infinity".len()].parse().ok();
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // Optional exponent, only consumed when it is complete
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    value[..end].parse().ok()
}

/// Parse an integer form field the way a browser's `parseInt` does, truncating
/// any fractional part. Returns `None` when no digits can be read.
pub fn parse_integer(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let bytes = value.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    value[..end].parse().ok()
}

/// An already-parsed field that came out as NaN or infinite counts as zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Missing or unparsable numeric fields count as zero.
pub fn number_or_zero(value: &str) -> f64 {
    match parse_number(value) {
        Some(number) if !number.is_nan() => number,
        _ => 0.0,
    }
}
