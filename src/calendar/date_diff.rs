use crate::helpers::{add_months_overflowing, calendar_diff, floor_days, local_midnight};
use bon::builder;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::str::FromStr;

// =======================================
// DATE DIFFERENCE
// =======================================

/// Difference between two calendar dates.
///
/// `days` is the remainder after whole weeks (`total_days % 7`), which is what the
/// week view shows; the day component of the calendar decomposition is kept
/// separately in `calendar_days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateDifference {
    pub total_days: i64,
    pub years: i32,
    pub months: i32,
    pub calendar_days: i32,
    pub weeks: i64,
    pub days: i64,
    pub total_weeks: i64,
    pub total_hours: i64,
    pub total_minutes: i64,
    pub includes_end_date: bool,
}

/// Difference between `start` and `end`, in any order.
///
/// The dates are swapped when `start` is after `end`, so the result never depends on
/// argument order. With `include_end` the end date counts as a full day.
///
/// # Examples
/// ```rust
/// # use calckit::prelude::*;
/// let a = parse_local_date("2024-03-15")?;
/// let b = parse_local_date("2023-01-10")?;
/// let diff = date_difference().start(a).end(b).include_end(true).call();
/// assert_eq!(diff.total_days, 431);
/// assert_eq!((diff.years, diff.months, diff.calendar_days), (1, 2, 5));
/// assert_eq!((diff.weeks, diff.days), (61, 4));
/// # CalcResult::Ok(())
/// ```
#[builder]
pub fn date_difference(
    start: NaiveDate,
    end: NaiveDate,
    #[builder(default = false)] include_end: bool,
) -> DateDifference {
    // Ensure start is before end
    let (start, end) = if start > end { (end, start) } else { (start, end) };

    let mut total_days = floor_days(local_midnight(start), local_midnight(end));
    if include_end {
        total_days += 1;
    }

    let (years, months, calendar_days) = calendar_diff(start, end);
    let weeks = total_days / 7;

    DateDifference {
        total_days,
        years,
        months,
        calendar_days,
        weeks,
        days: total_days % 7,
        total_weeks: weeks,
        total_hours: total_days * 24,
        total_minutes: total_days * 24 * 60,
        includes_end_date: include_end,
    }
}

// =======================================
// DATE ARITHMETIC
// =======================================

/// Unit of the amount added to or subtracted from a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DateUnit {
    #[default]
    Days,
    Weeks,
    Months,
    Years,
}

impl FromStr for DateUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "days" | "day" => Ok(DateUnit::Days),
            "weeks" | "week" => Ok(DateUnit::Weeks),
            "months" | "month" => Ok(DateUnit::Months),
            "years" | "year" => Ok(DateUnit::Years),
            other => Err(format!("unknown date unit '{other}'")),
        }
    }
}

/// Whether the amount is added to or subtracted from the base date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DateOperation {
    #[default]
    Add,
    Subtract,
}

impl FromStr for DateOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(DateOperation::Add),
            "subtract" | "-" => Ok(DateOperation::Subtract),
            other => Err(format!("unknown date operation '{other}'")),
        }
    }
}

/// Date produced by [`shift_date`] and the name of its weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateShift {
    pub date: NaiveDate,
    pub day_of_week: String,
}

/// Add or subtract an amount of days, weeks, months or years.
///
/// The sign of `amount` is ignored and the `operation` alone decides the direction,
/// so a negative amount typed into a "subtract" form does not add.
///
/// Months and years keep the day of month and roll any excess into the following
/// month: January 31st plus one month is March 3rd (March 2nd in leap years), and
/// February 29th plus one year is March 1st.
///
/// Returns `None` when the result falls outside the supported date range.
///
/// # Examples
/// ```rust
/// # use calckit::prelude::*;
/// let base = parse_local_date("2023-01-31")?;
/// let shifted = shift_date().base(base).amount(1).unit(DateUnit::Months).call().unwrap();
/// assert_eq!(shifted.date.to_string(), "2023-03-03");
/// assert_eq!(shifted.day_of_week, "Friday");
/// # CalcResult::Ok(())
/// ```
#[builder]
pub fn shift_date(
    base: NaiveDate,
    amount: i64,
    #[builder(default)] unit: DateUnit,
    #[builder(default)] operation: DateOperation,
) -> Option<DateShift> {
    let magnitude = amount.checked_abs()?;
    let amount = match operation {
        DateOperation::Add => magnitude,
        DateOperation::Subtract => -magnitude,
    };

    let date = match unit {
        DateUnit::Days => base.checked_add_signed(Duration::try_days(amount)?)?,
        DateUnit::Weeks => base.checked_add_signed(Duration::try_weeks(amount)?)?,
        DateUnit::Months => add_months_overflowing(base, amount)?,
        DateUnit::Years => add_months_overflowing(base, amount.checked_mul(12)?)?,
    };

    Some(DateShift {
        date,
        day_of_week: date.format("%A").to_string(),
    })
}
