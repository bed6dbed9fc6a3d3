//! # Calendar Calculators
//!
//! Date arithmetic on local calendar dates, anchored to local midnight rather than UTC.
//!
//! ## Submodules
//! - [`age`]: Elapsed years/months/days since a birth date, cumulative totals, next birthday and zodiac sign
//! - [`date_diff`]: Difference between two dates and adding/subtracting days, weeks, months or years
//! - [`pregnancy`]: Due date, gestational week, trimester and milestones from an LMP or conception date
//!
//! ## Usage Example
//! ```rust
//! # use calckit::prelude::*;
//! let start = parse_local_date("2024-01-01")?;
//! let end = parse_local_date("2024-12-25")?;
//! let diff = date_difference().start(start).end(end).call();
//! assert_eq!(diff.total_days, 359);
//!
//! let shifted = shift_date()
//!     .base(start)
//!     .amount(6)
//!     .unit(DateUnit::Weeks)
//!     .call()
//!     .unwrap();
//! assert_eq!(shifted.day_of_week, "Monday");
//! # CalcResult::Ok(())
//! ```
//!
//! ## Notes
//! - Calculators that depend on the current time take a `now` parameter defaulting to the local clock.
//! - A reference date after `now` produces no result.

// Module structure
pub mod age;
pub mod date_diff;
pub mod pregnancy;
