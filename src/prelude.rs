//! # Calckit Prelude
//!
//! Re-exports every calculator, result type and reference table so that a single
//! `use calckit::prelude::*;` is enough.
//!
//! ## Example
//!
//! ```rust
//! # use calckit::prelude::*;
//! let start = parse_local_date("2025-01-06")?;
//! let shifted = shift_date()
//!     .base(start)
//!     .amount(3)
//!     .unit(DateUnit::Months)
//!     .call()
//!     .unwrap();
//! assert_eq!(long_date(shifted.date), "Sunday, April 6, 2025");
//!
//! let change = percent_change(80.0, 60.0).unwrap();
//! assert_eq!(change.direction, ChangeDirection::Decrease);
//! assert_eq!(grouped(change.percent, 2), "25");
//! # CalcResult::Ok(())
//! ```

// Package Result type for fallible setup
pub use crate::CalcResult;

// Input parsing and calendar helpers
pub use crate::helpers::{
    calendar_diff, days_in_month, finite_or_zero, is_leap_year, local_midnight, number_or_zero,
    parse_integer, parse_local_date, parse_number,
};

// Calendar calculators
pub use crate::calendar::age::*;
pub use crate::calendar::date_diff::*;
pub use crate::calendar::pregnancy::*;

// Percentage calculators
pub use crate::percentage::*;

// Finance calculators
pub use crate::finance::mortgage::*;
pub use crate::finance::tariff::*;
pub use crate::finance::tax::states::*;
pub use crate::finance::tax::tables::{ByFilingStatus, TaxBracket};
pub use crate::finance::tax::*;
pub use crate::finance::tip::*;

// Presentation
pub use crate::format::*;

// Live age updates
pub use crate::live::*;
