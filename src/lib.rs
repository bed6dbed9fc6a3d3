//! # Calckit
//!
//! Everyday calculators as small, pure, type-safe Rust functions: age, date differences,
//! pregnancy timelines, percentages, mortgage amortization, income tax, tips and import tariffs.
//!
//! ## Features
//! - **Pure & Predictable**: Every calculation is a synchronous function of its inputs; "now" is a parameter
//! - **No Result Instead of Errors**: Incomplete or invalid input yields `None`, never a panic
//! - **Calendar Aware**: Leap years, month-length borrowing and local-midnight anchoring
//! - **Amortization**: Fixed-rate annuity payment with a yearly principal/interest schedule
//! - **Tax Tables**: Progressive federal brackets, FICA, dependent credits and state flat rates, configurable via [`TaxConfig`](finance::tax::TaxConfig)
//! - **Builder Pattern**: All calculators use builder pattern with defaults and parameter validation
//!
//! ## Quick Start
//!
//! ```rust
//! use calckit::prelude::*;
//!
//! let loan = mortgage()
//!     .home_price(350_000.0)
//!     .down_payment(70_000.0)
//!     .annual_rate(6.5)
//!     .term_years(30)
//!     .call()
//!     .expect("valid mortgage inputs");
//! println!("Monthly payment: {}", currency(loan.monthly_payment, 2));
//!
//! let tax = income_tax()
//!     .gross_income(75_000.0)
//!     .filing_status(FilingStatus::Single)
//!     .state("TX")
//!     .call()
//!     .expect("positive income");
//! println!("Take home: {}", currency(tax.take_home, 0));
//!
//! let birth = parse_local_date("1990-06-15")?;
//! let now = parse_local_date("2024-06-15")?.and_hms_opt(9, 30, 0).unwrap();
//! let age = calculate_age().birth_date(birth).now(now).call().unwrap();
//! assert_eq!(age.years, 34);
//! # CalcResult::Ok(())
//! ```
//!
//! ## Supported Calculators
//!
//! - **Calendar**: `calculate_age`, `date_difference`, `shift_date`, `pregnancy_timeline`
//! - **Percentage**: `what_is_percent`, `is_what_percent`, `percent_change`
//! - **Finance**: `mortgage`, `monthly_breakdown`, `auto_pmi`, `income_tax`, `tip`, `tariff`
//! - **Presentation**: en-US currency, number, percentage and date formatting
//! - **Live Updates**: `AgeTicker` re-evaluates an age every second
//!
//! ## Notes
//! - Rates given to calculators are in percent (6.5 for 6.5%); rates reported by the tax estimator are fractions
//! - Enable the `logging` feature to have rejected inputs reported through the `log` facade

pub type CalcResult<T> = Result<T, Box<dyn std::error::Error>>;

#[macro_use]
mod logging;

pub mod calendar;
pub mod finance;
pub mod format;
pub mod helpers;
pub mod live;
pub mod params;
pub mod percentage;
pub mod prelude;
