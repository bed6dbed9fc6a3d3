//! # Finance Calculators
//!
//! Money calculations for household decisions: home loans, income tax, restaurant tips and import duties.
//!
//! ## Submodules
//! - [`mortgage`]: Fixed-rate payment, yearly amortization schedule, auto-PMI and the mortgage form state
//! - [`tax`]: Federal brackets, dependent credits, FICA and state flat-rate estimate, with configurable tables
//! - [`tip`]: Tip amount and per-person split
//! - [`tariff`]: Import tariff on goods plus shipping, with country-suggested rates
//!
//! ## Usage Example
//! ```rust
//! # use calckit::prelude::*;
//! let loan = mortgage()
//!     .home_price(400_000.0)
//!     .down_payment(40_000.0)
//!     .annual_rate(7.0)
//!     .call()
//!     .unwrap();
//! let pmi = auto_pmi(400_000.0, 40_000.0);
//! let monthly = monthly_breakdown()
//!     .result(&loan)
//!     .property_tax(4_800.0)
//!     .insurance(1_500.0)
//!     .pmi(pmi)
//!     .call();
//! assert_eq!(pmi, 1_800.0);
//! assert!(monthly.total > loan.monthly_payment);
//!
//! let split = tip().bill(84.0).tip_percent(20.0).split(3).call().unwrap();
//! assert_eq!(split.per_person_total, 33.6);
//! ```
//!
//! ## Notes
//! - Rates passed in are percentages (7.0 for 7%); rates reported by the tax estimator are fractions.
//! - Amounts are plain `f64` dollars and are not rounded; rounding belongs to [`crate::format`].

// Module structure
pub mod mortgage;
pub mod tariff;
pub mod tax;
pub mod tip;
