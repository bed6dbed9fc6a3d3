//! # Income Tax Estimator
//!
//! Federal income tax through progressive brackets, non-refundable dependent credits,
//! FICA payroll taxes and a flat state-rate approximation.
//!
//! The tables live in [`TaxConfig`], whose [`Default`] is the 2025 tax year. A different
//! year is a matter of building another configuration:
//!
//! ```rust
//! # use calckit::prelude::*;
//! let config = TaxConfig::builder()
//!     .social_security_wage_base(168_600.0)
//!     .build()?;
//! let result = income_tax()
//!     .gross_income(250_000.0)
//!     .config(&config)
//!     .call()
//!     .unwrap();
//! assert_eq!(result.social_security, 168_600.0 * 0.062);
//! # CalcResult::Ok(())
//! ```

// Module structure
pub mod states;
pub mod tables;

use self::tables::{ByFilingStatus, TaxBracket};
use crate::CalcResult;
use crate::helpers::finite_or_zero;
use crate::params::{IncomeTaxParams, log_rejection};
use bon::{bon, builder};
use garde::Validate;
use serde::Serialize;
use std::str::FromStr;
use std::sync::LazyLock;

// =======================================
// FILING STATUS AND DEDUCTION
// =======================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FilingStatus {
    #[default]
    Single,
    MarriedJoint,
    MarriedSeparate,
    HeadOfHousehold,
}

impl FromStr for FilingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(FilingStatus::Single),
            "married_joint" => Ok(FilingStatus::MarriedJoint),
            "married_separate" => Ok(FilingStatus::MarriedSeparate),
            "head_of_household" => Ok(FilingStatus::HeadOfHousehold),
            other => Err(format!("unknown filing status '{other}'")),
        }
    }
}

/// Deduction subtracted from gross income before the bracket walk.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum Deduction {
    /// The standard deduction of the filing status.
    #[default]
    Standard,
    /// An itemized amount entered by the filer.
    Itemized(f64),
}

impl Deduction {
    /// Build from the deduction-type field (`standard` or `itemized`) and the itemized amount.
    ///
    /// The amount is ignored for a standard deduction.
    pub fn from_form(kind: &str, itemized_amount: f64) -> Result<Self, String> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Deduction::Standard),
            "itemized" => Ok(Deduction::Itemized(itemized_amount)),
            other => Err(format!("unknown deduction type '{other}'")),
        }
    }

    fn amount(self, status: FilingStatus, config: &TaxConfig) -> f64 {
        match self {
            Deduction::Standard => *config.standard_deduction.get(status),
            // An unreadable itemized entry counts as zero
            Deduction::Itemized(amount) => finite_or_zero(amount),
        }
    }
}

// =======================================
// CONFIGURATION
// =======================================

/// Tax tables and payroll constants for one tax year.
#[derive(Debug, Clone, PartialEq, Validate, Serialize)]
#[garde(allow_unvalidated)]
pub struct TaxConfig {
    /// Progressive brackets per filing status, ascending, ending with an unbounded bracket.
    #[garde(custom(validate_bracket_tables))]
    pub brackets: ByFilingStatus<Vec<TaxBracket>>,

    #[garde(custom(validate_amounts))]
    pub standard_deduction: ByFilingStatus<f64>,

    /// Wages above this threshold pay the additional Medicare tax.
    #[garde(custom(validate_amounts))]
    pub medicare_surtax_threshold: ByFilingStatus<f64>,

    #[garde(custom(validate_rate))]
    pub social_security_rate: f64,

    /// Wages above the base pay no Social Security tax.
    #[garde(custom(validate_amount))]
    pub social_security_wage_base: f64,

    #[garde(custom(validate_rate))]
    pub medicare_rate: f64,

    #[garde(custom(validate_rate))]
    pub medicare_surtax_rate: f64,

    /// Credit per qualifying child.
    #[garde(custom(validate_amount))]
    pub child_credit: f64,

    /// Credit per other dependent.
    #[garde(custom(validate_amount))]
    pub other_dependent_credit: f64,
}

#[bon]
impl TaxConfig {
    #[builder]
    pub fn new(
        #[builder(default = tables::brackets_2025())] brackets: ByFilingStatus<Vec<TaxBracket>>,
        #[builder(default = tables::STANDARD_DEDUCTION_2025)]
        standard_deduction: ByFilingStatus<f64>,
        #[builder(default = tables::MEDICARE_SURTAX_THRESHOLD_2025)]
        medicare_surtax_threshold: ByFilingStatus<f64>,
        #[builder(default = tables::SOCIAL_SECURITY_RATE)] social_security_rate: f64,
        #[builder(default = tables::SOCIAL_SECURITY_WAGE_BASE_2025)] social_security_wage_base: f64,
        #[builder(default = tables::MEDICARE_RATE)] medicare_rate: f64,
        #[builder(default = tables::MEDICARE_SURTAX_RATE)] medicare_surtax_rate: f64,
        #[builder(default = tables::CHILD_TAX_CREDIT)] child_credit: f64,
        #[builder(default = tables::OTHER_DEPENDENT_CREDIT)] other_dependent_credit: f64,
    ) -> CalcResult<Self> {
        let config = TaxConfig {
            brackets,
            standard_deduction,
            medicare_surtax_threshold,
            social_security_rate,
            social_security_wage_base,
            medicare_rate,
            medicare_surtax_rate,
            child_credit,
            other_dependent_credit,
        };

        config
            .validate()
            .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;

        Ok(config)
    }
}

impl Default for TaxConfig {
    /// The 2025 tax year.
    fn default() -> Self {
        TaxConfig {
            brackets: tables::brackets_2025(),
            standard_deduction: tables::STANDARD_DEDUCTION_2025,
            medicare_surtax_threshold: tables::MEDICARE_SURTAX_THRESHOLD_2025,
            social_security_rate: tables::SOCIAL_SECURITY_RATE,
            social_security_wage_base: tables::SOCIAL_SECURITY_WAGE_BASE_2025,
            medicare_rate: tables::MEDICARE_RATE,
            medicare_surtax_rate: tables::MEDICARE_SURTAX_RATE,
            child_credit: tables::CHILD_TAX_CREDIT,
            other_dependent_credit: tables::OTHER_DEPENDENT_CREDIT,
        }
    }
}

static DEFAULT_CONFIG: LazyLock<TaxConfig> = LazyLock::new(TaxConfig::default);

fn validate_rate(value: &f64, _context: &()) -> garde::Result {
    if !(0.0..=1.0).contains(value) {
        return Err(garde::Error::new(format!(
            "rate {value} must be a fraction between 0 and 1"
        )));
    }
    Ok(())
}

fn validate_amount(value: &f64, _context: &()) -> garde::Result {
    if !value.is_finite() || *value < 0.0 {
        return Err(garde::Error::new(format!(
            "amount {value} must be a non-negative number"
        )));
    }
    Ok(())
}

fn validate_amounts(values: &ByFilingStatus<f64>, _context: &()) -> garde::Result {
    for (status, value) in values.iter() {
        validate_amount(value, &())
            .map_err(|err| garde::Error::new(format!("{status:?}: {}", err.message())))?;
    }
    Ok(())
}

fn validate_bracket_tables(
    tables: &ByFilingStatus<Vec<TaxBracket>>,
    _context: &(),
) -> garde::Result {
    for (status, brackets) in tables.iter() {
        validate_brackets(brackets)
            .map_err(|message| garde::Error::new(format!("{status:?}: {message}")))?;
    }
    Ok(())
}

fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), String> {
    let (first, last) = match (brackets.first(), brackets.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err("bracket table is empty".to_string()),
    };
    if first.min != 0.0 {
        return Err(format!("first bracket starts at {} instead of 0", first.min));
    }
    if last.max.is_some() {
        return Err("top bracket must be unbounded".to_string());
    }

    for bracket in brackets {
        validate_rate(&bracket.rate, &()).map_err(|err| err.message().to_string())?;
        if bracket.max.is_some_and(|max| max <= bracket.min) {
            return Err(format!("bracket starting at {} is empty", bracket.min));
        }
    }

    for pair in brackets.windows(2) {
        if pair[0].max != Some(pair[1].min) {
            return Err(format!(
                "bracket starting at {} does not continue the previous one",
                pair[1].min
            ));
        }
    }
    Ok(())
}

// =======================================
// TAX ESTIMATE
// =======================================

/// Tax owed inside one bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BracketTax {
    pub rate: f64,
    pub taxable: f64,
    pub tax: f64,
}

/// Annual tax estimate. Rates are fractions (0.22 for 22%).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxResult {
    pub gross_income: f64,
    pub deduction: f64,
    pub taxable_income: f64,
    pub federal_tax_before_credits: f64,
    /// Federal income tax after credits
    pub federal_tax: f64,
    pub social_security: f64,
    pub medicare: f64,
    pub total_fica: f64,
    pub child_tax_credit: f64,
    pub other_dependent_credit: f64,
    pub total_credits: f64,
    pub state_tax: f64,
    pub state_rate: f64,
    pub total_tax: f64,
    pub effective_rate: f64,
    pub marginal_rate: f64,
    pub take_home: f64,
    pub monthly_take_home: f64,
    pub bracket_breakdown: Vec<BracketTax>,
}

/// Estimate federal, payroll and state taxes on an annual gross income.
///
/// # Algorithm
/// ```text
/// taxable   = max(0, gross - deduction)
/// federal   = Σ (min(taxable, max) - min) · rate   over brackets with taxable > min
/// SS        = min(gross, wage base) · 6.2%
/// Medicare  = gross · 1.45% + max(0, gross - threshold) · 0.9%
/// child     = min(children · 2000, federal)
/// other     = min(others · 500, federal - child)
/// state     = taxable · state rate
/// total     = federal - credits + SS + Medicare + state
/// ```
/// The marginal rate is the rate of the last bracket reached, 10% when none is.
/// Unknown or missing state codes are taxed at 0%.
///
/// Returns `None` when gross income is not positive.
///
/// # Parameters
/// - `gross_income`: Annual gross income
/// - `filing_status`: Filing status (default single)
/// - `deduction`: Standard (default) or itemized
/// - `child_dependents`, `other_dependents`: Dependent counts (default 0)
/// - `state`: Two-letter state code
/// - `config`: Tax tables (default 2025)
///
/// # Examples
/// ```rust
/// # use calckit::prelude::*;
/// let result = income_tax()
///     .gross_income(75_000.0)
///     .filing_status(FilingStatus::Single)
///     .call()
///     .unwrap();
/// assert_eq!(result.taxable_income, 59_250.0);
/// assert_eq!(result.marginal_rate, 0.22);
/// assert_eq!(result.bracket_breakdown.len(), 3);
/// ```
#[builder]
pub fn income_tax(
    gross_income: f64,
    #[builder(default)] filing_status: FilingStatus,
    #[builder(default)] deduction: Deduction,
    #[builder(default = 0)] child_dependents: u32,
    #[builder(default = 0)] other_dependents: u32,
    state: Option<&str>,
    config: Option<&TaxConfig>,
) -> Option<TaxResult> {
    let config = config.unwrap_or(&*DEFAULT_CONFIG);
    let deduction = deduction.amount(filing_status, config);

    let params = IncomeTaxParams {
        gross_income,
        deduction,
        child_dependents,
        other_dependents,
    };
    if let Err(report) = params.validate_all() {
        log_rejection("income tax", &report);
        return None;
    }

    let taxable_income = (gross_income - deduction).max(0.0);

    // Federal brackets
    let brackets = config.brackets.get(filing_status);
    let mut federal_tax_before_credits = 0.0;
    let mut marginal_rate = brackets.first().map_or(0.0, |b| b.rate);
    let mut bracket_breakdown = Vec::new();
    for bracket in brackets {
        if taxable_income <= bracket.min {
            break;
        }
        let taxable = bracket.taxable_in(taxable_income);
        let tax = taxable * bracket.rate;
        federal_tax_before_credits += tax;
        marginal_rate = bracket.rate;
        bracket_breakdown.push(BracketTax {
            rate: bracket.rate,
            taxable,
            tax,
        });
    }

    // FICA
    let social_security =
        gross_income.min(config.social_security_wage_base) * config.social_security_rate;
    let surtax_threshold = *config.medicare_surtax_threshold.get(filing_status);
    let medicare = gross_income * config.medicare_rate
        + (gross_income - surtax_threshold).max(0.0) * config.medicare_surtax_rate;
    let total_fica = social_security + medicare;

    // Non-refundable credits, child credit first
    let child_tax_credit =
        (child_dependents as f64 * config.child_credit).min(federal_tax_before_credits);
    let other_dependent_credit = (other_dependents as f64 * config.other_dependent_credit)
        .min(federal_tax_before_credits - child_tax_credit);
    let total_credits = child_tax_credit + other_dependent_credit;
    let federal_tax = federal_tax_before_credits - total_credits;

    // State
    let state_rate = state.and_then(states::state_rate).map_or(0.0, |s| s.rate / 100.0);
    let state_tax = taxable_income * state_rate;

    let total_tax = federal_tax + total_fica + state_tax;
    let take_home = gross_income - total_tax;

    Some(TaxResult {
        gross_income,
        deduction,
        taxable_income,
        federal_tax_before_credits,
        federal_tax,
        social_security,
        medicare,
        total_fica,
        child_tax_credit,
        other_dependent_credit,
        total_credits,
        state_tax,
        state_rate,
        total_tax,
        effective_rate: total_tax / gross_income,
        marginal_rate,
        take_home,
        monthly_take_home: take_home / 12.0,
        bracket_breakdown,
    })
}
