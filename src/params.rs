use bon::Builder;
use chrono::NaiveDateTime;
use garde::Validate;

// =======================================
// REFERENCE DATE PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct ReferenceDateParams {
    // Local midnight of the entered date (birth date, LMP or conception date)
    pub date: NaiveDateTime,

    // Current local instant
    pub now: NaiveDateTime,
}

impl ReferenceDateParams {
    /// Validate with cross-field validation using Result<(), garde::Report>
    pub fn validate_all(&self) -> Result<(), garde::Report> {
        self.validate()?;

        let mut errors: ErrorVec = Vec::new();

        // A date in the future has no meaningful result
        if self.date > self.now {
            errors.push((
                "date",
                format!("date {} is after the current time {}", self.date, self.now),
            ));
        }

        into_report(errors)
    }
}

// =======================================
// MORTGAGE PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct MortgageParams {
    // Purchase price of the home
    #[garde(custom(validate_finite))]
    pub home_price: f64,

    // Cash paid up front, the remainder is financed
    #[garde(custom(validate_finite))]
    pub down_payment: f64,

    // Annual interest rate in percent (6.5 for 6.5%)
    // Zero-interest loans are not amortized
    #[garde(custom(validate_positive))]
    pub annual_rate: f64,

    // Loan term in years, any length whose monthly payment count fits an i32
    #[garde(range(min = 1))]
    pub term_years: u32,
}

impl MortgageParams {
    /// Validate with cross-field validation using Result<(), garde::Report>
    pub fn validate_all(&self) -> Result<(), garde::Report> {
        // First run garde's built-in validations
        self.validate()?;

        // Then run our custom cross-field validations
        let mut errors: ErrorVec = Vec::new();

        let principal = self.home_price - self.down_payment;
        if principal <= 0.0 {
            errors.push((
                "down_payment",
                format!(
                    "down payment {} leaves nothing to finance on a home price of {}",
                    self.down_payment, self.home_price
                ),
            ));
        }

        let fits_payment_count = self
            .term_years
            .checked_mul(12)
            .is_some_and(|n| i32::try_from(n).is_ok());
        if !fits_payment_count {
            errors.push((
                "term_years",
                format!("{} years is too many monthly payments", self.term_years),
            ));
        }

        into_report(errors)
    }
}

// =======================================
// INCOME TAX PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct IncomeTaxParams {
    // Annual gross income
    #[garde(custom(validate_positive))]
    pub gross_income: f64,

    // Deduction amount resolved from the standard table or the itemized entry
    #[garde(custom(validate_finite))]
    pub deduction: f64,

    // Qualifying children under 17
    pub child_dependents: u32,

    // Other dependents
    pub other_dependents: u32,
}

impl IncomeTaxParams {
    /// Validate using Result<(), garde::Report>
    pub fn validate_all(&self) -> Result<(), garde::Report> {
        self.validate()
    }
}

// =======================================
// TIP PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct TipParams {
    // Bill amount before tip
    #[garde(custom(validate_positive))]
    pub bill: f64,

    // Tip in percent of the bill
    #[garde(custom(validate_finite))]
    pub tip_percent: f64,

    // Number of people sharing the bill
    #[garde(range(min = 1))]
    pub split: u32,
}

impl TipParams {
    /// Validate using Result<(), garde::Report>
    pub fn validate_all(&self) -> Result<(), garde::Report> {
        self.validate()
    }
}

// =======================================
// TARIFF PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Validate, Builder)]
#[garde(allow_unvalidated)]
pub struct TariffParams {
    // Declared value of a single unit
    #[garde(custom(validate_positive))]
    pub product_value: f64,

    // Number of units, at least one
    #[garde(range(min = 1))]
    pub quantity: u32,

    // Shipping cost added to the dutiable value
    #[garde(custom(validate_finite))]
    pub shipping: f64,

    // Tariff rate in percent
    #[garde(custom(validate_finite))]
    pub rate: f64,
}

impl TariffParams {
    /// Validate using Result<(), garde::Report>
    pub fn validate_all(&self) -> Result<(), garde::Report> {
        self.validate()
    }
}

// =======================================
// CRATE FUNCTIONS
// =======================================

/// Report why a calculator produced no result.
#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
pub(crate) fn log_rejection(calculator: &str, report: &garde::Report) {
    debug!("{calculator}: no result, {report}");
}

// =======================================
// PRIVATE FUNCTIONS
// =======================================

type ErrorVec = Vec<(&'static str, String)>;

fn into_report(errors: ErrorVec) -> Result<(), garde::Report> {
    let mut report = garde::Report::new();
    for (path, message) in errors {
        report.append(garde::Path::new(path), garde::Error::new(message));
    }

    // Return Ok if no errors, otherwise return the complete report
    if report.is_empty() {
        Ok(())
    } else {
        Err(report)
    }
}

fn validate_finite(value: &f64, _context: &()) -> garde::Result {
    if !value.is_finite() {
        return Err(garde::Error::new(format!("{value} is not a finite number")));
    }
    Ok(())
}

fn validate_positive(value: &f64, _context: &()) -> garde::Result {
    validate_finite(value, &())?;
    if *value <= 0.0 {
        return Err(garde::Error::new(format!("{value} must be greater than 0")));
    }
    Ok(())
}
