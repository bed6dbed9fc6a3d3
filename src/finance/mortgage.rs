use crate::helpers::finite_or_zero;
use crate::params::{MortgageParams, log_rejection};
use bon::builder;
use serde::Serialize;

/// Annual private mortgage insurance, as a fraction of the loan amount.
pub const PMI_ANNUAL_RATE: f64 = 0.005;

/// Down payments below this fraction of the price carry PMI.
pub const PMI_DOWN_PAYMENT_THRESHOLD: f64 = 0.2;

// =======================================
// AMORTIZATION
// =======================================

/// Principal and interest paid during one loan year, and the balance left after it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyAmortization {
    pub year: u32,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MortgageResult {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub principal: f64,
    pub schedule: Vec<YearlyAmortization>,
}

/// Level monthly payment of a fixed-rate loan.
///
/// # Formula
/// ```text
/// PMT = P · r · (1 + r)ⁿ / ((1 + r)ⁿ - 1)
/// ```
/// where:
/// - `P` is the amount borrowed
/// - `r` is the monthly interest rate (annual rate / 12, as a decimal)
/// - `n` is the number of monthly payments
///
/// # Example
/// ```rust
/// # use calckit::prelude::annuity_payment;
/// let payment = annuity_payment(280_000.0, 0.065 / 12.0, 360);
/// assert!((payment - 1769.79).abs() < 0.01);
/// ```
pub fn annuity_payment(principal: f64, monthly_rate: f64, n: u32) -> f64 {
    let growth = (1.0 + monthly_rate).powi(n as i32);
    principal * (monthly_rate * growth) / (growth - 1.0)
}

/// Fixed-rate mortgage payment and yearly amortization schedule.
///
/// The amount financed is `home_price - down_payment`. The schedule walks every month of
/// every year, splitting the level payment into interest on the outstanding balance and
/// principal, and reports each year's totals with the balance clamped at zero.
///
/// Returns `None` when nothing is financed, the rate is not positive or the term is zero.
///
/// # Parameters
/// - `home_price`: Purchase price
/// - `down_payment`: Cash paid up front
/// - `annual_rate`: Annual interest rate in percent (6.5 for 6.5%)
/// - `term_years`: Loan term in years (default 30)
///
/// # Examples
/// ```rust
/// # use calckit::prelude::*;
/// let loan = mortgage()
///     .home_price(350_000.0)
///     .down_payment(70_000.0)
///     .annual_rate(6.5)
///     .call()
///     .unwrap();
/// assert_eq!(loan.principal, 280_000.0);
/// assert_eq!(loan.schedule.len(), 30);
/// assert_eq!(currency(loan.monthly_payment, 2), "$1,769.79");
/// ```
#[builder]
pub fn mortgage(
    home_price: f64,
    down_payment: f64,
    annual_rate: f64,
    #[builder(default = 30)] term_years: u32,
) -> Option<MortgageResult> {
    let params = MortgageParams {
        home_price,
        down_payment,
        annual_rate,
        term_years,
    };
    if let Err(report) = params.validate_all() {
        log_rejection("mortgage", &report);
        return None;
    }

    let principal = home_price - down_payment;
    let monthly_rate = annual_rate / 100.0 / 12.0;
    let num_payments = term_years * 12;
    let monthly_payment = annuity_payment(principal, monthly_rate, num_payments);
    if !monthly_payment.is_finite() {
        debug!("mortgage payment over {term_years} years at {annual_rate}% is not representable");
        return None;
    }
    let total_payment = monthly_payment * num_payments as f64;
    let total_interest = total_payment - principal;

    let schedule = amortization_schedule(principal, monthly_rate, monthly_payment, term_years);

    Some(MortgageResult {
        monthly_payment,
        total_payment,
        total_interest,
        principal,
        schedule,
    })
}

fn amortization_schedule(
    principal: f64,
    monthly_rate: f64,
    monthly_payment: f64,
    term_years: u32,
) -> Vec<YearlyAmortization> {
    let mut schedule = Vec::with_capacity(term_years as usize);
    let mut balance = principal;

    for year in 1..=term_years {
        let mut year_principal = 0.0;
        let mut year_interest = 0.0;
        for _month in 0..12 {
            let interest_payment = balance * monthly_rate;
            let principal_payment = monthly_payment - interest_payment;
            year_interest += interest_payment;
            year_principal += principal_payment;
            balance -= principal_payment;
        }
        schedule.push(YearlyAmortization {
            year,
            principal_paid: year_principal,
            interest_paid: year_interest,
            balance: balance.max(0.0),
        });
    }

    trace!("amortized {principal} over {term_years} years, residual balance {balance}");
    schedule
}

// =======================================
// PMI AND DOWN PAYMENT
// =======================================

/// Yearly PMI assigned automatically from the price and down payment.
///
/// About 0.5% of the loan amount per year, rounded to whole dollars, whenever the
/// down payment is below 20% of the price; otherwise zero.
pub fn auto_pmi(home_price: f64, down_payment: f64) -> f64 {
    let down_payment = finite_or_zero(down_payment);
    if home_price > 0.0 && down_payment / home_price < PMI_DOWN_PAYMENT_THRESHOLD {
        let loan_amount = home_price - down_payment;
        (loan_amount * PMI_ANNUAL_RATE).round()
    } else {
        0.0
    }
}

/// Which of the two down-payment fields the user edited last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DownPaymentField {
    Amount,
    #[default]
    Percent,
}

/// Down payment as a dollar amount and as a percentage of the price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DownPayment {
    pub amount: f64,
    pub percent: f64,
}

/// Recompute the field the user did not edit from the one they did.
///
/// Percent edited: `amount = round(price · percent / 100)`.
/// Amount edited: `percent = amount / price · 100`, rounded to one decimal.
/// Without a positive price both fields are returned unchanged.
pub fn sync_down_payment(
    home_price: f64,
    current: DownPayment,
    edited: DownPaymentField,
) -> DownPayment {
    if home_price.is_nan() || home_price <= 0.0 {
        return current;
    }

    match edited {
        DownPaymentField::Percent => DownPayment {
            amount: (home_price * finite_or_zero(current.percent) / 100.0).round(),
            percent: current.percent,
        },
        DownPaymentField::Amount => DownPayment {
            amount: current.amount,
            percent: (finite_or_zero(current.amount) / home_price * 1000.0).round() / 10.0,
        },
    }
}

// =======================================
// MONTHLY BREAKDOWN
// =======================================

/// Full monthly housing cost and the share of each component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBreakdown {
    pub principal_and_interest: f64,
    pub property_tax: f64,
    pub insurance: f64,
    pub pmi: f64,
    pub total: f64,
    pub principal_and_interest_share: f64,
    pub property_tax_share: f64,
    pub insurance_share: f64,
    pub pmi_share: f64,
}

/// Split the monthly cost into principal and interest, property tax, insurance and PMI.
///
/// Yearly amounts are divided by twelve. Shares are fractions of the total and sum to one
/// whenever the total is positive.
#[builder]
pub fn monthly_breakdown(
    result: &MortgageResult,
    #[builder(default = 0.0)] property_tax: f64,
    #[builder(default = 0.0)] insurance: f64,
    #[builder(default = 0.0)] pmi: f64,
) -> MonthlyBreakdown {
    let principal_and_interest = result.monthly_payment;
    let property_tax = finite_or_zero(property_tax) / 12.0;
    let insurance = finite_or_zero(insurance) / 12.0;
    let pmi = finite_or_zero(pmi) / 12.0;
    let total = principal_and_interest + property_tax + insurance + pmi;

    let share = |part: f64| if total > 0.0 { part / total } else { 0.0 };

    MonthlyBreakdown {
        principal_and_interest,
        property_tax,
        insurance,
        pmi,
        total,
        principal_and_interest_share: share(principal_and_interest),
        property_tax_share: share(property_tax),
        insurance_share: share(insurance),
        pmi_share: share(pmi),
    }
}

// =======================================
// MORTGAGE FORM
// =======================================

/// Mortgage result together with the monthly cost breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MortgageQuote {
    pub result: MortgageResult,
    pub breakdown: MonthlyBreakdown,
}

/// State of the mortgage form and its derived fields.
///
/// Editing the price or either down-payment field re-derives the other down-payment field
/// and then the automatic PMI. A PMI value typed by hand is kept only until the next such
/// edit, which overwrites it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MortgageForm {
    home_price: f64,
    down_payment: DownPayment,
    last_edited: DownPaymentField,
    pmi: f64,
    pub annual_rate: f64,
    pub term_years: u32,
    pub property_tax: f64,
    pub insurance: f64,
}

impl Default for MortgageForm {
    fn default() -> Self {
        let mut form = MortgageForm {
            home_price: 350_000.0,
            down_payment: DownPayment {
                amount: 70_000.0,
                percent: 20.0,
            },
            last_edited: DownPaymentField::Percent,
            pmi: 0.0,
            annual_rate: 6.5,
            term_years: 30,
            property_tax: 3_500.0,
            insurance: 1_200.0,
        };
        form.derive();
        form
    }
}

impl MortgageForm {
    pub fn home_price(&self) -> f64 {
        self.home_price
    }

    pub fn down_payment(&self) -> DownPayment {
        self.down_payment
    }

    pub fn last_edited(&self) -> DownPaymentField {
        self.last_edited
    }

    pub fn pmi(&self) -> f64 {
        self.pmi
    }

    pub fn set_home_price(&mut self, home_price: f64) {
        self.home_price = home_price;
        self.derive();
    }

    pub fn set_down_payment(&mut self, amount: f64) {
        self.down_payment.amount = amount;
        self.last_edited = DownPaymentField::Amount;
        self.derive();
    }

    pub fn set_down_payment_percent(&mut self, percent: f64) {
        self.down_payment.percent = percent;
        self.last_edited = DownPaymentField::Percent;
        self.derive();
    }

    /// Manual PMI, replaced by the automatic value on the next price or down-payment edit.
    pub fn set_pmi(&mut self, pmi: f64) {
        self.pmi = pmi;
    }

    pub fn calculate(&self) -> Option<MortgageQuote> {
        let result = mortgage()
            .home_price(self.home_price)
            .down_payment(self.down_payment.amount)
            .annual_rate(self.annual_rate)
            .term_years(self.term_years)
            .call()?;
        let breakdown = monthly_breakdown()
            .result(&result)
            .property_tax(self.property_tax)
            .insurance(self.insurance)
            .pmi(self.pmi)
            .call();
        Some(MortgageQuote { result, breakdown })
    }

    fn derive(&mut self) {
        self.down_payment = sync_down_payment(self.home_price, self.down_payment, self.last_edited);
        self.pmi = auto_pmi(self.home_price, self.down_payment.amount);
    }
}
