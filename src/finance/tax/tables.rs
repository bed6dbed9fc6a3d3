//! 2025 federal income tax and payroll tables.

use super::FilingStatus;
use serde::Serialize;

/// One progressive bracket: income above `min` and up to `max` is taxed at `rate`.
///
/// `max = None` marks the unbounded top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxBracket {
    pub min: f64,
    pub max: Option<f64>,
    pub rate: f64,
}

impl TaxBracket {
    pub const fn new(min: f64, max: Option<f64>, rate: f64) -> Self {
        TaxBracket { min, max, rate }
    }

    /// Portion of `taxable_income` that falls inside this bracket.
    pub fn taxable_in(&self, taxable_income: f64) -> f64 {
        if taxable_income <= self.min {
            return 0.0;
        }
        let upper = match self.max {
            Some(max) => taxable_income.min(max),
            None => taxable_income,
        };
        upper - self.min
    }
}

/// One value per filing status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ByFilingStatus<T> {
    pub single: T,
    pub married_joint: T,
    pub married_separate: T,
    pub head_of_household: T,
}

impl<T> ByFilingStatus<T> {
    pub fn get(&self, status: FilingStatus) -> &T {
        match status {
            FilingStatus::Single => &self.single,
            FilingStatus::MarriedJoint => &self.married_joint,
            FilingStatus::MarriedSeparate => &self.married_separate,
            FilingStatus::HeadOfHousehold => &self.head_of_household,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilingStatus, &T)> {
        [
            (FilingStatus::Single, &self.single),
            (FilingStatus::MarriedJoint, &self.married_joint),
            (FilingStatus::MarriedSeparate, &self.married_separate),
            (FilingStatus::HeadOfHousehold, &self.head_of_household),
        ]
        .into_iter()
    }
}

// =======================================
// 2025 BRACKETS
// =======================================

pub const SINGLE_2025: [TaxBracket; 7] = [
    TaxBracket::new(0.0, Some(11_925.0), 0.10),
    TaxBracket::new(11_925.0, Some(48_475.0), 0.12),
    TaxBracket::new(48_475.0, Some(103_350.0), 0.22),
    TaxBracket::new(103_350.0, Some(197_300.0), 0.24),
    TaxBracket::new(197_300.0, Some(250_525.0), 0.32),
    TaxBracket::new(250_525.0, Some(626_350.0), 0.35),
    TaxBracket::new(626_350.0, None, 0.37),
];

pub const MARRIED_JOINT_2025: [TaxBracket; 7] = [
    TaxBracket::new(0.0, Some(23_850.0), 0.10),
    TaxBracket::new(23_850.0, Some(96_950.0), 0.12),
    TaxBracket::new(96_950.0, Some(206_700.0), 0.22),
    TaxBracket::new(206_700.0, Some(394_600.0), 0.24),
    TaxBracket::new(394_600.0, Some(501_050.0), 0.32),
    TaxBracket::new(501_050.0, Some(751_600.0), 0.35),
    TaxBracket::new(751_600.0, None, 0.37),
];

pub const MARRIED_SEPARATE_2025: [TaxBracket; 7] = [
    TaxBracket::new(0.0, Some(11_925.0), 0.10),
    TaxBracket::new(11_925.0, Some(48_475.0), 0.12),
    TaxBracket::new(48_475.0, Some(103_350.0), 0.22),
    TaxBracket::new(103_350.0, Some(197_300.0), 0.24),
    TaxBracket::new(197_300.0, Some(250_525.0), 0.32),
    TaxBracket::new(250_525.0, Some(375_800.0), 0.35),
    TaxBracket::new(375_800.0, None, 0.37),
];

pub const HEAD_OF_HOUSEHOLD_2025: [TaxBracket; 7] = [
    TaxBracket::new(0.0, Some(17_000.0), 0.10),
    TaxBracket::new(17_000.0, Some(64_850.0), 0.12),
    TaxBracket::new(64_850.0, Some(103_350.0), 0.22),
    TaxBracket::new(103_350.0, Some(197_300.0), 0.24),
    TaxBracket::new(197_300.0, Some(250_500.0), 0.32),
    TaxBracket::new(250_500.0, Some(626_350.0), 0.35),
    TaxBracket::new(626_350.0, None, 0.37),
];

// =======================================
// 2025 DEDUCTIONS, PAYROLL AND CREDITS
// =======================================

pub const STANDARD_DEDUCTION_2025: ByFilingStatus<f64> = ByFilingStatus {
    single: 15_750.0,
    married_joint: 31_500.0,
    married_separate: 15_750.0,
    head_of_household: 23_600.0,
};

pub const MEDICARE_SURTAX_THRESHOLD_2025: ByFilingStatus<f64> = ByFilingStatus {
    single: 200_000.0,
    married_joint: 250_000.0,
    married_separate: 125_000.0,
    head_of_household: 200_000.0,
};

pub const SOCIAL_SECURITY_RATE: f64 = 0.062;
pub const SOCIAL_SECURITY_WAGE_BASE_2025: f64 = 176_100.0;
pub const MEDICARE_RATE: f64 = 0.0145;
pub const MEDICARE_SURTAX_RATE: f64 = 0.009;
pub const CHILD_TAX_CREDIT: f64 = 2_000.0;
pub const OTHER_DEPENDENT_CREDIT: f64 = 500.0;

pub fn brackets_2025() -> ByFilingStatus<Vec<TaxBracket>> {
    ByFilingStatus {
        single: SINGLE_2025.to_vec(),
        married_joint: MARRIED_JOINT_2025.to_vec(),
        married_separate: MARRIED_SEPARATE_2025.to_vec(),
        head_of_household: HEAD_OF_HOUSEHOLD_2025.to_vec(),
    }
}
