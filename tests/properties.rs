//! # Cross-Module Properties
//!
//! Invariants that hold for whole families of inputs rather than single examples.

use approx::assert_abs_diff_eq;
use calckit::prelude::*;
use chrono::{Duration, NaiveDate, NaiveDateTime};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(date: NaiveDate, h: u32, min: u32) -> NaiveDateTime {
    date.and_hms_opt(h, min, 0).unwrap()
}

// Birth dates that exercise month ends and leap days
fn sample_birth_dates() -> Vec<NaiveDate> {
    vec![
        ymd(1960, 2, 29),
        ymd(1985, 1, 31),
        ymd(1990, 6, 15),
        ymd(1999, 12, 31),
        ymd(2004, 3, 30),
        ymd(2020, 8, 1),
    ]
}

fn sample_now() -> Vec<NaiveDateTime> {
    vec![
        at(ymd(2023, 3, 1), 0, 0),
        at(ymd(2024, 2, 29), 13, 45),
        at(ymd(2024, 12, 31), 23, 59),
        at(ymd(2025, 7, 4), 8, 0),
    ]
}

// =======================================
// AGE
// =======================================

#[test]
fn test_age_components_recombine_to_today() {
    for birth in sample_birth_dates() {
        for now in sample_now() {
            let age = calculate_age().birth_date(birth).now(now).call().unwrap();

            // years and months with rollover, then the (possibly negative) days
            let months = i64::from(age.years) * 12 + i64::from(age.months);
            let shifted = shift_date()
                .base(birth)
                .amount(months)
                .unit(DateUnit::Months)
                .call()
                .unwrap()
                .date;
            let landed = shifted + Duration::days(i64::from(age.days));
            assert_eq!(landed, now.date(), "birth {birth}, now {now}");
        }
    }
}

#[test]
fn test_age_next_birthday_is_ahead() {
    for birth in sample_birth_dates() {
        for now in sample_now() {
            let age = calculate_age().birth_date(birth).now(now).call().unwrap();
            assert!(local_midnight(age.next_birthday) > now);
            assert!(age.days_until_birthday >= 1 && age.days_until_birthday <= 366);
        }
    }
}

// =======================================
// DATE DIFFERENCE AND PREGNANCY
// =======================================

#[test]
fn test_date_difference_symmetry_and_inclusive_end() {
    let dates = sample_birth_dates();
    for a in &dates {
        for b in &dates {
            let forward = date_difference().start(*a).end(*b).call();
            let backward = date_difference().start(*b).end(*a).call();
            assert_eq!(forward, backward);

            let inclusive = date_difference().start(*a).end(*b).include_end(true).call();
            assert_eq!(inclusive.total_days, forward.total_days + 1);
            assert_eq!(forward.weeks * 7 + forward.days, forward.total_days);
        }
    }
}

#[test]
fn test_pregnancy_due_date_always_280_days() {
    let now = at(ymd(2026, 1, 1), 12, 0);
    for date in sample_birth_dates() {
        for method in [DatingMethod::Lmp, DatingMethod::Conception] {
            let result = pregnancy_timeline()
                .date(date)
                .method(method)
                .now(now)
                .call()
                .unwrap();
            assert_eq!((result.due_date - result.gestational_start).num_days(), 280);
            assert!(result.percent_complete <= 100);
        }
    }
}

// =======================================
// PERCENTAGE
// =======================================

#[test]
fn test_percentage_reference_values() {
    assert_eq!(what_is_percent(20.0, 50.0), Some(10.0));
    assert_eq!(is_what_percent(30.0, 150.0), Some(20.0));

    let up = percent_change(100.0, 150.0).unwrap();
    assert_eq!((up.percent, up.direction), (50.0, ChangeDirection::Increase));

    let down = percent_change(150.0, 100.0).unwrap();
    assert_abs_diff_eq!(down.percent, 33.33, epsilon = 0.01);
    assert_eq!(down.direction, ChangeDirection::Decrease);
}

// =======================================
// MORTGAGE
// =======================================

#[test]
fn test_mortgage_matches_annuity_formula() {
    let loan = mortgage()
        .home_price(350_000.0)
        .down_payment(70_000.0)
        .annual_rate(6.5)
        .term_years(30)
        .call()
        .unwrap();

    let r: f64 = 0.065 / 12.0;
    let growth = (1.0 + r).powi(360);
    let expected = 280_000.0 * r * growth / (growth - 1.0);
    assert_abs_diff_eq!(loan.monthly_payment, expected, epsilon = 0.005);
    assert_eq!(format!("{:.2}", loan.monthly_payment), "1769.79");

    assert_eq!(loan.schedule.len(), 30);
    let principal_paid: f64 = loan.schedule.iter().map(|y| y.principal_paid).sum();
    assert_abs_diff_eq!(principal_paid, 280_000.0, epsilon = 1e-4);
    assert_abs_diff_eq!(loan.schedule[29].balance, 0.0, epsilon = 1e-4);
}

#[test]
fn test_mortgage_interest_plus_principal_equals_payments() {
    for (rate, term) in [(3.0, 15), (6.5, 30), (9.75, 20)] {
        let loan = mortgage()
            .home_price(500_000.0)
            .down_payment(100_000.0)
            .annual_rate(rate)
            .term_years(term)
            .call()
            .unwrap();
        let paid: f64 = loan
            .schedule
            .iter()
            .map(|y| y.principal_paid + y.interest_paid)
            .sum();
        assert_abs_diff_eq!(paid, loan.total_payment, epsilon = 1e-4);
    }
}

// =======================================
// TAX
// =======================================

#[test]
fn test_tax_reference_single_filer() {
    let result = income_tax()
        .gross_income(75_000.0)
        .filing_status(FilingStatus::Single)
        .deduction(Deduction::Standard)
        .state("TX")
        .call()
        .unwrap();

    assert_eq!(result.taxable_income, 59_250.0);
    assert_eq!(result.marginal_rate, 0.22);
    assert_eq!(result.total_credits, 0.0);
    assert_eq!(result.social_security, 75_000.0_f64.min(176_100.0) * 0.062);
    assert_eq!(result.medicare, 75_000.0 * 0.0145);

    let manual: f64 = result
        .bracket_breakdown
        .iter()
        .map(|b| b.taxable * b.rate)
        .sum();
    assert_abs_diff_eq!(result.federal_tax, manual, epsilon = 1e-9);
}

#[test]
fn test_tax_credits_never_exceed_federal_tax() {
    let statuses = [
        FilingStatus::Single,
        FilingStatus::MarriedJoint,
        FilingStatus::MarriedSeparate,
        FilingStatus::HeadOfHousehold,
    ];
    for status in statuses {
        for gross in [18_000.0, 40_000.0, 65_000.0, 150_000.0] {
            for children in 0..6 {
                for others in 0..4 {
                    let result = income_tax()
                        .gross_income(gross)
                        .filing_status(status)
                        .child_dependents(children)
                        .other_dependents(others)
                        .call()
                        .unwrap();
                    assert!(result.total_credits <= result.federal_tax_before_credits + 1e-9);
                    assert!(result.federal_tax >= -1e-9);
                }
            }
        }
    }
}

// =======================================
// IDEMPOTENCE
// =======================================

#[test]
fn test_calculators_are_idempotent() {
    let now = at(ymd(2025, 3, 14), 15, 9);
    let birth = ymd(1988, 11, 30);
    assert_eq!(
        calculate_age().birth_date(birth).now(now).call(),
        calculate_age().birth_date(birth).now(now).call()
    );
    assert_eq!(
        pregnancy_timeline().date(ymd(2025, 1, 1)).now(now).call(),
        pregnancy_timeline().date(ymd(2025, 1, 1)).now(now).call()
    );

    let run = || {
        income_tax()
            .gross_income(98_765.0)
            .filing_status(FilingStatus::HeadOfHousehold)
            .child_dependents(1)
            .state("OR")
            .call()
    };
    assert_eq!(run(), run());

    let quote = || MortgageForm::default().calculate();
    assert_eq!(quote(), quote());
}
