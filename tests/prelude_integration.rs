//! # Integration Tests for the Calckit Prelude
//!
//! Verifies that the prelude re-exports every calculator and result type, so that
//! users can import everything they need with a single `use` statement.

use calckit::prelude::*;

#[test]
fn test_prelude_imports_result_types() {
    let names = [
        std::any::type_name::<AgeResult>(),
        std::any::type_name::<DateDifference>(),
        std::any::type_name::<DateShift>(),
        std::any::type_name::<PregnancyResult>(),
        std::any::type_name::<PercentChange>(),
        std::any::type_name::<MortgageResult>(),
        std::any::type_name::<MonthlyBreakdown>(),
        std::any::type_name::<TaxResult>(),
        std::any::type_name::<TipResult>(),
        std::any::type_name::<TariffResult>(),
    ];
    for name in names {
        assert!(name.starts_with("calckit::"), "{name}");
    }
}

#[test]
fn test_prelude_imports_enums() {
    assert_eq!(FilingStatus::default(), FilingStatus::Single);
    assert_eq!(DatingMethod::default(), DatingMethod::Lmp);
    assert_eq!(DateUnit::default(), DateUnit::Days);
    assert_eq!(DateOperation::default(), DateOperation::Add);
    assert_eq!(DownPaymentField::default(), DownPaymentField::Percent);
    assert!(matches!(Deduction::default(), Deduction::Standard));
    assert_eq!(ZodiacSign::from_month_day(8, 1), ZodiacSign::Leo);
}

#[test]
fn test_prelude_function_accessibility() {
    let _age_fn = calculate_age;
    let _diff_fn = date_difference;
    let _shift_fn = shift_date;
    let _pregnancy_fn = pregnancy_timeline;
    let _mortgage_fn = mortgage;
    let _breakdown_fn = monthly_breakdown;
    let _tax_fn = income_tax;
    let _tip_fn = tip;
    let _tariff_fn = tariff;

    assert_eq!(what_is_percent(20.0, 50.0), Some(10.0));
    assert_eq!(auto_pmi(100_000.0, 50_000.0), 0.0);
    assert_eq!(currency(5.0, 2), "$5.00");
    assert_eq!(parse_number("12abc"), Some(12.0));
}

#[test]
fn test_prelude_imports_tables() {
    assert_eq!(STATE_RATES.len(), 51);
    assert_eq!(TARIFF_COUNTRIES.len(), 10);
    assert_eq!(PREGNANCY_MILESTONES.len(), 11);
    assert_eq!(TIP_PRESETS.len(), 5);
    assert_eq!(GESTATION_DAYS, 280);
    assert_eq!(DEFAULT_TICK_INTERVAL.as_secs(), 1);

    let config = TaxConfig::default();
    let brackets: &Vec<TaxBracket> = config.brackets.get(FilingStatus::MarriedJoint);
    assert_eq!(brackets.len(), 7);
}

#[test]
fn test_prelude_fallible_setup() -> CalcResult<()> {
    let date = parse_local_date("2024-02-29")?;
    assert!(is_leap_year(2024));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(local_midnight(date).to_string(), "2024-02-29 00:00:00");
    assert!(parse_local_date("2023-02-29").is_err());

    let config = TaxConfig::builder().child_credit(2_200.0).build()?;
    assert_eq!(config.child_credit, 2_200.0);
    Ok(())
}
