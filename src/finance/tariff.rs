use crate::params::{TariffParams, log_rejection};
use bon::builder;
use serde::Serialize;

/// Country of origin with the tariff rate suggested for its goods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TariffCountry {
    pub name: &'static str,
    /// Suggested rate in percent
    pub suggested_rate: f64,
    pub note: &'static str,
}

const fn country(name: &'static str, note: &'static str) -> TariffCountry {
    TariffCountry {
        name,
        suggested_rate: 25.0,
        note,
    }
}

pub static TARIFF_COUNTRIES: [TariffCountry; 10] = [
    country(
        "China",
        "Section 232 tariffs on steel, aluminum, autos, electronics, etc.",
    ),
    country(
        "Canada",
        "25% on steel, aluminum, autos & lumber; varies by product",
    ),
    country(
        "Mexico",
        "25% on steel, aluminum, autos & heavy trucks; varies by product",
    ),
    country(
        "European Union",
        "25% on steel, aluminum & autos; varies by product",
    ),
    country("Japan", "25% on steel, aluminum & autos; varies by product"),
    country(
        "South Korea",
        "25% on steel, aluminum & autos; varies by product",
    ),
    country("India", "25% on steel, aluminum & autos; varies by product"),
    country(
        "Vietnam",
        "25% on steel, aluminum, furniture & electronics; varies by product",
    ),
    country(
        "Taiwan",
        "25% on steel, aluminum & semiconductors; varies by product",
    ),
    country(
        "Other",
        "25% on steel, aluminum & autos under Section 232; varies by product",
    ),
];

/// Look up a country by name, ignoring case. Unlisted countries map to "Other".
pub fn tariff_country(name: &str) -> &'static TariffCountry {
    let name = name.trim();
    let last = TARIFF_COUNTRIES.len() - 1;
    TARIFF_COUNTRIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .unwrap_or(&TARIFF_COUNTRIES[last])
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TariffResult {
    pub country: &'static str,
    pub total_product_value: f64,
    pub shipping: f64,
    pub dutiable_value: f64,
    /// Applied rate in percent
    pub tariff_rate: f64,
    pub tariff_amount: f64,
    pub total_cost: f64,
    pub price_increase_pct: f64,
    pub per_unit_before: f64,
    pub per_unit_after: f64,
    pub per_unit_tariff: f64,
}

/// Import tariff on a shipment of identical units.
///
/// The rate defaults to the country's suggested rate; an explicit `rate` replaces it.
/// A quantity of zero counts as one unit.
///
/// # Formula
/// ```text
/// dutiable = value · quantity + shipping
/// tariff   = dutiable · rate / 100
/// total    = dutiable + tariff
/// increase = tariff / dutiable · 100
/// ```
///
/// Returns `None` when the product value is not positive.
///
/// # Examples
/// ```rust
/// # use calckit::prelude::*;
/// let result = tariff()
///     .product_value(40.0)
///     .quantity(10)
///     .shipping(100.0)
///     .country("Vietnam")
///     .call()
///     .unwrap();
/// assert_eq!(result.dutiable_value, 500.0);
/// assert_eq!(result.tariff_amount, 125.0);
/// assert_eq!(result.per_unit_after, 62.5);
/// ```
#[builder]
pub fn tariff(
    product_value: f64,
    #[builder(default = 1)] quantity: u32,
    #[builder(default = 0.0)] shipping: f64,
    country: Option<&str>,
    rate: Option<f64>,
) -> Option<TariffResult> {
    let origin = tariff_country(country.unwrap_or(TARIFF_COUNTRIES[0].name));
    let params = TariffParams {
        product_value,
        quantity: quantity.max(1),
        shipping,
        rate: rate.unwrap_or(origin.suggested_rate),
    };
    if let Err(report) = params.validate_all() {
        log_rejection("tariff", &report);
        return None;
    }

    let units = params.quantity as f64;
    let total_product_value = params.product_value * units;
    let dutiable_value = total_product_value + params.shipping;
    let tariff_amount = dutiable_value * params.rate / 100.0;
    let total_cost = dutiable_value + tariff_amount;
    let price_increase_pct = if dutiable_value > 0.0 {
        tariff_amount / dutiable_value * 100.0
    } else {
        0.0
    };

    Some(TariffResult {
        country: origin.name,
        total_product_value,
        shipping: params.shipping,
        dutiable_value,
        tariff_rate: params.rate,
        tariff_amount,
        total_cost,
        price_increase_pct,
        per_unit_before: params.product_value + params.shipping / units,
        per_unit_after: total_cost / units,
        per_unit_tariff: tariff_amount / units,
    })
}

// =======================================
// UNIT TESTS
// =======================================
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fn_tariff_defaults_to_china() {
        let result = tariff().product_value(200.0).call().unwrap();
        assert_eq!(result.country, "China");
        assert_eq!(result.tariff_rate, 25.0);
        assert_eq!(result.tariff_amount, 50.0);
        assert_eq!(result.total_cost, 250.0);
        assert_eq!(result.price_increase_pct, 25.0);
        assert_eq!(result.per_unit_before, 200.0);
    }

    #[test]
    fn test_fn_tariff_shipping_and_quantity() {
        let result = tariff()
            .product_value(12.5)
            .quantity(8)
            .shipping(20.0)
            .rate(10.0)
            .call()
            .unwrap();
        assert_eq!(result.total_product_value, 100.0);
        assert_eq!(result.dutiable_value, 120.0);
        assert_abs_diff_eq!(result.tariff_amount, 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.total_cost, 132.0, epsilon = 1e-12);
        assert_eq!(result.per_unit_before, 15.0);
        assert_abs_diff_eq!(result.per_unit_after, 16.5, epsilon = 1e-12);
        assert_abs_diff_eq!(result.per_unit_tariff, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_fn_tariff_zero_quantity_counts_as_one() {
        let zero = tariff().product_value(80.0).quantity(0).call().unwrap();
        let one = tariff().product_value(80.0).quantity(1).call().unwrap();
        assert_eq!(zero, one);
    }

    #[test]
    fn test_fn_tariff_no_result() {
        assert!(tariff().product_value(0.0).call().is_none());
        assert!(tariff().product_value(f64::NAN).call().is_none());
    }

    #[test]
    fn test_fn_tariff_country_lookup() {
        assert_eq!(tariff_country("south korea").name, "South Korea");
        assert_eq!(tariff_country("Atlantis").name, "Other");
        assert!(TARIFF_COUNTRIES.iter().all(|c| c.suggested_rate == 25.0));
    }
}
