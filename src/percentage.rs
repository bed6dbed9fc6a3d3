use serde::Serialize;

/// Direction of a percentage change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeDirection {
    Increase,
    Decrease,
}

/// Unsigned percentage change plus its direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentChange {
    pub percent: f64,
    pub direction: ChangeDirection,
}

/// What is `p`% of `n`?
///
/// # Formula
/// ```text
/// result = n · p / 100
/// ```
///
/// Returns `None` when either input is not a finite number (an empty or unparsable field).
///
/// # Example
/// ```rust
/// # use calckit::prelude::what_is_percent;
/// assert_eq!(what_is_percent(20.0, 50.0), Some(10.0));
/// ```
pub fn what_is_percent(p: f64, n: f64) -> Option<f64> {
    if !p.is_finite() || !n.is_finite() {
        return None;
    }
    Some(n * p / 100.0)
}

/// `part` is what percent of `whole`?
///
/// # Formula
/// ```text
/// result = part / whole · 100
/// ```
///
/// Returns `None` for non-finite inputs or when `whole` is zero.
///
/// # Example
/// ```rust
/// # use calckit::prelude::is_what_percent;
/// assert_eq!(is_what_percent(30.0, 150.0), Some(20.0));
/// assert_eq!(is_what_percent(30.0, 0.0), None);
/// ```
pub fn is_what_percent(part: f64, whole: f64) -> Option<f64> {
    if !part.is_finite() || !whole.is_finite() || whole == 0.0 {
        return None;
    }
    Some(part / whole * 100.0)
}

/// Percentage change from `old_value` to `new_value`.
///
/// # Formula
/// ```text
/// change  = (new - old) / |old| · 100
/// percent = |change|
/// ```
/// The direction is `Increase` when `new >= old`, otherwise `Decrease`.
///
/// Returns `None` for non-finite inputs or when `old_value` is zero.
///
/// # Example
/// ```rust
/// # use calckit::prelude::*;
/// let change = percent_change(100.0, 150.0).unwrap();
/// assert_eq!(change.percent, 50.0);
/// assert_eq!(change.direction, ChangeDirection::Increase);
/// ```
pub fn percent_change(old_value: f64, new_value: f64) -> Option<PercentChange> {
    if !old_value.is_finite() || !new_value.is_finite() || old_value == 0.0 {
        return None;
    }

    let change = (new_value - old_value) / old_value.abs() * 100.0;
    let direction = if change >= 0.0 {
        ChangeDirection::Increase
    } else {
        ChangeDirection::Decrease
    };

    Some(PercentChange {
        percent: change.abs(),
        direction,
    })
}
