use crate::helpers::finite_or_zero;
use crate::params::{TipParams, log_rejection};
use bon::builder;
use serde::Serialize;

/// Tip percentages offered as one-tap choices.
pub const TIP_PRESETS: [f64; 5] = [10.0, 15.0, 18.0, 20.0, 25.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TipResult {
    pub tip_amount: f64,
    pub total_amount: f64,
    pub per_person_tip: f64,
    pub per_person_total: f64,
}

/// Tip on a bill and each person's share when the bill is split.
///
/// Negative bill and tip entries count by their magnitude and an unreadable tip
/// percentage counts as zero. A split below one counts as one person. Returns `None` when there is no bill.
///
/// # Formula
/// ```text
/// tip        = bill · tip% / 100
/// total      = bill + tip
/// per person = tip / split, total / split
/// ```
#[builder]
pub fn tip(
    bill: f64,
    #[builder(default = 18.0)] tip_percent: f64,
    #[builder(default = 1)] split: u32,
) -> Option<TipResult> {
    let params = TipParams {
        bill: bill.abs(),
        tip_percent: finite_or_zero(tip_percent).abs(),
        split: split.max(1),
    };
    if let Err(report) = params.validate_all() {
        log_rejection("tip", &report);
        return None;
    }

    let tip_amount = params.bill * params.tip_percent / 100.0;
    let total_amount = params.bill + tip_amount;
    let people = params.split as f64;

    Some(TipResult {
        tip_amount,
        total_amount,
        per_person_tip: tip_amount / people,
        per_person_total: total_amount / people,
    })
}
