use crate::helpers::{ceil_days, floor_days, local_midnight};
use crate::params::{ReferenceDateParams, log_rejection};
use bon::builder;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::str::FromStr;

/// Length of a full-term pregnancy counted from the last menstrual period.
pub const GESTATION_DAYS: i64 = 280;

/// Days between the last menstrual period and conception.
pub const CONCEPTION_OFFSET_DAYS: i64 = 14;

/// How the entered date anchors the pregnancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DatingMethod {
    /// First day of the last menstrual period.
    #[default]
    Lmp,
    /// Date of conception.
    Conception,
}

impl FromStr for DatingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lmp" => Ok(DatingMethod::Lmp),
            "conception" => Ok(DatingMethod::Conception),
            other => Err(format!("unknown dating method '{other}'")),
        }
    }
}

/// A week-based pregnancy milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub week: i64,
    pub title: &'static str,
    pub description: &'static str,
    pub passed: bool,
}

// (week, title, description)
pub const PREGNANCY_MILESTONES: [(i64, &str, &str); 11] = [
    (4, "Positive Test", "Pregnancy can be detected"),
    (6, "Heartbeat", "Baby's heart starts beating"),
    (8, "First Prenatal", "Schedule your first appointment"),
    (12, "End of 1st Trimester", "Risk of miscarriage decreases"),
    (16, "Gender Reveal", "Baby's sex may be visible on ultrasound"),
    (20, "Anatomy Scan", "Detailed ultrasound of baby"),
    (24, "Viability", "Baby could survive outside womb with help"),
    (27, "3rd Trimester", "Final stretch begins"),
    (32, "Baby Position", "Baby usually moves head-down"),
    (37, "Full Term", "Baby is considered full term"),
    (40, "Due Date", "Estimated delivery date"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PregnancyResult {
    pub due_date: NaiveDate,
    pub current_week: i64,
    pub current_day: i64,
    pub trimester: u8,
    pub days_remaining: i64,
    pub days_pregnant: i64,
    pub percent_complete: u8,
    pub conception_date: NaiveDate,
    pub gestational_start: NaiveDate,
    pub milestones: Vec<Milestone>,
}

/// Pregnancy timeline from a last-menstrual-period or conception date.
///
/// # Formula
/// ```text
/// gestational start = LMP            (method = Lmp)
///                   = conception - 14 (method = Conception)
/// due date          = gestational start + 280 days
/// days pregnant     = max(0, floor(now - start))
/// days remaining    = max(0, ceil(due - now))
/// percent complete  = clamp(round(days pregnant / 280 * 100), 0, 100)
/// trimester         = 3 from week 27, 2 from week 13, else 1
/// ```
///
/// Returns `None` when the entered date lies after `now`.
///
/// # Examples
/// ```rust
/// # use calckit::prelude::*;
/// let lmp = parse_local_date("2024-01-01")?;
/// let now = parse_local_date("2024-04-01")?.and_hms_opt(10, 0, 0).unwrap();
/// let timeline = pregnancy_timeline().date(lmp).now(now).call().unwrap();
/// assert_eq!(timeline.due_date.to_string(), "2024-10-07");
/// assert_eq!((timeline.current_week, timeline.current_day), (13, 0));
/// assert_eq!(timeline.trimester, 2);
/// # CalcResult::Ok(())
/// ```
#[builder]
pub fn pregnancy_timeline(
    date: NaiveDate,
    #[builder(default)] method: DatingMethod,
    #[builder(default = Local::now().naive_local())] now: NaiveDateTime,
) -> Option<PregnancyResult> {
    let params = ReferenceDateParams {
        date: local_midnight(date),
        now,
    };
    if let Err(report) = params.validate_all() {
        log_rejection("pregnancy", &report);
        return None;
    }

    let offset = Duration::days(CONCEPTION_OFFSET_DAYS);
    let (gestational_start, conception_date) = match method {
        DatingMethod::Conception => (date.checked_sub_signed(offset)?, date),
        DatingMethod::Lmp => (date, date.checked_add_signed(offset)?),
    };
    let due_date = gestational_start.checked_add_signed(Duration::days(GESTATION_DAYS))?;

    // Progress
    let days_pregnant = floor_days(local_midnight(gestational_start), now).max(0);
    let current_week = days_pregnant / 7;
    let current_day = days_pregnant % 7;
    let days_remaining = ceil_days(now, local_midnight(due_date)).max(0);
    let percent = (days_pregnant as f64 / GESTATION_DAYS as f64 * 100.0).round();
    let percent_complete = percent.clamp(0.0, 100.0) as u8;

    let trimester = if current_week >= 27 {
        3
    } else if current_week >= 13 {
        2
    } else {
        1
    };

    let milestones = PREGNANCY_MILESTONES
        .iter()
        .map(|&(week, title, description)| Milestone {
            week,
            title,
            description,
            passed: current_week >= week,
        })
        .collect();

    Some(PregnancyResult {
        due_date,
        current_week,
        current_day,
        trimester,
        days_remaining,
        days_pregnant,
        percent_complete,
        conception_date,
        gestational_start,
        milestones,
    })
}

// =======================================
// UNIT TESTS
// =======================================
#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fn_pregnancy_lmp_method() {
        let now = ymd(2024, 3, 1).and_hms_opt(9, 0, 0).unwrap();
        let result = pregnancy_timeline()
            .date(ymd(2024, 1, 1))
            .now(now)
            .call()
            .unwrap();

        assert_eq!(result.gestational_start, ymd(2024, 1, 1));
        assert_eq!(result.conception_date, ymd(2024, 1, 15));
        assert_eq!(result.due_date, ymd(2024, 10, 7));
        // Jan 1 -> Mar 1 (leap year) = 60 days
        assert_eq!(result.days_pregnant, 60);
        assert_eq!((result.current_week, result.current_day), (8, 4));
        assert_eq!(result.trimester, 1);
        // round(60 / 280 * 100) = round(21.43)
        assert_eq!(result.percent_complete, 21);
        // Mar 1 09:00 -> Oct 7 00:00 = 219.625 days, rounded up
        assert_eq!(result.days_remaining, 220);
    }

    #[test]
    fn test_fn_pregnancy_conception_method() {
        let now = ymd(2024, 3, 1).and_hms_opt(9, 0, 0).unwrap();
        let by_conception = pregnancy_timeline()
            .date(ymd(2024, 1, 15))
            .method(DatingMethod::Conception)
            .now(now)
            .call()
            .unwrap();
        let by_lmp = pregnancy_timeline()
            .date(ymd(2024, 1, 1))
            .method(DatingMethod::Lmp)
            .now(now)
            .call()
            .unwrap();

        // Both anchors describe the same pregnancy
        assert_eq!(by_conception, by_lmp);
    }

    #[test]
    fn test_fn_pregnancy_milestones_and_trimesters() {
        let lmp = ymd(2023, 1, 2);
        let cases = [(20, 1, 0), (13 * 7, 2, 4), (27 * 7, 3, 8), (400, 3, 11)];
        for (days, trimester, passed) in cases {
            let now = local_midnight(lmp + Duration::days(days));
            let result = pregnancy_timeline().date(lmp).now(now).call().unwrap();
            assert_eq!(result.trimester, trimester, "days = {days}");
            let passed_count = result.milestones.iter().filter(|m| m.passed).count();
            assert_eq!(passed_count, passed, "days = {days}");
        }
    }

    #[test]
    fn test_fn_pregnancy_overdue_is_clamped() {
        let lmp = ymd(2022, 1, 1);
        let now = local_midnight(ymd(2023, 6, 1));
        let result = pregnancy_timeline().date(lmp).now(now).call().unwrap();
        assert_eq!(result.percent_complete, 100);
        assert_eq!(result.days_remaining, 0);
    }

    #[test]
    fn test_fn_pregnancy_future_date() {
        let now = local_midnight(ymd(2024, 1, 1));
        let result = pregnancy_timeline().date(ymd(2024, 1, 2)).now(now).call();
        assert!(result.is_none());
    }

    #[test]
    fn test_fn_pregnancy_due_date_is_280_days_after_start() {
        let now = local_midnight(ymd(2025, 1, 1));
        for method in [DatingMethod::Lmp, DatingMethod::Conception] {
            for day in [ymd(2024, 2, 29), ymd(2024, 6, 30), ymd(2024, 12, 31)] {
                let result = pregnancy_timeline()
                    .date(day)
                    .method(method)
                    .now(now)
                    .call()
                    .unwrap();
                assert_eq!((result.due_date - result.gestational_start).num_days(), 280);
                assert_eq!(
                    (result.conception_date - result.gestational_start).num_days(),
                    14
                );
            }
        }
    }
}
