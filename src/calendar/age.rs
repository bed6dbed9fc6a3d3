use crate::helpers::{calendar_diff, ceil_days, date_with_overflow, local_midnight};
use crate::params::{ReferenceDateParams, log_rejection};
use bon::builder;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

// =======================================
// ZODIAC SIGNS
// =======================================

/// Western tropical zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZodiacSign {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

impl ZodiacSign {
    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            ZodiacSign::Capricorn => '♑',
            ZodiacSign::Aquarius => '♒',
            ZodiacSign::Pisces => '♓',
            ZodiacSign::Aries => '♈',
            ZodiacSign::Taurus => '♉',
            ZodiacSign::Gemini => '♊',
            ZodiacSign::Cancer => '♋',
            ZodiacSign::Leo => '♌',
            ZodiacSign::Virgo => '♍',
            ZodiacSign::Libra => '♎',
            ZodiacSign::Scorpio => '♏',
            ZodiacSign::Sagittarius => '♐',
        }
    }

    /// Sign for a (month, day) of birth.
    ///
    /// Walks the boundary table in order and returns the first sign whose last
    /// day is on or after the birth day. Capricorn appears twice because it
    /// wraps the new year.
    pub fn from_month_day(month: u32, day: u32) -> ZodiacSign {
        ZODIAC_BOUNDARIES
            .iter()
            .find(|(_, end_month, end_day)| {
                month < *end_month || (month == *end_month && day <= *end_day)
            })
            .map(|(sign, _, _)| *sign)
            .unwrap_or(ZodiacSign::Capricorn)
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.symbol())
    }
}

// (sign, last month, last day)
const ZODIAC_BOUNDARIES: [(ZodiacSign, u32, u32); 13] = [
    (ZodiacSign::Capricorn, 1, 19),
    (ZodiacSign::Aquarius, 2, 18),
    (ZodiacSign::Pisces, 3, 20),
    (ZodiacSign::Aries, 4, 19),
    (ZodiacSign::Taurus, 5, 20),
    (ZodiacSign::Gemini, 6, 20),
    (ZodiacSign::Cancer, 7, 22),
    (ZodiacSign::Leo, 8, 22),
    (ZodiacSign::Virgo, 9, 22),
    (ZodiacSign::Libra, 10, 22),
    (ZodiacSign::Scorpio, 11, 21),
    (ZodiacSign::Sagittarius, 12, 21),
    (ZodiacSign::Capricorn, 12, 31),
];

// =======================================
// AGE RESULT
// =======================================

/// Age at a given instant.
///
/// `years`/`months`/`days` come from the calendar decomposition of the two dates,
/// while the `total_*` fields are floors of the literal elapsed time since midnight
/// of the birth date, so they keep growing during the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeResult {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub total_days: i64,
    pub total_hours: i64,
    pub total_minutes: i64,
    pub total_seconds: i64,
    pub next_birthday: NaiveDate,
    pub days_until_birthday: i64,
    pub zodiac_sign: ZodiacSign,
}

// =======================================
// PUBLIC FUNCTIONS
// =======================================

/// Age of a person born on `birth_date`, evaluated at `now`.
///
/// # Algorithm
/// ```text
/// years  = now.year  - birth.year
/// months = now.month - birth.month
/// days   = now.day   - birth.day
/// days < 0   => months -= 1, days += length of the month before now's month
/// months < 0 => years  -= 1, months += 12
/// ```
/// Totals are floors of `now - midnight(birth)`. The next birthday is the birth
/// month and day in the current year, or the following year once its midnight
/// has passed; a February 29th birthday rolls to March 1st in common years.
///
/// Returns `None` when the birth date lies after `now`.
///
/// # Examples
/// ```rust
/// # use calckit::prelude::*;
/// let birth = parse_local_date("2000-02-29")?;
/// let now = parse_local_date("2023-06-01")?.and_hms_opt(12, 0, 0).unwrap();
/// let age = calculate_age().birth_date(birth).now(now).call().unwrap();
/// assert_eq!((age.years, age.months, age.days), (23, 3, 3));
/// assert_eq!(age.next_birthday.to_string(), "2024-02-29");
/// assert_eq!(age.zodiac_sign, ZodiacSign::Pisces);
/// # CalcResult::Ok(())
/// ```
#[builder]
pub fn calculate_age(
    birth_date: NaiveDate,
    #[builder(default = Local::now().naive_local())] now: NaiveDateTime,
) -> Option<AgeResult> {
    let birth = local_midnight(birth_date);

    let params = ReferenceDateParams { date: birth, now };
    if let Err(report) = params.validate_all() {
        log_rejection("age", &report);
        return None;
    }

    // Calendar decomposition against today's date
    let (years, months, days) = calendar_diff(birth_date, now.date());

    // Literal elapsed time, including today's hours
    let elapsed = now - birth;

    // Next birthday, this year if its midnight is still ahead
    let month0 = i64::from(birth_date.month0());
    let mut next_birthday = date_with_overflow(now.year(), month0, birth_date.day())?;
    if local_midnight(next_birthday) <= now {
        next_birthday = date_with_overflow(now.year() + 1, month0, birth_date.day())?;
    }
    let days_until_birthday = ceil_days(now, local_midnight(next_birthday));

    Some(AgeResult {
        years,
        months,
        days,
        total_days: elapsed.num_days(),
        total_hours: elapsed.num_hours(),
        total_minutes: elapsed.num_minutes(),
        total_seconds: elapsed.num_seconds(),
        next_birthday,
        days_until_birthday,
        zodiac_sign: ZodiacSign::from_month_day(birth_date.month(), birth_date.day()),
    })
}
