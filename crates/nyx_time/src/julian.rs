//! Julian Day conversions.
//!
//! [`calendar_to_jd`] is the classic Meeus-style Gregorian formula with
//! truncating integer parts. The moon-phase reference epoch is fitted to
//! this exact formula.

use chrono::{Datelike, NaiveDate};

/// Offset between chrono's day count from CE and the Julian Day Number.
///
/// `NaiveDate::num_days_from_ce` is 1 for 0001-01-01, whose JDN is 1_721_426.
pub const JDN_CE_OFFSET: i64 = 1_721_425;

/// Convert a Gregorian calendar date to a Julian Date (00:00 UT of that day).
///
/// January and February are treated as months 13 and 14 of the previous year.
/// The Gregorian correction term is `b = 2 - a + a/4` with `a = y/100`.
pub fn calendar_to_jd(year: i32, month: u32, day: u32) -> f64 {
    let (mut y, mut m) = (year, month as i32);
    if m < 3 {
        y -= 1;
        m += 12;
    }
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    (365.25 * (y + 4716) as f64).trunc()
        + (30.6001 * (m + 1) as f64).trunc()
        + day as f64
        + b as f64
        - 1524.5
}

/// Julian Date at 00:00 UT of a calendar date.
pub fn julian_day(date: NaiveDate) -> f64 {
    calendar_to_jd(date.year(), date.month(), date.day())
}

/// Julian Day Number (integer, noon-based) of a calendar date.
pub fn julian_day_number(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 + JDN_CE_OFFSET
}
