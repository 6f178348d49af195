//! Calendar helpers on [`NaiveDate`]: parsing, range checks, day counts.

use chrono::{Datelike, NaiveDate};

use crate::error::TimeError;
use crate::julian::julian_day_number;

/// Earliest date accepted by [`validate_ui_range`].
pub const UI_MIN_YMD: (i32, u32, u32) = (1900, 1, 1);

/// Latest date accepted by [`validate_ui_range`].
pub const UI_MAX_YMD: (i32, u32, u32) = (2100, 12, 31);

/// Build a date from year/month/day, rejecting impossible days.
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, TimeError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(TimeError::InvalidDate { year, month, day })
}

/// Parse `YYYY-MM-DD`. A trailing time part (`THH:MM:SS[Z]`) is ignored.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    let s = s.trim();
    let date_part = s.split('T').next().unwrap_or(s);
    Ok(NaiveDate::parse_from_str(date_part, "%Y-%m-%d")?)
}

/// Check that a date lies within 1900-01-01 ..= 2100-12-31.
///
/// The calculators themselves accept any date; this is for callers that
/// take user input.
pub fn validate_ui_range(date: NaiveDate) -> Result<NaiveDate, TimeError> {
    let key = (date.year(), date.month(), date.day());
    if key < UI_MIN_YMD || key > UI_MAX_YMD {
        return Err(TimeError::OutOfRange(date));
    }
    Ok(date)
}

/// 0-based day of the year (January 1 = 0).
pub fn day_of_year0(date: NaiveDate) -> u32 {
    date.ordinal0()
}

/// Weekday index counted from Sunday (Sunday = 0 .. Saturday = 6).
pub fn weekday_from_sunday(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Whole days from an epoch (given as a Julian Day Number) to `date`.
///
/// Negative for dates before the epoch.
pub fn days_since_jdn(date: NaiveDate, epoch_jdn: i64) -> i64 {
    julian_day_number(date) - epoch_jdn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_date() {
        let d = parse_date("2024-03-20").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 3, 20));
    }

    #[test]
    fn parse_ignores_time_part() {
        let d = parse_date("2024-03-20T12:30:00Z").unwrap();
        assert_eq!(d, ymd(2024, 3, 20).unwrap());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(parse_date("20-03-2024"), Err(TimeError::DateParse(_))));
    }

    #[test]
    fn ymd_rejects_feb_30() {
        assert_eq!(
            ymd(2023, 2, 30),
            Err(TimeError::InvalidDate {
                year: 2023,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn range_bounds_inclusive() {
        assert!(validate_ui_range(ymd(1900, 1, 1).unwrap()).is_ok());
        assert!(validate_ui_range(ymd(2100, 12, 31).unwrap()).is_ok());
    }

    #[test]
    fn range_rejects_outside() {
        let early = ymd(1899, 12, 31).unwrap();
        let late = ymd(2101, 1, 1).unwrap();
        assert_eq!(validate_ui_range(early), Err(TimeError::OutOfRange(early)));
        assert_eq!(validate_ui_range(late), Err(TimeError::OutOfRange(late)));
    }

    #[test]
    fn day_of_year_is_zero_based() {
        assert_eq!(day_of_year0(ymd(2023, 1, 1).unwrap()), 0);
        assert_eq!(day_of_year0(ymd(2023, 12, 31).unwrap()), 364);
        assert_eq!(day_of_year0(ymd(2024, 12, 31).unwrap()), 365);
    }

    #[test]
    fn weekday_sunday_first() {
        // 2024-01-07 was a Sunday
        assert_eq!(weekday_from_sunday(ymd(2024, 1, 7).unwrap()), 0);
        assert_eq!(weekday_from_sunday(ymd(2024, 1, 8).unwrap()), 1);
        assert_eq!(weekday_from_sunday(ymd(2024, 1, 13).unwrap()), 6);
    }

    #[test]
    fn days_since_epoch_signed() {
        let epoch = julian_day_number(ymd(2000, 1, 6).unwrap());
        assert_eq!(days_since_jdn(ymd(2000, 1, 6).unwrap(), epoch), 0);
        assert_eq!(days_since_jdn(ymd(2000, 1, 7).unwrap(), epoch), 1);
        assert_eq!(days_since_jdn(ymd(2000, 1, 5).unwrap(), epoch), -1);
    }
}
