//! Calendar-date helpers for the nyx lunar and panchang calculators.
//!
//! This crate provides:
//! - Gregorian date → Julian Day conversion (the low-precision formula the
//!   moon-phase calculator is calibrated against)
//! - Julian Day Numbers for whole-day epoch arithmetic
//! - Day-of-year and weekday helpers on [`chrono::NaiveDate`]
//! - Date parsing and the supported input range check

pub mod calendar;
pub mod error;
pub mod julian;

pub use calendar::{
    UI_MAX_YMD, UI_MIN_YMD, day_of_year0, days_since_jdn, parse_date, validate_ui_range,
    weekday_from_sunday, ymd,
};
pub use error::TimeError;
pub use julian::{JDN_CE_OFFSET, calendar_to_jd, julian_day, julian_day_number};

pub use chrono::NaiveDate;
