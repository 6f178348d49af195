//! Error types for date parsing and range validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

/// Errors from date parsing or input-range validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Text could not be parsed as a `YYYY-MM-DD` date.
    DateParse(String),
    /// Year/month/day triple does not name a real calendar day.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Date lies outside the supported input range (1900-01-01 ..= 2100-12-31).
    OutOfRange(NaiveDate),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParse(msg) => write!(f, "date parse error: {msg}"),
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::OutOfRange(date) => {
                write!(f, "date {date} outside supported range 1900-01-01..=2100-12-31")
            }
        }
    }
}

impl Error for TimeError {}

impl From<chrono::ParseError> for TimeError {
    fn from(e: chrono::ParseError) -> Self {
        Self::DateParse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_date_pads() {
        let e = TimeError::InvalidDate {
            year: 2023,
            month: 2,
            day: 30,
        };
        assert_eq!(e.to_string(), "invalid calendar date: 2023-02-30");
    }

    #[test]
    fn display_out_of_range_names_date() {
        let d = NaiveDate::from_ymd_opt(1899, 12, 31).unwrap();
        let msg = TimeError::OutOfRange(d).to_string();
        assert!(msg.contains("1899-12-31"), "got: {msg}");
    }
}
