//! Season (ritu) by calendar month.

use chrono::{Datelike, NaiveDate};

/// The three dashboard seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Ritu {
    /// March-June.
    Vasant,
    /// July-October.
    Grishma,
    /// November-February.
    Shishir,
}

impl Ritu {
    /// Display name with the English season in parentheses.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vasant => "Vasant (Spring)",
            Self::Grishma => "Grishma (Summer)",
            Self::Shishir => "Shishir (Winter)",
        }
    }
}

/// Season for a calendar month (1-12).
pub const fn ritu_from_month(month: u32) -> Ritu {
    match month {
        3..=6 => Ritu::Vasant,
        7..=10 => Ritu::Grishma,
        _ => Ritu::Shishir,
    }
}

/// Season for a date.
pub fn ritu_for_date(date: NaiveDate) -> Ritu {
    ritu_from_month(date.month())
}

/// Season name for a date.
pub fn get_season(date: NaiveDate) -> &'static str {
    ritu_for_date(date).name()
}
