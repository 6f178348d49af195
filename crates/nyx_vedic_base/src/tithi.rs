//! Tithi (lunar day) from a calendar date.
//!
//! Whole days since a reference new moon (2000-01-06) are folded by one mean
//! synodic month and scaled to 30 tithis. Tithis 0..15 form the waxing
//! Shukla paksha, 15..30 the waning Krishna paksha.

use chrono::NaiveDate;
use nyx_time::days_since_jdn;

use crate::config::PanchangConfig;
use crate::util::cycle_slot;

/// Mean synodic month in days used for tithi.
pub const TITHI_SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Julian Day Number of the reference new moon, 2000-01-06.
pub const TITHI_EPOCH_JDN: i64 = 2_451_550;

/// Day names within a paksha. The 15th day is named for either the full
/// moon (Shukla) or the new moon (Krishna).
pub const TITHI_NAMES: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima/Amavasya",
];

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Paksha {
    /// Waxing half (tithis 0..15).
    Shukla,
    /// Waning half (tithis 15..30).
    Krishna,
}

impl Paksha {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla Paksha",
            Self::Krishna => "Krishna Paksha",
        }
    }
}

/// Tithi classification for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TithiInfo {
    /// 0-based tithi (0..29).
    pub tithi_index: u8,
    /// Paksha (Shukla or Krishna).
    pub paksha: Paksha,
    /// 1-based day within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Day name from [`TITHI_NAMES`].
    pub name: &'static str,
}

impl TithiInfo {
    /// Classify a raw tithi value.
    pub fn from_index(tithi: u8) -> Self {
        let tithi = tithi % 30;
        let paksha = if tithi < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        };
        let tithi_in_paksha = tithi % 15 + 1;
        let name = TITHI_NAMES[usize::from(tithi_in_paksha - 1).min(14)];
        Self {
            tithi_index: tithi,
            paksha,
            tithi_in_paksha,
            name,
        }
    }
}

/// Tithi value for a date with explicit constants.
pub fn tithi_index_with(date: NaiveDate, config: &PanchangConfig) -> u8 {
    let days = days_since_jdn(date, config.tithi_epoch_jdn);
    cycle_slot(days as f64, config.tithi_month_days, 30)
}

/// Tithi value (0..30) for a date.
pub fn calculate_tithi(date: NaiveDate) -> u8 {
    tithi_index_with(date, &PanchangConfig::default())
}

/// Tithi classification for a date.
pub fn tithi_for_date(date: NaiveDate) -> TithiInfo {
    TithiInfo::from_index(calculate_tithi(date))
}
