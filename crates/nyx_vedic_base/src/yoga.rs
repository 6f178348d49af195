//! Yoga from the day of the year.
//!
//! The table below is kept exactly as the dashboard has always displayed it,
//! including "Siddha" at both index 15 and index 20.

use chrono::NaiveDate;
use nyx_time::day_of_year0;

/// The 27 yoga names, indexed by `day_of_year mod 27`.
pub const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarman",
    "Dhriti",
    "Shoola",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddha",
    "Vyatipata",
    "Variyan",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

/// Yoga classification for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct YogaInfo {
    /// 0-based yoga index (0..26).
    pub yoga_index: u8,
    /// Name from [`YOGA_NAMES`].
    pub name: &'static str,
}

/// Yoga index (0..27) for a date.
pub fn yoga_index(date: NaiveDate) -> u8 {
    (day_of_year0(date) % 27) as u8
}

/// Yoga classification for a date.
pub fn yoga_for_date(date: NaiveDate) -> YogaInfo {
    let yoga_index = yoga_index(date);
    YogaInfo {
        yoga_index,
        name: YOGA_NAMES[yoga_index as usize],
    }
}

/// Yoga name for a date.
pub fn calculate_yoga(date: NaiveDate) -> &'static str {
    yoga_for_date(date).name
}
