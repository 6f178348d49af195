//! Simplified Hindu calendar (panchang) elements from a calendar date.
//!
//! This crate provides:
//! - Nakshatra, rashi and tithi from fixed epochs and mean cycle lengths
//! - Vaar (weekday), yoga, karana and ritu (season)
//! - Reference tables: nakshatra and rashi data, graha lords, elements
//! - The Western zodiac card for a date's rashi
//! - [`panchang_for_date`], combining all of the above
//!
//! These are calendar approximations, not astronomical positions. Dates on
//! either side of an epoch are supported; every cycle position is taken with
//! a non-negative remainder.

pub mod config;
pub mod element;
pub mod graha;
pub mod karana;
pub mod nakshatra;
pub mod panchang;
pub mod rashi;
pub mod ritu;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod yoga;
pub mod zodiac;

pub use config::PanchangConfig;
pub use element::Element;
pub use graha::{Graha, NAKSHATRA_LORD_SEQUENCE, nakshatra_lord, rashi_lord};
pub use karana::{ALL_KARANAS, Karana, calculate_karana, karana_from_tithi};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_EPOCH_JDN, Nakshatra, SIDEREAL_MONTH_DAYS, calculate_nakshatra,
    nakshatra_for_date, nakshatra_index_with,
};
pub use panchang::{PanchangInfo, panchang_for_date, panchang_with};
pub use rashi::{
    ALL_RASHIS, AYANAMSA_DEG, Rashi, RashiInfo, TROPICAL_YEAR_DAYS, calculate_rashi,
    rashi_for_date, rashi_index_from_longitude, rashi_info_with, sidereal_longitude_for_day,
};
pub use ritu::{Ritu, get_season, ritu_for_date, ritu_from_month};
pub use tithi::{
    Paksha, TITHI_EPOCH_JDN, TITHI_NAMES, TITHI_SYNODIC_MONTH_DAYS, TithiInfo, calculate_tithi,
    tithi_for_date, tithi_index_with,
};
pub use util::{cycle_slot, normalize_360};
pub use vaar::{ALL_VAARS, Vaar, get_vara, vaar_for_date};
pub use yoga::{YOGA_NAMES, YogaInfo, calculate_yoga, yoga_for_date, yoga_index};
pub use zodiac::{ZodiacCard, zodiac_description, zodiac_for_date, zodiac_with};
