//! Rashi (zodiac sign) from a calendar date.
//!
//! The Sun's mean tropical longitude is approximated as the fraction of the
//! year elapsed since January 1 (not since the equinox), scaled to 360 deg.
//! A fixed ayanamsa converts it to a sidereal longitude, which is divided
//! into 12 signs of 30 deg each starting from Mesha.

use chrono::NaiveDate;
use nyx_time::day_of_year0;

use crate::config::PanchangConfig;
use crate::element::{Element, RASHI_ELEMENT_CYCLE};
use crate::graha::{Graha, rashi_lord};
use crate::util::normalize_360;

/// Fixed ayanamsa in degrees, approximate for the current epoch.
pub const AYANAMSA_DEG: f64 = 24.1;

/// Tropical year length used to scale day-of-year to longitude.
pub const TROPICAL_YEAR_DAYS: f64 = 365.25;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrishchika,
    Dhanus,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrishchika,
    Rashi::Dhanus,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrishchika => "Vrishchika",
            Self::Dhanus => "Dhanus",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrishchika => "Scorpio",
            Self::Dhanus => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Unicode zodiac glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Mesha => "♈",
            Self::Vrishabha => "♉",
            Self::Mithuna => "♊",
            Self::Karka => "♋",
            Self::Simha => "♌",
            Self::Kanya => "♍",
            Self::Tula => "♎",
            Self::Vrishchika => "♏",
            Self::Dhanus => "♐",
            Self::Makara => "♑",
            Self::Kumbha => "♒",
            Self::Meena => "♓",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrishchika => 7,
            Self::Dhanus => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Ruling graha.
    pub const fn ruler(self) -> Graha {
        rashi_lord(self)
    }

    /// Element (Fire, Earth, Air, Water repeating from Mesha).
    pub const fn element(self) -> Element {
        RASHI_ELEMENT_CYCLE[(self.index() % 4) as usize]
    }

    /// Rashi at a 0-based index, wrapping past Meena.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }
}

/// Rashi position for a date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Mean sidereal solar longitude in degrees [0, 360).
    pub sidereal_longitude_deg: f64,
}

/// Mean sidereal longitude for a 0-based day of the year.
///
/// `tropical = doy / year · 360`, `sidereal = (tropical − ayanamsa + 360) mod 360`.
pub fn sidereal_longitude_for_day(day_of_year: u32, year_days: f64, ayanamsa_deg: f64) -> f64 {
    let tropical = day_of_year as f64 / year_days * 360.0;
    normalize_360(tropical - ayanamsa_deg + 360.0)
}

/// Rashi index from a sidereal longitude: 30 deg per sign.
pub fn rashi_index_from_longitude(sidereal_lon_deg: f64) -> u8 {
    ((normalize_360(sidereal_lon_deg) / 30.0).trunc() as u32 % 12) as u8
}

/// Rashi position for a date with explicit constants.
pub fn rashi_info_with(date: NaiveDate, config: &PanchangConfig) -> RashiInfo {
    let lon = sidereal_longitude_for_day(
        day_of_year0(date),
        config.tropical_year_days,
        config.ayanamsa_deg,
    );
    let rashi_index = rashi_index_from_longitude(lon);
    RashiInfo {
        rashi: Rashi::from_index(rashi_index),
        rashi_index,
        sidereal_longitude_deg: lon,
    }
}

/// Rashi index (0..12) for a date.
pub fn calculate_rashi(date: NaiveDate) -> u8 {
    rashi_info_with(date, &PanchangConfig::default()).rashi_index
}

/// Rashi for a date.
pub fn rashi_for_date(date: NaiveDate) -> Rashi {
    Rashi::from_index(calculate_rashi(date))
}
