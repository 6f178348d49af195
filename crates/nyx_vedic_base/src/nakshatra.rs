//! Nakshatra (lunar mansion) from a calendar date.
//!
//! The Moon is assumed to move through the 27 nakshatras uniformly over one
//! mean sidereal month, starting at Ashwini on 1900-01-01. The day count
//! since that epoch is folded by the sidereal month and scaled to 27 slots.

use chrono::NaiveDate;
use nyx_time::days_since_jdn;

use crate::config::PanchangConfig;
use crate::element::Element;
use crate::graha::{Graha, nakshatra_lord};
use crate::util::cycle_slot;

/// Mean sidereal month in days.
pub const SIDEREAL_MONTH_DAYS: f64 = 27.321_661;

/// Julian Day Number of 1900-01-01, taken as the start of Ashwini.
pub const NAKSHATRA_EPOCH_JDN: i64 = 2_415_021;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krittika => 2,
            Self::Rohini => 3,
            Self::Mrigashira => 4,
            Self::Ardra => 5,
            Self::Punarvasu => 6,
            Self::Pushya => 7,
            Self::Ashlesha => 8,
            Self::Magha => 9,
            Self::PurvaPhalguni => 10,
            Self::UttaraPhalguni => 11,
            Self::Hasta => 12,
            Self::Chitra => 13,
            Self::Swati => 14,
            Self::Vishakha => 15,
            Self::Anuradha => 16,
            Self::Jyeshtha => 17,
            Self::Mula => 18,
            Self::PurvaAshadha => 19,
            Self::UttaraAshadha => 20,
            Self::Shravana => 21,
            Self::Dhanishtha => 22,
            Self::Shatabhisha => 23,
            Self::PurvaBhadrapada => 24,
            Self::UttaraBhadrapada => 25,
            Self::Revati => 26,
        }
    }

    /// Ruling graha.
    pub const fn ruler(self) -> Graha {
        nakshatra_lord(self)
    }

    /// Element as listed in the dashboard's nakshatra table.
    pub const fn element(self) -> Element {
        match self {
            Self::Ashwini | Self::Bharani => Element::Earth,
            Self::Krittika => Element::Fire,
            Self::Rohini | Self::Mrigashira => Element::Earth,
            Self::Ardra
            | Self::Punarvasu
            | Self::Pushya
            | Self::Ashlesha
            | Self::Magha
            | Self::PurvaPhalguni => Element::Water,
            Self::UttaraPhalguni => Element::Fire,
            Self::Hasta => Element::Earth,
            Self::Chitra | Self::Swati | Self::Vishakha | Self::Anuradha => Element::Fire,
            Self::Jyeshtha
            | Self::Mula
            | Self::PurvaAshadha
            | Self::UttaraAshadha
            | Self::Shravana => Element::Air,
            Self::Dhanishtha
            | Self::Shatabhisha
            | Self::PurvaBhadrapada
            | Self::UttaraBhadrapada
            | Self::Revati => Element::Ether,
        }
    }

    /// Traditional symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ashwini => "Horse's Head",
            Self::Bharani => "Yoni",
            Self::Krittika => "Razor",
            Self::Rohini => "Bull's Cart",
            Self::Mrigashira => "Deer's Head",
            Self::Ardra => "Teardrop",
            Self::Punarvasu => "Quiver of Arrows",
            Self::Pushya => "Flower",
            Self::Ashlesha => "Serpent",
            Self::Magha => "Throne",
            Self::PurvaPhalguni => "Front Legs of Bed",
            Self::UttaraPhalguni => "Back Legs of Bed",
            Self::Hasta => "Hand",
            Self::Chitra => "Pearl",
            Self::Swati => "Young Shoot of Plant",
            Self::Vishakha => "Triumphal Gateway",
            Self::Anuradha => "Lotus",
            Self::Jyeshtha => "Circular Amulet",
            Self::Mula => "Bunch of Roots",
            Self::PurvaAshadha => "Winnowing Basket",
            Self::UttaraAshadha => "Elephant's Tusk",
            Self::Shravana => "Ear",
            Self::Dhanishtha => "Musical Drum",
            Self::Shatabhisha => "Empty Circle",
            Self::PurvaBhadrapada => "Swords",
            Self::UttaraBhadrapada => "Twin",
            Self::Revati => "Fish",
        }
    }

    /// Nakshatra at a 0-based index, wrapping past Revati.
    pub const fn from_index(index: u8) -> Self {
        ALL_NAKSHATRAS[(index % 27) as usize]
    }
}

/// Nakshatra index for a date with explicit constants.
pub fn nakshatra_index_with(date: NaiveDate, config: &PanchangConfig) -> u8 {
    let days = days_since_jdn(date, config.nakshatra_epoch_jdn);
    cycle_slot(days as f64, config.sidereal_month_days, 27)
}

/// Nakshatra index (0..27) for a date.
pub fn calculate_nakshatra(date: NaiveDate) -> u8 {
    nakshatra_index_with(date, &PanchangConfig::default())
}

/// Nakshatra for a date.
pub fn nakshatra_for_date(date: NaiveDate) -> Nakshatra {
    Nakshatra::from_index(calculate_nakshatra(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn nakshatra_indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
            assert_eq!(Nakshatra::from_index(i as u8), *n);
        }
    }

    #[test]
    fn nakshatra_names_nonempty() {
        for n in ALL_NAKSHATRAS {
            assert!(!n.name().is_empty());
            assert!(!n.symbol().is_empty());
        }
    }

    #[test]
    fn table_spot_checks() {
        assert_eq!(Nakshatra::Ashwini.ruler().english_name(), "Ketu");
        assert_eq!(Nakshatra::Ashwini.element(), Element::Earth);
        assert_eq!(Nakshatra::Ashwini.symbol(), "Horse's Head");
        assert_eq!(Nakshatra::UttaraPhalguni.ruler().english_name(), "Sun");
        assert_eq!(Nakshatra::UttaraPhalguni.element(), Element::Fire);
        assert_eq!(Nakshatra::Shravana.element(), Element::Air);
        assert_eq!(Nakshatra::Revati.ruler().english_name(), "Mercury");
        assert_eq!(Nakshatra::Revati.element(), Element::Ether);
    }

    #[test]
    fn epoch_is_ashwini() {
        assert_eq!(calculate_nakshatra(d(1900, 1, 1)), 0);
        assert_eq!(nakshatra_for_date(d(1900, 1, 1)), Nakshatra::Ashwini);
    }

    #[test]
    fn one_day_advances_about_one_slot() {
        // 27 slots over 27.32 days: day 1 is still slot 0, day 2 is slot 1
        assert_eq!(calculate_nakshatra(d(1900, 1, 2)), 0);
        assert_eq!(calculate_nakshatra(d(1900, 1, 3)), 1);
    }

    #[test]
    fn day_before_epoch_is_revati() {
        assert_eq!(calculate_nakshatra(d(1899, 12, 31)), 26);
    }

    #[test]
    fn custom_epoch() {
        let config = PanchangConfig {
            nakshatra_epoch_jdn: nyx_time::julian_day_number(d(2024, 1, 1)),
            ..PanchangConfig::default()
        };
        assert_eq!(nakshatra_index_with(d(2024, 1, 1), &config), 0);
    }
}
