//! Vedic planet (graha) enum and the lordship of rashis and nakshatras.
//!
//! Each rashi and each nakshatra has a ruling graha; both assignments are
//! universal Vedic convention.

use crate::nakshatra::Nakshatra;
use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// Nakshatra lords repeat in this 9-graha order from Ashwini onward.
pub const NAKSHATRA_LORD_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha (used as the "ruler" label).
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrishchika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanus/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrishchika => Graha::Mangal,
        Rashi::Dhanus => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Get the planetary lord of a nakshatra.
pub const fn nakshatra_lord(nakshatra: Nakshatra) -> Graha {
    NAKSHATRA_LORD_SEQUENCE[(nakshatra.index() % 9) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::ALL_NAKSHATRAS;
    use crate::rashi::ALL_RASHIS;

    #[test]
    fn lord_sequence_covers_all_nine() {
        for (i, g) in NAKSHATRA_LORD_SEQUENCE.iter().enumerate() {
            assert!(!NAKSHATRA_LORD_SEQUENCE[i + 1..].contains(g), "{g:?} repeats");
        }
    }

    #[test]
    fn graha_names_nonempty() {
        for g in NAKSHATRA_LORD_SEQUENCE {
            assert!(!g.name().is_empty());
            assert!(!g.english_name().is_empty());
        }
    }

    #[test]
    fn rashi_lordship_dual_ruled() {
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrishchika), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrishabha), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Tula), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Mithuna), Graha::Buddh);
        assert_eq!(rashi_lord(Rashi::Kanya), Graha::Buddh);
        assert_eq!(rashi_lord(Rashi::Dhanus), Graha::Guru);
        assert_eq!(rashi_lord(Rashi::Meena), Graha::Guru);
        assert_eq!(rashi_lord(Rashi::Makara), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
    }

    #[test]
    fn luminaries_rule_one_sign_each() {
        let sun = ALL_RASHIS.iter().filter(|r| rashi_lord(**r) == Graha::Surya).count();
        let moon = ALL_RASHIS.iter().filter(|r| rashi_lord(**r) == Graha::Chandra).count();
        assert_eq!((sun, moon), (1, 1));
    }

    #[test]
    fn nakshatra_lords_cycle_of_nine() {
        assert_eq!(nakshatra_lord(Nakshatra::Ashwini), Graha::Ketu);
        assert_eq!(nakshatra_lord(Nakshatra::Magha), Graha::Ketu);
        assert_eq!(nakshatra_lord(Nakshatra::Mula), Graha::Ketu);
        assert_eq!(nakshatra_lord(Nakshatra::Revati), Graha::Buddh);
        for n in ALL_NAKSHATRAS {
            let third = ALL_NAKSHATRAS[((n.index() + 9) % 27) as usize];
            assert_eq!(nakshatra_lord(n), nakshatra_lord(third));
        }
    }
}
