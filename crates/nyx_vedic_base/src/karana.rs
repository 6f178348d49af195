//! Karana from a tithi value.
//!
//! Two consecutive tithis share one karana position, cycling through the
//! seven movable karanas.

/// The 7 movable karanas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanij,
    Vishti,
}

/// All 7 karanas in cycle order.
pub const ALL_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanij,
    Karana::Vishti,
];

impl Karana {
    /// Sanskrit name of the karana.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanij => "Vanij",
            Self::Vishti => "Vishti",
        }
    }
}

/// Karana for a tithi value: `(tithi / 2) mod 7`.
pub const fn karana_from_tithi(tithi: u8) -> Karana {
    ALL_KARANAS[((tithi / 2) % 7) as usize]
}

/// Karana name for a tithi value.
pub fn calculate_karana(tithi: u8) -> &'static str {
    karana_from_tithi(tithi).name()
}
