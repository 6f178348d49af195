//! Classical elements (tattva) attached to rashis and nakshatras.

/// The five classical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
    Ether,
}

/// Rashi elements cycle Fire, Earth, Air, Water from Mesha onward.
pub(crate) const RASHI_ELEMENT_CYCLE: [Element; 4] =
    [Element::Fire, Element::Earth, Element::Air, Element::Water];

impl Element {
    /// English name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
            Self::Ether => "Ether",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
