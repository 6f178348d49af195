//! Western zodiac card for a date's rashi.
//!
//! Pairs the sidereal rashi with its English sign name, glyph, ruler,
//! element and a long-form description.

use chrono::NaiveDate;

use crate::config::PanchangConfig;
use crate::element::Element;
use crate::graha::Graha;
use crate::rashi::{Rashi, rashi_info_with};

/// Long-form description of a sign.
pub const fn zodiac_description(rashi: Rashi) -> &'static str {
    match rashi {
        Rashi::Mesha => "Aries bursts onto the cosmic stage like a comet tearing through the void, its crimson trail igniting the night. A warrior born of fire, Aries embodies raw courage and unyielding ambition, their heart a furnace that fuels daring quests. They charge into life's battles with fearless abandon, their spirit untamed, their eyes alight with the thrill of conquest. Impulsive and bold, they are the spark of creation, the first breath of spring, forging paths where none dare tread. Yet, their fiery temper can flare like a supernova. Aries is the leader who carves destiny with a blade of passion, forever chasing the horizon of endless possibility.",
        Rashi::Vrishabha => "Taurus stands as an ancient oak rooted deep in the earth's core, its branches cradling the stars. Steadfast and sensual, they are the guardians of stability, their presence a sanctuary amidst the cosmos's chaos. Taurus delights in life's pleasures—velvet petals, rich feasts, and the soft glow of moonlight—savoring each moment like a sacred ritual. Their stubborn resolve is a mountain unmoved, yet their loyalty flows like a river, eternal and unwavering for those they hold dear. With quiet determination, Taurus builds empires of enduring beauty, their soul a tapestry of patience and strength, grounded in the heartbeat of the earth.",
        Rashi::Mithuna => "Gemini flits through the heavens like a mischievous breeze, their words weaving tales that dance among the constellations. Quick-witted and versatile, they are the zodiac's communicators, their mind a kaleidoscope of ideas that shimmer like fireflies in a midnight sky. Gemini's duality is their magic—a twin spirit that shifts between light and shadow, curiosity and charm. They are the eternal seekers, chasing knowledge with restless grace, their laughter echoing through the cosmos. Yet, their fleeting nature can scatter their focus like stardust. Gemini is the storyteller who spins life's narrative, connecting the universe with threads of wit and wonder.",
        Rashi::Karka => "Cancer emerges from the moon's silvery embrace, a guardian cloaked in the tides of emotion. Their heart is an ocean, deep and intuitive, reflecting the lunar phases that guide their soul. Nurturing and protective, they weave a cocoon of love for their chosen ones, their empathy a beacon in the night. Cancer's sensitivity is their strength, feeling the world's joys and sorrows as if they were their own. Yet, like the moon, they can retreat into their shell, guarding their tender core. They are the keepers of memory, their home a sacred haven where the heart finds solace under the celestial glow.",
        Rashi::Simha => "Leo strides across the heavens like a lion bathed in sunlight, their mane ablaze with regal fire. Charismatic and bold, they are the zodiac's kings and queens, commanding attention with a radiant presence that outshines the stars. Leo's heart burns with passion and creativity, their confidence a crown forged in the furnace of self-belief. They thrive in the spotlight, weaving drama and warmth into every moment, yet their pride can roar like a tempest. Generous and loyal, Leo rules with a heart of gold, inspiring others to bask in their light, a sovereign whose kingdom is built on love and courage.",
        Rashi::Kanya => "Virgo moves through the cosmos with the precision of a master craftsman, their hands shaping order from chaos. Analytical and meticulous, they are the zodiac's artisans, their mind a constellation of details aligned in perfect harmony. Virgo's devotion to service is their art, tending to the world with quiet grace and unwavering diligence. Their pursuit of perfection is a pilgrimage, yet their self-criticism can cast shadows on their brilliance. Practical and nurturing, Virgo is the healer who mends the universe's fractures, their soul a garden where wisdom and kindness bloom under starlight.",
        Rashi::Tula => "Libra glides through the heavens like a celestial dancer, their steps weaving balance into the cosmic waltz. Charmed by beauty and diplomacy, they are the zodiac's peacemakers, their heart a scale that seeks harmony in every encounter. Libra's elegance is their magic, turning conflict into art with a smile that rivals the dawn. They crave connection, their soul alight with the pursuit of love and justice, yet indecision can sway their delicate balance. Refined and gracious, Libra is the muse who paints the universe with colors of fairness, their presence a symphony of grace under the stars.",
        Rashi::Vrishchika => "Scorpio slinks through the cosmos like a phantom, their eyes piercing the veil of the universe's secrets. Intense and enigmatic, they are the zodiac's alchemists, transforming pain into power with a will as unyielding as obsidian. Scorpio's passion burns like a hidden flame, their loyalty fierce and their intuition a compass through the shadows. They embrace life's depths, unafraid of its mysteries, yet their secrecy can cloak their heart in darkness. With magnetic allure, Scorpio is the sorcerer who reshapes destiny, their soul a crucible where transformation ignites under the moon's gaze.",
        Rashi::Dhanus => "Sagittarius gallops across the heavens like an archer astride a comet, their arrow aimed at the farthest stars. Adventurous and free-spirited, they are the zodiac's explorers, their heart a map of uncharted horizons. Sagittarius seeks truth with a philosopher's zeal, their optimism a flame that lights even the darkest paths. Their restless spirit chases freedom, yet their bluntness can sting like an arrow's tip. With boundless curiosity, Sagittarius is the wanderer who roams the cosmos, their laughter a beacon that inspires others to dream beyond the constellations.",
        Rashi::Makara => "Capricorn climbs the celestial peaks like a goat scaling the cliffs of eternity, their gaze fixed on the summit of ambition. Disciplined and resolute, they are the zodiac's architects, building legacies with the patience of stone. Capricorn's pragmatism is their crown, their work ethic a foundation that withstands time's tides. They carry the weight of responsibility with stoic grace, yet their guarded heart can feel the chill of isolation. With unwavering determination, Capricorn is the sovereign who carves empires from the cosmos, their soul a monument to enduring strength.",
        Rashi::Kumbha => "Aquarius soars through the heavens like a starship, their mind a galaxy of revolutionary ideas. Eccentric and altruistic, they are the zodiac's visionaries, their heart pulsing with dreams of a better world. Aquarius wields intellect like a lightning bolt, their independence a rebellion against the mundane. They champion humanity with unwavering ideals, yet their detachment can cast them adrift in the cosmos. With a spirit that defies convention, Aquarius is the innovator who reshapes the stars, their vision a constellation of hope and progress.",
        Rashi::Meena => "Pisces drifts through the cosmos like a shimmering tide, their soul an ocean of dreams and intuition. Compassionate and ethereal, they are the zodiac's mystics, their heart attuned to the universe's unspoken melodies. Pisces weaves empathy into every connection, their imagination a canvas where reality and fantasy blur. They feel the world's currents deeply, yet their sensitivity can pull them into the depths. With boundless creativity, Pisces is the dreamer who sails the celestial seas, their spirit a lighthouse guiding lost souls through the cosmic mist.",
    }
}

/// Everything the zodiac panel shows for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ZodiacCard {
    pub rashi: Rashi,
    /// English sign name (e.g. "Aries").
    pub english_name: &'static str,
    /// Unicode sign glyph.
    pub glyph: &'static str,
    pub ruler: Graha,
    pub element: Element,
    pub description: &'static str,
}

impl ZodiacCard {
    /// Card for a rashi.
    pub const fn for_rashi(rashi: Rashi) -> Self {
        Self {
            rashi,
            english_name: rashi.western_name(),
            glyph: rashi.glyph(),
            ruler: rashi.ruler(),
            element: rashi.element(),
            description: zodiac_description(rashi),
        }
    }
}

/// Zodiac card for a date with explicit constants.
pub fn zodiac_with(date: NaiveDate, config: &PanchangConfig) -> ZodiacCard {
    ZodiacCard::for_rashi(rashi_info_with(date, config).rashi)
}

/// Zodiac card for a date.
pub fn zodiac_for_date(date: NaiveDate) -> ZodiacCard {
    zodiac_with(date, &PanchangConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::ALL_RASHIS;

    #[test]
    fn every_description_names_its_sign() {
        for r in ALL_RASHIS {
            let desc = zodiac_description(r);
            assert!(
                desc.starts_with(r.western_name()),
                "{} description does not open with its name",
                r.western_name()
            );
        }
    }

    #[test]
    fn card_fields_follow_rashi() {
        let card = ZodiacCard::for_rashi(Rashi::Simha);
        assert_eq!(card.english_name, "Leo");
        assert_eq!(card.glyph, "♌");
        assert_eq!(card.ruler, Graha::Surya);
        assert_eq!(card.element, Element::Fire);
    }

    #[test]
    fn new_year_card_is_pisces() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(zodiac_for_date(date).english_name, "Pisces");
    }
}
