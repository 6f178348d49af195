//! Text and JSON renderings of calculator results.
//!
//! JSON output is built from the library result types' `Serialize` impls;
//! the report structs here only attach the table data a reader needs next
//! to them (display names, rulers, asset files).

use chrono::NaiveDate;
use nyx_lunar::{ModelLighting, MoonPhase, PhaseBucket, model_lighting};
use nyx_vedic_base::{
    Element, Graha, Karana, Nakshatra, PanchangInfo, RashiInfo, Ritu, TithiInfo, Vaar, YogaInfo,
    ZodiacCard,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BucketReport {
    /// Serialized as the snake-case key.
    pub key: PhaseBucket,
    pub name: &'static str,
    pub asset: &'static str,
}

impl BucketReport {
    pub fn new(bucket: PhaseBucket) -> Self {
        Self {
            key: bucket,
            name: bucket.display_name(),
            asset: bucket.asset_file(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MoonReport {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub phase: MoonPhase,
    pub bucket: BucketReport,
    pub lighting: ModelLighting,
}

impl MoonReport {
    pub fn new(date: NaiveDate, phase: MoonPhase) -> Self {
        Self {
            date,
            phase,
            bucket: BucketReport::new(phase.bucket()),
            lighting: model_lighting(phase.phase_angle),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NakshatraReport {
    pub nakshatra: Nakshatra,
    pub index: u8,
    pub name: &'static str,
    pub ruler: Graha,
    pub element: Element,
    pub symbol: &'static str,
}

impl NakshatraReport {
    pub fn new(n: Nakshatra) -> Self {
        Self {
            nakshatra: n,
            index: n.index(),
            name: n.name(),
            ruler: n.ruler(),
            element: n.element(),
            symbol: n.symbol(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RashiReport {
    #[serde(flatten)]
    pub info: RashiInfo,
    pub name: &'static str,
    pub english: &'static str,
    pub glyph: &'static str,
    pub ruler: Graha,
    pub element: Element,
}

impl RashiReport {
    pub fn new(info: RashiInfo) -> Self {
        let r = info.rashi;
        Self {
            info,
            name: r.name(),
            english: r.western_name(),
            glyph: r.glyph(),
            ruler: r.ruler(),
            element: r.element(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VaraReport {
    pub date: NaiveDate,
    pub vaar: Vaar,
    pub english: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct YogaReport {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub yoga: YogaInfo,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct KaranaReport {
    pub tithi: u8,
    pub karana: Karana,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeasonReport {
    pub date: NaiveDate,
    pub ritu: Ritu,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DashboardReport {
    pub moon: MoonReport,
    pub panchang: PanchangInfo,
    pub zodiac: ZodiacCard,
}

pub fn moon_text(date: NaiveDate, phase: &MoonPhase) -> String {
    let bucket = phase.bucket();
    let light = model_lighting(phase.phase_angle);
    format!(
        "Moon on {date}\n\
         Age:          {:.2} days\n\
         Illumination: {:.1}%\n\
         Phase angle:  {:.2} deg\n\
         Phase:        {bucket} ({})\n\
         Model:        rotation {:.2} deg, sun at ({:.4}, {:.4})",
        phase.age,
        phase.illumination,
        phase.phase_angle,
        bucket.asset_file(),
        light.rotation_y_deg,
        light.sun_x,
        light.sun_z,
    )
}

pub fn nakshatra_text(n: Nakshatra) -> String {
    let ruler = n.ruler();
    format!(
        "{} (index {}) - ruler {} ({}), element {}, symbol {}",
        n.name(),
        n.index(),
        ruler.name(),
        ruler.english_name(),
        n.element(),
        n.symbol()
    )
}

pub fn rashi_text(info: &RashiInfo) -> String {
    let r = info.rashi;
    let ruler = r.ruler();
    format!(
        "{} ({}) {} (index {}) - ruler {} ({}), element {}, sidereal longitude {:.4} deg",
        r.name(),
        r.western_name(),
        r.glyph(),
        info.rashi_index,
        ruler.name(),
        ruler.english_name(),
        r.element(),
        info.sidereal_longitude_deg
    )
}

pub fn tithi_text(t: &TithiInfo) -> String {
    format!(
        "{} - {}, day {} (tithi {})",
        t.name,
        t.paksha.name(),
        t.tithi_in_paksha,
        t.tithi_index
    )
}

pub fn panchang_text(p: &PanchangInfo) -> String {
    format!(
        "Panchang for {}\n\
         Nakshatra: {}\n\
         Rashi:     {}\n\
         Tithi:     {}\n\
         Vara:      {} ({})\n\
         Yoga:      {}\n\
         Karana:    {}\n\
         Season:    {}",
        p.date,
        nakshatra_text(p.nakshatra),
        rashi_text(&p.rashi),
        tithi_text(&p.tithi),
        p.vaar.name(),
        p.vaar.english_name(),
        p.yoga.name,
        p.karana.name(),
        p.ritu.name(),
    )
}

pub fn zodiac_text(card: &ZodiacCard) -> String {
    format!(
        "{} {}\n\
         Hindu name: {}\n\
         Ruler:      {}\n\
         Element:    {}\n\n\
         {}",
        card.english_name,
        card.glyph,
        card.rashi.name(),
        card.ruler.english_name(),
        card.element,
        card.description
    )
}

pub fn dashboard_text(report: &DashboardReport) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        moon_text(report.moon.date, &report.moon.phase),
        panchang_text(&report.panchang),
        zodiac_text(&report.zodiac)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nyx_lunar::moon_phase;
    use nyx_vedic_base::{PanchangConfig, panchang_for_date, rashi_info_with, zodiac_for_date};
    use serde_json::Value;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn to_json<T: Serialize>(value: &T) -> Value {
        serde_json::to_value(value).unwrap()
    }

    #[test]
    fn moon_json_flattens_phase() {
        let date = d(2000, 1, 7);
        let v = to_json(&MoonReport::new(date, moon_phase(date)));
        assert_eq!(v["date"], "2000-01-07");
        assert_eq!(v["age"], 0.4);
        assert_eq!(v["illumination"], 0.2);
        assert_eq!(v["bucket"]["key"], "new_moon");
        assert_eq!(v["bucket"]["asset"], "new_moon.png");
        assert!(v["lighting"]["sun_x"].is_number());
    }

    #[test]
    fn moon_text_mentions_phase() {
        let date = d(2000, 1, 7);
        let text = moon_text(date, &moon_phase(date));
        assert!(text.contains("New Moon"), "{text}");
        assert!(text.contains("0.40 days"), "{text}");
    }

    #[test]
    fn panchang_json_follows_result_type() {
        let v = to_json(&panchang_for_date(d(2024, 1, 7)));
        assert_eq!(v["date"], "2024-01-07");
        assert_eq!(v["vaar"], "Ravivaar");
        assert_eq!(v["ritu"], "Shishir");
        assert_eq!(v["rashi"]["rashi"], "Meena");
        assert_eq!(v["rashi"]["rashi_index"], 11);
        assert!(v["tithi"]["paksha"].is_string());
    }

    #[test]
    fn rashi_report_adds_table_data() {
        let info = rashi_info_with(d(2024, 1, 7), &PanchangConfig::default());
        let v = to_json(&RashiReport::new(info));
        assert_eq!(v["rashi"], "Meena");
        assert_eq!(v["english"], "Pisces");
        assert_eq!(v["ruler"], "Guru");
        assert_eq!(v["element"], "Water");
    }

    #[test]
    fn nakshatra_report_fields() {
        let v = to_json(&NakshatraReport::new(Nakshatra::Ashwini));
        assert_eq!(v["index"], 0);
        assert_eq!(v["ruler"], "Ketu");
        assert_eq!(v["symbol"], "Horse's Head");
    }

    #[test]
    fn tithi_text_format() {
        let p = panchang_for_date(d(2000, 1, 6));
        assert_eq!(tithi_text(&p.tithi), "Pratipada - Shukla Paksha, day 1 (tithi 0)");
    }

    #[test]
    fn dashboard_has_three_sections() {
        let date = d(2024, 7, 15);
        let report = DashboardReport {
            moon: MoonReport::new(date, moon_phase(date)),
            panchang: panchang_for_date(date),
            zodiac: zodiac_for_date(date),
        };
        let v = to_json(&report);
        assert!(v["moon"].is_object());
        assert!(v["panchang"].is_object());
        assert_eq!(v["zodiac"]["english_name"], "Virgo");
        assert!(dashboard_text(&report).contains("Virgo"));
    }
}
