//! All panchang elements for a date in one call.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::PanchangConfig;
use crate::karana::{Karana, karana_from_tithi};
use crate::nakshatra::{Nakshatra, nakshatra_index_with};
use crate::rashi::{RashiInfo, rashi_info_with};
use crate::ritu::{Ritu, ritu_for_date};
use crate::tithi::{TithiInfo, tithi_index_with};
use crate::vaar::{Vaar, vaar_for_date};
use crate::yoga::{YogaInfo, yoga_for_date};

/// Combined panchang for a date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PanchangInfo {
    pub date: NaiveDate,
    pub nakshatra: Nakshatra,
    pub rashi: RashiInfo,
    pub tithi: TithiInfo,
    pub vaar: Vaar,
    pub yoga: YogaInfo,
    /// Karana derived from the tithi.
    pub karana: Karana,
    pub ritu: Ritu,
}

/// Compute every panchang element with explicit constants.
pub fn panchang_with(date: NaiveDate, config: &PanchangConfig) -> PanchangInfo {
    let nakshatra = Nakshatra::from_index(nakshatra_index_with(date, config));
    let rashi = rashi_info_with(date, config);
    let tithi = TithiInfo::from_index(tithi_index_with(date, config));
    let info = PanchangInfo {
        date,
        nakshatra,
        rashi,
        tithi,
        vaar: vaar_for_date(date),
        yoga: yoga_for_date(date),
        karana: karana_from_tithi(tithi.tithi_index),
        ritu: ritu_for_date(date),
    };
    debug!(
        %date,
        nakshatra = nakshatra.name(),
        rashi = rashi.rashi.name(),
        tithi = tithi.tithi_index,
        "panchang computed"
    );
    info
}

/// Compute every panchang element with the default constants.
pub fn panchang_for_date(date: NaiveDate) -> PanchangInfo {
    panchang_with(date, &PanchangConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{calculate_karana, calculate_nakshatra, calculate_rashi, calculate_tithi};

    #[test]
    fn composite_matches_parts() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 25).unwrap();
        let p = panchang_for_date(date);
        assert_eq!(p.nakshatra.index(), calculate_nakshatra(date));
        assert_eq!(p.rashi.rashi_index, calculate_rashi(date));
        assert_eq!(p.tithi.tithi_index, calculate_tithi(date));
        assert_eq!(p.karana.name(), calculate_karana(p.tithi.tithi_index));
    }

    #[test]
    fn config_flows_through() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let config = PanchangConfig {
            ayanamsa_deg: 0.0,
            ..PanchangConfig::default()
        };
        assert_eq!(panchang_with(date, &config).rashi.rashi_index, 0);
        assert_eq!(panchang_for_date(date).rashi.rashi_index, 11);
    }
}
