//! Calibration constants for the panchang calculators.

use crate::nakshatra::{NAKSHATRA_EPOCH_JDN, SIDEREAL_MONTH_DAYS};
use crate::rashi::{AYANAMSA_DEG, TROPICAL_YEAR_DAYS};
use crate::tithi::{TITHI_EPOCH_JDN, TITHI_SYNODIC_MONTH_DAYS};

/// Epochs and cycle lengths used by the date-based calculators.
///
/// Epochs are Julian Day Numbers so that day differences stay whole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangConfig {
    /// Day on which the nakshatra cycle starts at Ashwini. Default: 1900-01-01.
    pub nakshatra_epoch_jdn: i64,
    /// Mean sidereal month in days.
    pub sidereal_month_days: f64,
    /// Reference new moon for tithi counting. Default: 2000-01-06.
    pub tithi_epoch_jdn: i64,
    /// Mean synodic month in days used for tithi.
    pub tithi_month_days: f64,
    /// Fixed ayanamsa in degrees.
    pub ayanamsa_deg: f64,
    /// Year length used to turn day-of-year into solar longitude.
    pub tropical_year_days: f64,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            nakshatra_epoch_jdn: NAKSHATRA_EPOCH_JDN,
            sidereal_month_days: SIDEREAL_MONTH_DAYS,
            tithi_epoch_jdn: TITHI_EPOCH_JDN,
            tithi_month_days: TITHI_SYNODIC_MONTH_DAYS,
            ayanamsa_deg: AYANAMSA_DEG,
            tropical_year_days: TROPICAL_YEAR_DAYS,
        }
    }
}
