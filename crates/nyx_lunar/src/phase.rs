//! Moon age, illumination and phase angle.
//!
//! The date is converted to a Julian Day, measured against a reference new
//! moon near January 2000, and folded by one mean synodic month. The
//! fractional lunation is taken by truncation, so dates before the reference
//! produce a negative age that is lifted back by one month.

use chrono::NaiveDate;
use nyx_time::julian_day;
use tracing::trace;

use crate::bucket::{PhaseBucket, phase_bucket};

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_67;

/// Julian Day of the reference new moon (2000-01-06 ~14:24 UT).
pub const REFERENCE_NEW_MOON_JD: f64 = 2_451_550.1;

/// Calibration constants for the moon-phase calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarConfig {
    /// Mean synodic month in days. Default: 29.53058867.
    pub synodic_month_days: f64,
    /// Julian Day of a known new moon. Default: 2451550.1.
    pub reference_new_moon_jd: f64,
}

impl Default for LunarConfig {
    fn default() -> Self {
        Self {
            synodic_month_days: SYNODIC_MONTH_DAYS,
            reference_new_moon_jd: REFERENCE_NEW_MOON_JD,
        }
    }
}

impl LunarConfig {
    /// Moon age in days for a Julian Day, in [0, synodic month).
    pub fn age_at_jd(&self, jd: f64) -> f64 {
        let days_since_new = jd - self.reference_new_moon_jd;
        let lunations = days_since_new / self.synodic_month_days;
        let age = lunations.fract() * self.synodic_month_days;
        if age < 0.0 {
            age + self.synodic_month_days
        } else {
            age
        }
    }
}

/// Moon phase for one date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MoonPhase {
    /// Days since the most recent mean new moon, [0, synodic month).
    pub age: f64,
    /// Illuminated fraction of the disc in percent, [0, 100].
    pub illumination: f64,
    /// Phase angle in degrees, [0, 360).
    pub phase_angle: f64,
}

impl MoonPhase {
    /// Derive illumination and phase angle from an age in days.
    ///
    /// `illumination = (1 - cos(2π·age/month)) / 2 · 100`,
    /// `phase_angle = age/month · 360`.
    pub fn from_age(age: f64, synodic_month_days: f64) -> Self {
        let fraction = age / synodic_month_days;
        let illumination = (1.0 - (2.0 * std::f64::consts::PI * fraction).cos()) / 2.0 * 100.0;
        Self {
            age,
            illumination,
            phase_angle: fraction * 360.0,
        }
    }

    /// Display precision: age and phase angle to 2 decimals, illumination to 1.
    ///
    /// An angle that rounds up to 360.00 is reported as 0.00.
    pub fn rounded(self) -> Self {
        Self {
            age: round_to(self.age, 2),
            illumination: round_to(self.illumination, 1),
            phase_angle: round_to(self.phase_angle, 2) % 360.0,
        }
    }

    /// Phase bucket for this phase's age.
    pub fn bucket(&self) -> PhaseBucket {
        phase_bucket(self.age)
    }
}

/// Round to a fixed number of decimal places (half away from zero).
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Unrounded moon phase for a date.
pub fn moon_phase_exact(date: NaiveDate, config: &LunarConfig) -> MoonPhase {
    let jd = julian_day(date);
    let age = config.age_at_jd(jd);
    trace!(%date, jd, age, "moon age");
    MoonPhase::from_age(age, config.synodic_month_days)
}

/// Display-rounded moon phase for a date with explicit constants.
pub fn moon_phase_with(date: NaiveDate, config: &LunarConfig) -> MoonPhase {
    moon_phase_exact(date, config).rounded()
}

/// Display-rounded moon phase for a date with the default constants.
pub fn moon_phase(date: NaiveDate) -> MoonPhase {
    moon_phase_with(date, &LunarConfig::default())
}
