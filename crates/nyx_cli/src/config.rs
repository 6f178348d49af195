//! Optional TOML settings file.
//!
//! ```toml
//! [lunar]
//! synodic_month_days = 29.53058867
//! reference_new_moon_jd = 2451550.1
//!
//! [panchang]
//! nakshatra_epoch = "1900-01-01"
//! sidereal_month_days = 27.321661
//! tithi_epoch = "2000-01-06"
//! tithi_month_days = 29.530588853
//! ayanamsa_deg = 24.1
//! tropical_year_days = 365.25
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

use nyx_lunar::LunarConfig;
use nyx_time::{julian_day_number, parse_date};
use nyx_vedic_base::PanchangConfig;
use serde::Deserialize;
use tracing::debug;

/// Errors from reading or validating the settings file.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// File could not be read.
    Io(String),
    /// File is not valid TOML or has unknown keys.
    Parse(String),
    /// A value parsed but is unusable (e.g. a non-positive cycle length).
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Invalid(msg) => write!(f, "invalid config value: {msg}"),
        }
    }
}

impl Error for ConfigError {}

/// Calculator constants after applying the settings file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Settings {
    pub lunar: LunarConfig,
    pub panchang: PanchangConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootToml {
    #[serde(default)]
    lunar: Option<LunarToml>,
    #[serde(default)]
    panchang: Option<PanchangToml>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LunarToml {
    synodic_month_days: Option<f64>,
    reference_new_moon_jd: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PanchangToml {
    nakshatra_epoch: Option<String>,
    sidereal_month_days: Option<f64>,
    tithi_epoch: Option<String>,
    tithi_month_days: Option<f64>,
    ayanamsa_deg: Option<f64>,
    tropical_year_days: Option<f64>,
}

fn positive(key: &str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Invalid(format!("{key} must be positive, got {value}")))
    }
}

fn epoch_jdn(key: &str, text: &str) -> Result<i64, ConfigError> {
    parse_date(text)
        .map(julian_day_number)
        .map_err(|e| ConfigError::Invalid(format!("{key}: {e}")))
}

/// Parse settings from TOML text.
pub fn parse_settings(text: &str) -> Result<Settings, ConfigError> {
    let root: RootToml = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
    let mut settings = Settings::default();

    if let Some(lunar) = root.lunar {
        if let Some(v) = lunar.synodic_month_days {
            settings.lunar.synodic_month_days = positive("lunar.synodic_month_days", v)?;
        }
        if let Some(v) = lunar.reference_new_moon_jd {
            settings.lunar.reference_new_moon_jd = v;
        }
    }

    if let Some(p) = root.panchang {
        let c = &mut settings.panchang;
        if let Some(s) = p.nakshatra_epoch.as_deref() {
            c.nakshatra_epoch_jdn = epoch_jdn("panchang.nakshatra_epoch", s)?;
        }
        if let Some(v) = p.sidereal_month_days {
            c.sidereal_month_days = positive("panchang.sidereal_month_days", v)?;
        }
        if let Some(s) = p.tithi_epoch.as_deref() {
            c.tithi_epoch_jdn = epoch_jdn("panchang.tithi_epoch", s)?;
        }
        if let Some(v) = p.tithi_month_days {
            c.tithi_month_days = positive("panchang.tithi_month_days", v)?;
        }
        if let Some(v) = p.ayanamsa_deg {
            c.ayanamsa_deg = v;
        }
        if let Some(v) = p.tropical_year_days {
            c.tropical_year_days = positive("panchang.tropical_year_days", v)?;
        }
    }

    Ok(settings)
}

/// Read and parse a settings file.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let text = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
    let settings = parse_settings(&text)?;
    debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(parse_settings("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_tables_keep_defaults() {
        let s = parse_settings("[panchang]\nayanamsa_deg = 23.85\n").unwrap();
        assert!((s.panchang.ayanamsa_deg - 23.85).abs() < 1e-12);
        assert_eq!(s.panchang.tithi_epoch_jdn, PanchangConfig::default().tithi_epoch_jdn);
        assert_eq!(s.lunar, LunarConfig::default());
    }

    #[test]
    fn epochs_are_dates() {
        let s = parse_settings("[panchang]\nnakshatra_epoch = \"2000-01-01\"\n").unwrap();
        assert_eq!(s.panchang.nakshatra_epoch_jdn, 2_451_545);
    }

    #[test]
    fn lunar_overrides() {
        let s = parse_settings("[lunar]\nsynodic_month_days = 29.5\n").unwrap();
        assert!((s.lunar.synodic_month_days - 29.5).abs() < 1e-12);
        assert!((s.lunar.reference_new_moon_jd - 2_451_550.1).abs() < 1e-9);
    }

    #[test]
    fn unknown_key_rejected() {
        let err = parse_settings("[lunar]\nsynodic = 29.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn zero_cycle_rejected() {
        let err = parse_settings("[panchang]\ntithi_month_days = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    }

    #[test]
    fn bad_epoch_rejected() {
        let err = parse_settings("[panchang]\ntithi_epoch = \"06/01/2000\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_settings(Path::new("/nonexistent/nyx.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
