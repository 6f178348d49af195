//! Eight-way phase buckets used to pick the displayed moon image.
//!
//! The thresholds are empirical calibration points on the age axis, not
//! fractions recomputed from the month length.

/// Named moon phase bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PhaseBucket {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    ThirdQuarter,
    WaningCrescent,
}

/// All 8 buckets in waxing-to-waning order.
pub const ALL_PHASE_BUCKETS: [PhaseBucket; 8] = [
    PhaseBucket::NewMoon,
    PhaseBucket::WaxingCrescent,
    PhaseBucket::FirstQuarter,
    PhaseBucket::WaxingGibbous,
    PhaseBucket::FullMoon,
    PhaseBucket::WaningGibbous,
    PhaseBucket::ThirdQuarter,
    PhaseBucket::WaningCrescent,
];

/// Upper (exclusive) age bound of each bucket, first match wins.
/// Ages at or past the last bound wrap back to the new moon.
const AGE_LADDER: [(f64, PhaseBucket); 8] = [
    (1.0, PhaseBucket::NewMoon),
    (7.4, PhaseBucket::WaxingCrescent),
    (8.9, PhaseBucket::FirstQuarter),
    (14.8, PhaseBucket::WaxingGibbous),
    (15.8, PhaseBucket::FullMoon),
    (21.1, PhaseBucket::WaningGibbous),
    (22.1, PhaseBucket::ThirdQuarter),
    (28.0, PhaseBucket::WaningCrescent),
];

impl PhaseBucket {
    /// Snake-case key (`new_moon`, `waxing_crescent`, ...).
    pub const fn key(self) -> &'static str {
        match self {
            Self::NewMoon => "new_moon",
            Self::WaxingCrescent => "waxing_crescent",
            Self::FirstQuarter => "first_quarter",
            Self::WaxingGibbous => "waxing_gibbous",
            Self::FullMoon => "full_moon",
            Self::WaningGibbous => "waning_gibbous",
            Self::ThirdQuarter => "third_quarter",
            Self::WaningCrescent => "waning_crescent",
        }
    }

    /// Title-case caption.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::ThirdQuarter => "Third Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// File name of the image asset for this bucket.
    ///
    /// `first_quater.png` is spelled the way the shipped asset is named.
    pub const fn asset_file(self) -> &'static str {
        match self {
            Self::NewMoon => "new_moon.png",
            Self::WaxingCrescent => "waxing_crescent.png",
            Self::FirstQuarter => "first_quater.png",
            Self::WaxingGibbous => "waxing_gibbous.png",
            Self::FullMoon => "full_moon.png",
            Self::WaningGibbous => "waning_gibbous.png",
            Self::ThirdQuarter => "third_quarter.png",
            Self::WaningCrescent => "waning_crescent.png",
        }
    }
}

impl std::fmt::Display for PhaseBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Select the phase bucket for a moon age in days.
pub fn phase_bucket(age_days: f64) -> PhaseBucket {
    AGE_LADDER
        .iter()
        .find(|(bound, _)| age_days < *bound)
        .map_or(PhaseBucket::NewMoon, |&(_, bucket)| bucket)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_and_assets_unique() {
        for (i, a) in ALL_PHASE_BUCKETS.iter().enumerate() {
            for b in &ALL_PHASE_BUCKETS[i + 1..] {
                assert_ne!(a.key(), b.key());
                assert_ne!(a.asset_file(), b.asset_file());
            }
        }
    }

    #[test]
    fn boundaries_strict_less_than() {
        assert_eq!(phase_bucket(0.999), PhaseBucket::NewMoon);
        assert_eq!(phase_bucket(1.0), PhaseBucket::WaxingCrescent);
        assert_eq!(phase_bucket(7.4), PhaseBucket::FirstQuarter);
        assert_eq!(phase_bucket(8.9), PhaseBucket::WaxingGibbous);
        assert_eq!(phase_bucket(14.8), PhaseBucket::FullMoon);
        assert_eq!(phase_bucket(15.8), PhaseBucket::WaningGibbous);
        assert_eq!(phase_bucket(21.1), PhaseBucket::ThirdQuarter);
        assert_eq!(phase_bucket(22.1), PhaseBucket::WaningCrescent);
        assert_eq!(phase_bucket(28.0), PhaseBucket::NewMoon);
    }

    #[test]
    fn just_below_each_bound() {
        let expected = [
            (0.5, PhaseBucket::NewMoon),
            (7.39, PhaseBucket::WaxingCrescent),
            (8.89, PhaseBucket::FirstQuarter),
            (14.79, PhaseBucket::WaxingGibbous),
            (15.79, PhaseBucket::FullMoon),
            (21.09, PhaseBucket::WaningGibbous),
            (22.09, PhaseBucket::ThirdQuarter),
            (27.99, PhaseBucket::WaningCrescent),
        ];
        for (age, bucket) in expected {
            assert_eq!(phase_bucket(age), bucket, "age {age}");
        }
    }

    #[test]
    fn end_of_month_wraps_to_new() {
        assert_eq!(phase_bucket(29.5), PhaseBucket::NewMoon);
    }

    #[test]
    fn negative_age_is_new() {
        assert_eq!(phase_bucket(-0.1), PhaseBucket::NewMoon);
    }

    #[test]
    fn nan_falls_through_to_new() {
        assert_eq!(phase_bucket(f64::NAN), PhaseBucket::NewMoon);
    }

    #[test]
    fn asset_file_names() {
        assert_eq!(PhaseBucket::FirstQuarter.asset_file(), "first_quater.png");
        assert_eq!(PhaseBucket::FullMoon.asset_file(), "full_moon.png");
        assert_eq!(PhaseBucket::WaningCrescent.to_string(), "Waning Crescent");
    }
}
