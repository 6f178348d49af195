//! Shared utility functions for the panchang calculators.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Position of `days` within a repeating cycle, as one of `slots` equal slots.
///
/// The remainder is taken with a non-negative sign before scaling, so days
/// before the cycle's epoch still land in `0..slots`. The scaled position is
/// truncated, then reduced by `slots` once more to absorb a remainder that
/// rounds up to the full cycle length.
pub fn cycle_slot(days: f64, cycle_days: f64, slots: u8) -> u8 {
    let position = days.rem_euclid(cycle_days) / cycle_days * slots as f64;
    (position.trunc() as u32 % slots as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn cycle_slot_at_epoch() {
        assert_eq!(cycle_slot(0.0, 29.5, 30), 0);
    }

    #[test]
    fn cycle_slot_mid_cycle() {
        // 15 of 30 days → halfway → slot 15 of 30
        assert_eq!(cycle_slot(15.0, 30.0, 30), 15);
        assert_eq!(cycle_slot(14.99, 30.0, 30), 14);
    }

    #[test]
    fn cycle_slot_negative_days() {
        // One day before the epoch is the last slot
        assert_eq!(cycle_slot(-1.0, 30.0, 30), 29);
        assert_eq!(cycle_slot(-31.0, 30.0, 30), 29);
    }

    #[test]
    fn cycle_slot_full_cycle_wraps() {
        assert_eq!(cycle_slot(30.0, 30.0, 30), 0);
    }
}
