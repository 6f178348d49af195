//! Approximate moon phase from a calendar date.
//!
//! This crate provides:
//! - Moon age, illumination and phase angle from a single mean synodic month
//! - The 8-way phase bucket used to pick a display image
//! - Lighting parameters for the rotating 3D moon model
//!
//! All functions are pure. Accuracy is on the order of a day; there is no
//! correction for the Moon's elliptical orbit.

pub mod bucket;
pub mod lighting;
pub mod phase;

pub use bucket::{ALL_PHASE_BUCKETS, PhaseBucket, phase_bucket};
pub use lighting::{MODEL_LIGHT_DISTANCE, ModelLighting, model_lighting};
pub use phase::{
    LunarConfig, MoonPhase, REFERENCE_NEW_MOON_JD, SYNODIC_MONTH_DAYS, moon_phase,
    moon_phase_exact, moon_phase_with, round_to,
};
