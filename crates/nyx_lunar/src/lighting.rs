//! Lighting and rotation for the 3D moon model.
//!
//! The model is spun about its vertical axis by the phase angle and lit by a
//! directional light circling it in the horizontal plane.

/// Distance of the directional light from the model origin.
pub const MODEL_LIGHT_DISTANCE: f64 = 2.0;

/// Rotation and light position for one phase angle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModelLighting {
    /// Rotation about the vertical axis in degrees (equals the phase angle).
    pub rotation_y_deg: f64,
    /// Light x coordinate: `2 cos(phase_angle)`.
    pub sun_x: f64,
    /// Light z coordinate: `2 sin(phase_angle)`.
    pub sun_z: f64,
}

/// Model rotation and light position from a phase angle in degrees.
pub fn model_lighting(phase_angle_deg: f64) -> ModelLighting {
    let (sin, cos) = phase_angle_deg.to_radians().sin_cos();
    ModelLighting {
        rotation_y_deg: phase_angle_deg,
        sun_x: cos * MODEL_LIGHT_DISTANCE,
        sun_z: sin * MODEL_LIGHT_DISTANCE,
    }
}
