use crate::{animation::lerp::Lerp, foundation::core::Vec3};

/// Per-frame pose of the centerpiece.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParameterSet {
    /// Group translation.
    pub position: Vec3,
    /// Uniform group scale.
    pub scale: f64,
    /// Rotation around the vertical axis, radians.
    pub rotation_y: f64,
    /// Emissive intensity of the inner core.
    pub emissive_intensity: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
            rotation_y: 0.0,
            emissive_intensity: 0.5,
        }
    }
}

impl ParameterSet {
    /// Pose at the origin with the given scale, spin and glow.
    pub const fn new(position: Vec3, scale: f64, rotation_y: f64, emissive_intensity: f64) -> Self {
        Self {
            position,
            scale,
            rotation_y,
            emissive_intensity,
        }
    }
}

impl Lerp for ParameterSet {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            position: Vec3::lerp(&a.position, &b.position, t),
            scale: f64::lerp(&a.scale, &b.scale, t),
            rotation_y: f64::lerp(&a.rotation_y, &b.rotation_y, t),
            emissive_intensity: f64::lerp(&a.emissive_intensity, &b.emissive_intensity, t),
        }
    }
}
