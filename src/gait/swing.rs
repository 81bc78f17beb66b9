use std::f32::consts::PI;

use glam::Vec3;

use crate::math::ease_in_out;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingProfile {
    /// Seconds from lift-off to plant.
    pub duration: f32,
    /// Peak lift above the straight from->to path, reached mid-swing.
    pub step_height: f32,
}

/// Foot position at `progress` in `[0, 1]` of a swing.
///
/// Horizontal travel is eased; the lift is a sine arc, steepest at lift-off
/// and plant and flat at its peak.
pub fn arc_point(from: Vec3, to: Vec3, progress: f32, step_height: f32) -> Vec3 {
    let p = progress.clamp(0.0, 1.0);
    let base = from.lerp(to, ease_in_out(p));
    base + Vec3::Y * (step_height * (p * PI).sin())
}
