//! Small pure helpers shared by the solver, gait and visual layers.
//!
//! Everything here works on stack values; there is no reusable scratch
//! state, so every function is reentrant.

use glam::{Quat, Vec3};

use super::Transform;

/// Squared length under which a direction is treated as degenerate.
pub const DIRECTION_EPSILON_SQ: f32 = 1e-8;

/// World position of an attachment point fixed in the body frame.
pub fn world_anchor(body: &Transform, origin_offset: Vec3) -> Vec3 {
    body.transform_point(origin_offset)
}

/// Pulls `point` back along the anchor->point ray so it lies within `reach`.
pub fn clamp_to_reach(anchor: Vec3, point: Vec3, reach: f32) -> Vec3 {
    let delta = point - anchor;
    let dist_sq = delta.length_squared();
    if dist_sq <= reach * reach || dist_sq < DIRECTION_EPSILON_SQ {
        return point;
    }
    anchor + delta * (reach / dist_sq.sqrt())
}

/// Drops the vertical component.
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

pub fn try_normalize_with_min(v: Vec3, min_len_sq: f32) -> Option<Vec3> {
    let len_sq = v.length_squared();
    if len_sq > min_len_sq && len_sq.is_finite() {
        Some(v / len_sq.sqrt())
    } else {
        None
    }
}

/// Rotation taking a unit cylinder's +Y axis onto `dir`.
pub fn segment_rotation(dir: Vec3) -> Option<Quat> {
    try_normalize_with_min(dir, DIRECTION_EPSILON_SQ).map(|d| Quat::from_rotation_arc(Vec3::Y, d))
}

/// Rotation taking +Z onto `axis`, the way an object "looks at" a point.
pub fn axis_rotation(axis: Vec3) -> Option<Quat> {
    try_normalize_with_min(axis, DIRECTION_EPSILON_SQ).map(|a| Quat::from_rotation_arc(Vec3::Z, a))
}

/// Smoothstep easing on `[0, 1]`.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn clamp_leaves_points_inside_reach() {
        let p = Vec3::new(0.5, -0.5, 0.0);
        assert_eq!(clamp_to_reach(Vec3::ZERO, p, 2.0), p);
    }

    #[test]
    fn clamp_pulls_far_points_onto_reach_sphere() {
        let anchor = Vec3::new(1.0, 1.0, 1.0);
        let p = anchor + Vec3::new(0.0, 0.0, 2.5);
        let clamped = clamp_to_reach(anchor, p, 1.98);
        assert_abs_diff_eq!(clamped.distance(anchor), 1.98, epsilon = 1e-5);
        assert_abs_diff_eq!(clamped.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(clamped.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn segment_rotation_maps_y_onto_direction() {
        let dir = Vec3::new(1.0, 1.0, 0.0);
        let q = segment_rotation(dir).unwrap();
        let mapped = q * Vec3::Y;
        assert_abs_diff_eq!(mapped.dot(dir.normalize()), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn degenerate_directions_have_no_rotation() {
        assert!(segment_rotation(Vec3::ZERO).is_none());
        assert!(axis_rotation(Vec3::splat(1e-6)).is_none());
        assert!(try_normalize_with_min(Vec3::new(f32::NAN, 0.0, 0.0), 0.0).is_none());
    }

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_abs_diff_eq!(ease_in_out(0.5), 0.5, epsilon = 1e-6);
        assert_eq!(ease_in_out(2.0), 1.0);
    }
}
