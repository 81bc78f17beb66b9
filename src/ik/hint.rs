use glam::Vec3;

use crate::math::geometry::{horizontal, try_normalize_with_min, DIRECTION_EPSILON_SQ};
use crate::math::Transform;

/// Picks which of the two mirror-image elbow solutions a limb uses.
///
/// The elbow bends toward `up + forward`, projected off the shoulder->foot
/// axis. When that projection vanishes the hint falls back to `up`, then
/// `forward`, then a fixed perpendicular of the axis, so the choice only
/// ever depends on the inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BendHint {
    pub up: Vec3,
    pub forward: Vec3,
}

impl Default for BendHint {
    fn default() -> Self {
        Self {
            up: Vec3::Y,
            forward: Vec3::Z,
        }
    }
}

impl BendHint {
    pub fn new(up: Vec3, forward: Vec3) -> Self {
        Self { up, forward }
    }

    /// Hint for a limb anchored at `anchor` on `body`: local up, and outward
    /// from the body center through the shoulder.
    ///
    /// A shoulder sitting on the body center has no outward direction; it
    /// uses the body's forward axis instead, and world +Z if that is also
    /// degenerate.
    pub fn for_anchor(body: &Transform, anchor: Vec3) -> Self {
        let up = try_normalize_with_min(body.up(), DIRECTION_EPSILON_SQ).unwrap_or(Vec3::Y);
        let forward = try_normalize_with_min(anchor - body.position, 1e-6)
            .or_else(|| try_normalize_with_min(horizontal(body.forward()), 1e-6))
            .unwrap_or(Vec3::Z);
        Self { up, forward }
    }

    /// Unit direction, perpendicular to `axis`, that the elbow bends toward.
    /// `axis` must be unit length.
    pub fn pole(&self, axis: Vec3) -> Vec3 {
        let candidates = [self.up + self.forward, self.up, self.forward];
        candidates
            .iter()
            .find_map(|&c| try_normalize_with_min(c - axis * c.dot(axis), 1e-6))
            .unwrap_or_else(|| axis.any_orthonormal_vector())
    }
}
