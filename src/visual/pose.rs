use crate::math::Transform;

/// Resolved transforms for one walking limb, in world space.
///
/// Segments are unit cylinders along +Y: position is the segment midpoint
/// and `scale.y` its length. The joint's +Z points along the bend axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LimbPose {
    pub upper: Transform,
    pub lower: Transform,
    pub joint: Transform,
    pub foot: Transform,
}
