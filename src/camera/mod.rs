//! Virtual camera and root-follow logic
//!
//! The camera itself is plain data; `CameraFollow` re-centers it on the
//! creature root each tick while keeping the user's chosen offset.

mod follow;
mod spring;

pub use follow::{aim_yaw, CameraFollow, FollowMode};
pub use spring::{FollowPreset, FollowSpring};

use glam::Vec3;

/// Follow state handed to whatever renders the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 6.0, -10.0), Vec3::ZERO)
    }
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
        }
    }

    /// Camera position relative to what it looks at.
    pub fn offset(&self) -> Vec3 {
        self.position - self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_looks_at_origin_from_behind() {
        let camera = Camera::default();
        assert_eq!(camera.target, Vec3::ZERO);
        assert_eq!(camera.offset(), Vec3::new(0.0, 6.0, -10.0));
        assert_eq!(camera.up, Vec3::Y);
    }
}
