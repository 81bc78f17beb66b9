use glam::Vec3;

use super::spring::{FollowPreset, FollowSpring};
use super::Camera;
use crate::math::horizontal;

/// Aim targets closer than this (horizontally) leave the yaw alone.
const AIM_EPSILON_SQ: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FollowMode {
    /// Camera is left wherever the user put it.
    #[default]
    Free,
    /// Target snaps to the root each tick, offset preserved.
    Locked,
    /// Like `Locked`, but the followed point trails the root through a spring.
    Smoothed(FollowPreset),
}

#[derive(Debug, Clone, Default)]
pub struct CameraFollow {
    mode: FollowMode,
    spring: Option<FollowSpring>,
}

impl CameraFollow {
    pub fn new(mode: FollowMode) -> Self {
        Self { mode, spring: None }
    }

    /// Re-centers `camera` on `root`. The camera's current offset from its
    /// target is carried over, so user orbiting between ticks sticks.
    pub fn update(&mut self, camera: &mut Camera, root: Vec3, dt: f32) {
        let followed = match self.mode {
            FollowMode::Free => return,
            FollowMode::Locked => root,
            FollowMode::Smoothed(preset) => {
                let spring = self
                    .spring
                    .get_or_insert_with(|| FollowSpring::new(preset, camera.target));
                spring.update(root, dt)
            }
        };
        Self::recenter(camera, followed);
    }

    fn recenter(camera: &mut Camera, point: Vec3) {
        if camera.target == point {
            return;
        }
        let offset = camera.position - camera.target;
        camera.target = point;
        camera.position = point + offset;
    }
}

/// Yaw that faces from `root` toward `aim`, or `None` when the two nearly
/// coincide on the ground plane.
pub fn aim_yaw(root: Vec3, aim: Vec3) -> Option<f32> {
    let dir = horizontal(aim - root);
    if dir.length_squared() > AIM_EPSILON_SQ {
        Some(dir.x.atan2(dir.z))
    } else {
        None
    }
}
