use std::f32::consts::TAU;

use glam::{Quat, Vec3};

use crate::error::{Error, Result};
use crate::limb::LimbId;
use crate::math::{world_anchor, Transform};

/// Spin speed magnitude in rad/s.
pub const DEFAULT_SPIN_RATE: f32 = 30.0;

/// Height of the blades above the housing origin.
const ROTOR_HEIGHT: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotorConfiguration {
    pub id: LimbId,
    pub origin_offset: Vec3,
    /// Signed rad/s around the body's up axis.
    pub spin_rate: f32,
}

impl RotorConfiguration {
    /// Even ids spin one way, odd ids the other, so paired rotors cancel.
    pub fn new(id: u32, origin_offset: Vec3) -> Self {
        let direction = if id % 2 == 0 { 1.0 } else { -1.0 };
        Self {
            id: LimbId(id),
            origin_offset,
            spin_rate: DEFAULT_SPIN_RATE * direction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotorPose {
    pub housing: Transform,
    pub rotor: Transform,
}

/// Fixed-mount spinning appendage. Never touches IK or gait state.
#[derive(Debug, Clone)]
pub struct RotorDriver {
    config: RotorConfiguration,
    angle: f32,
    pose: RotorPose,
}

impl RotorDriver {
    pub fn new(config: RotorConfiguration) -> Self {
        Self {
            config,
            angle: 0.0,
            pose: RotorPose::default(),
        }
    }

    pub fn config(&self) -> &RotorConfiguration {
        &self.config
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn pose(&self) -> &RotorPose {
        &self.pose
    }

    pub fn drive(&mut self, body: Option<&Transform>, dt: f32) -> Result<()> {
        let body = body.ok_or(Error::missing_frame(self.config.id))?;

        if dt > 0.0 {
            self.angle = (self.angle + self.config.spin_rate * dt).rem_euclid(TAU);
        }

        let mount = world_anchor(body, self.config.origin_offset);
        self.pose.housing = Transform::from_position_rotation(mount, body.rotation);
        self.pose.rotor = Transform::from_position_rotation(
            mount + body.up() * ROTOR_HEIGHT,
            body.rotation * Quat::from_rotation_y(self.angle),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn neighbouring_ids_counter_rotate() {
        let even = RotorConfiguration::new(0, Vec3::X);
        let odd = RotorConfiguration::new(1, -Vec3::X);
        assert!(even.spin_rate > 0.0);
        assert!(odd.spin_rate < 0.0);
    }

    #[test]
    fn rotor_sits_above_its_mount() {
        let mut rotor = RotorDriver::new(RotorConfiguration::new(2, Vec3::new(1.0, 0.0, -1.0)));
        let body = Transform::from_position(Vec3::new(0.0, 2.0, 0.0));
        rotor.drive(Some(&body), 0.1).unwrap();

        assert_eq!(rotor.pose().housing.position, Vec3::new(1.0, 2.0, -1.0));
        assert_abs_diff_eq!(rotor.pose().rotor.position.y, 2.3, epsilon = 1e-6);
        assert_abs_diff_eq!(rotor.angle(), 3.0, epsilon = 1e-5);
    }

    #[test]
    fn angle_wraps() {
        let mut rotor = RotorDriver::new(RotorConfiguration::new(1, Vec3::ZERO));
        let body = Transform::IDENTITY;
        for _ in 0..100 {
            rotor.drive(Some(&body), 0.05).unwrap();
            assert!((0.0..TAU).contains(&rotor.angle()));
        }
    }

    #[test]
    fn missing_body_is_reported() {
        let mut rotor = RotorDriver::new(RotorConfiguration::new(0, Vec3::ZERO));
        assert!(matches!(rotor.drive(None, 0.1), Err(Error::MissingFrame { .. })));
        assert_eq!(rotor.angle(), 0.0);
    }
}
