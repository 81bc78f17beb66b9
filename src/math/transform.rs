use glam::{Quat, Vec3};

/// Position, rotation and scale of a rigid frame.
///
/// Creature frames face +Z with +Y up, so a yaw of zero looks down +Z and
/// `yaw = atan2(dir.x, dir.z)` for a heading direction `dir`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            scale: Vec3::ONE,
        }
    }

    pub fn from_position_yaw(position: Vec3, yaw: f32) -> Self {
        Self::from_position_rotation(position, Quat::from_rotation_y(yaw))
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Heading around world +Y, in radians.
    pub fn yaw(&self) -> f32 {
        let f = self.forward();
        f.x.atan2(f.z)
    }

    /// Same frame with its rotation replaced by a pure yaw.
    pub fn with_yaw(self, yaw: f32) -> Self {
        Self {
            rotation: Quat::from_rotation_y(yaw),
            ..self
        }
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * (point * self.scale) + self.position
    }
}
