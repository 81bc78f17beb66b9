use glam::Vec3;

use crate::gait::swing::{arc_point, SwingProfile};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Swing {
    pub from: Vec3,
    pub elapsed: f32,
}

/// Per-limb foot state. Only the gait controller mutates it; every other
/// layer gets a copy or a shared borrow for the tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbState {
    pub(crate) current_pos: Vec3,
    pub(crate) target_pos: Vec3,
    pub(crate) surface_normal: Vec3,
    pub(crate) is_grounded: bool,
    pub(crate) is_moving: bool,
    pub(crate) swing: Option<Swing>,
}

impl Default for LimbState {
    /// An unplaced foot: neither grounded nor moving.
    fn default() -> Self {
        Self {
            current_pos: Vec3::ZERO,
            target_pos: Vec3::ZERO,
            surface_normal: Vec3::Y,
            is_grounded: false,
            is_moving: false,
            swing: None,
        }
    }
}

impl LimbState {
    pub fn planted(at: Vec3, normal: Vec3) -> Self {
        Self {
            current_pos: at,
            target_pos: at,
            surface_normal: normal,
            is_grounded: true,
            is_moving: false,
            swing: None,
        }
    }

    pub fn current_pos(&self) -> Vec3 {
        self.current_pos
    }

    pub fn target_pos(&self) -> Vec3 {
        self.target_pos
    }

    /// Ground normal under the planted (or landing) foot.
    pub fn surface_normal(&self) -> Vec3 {
        self.surface_normal
    }

    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    pub(crate) fn begin_swing(&mut self, target: Vec3, normal: Vec3) {
        self.swing = Some(Swing {
            from: self.current_pos,
            elapsed: 0.0,
        });
        self.target_pos = target;
        self.surface_normal = normal;
        self.is_moving = true;
        self.is_grounded = false;
    }

    /// Moves the foot along its arc. Returns `true` on the tick it lands.
    pub(crate) fn advance_swing(&mut self, dt: f32, profile: &SwingProfile) -> bool {
        let Some(mut swing) = self.swing else {
            return false;
        };
        if dt > 0.0 {
            swing.elapsed += dt;
        }

        if swing.elapsed >= profile.duration {
            self.land();
            return true;
        }

        let progress = swing.elapsed / profile.duration;
        self.current_pos = arc_point(swing.from, self.target_pos, progress, profile.step_height);
        self.swing = Some(swing);
        false
    }

    fn land(&mut self) {
        self.current_pos = self.target_pos;
        self.swing = None;
        self.is_moving = false;
        self.is_grounded = true;
    }
}
