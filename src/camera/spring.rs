use glam::Vec3;

use crate::math::horizontal;

/// How quickly a smoothed camera catches up with the creature, split
/// between ground-plane travel and height changes from terrain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowPreset {
    Tight,
    Smooth,
    Lazy,
}

impl FollowPreset {
    /// `(horizontal_rate, vertical_rate)` in 1/s. Height is always softer
    /// so stepping over bumps does not bob the view.
    pub fn rates(self) -> (f32, f32) {
        match self {
            FollowPreset::Tight => (12.0, 6.0),
            FollowPreset::Smooth => (6.0, 3.0),
            FollowPreset::Lazy => (2.5, 1.2),
        }
    }
}

/// Critically damped follower for the camera's look-at point.
///
/// Integrated in closed form, so it never overshoots the root and stays
/// stable for any `dt`. The ground plane and height each get their own rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowSpring {
    position: Vec3,
    velocity: Vec3,
    horizontal_rate: f32,
    vertical_rate: f32,
}

impl FollowSpring {
    pub fn new(preset: FollowPreset, start: Vec3) -> Self {
        let (horizontal_rate, vertical_rate) = preset.rates();
        Self {
            position: start,
            velocity: Vec3::ZERO,
            horizontal_rate,
            vertical_rate,
        }
    }

    pub fn current(&self) -> Vec3 {
        self.position
    }

    /// Advances toward `root` and returns the new followed point.
    pub fn update(&mut self, root: Vec3, dt: f32) -> Vec3 {
        if dt <= 0.0 {
            return self.position;
        }

        let (h_pos, h_vel) = Self::damp(
            horizontal(self.position),
            horizontal(self.velocity),
            horizontal(root),
            self.horizontal_rate,
            dt,
        );
        let (y_pos, y_vel) = Self::damp(
            Vec3::Y * self.position.y,
            Vec3::Y * self.velocity.y,
            Vec3::Y * root.y,
            self.vertical_rate,
            dt,
        );

        self.position = h_pos + y_pos;
        self.velocity = h_vel + y_vel;
        self.position
    }

    fn damp(position: Vec3, velocity: Vec3, goal: Vec3, rate: f32, dt: f32) -> (Vec3, Vec3) {
        let decay = (-rate * dt).exp();
        let offset = position - goal;
        let drift = (velocity + offset * rate) * dt;
        let velocity = (velocity - drift * rate) * decay;
        (goal + (offset + drift) * decay, velocity)
    }
}
