//! Limb placement and gait coordination
//!
//! Decides per tick where each foot should be, when it lifts, and how it
//! travels to its next stance point.

pub mod config;
pub mod controller;
pub mod pattern;
pub mod swing;

pub use config::{GaitConfig, GaitPreset};
pub use controller::{GaitController, MovementIntent, Stance};
pub use pattern::GaitPattern;
pub use swing::{arc_point, SwingProfile};
