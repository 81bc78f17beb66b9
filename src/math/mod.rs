//! Math utilities module
//!
//! Provides convenient re-exports from glam, the rigid transform used for
//! body and part frames, and the pure geometry helpers.

pub mod geometry;
mod transform;

pub use geometry::{clamp_to_reach, ease_in_out, horizontal, world_anchor};
pub use transform::Transform;

// Re-export commonly used glam types
pub use glam::{Quat, Vec3};
