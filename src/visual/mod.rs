//! Limb visual driver
//!
//! Clamps each foot to a safe reach, solves the elbow and produces the
//! segment, joint and foot transforms handed to the renderer.

mod driver;
mod pose;

pub use driver::{LimbVisualDriver, REACH_SAFETY};
pub use pose::LimbPose;
