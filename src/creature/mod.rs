//! Creature assembly: a body frame, its appendages, and the per-tick
//! orchestration between gait and visuals.

mod appendage;
mod assembly;
pub mod presets;
mod rotor;

pub use appendage::{Appendage, AppendagePose};
pub use assembly::{Creature, CreatureBuilder, TickInput, TickReport, VisualConfig};
pub use rotor::{RotorConfiguration, RotorDriver, RotorPose, DEFAULT_SPIN_RATE};
