//! Limb data model
//!
//! Static per-limb configuration and the mutable foot state owned by the
//! gait controller.

mod config;
mod state;

pub use config::{LimbConfiguration, LimbConfigurationBuilder, LimbId};
pub use state::LimbState;
