//! # ik-walker
//!
//! Procedural locomotion for multi-limbed creatures: an analytic two-bone IK
//! solver, a grouped stepping gait, and the per-tick orchestration that turns
//! foot targets into segment transforms for a renderer.
//!
//! ## Features
//! - Closed-form two-bone IK with a pole hint for the knee direction
//! - Swing-group gait (diagonal pairs, tripods, wave) with arced steps
//! - Foot clamping to a safe fraction of reach, so limbs never snap straight
//! - Terrain sampling through the [`Ground`] trait
//! - Walking and rotor appendages on the same body
//! - Locked or spring-smoothed camera follow
//!
//! ## Example
//! ```rust,ignore
//! use ik_walker::creature::{presets, TickInput};
//! use ik_walker::gait::MovementIntent;
//! use ik_walker::terrain::FlatGround;
//! use ik_walker::Transform;
//! use glam::Vec3;
//!
//! let mut creature = presets::quad_walker()?.build()?;
//! let ground = FlatGround::default();
//!
//! let body = Transform::from_position(Vec3::new(0.0, 1.2, 0.0));
//! let input = TickInput::new(body, MovementIntent::moving(Vec3::Z), 1.0 / 60.0);
//! let report = creature.tick(&input, &ground);
//! println!("swinging group: {:?}", report.swinging_group);
//! ```

pub mod camera;
pub mod creature;
pub mod error;
pub mod gait;
pub mod ik;
pub mod limb;
pub mod math;
pub mod terrain;
pub mod visual;

pub use camera::{aim_yaw, Camera, CameraFollow, FollowMode, FollowPreset};
pub use creature::{Appendage, Creature, CreatureBuilder, TickInput, TickReport, VisualConfig};
pub use error::{Error, PosePart, PoseParts, Result};
pub use gait::{GaitConfig, GaitController, GaitPattern, GaitPreset, MovementIntent};
pub use ik::{BendHint, TwoBoneSolver};
pub use limb::{LimbConfiguration, LimbId, LimbState};
pub use math::Transform;
pub use terrain::{FlatGround, Ground, ProceduralTerrain, TerrainKind};
pub use visual::{LimbPose, LimbVisualDriver};
