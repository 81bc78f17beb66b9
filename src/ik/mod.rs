//! Inverse Kinematics module
//!
//! Analytic two-bone solver and the bend-plane hint that disambiguates
//! the elbow side.

pub mod hint;
pub mod solver;

pub use hint::BendHint;
pub use solver::TwoBoneSolver;
