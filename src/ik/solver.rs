use glam::Vec3;

use super::hint::BendHint;
use crate::error::{Error, Result};
use crate::limb::LimbConfiguration;

/// Feet closer to the shoulder than this have no usable axis.
const MIN_AXIS_LENGTH: f32 = 1e-6;

/// Fraction of full extension the bend angle is computed at. Keeps a fully
/// stretched limb off the zero-sine singularity so the elbow still leans
/// toward the pole.
const STRAIGHT_MARGIN: f32 = 1e-5;

/// Analytic two-bone solver.
///
/// Shoulder, elbow and foot form a triangle with sides `l1`, `l2` and the
/// shoulder->foot distance `d`. The law of cosines gives the shoulder angle,
/// and the elbow is placed in the plane spanned by the axis and the hint's
/// pole direction.
pub struct TwoBoneSolver;

impl TwoBoneSolver {
    /// Returns the elbow position, or `UnsolvableIk` when the triangle
    /// cannot close. Pure: identical inputs give identical output.
    pub fn solve(shoulder: Vec3, foot: Vec3, l1: f32, l2: f32, hint: &BendHint) -> Result<Vec3> {
        let min = (l1 - l2).abs();
        let max = l1 + l2;

        let delta = foot - shoulder;
        let d = delta.length();

        if !d.is_finite() || !(l1 > 0.0 && l2 > 0.0) || !max.is_finite() {
            return Err(Error::unsolvable(d, min, max));
        }
        if d > max || d < min || d < MIN_AXIS_LENGTH {
            return Err(Error::unsolvable(d, min, max));
        }

        let axis = delta / d;
        let pole = hint.pole(axis);

        let bend_d = d.min(max * (1.0 - STRAIGHT_MARGIN));
        let cos_a = ((l1 * l1 + bend_d * bend_d - l2 * l2) / (2.0 * l1 * bend_d)).clamp(-1.0, 1.0);
        let sin_a = (1.0 - cos_a * cos_a).max(0.0).sqrt();

        let elbow = shoulder + axis * (l1 * cos_a) + pole * (l1 * sin_a);
        if !elbow.is_finite() {
            return Err(Error::unsolvable(d, min, max));
        }
        Ok(elbow)
    }

    pub fn solve_limb(
        config: &LimbConfiguration,
        shoulder: Vec3,
        foot: Vec3,
        hint: &BendHint,
    ) -> Result<Vec3> {
        Self::solve(shoulder, foot, config.l1(), config.l2(), hint)
    }
}
