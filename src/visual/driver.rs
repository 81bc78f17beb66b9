use glam::Vec3;
use log::trace;

use super::pose::LimbPose;
use crate::error::{Error, PosePart, PoseParts, Result};
use crate::ik::{BendHint, TwoBoneSolver};
use crate::limb::{LimbConfiguration, LimbState};
use crate::math::geometry::{axis_rotation, segment_rotation};
use crate::math::{clamp_to_reach, world_anchor, Transform};

/// Fraction of max reach a foot may sit at, keeping the limb off the
/// straight-leg singularity.
pub const REACH_SAFETY: f32 = 0.99;

/// Below this squared sine between segments the bend axis is unreliable.
const BEND_AXIS_MIN_SQ: f32 = 1e-4;

/// Turns a limb's foot state into segment transforms each tick.
#[derive(Debug, Clone)]
pub struct LimbVisualDriver {
    limb: LimbConfiguration,
    pose: LimbPose,
    has_pose: bool,
}

impl LimbVisualDriver {
    pub fn new(limb: LimbConfiguration) -> Self {
        Self {
            limb,
            pose: LimbPose::default(),
            has_pose: false,
        }
    }

    pub fn limb(&self) -> &LimbConfiguration {
        &self.limb
    }

    /// Last successfully solved pose.
    pub fn pose(&self) -> &LimbPose {
        &self.pose
    }

    /// False until the first successful solve.
    pub fn has_pose(&self) -> bool {
        self.has_pose
    }

    /// Foot position handed to the solver: `foot` pulled within
    /// `max_reach * REACH_SAFETY` of the shoulder.
    pub fn effective_foot(shoulder: Vec3, foot: Vec3, max_reach: f32) -> Vec3 {
        clamp_to_reach(shoulder, foot, max_reach * REACH_SAFETY)
    }

    /// Solves and applies this tick's pose.
    ///
    /// On `Err` the previous pose is untouched. On `Ok` the returned parts
    /// kept their previous orientation because their direction degenerated;
    /// their positions were still updated.
    pub fn drive(&mut self, body: Option<&Transform>, state: &LimbState) -> Result<PoseParts> {
        let body = body.ok_or(Error::missing_frame(self.limb.id()))?;

        let shoulder = world_anchor(body, self.limb.origin_offset());
        let foot = Self::effective_foot(shoulder, state.current_pos(), self.limb.max_reach());
        let hint = BendHint::for_anchor(body, shoulder);
        let elbow = TwoBoneSolver::solve_limb(&self.limb, shoulder, foot, &hint)?;

        let mut skipped = PoseParts::default();
        let mut pose = self.pose;

        let upper_dir = elbow - shoulder;
        let lower_dir = foot - elbow;
        Self::place_segment(&mut pose.upper, shoulder, elbow, PosePart::Upper, &mut skipped);
        Self::place_segment(&mut pose.lower, elbow, foot, PosePart::Lower, &mut skipped);

        pose.joint.position = elbow;
        let bend_axis = upper_dir.normalize_or_zero().cross(lower_dir.normalize_or_zero());
        match axis_rotation(bend_axis).filter(|_| bend_axis.length_squared() > BEND_AXIS_MIN_SQ) {
            Some(rotation) => pose.joint.rotation = rotation,
            None => skipped.insert(PosePart::Joint),
        }

        pose.foot.position = foot;
        match segment_rotation(state.surface_normal()) {
            Some(rotation) => pose.foot.rotation = rotation,
            None => skipped.insert(PosePart::Foot),
        }

        for part in skipped.iter() {
            trace!("limb {}: {}, kept previous", self.limb.id(), Error::degenerate(part));
        }

        self.pose = pose;
        self.has_pose = true;
        Ok(skipped)
    }

    fn place_segment(
        segment: &mut Transform,
        from: Vec3,
        to: Vec3,
        part: PosePart,
        skipped: &mut PoseParts,
    ) {
        segment.position = (from + to) * 0.5;
        segment.scale = Vec3::new(1.0, from.distance(to), 1.0);
        match segment_rotation(to - from) {
            Some(rotation) => segment.rotation = rotation,
            None => skipped.insert(part),
        }
    }
}
