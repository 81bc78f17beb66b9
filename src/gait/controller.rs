use glam::Vec3;
use log::{debug, info};

use super::config::GaitConfig;
use super::pattern::{group_count, GaitPattern};
use crate::error::Result;
use crate::limb::{LimbConfiguration, LimbState};
use crate::math::geometry::{horizontal, try_normalize_with_min};
use crate::math::{world_anchor, Transform};
use crate::terrain::Ground;

/// Movement request from the body controller for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementIntent {
    pub velocity: Vec3,
    pub is_moving: bool,
}

impl MovementIntent {
    pub const IDLE: Self = Self {
        velocity: Vec3::ZERO,
        is_moving: false,
    };

    pub fn moving(velocity: Vec3) -> Self {
        Self {
            velocity,
            is_moving: true,
        }
    }

    /// Unit horizontal heading, zero while idle or standing still.
    pub fn travel_direction(&self) -> Vec3 {
        if !self.is_moving {
            return Vec3::ZERO;
        }
        try_normalize_with_min(horizontal(self.velocity), 1e-8).unwrap_or(Vec3::ZERO)
    }
}

/// Where a limb wants its foot this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stance {
    /// Ground point under the shoulder, pushed outward.
    pub ideal: Vec3,
    /// Landing point for a swing started now.
    pub target: Vec3,
    pub normal: Vec3,
}

impl Stance {
    fn compute(
        limb: &LimbConfiguration,
        body: &Transform,
        travel: Vec3,
        config: &GaitConfig,
        ground: &dyn Ground,
    ) -> Self {
        let anchor = world_anchor(body, limb.origin_offset());
        let outward = try_normalize_with_min(horizontal(anchor - body.position), 1e-8)
            .or_else(|| try_normalize_with_min(horizontal(body.forward()), 1e-8))
            .unwrap_or(Vec3::Z);
        let rest = anchor + outward * config.stance_spread;

        let (ideal, _) = ground.project(rest);
        let (target, normal) = ground.project(rest + travel * config.stride_lead);
        Self {
            ideal,
            target,
            normal,
        }
    }
}

/// Owns every limb's foot state and decides when each one steps.
///
/// Each tick runs in two steps. The swing group to activate is chosen from
/// the state as it was when the tick began; then every limb is updated from
/// its own state plus that decision, so limb updates never observe each
/// other and may run in any order.
#[derive(Debug, Clone)]
pub struct GaitController {
    config: GaitConfig,
    limbs: Vec<LimbConfiguration>,
    groups: Vec<usize>,
    states: Vec<LimbState>,
    // Reused each tick to avoid per-frame allocation.
    stances: Vec<Stance>,
    initialized: bool,
}

impl GaitController {
    pub fn new(
        limbs: Vec<LimbConfiguration>,
        pattern: &GaitPattern,
        config: GaitConfig,
    ) -> Result<Self> {
        let config = config.validated()?;
        let groups = pattern.assign(&limbs)?;
        info!(
            "gait: {} limbs in {} swing groups",
            limbs.len(),
            group_count(&groups)
        );

        let count = limbs.len();
        Ok(Self {
            config,
            limbs,
            groups,
            states: vec![LimbState::default(); count],
            stances: Vec::with_capacity(count),
            initialized: false,
        })
    }

    pub fn config(&self) -> &GaitConfig {
        &self.config
    }

    pub fn states(&self) -> &[LimbState] {
        &self.states
    }

    pub fn state(&self, index: usize) -> Option<&LimbState> {
        self.states.get(index)
    }

    pub fn group_of(&self, index: usize) -> Option<usize> {
        self.groups.get(index).copied()
    }

    /// Stance targets computed on the last update.
    pub fn stances(&self) -> &[Stance] {
        &self.stances
    }

    /// The group currently in the air, if any.
    pub fn swinging_group(&self) -> Option<usize> {
        self.states
            .iter()
            .zip(&self.groups)
            .find(|(s, _)| s.is_moving)
            .map(|(_, &g)| g)
    }

    /// Plants every foot on its stance point without swinging.
    pub fn plant_all(&mut self, body: &Transform, ground: &dyn Ground) {
        self.refresh_stances(body, Vec3::ZERO, ground);
        for (state, stance) in self.states.iter_mut().zip(&self.stances) {
            *state = LimbState::planted(stance.ideal, stance.normal);
        }
        self.initialized = true;
    }

    pub fn update(
        &mut self,
        body: &Transform,
        intent: &MovementIntent,
        dt: f32,
        ground: &dyn Ground,
    ) {
        if !self.initialized {
            self.plant_all(body, ground);
            debug!("gait: planted {} feet", self.states.len());
            return;
        }

        self.refresh_stances(body, intent.travel_direction(), ground);

        let activate = match self.swinging_group() {
            Some(_) => None,
            None => self.pick_group(intent.is_moving),
        };
        if let Some(group) = activate {
            debug!("gait: swing group {group} lifts");
        }

        let profile = self.config.swing_profile();
        let min_step = self.config.min_step;
        let limbs = self
            .states
            .iter_mut()
            .zip(&self.stances)
            .zip(&self.groups)
            .zip(&self.limbs);

        for (((state, stance), &group), limb) in limbs {
            if state.is_moving {
                if state.advance_swing(dt, &profile) {
                    debug!("gait: limb {} planted at {:?}", limb.id(), state.current_pos);
                }
            } else if activate == Some(group) && state.current_pos.distance(stance.target) > min_step
            {
                state.begin_swing(stance.target, stance.normal);
            }
        }
    }

    fn refresh_stances(&mut self, body: &Transform, travel: Vec3, ground: &dyn Ground) {
        let config = &self.config;
        self.stances.clear();
        self.stances.extend(
            self.limbs
                .iter()
                .map(|limb| Stance::compute(limb, body, travel, config, ground)),
        );
    }

    /// Group of the grounded limb furthest past its threshold. Ties go to
    /// the lower group index so the choice does not depend on limb order.
    fn pick_group(&self, is_moving: bool) -> Option<usize> {
        let threshold = if is_moving {
            self.config.stride_threshold
        } else {
            self.config.settle_threshold
        };

        let mut best: Option<(usize, f32)> = None;
        for ((state, stance), &group) in self.states.iter().zip(&self.stances).zip(&self.groups) {
            if !state.is_grounded {
                continue;
            }
            let error = state.current_pos.distance(stance.ideal);
            if error <= threshold {
                continue;
            }
            let better = match best {
                None => true,
                Some((g, e)) => error > e || (error == e && group < g),
            };
            if better {
                best = Some((group, error));
            }
        }
        best.map(|(group, _)| group)
    }
}
