use glam::Vec3;
use log::{debug, info, trace};

use super::appendage::Appendage;
use super::rotor::{RotorConfiguration, RotorDriver};
use crate::camera::aim_yaw;
use crate::error::{Error, PosePart, PoseParts, Result};
use crate::gait::{GaitConfig, GaitController, GaitPattern, MovementIntent};
use crate::limb::{LimbConfiguration, LimbId, LimbState};
use crate::math::Transform;
use crate::terrain::Ground;
use crate::visual::LimbVisualDriver;

/// Render toggles carried for the renderer. Solver and gait never read them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualConfig {
    pub show_body: bool,
    pub show_plating: bool,
    pub plating_opacity: f32,
    pub limb_color: [f32; 3],
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            show_body: true,
            show_plating: true,
            plating_opacity: 1.0,
            limb_color: [0.165, 0.165, 0.208],
        }
    }
}

/// Everything the body controller hands over for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// `None` until the body frame exists.
    pub body: Option<Transform>,
    pub intent: MovementIntent,
    pub aim: Option<Vec3>,
    pub dt: f32,
}

impl TickInput {
    pub fn new(body: Transform, intent: MovementIntent, dt: f32) -> Self {
        Self {
            body: Some(body),
            intent,
            aim: None,
            dt,
        }
    }

    pub fn with_aim(mut self, aim: Vec3) -> Self {
        self.aim = Some(aim);
        self
    }
}

/// What was skipped during a tick. Every entry self-corrects once inputs
/// are valid again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Appendages left at their previous pose.
    pub skipped: Vec<(LimbId, Error)>,
    /// Parts that moved but kept their previous orientation.
    pub degenerate: Vec<(LimbId, PosePart)>,
    pub swinging_group: Option<usize>,
}

impl TickReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.degenerate.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Creature {
    gait: Option<GaitController>,
    appendages: Vec<Appendage>,
    body: Option<Transform>,
    visual: VisualConfig,
    face_aim: bool,
}

impl Creature {
    pub fn builder() -> CreatureBuilder {
        CreatureBuilder::new()
    }

    pub fn gait(&self) -> Option<&GaitController> {
        self.gait.as_ref()
    }

    pub fn appendages(&self) -> &[Appendage] {
        &self.appendages
    }

    /// Body frame used on the last tick, after any aim-facing yaw.
    pub fn body(&self) -> Option<&Transform> {
        self.body.as_ref()
    }

    pub fn root(&self) -> Option<Vec3> {
        self.body.map(|b| b.position)
    }

    pub fn visual(&self) -> &VisualConfig {
        &self.visual
    }

    /// Foot state of walker `id`, if it is one.
    pub fn limb_state(&self, id: LimbId) -> Option<&LimbState> {
        let gait = self.gait.as_ref()?;
        self.appendages.iter().find_map(|a| match a {
            Appendage::Walker { driver, gait_index } if driver.limb().id() == id => {
                gait.state(*gait_index)
            }
            _ => None,
        })
    }

    /// Gait update for every limb, then the visual pass over every
    /// appendage. The visual pass only reads the gait's finished state.
    pub fn tick(&mut self, input: &TickInput, ground: &dyn Ground) -> TickReport {
        let body = input.body.map(|body| self.face(body, input.aim));
        self.body = body;

        if let (Some(gait), Some(body)) = (self.gait.as_mut(), body.as_ref()) {
            gait.update(body, &input.intent, input.dt, ground);
        }

        let mut report = TickReport {
            swinging_group: self.gait.as_ref().and_then(GaitController::swinging_group),
            ..Default::default()
        };

        let states = self.gait.as_ref().map(GaitController::states).unwrap_or_default();
        for appendage in &mut self.appendages {
            let id = appendage.id();
            let outcome = match appendage {
                Appendage::Walker { driver, gait_index } => match states.get(*gait_index) {
                    Some(state) => driver.drive(body.as_ref(), state),
                    None => Err(Error::missing_frame(id)),
                },
                Appendage::Rotor(rotor) => {
                    rotor.drive(body.as_ref(), input.dt).map(|()| PoseParts::default())
                }
            };

            match outcome {
                Ok(parts) => report.degenerate.extend(parts.iter().map(|p| (id, p))),
                Err(err) => {
                    trace!("limb {id} skipped: {err}");
                    report.skipped.push((id, err));
                }
            }
        }
        report
    }

    fn face(&self, body: Transform, aim: Option<Vec3>) -> Transform {
        if !self.face_aim {
            return body;
        }
        match aim.and_then(|aim| aim_yaw(body.position, aim)) {
            Some(yaw) => body.with_yaw(yaw),
            None => body,
        }
    }
}

pub struct CreatureBuilder {
    limbs: Vec<LimbConfiguration>,
    rotors: Vec<RotorConfiguration>,
    gait: GaitConfig,
    pattern: GaitPattern,
    visual: VisualConfig,
    face_aim: bool,
}

impl CreatureBuilder {
    pub fn new() -> Self {
        Self {
            limbs: Vec::new(),
            rotors: Vec::new(),
            gait: GaitConfig::default(),
            pattern: GaitPattern::default(),
            visual: VisualConfig::default(),
            face_aim: false,
        }
    }

    pub fn limb(mut self, limb: LimbConfiguration) -> Self {
        self.limbs.push(limb);
        self
    }

    pub fn limbs(mut self, limbs: impl IntoIterator<Item = LimbConfiguration>) -> Self {
        self.limbs.extend(limbs);
        self
    }

    pub fn rotor(mut self, rotor: RotorConfiguration) -> Self {
        self.rotors.push(rotor);
        self
    }

    pub fn gait(mut self, gait: GaitConfig) -> Self {
        self.gait = gait;
        self
    }

    pub fn pattern(mut self, pattern: GaitPattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn visual(mut self, visual: VisualConfig) -> Self {
        self.visual = visual;
        self
    }

    /// Turn the body's yaw toward the aim target each tick.
    pub fn face_aim(mut self, face_aim: bool) -> Self {
        self.face_aim = face_aim;
        self
    }

    pub fn build(self) -> Result<Creature> {
        let mut ids: Vec<LimbId> = self
            .limbs
            .iter()
            .map(LimbConfiguration::id)
            .chain(self.rotors.iter().map(|r| r.id))
            .collect();
        if ids.is_empty() {
            return Err(Error::invalid_gait("a creature needs at least one appendage"));
        }
        ids.sort_unstable();
        if let Some(pair) = ids.windows(2).find(|w| w[0] == w[1]) {
            return Err(Error::invalid_limb(pair[0], "duplicate id"));
        }

        let mut appendages: Vec<Appendage> = self
            .limbs
            .iter()
            .enumerate()
            .map(|(gait_index, limb)| Appendage::Walker {
                driver: LimbVisualDriver::new(limb.clone()),
                gait_index,
            })
            .collect();
        appendages.extend(self.rotors.into_iter().map(|r| Appendage::Rotor(RotorDriver::new(r))));

        let gait = if self.limbs.is_empty() {
            None
        } else {
            Some(GaitController::new(self.limbs, &self.pattern, self.gait)?)
        };

        info!(
            "creature: {} appendages ({} walking)",
            appendages.len(),
            appendages.iter().filter(|a| a.is_walker()).count()
        );
        debug!("creature visuals: {:?}", self.visual);

        Ok(Creature {
            gait,
            appendages,
            body: None,
            visual: self.visual,
            face_aim: self.face_aim,
        })
    }
}

impl Default for CreatureBuilder {
    fn default() -> Self {
        Self::new()
    }
}
