use super::rotor::{RotorDriver, RotorPose};
use crate::limb::LimbId;
use crate::visual::{LimbPose, LimbVisualDriver};

/// A body attachment, fixed to one variant at assembly.
#[derive(Debug, Clone)]
pub enum Appendage {
    /// IK-solved limb whose foot state lives at `gait_index` in the gait
    /// controller.
    Walker {
        driver: LimbVisualDriver,
        gait_index: usize,
    },
    Rotor(RotorDriver),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppendagePose<'a> {
    Limb(&'a LimbPose),
    Rotor(&'a RotorPose),
}

impl Appendage {
    pub fn id(&self) -> LimbId {
        match self {
            Appendage::Walker { driver, .. } => driver.limb().id(),
            Appendage::Rotor(rotor) => rotor.config().id,
        }
    }

    /// Transforms for the renderer. `None` for a limb that has not solved yet.
    pub fn pose(&self) -> Option<AppendagePose<'_>> {
        match self {
            Appendage::Walker { driver, .. } => driver.has_pose().then(|| AppendagePose::Limb(driver.pose())),
            Appendage::Rotor(rotor) => Some(AppendagePose::Rotor(rotor.pose())),
        }
    }

    pub fn is_walker(&self) -> bool {
        matches!(self, Appendage::Walker { .. })
    }
}
