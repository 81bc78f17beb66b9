use log::warn;

use super::swing::SwingProfile;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GaitPreset {
    Walk,
    Trot,
    Scuttle,
}

impl GaitPreset {
    /// `(stride_threshold, stride_lead, swing_duration, step_height)`
    pub fn params(self) -> (f32, f32, f32, f32) {
        match self {
            GaitPreset::Walk => (0.8, 0.5, 0.25, 0.4),
            GaitPreset::Trot => (0.6, 0.4, 0.15, 0.3),
            GaitPreset::Scuttle => (0.45, 0.3, 0.1, 0.2),
        }
    }
}

/// Tuning for foot placement and swing timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaitConfig {
    /// Stance error that triggers a step while moving.
    pub stride_threshold: f32,
    /// How far ahead of the stance point, along travel, a new foot lands.
    pub stride_lead: f32,
    /// Stance error that triggers a corrective step while idle.
    pub settle_threshold: f32,
    /// Limbs closer than this to their new target stay planted when their
    /// group swings.
    pub min_step: f32,
    pub swing_duration: f32,
    pub step_height: f32,
    /// Horizontal distance of the stance point outward from the shoulder.
    pub stance_spread: f32,
}

impl Default for GaitConfig {
    fn default() -> Self {
        Self::from_preset(GaitPreset::Walk)
    }
}

impl GaitConfig {
    pub fn from_preset(preset: GaitPreset) -> Self {
        let (stride_threshold, stride_lead, swing_duration, step_height) = preset.params();
        Self {
            stride_threshold,
            stride_lead,
            settle_threshold: stride_threshold * 0.3,
            min_step: 0.05,
            swing_duration,
            step_height,
            stance_spread: 0.6,
        }
    }

    pub fn swing_profile(&self) -> SwingProfile {
        SwingProfile {
            duration: self.swing_duration,
            step_height: self.step_height,
        }
    }

    /// Rejects unusable values. A lead at or past the stride threshold
    /// would retrigger immediately, so it is pulled back with a warning.
    pub fn validated(mut self) -> Result<Self> {
        let positive = [
            ("stride_threshold", self.stride_threshold),
            ("settle_threshold", self.settle_threshold),
            ("swing_duration", self.swing_duration),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(Error::invalid_gait(format!("{name} must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("stride_lead", self.stride_lead),
            ("min_step", self.min_step),
            ("step_height", self.step_height),
            ("stance_spread", self.stance_spread),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(Error::invalid_gait(format!("{name} must be non-negative, got {value}")));
            }
        }

        if self.stride_lead >= self.stride_threshold {
            let lead = self.stride_threshold * 0.9;
            warn!(
                "stride lead {} >= threshold {}, using {}",
                self.stride_lead, self.stride_threshold, lead
            );
            self.stride_lead = lead;
        }
        Ok(self)
    }
}
