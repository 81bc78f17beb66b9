//! Error types shared by the solver, gait and visual layers.
//!
//! None of the per-tick variants are fatal. They describe why a limb (or
//! one part of it) was left at its previous pose for a single tick.

use std::fmt;

use thiserror::Error;

use crate::limb::LimbId;

/// Part of a limb whose orientation can be skipped independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosePart {
    Upper,
    Lower,
    Joint,
    Foot,
}

impl fmt::Display for PosePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PosePart::Upper => "upper segment",
            PosePart::Lower => "lower segment",
            PosePart::Joint => "joint",
            PosePart::Foot => "foot",
        };
        f.write_str(name)
    }
}

impl PosePart {
    const ALL: [PosePart; 4] = [PosePart::Upper, PosePart::Lower, PosePart::Joint, PosePart::Foot];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Small set of pose parts, one bit each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoseParts(u8);

impl PoseParts {
    pub fn insert(&mut self, part: PosePart) {
        self.0 |= part.bit();
    }

    pub fn contains(self, part: PosePart) -> bool {
        self.0 & part.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = PosePart> {
        PosePart::ALL.into_iter().filter(move |&p| self.contains(p))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The two-bone triangle cannot be closed for this foot distance.
    #[error("unsolvable ik: distance {distance} outside [{min}, {max}]")]
    UnsolvableIk { distance: f32, min: f32, max: f32 },

    /// A look or bend direction collapsed to (near) zero length.
    #[error("degenerate orientation for {part}")]
    DegenerateOrientation { part: PosePart },

    /// The body frame needed to place this limb is not available yet.
    #[error("missing frame for limb {limb}")]
    MissingFrame { limb: LimbId },

    #[error("invalid limb {id}: {reason}")]
    InvalidLimb { id: LimbId, reason: String },

    #[error("invalid gait: {0}")]
    InvalidGait(String),
}

impl Error {
    #[must_use]
    pub const fn unsolvable(distance: f32, min: f32, max: f32) -> Self {
        Self::UnsolvableIk { distance, min, max }
    }

    #[must_use]
    pub const fn degenerate(part: PosePart) -> Self {
        Self::DegenerateOrientation { part }
    }

    #[must_use]
    pub const fn missing_frame(limb: LimbId) -> Self {
        Self::MissingFrame { limb }
    }

    #[must_use]
    pub fn invalid_limb(id: LimbId, reason: impl Into<String>) -> Self {
        Self::InvalidLimb {
            id,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn invalid_gait(reason: impl Into<String>) -> Self {
        Self::InvalidGait(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
