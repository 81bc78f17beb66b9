use std::fmt;

use glam::Vec3;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LimbId(pub u32);

impl fmt::Display for LimbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Static description of one limb, fixed at creature assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct LimbConfiguration {
    pub(crate) id: LimbId,
    pub(crate) origin_offset: Vec3,
    pub(crate) l1: f32,
    pub(crate) l2: f32,
    pub(crate) max_reach: f32,
}

impl LimbConfiguration {
    pub fn builder(id: u32) -> LimbConfigurationBuilder {
        LimbConfigurationBuilder::new(id)
    }

    pub fn id(&self) -> LimbId {
        self.id
    }

    /// Attachment point in the body frame.
    pub fn origin_offset(&self) -> Vec3 {
        self.origin_offset
    }

    pub fn l1(&self) -> f32 {
        self.l1
    }

    pub fn l2(&self) -> f32 {
        self.l2
    }

    pub fn max_reach(&self) -> f32 {
        self.max_reach
    }
}

pub struct LimbConfigurationBuilder {
    id: LimbId,
    origin_offset: Vec3,
    l1: f32,
    l2: f32,
    max_reach: Option<f32>,
}

impl LimbConfigurationBuilder {
    pub fn new(id: u32) -> Self {
        Self {
            id: LimbId(id),
            origin_offset: Vec3::ZERO,
            l1: 1.0,
            l2: 1.0,
            max_reach: None,
        }
    }

    pub fn origin_offset(mut self, offset: Vec3) -> Self {
        self.origin_offset = offset;
        self
    }

    pub fn lengths(mut self, l1: f32, l2: f32) -> Self {
        self.l1 = l1;
        self.l2 = l2;
        self
    }

    /// Defaults to `l1 + l2` when not set.
    pub fn max_reach(mut self, max_reach: f32) -> Self {
        self.max_reach = Some(max_reach);
        self
    }

    pub fn build(self) -> Result<LimbConfiguration> {
        let id = self.id;
        if !self.origin_offset.is_finite() {
            return Err(Error::invalid_limb(id, "origin offset must be finite"));
        }
        if !(self.l1 > 0.0 && self.l1.is_finite()) {
            return Err(Error::invalid_limb(id, format!("l1 must be positive, got {}", self.l1)));
        }
        if !(self.l2 > 0.0 && self.l2.is_finite()) {
            return Err(Error::invalid_limb(id, format!("l2 must be positive, got {}", self.l2)));
        }

        let total = self.l1 + self.l2;
        let max_reach = self.max_reach.unwrap_or(total);
        if !(max_reach > 0.0) || max_reach > total {
            return Err(Error::invalid_limb(
                id,
                format!("max reach {max_reach} must be in (0, {total}]"),
            ));
        }
        if max_reach <= (self.l1 - self.l2).abs() {
            return Err(Error::invalid_limb(
                id,
                format!("max reach {max_reach} does not exceed the folded length"),
            ));
        }

        Ok(LimbConfiguration {
            id,
            origin_offset: self.origin_offset,
            l1: self.l1,
            l2: self.l2,
            max_reach,
        })
    }
}
