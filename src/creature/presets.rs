//! Ready-made creatures.

use glam::Vec3;

use super::assembly::{Creature, CreatureBuilder};
use super::rotor::RotorConfiguration;
use crate::error::Result;
use crate::gait::{GaitConfig, GaitPreset};
use crate::limb::LimbConfiguration;

/// Shoulder offsets shared by the four-cornered bodies: front right, front
/// left, back right, back left.
const CORNERS: [(f32, f32); 4] = [(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)];

/// Four legs on the body corners, unit segments, reach 2.
pub fn quad_walker() -> Result<CreatureBuilder> {
    let limbs = CORNERS
        .iter()
        .enumerate()
        .map(|(id, &(x, z))| {
            LimbConfiguration::builder(id as u32)
                .origin_offset(Vec3::new(x, 0.0, z))
                .lengths(1.0, 1.0)
                .max_reach(2.0)
                .build()
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Creature::builder().limbs(limbs))
}

/// Eight long legs in two rows of four. Even ids sit on the right.
pub fn spider() -> Result<CreatureBuilder> {
    const ROWS: [f32; 4] = [0.9, 0.3, -0.3, -0.9];

    let mut limbs = Vec::with_capacity(8);
    for (row, &z) in ROWS.iter().enumerate() {
        for (side, x) in [0.8_f32, -0.8].into_iter().enumerate() {
            let limb = LimbConfiguration::builder((row * 2 + side) as u32)
                .origin_offset(Vec3::new(x, 0.0, z))
                .lengths(1.4, 1.6)
                .max_reach(3.0)
                .build()?;
            limbs.push(limb);
        }
    }
    Ok(Creature::builder()
        .limbs(limbs)
        .gait(GaitConfig::from_preset(GaitPreset::Scuttle)))
}

/// Four rotors on the body corners. The body turns toward its aim target.
pub fn aero_creature() -> CreatureBuilder {
    CORNERS
        .iter()
        .enumerate()
        .fold(Creature::builder().face_aim(true), |builder, (id, &(x, z))| {
            builder.rotor(RotorConfiguration::new(id as u32, Vec3::new(x, 0.0, z)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limb::LimbId;

    #[test]
    fn quad_walker_pairs_diagonals() {
        let creature = quad_walker().unwrap().build().unwrap();
        let gait = creature.gait().unwrap();
        // FR + BL, FL + BR
        assert_eq!(gait.group_of(0), gait.group_of(3));
        assert_eq!(gait.group_of(1), gait.group_of(2));
        assert_ne!(gait.group_of(0), gait.group_of(1));
    }

    #[test]
    fn spider_builds_eight_legs() {
        let creature = spider().unwrap().build().unwrap();
        assert_eq!(creature.appendages().len(), 8);
        assert!(creature.appendages().iter().all(|a| a.is_walker()));
        assert_eq!(creature.gait().unwrap().config().stride_threshold, 0.45);
    }

    #[test]
    fn aero_creature_flies_without_a_gait() {
        let creature = aero_creature().build().unwrap();
        assert!(creature.gait().is_none());
        assert!(creature.limb_state(LimbId(0)).is_none());
        assert_eq!(creature.appendages().len(), 4);
    }
}
