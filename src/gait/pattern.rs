use crate::error::{Error, Result};
use crate::limb::LimbConfiguration;

/// How limbs are split into swing groups at assembly.
///
/// Limbs in one group lift together; two groups never swing at the same
/// instant, so whichever groups are planted keep carrying the body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GaitPattern {
    /// Each body side ordered front to back, alternating between two
    /// groups and offset by one between sides: diagonal pairs on four
    /// limbs, tripods on six, alternating tetrapods on eight.
    #[default]
    Alternating,
    /// Every limb swings alone.
    Wave,
    /// Explicit group per limb, by limb index.
    Custom(Vec<usize>),
}

impl GaitPattern {
    pub fn assign(&self, limbs: &[LimbConfiguration]) -> Result<Vec<usize>> {
        if limbs.is_empty() {
            return Err(Error::invalid_gait("a gait needs at least one limb"));
        }

        let groups = match self {
            GaitPattern::Alternating => Self::alternating(limbs),
            GaitPattern::Wave => (0..limbs.len()).collect(),
            GaitPattern::Custom(groups) => {
                if groups.len() != limbs.len() {
                    return Err(Error::invalid_gait(format!(
                        "{} groups given for {} limbs",
                        groups.len(),
                        limbs.len()
                    )));
                }
                groups.clone()
            }
        };

        let distinct = group_count(&groups);
        if limbs.len() > 1 && distinct < 2 {
            return Err(Error::invalid_gait("all limbs share one swing group"));
        }
        Ok(groups)
    }

    fn alternating(limbs: &[LimbConfiguration]) -> Vec<usize> {
        let mut groups = vec![0; limbs.len()];
        for side in 0..2usize {
            let mut on_side: Vec<usize> = (0..limbs.len())
                .filter(|&i| usize::from(limbs[i].origin_offset().x < 0.0) == side)
                .collect();
            on_side.sort_by(|&a, &b| {
                let (za, zb) = (limbs[a].origin_offset().z, limbs[b].origin_offset().z);
                zb.total_cmp(&za).then(a.cmp(&b))
            });
            for (rank, &i) in on_side.iter().enumerate() {
                groups[i] = (rank + side) % 2;
            }
        }
        groups
    }
}

pub(crate) fn group_count(groups: &[usize]) -> usize {
    let mut seen: Vec<usize> = groups.to_vec();
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn limb(id: u32, x: f32, z: f32) -> LimbConfiguration {
        LimbConfiguration::builder(id)
            .origin_offset(Vec3::new(x, 0.0, z))
            .build()
            .unwrap()
    }

    #[test]
    fn quadruped_pairs_diagonals() {
        // front-right, front-left, back-right, back-left
        let limbs = [
            limb(0, 1.0, 1.0),
            limb(1, -1.0, 1.0),
            limb(2, 1.0, -1.0),
            limb(3, -1.0, -1.0),
        ];
        let groups = GaitPattern::Alternating.assign(&limbs).unwrap();
        assert_eq!(groups[0], groups[3]);
        assert_eq!(groups[1], groups[2]);
        assert_ne!(groups[0], groups[1]);
    }

    #[test]
    fn hexapod_forms_tripods() {
        let limbs = [
            limb(0, 1.0, 1.0),
            limb(1, 1.0, 0.0),
            limb(2, 1.0, -1.0),
            limb(3, -1.0, 1.0),
            limb(4, -1.0, 0.0),
            limb(5, -1.0, -1.0),
        ];
        let groups = GaitPattern::Alternating.assign(&limbs).unwrap();
        assert_eq!(groups, vec![0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn wave_isolates_every_limb() {
        let limbs = [limb(0, 1.0, 1.0), limb(1, -1.0, 1.0), limb(2, 0.0, -1.0)];
        assert_eq!(GaitPattern::Wave.assign(&limbs).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn custom_length_must_match() {
        let limbs = [limb(0, 1.0, 1.0), limb(1, -1.0, 1.0)];
        assert!(GaitPattern::Custom(vec![0]).assign(&limbs).is_err());
        assert!(GaitPattern::Custom(vec![1, 1]).assign(&limbs).is_err());
        assert_eq!(GaitPattern::Custom(vec![1, 0]).assign(&limbs).unwrap(), vec![1, 0]);
    }
}
