//! Ground queries used to plant feet.
//!
//! The gait controller only sees the [`Ground`] trait. A few procedural
//! surfaces are provided for demos and tests.

use glam::Vec3;

/// Half-width of the central difference used for normals.
const NORMAL_SAMPLE: f32 = 0.05;

pub trait Ground: Send + Sync {
    /// Surface height and unit normal under `(x, z)`.
    fn height_and_normal_at(&self, x: f32, z: f32) -> (f32, Vec3);

    /// Drops `point` vertically onto the surface.
    fn project(&self, point: Vec3) -> (Vec3, Vec3) {
        let (height, normal) = self.height_and_normal_at(point.x, point.z);
        (Vec3::new(point.x, height, point.z), normal)
    }
}

fn normal_from_heights(height: impl Fn(f32, f32) -> f32, x: f32, z: f32) -> Vec3 {
    let e = NORMAL_SAMPLE;
    let dx = height(x - e, z) - height(x + e, z);
    let dz = height(x, z - e) - height(x, z + e);
    Vec3::new(dx, 2.0 * e, dz).normalize_or(Vec3::Y)
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlatGround {
    pub height: f32,
}

impl FlatGround {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl Ground for FlatGround {
    fn height_and_normal_at(&self, _x: f32, _z: f32) -> (f32, Vec3) {
        (self.height, Vec3::Y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerrainKind {
    #[default]
    Flat,
    Hills,
    Steps,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProceduralTerrain {
    pub kind: TerrainKind,
    pub amplitude: f32,
    pub wavelength: f32,
}

impl Default for ProceduralTerrain {
    fn default() -> Self {
        Self {
            kind: TerrainKind::Flat,
            amplitude: 0.5,
            wavelength: 6.0,
        }
    }
}

impl ProceduralTerrain {
    pub fn new(kind: TerrainKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let k = std::f32::consts::TAU / self.wavelength.max(1e-3);
        match self.kind {
            TerrainKind::Flat => 0.0,
            TerrainKind::Hills => self.amplitude * 0.5 * ((x * k).sin() + (z * k * 0.7).cos()),
            TerrainKind::Steps => {
                let run = self.wavelength.max(1e-3) * 0.25;
                (z / run).floor() * self.amplitude * 0.25
            }
        }
    }
}

impl Ground for ProceduralTerrain {
    fn height_and_normal_at(&self, x: f32, z: f32) -> (f32, Vec3) {
        let height = self.height_at(x, z);
        let normal = match self.kind {
            TerrainKind::Flat => Vec3::Y,
            _ => normal_from_heights(|x, z| self.height_at(x, z), x, z),
        };
        (height, normal)
    }
}

/// Adapts a plain height function into a [`Ground`].
pub struct HeightFn<F>(pub F);

impl<F> Ground for HeightFn<F>
where
    F: Fn(f32, f32) -> f32 + Send + Sync,
{
    fn height_and_normal_at(&self, x: f32, z: f32) -> (f32, Vec3) {
        let height = (self.0)(x, z);
        (height, normal_from_heights(&self.0, x, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn flat_ground_projects_to_its_height() {
        let ground = FlatGround::new(-0.25);
        let (p, n) = ground.project(Vec3::new(3.0, 5.0, -2.0));
        assert_eq!(p, Vec3::new(3.0, -0.25, -2.0));
        assert_eq!(n, Vec3::Y);
    }

    #[test]
    fn slope_normal_leans_downhill() {
        let ground = HeightFn(|x: f32, _z: f32| 0.5 * x);
        let (h, n) = ground.height_and_normal_at(2.0, 0.0);
        assert_abs_diff_eq!(h, 1.0, epsilon = 1e-6);
        assert!(n.x < 0.0);
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(n.x / n.y, -0.5, epsilon = 1e-3);
    }

    #[test]
    fn hills_stay_within_amplitude() {
        let terrain = ProceduralTerrain::new(TerrainKind::Hills);
        for i in 0..50 {
            let x = i as f32 * 0.37 - 9.0;
            let z = i as f32 * -0.53 + 4.0;
            let (h, n) = terrain.height_and_normal_at(x, z);
            assert!(h.abs() <= terrain.amplitude + 1e-5);
            assert!(n.y > 0.0);
        }
    }

    #[test]
    fn steps_rise_along_z() {
        let terrain = ProceduralTerrain::new(TerrainKind::Steps);
        assert!(terrain.height_at(0.0, 10.0) > terrain.height_at(0.0, 0.0));
        assert_eq!(terrain.height_at(-3.0, 0.2), terrain.height_at(3.0, 0.2));
    }
}
