//! Seed-derived noise parameters and the shared generation RNG.
//!
//! One [`ChaCha8Rng`] seeded with the map seed is the only random stream of
//! a run: it first picks the noise shape here, then drives special-feature
//! placement one draw per cell. Keeping a single stream consumed in a fixed
//! order is what makes a seed reproduce the same map.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::noise_field::NoiseParams;

/// Seed offset between the height field and the forest field.
const FOREST_SEED_OFFSET: u64 = 1;
/// Forest noise is this much broader than the height noise.
const FOREST_SCALE_FACTOR: f64 = 1.5;
/// Added to both offset components of the forest field.
const FOREST_OFFSET_SHIFT: f64 = 100.0;
/// Field offsets are drawn from `-FIELD_OFFSET_RANGE..FIELD_OFFSET_RANGE`.
const FIELD_OFFSET_RANGE: i32 = 10_000;

/// The shared generation stream for a seed.
pub fn generation_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Noise shape picked from the seed for one map.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationParams {
    pub seed: u64,
    /// In `[15, 45)`.
    pub noise_scale: f64,
    /// In `3..=6`.
    pub octaves: u32,
    /// In `[0.3, 0.7)`.
    pub persistence: f64,
    /// In `[1.5, 2.5)`.
    pub lacunarity: f64,
    /// Integer components in `-10000..10000`.
    pub offset: DVec2,
}

impl GenerationParams {
    /// Draw the noise shape from `rng`, in a fixed order: scale, octaves,
    /// persistence, lacunarity, offset x, offset y.
    pub fn randomize(seed: u64, rng: &mut impl Rng) -> Self {
        let noise_scale = 15.0 + rng.random::<f64>() * 30.0;
        let octaves = 3 + rng.random_range(0..4u32);
        let persistence = 0.3 + rng.random::<f64>() * 0.4;
        let lacunarity = 1.5 + rng.random::<f64>();
        let offset_x = rng.random_range(-FIELD_OFFSET_RANGE..FIELD_OFFSET_RANGE);
        let offset_y = rng.random_range(-FIELD_OFFSET_RANGE..FIELD_OFFSET_RANGE);

        Self {
            seed,
            noise_scale,
            octaves,
            persistence,
            lacunarity,
            offset: DVec2::new(offset_x as f64, offset_y as f64),
        }
    }

    /// Parameters of the primary height field.
    pub fn height_noise(&self) -> NoiseParams {
        NoiseParams {
            seed: self.seed,
            scale: self.noise_scale,
            octaves: self.octaves,
            persistence: self.persistence,
            lacunarity: self.lacunarity,
            offset: self.offset,
        }
    }

    /// Parameters of the secondary forest field: next seed, broader scale,
    /// one fewer octave (at least one), shifted offset.
    pub fn forest_noise(&self) -> NoiseParams {
        NoiseParams {
            seed: self.seed.wrapping_add(FOREST_SEED_OFFSET),
            scale: self.noise_scale * FOREST_SCALE_FACTOR,
            octaves: self.octaves.saturating_sub(1).max(1),
            persistence: self.persistence,
            lacunarity: self.lacunarity,
            offset: self.offset + DVec2::splat(FOREST_OFFSET_SHIFT),
        }
    }
}
