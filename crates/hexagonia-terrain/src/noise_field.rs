//! Multi-octave fractal noise fields with whole-field min-max normalization.
//!
//! Each octave samples a coherent noise source at an independent offset
//! drawn from a seeded RNG, so a given [`NoiseParams`] always reproduces the
//! same field bit for bit.

use glam::DVec2;
use noise::{NoiseFn, Perlin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Scale used in place of a non-positive (or NaN) scale.
pub const MIN_SCALE: f64 = 0.0001;

/// Per-octave offsets are drawn from `-OCTAVE_OFFSET_RANGE..OCTAVE_OFFSET_RANGE`.
const OCTAVE_OFFSET_RANGE: i32 = 100_000;

/// Shape parameters of a fractal noise field.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseParams {
    /// Seeds both the noise source and the per-octave offsets.
    pub seed: u64,
    /// Cells per noise unit at the first octave. Larger values give broader
    /// features. Values `<= 0` are replaced by [`MIN_SCALE`].
    pub scale: f64,
    /// Number of layers summed per cell.
    pub octaves: u32,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f64,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,
    /// Added to every octave offset; shifts the whole field.
    pub offset: DVec2,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            seed: 0,
            scale: 25.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            offset: DVec2::ZERO,
        }
    }
}

impl NoiseParams {
    /// The scale actually used for sampling.
    pub fn effective_scale(&self) -> f64 {
        if self.scale > 0.0 { self.scale } else { MIN_SCALE }
    }
}

/// Fractal (fBm) noise over a 2D coherent noise source.
///
/// The source is expected to return values in `[-1, 1]`. Each sample is
/// mapped to `[0, 1]` and clamped, then rescaled to `[-1, 1]` before being
/// weighted by the octave amplitude.
pub struct FractalNoise<N = Perlin> {
    source: N,
    params: NoiseParams,
    octave_offsets: Vec<DVec2>,
}

impl FractalNoise<Perlin> {
    /// Fractal Perlin noise seeded from `params.seed`.
    pub fn new(params: NoiseParams) -> Self {
        let source = Perlin::new(params.seed as u32);
        Self::with_source(source, params)
    }
}

impl<N: NoiseFn<f64, 2>> FractalNoise<N> {
    /// Fractal noise over an arbitrary source.
    pub fn with_source(source: N, params: NoiseParams) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
        let octave_offsets = (0..params.octaves)
            .map(|_| {
                let x = rng.random_range(-OCTAVE_OFFSET_RANGE..OCTAVE_OFFSET_RANGE) as f64;
                let y = rng.random_range(-OCTAVE_OFFSET_RANGE..OCTAVE_OFFSET_RANGE) as f64;
                DVec2::new(x, y) + params.offset
            })
            .collect();

        Self {
            source,
            params,
            octave_offsets,
        }
    }

    /// Offsets applied to each octave, in octave order.
    pub fn octave_offsets(&self) -> &[DVec2] {
        &self.octave_offsets
    }

    /// Un-normalized fractal value for cell `(x, y)` of a `width x height` field.
    ///
    /// Sample positions are centered on the field so that changing its size
    /// grows it symmetrically.
    pub fn sample_raw(&self, x: u32, y: u32, width: u32, height: u32) -> f64 {
        let scale = self.params.effective_scale();
        let half_width = width as f64 / 2.0;
        let half_height = height as f64 / 2.0;

        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut total = 0.0;

        for offset in &self.octave_offsets {
            let sample_x = (x as f64 - half_width) / scale * frequency + offset.x;
            let sample_y = (y as f64 - half_height) / scale * frequency + offset.y;

            let unit = ((self.source.get([sample_x, sample_y]) + 1.0) * 0.5).clamp(0.0, 1.0);
            total += (unit * 2.0 - 1.0) * amplitude;

            amplitude *= self.params.persistence;
            frequency *= self.params.lacunarity;
        }

        total
    }

    /// Sample every cell and normalize the result to `[0, 1]`.
    pub fn generate(&self, width: u32, height: u32) -> NoiseField {
        let mut values = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                values.push(self.sample_raw(x, y, width, height));
            }
        }
        NoiseField::normalized(width, height, values)
    }
}

/// Generate a normalized Perlin fBm field.
pub fn generate_noise_field(width: u32, height: u32, params: &NoiseParams) -> NoiseField {
    FractalNoise::new(params.clone()).generate(width, height)
}

/// A `width x height` grid of values in `[0, 1]`, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseField {
    width: u32,
    height: u32,
    values: Vec<f64>,
}

impl NoiseField {
    /// Min-max normalize raw `values` over the whole field.
    ///
    /// The observed minimum maps to exactly 0 and the maximum to exactly 1.
    /// A constant field normalizes to all zeros.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != width * height`.
    pub fn normalized(width: u32, height: u32, mut values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            width as usize * height as usize,
            "noise field size mismatch"
        );

        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let range = max - min;

        for v in &mut values {
            *v = if range > 0.0 { (*v - min) / range } else { 0.0 };
        }

        Self {
            width,
            height,
            values,
        }
    }

    /// Wrap values that are already in `[0, 1]`, row-major.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != width * height`.
    pub fn from_values(width: u32, height: u32, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            width as usize * height as usize,
            "noise field size mismatch"
        );
        Self {
            width,
            height,
            values,
        }
    }

    /// Value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get(&self, x: u32, y: u32) -> f64 {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside field");
        self.values[(y * self.width + x) as usize]
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All values, row-major.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smallest value, or `None` for an empty field.
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    /// Largest value, or `None` for an empty field.
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noise::Constant;

    fn params(seed: u64) -> NoiseParams {
        NoiseParams {
            seed,
            scale: 20.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            offset: DVec2::new(120.0, -340.0),
        }
    }

    #[test]
    fn test_determinism_same_params_bit_identical() {
        let a = generate_noise_field(24, 16, &params(42));
        let b = generate_noise_field(24, 16, &params(42));
        let bits_a: Vec<u64> = a.values().iter().map(|v| v.to_bits()).collect();
        let bits_b: Vec<u64> = b.values().iter().map(|v| v.to_bits()).collect();
        assert_eq!(bits_a, bits_b, "Same params must produce a bit-identical field");
    }

    #[test]
    fn test_different_seeds_produce_different_fields() {
        let a = generate_noise_field(16, 16, &params(1));
        let b = generate_noise_field(16, 16, &params(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_normalized_min_zero_max_one() {
        let field = generate_noise_field(32, 32, &params(7));
        assert_eq!(field.min(), Some(0.0));
        assert_eq!(field.max(), Some(1.0));
        assert!(field.values().iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_constant_source_normalizes_to_zero() {
        let noise = FractalNoise::with_source(Constant::new(0.3), params(3));
        let field = noise.generate(8, 8);
        assert!(field.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_amplitude_decays_by_persistence() {
        let noise = FractalNoise::with_source(
            Constant::new(0.5),
            NoiseParams {
                octaves: 3,
                persistence: 0.5,
                ..Default::default()
            },
        );
        // 0.5 * (1 + 0.5 + 0.25)
        let raw = noise.sample_raw(3, 4, 10, 10);
        assert!((raw - 0.875).abs() < 1e-12, "raw = {raw}");
    }

    #[test]
    fn test_source_output_clamped_to_unit_range() {
        let noise = FractalNoise::with_source(
            Constant::new(3.0),
            NoiseParams {
                octaves: 2,
                persistence: 0.5,
                ..Default::default()
            },
        );
        let raw = noise.sample_raw(0, 0, 4, 4);
        assert!((raw - 1.5).abs() < 1e-12, "raw = {raw}");
    }

    #[test]
    fn test_octave_offsets_deterministic_and_shifted() {
        let a = FractalNoise::new(params(9));
        let b = FractalNoise::new(params(9));
        assert_eq!(a.octave_offsets(), b.octave_offsets());
        assert_eq!(a.octave_offsets().len(), 4);

        let shift = params(9).offset;
        for offset in a.octave_offsets() {
            let base = *offset - shift;
            assert!(base.x >= -100_000.0 && base.x < 100_000.0);
            assert!(base.y >= -100_000.0 && base.y < 100_000.0);
            assert_eq!(base.x.fract(), 0.0);
        }
    }

    #[test]
    fn test_non_positive_scale_is_clamped() {
        assert_eq!(NoiseParams { scale: 0.0, ..params(1) }.effective_scale(), MIN_SCALE);
        assert_eq!(NoiseParams { scale: -5.0, ..params(1) }.effective_scale(), MIN_SCALE);
        assert_eq!(NoiseParams { scale: f64::NAN, ..params(1) }.effective_scale(), MIN_SCALE);

        let zero = generate_noise_field(8, 8, &NoiseParams { scale: 0.0, ..params(5) });
        let clamped = generate_noise_field(8, 8, &NoiseParams { scale: MIN_SCALE, ..params(5) });
        assert!(zero.values().iter().all(|v| v.is_finite()));
        assert_eq!(zero, clamped);
    }

    #[test]
    fn test_zero_octaves_is_flat() {
        let field = generate_noise_field(6, 6, &NoiseParams { octaves: 0, ..params(4) });
        assert!(field.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_get_is_row_major() {
        let field = NoiseField::normalized(3, 2, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(field.get(0, 0), 0.0);
        assert_eq!(field.get(2, 1), 1.0);
        assert!((field.get(1, 1) - 0.8).abs() < 1e-12);
        assert_eq!((field.width(), field.height()), (3, 2));
    }
}
