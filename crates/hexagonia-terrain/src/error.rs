//! Configuration errors rejected before generation starts.

use crate::feature::FeatureKind;

/// A map configuration that cannot be generated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapError {
    /// Width or height is zero.
    #[error("map dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// All five terrain shares are zero.
    #[error("terrain shares sum to zero")]
    EmptyTerrainDistribution,

    /// A terrain share is negative, infinite, or NaN.
    #[error("invalid {terrain} share: {value}")]
    InvalidTerrainShare { terrain: &'static str, value: f64 },

    /// A spawn chance lies outside `[0, 1]`.
    #[error("spawn chance for {kind} must be within [0, 1], got {value}")]
    InvalidSpawnChance { kind: FeatureKind, value: f64 },

    /// Tile size is not a positive finite number.
    #[error("tile size must be positive and finite, got {0}")]
    InvalidTileSize(f32),
}
