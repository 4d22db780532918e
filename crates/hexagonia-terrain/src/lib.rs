//! Procedural hex-grid map generation: fractal noise fields, terrain
//! classification, neighbor topology, and rarity-tiered feature placement.

mod classify;
mod error;
mod feature;
mod generator;
mod grid;
mod noise_field;
mod params;

pub mod debug_viz;

pub use classify::{TerrainThresholds, TerrainType, normalized_shares, tier_for_excess};
pub use error::MapError;
pub use feature::{
    FeatureKind, PlacementRegistry, Rarity, SpawnTable, SpecialFeature, place_features,
};
pub use generator::{GeneratedMap, generate, generate_map, validate};
pub use grid::{Cell, ELEVATION_PER_TIER, Grid, HexNeighbors, VERTICAL_SCALE_PER_TIER};
pub use noise_field::{FractalNoise, MIN_SCALE, NoiseField, NoiseParams, generate_noise_field};
pub use params::{GenerationParams, generation_rng};
