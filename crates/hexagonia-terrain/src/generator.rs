//! The generation pipeline: validate, pick noise parameters, sample the
//! fields, classify and link the grid, then place features.
//!
//! Every stage consumes the full output of the previous one and all
//! randomness flows from one seeded stream, so the same [`MapConfig`]
//! always yields the same [`Grid`].

use std::time::Instant;

use hexagonia_config::MapConfig;
use hexagonia_hex::HexLayout;
use tracing::{debug, info};

use crate::classify::{TerrainThresholds, TerrainType, normalized_shares};
use crate::error::MapError;
use crate::feature::{FeatureKind, PlacementRegistry, SpawnTable, place_features};
use crate::grid::Grid;
use crate::noise_field::generate_noise_field;
use crate::params::{GenerationParams, generation_rng};

/// A generated grid together with what produced it.
#[derive(Debug)]
pub struct GeneratedMap {
    pub grid: Grid,
    /// Noise shape drawn from the seed.
    pub params: GenerationParams,
    pub thresholds: TerrainThresholds,
    /// Accepted feature positions per kind.
    pub placements: PlacementRegistry,
}

/// Reject a configuration that cannot produce a grid.
///
/// Checks run in a fixed order and the first failure is returned.
pub fn validate(config: &MapConfig) -> Result<(), MapError> {
    if config.width == 0 || config.height == 0 {
        return Err(MapError::InvalidDimensions {
            width: config.width,
            height: config.height,
        });
    }
    if !config.tile_size.is_finite() || config.tile_size <= 0.0 {
        return Err(MapError::InvalidTileSize(config.tile_size));
    }
    normalized_shares(&config.terrain)?;
    SpawnTable::from_config(&config.features)?;
    Ok(())
}

/// Generate a map from `config`.
pub fn generate(config: &MapConfig) -> Result<Grid, MapError> {
    generate_map(config).map(|map| map.grid)
}

/// Generate a map and keep the intermediate parameters and placements.
///
/// # Errors
///
/// Returns a [`MapError`] if the configuration is invalid. Nothing is
/// generated in that case.
pub fn generate_map(config: &MapConfig) -> Result<GeneratedMap, MapError> {
    validate(config)?;
    let thresholds = TerrainThresholds::from_shares(&config.terrain)?;
    let table = SpawnTable::from_config(&config.features)?;
    let layout = HexLayout::new(config.tile_size);

    let [water, land, forest, mountain, mountain_forest] = normalized_shares(&config.terrain)?;
    info!(
        water = water * 100.0,
        land = land * 100.0,
        forest = forest * 100.0,
        mountain = mountain * 100.0,
        mountain_forest = mountain_forest * 100.0,
        "terrain distribution (%)"
    );

    let mut rng = generation_rng(config.seed);
    let params = GenerationParams::randomize(config.seed, &mut rng);
    info!(
        seed = params.seed,
        scale = params.noise_scale,
        octaves = params.octaves,
        persistence = params.persistence,
        lacunarity = params.lacunarity,
        offset_x = params.offset.x,
        offset_y = params.offset.y,
        "noise parameters"
    );

    let start = Instant::now();
    let heights = generate_noise_field(config.width, config.height, &params.height_noise());
    let forest_field = generate_noise_field(config.width, config.height, &params.forest_noise());
    debug!(elapsed_ms = start.elapsed().as_secs_f64() * 1000.0, "noise fields sampled");

    let start = Instant::now();
    let mut grid = Grid::build(
        config.width,
        config.height,
        &heights,
        &forest_field,
        &thresholds,
        &layout,
    );
    let counts = grid.terrain_counts();
    debug!(
        cells = grid.len(),
        water = counts.get(&TerrainType::Water).copied().unwrap_or(0),
        land = counts.get(&TerrainType::Land).copied().unwrap_or(0),
        forest = counts.get(&TerrainType::Forest).copied().unwrap_or(0),
        mountain = counts.get(&TerrainType::Mountain).copied().unwrap_or(0),
        mountain_forest = counts.get(&TerrainType::MountainForest).copied().unwrap_or(0),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "grid classified and linked"
    );

    let placements = place_features(
        &mut grid,
        &mut rng,
        &table,
        config.features.min_distance_between_same_type,
        config.features.fallthrough,
    );
    debug!(
        lily_pads = placements.count(FeatureKind::LilyPad),
        pods = placements.count(FeatureKind::Pod),
        archery_zones = placements.count(FeatureKind::ArcheryZone),
        chests = placements.count(FeatureKind::Chest),
        "features placed"
    );

    Ok(GeneratedMap {
        grid,
        params,
        thresholds,
        placements,
    })
}
