//! Terrain classification: maps a normalized height to a terrain bucket and,
//! for mountains, a discrete height tier.

use std::fmt;

use hexagonia_config::TerrainShares;

use crate::error::MapError;

/// Terrain category of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TerrainType {
    Water,
    Land,
    Forest,
    Mountain,
    MountainForest,
    /// A special feature was placed on the cell; the original type lives in
    /// the cell's feature record.
    SpecialFeature,
}

impl TerrainType {
    /// The five height-derived types, lowest first.
    pub const BASE: [TerrainType; 5] = [
        TerrainType::Water,
        TerrainType::Land,
        TerrainType::Forest,
        TerrainType::Mountain,
        TerrainType::MountainForest,
    ];

    /// Returns `true` for `Mountain` and `MountainForest`.
    pub fn is_mountainous(self) -> bool {
        matches!(self, TerrainType::Mountain | TerrainType::MountainForest)
    }

    pub fn label(self) -> &'static str {
        match self {
            TerrainType::Water => "Water",
            TerrainType::Land => "Land",
            TerrainType::Forest => "Forest",
            TerrainType::Mountain => "Mountain",
            TerrainType::MountainForest => "MountainForest",
            TerrainType::SpecialFeature => "SpecialFeature",
        }
    }
}

impl fmt::Display for TerrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalize the five shares so they sum to 1, lowest terrain first.
///
/// # Errors
///
/// Rejects negative or non-finite shares and an all-zero distribution.
pub fn normalized_shares(shares: &TerrainShares) -> Result<[f64; 5], MapError> {
    let entries = shares.entries();
    for (terrain, value) in entries {
        if !value.is_finite() || value < 0.0 {
            return Err(MapError::InvalidTerrainShare { terrain, value });
        }
    }

    let total = shares.total();
    if total <= 0.0 {
        return Err(MapError::EmptyTerrainDistribution);
    }

    Ok(entries.map(|(_, value)| value / total))
}

/// Cumulative height boundaries between terrain buckets.
///
/// Heights below `water` are Water, below `forest` Land, below `mountain`
/// Forest, below `mountain_forest` Mountain, and everything else
/// MountainForest. Boundaries are non-decreasing, so every height in
/// `[0, 1]` lands in exactly one bucket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainThresholds {
    pub water: f64,
    pub forest: f64,
    pub mountain: f64,
    pub mountain_forest: f64,
}

impl TerrainThresholds {
    pub fn new(water: f64, forest: f64, mountain: f64, mountain_forest: f64) -> Self {
        Self {
            water,
            forest,
            mountain,
            mountain_forest,
        }
    }

    /// Thresholds as running sums of the normalized shares.
    pub fn from_shares(shares: &TerrainShares) -> Result<Self, MapError> {
        let [water, land, forest, mountain, _] = normalized_shares(shares)?;
        let water_threshold = water;
        let forest_threshold = water_threshold + land;
        let mountain_threshold = forest_threshold + forest;
        let mountain_forest_threshold = mountain_threshold + mountain;
        Ok(Self::new(
            water_threshold,
            forest_threshold,
            mountain_threshold,
            mountain_forest_threshold,
        ))
    }

    /// Bucket for a normalized height.
    pub fn classify(&self, height: f64) -> TerrainType {
        if height < self.water {
            TerrainType::Water
        } else if height < self.forest {
            TerrainType::Land
        } else if height < self.mountain {
            TerrainType::Forest
        } else if height < self.mountain_forest {
            TerrainType::Mountain
        } else {
            TerrainType::MountainForest
        }
    }

    /// Height tier in `1..=4` for mountainous heights, 0 otherwise.
    pub fn mountain_tier(&self, height: f64) -> u8 {
        if height < self.mountain {
            return 0;
        }
        let span = 1.0 - self.mountain;
        let excess = if span > 0.0 {
            ((height - self.mountain) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        tier_for_excess(excess)
    }
}

impl Default for TerrainThresholds {
    fn default() -> Self {
        Self::new(0.35, 0.65, 0.85, 0.95)
    }
}

/// Tier for the normalized excess height above the mountain threshold.
///
/// Breakpoints 0.45 / 0.75 / 0.95 split mountains roughly 45/30/20/5 across
/// tiers 1-4.
pub fn tier_for_excess(excess: f64) -> u8 {
    if excess > 0.95 {
        4
    } else if excess > 0.75 {
        3
    } else if excess > 0.45 {
        2
    } else {
        1
    }
}
