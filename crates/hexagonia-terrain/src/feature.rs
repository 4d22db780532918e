//! Special-feature placement: one random draw per cell, rarity-ordered
//! eligibility, and a same-kind minimum spacing enforced in hex steps.

use std::fmt;

use hashbrown::HashMap;
use hexagonia_config::{FeatureConfig, TierFallthrough};
use hexagonia_hex::{OffsetCoord, hex_distance};
use rand::Rng;

use crate::classify::TerrainType;
use crate::error::MapError;
use crate::grid::Grid;

/// Rarity tier of a feature kind. Higher is rarer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rarity {
    Common = 1,
    Uncommon = 2,
    Rare = 3,
    VeryRare = 4,
}

impl Rarity {
    pub fn tier(self) -> u8 {
        self as u8
    }
}

/// Kind of special feature a cell can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    LilyPad,
    Pod,
    ArcheryZone,
    Chest,
}

impl FeatureKind {
    /// All kinds, most common first.
    pub const ALL: [FeatureKind; 4] = [
        FeatureKind::LilyPad,
        FeatureKind::Pod,
        FeatureKind::ArcheryZone,
        FeatureKind::Chest,
    ];

    /// Kinds eligible on Land and Forest, rarest first.
    pub const LAND_PRIORITY: [FeatureKind; 3] =
        [FeatureKind::Chest, FeatureKind::ArcheryZone, FeatureKind::Pod];

    pub fn rarity(self) -> Rarity {
        match self {
            FeatureKind::LilyPad => Rarity::Common,
            FeatureKind::Pod => Rarity::Uncommon,
            FeatureKind::ArcheryZone => Rarity::Rare,
            FeatureKind::Chest => Rarity::VeryRare,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeatureKind::LilyPad => "LilyPad",
            FeatureKind::Pod => "Pod",
            FeatureKind::ArcheryZone => "ArcheryZone",
            FeatureKind::Chest => "Chest",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Feature record attached to a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpecialFeature {
    /// Terrain the cell had before the feature replaced it.
    pub base_terrain: TerrainType,
    pub rarity: Rarity,
    pub kind: FeatureKind,
}

/// Spawn chance per feature kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnTable {
    pub lily_pad: f64,
    pub pod: f64,
    pub archery_zone: f64,
    pub chest: f64,
}

impl Default for SpawnTable {
    fn default() -> Self {
        Self {
            lily_pad: 0.1,
            pod: 0.01,
            archery_zone: 0.009,
            chest: 0.001,
        }
    }
}

impl SpawnTable {
    /// Build a table from configuration, rejecting chances outside `[0, 1]`.
    pub fn from_config(config: &FeatureConfig) -> Result<Self, MapError> {
        let table = Self {
            lily_pad: config.lily_pad_chance,
            pod: config.pod_chance,
            archery_zone: config.archery_zone_chance,
            chest: config.chest_chance,
        };
        table.validate()?;
        Ok(table)
    }

    /// Check that every chance lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), MapError> {
        for kind in FeatureKind::ALL {
            let value = self.chance(kind);
            if !(0.0..=1.0).contains(&value) {
                return Err(MapError::InvalidSpawnChance { kind, value });
            }
        }
        Ok(())
    }

    pub fn chance(&self, kind: FeatureKind) -> f64 {
        match kind {
            FeatureKind::LilyPad => self.lily_pad,
            FeatureKind::Pod => self.pod,
            FeatureKind::ArcheryZone => self.archery_zone,
            FeatureKind::Chest => self.chest,
        }
    }
}

/// Accepted positions per feature kind, in acceptance order.
#[derive(Clone, Debug, Default)]
pub struct PlacementRegistry {
    positions: HashMap<FeatureKind, Vec<OffsetCoord>>,
}

impl PlacementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `coord` is at least `min_distance` hex steps from
    /// every accepted position of `kind`.
    pub fn can_place(&self, kind: FeatureKind, coord: OffsetCoord, min_distance: u32) -> bool {
        self.positions(kind)
            .iter()
            .all(|&placed| hex_distance(coord, placed) >= min_distance)
    }

    pub fn record(&mut self, kind: FeatureKind, coord: OffsetCoord) {
        self.positions.entry(kind).or_default().push(coord);
    }

    pub fn positions(&self, kind: FeatureKind) -> &[OffsetCoord] {
        self.positions.get(&kind).map_or(&[], Vec::as_slice)
    }

    pub fn count(&self, kind: FeatureKind) -> usize {
        self.positions(kind).len()
    }

    /// Total number of placed features.
    pub fn total(&self) -> usize {
        self.positions.values().map(Vec::len).sum()
    }
}

/// Pick the feature for a Land or Forest cell given its roll.
fn land_candidate(
    registry: &PlacementRegistry,
    table: &SpawnTable,
    roll: f64,
    coord: OffsetCoord,
    min_distance: u32,
    fallthrough: TierFallthrough,
) -> Option<FeatureKind> {
    match fallthrough {
        TierFallthrough::Stop => FeatureKind::LAND_PRIORITY
            .into_iter()
            .find(|&kind| roll < table.chance(kind))
            .filter(|&kind| registry.can_place(kind, coord, min_distance)),
        TierFallthrough::TryLowerTiers => FeatureKind::LAND_PRIORITY.into_iter().find(|&kind| {
            roll < table.chance(kind) && registry.can_place(kind, coord, min_distance)
        }),
    }
}

/// Place special features over `grid`.
///
/// Cells are visited in storage order and each cell consumes exactly one
/// value from `rng`, whatever its terrain. Water only takes lily pads,
/// Land and Forest take the rarer kinds, mountains take nothing.
pub fn place_features(
    grid: &mut Grid,
    rng: &mut impl Rng,
    table: &SpawnTable,
    min_distance: u32,
    fallthrough: TierFallthrough,
) -> PlacementRegistry {
    let mut registry = PlacementRegistry::new();

    let coords: Vec<OffsetCoord> = grid.cells().iter().map(|cell| cell.coord).collect();
    for coord in coords {
        let roll = rng.random::<f64>();
        let Some(cell) = grid.get_mut(coord) else {
            continue;
        };

        let candidate = match cell.terrain {
            TerrainType::Water => Some(FeatureKind::LilyPad).filter(|&kind| {
                roll < table.chance(kind) && registry.can_place(kind, coord, min_distance)
            }),
            TerrainType::Land | TerrainType::Forest => {
                land_candidate(&registry, table, roll, coord, min_distance, fallthrough)
            }
            TerrainType::Mountain | TerrainType::MountainForest | TerrainType::SpecialFeature => {
                None
            }
        };

        if let Some(kind) = candidate {
            cell.feature = Some(SpecialFeature {
                base_terrain: cell.terrain,
                rarity: kind.rarity(),
                kind,
            });
            cell.terrain = TerrainType::SpecialFeature;
            registry.record(kind, coord);
            tracing::trace!(%kind, %coord, roll, "placed feature");
        }
    }

    registry
}
