//! Generator configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "hexagonia.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Map shape, seed, and generation rules.
    pub map: MapConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
    /// What the binary writes after generation.
    pub output: OutputConfig,
}

/// Everything the generator consumes for one run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Seed for every pseudo-random draw in the run.
    pub seed: u64,
    /// World-space distance between neighboring cell centers in a column.
    pub tile_size: f32,
    /// Target share of each terrain type.
    pub terrain: TerrainShares,
    /// Special-feature spawn rules.
    pub features: FeatureConfig,
}

/// Relative terrain shares. Values are percentages but only their ratios
/// matter; they are normalized to sum to 100 before use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainShares {
    pub water: f64,
    pub land: f64,
    pub forest: f64,
    pub mountain: f64,
    pub mountain_forest: f64,
}

/// Special-feature placement settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeatureConfig {
    /// Minimum hex distance between two features of the same kind.
    pub min_distance_between_same_type: u32,
    /// Spawn chance of a chest (very rare).
    pub chest_chance: f64,
    /// Spawn chance of an archery zone (rare).
    pub archery_zone_chance: f64,
    /// Spawn chance of a pod (uncommon).
    pub pod_chance: f64,
    /// Spawn chance of a lily pad on water (common).
    pub lily_pad_chance: f64,
    /// What happens on land when the rolled tier fails its spacing check.
    pub fallthrough: TierFallthrough,
}

/// Land/forest behaviour when the rarest tier the roll qualifies for is
/// rejected by the spacing rule.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TierFallthrough {
    /// Attempt only the rarest qualifying tier; a spacing failure leaves the
    /// cell without a feature.
    #[default]
    Stop,
    /// Try each less rare tier in turn until one passes both its chance and
    /// its spacing check.
    TryLowerTiers,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g. "info", "debug,hexagonia_terrain=trace").
    pub log_level: String,
}

/// Output written by the `hexagonia` binary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Write a terrain preview PNG here.
    pub terrain_png: Option<PathBuf>,
    /// Write a grayscale height field PNG here.
    pub heightmap_png: Option<PathBuf>,
    /// Edge length of one cell in preview images.
    pub pixels_per_cell: u32,
    /// Print the ASCII map to stdout.
    pub print_ascii: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            seed: 0,
            tile_size: 1.0,
            terrain: TerrainShares::default(),
            features: FeatureConfig::default(),
        }
    }
}

impl Default for TerrainShares {
    fn default() -> Self {
        Self {
            water: 35.0,
            land: 30.0,
            forest: 20.0,
            mountain: 10.0,
            mountain_forest: 5.0,
        }
    }
}

impl TerrainShares {
    /// Sum of all five shares.
    pub fn total(&self) -> f64 {
        self.water + self.land + self.forest + self.mountain + self.mountain_forest
    }

    /// Shares as `(name, value)` pairs, lowest terrain first.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("water", self.water),
            ("land", self.land),
            ("forest", self.forest),
            ("mountain", self.mountain),
            ("mountain_forest", self.mountain_forest),
        ]
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            min_distance_between_same_type: 3,
            chest_chance: 0.001,
            archery_zone_chance: 0.009,
            pod_chance: 0.01,
            lily_pad_chance: 0.1,
            fallthrough: TierFallthrough::Stop,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            terrain_png: None,
            heightmap_png: None,
            pixels_per_cell: 8,
            print_ascii: true,
        }
    }
}

/// Platform config directory for Hexagonia, e.g. `~/.config/hexagonia`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hexagonia"))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from `config_dir`, writing a default file if none exists.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to `config_dir` as pretty-printed RON.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path,
            source,
        })
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
