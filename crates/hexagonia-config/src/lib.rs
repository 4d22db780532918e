//! Configuration for the Hexagonia map generator.
//!
//! Generation settings persist to disk as a RON file and can be overridden
//! from the command line via clap. Missing fields fall back to defaults so
//! older config files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, Config, DebugConfig, FeatureConfig, MapConfig, OutputConfig, TerrainShares,
    TierFallthrough, default_config_dir,
};
pub use error::ConfigError;
