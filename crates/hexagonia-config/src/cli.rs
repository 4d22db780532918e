//! Command-line arguments for the `hexagonia` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Procedural hex map generator.
///
/// CLI values override settings loaded from `hexagonia.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "hexagonia", about = "Procedural hex map generator")]
pub struct CliArgs {
    /// Number of columns.
    #[arg(long)]
    pub width: Option<u32>,

    /// Number of rows.
    #[arg(long)]
    pub height: Option<u32>,

    /// Generation seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// World-space tile size.
    #[arg(long)]
    pub tile_size: Option<f32>,

    /// Minimum hex distance between features of the same kind.
    #[arg(long)]
    pub min_distance: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a terrain preview PNG to this path.
    #[arg(long)]
    pub terrain_png: Option<PathBuf>,

    /// Write a grayscale height field PNG to this path.
    #[arg(long)]
    pub heightmap_png: Option<PathBuf>,

    /// Do not print the ASCII map.
    #[arg(long)]
    pub no_ascii: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.map.width = w;
        }
        if let Some(h) = args.height {
            self.map.height = h;
        }
        if let Some(seed) = args.seed {
            self.map.seed = seed;
        }
        if let Some(size) = args.tile_size {
            self.map.tile_size = size;
        }
        if let Some(distance) = args.min_distance {
            self.map.features.min_distance_between_same_type = distance;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(ref path) = args.terrain_png {
            self.output.terrain_png = Some(path.clone());
        }
        if let Some(ref path) = args.heightmap_png {
            self.output.heightmap_png = Some(path.clone());
        }
        if args.no_ascii {
            self.output.print_ascii = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(48),
            seed: Some(42),
            min_distance: Some(5),
            no_ascii: true,
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.map.width, 48);
        assert_eq!(config.map.seed, 42);
        assert_eq!(config.map.features.min_distance_between_same_type, 5);
        assert!(!config.output.print_ascii);
        // Non-overridden fields retain defaults
        assert_eq!(config.map.height, 10);
        assert_eq!(config.map.tile_size, 1.0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_from_args() {
        let args = CliArgs::parse_from([
            "hexagonia",
            "--width",
            "20",
            "--seed",
            "7",
            "--terrain-png",
            "out.png",
        ]);
        assert_eq!(args.width, Some(20));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.terrain_png, Some(PathBuf::from("out.png")));
        assert!(!args.no_ascii);
    }
}
