//! Command-line map generator.
//!
//! Configuration is loaded from `hexagonia.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p hexagonia-app -- --seed 42` to print a map,
//! add `--terrain-png map.png` to also write a preview image.

mod export;

use std::process::ExitCode;

use clap::Parser;
use hexagonia_config::{CliArgs, Config, default_config_dir};
use hexagonia_terrain::debug_viz::{render_ascii, render_noise_field, render_terrain_map};
use hexagonia_terrain::{FeatureKind, GeneratedMap, TerrainType, generate_map};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| ".".into());

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    hexagonia_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let map = match generate_map(&config.map) {
        Ok(map) => map,
        Err(e) => {
            error!("map generation failed: {e}");
            eprintln!("Invalid map configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", summary(&map));
    if config.output.print_ascii {
        print!("{}", render_ascii(&map.grid));
    }

    let mut status = ExitCode::SUCCESS;
    let ppc = config.output.pixels_per_cell;
    if let Some(path) = &config.output.terrain_png {
        let image = render_terrain_map(&map.grid, ppc);
        match export::write_png(path, &image) {
            Ok(()) => info!("wrote terrain preview to {}", path.display()),
            Err(e) => {
                eprintln!("Failed to write {}: {e}", path.display());
                status = ExitCode::FAILURE;
            }
        }
    }
    if let Some(path) = &config.output.heightmap_png {
        let image = render_noise_field(&map.grid.height_field());
        match export::write_png(path, &image) {
            Ok(()) => info!("wrote height field to {}", path.display()),
            Err(e) => {
                eprintln!("Failed to write {}: {e}", path.display());
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}

/// Human-readable run summary: size, seed, noise shape, and counts.
fn summary(map: &GeneratedMap) -> String {
    let grid = &map.grid;
    let params = &map.params;
    let counts = grid.base_terrain_counts();

    let mut out = format!(
        "{}x{} map, seed {}: scale {:.2}, {} octaves, persistence {:.2}, lacunarity {:.2}\n",
        grid.width(),
        grid.height(),
        params.seed,
        params.noise_scale,
        params.octaves,
        params.persistence,
        params.lacunarity,
    );
    for terrain in TerrainType::BASE {
        let n = counts.get(&terrain).copied().unwrap_or(0);
        out.push_str(&format!("  {:<15} {n}\n", terrain.label()));
    }
    for kind in FeatureKind::ALL {
        out.push_str(&format!("  {:<15} {}\n", kind.label(), map.placements.count(kind)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexagonia_config::MapConfig;

    #[test]
    fn test_summary_lists_every_terrain_and_feature() {
        let map = generate_map(&MapConfig::default()).unwrap();
        let text = summary(&map);
        assert!(text.starts_with("10x10 map, seed 0"));
        for terrain in TerrainType::BASE {
            assert!(text.contains(terrain.label()), "missing {terrain}");
        }
        for kind in FeatureKind::ALL {
            assert!(text.contains(kind.label()), "missing {kind}");
        }
    }
}
