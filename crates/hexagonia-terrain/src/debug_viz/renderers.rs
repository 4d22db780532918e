//! Map renderers: terrain blocks, grayscale height field, and ASCII.

use super::image::DebugImage;
use crate::classify::TerrainType;
use crate::feature::FeatureKind;
use crate::grid::{Cell, Grid};
use crate::noise_field::NoiseField;

/// Base color of a terrain type.
pub fn terrain_color(terrain: TerrainType) -> [u8; 4] {
    match terrain {
        TerrainType::Water => [40, 90, 200, 255],
        TerrainType::Land => [150, 200, 90, 255],
        TerrainType::Forest => [30, 120, 45, 255],
        TerrainType::Mountain => [130, 110, 90, 255],
        TerrainType::MountainForest => [80, 95, 70, 255],
        TerrainType::SpecialFeature => [255, 0, 255, 255],
    }
}

/// Marker color of a feature kind.
pub fn feature_color(kind: FeatureKind) -> [u8; 4] {
    match kind {
        FeatureKind::LilyPad => [120, 230, 160, 255],
        FeatureKind::Pod => [240, 200, 60, 255],
        FeatureKind::ArcheryZone => [220, 60, 50, 255],
        FeatureKind::Chest => [255, 215, 0, 255],
    }
}

/// Largest block size [`render_terrain_map`] draws a cell with.
pub const MAX_PIXELS_PER_CELL: u32 = 64;

/// Draw each cell as a `pixels_per_cell` square. Odd columns are shifted
/// down half a cell so the picture follows the hex stagger.
///
/// Feature cells show their base terrain with a centered marker in the
/// feature color. Mountain cells darken with their tier. `pixels_per_cell`
/// is clamped to `1..=MAX_PIXELS_PER_CELL` and further reduced so the image
/// dimensions fit in `u32`.
pub fn render_terrain_map(grid: &Grid, pixels_per_cell: u32) -> DebugImage {
    let longest = grid.width().max(grid.height().saturating_add(1)).max(1);
    let ppc = pixels_per_cell
        .clamp(1, MAX_PIXELS_PER_CELL)
        .min(u32::MAX / longest)
        .max(1);
    let half = ppc / 2;
    let mut image = DebugImage::new(grid.width() * ppc, grid.height() * ppc + half);

    for cell in grid.cells() {
        let x = cell.coord.x as u32 * ppc;
        let y = cell.coord.y as u32 * ppc + if cell.coord.x & 1 == 1 { half } else { 0 };

        image.fill_rect(x, y, ppc, ppc, shaded_base_color(cell));

        if let Some(feature) = &cell.feature {
            let inset = ppc / 4;
            let size = (ppc - 2 * inset).max(1);
            image.fill_rect(x + inset, y + inset, size, size, feature_color(feature.kind));
        }
    }

    image
}

fn shaded_base_color(cell: &Cell) -> [u8; 4] {
    let [r, g, b, a] = terrain_color(cell.base_terrain());
    if cell.mountain_tier <= 1 {
        return [r, g, b, a];
    }
    let factor = 1.0 - 0.12 * (cell.mountain_tier - 1) as f32;
    let shade = |c: u8| (c as f32 * factor) as u8;
    [shade(r), shade(g), shade(b), a]
}

/// Grayscale image of a field, one pixel per sample. Values are clamped to
/// `[0, 1]`; 0 is black.
pub fn render_noise_field(field: &NoiseField) -> DebugImage {
    let mut image = DebugImage::new(field.width(), field.height());
    for y in 0..field.height() {
        for x in 0..field.width() {
            let v = (field.get(x, y).clamp(0.0, 1.0) * 255.0).round() as u8;
            image.set_pixel(x, y, [v, v, v, 255]);
        }
    }
    image
}

/// Character for a cell: the feature glyph if it has one, else its terrain.
pub fn ascii_glyph(cell: &Cell) -> char {
    if let Some(feature) = &cell.feature {
        return match feature.kind {
            FeatureKind::LilyPad => 'o',
            FeatureKind::Pod => 'p',
            FeatureKind::ArcheryZone => 'x',
            FeatureKind::Chest => '$',
        };
    }
    match cell.terrain {
        TerrainType::Water => '~',
        TerrainType::Land => '.',
        TerrainType::Forest => 'T',
        TerrainType::Mountain => '^',
        TerrainType::MountainForest => 'A',
        TerrainType::SpecialFeature => '?',
    }
}

/// One line per grid row, row 0 first, glyphs separated by spaces.
pub fn render_ascii(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.len() * 2 + grid.height() as usize);
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            if x > 0 {
                out.push(' ');
            }
            out.push(grid.cell_at(x, y).map_or(' ', ascii_glyph));
        }
        out.push('\n');
    }
    out
}
