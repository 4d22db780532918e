//! Debug renderings of a generated map: RGBA images of the terrain and the
//! height field, and a plain-text view for terminals.

mod image;
mod renderers;

pub use self::image::DebugImage;
pub use renderers::{
    MAX_PIXELS_PER_CELL, ascii_glyph, feature_color, render_ascii, render_noise_field,
    render_terrain_map, terrain_color,
};
