//! PNG export of debug images.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use hexagonia_terrain::debug_viz::DebugImage;

/// Encode `image` as 8-bit RGBA PNG into `writer`.
pub fn encode_png<W: Write>(writer: W, image: &DebugImage) -> Result<(), png::EncodingError> {
    let (width, height) = image.dimensions();
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.pixels)?;
    writer.finish()
}

/// Write `image` to `path`, creating parent directories as needed.
pub fn write_png(path: &Path, image: &DebugImage) -> Result<(), png::EncodingError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    encode_png(BufWriter::new(file), image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_signature() {
        let mut image = DebugImage::new(3, 2);
        image.set_pixel(1, 1, [10, 20, 30, 255]);
        let mut buf = Vec::new();
        encode_png(&mut buf, &image).unwrap();
        assert_eq!(&buf[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_write_png_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("map.png");
        write_png(&path, &DebugImage::new(4, 4)).unwrap();
        assert!(path.exists());
    }
}
