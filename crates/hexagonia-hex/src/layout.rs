//! Grid-to-world mapping for the hex layout.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::OffsetCoord;

/// `cos(30°)`: horizontal spacing between column centers per unit tile size.
const COS_30: f32 = 0.866_025_4;

/// World-space layout of a hex grid.
///
/// Cell centers lie on the XZ plane. Columns advance along X by
/// `tile_size * cos(30°)`; rows advance along Z by `tile_size`, and odd
/// columns are pushed half a tile further along Z. Y carries elevation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexLayout {
    /// Distance between the centers of two cells in the same column.
    pub tile_size: f32,
}

impl HexLayout {
    pub fn new(tile_size: f32) -> Self {
        Self { tile_size }
    }

    /// Planar `(x, z)` center of a cell.
    pub fn planar_position(&self, coord: OffsetCoord) -> Vec2 {
        let x = coord.x as f32 * self.tile_size * COS_30;
        let shift = if coord.x & 1 == 1 {
            self.tile_size * 0.5
        } else {
            0.0
        };
        let z = coord.y as f32 * self.tile_size + shift;
        Vec2::new(x, z)
    }

    /// 3D center of a cell raised to `elevation` on the Y axis.
    pub fn world_position(&self, coord: OffsetCoord, elevation: f32) -> Vec3 {
        let p = self.planar_position(coord);
        Vec3::new(p.x, elevation, p.y)
    }
}

impl Default for HexLayout {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_origin_at_zero() {
        let layout = HexLayout::default();
        assert_eq!(layout.world_position(OffsetCoord::new(0, 0), 0.0), Vec3::ZERO);
    }

    #[test]
    fn test_odd_columns_shift_half_tile() {
        let layout = HexLayout::new(2.0);
        let even = layout.planar_position(OffsetCoord::new(2, 3));
        let odd = layout.planar_position(OffsetCoord::new(3, 3));
        assert!((even.y - 6.0).abs() < EPSILON);
        assert!((odd.y - 7.0).abs() < EPSILON, "odd column z = {}", odd.y);
    }

    #[test]
    fn test_column_spacing_is_cos_30() {
        let layout = HexLayout::new(1.0);
        let a = layout.planar_position(OffsetCoord::new(0, 0));
        let b = layout.planar_position(OffsetCoord::new(1, 0));
        assert!((b.x - a.x - 3.0_f32.sqrt() / 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_elevation_goes_to_y() {
        let layout = HexLayout::default();
        let p = layout.world_position(OffsetCoord::new(4, 1), 1.5);
        assert!((p.y - 1.5).abs() < EPSILON);
    }

    #[test]
    fn test_positions_scale_with_tile_size() {
        let small = HexLayout::new(1.0).planar_position(OffsetCoord::new(5, 7));
        let large = HexLayout::new(3.0).planar_position(OffsetCoord::new(5, 7));
        assert!((large - small * 3.0).length() < EPSILON);
    }
}
