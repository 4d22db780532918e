//! Hex grid topology: one [`Cell`] per grid position plus the six-direction
//! neighbor graph.
//!
//! The grid owns every cell. Neighbor links are stored as coordinates, so a
//! cell refers to its neighbors without owning them.

use std::fmt;

use glam::Vec3;
use hexagonia_hex::{HexDirection, HexLayout, OffsetCoord};

use crate::classify::{TerrainThresholds, TerrainType};
use crate::feature::SpecialFeature;
use crate::noise_field::NoiseField;

/// World-space rise per mountain tier.
pub const ELEVATION_PER_TIER: f32 = 0.5;
/// Extra vertical scale per mountain tier above the first.
pub const VERTICAL_SCALE_PER_TIER: f32 = 0.25;

/// Neighbor table indexed by [`HexDirection`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HexNeighbors([Option<OffsetCoord>; 6]);

impl HexNeighbors {
    /// Neighbor in `dir`, if one exists.
    pub fn get(&self, dir: HexDirection) -> Option<OffsetCoord> {
        self.0[dir.index()]
    }

    /// Set (or replace) the neighbor in `dir`.
    pub fn set(&mut self, dir: HexDirection, coord: OffsetCoord) {
        self.0[dir.index()] = Some(coord);
    }

    /// Populated `(direction, neighbor)` pairs in direction order.
    pub fn iter(&self) -> impl Iterator<Item = (HexDirection, OffsetCoord)> + '_ {
        HexDirection::ALL
            .into_iter()
            .filter_map(|dir| self.get(dir).map(|coord| (dir, coord)))
    }

    /// Number of populated directions.
    pub fn count(&self) -> usize {
        self.0.iter().flatten().count()
    }
}

/// One hex position of the map.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub coord: OffsetCoord,
    /// Cell center; `y` carries the mountain elevation.
    pub world_position: Vec3,
    /// Current type. Becomes [`TerrainType::SpecialFeature`] when a feature
    /// is placed.
    pub terrain: TerrainType,
    /// `1..=4` for mountainous cells, 0 otherwise.
    pub mountain_tier: u8,
    /// Normalized primary height that decided the terrain bucket.
    pub height: f64,
    /// Secondary forest noise value. Cosmetic only.
    pub forest_density: f64,
    pub neighbors: HexNeighbors,
    pub feature: Option<SpecialFeature>,
}

impl Cell {
    /// Terrain before any feature was placed.
    pub fn base_terrain(&self) -> TerrainType {
        self.feature
            .as_ref()
            .map_or(self.terrain, |feature| feature.base_terrain)
    }

    /// Vertical offset applied to the cell for its mountain tier.
    pub fn elevation(&self) -> f32 {
        self.mountain_tier as f32 * ELEVATION_PER_TIER
    }

    /// Y scale for rendering; grows with the mountain tier.
    pub fn vertical_scale(&self) -> f32 {
        if self.mountain_tier == 0 {
            1.0
        } else {
            1.0 + (self.mountain_tier - 1) as f32 * VERTICAL_SCALE_PER_TIER
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hex_{}_{} {}", self.coord.x, self.coord.y, self.terrain)?;
        if let Some(feature) = &self.feature {
            write!(f, " [{} on {}]", feature.kind, feature.base_terrain)?;
        }
        Ok(())
    }
}

/// All cells of a generated map, fixed at `width x height`.
///
/// Cells are stored column by column (`x` outer, `y` inner), which is also
/// the order every generation pass visits them in.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Classify every position from `heights`, place it in world space, then
    /// wire the neighbor graph once all cells exist.
    ///
    /// # Panics
    ///
    /// Panics if either field is not `width x height`.
    pub fn build(
        width: u32,
        height: u32,
        heights: &NoiseField,
        forest: &NoiseField,
        thresholds: &TerrainThresholds,
        layout: &HexLayout,
    ) -> Self {
        assert_eq!((heights.width(), heights.height()), (width, height));
        assert_eq!((forest.width(), forest.height()), (width, height));

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for x in 0..width {
            for y in 0..height {
                let h = heights.get(x, y);
                let terrain = thresholds.classify(h);
                let mountain_tier = if terrain.is_mountainous() {
                    thresholds.mountain_tier(h)
                } else {
                    0
                };
                let coord = OffsetCoord::new(x as i32, y as i32);
                let elevation = mountain_tier as f32 * ELEVATION_PER_TIER;

                cells.push(Cell {
                    coord,
                    world_position: layout.world_position(coord, elevation),
                    terrain,
                    mountain_tier,
                    height: h,
                    forest_density: forest.get(x, y),
                    neighbors: HexNeighbors::default(),
                    feature: None,
                });
            }
        }

        let mut grid = Self {
            width,
            height,
            cells,
        };
        grid.link_neighbors();
        grid
    }

    /// Link every in-bounds neighbor pair in both directions.
    fn link_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let coord = self.cells[i].coord;
            for dir in HexDirection::ALL {
                let Some(j) = self.index_of(coord.neighbor(dir)) else {
                    continue;
                };
                let neighbor = self.cells[j].coord;
                self.cells[i].neighbors.set(dir, neighbor);
                self.cells[j].neighbors.set(dir.opposite(), coord);
            }
        }
    }

    fn index_of(&self, coord: OffsetCoord) -> Option<usize> {
        coord
            .in_bounds(self.width, self.height)
            .then(|| coord.x as usize * self.height as usize + coord.y as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounds-checked lookup.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<&Cell> {
        self.get(OffsetCoord::new(x, y))
    }

    pub fn get(&self, coord: OffsetCoord) -> Option<&Cell> {
        self.index_of(coord).map(|i| &self.cells[i])
    }

    pub(crate) fn get_mut(&mut self, coord: OffsetCoord) -> Option<&mut Cell> {
        self.index_of(coord).map(|i| &mut self.cells[i])
    }

    /// Cells in generation order (column by column).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The neighbor of `coord` in `dir`, if both exist.
    pub fn neighbor(&self, coord: OffsetCoord, dir: HexDirection) -> Option<&Cell> {
        self.get(coord)?.neighbors.get(dir).and_then(|n| self.get(n))
    }

    /// The normalized height of every cell as a row-major field.
    pub fn height_field(&self) -> NoiseField {
        let mut values = vec![0.0; self.cells.len()];
        for cell in &self.cells {
            let (x, y) = (cell.coord.x as usize, cell.coord.y as usize);
            values[y * self.width as usize + x] = cell.height;
        }
        NoiseField::from_values(self.width, self.height, values)
    }

    /// Cell count per current terrain type.
    pub fn terrain_counts(&self) -> hashbrown::HashMap<TerrainType, usize> {
        let mut counts = hashbrown::HashMap::new();
        for cell in &self.cells {
            *counts.entry(cell.terrain).or_insert(0) += 1;
        }
        counts
    }

    /// Cell count per terrain type as classified, ignoring features.
    pub fn base_terrain_counts(&self) -> hashbrown::HashMap<TerrainType, usize> {
        let mut counts = hashbrown::HashMap::new();
        for cell in &self.cells {
            *counts.entry(cell.base_terrain()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{FeatureKind, Rarity};

    fn ramp_field(width: u32, height: u32) -> NoiseField {
        let values = (0..width * height).map(|i| i as f64).collect();
        NoiseField::normalized(width, height, values)
    }

    fn build(width: u32, height: u32) -> Grid {
        let field = ramp_field(width, height);
        Grid::build(
            width,
            height,
            &field,
            &field,
            &TerrainThresholds::default(),
            &HexLayout::default(),
        )
    }

    #[test]
    fn test_build_creates_every_cell() {
        let grid = build(7, 5);
        assert_eq!(grid.len(), 35);
        for x in 0..7 {
            for y in 0..5 {
                let cell = grid.cell_at(x, y).expect("cell exists");
                assert_eq!(cell.coord, OffsetCoord::new(x, y));
            }
        }
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let grid = build(4, 4);
        assert!(grid.cell_at(-1, 0).is_none());
        assert!(grid.cell_at(0, 4).is_none());
        assert!(grid.cell_at(4, 0).is_none());
    }

    #[test]
    fn test_neighbor_symmetry() {
        let grid = build(9, 6);
        for cell in grid.cells() {
            for (dir, n) in cell.neighbors.iter() {
                let back = grid.get(n).expect("neighbor in grid").neighbors.get(dir.opposite());
                assert_eq!(back, Some(cell.coord), "{} -> {:?} not mirrored", cell.coord, dir);
            }
        }
    }

    #[test]
    fn test_interior_has_six_neighbors_corners_fewer() {
        let grid = build(5, 5);
        assert_eq!(grid.cell_at(2, 2).unwrap().neighbors.count(), 6);
        // (0,0): only NE (0,1) and E (1,0) are in bounds
        let corner = grid.cell_at(0, 0).unwrap();
        assert_eq!(corner.neighbors.count(), 2);
        assert_eq!(corner.neighbors.get(HexDirection::NorthEast), Some(OffsetCoord::new(0, 1)));
        assert_eq!(corner.neighbors.get(HexDirection::East), Some(OffsetCoord::new(1, 0)));
        assert!(corner.neighbors.get(HexDirection::West).is_none());
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        let grid = build(1, 1);
        assert_eq!(grid.cells()[0].neighbors.count(), 0);
    }

    #[test]
    fn test_neighbor_lookup() {
        let grid = build(4, 4);
        let east = grid.neighbor(OffsetCoord::new(1, 1), HexDirection::East).unwrap();
        assert_eq!(east.coord, OffsetCoord::new(2, 1));
        assert!(grid.neighbor(OffsetCoord::new(3, 1), HexDirection::East).is_none());
    }

    #[test]
    fn test_mountain_tier_only_on_mountains() {
        let grid = build(10, 10);
        for cell in grid.cells() {
            if cell.terrain.is_mountainous() {
                assert!((1..=4).contains(&cell.mountain_tier), "{cell}");
            } else {
                assert_eq!(cell.mountain_tier, 0, "{cell}");
            }
        }
    }

    #[test]
    fn test_world_position_carries_elevation() {
        let grid = build(10, 10);
        for cell in grid.cells() {
            assert!((cell.world_position.y - cell.elevation()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_storage_order_is_column_major() {
        let grid = build(3, 2);
        let coords: Vec<_> = grid.cells().iter().map(|c| (c.coord.x, c.coord.y)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_vertical_scale() {
        let mut cell = build(1, 1).cells()[0].clone();
        cell.mountain_tier = 0;
        assert_eq!(cell.vertical_scale(), 1.0);
        cell.mountain_tier = 1;
        assert_eq!(cell.vertical_scale(), 1.0);
        cell.mountain_tier = 4;
        assert_eq!(cell.vertical_scale(), 1.75);
    }

    #[test]
    fn test_base_terrain_and_display_with_feature() {
        let mut cell = build(1, 1).cells()[0].clone();
        cell.terrain = TerrainType::SpecialFeature;
        cell.feature = Some(SpecialFeature {
            base_terrain: TerrainType::Water,
            rarity: Rarity::Common,
            kind: FeatureKind::LilyPad,
        });
        assert_eq!(cell.base_terrain(), TerrainType::Water);
        assert_eq!(cell.to_string(), "Hex_0_0 SpecialFeature [LilyPad on Water]");
    }

    #[test]
    fn test_height_field_matches_cells() {
        let grid = build(4, 3);
        let field = grid.height_field();
        for cell in grid.cells() {
            assert_eq!(field.get(cell.coord.x as u32, cell.coord.y as u32), cell.height);
        }
    }

    #[test]
    fn test_terrain_counts_sum_to_len() {
        let grid = build(8, 8);
        let total: usize = grid.terrain_counts().values().sum();
        assert_eq!(total, grid.len());
    }
}
