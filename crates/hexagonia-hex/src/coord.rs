//! Offset and cube hex coordinates and the cube-space distance metric.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::HexDirection;

/// Column/row position of a cell in a rectangular hex grid.
///
/// `x` is the column and `y` is the row. Signed so that neighbor offsets
/// stepping off the grid edge remain representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct OffsetCoord {
    pub x: i32,
    pub y: i32,
}

impl OffsetCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert to cube coordinates using the odd-q transform:
    /// `q = col`, `r = row - (col + (col & 1)) / 2`, `s = -q - r`.
    #[must_use]
    pub fn to_cube(self) -> CubeCoord {
        let q = self.x;
        let r = self.y - (self.x + (self.x & 1)) / 2;
        CubeCoord::new(q, r, -q - r)
    }

    /// The offset coordinate one step away in `dir`.
    ///
    /// The result may lie outside any particular grid; bounds checks are
    /// the caller's job.
    #[must_use]
    pub fn neighbor(self, dir: HexDirection) -> OffsetCoord {
        let (dx, dy) = dir.offset_delta();
        OffsetCoord::new(self.x + dx, self.y + dy)
    }

    /// All six neighbor coordinates in [`HexDirection::ALL`] order.
    pub fn neighbors(self) -> [OffsetCoord; 6] {
        HexDirection::ALL.map(|dir| self.neighbor(dir))
    }

    /// Returns `true` if this coordinate lies in `0..width` x `0..height`.
    pub fn in_bounds(self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u32) < width && (self.y as u32) < height
    }
}

impl fmt::Display for OffsetCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for OffsetCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Cube hex coordinate. Always satisfies `q + r + s == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CubeCoord {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl CubeCoord {
    pub const ORIGIN: Self = Self { q: 0, r: 0, s: 0 };

    pub const fn new(q: i32, r: i32, s: i32) -> Self {
        Self { q, r, s }
    }

    /// Number of hex steps from the origin: `max(|q|, |r|, |s|)`.
    pub fn length(self) -> i32 {
        self.q.abs().max(self.r.abs()).max(self.s.abs())
    }

    /// Hex distance between two cube coordinates.
    pub fn distance(self, other: CubeCoord) -> i32 {
        (self - other).length()
    }

    /// Returns `true` if the cube constraint `q + r + s == 0` holds.
    pub fn is_valid(self) -> bool {
        self.q + self.r + self.s == 0
    }
}

impl From<OffsetCoord> for CubeCoord {
    fn from(offset: OffsetCoord) -> Self {
        offset.to_cube()
    }
}

impl Add for CubeCoord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.q + rhs.q, self.r + rhs.r, self.s + rhs.s)
    }
}

impl Sub for CubeCoord {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.q - rhs.q, self.r - rhs.r, self.s - rhs.s)
    }
}

/// Hex distance between two offset coordinates, measured in cube space.
///
/// This is the only metric used for feature spacing.
pub fn hex_distance(a: OffsetCoord, b: OffsetCoord) -> u32 {
    a.to_cube().distance(b.to_cube()) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_cube_origin() {
        assert_eq!(OffsetCoord::new(0, 0).to_cube(), CubeCoord::ORIGIN);
    }

    #[test]
    fn test_odd_column_shifts_r() {
        // col 1: r = 0 - (1 + 1) / 2 = -1
        assert_eq!(OffsetCoord::new(1, 0).to_cube(), CubeCoord::new(1, -1, 0));
        // col 2: r = 3 - (2 + 0) / 2 = 2
        assert_eq!(OffsetCoord::new(2, 3).to_cube(), CubeCoord::new(2, 2, -4));
        // col 5: r = 5 - (5 + 1) / 2 = 2
        assert_eq!(OffsetCoord::new(5, 5).to_cube(), CubeCoord::new(5, 2, -7));
    }

    #[test]
    fn test_negative_columns_use_truncating_division() {
        // (-1 & 1) == 1, (-1 + 1) / 2 == 0
        assert_eq!(OffsetCoord::new(-1, 0).to_cube(), CubeCoord::new(-1, 0, 1));
        // (-3 & 1) == 1, (-3 + 1) / 2 == -1
        assert_eq!(OffsetCoord::new(-3, 2).to_cube(), CubeCoord::new(-3, 3, 0));
    }

    #[test]
    fn test_adjacent_columns_are_distance_one() {
        assert_eq!(hex_distance(OffsetCoord::new(0, 0), OffsetCoord::new(1, 0)), 1);
    }

    #[test]
    fn test_adjacent_rows_are_distance_one() {
        assert_eq!(hex_distance(OffsetCoord::new(5, 5), OffsetCoord::new(5, 6)), 1);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let c = OffsetCoord::new(7, 3);
        assert_eq!(hex_distance(c, c), 0);
    }

    #[test]
    fn test_distance_along_column() {
        assert_eq!(hex_distance(OffsetCoord::new(4, 0), OffsetCoord::new(4, 9)), 9);
    }

    #[test]
    fn test_cube_length() {
        assert_eq!(CubeCoord::new(3, -1, -2).length(), 3);
        assert_eq!(CubeCoord::new(-2, -2, 4).length(), 4);
    }

    #[test]
    fn test_in_bounds() {
        assert!(OffsetCoord::new(0, 0).in_bounds(10, 10));
        assert!(OffsetCoord::new(9, 9).in_bounds(10, 10));
        assert!(!OffsetCoord::new(10, 0).in_bounds(10, 10));
        assert!(!OffsetCoord::new(0, -1).in_bounds(10, 10));
        assert!(!OffsetCoord::new(-1, 5).in_bounds(10, 10));
    }

    #[test]
    fn test_neighbors_follow_direction_order() {
        let n = OffsetCoord::new(3, 3).neighbors();
        assert_eq!(n[0], OffsetCoord::new(3, 4));
        assert_eq!(n[1], OffsetCoord::new(4, 3));
        assert_eq!(n[2], OffsetCoord::new(4, 2));
        assert_eq!(n[3], OffsetCoord::new(3, 2));
        assert_eq!(n[4], OffsetCoord::new(2, 3));
        assert_eq!(n[5], OffsetCoord::new(2, 4));
    }
}
