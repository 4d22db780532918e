//! The six neighbor directions of a hex cell.

use serde::{Deserialize, Serialize};

/// Neighbor direction, in the fixed order used for neighbor tables.
///
/// Each direction is a constant offset delta applied to `(col, row)`:
/// NE `(0, 1)`, E `(1, 0)`, SE `(1, -1)`, SW `(0, -1)`, W `(-1, 0)`,
/// NW `(-1, 1)`. The deltas do not depend on column parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum HexDirection {
    NorthEast = 0,
    East = 1,
    SouthEast = 2,
    SouthWest = 3,
    West = 4,
    NorthWest = 5,
}

impl HexDirection {
    /// All six directions in index order.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::NorthEast,
        HexDirection::East,
        HexDirection::SouthEast,
        HexDirection::SouthWest,
        HexDirection::West,
        HexDirection::NorthWest,
    ];

    /// Index of this direction in [`HexDirection::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction for an index, wrapping modulo 6.
    #[must_use]
    pub fn from_index(index: usize) -> HexDirection {
        Self::ALL[index % 6]
    }

    /// The opposite direction: index `(i + 3) mod 6`.
    #[must_use]
    pub fn opposite(self) -> HexDirection {
        Self::from_index(self.index() + 3)
    }

    /// `(dx, dy)` applied to offset coordinates when stepping in this direction.
    pub fn offset_delta(self) -> (i32, i32) {
        match self {
            HexDirection::NorthEast => (0, 1),
            HexDirection::East => (1, 0),
            HexDirection::SouthEast => (1, -1),
            HexDirection::SouthWest => (0, -1),
            HexDirection::West => (-1, 0),
            HexDirection::NorthWest => (-1, 1),
        }
    }
}
