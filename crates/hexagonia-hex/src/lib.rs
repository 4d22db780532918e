//! Hex grid coordinate math: offset and cube coordinates, the six neighbor
//! directions, hex distance, and the mapping from grid cells to world space.
//!
//! All functions here are pure. Offset coordinates use the vertical "odd-q"
//! layout: columns are `x`, rows are `y`, and odd columns are shifted half a
//! cell along the row axis.
//!
//! ```rust
//! use hexagonia_hex::{OffsetCoord, hex_distance};
//!
//! let a = OffsetCoord::new(0, 0);
//! let b = OffsetCoord::new(1, 0);
//! assert_eq!(hex_distance(a, b), 1);
//! ```

mod coord;
mod direction;
mod layout;

pub use coord::{CubeCoord, OffsetCoord, hex_distance};
pub use direction::HexDirection;
pub use layout::HexLayout;
