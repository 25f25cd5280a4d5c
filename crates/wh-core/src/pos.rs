//! Grid coordinate type.
//!
//! `Pos` uses signed coordinates so neighbor arithmetic at the border yields
//! out-of-bounds positions (e.g. row `-1`) that bounds checks reject, instead
//! of wrapping.

use std::fmt;

/// A `(row, col)` cell coordinate.  Row 0 is the top of the warehouse.
///
/// Ordering is row-major (row first, then column), which is the iteration
/// order of the grid and the tie-break order of the pathfinder's heap.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Orthogonal offsets in canonical order: up, down, left, right.
    pub const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Taxicab distance: the minimum number of 4-directional moves between
    /// two cells on an obstacle-free grid.
    #[inline]
    pub fn manhattan(self, other: Pos) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The four orthogonal neighbors in up, down, left, right order.
    /// Some may lie outside any particular grid.
    #[inline]
    pub fn neighbors(self) -> [Pos; 4] {
        Self::DIRECTIONS.map(|(dr, dc)| Pos::new(self.row + dr, self.col + dc))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Pos {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Pos::new(row, col)
    }
}
