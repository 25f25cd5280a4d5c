//! Warehouse layout and item occupancy.
//!
//! # Layout
//!
//! ```text
//!  col:  0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15 16
//! row 0  .  .  .  .  .  .  .  .  D  .  .  .  .  .  .  .  .    ← depot row
//! row 1  .  I  I  .  .  I  I  .  .  .  I  I  .  .  I  I  .
//!  ...                        └centre┘
//! row 14 .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .    ← border walkway
//! ```
//!
//! Shelves are [`SHELF_WIDTH`] columns wide and placed symmetrically about the
//! centre column `cols / 2`, stepping outward by `SHELF_WIDTH + aisle_width`
//! until the next block would touch the border column.  The centre aisle and
//! the one-cell border walkway are never shelved.  Every shelf cell inside the
//! configured row band starts stocked ([`CellKind::Item`]).
//!
//! Cells are stored row-major in a flat `Vec`, so [`Grid::item_positions`]
//! returns items in a stable order and seeded target choice is reproducible.

use std::collections::{BTreeMap, BTreeSet};

use wh_core::{LayoutConfig, Pos};

use crate::{SpatialError, SpatialResult};

/// Shelf blocks are always two columns wide.
pub const SHELF_WIDTH: i32 = 2;

// ── CellKind ──────────────────────────────────────────────────────────────────

/// What occupies a grid cell.
///
/// The only transition after construction is `Item → Shelf` on pickup.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Floor an agent can walk on.
    Empty,
    /// An emptied rack.  Not walkable.
    Shelf,
    /// A stocked rack.  Not walkable.
    Item,
    /// The shared load/unload/rest anchor.  Walkable.
    Depot,
}

impl CellKind {
    #[inline]
    pub fn is_walkable(self) -> bool {
        matches!(self, CellKind::Empty | CellKind::Depot)
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// The warehouse floor: static shelf layout plus dynamic item occupancy.
///
/// Built once per run by [`Grid::new`]; afterwards only [`Grid::remove_item`]
/// mutates it.
#[derive(Clone, Debug)]
pub struct Grid {
    rows:               i32,
    cols:               i32,
    aisle_width:        i32,
    centre_aisle_width: i32,
    depot:              Pos,
    shelf_start_row:    i32,
    shelf_end_row:      i32,
    shelf_cols:         BTreeSet<i32>,
    /// Row-major cell kinds; length `rows * cols`.
    cells:              Vec<CellKind>,
    labels:             BTreeMap<Pos, String>,
    items_remaining:    usize,
}

impl Grid {
    /// Lay out a warehouse from `layout`.
    ///
    /// # Errors
    ///
    /// - [`SpatialError::EvenCentreAisle`] for an even centre-aisle width.
    /// - [`SpatialError::TooNarrow`] when no shelf block fits left of centre.
    /// - [`SpatialError::InvertedShelfRows`] when the clamped shelf band is
    ///   empty.
    /// - [`SpatialError::DepotOutOfBounds`] for a depot outside the grid.
    pub fn new(layout: &LayoutConfig) -> SpatialResult<Self> {
        if layout.centre_aisle_width % 2 == 0 {
            return Err(SpatialError::EvenCentreAisle(layout.centre_aisle_width));
        }
        let rows = to_i32(layout.rows)?;
        let cols = to_i32(layout.cols)?;
        let aisle_width = to_i32(layout.aisle_width)?;
        let centre_aisle_width = to_i32(layout.centre_aisle_width)?;

        let centre = cols / 2;
        let half_ca = centre_aisle_width / 2;
        if centre - half_ca - SHELF_WIDTH < 1 {
            return Err(SpatialError::TooNarrow {
                cols:               layout.cols,
                centre_aisle_width: layout.centre_aisle_width,
            });
        }

        let shelf_start_row = layout.shelf_start_row.unwrap_or(1).max(1);
        let shelf_end_row = layout.shelf_end_row.unwrap_or(rows - 2).min(rows - 2);
        if shelf_start_row > shelf_end_row {
            return Err(SpatialError::InvertedShelfRows {
                start: shelf_start_row,
                end:   shelf_end_row,
            });
        }

        let depot = Pos::new(layout.depot_row.unwrap_or(0), layout.depot_col.unwrap_or(centre));
        if depot.row < 0 || depot.row >= rows || depot.col < 0 || depot.col >= cols {
            return Err(SpatialError::DepotOutOfBounds { depot, rows, cols });
        }

        let mut grid = Self {
            rows,
            cols,
            aisle_width,
            centre_aisle_width,
            depot,
            shelf_start_row,
            shelf_end_row,
            shelf_cols: BTreeSet::new(),
            cells: vec![CellKind::Empty; rows as usize * cols as usize],
            labels: BTreeMap::new(),
            items_remaining: 0,
        };
        grid.shelf_cols = grid.layout_shelf_cols();
        grid.stock_shelves();
        grid.label_shelves();
        Ok(grid)
    }

    // ── Construction helpers ──────────────────────────────────────────────

    /// Columns holding shelves, expanding outward from the centre aisle.
    fn layout_shelf_cols(&self) -> BTreeSet<i32> {
        let centre = self.cols / 2;
        let half_ca = self.centre_aisle_width / 2;
        let step = SHELF_WIDTH + self.aisle_width;
        let mut shelf_cols = BTreeSet::new();

        let mut left = centre - half_ca - SHELF_WIDTH;
        while left >= 1 {
            shelf_cols.extend([left, left + 1]);
            left -= step;
        }

        let mut right = centre + half_ca + 1;
        while right + 1 <= self.cols - 2 {
            shelf_cols.extend([right, right + 1]);
            right += step;
        }
        shelf_cols
    }

    fn stock_shelves(&mut self) {
        let cols = self.cols;
        let depot = self.depot;
        let (start, end) = (self.shelf_start_row, self.shelf_end_row);
        for (i, cell) in self.cells.iter_mut().enumerate() {
            let pos = Pos::new(i as i32 / cols, i as i32 % cols);
            *cell = if pos == depot {
                CellKind::Depot
            } else if (start..=end).contains(&pos.row) && self.shelf_cols.contains(&pos.col) {
                CellKind::Item
            } else {
                CellKind::Empty
            };
        }
        self.items_remaining = self.cells.iter().filter(|&&k| k == CellKind::Item).count();
    }

    /// Spreadsheet-style labels: shelf columns left→right are `A`, `B`, …,
    /// `Z`, `AA`, …; rows inside the shelf band count from 1.
    fn label_shelves(&mut self) {
        let labels: BTreeMap<Pos, String> = self
            .shelf_cols
            .iter()
            .enumerate()
            .flat_map(|(idx, &col)| {
                let letter = column_letter(idx);
                (self.shelf_start_row..=self.shelf_end_row).enumerate().map(move |(n, row)| {
                    (Pos::new(row, col), format!("{letter}{}", n + 1))
                })
            })
            .collect();
        self.labels = labels;
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[inline]
    pub fn depot(&self) -> Pos {
        self.depot
    }

    /// Inclusive `(first, last)` rows of the shelf band.
    #[inline]
    pub fn shelf_rows(&self) -> (i32, i32) {
        (self.shelf_start_row, self.shelf_end_row)
    }

    /// Columns that hold shelves, ascending.
    #[inline]
    pub fn shelf_cols(&self) -> &BTreeSet<i32> {
        &self.shelf_cols
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    /// Flat row-major index, `None` outside the grid.
    #[inline]
    pub fn index(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.row as usize * self.cols as usize + pos.col as usize)
    }

    /// Cell kind at `pos`, `None` outside the grid.
    #[inline]
    pub fn kind(&self, pos: Pos) -> Option<CellKind> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// `true` iff `pos` is inside the grid and is floor or depot.
    #[inline]
    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.kind(pos).is_some_and(CellKind::is_walkable)
    }

    /// Every cell still holding an item, in row-major order.
    pub fn item_positions(&self) -> Vec<Pos> {
        if self.items_remaining == 0 {
            return Vec::new();
        }
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, k)| **k == CellKind::Item)
            .map(|(i, _)| Pos::new(i as i32 / self.cols, i as i32 % self.cols))
            .collect()
    }

    #[inline]
    pub fn items_remaining(&self) -> usize {
        self.items_remaining
    }

    /// Display label of a shelf cell (e.g. `"B3"`), if `pos` is one.
    pub fn label(&self, pos: Pos) -> Option<&str> {
        self.labels.get(&pos).map(String::as_str)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Empty the shelf at `pos` (`Item → Shelf`).
    ///
    /// Returns `true` if an item was removed; any other cell is left
    /// untouched, so repeated calls are harmless.
    pub fn remove_item(&mut self, pos: Pos) -> bool {
        match self.index(pos) {
            Some(i) if self.cells[i] == CellKind::Item => {
                self.cells[i] = CellKind::Shelf;
                self.items_remaining -= 1;
                true
            }
            _ => false,
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn to_i32(n: u32) -> SpatialResult<i32> {
    i32::try_from(n).map_err(|_| SpatialError::DimensionOverflow(n))
}

/// 0 → `A`, 25 → `Z`, 26 → `AA`, …
pub(crate) fn column_letter(idx: usize) -> String {
    let mut letters = Vec::new();
    let mut n = idx + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}
