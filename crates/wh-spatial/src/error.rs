//! Spatial-subsystem error type.

use thiserror::Error;

use wh_core::Pos;

/// Invalid warehouse geometry, reported by [`Grid::new`][crate::Grid::new].
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("centre_aisle_width must be odd (got {0})")]
    EvenCentreAisle(u32),

    #[error("grid with {cols} columns is too narrow for a centre aisle of width {centre_aisle_width}")]
    TooNarrow { cols: u32, centre_aisle_width: u32 },

    #[error("shelf_start_row ({start}) must be <= shelf_end_row ({end})")]
    InvertedShelfRows { start: i32, end: i32 },

    #[error("depot {depot} lies outside the {rows}x{cols} grid")]
    DepotOutOfBounds { depot: Pos, rows: i32, cols: i32 },

    #[error("grid dimension {0} is too large")]
    DimensionOverflow(u32),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
