//! `wh-spatial`: warehouse grid and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`grid`]    | `Grid` (static shelf layout + item occupancy), `CellKind`   |
//! | [`router`]  | `Router` trait, `Route`, `AStarRouter`                      |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use grid::{CellKind, Grid, SHELF_WIDTH};
pub use router::{AStarRouter, Route, Router};
