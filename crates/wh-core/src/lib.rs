//! `wh-core`: foundational types for the warehouse pick simulator.
//!
//! This crate is a dependency of every other `wh-*` crate.  It has no `wh-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`pos`]         | `Pos` grid coordinate, Manhattan distance, neighbors  |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (run-level)          |
//! | [`config`]      | `LayoutConfig`, `TaskConfig`, `SimConfig`             |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{LayoutConfig, SimConfig, TaskConfig};
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use pos::Pos;
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Tick};
