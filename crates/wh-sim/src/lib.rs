//! `wh-sim`: tick loop orchestrator for the warehouse pick simulator.
//!
//! # Tick order
//!
//! ```text
//! while !(agent1.done && agent2.done) && tick < max_ticks:
//!   ① Right of way  RightOfWay::resolve on the pre-tick snapshot; the loser
//!                   is held for `blocked_wait_ticks`.
//!   ② Agent 1       Agent::step (may empty a shelf).
//!   ③ Agent 2       Agent::step (sees agent 1's grid change).
//!   ④ Metrics       flash decay, then cell-conflict check.
//! ```
//!
//! # Entry points
//!
//! | Function / type         | Use                                          |
//! |-------------------------|----------------------------------------------|
//! | [`run`]                 | One headless run → [`RunSummary`]            |
//! | [`run_many`]            | One run per seed, input order preserved      |
//! | [`sweep`]               | `runs` seeds derived from the root seed      |
//! | [`SimBuilder`] + [`Sim`]| Stepwise control and observer hooks          |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `run_many` / `sweep` execute runs on Rayon's pool.     |
//! | `serde`    | `RunSummary` and friends derive `Serialize`.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wh_core::SimConfig;
//! use wh_sim::{NoopObserver, SimBuilder};
//! use wh_spatial::AStarRouter;
//!
//! let mut sim = SimBuilder::new(SimConfig::default().with_seed(7), AStarRouter).build()?;
//! let summary = sim.run(&mut NoopObserver);
//! println!("{} orders in {} ticks", summary.total_orders, summary.ticks);
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod resolver;
pub mod sim;
pub mod summary;


pub use batch::{run, run_many, sweep};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use metrics::{MetricsTracker, FLASH_FRAMES};
pub use observer::{NoopObserver, SimObserver};
pub use resolver::{ConflictKind, Resolution, RightOfWay};
pub use sim::Sim;
pub use summary::{AgentSummary, RunSummary};
