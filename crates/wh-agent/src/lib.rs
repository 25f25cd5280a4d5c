//! `wh-agent`: the pick-worker state machine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`state`]   | `AgentState`: lifecycle phases                         |
//! | [`agent`]   | `Agent`: per-worker state, `step`, right-of-way surface |
//!
//! # Lifecycle
//!
//! ```text
//! Waiting ──► ToItem ──► PickingUp ──► ToDepot ──► Resting ──┬──► ToItem …
//!    │                                                       │
//!    └──────────────────────► AllDone ◄──────────────────────┘
//! ```
//!
//! One call to [`Agent::step`] advances exactly one tick.  Agents never see
//! each other: cross-agent arbitration happens outside, through
//! [`Agent::peek_next_pos`] and [`Agent::block`].

pub mod agent;
pub mod state;


pub use agent::Agent;
pub use state::AgentState;
