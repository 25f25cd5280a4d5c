//! Plain data row types written by output backends.

use wh_agent::{Agent, AgentState};
use wh_core::Pos;
use wh_sim::{ConflictKind, Resolution};

/// One agent's state at the end of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    /// Ticks executed when the snapshot was taken (1 for the first tick).
    pub tick:        u64,
    pub agent_id:    u32,
    pub pos:         Pos,
    pub state:       AgentState,
    pub fatigue:     f64,
    pub work_time_h: f64,
    pub distance:    u64,
    pub orders:      u32,
    /// Distinct right-of-way losses so far.
    pub blocked:     u32,
}

impl AgentSnapshotRow {
    pub fn from_agent(tick: u64, agent: &Agent) -> Self {
        Self {
            tick,
            agent_id:    agent.id().0,
            pos:         agent.pos(),
            state:       agent.state(),
            fatigue:     agent.fatigue(),
            work_time_h: agent.work_time_h(),
            distance:    agent.distance(),
            orders:      agent.orders_completed(),
            blocked:     agent.blocked_count(),
        }
    }
}

/// Run-level counters at the end of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:          u64,
    pub sim_secs:      u64,
    /// Cumulative cell conflicts.
    pub conflicts:     u64,
    /// Agents not yet done.
    pub active_agents: u32,
}

/// One right-of-way decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RightOfWayRow {
    /// Same numbering as [`AgentSnapshotRow::tick`].
    pub tick:   u64,
    pub winner: u32,
    pub loser:  u32,
    pub cell:   Pos,
    pub kind:   ConflictKind,
}

impl RightOfWayRow {
    pub fn new(tick: u64, resolution: &Resolution) -> Self {
        Self {
            tick,
            winner: resolution.winner.0,
            loser:  resolution.loser.0,
            cell:   resolution.cell,
            kind:   resolution.kind,
        }
    }
}
