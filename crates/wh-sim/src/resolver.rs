//! Right-of-way arbitration between the two agents.
//!
//! Runs once per tick on the pre-tick snapshot, before either agent steps.
//! Two kinds of clash are detected from the agents' next intended cells:
//!
//! - **Same cell**: both want to enter the same cell.
//! - **Head-on**  : each wants the cell the other stands on.
//!
//! The winner is the agent with the higher priority key
//! `(heading to depot, lower id, lower slot)`, compared as a tuple.  The
//! loser is held for a fixed number of walking ticks; the winner proceeds
//! this tick.

use std::cmp::Reverse;
use std::fmt;

use wh_agent::{Agent, AgentState};
use wh_core::{AgentId, Pos};

// ── Resolution ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConflictKind {
    SameCell,
    HeadOn,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConflictKind::SameCell => "same_cell",
            ConflictKind::HeadOn   => "head_on",
        })
    }
}

/// Outcome of one arbitration, reported to observers and logs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    pub winner: AgentId,
    pub loser:  AgentId,
    /// The cell the loser was about to enter.
    pub cell:   Pos,
    pub kind:   ConflictKind,
}

// ── RightOfWay ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RightOfWay {
    /// Walking ticks a loser is held for.
    pub wait_ticks: u32,
}

impl RightOfWay {
    pub fn new(wait_ticks: u32) -> Self {
        Self { wait_ticks }
    }

    /// Arbitrate between `a` (slot 0) and `b` (slot 1).
    ///
    /// Returns `None` when either agent has no next cell (not walking,
    /// already blocked, or at the end of its path) or when their next cells
    /// do not clash.
    pub fn resolve(&self, a: &mut Agent, b: &mut Agent) -> Option<Resolution> {
        let next_a = a.peek_next_pos()?;
        let next_b = b.peek_next_pos()?;

        let kind = if next_a == next_b {
            ConflictKind::SameCell
        } else if next_a == b.pos() && next_b == a.pos() {
            ConflictKind::HeadOn
        } else {
            return None;
        };

        let (winner, loser, cell) = if priority(a, 0) > priority(b, 1) {
            (a, b, next_b)
        } else {
            (b, a, next_a)
        };
        loser.block(self.wait_ticks);

        Some(Resolution { winner: winner.id(), loser: loser.id(), cell, kind })
    }
}

/// Higher key wins: carrying an item first, then the lower id, then slot 0.
fn priority(agent: &Agent, slot: usize) -> (bool, Reverse<AgentId>, Reverse<usize>) {
    (agent.state() == AgentState::ToDepot, Reverse(agent.id()), Reverse(slot))
}
