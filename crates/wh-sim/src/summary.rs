//! End-of-run results.

use wh_agent::Agent;
use wh_core::{AgentId, Pos};

use crate::MetricsTracker;

/// Final counters of one agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSummary {
    pub id:                  AgentId,
    /// Cells moved.
    pub distance:            u64,
    pub work_time_h:         f64,
    pub rest_time_h:         f64,
    pub fatigue:             f64,
    pub experience:          f64,
    /// Distinct right-of-way losses.
    pub blocked_count:       u32,
    pub orders_completed:    u32,
    pub unreachable_targets: u32,
}

impl From<&Agent> for AgentSummary {
    fn from(agent: &Agent) -> Self {
        Self {
            id:                  agent.id(),
            distance:            agent.distance(),
            work_time_h:         agent.work_time_h(),
            rest_time_h:         agent.rest_time_h(),
            fatigue:             agent.fatigue(),
            experience:          agent.experience_factor(),
            blocked_count:       agent.blocked_count(),
            orders_completed:    agent.orders_completed(),
            unreachable_targets: agent.unreachable_targets(),
        }
    }
}

/// Everything an optimizer needs from one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// Seed the run was built from; replaying it reproduces the run.
    pub seed:              u64,
    /// Ticks executed.
    pub ticks:             u64,
    /// `false` if the tick ceiling stopped the run.
    pub completed:         bool,
    pub agents:            [AgentSummary; 2],
    pub conflicts:         u64,
    /// Cell with the most conflicts, if any occurred.
    pub hottest_cell:      Option<Pos>,
    pub total_orders:      u32,
    pub total_work_time_h: f64,
    /// Orders per work-hour across both agents; 0 when no work was done.
    pub throughput:        f64,
}

impl RunSummary {
    pub(crate) fn collect(
        seed:      u64,
        ticks:     u64,
        completed: bool,
        agents:    &[Agent; 2],
        metrics:   &MetricsTracker,
    ) -> Self {
        let agents = [AgentSummary::from(&agents[0]), AgentSummary::from(&agents[1])];
        let total_orders: u32 = agents.iter().map(|a| a.orders_completed).sum();
        let total_work_time_h: f64 = agents.iter().map(|a| a.work_time_h).sum();
        let throughput = if total_work_time_h > 0.0 {
            f64::from(total_orders) / total_work_time_h
        } else {
            0.0
        };
        Self {
            seed,
            ticks,
            completed,
            agents,
            conflicts: metrics.conflicts(),
            hottest_cell: metrics.hottest_cell().map(|(pos, _)| pos),
            total_orders,
            total_work_time_h,
            throughput,
        }
    }

    /// Summary of the agent with identity `id`.
    pub fn agent(&self, id: AgentId) -> Option<&AgentSummary> {
        self.agents.iter().find(|a| a.id == id)
    }
}
