//! Agent lifecycle phases.

use std::fmt;

/// Where an agent is in its pick-trip cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AgentState {
    /// Initial state at the depot, before the first target is chosen.
    #[default]
    Waiting,
    /// Walking to the cell beside the target shelf.
    ToItem,
    /// Dwelling at the shelf for the adjusted pickup time.
    PickingUp,
    /// Walking back to the depot with the item.
    ToDepot,
    /// Unloading and recovering at the depot for one tick.
    Resting,
    /// Quota met or no work left.  Terminal.
    AllDone,
}

impl AgentState {
    /// `true` for the two states that follow a planned path.
    #[inline]
    pub fn is_walking(self) -> bool {
        matches!(self, AgentState::ToItem | AgentState::ToDepot)
    }

    /// Short human-readable status for status panels.
    pub fn description(self) -> &'static str {
        match self {
            AgentState::Waiting   => "Starting...",
            AgentState::ToItem    => "Heading to item",
            AgentState::PickingUp => "Picking up item",
            AgentState::ToDepot   => "Returning to depot",
            AgentState::Resting   => "Resting at depot",
            AgentState::AllDone   => "All done!",
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgentState::Waiting   => "waiting",
            AgentState::ToItem    => "to_item",
            AgentState::PickingUp => "picking_up",
            AgentState::ToDepot   => "to_depot",
            AgentState::Resting   => "resting",
            AgentState::AllDone   => "all_done",
        };
        f.write_str(s)
    }
}
