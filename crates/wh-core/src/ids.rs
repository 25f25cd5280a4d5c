//! Strongly typed agent identity.

use std::fmt;

/// Identity of a warehouse agent.
///
/// Identities are small positive integers (`1` and `2` in a standard run).
/// The identity selects the agent's prior-experience constant and breaks
/// right-of-way ties: a lower identity outranks a higher one.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// The experienced agent of a standard two-agent run.
    pub const FIRST: AgentId = AgentId(1);
    /// The novice agent of a standard two-agent run.
    pub const SECOND: AgentId = AgentId(2);
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Agent{}", self.0)
    }
}

impl From<AgentId> for u64 {
    #[inline(always)]
    fn from(id: AgentId) -> u64 {
        id.0 as u64
    }
}
