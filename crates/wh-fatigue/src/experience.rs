//! Prior-experience table.

use wh_core::AgentId;

/// Prior practice of the experienced agent (identity 1), in hours.
pub const EXPERT_PRIOR_HOURS: f64 = 1_000.0;

/// Prior practice of the novice agent (identity 2) and of any identity not in
/// the table, in hours.
pub const NOVICE_PRIOR_HOURS: f64 = 20.0;

/// The prior-experience constant `B` for `agent`.
pub fn prior_experience_hours(agent: AgentId) -> f64 {
    match agent.0 {
        1 => EXPERT_PRIOR_HOURS,
        // Identity 2 and anything unrecognised start as novices.
        _ => NOVICE_PRIOR_HOURS,
    }
}
