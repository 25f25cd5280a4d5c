//! `wh-fatigue`: calibrated human-factors model for pick workers.
//!
//! Everything here is a pure function of accumulated hours; the agent state
//! machine decides *when* hours accrue, this crate decides what they mean.
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`model`]     | `HumanFactors`: fatigue, learning curve, task scaling    |
//! | [`ledger`]    | `WorkLedger`: work/rest accumulators with derived fatigue |
//! | [`experience`]| Prior-experience table keyed by agent identity            |
//!
//! # Model summary
//!
//! ```text
//! I(w)   = 1 − e^(−d·w)                       fatigue buildup
//! R(x)   = e^(−r·x) − 1                       recovery (≤ 0)
//! F      = clamp(I(w) + R(x), 0, 1)
//! b      = −ln(LR) / ln 2                     learning exponent
//! E(w,B) = M + (1 − M)·(w + B)^(−b)           experience factor
//! Da     = max(1, round((1 + α·F)·E·Do))      adjusted pickup ticks
//! p      = α·F / 2                            walking-pause probability
//! ```

pub mod experience;
pub mod ledger;
pub mod model;


pub use experience::{EXPERT_PRIOR_HOURS, NOVICE_PRIOR_HOURS, prior_experience_hours};
pub use ledger::WorkLedger;
pub use model::HumanFactors;
