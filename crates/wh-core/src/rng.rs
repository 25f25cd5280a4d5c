//! Deterministic per-agent and run-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = run_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! This means:
//!
//! - Agents never share RNG state, so the draw sequence of one agent does not
//!   depend on how often the other agent drew (pauses, target choices).
//! - Two runs built from the same run seed replay bit-identical trajectories.
//! - Independent runs in a batch sweep never interfere with each other.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Draw a fresh run seed from OS entropy.
///
/// Used when a caller does not supply a seed; the runner reports the drawn
/// seed in its summary so the run can be replayed.
pub fn entropy_seed() -> u64 {
    rand::random()
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Owned by the agent it was created for; passed in at construction so no
/// randomness is ambient.
#[derive(Clone, Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run seed and an agent ID.
    pub fn new(run_seed: u64, agent: AgentId) -> Self {
        let seed = run_seed ^ u64::from(agent).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG used to derive seeds for batches of independent runs.
///
/// Never handed to an agent; agents always receive their own [`AgentRng`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Next child seed.  The `n`th call on a `SimRng` built from the same
    /// root seed always returns the same value.
    #[inline]
    pub fn next_seed(&mut self) -> u64 {
        self.0.r#gen()
    }
}
