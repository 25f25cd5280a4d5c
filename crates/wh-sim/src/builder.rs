//! Fluent builder for constructing a [`Sim`].

use wh_agent::Agent;
use wh_core::rng::entropy_seed;
use wh_core::{AgentId, AgentRng, SimClock, SimConfig};
use wh_fatigue::HumanFactors;
use wh_spatial::{Grid, Router};

use crate::{MetricsTracker, RightOfWay, Sim, SimResult};

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: layout, task costs, tick ceiling, seed
/// - `R: Router`: the routing algorithm (e.g. [`wh_spatial::AStarRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                    |
/// |-----------------|----------------------------|
/// | `.factors(f)`   | `HumanFactors::default()`  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, AStarRouter)
///     .factors(HumanFactors { binding: 0.6, ..HumanFactors::default() })
///     .build()?;
/// let summary = sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<R: Router> {
    config:  SimConfig,
    router:  R,
    factors: Option<HumanFactors>,
}

impl<R: Router> SimBuilder<R> {
    pub fn new(config: SimConfig, router: R) -> Self {
        Self { config, router, factors: None }
    }

    /// Human-factors constants shared by both agents.
    pub fn factors(mut self, factors: HumanFactors) -> Self {
        self.factors = Some(factors);
        self
    }

    /// Validate the configuration, lay out the grid, and place both agents on
    /// the depot.
    ///
    /// A config without a seed gets one from entropy; the chosen seed is
    /// reported by [`Sim::seed`] and in the run summary.
    pub fn build(self) -> SimResult<Sim<R>> {
        self.config.validate()?;
        let grid = Grid::new(&self.config.layout)?;

        let seed = self.config.seed.unwrap_or_else(entropy_seed);
        let factors = self.factors.unwrap_or_default();
        let task = self.config.task;
        let spawn = |id: AgentId| {
            Agent::new(&grid, id, AgentRng::new(seed, id))
                .with_task(task)
                .with_factors(factors)
        };
        let agents = [spawn(AgentId::FIRST), spawn(AgentId::SECOND)];

        Ok(Sim {
            clock:        SimClock::new(self.config.tick_duration_secs),
            right_of_way: RightOfWay::new(task.blocked_wait_ticks),
            metrics:      MetricsTracker::new(),
            config:       self.config,
            grid,
            agents,
            router:       self.router,
            seed,
        })
    }
}
