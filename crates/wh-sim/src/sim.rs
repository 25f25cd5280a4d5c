//! The `Sim` struct and its tick loop.

use tracing::{debug, info};
use wh_agent::Agent;
use wh_core::{SimClock, SimConfig};
use wh_spatial::{Grid, Router};

use crate::{MetricsTracker, Resolution, RightOfWay, RunSummary, SimObserver};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The composition root of one run.
///
/// `Sim<R>` owns the grid, both agents, the resolver, metrics and the router.
/// Agents never reference each other; every cross-agent interaction goes
/// through the resolver or the shared grid, in a fixed order:
///
/// 1. **Right of way** on the pre-tick snapshot.
/// 2. **Agent 1** steps.
/// 3. **Agent 2** steps.  A shelf agent 1 just emptied is already gone.
/// 4. **Metrics**: flash decay, then the cell-conflict check.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: Router> {
    /// Run configuration (layout, task costs, tick ceiling).
    pub config: SimConfig,

    /// Simulation clock.  `current_tick` counts executed ticks.
    pub clock: SimClock,

    /// Warehouse floor and item occupancy.
    pub grid: Grid,

    /// Slot 0 holds agent 1, slot 1 agent 2.
    pub agents: [Agent; 2],

    pub metrics: MetricsTracker,

    pub right_of_way: RightOfWay,

    pub router: R,

    /// Seed the agents' RNGs were derived from.
    pub(crate) seed: u64,
}

impl<R: Router> Sim<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until both agents are done or `config.max_ticks` is reached.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunSummary {
        while !self.is_finished() {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            if let Some(resolution) = self.step_tick() {
                observer.on_right_of_way(now, &resolution);
            }
            observer.on_tick_end(&self.clock, &self.agents, &self.metrics);
        }

        let summary = self.summary();
        info!(
            seed = summary.seed,
            ticks = summary.ticks,
            completed = summary.completed,
            orders = summary.total_orders,
            conflicts = summary.conflicts,
            throughput = summary.throughput,
            "run finished"
        );
        observer.on_sim_end(&summary);
        summary
    }

    /// Execute exactly one tick, regardless of the ceiling.
    ///
    /// Returns the right-of-way decision taken this tick, if any.
    pub fn step_tick(&mut self) -> Option<Resolution> {
        let [first, second] = &mut self.agents;

        let resolution = self.right_of_way.resolve(first, second);
        if let Some(r) = &resolution {
            debug!(
                tick = %self.clock.current_tick,
                winner = %r.winner,
                loser = %r.loser,
                cell = %r.cell,
                kind = ?r.kind,
                "right of way"
            );
        }

        first.step(&mut self.grid, &self.router);
        second.step(&mut self.grid, &self.router);

        self.metrics.tick_flash();
        if self.metrics.update(first, second, self.grid.depot()) {
            debug!(
                tick = %self.clock.current_tick,
                cell = ?self.metrics.conflict_cell(),
                total = self.metrics.conflicts(),
                "cell conflict"
            );
        }

        self.clock.advance();
        resolution
    }

    /// `true` once both agents are done.
    pub fn all_done(&self) -> bool {
        self.agents.iter().all(Agent::is_done)
    }

    /// `true` when [`run`](Self::run) would stop: both agents done or the
    /// tick ceiling reached.
    pub fn is_finished(&self) -> bool {
        self.all_done() || self.clock.current_tick.0 >= self.config.max_ticks
    }

    /// Summary of the run so far.
    pub fn summary(&self) -> RunSummary {
        RunSummary::collect(
            self.seed,
            self.clock.current_tick.0,
            self.all_done(),
            &self.agents,
            &self.metrics,
        )
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
