//! Simulation observer trait for progress reporting and data collection.

use wh_agent::Agent;
use wh_core::{SimClock, Tick};

use crate::{MetricsTracker, Resolution, RunSummary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: conflict logger
///
/// ```rust,ignore
/// struct ConflictLog(Vec<Tick>);
///
/// impl SimObserver for ConflictLog {
///     fn on_right_of_way(&mut self, tick: Tick, _r: &Resolution) {
///         self.0.push(tick);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before arbitration.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when the resolver held one agent back this tick.
    fn on_right_of_way(&mut self, _tick: Tick, _resolution: &Resolution) {}

    /// Called after both agents stepped and metrics were updated.
    ///
    /// `clock` has already advanced, so `clock.current_tick` is the number of
    /// ticks executed so far.
    fn on_tick_end(
        &mut self,
        _clock:   &SimClock,
        _agents:  &[Agent; 2],
        _metrics: &MetricsTracker,
    ) {}

    /// Called once after the final tick.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
