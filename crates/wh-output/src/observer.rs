//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use wh_agent::Agent;
use wh_core::{SimClock, Tick};
use wh_sim::{MetricsTracker, Resolution, RunSummary, SimObserver};

use crate::row::{AgentSnapshotRow, RightOfWayRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots, tick summaries and
/// right-of-way decisions to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:         W,
    /// Snapshot every `snapshot_every` ticks; tick summaries are always
    /// written.
    snapshot_every: u64,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer` that snapshots every tick.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            snapshot_every: 1,
            last_error:     None,
        }
    }

    /// Snapshot agents only every `n` ticks (0 disables snapshots).
    pub fn snapshot_every(mut self, n: u64) -> Self {
        self.snapshot_every = n;
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_right_of_way(&mut self, tick: Tick, resolution: &Resolution) {
        // Decided during tick `tick`, which the snapshots number `tick + 1`.
        let row = RightOfWayRow::new(tick.0 + 1, resolution);
        let result = self.writer.write_right_of_way(&row);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, clock: &SimClock, agents: &[Agent; 2], metrics: &MetricsTracker) {
        let tick = clock.current_tick.0;
        let row = TickSummaryRow {
            tick,
            sim_secs:      clock.elapsed_secs(),
            conflicts:     metrics.conflicts(),
            active_agents: agents.iter().filter(|a| !a.is_done()).count() as u32,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);

        if self.snapshot_every > 0 && tick.is_multiple_of(self.snapshot_every) {
            let rows = agents.each_ref().map(|a| AgentSnapshotRow::from_agent(tick, a));
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _summary: &RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
