//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `tick_summaries.csv`
//! - `right_of_way.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, RightOfWayRow, TickSummaryRow};

pub const SNAPSHOT_HEADER: [&str; 11] = [
    "tick", "agent_id", "row", "col", "state", "fatigue", "work_time_h", "distance", "orders",
    "blocked", "status",
];
pub const SUMMARY_HEADER: [&str; 4] = ["tick", "sim_secs", "conflicts", "active_agents"];
pub const RIGHT_OF_WAY_HEADER: [&str; 6] = ["tick", "winner", "loser", "row", "col", "kind"];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    snapshots:    Writer<File>,
    summaries:    Writer<File>,
    right_of_way: Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        let mut right_of_way = Writer::from_path(dir.join("right_of_way.csv"))?;
        right_of_way.write_record(RIGHT_OF_WAY_HEADER)?;

        Ok(Self {
            snapshots,
            summaries,
            right_of_way,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.pos.row.to_string(),
                row.pos.col.to_string(),
                row.state.to_string(),
                format!("{:.6}", row.fatigue),
                format!("{:.6}", row.work_time_h),
                row.distance.to_string(),
                row.orders.to_string(),
                row.blocked.to_string(),
                row.state.description().to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.sim_secs.to_string(),
            row.conflicts.to_string(),
            row.active_agents.to_string(),
        ])?;
        Ok(())
    }

    fn write_right_of_way(&mut self, row: &RightOfWayRow) -> OutputResult<()> {
        self.right_of_way.write_record(&[
            row.tick.to_string(),
            row.winner.to_string(),
            row.loser.to_string(),
            row.cell.row.to_string(),
            row.cell.col.to_string(),
            row.kind.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.right_of_way.flush()?;
        Ok(())
    }
}
