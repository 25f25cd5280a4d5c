//! Integration tests for wh-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;
    use wh_agent::AgentState;
    use wh_core::{AgentId, Pos};
    use wh_sim::{ConflictKind, Resolution};

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, RightOfWayRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            tick,
            agent_id,
            pos:         Pos::new(3, 4),
            state:       AgentState::ToItem,
            fatigue:     0.125,
            work_time_h: 0.5,
            distance:    17,
            orders:      2,
            blocked:     1,
        }
    }

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
        assert!(dir.path().join("right_of_way.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir, "agent_snapshots.csv"),
            [
                "tick", "agent_id", "row", "col", "state", "fatigue", "work_time_h", "distance",
                "orders", "blocked", "status",
            ]
        );
        assert_eq!(headers(&dir, "tick_summaries.csv"), ["tick", "sim_secs", "conflicts", "active_agents"]);
        assert_eq!(headers(&dir, "right_of_way.csv"), ["tick", "winner", "loser", "row", "col", "kind"]);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(1, 5), snap_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "agent_snapshots.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "5");        // tick
        assert_eq!(&rows[0][1], "1");        // agent_id
        assert_eq!(&rows[0][2], "3");        // row
        assert_eq!(&rows[0][3], "4");        // col
        assert_eq!(&rows[0][4], "to_item");
        assert_eq!(&rows[0][5], "0.125000");
        assert_eq!(&rows[0][10], "Heading to item");
        assert_eq!(&rows[1][1], "2");
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow { tick: 3, sim_secs: 3, conflicts: 1, active_agents: 2 })
            .unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "tick_summaries.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["3", "3", "1", "2"]);
    }

    #[test]
    fn csv_right_of_way_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let resolution = Resolution {
            winner: AgentId::SECOND,
            loser:  AgentId::FIRST,
            cell:   Pos::new(0, 9),
            kind:   ConflictKind::HeadOn,
        };
        w.write_right_of_way(&RightOfWayRow::new(7, &resolution)).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "right_of_way.csv");
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["7", "2", "1", "0", "9", "head_on"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("absent")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;
    use wh_core::{SimConfig, TaskConfig};
    use wh_sim::SimBuilder;
    use wh_spatial::AStarRouter;

    use crate::row::{AgentSnapshotRow, RightOfWayRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult, SimOutputObserver};

    fn config() -> SimConfig {
        SimConfig {
            task: TaskConfig { order_quota: 1, walk_pauses: false, ..TaskConfig::default() },
            seed: Some(3),
            ..SimConfig::default()
        }
    }

    /// In-memory writer recording how often each method ran.
    #[derive(Default)]
    struct Recorder {
        snapshots:    Vec<AgentSnapshotRow>,
        summaries:    Vec<TickSummaryRow>,
        right_of_way: Vec<RightOfWayRow>,
        finished:     u32,
        fail:         bool,
    }

    impl OutputWriter for Recorder {
        fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.snapshots.extend_from_slice(rows);
            Ok(())
        }

        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }

        fn write_right_of_way(&mut self, row: &RightOfWayRow) -> OutputResult<()> {
            self.right_of_way.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn one_summary_per_tick_and_two_snapshots() {
        let mut sim = SimBuilder::new(config(), AStarRouter).build().unwrap();
        let mut obs = SimOutputObserver::new(Recorder::default());
        let summary = sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let rec = obs.into_writer();
        assert_eq!(rec.summaries.len() as u64, summary.ticks);
        assert_eq!(rec.snapshots.len() as u64, 2 * summary.ticks);
        assert_eq!(rec.finished, 1);
        assert_eq!(rec.summaries[0].tick, 1);
        let last = rec.summaries.last().unwrap();
        assert_eq!(last.active_agents, 0);
        assert_eq!(last.conflicts, summary.conflicts);
        assert!(rec.right_of_way.iter().all(|r| r.tick >= 1 && r.tick <= summary.ticks));
    }

    #[test]
    fn snapshot_interval_thins_rows() {
        let mut sim = SimBuilder::new(config(), AStarRouter).build().unwrap();
        let mut obs = SimOutputObserver::new(Recorder::default()).snapshot_every(5);
        let summary = sim.run(&mut obs);
        let rec = obs.into_writer();
        assert_eq!(rec.snapshots.len() as u64, 2 * (summary.ticks / 5));
        assert!(rec.snapshots.iter().all(|s| s.tick % 5 == 0));
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = SimBuilder::new(config(), AStarRouter).build().unwrap();
        let mut obs = SimOutputObserver::new(Recorder { fail: true, ..Recorder::default() });
        sim.run(&mut obs);
        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn integration_csv() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let mut sim = SimBuilder::new(config(), AStarRouter).build().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let summary = sim.run(&mut obs);
        assert!(obs.take_error().is_none());
        drop(obs);

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count() as u64, summary.ticks);
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count() as u64, 2 * summary.ticks);
    }
}
