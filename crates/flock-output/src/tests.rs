//! Tests for flock-output.

#[cfg(test)]
mod csv_tests {
    use flock_core::Vec3;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_HEADERS, SUMMARY_HEADERS};
    use crate::row::{AgentSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            agent_id,
            tick,
            position: Vec3::new(agent_id as f32, 0.0, 0.0),
            velocity: Vec3::new(0.0, 2.0, 0.0),
            heading:  Vec3::Z,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("agent_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, SNAPSHOT_HEADERS);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, SUMMARY_HEADERS);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "0"); // agent_id
        assert_eq!(&rows[0][1], "5"); // tick
        assert_eq!(&rows[2][2], "2"); // px
        assert_eq!(&rows[1][6], "2"); // vy
        assert_eq!(&rows[1][10], "1"); // hz
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick:             3,
            elapsed_secs:     1.5,
            agent_count:      4,
            average_position: Vec3::new(1.0, 2.0, 3.0),
            average_velocity: Vec3::new(-1.0, 0.0, 0.5),
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");   // tick
        assert_eq!(&rows[0][1], "1.5"); // elapsed_secs
        assert_eq!(&rows[0][2], "4");   // agent_count
        assert_eq!(&rows[0][5], "3");   // avg_pz
        assert_eq!(&rows[0][6], "-1");  // avg_vx
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use flock_core::{SimConfig, Vec3};
    use flock_sim::{EulerIntegrator, FlockParams, SimBuilder};
    use tempfile::TempDir;

    use crate::observer::FlockOutputObserver;
    use crate::row::{AgentSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn config() -> SimConfig {
        SimConfig {
            delta_secs:              0.5,
            total_ticks:             6,
            seed:                    1,
            snapshot_interval_ticks: 2,
        }
    }

    /// Fails every write and counts how often it was asked.
    #[derive(Default)]
    struct BrokenWriter {
        calls: usize,
    }

    impl BrokenWriter {
        fn fail(&mut self) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
    }

    impl OutputWriter for BrokenWriter {
        fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            self.fail()
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.fail()
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.fail()
        }
    }

    #[test]
    fn integration_csv() {
        let mut sim = SimBuilder::new(config(), FlockParams::default(), EulerIntegrator)
            .target(Vec3::new(0.0, 10.0, 0.0))
            .initial_agents(3)
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = FlockOutputObserver::new(writer, &sim.config);
        sim.run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        // snapshot interval 2 → ticks 0, 2, 4 (3 ticks × 3 agents = 9 rows)
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9, "expected 9 snapshot rows, got {}", rows.len());

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[5][0], "5");   // tick
        assert_eq!(&rows[5][1], "2.5"); // 5 × 0.5 s
        assert_eq!(&rows[5][2], "3");   // agent_count
    }

    #[test]
    fn destroyed_agents_not_snapshotted() {
        let mut sim = SimBuilder::new(config(), FlockParams::default(), EulerIntegrator)
            .initial_agents(4)
            .build()
            .unwrap();
        let victim = sim.flock.agents()[1].id;
        sim.flock.destroy(victim).unwrap();

        let dir = tmp();
        let mut obs = FlockOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), &sim.config);
        sim.run_ticks(1, &mut obs);
        obs.into_writer().finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let ids: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert_eq!(ids.len(), 3);
        assert!(!ids.contains(&victim.0.to_string()));
    }

    #[test]
    fn first_error_kept_and_run_completes() {
        let mut sim = SimBuilder::new(config(), FlockParams::default(), EulerIntegrator)
            .initial_agents(2)
            .build()
            .unwrap();
        let mut obs = FlockOutputObserver::new(BrokenWriter::default(), &sim.config);
        sim.run(&mut obs);

        assert_eq!(sim.clock.current_tick.0, 6);
        let err = obs.take_error().expect("write error stored");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none(), "error is taken only once");
        // 6 summaries + 3 snapshot batches + finish
        assert_eq!(obs.into_writer().calls, 10);
    }
}
