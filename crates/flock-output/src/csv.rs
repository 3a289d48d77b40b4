//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `tick_summaries.csv`
//!
//! Vectors are flattened into `x`/`y`/`z` columns.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use flock_core::Vec3;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

pub const SNAPSHOT_HEADERS: [&str; 11] =
    ["agent_id", "tick", "px", "py", "pz", "vx", "vy", "vz", "hx", "hy", "hz"];

pub const SUMMARY_HEADERS: [&str; 9] = [
    "tick", "elapsed_secs", "agent_count", "avg_px", "avg_py", "avg_pz", "avg_vx", "avg_vy", "avg_vz",
];

/// Writes flock output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

fn push_vec(record: &mut Vec<String>, v: Vec3) {
    record.extend([v.x, v.y, v.z].map(|c| c.to_string()));
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        let mut record = Vec::with_capacity(SNAPSHOT_HEADERS.len());
        for row in rows {
            record.clear();
            record.push(row.agent_id.to_string());
            record.push(row.tick.to_string());
            push_vec(&mut record, row.position);
            push_vec(&mut record, row.velocity);
            push_vec(&mut record, row.heading);
            self.snapshots.write_record(&record)?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        let mut record = vec![
            row.tick.to_string(),
            row.elapsed_secs.to_string(),
            row.agent_count.to_string(),
        ];
        push_vec(&mut record, row.average_position);
        push_vec(&mut record, row.average_velocity);
        self.summaries.write_record(&record)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
