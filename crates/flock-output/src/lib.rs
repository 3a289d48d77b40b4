//! `flock-output` - CSV output for flock runs.
//!
//! | File                  | Written on       | One row per                 |
//! |-----------------------|------------------|-----------------------------|
//! | `agent_snapshots.csv` | snapshot ticks   | agent                       |
//! | `tick_summaries.csv`  | every tick       | tick (count and averages)   |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`FlockOutputObserver`], which implements `flock_sim::FlockObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use flock_output::{CsvWriter, FlockOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = FlockOutputObserver::new(writer, &sim.config);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FlockOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
