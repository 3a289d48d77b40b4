//! The `OutputWriter` trait.

use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

/// A sink for snapshot and summary rows.
///
/// The observer never propagates these errors mid-run; it keeps the first
/// one for [`FlockOutputObserver::take_error`](crate::FlockOutputObserver::take_error).
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush everything.  Calling it again is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
