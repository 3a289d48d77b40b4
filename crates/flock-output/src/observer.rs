//! `FlockOutputObserver<W>` - bridges `FlockObserver` to an `OutputWriter`.

use flock_core::{SimConfig, Tick};
use flock_sim::{Flock, FlockObserver};
use tracing::warn;

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`FlockObserver`] that writes a summary row every tick and one row per
/// live agent on snapshot ticks.
///
/// Observer hooks cannot fail, so the first write error is kept and logged
/// once; later errors are dropped.  Check [`take_error`][Self::take_error]
/// after `sim.run()` returns.
pub struct FlockOutputObserver<W: OutputWriter> {
    writer:     W,
    delta_secs: f64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> FlockOutputObserver<W> {
    /// `config` supplies the tick length for `elapsed_secs`.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            delta_secs: f64::from(config.delta_secs),
            last_error: None,
        }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                warn!(error = %e, "flock output write failed; further errors suppressed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FlockObserver for FlockOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, flock: &Flock) {
        let row = TickSummaryRow {
            tick:             tick.0,
            elapsed_secs:     tick.0 as f64 * self.delta_secs,
            agent_count:      flock.live_count() as u64,
            average_position: flock.average_position(),
            average_velocity: flock.average_velocity(),
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, flock: &Flock) {
        let rows: Vec<AgentSnapshotRow> = flock
            .live_agents()
            .map(|a| AgentSnapshotRow::from_agent(a, tick))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _flock: &Flock) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
