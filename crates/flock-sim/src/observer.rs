//! Simulation observer trait for progress reporting and data collection.

use flock_core::Tick;

use crate::Flock;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example - progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl FlockObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, flock: &Flock) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} agents around {}", flock.len(), flock.average_position());
///         }
///     }
/// }
/// ```
pub trait FlockObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after steering and integration for `tick` have finished.
    fn on_tick_end(&mut self, _tick: Tick, _flock: &Flock) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks), after `on_tick_end`, with read-only access to every agent.
    fn on_snapshot(&mut self, _tick: Tick, _flock: &Flock) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick, _flock: &Flock) {}
}

/// A [`FlockObserver`] that does nothing.
pub struct NoopObserver;

impl FlockObserver for NoopObserver {}
