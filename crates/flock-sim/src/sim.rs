//! The `Sim` driver and its tick loop.

use flock_core::{SimClock, SimConfig};
use tracing::info;

use crate::{Flock, FlockObserver, PositionIntegrator};

/// Drives a [`Flock`] frame by frame.
///
/// One tick:
///
/// 1. [`Flock::tick`] - averages, steering, clamp, heading.
/// 2. [`Flock::integrate`] - move every live agent once with `I`.
/// 3. Advance the clock.
///
/// Between ticks the caller has `&mut` access to [`Sim::flock`] for
/// membership changes and tunable edits; during a tick it cannot, so
/// spawning or clearing can never interleave with steering.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<I: PositionIntegrator> {
    /// Step size, run length, seed, snapshot interval.
    pub config: SimConfig,

    /// Current tick and elapsed simulated time.
    pub clock: SimClock,

    /// The flock being simulated.
    pub flock: Flock,

    /// Moves agents after each steering pass.
    pub integrator: I,
}

impl<I: PositionIntegrator> Sim<I> {
    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: FlockObserver>(&mut self, observer: &mut O) {
        let end = self.config.end_tick();
        info!(
            agents = self.flock.len(),
            from = %self.clock.current_tick,
            to = %end,
            "simulation started"
        );
        while self.clock.current_tick < end {
            self.step(observer);
        }
        observer.on_sim_end(self.clock.current_tick, &self.flock);
        info!(agents = self.flock.len(), clock = %self.clock, "simulation finished");
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: FlockObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    fn step<O: FlockObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        let dt = self.clock.delta_secs;

        observer.on_tick_start(now);
        self.flock.tick(dt);
        self.flock.integrate(&self.integrator, dt);
        observer.on_tick_end(now, &self.flock);
        if self.config.snapshot_due(now) {
            observer.on_snapshot(now, &self.flock);
        }

        self.clock.advance();
    }
}
