//! Simulation time model.
//!
//! # Design
//!
//! The flock is frame-driven: each tick consumes one `delta_secs` step.  An
//! integer `Tick` counter is the canonical "which frame" value; elapsed
//! simulated time is derived from it rather than accumulated, so there is no
//! floating-point drift over long runs:
//!
//!   elapsed_secs = tick * delta_secs

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current frame and maps it to elapsed simulated seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Seconds of simulated time per tick.
    pub delta_secs: f32,
    /// The current tick - advanced by `SimClock::advance()` each frame.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(delta_secs: f32) -> Self {
        Self {
            delta_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.delta_secs as f64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Driver-loop configuration.
///
/// Typically loaded from a JSON file by the application and passed to the
/// simulation runner.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Seconds per tick.  Must be finite and positive.  Default: 1/60.
    pub delta_secs: f32,

    /// Total ticks to simulate with `Sim::run`.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Emit a snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            delta_secs:              1.0 / 60.0,
            total_ticks:             600,
            seed:                    0,
            snapshot_interval_ticks: 60,
        }
    }
}

impl SimConfig {
    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.delta_secs)
    }

    /// Reject a step size the tick loop cannot use.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.delta_secs.is_finite() || self.delta_secs <= 0.0 {
            return Err(CoreError::Config(format!(
                "delta_secs must be finite and positive, got {}",
                self.delta_secs
            )));
        }
        Ok(())
    }

    /// `true` if a snapshot is due at `tick`.
    #[inline]
    pub fn snapshot_due(&self, tick: Tick) -> bool {
        self.snapshot_interval_ticks > 0 && tick.0.is_multiple_of(self.snapshot_interval_ticks)
    }
}
