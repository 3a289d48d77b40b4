//! Deterministic simulation RNG.
//!
//! Each flock owns one `SimRng`.  Spawning and mode changes draw from it in
//! a fixed order, so the same seed always reproduces the same spawn
//! positions and initial velocities.  Flocks never share RNG state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Vec3;

/// Seeded RNG owned by a single flock.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed deterministically from the run's seed.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// A point with every component drawn uniformly from `[-half, half]`.
    ///
    /// Samples a cube, not a ball: the corners lie `sqrt(3) * half` from the
    /// centre.  A non-positive `half` yields `Vec3::ZERO`.
    ///
    /// Components are drawn from `[-1, 1]` and scaled, so any finite `half`
    /// is accepted even when `2 * half` would overflow.
    pub fn in_cube(&mut self, half: f32) -> Vec3 {
        if half <= 0.0 || !half.is_finite() {
            return Vec3::ZERO;
        }
        Vec3::new(
            self.0.gen_range(-1.0..=1.0),
            self.0.gen_range(-1.0..=1.0),
            self.0.gen_range(-1.0..=1.0),
        ) * half
    }
}
