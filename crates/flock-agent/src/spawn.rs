//! Spawn parameters for new agents.
//!
//! Positions are drawn from a cube of half-width `spread` around `origin`,
//! not a ball: corners sit up to `sqrt(3) * spread` away, denser toward the
//! faces than a spherical spread would be.  The cohesion falloff uses a true
//! spherical radius, so freshly spawned corner agents start outside it.
//!
//! Random initial velocities are drawn per component from
//! `[-max_speed, max_speed]`, which can exceed `max_speed` in magnitude by
//! up to `sqrt(3)`; every spawned agent is clamped before it is returned.

use flock_core::{AgentId, SimRng, Vec3};

use crate::Agent;

/// Everything needed to create one agent.  Values are copied into the agent
/// at spawn time; later edits to the flock do not reach existing agents.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnSpec {
    /// Centre of the spawn cube.
    pub origin:        Vec3,
    /// Half-width of the spawn cube.
    pub spread:        f32,
    pub max_speed:     f32,
    pub safe_radius:   f32,
    /// Start at rest instead of with a random velocity.
    pub zero_velocity: bool,
    /// Initial facing direction.
    pub heading:       Vec3,
}

impl SpawnSpec {
    /// Build one agent.  Draws position first, then velocity, from `rng`.
    pub fn spawn(&self, id: AgentId, rng: &mut SimRng) -> Agent {
        let position = self.origin + rng.in_cube(self.spread);
        let velocity = if self.zero_velocity {
            Vec3::ZERO
        } else {
            rng.in_cube(self.max_speed)
        };

        let mut agent = Agent::new(id, position, velocity, self.max_speed, self.safe_radius)
            .with_heading(self.heading);
        agent.clamp_speed();
        agent
    }
}
