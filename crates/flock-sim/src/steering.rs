//! The three steering terms.
//!
//! Each returns an acceleration whose magnitude never exceeds its strength:
//! alignment and separation clamp their direction to unit length before
//! scaling, and cohesion is a unit direction attenuated inside the flock
//! radius.  The flock scales the combined sum by the agent's `max_speed`
//! and the frame time before applying it.
//!
//! Separation compares every agent against every other one, so a tick costs
//! O(n²).  Fine for hundreds of agents; thousands will want a spatial index.

use flock_agent::Agent;
use flock_core::Vec3;
use flock_core::math::clamp_unit;

use crate::FlockParams;

/// Pull toward the flock's average velocity.
///
/// The average is expressed as a fraction of this agent's own `max_speed`
/// and capped at 1, so an agent much slower than the flock is not
/// over-driven.  An agent with `max_speed == 0` gets no pull.
pub fn alignment(agent: &Agent, average_velocity: Vec3, strength: f32) -> Vec3 {
    if agent.max_speed <= 0.0 {
        return Vec3::ZERO;
    }
    clamp_unit(average_velocity / agent.max_speed) * strength
}

/// Pull toward `target`.
///
/// Full strength outside `flock_radius`; inside it the pull falls off
/// linearly with distance, so agents gather loosely around the target
/// instead of converging on a single point.  `flock_radius` must be > 0.
pub fn cohesion(agent: &Agent, target: Vec3, flock_radius: f32, strength: f32) -> Vec3 {
    let to_target = target - agent.position;
    let distance = to_target.length();

    let mut pull = to_target.normalize_or_zero();
    if distance < flock_radius {
        pull *= distance / flock_radius;
    }
    pull * strength
}

/// Push away from live neighbours closer than the pair's combined
/// `safe_radius`.
///
/// Each intruding neighbour contributes a unit push scaled from 0 at the
/// safe boundary to 1 at zero distance.  Coincident agents have no defined
/// direction and contribute nothing.
pub fn separation(agent: &Agent, neighbours: &[Agent], strength: f32) -> Vec3 {
    let mut sum = Vec3::ZERO;

    for other in neighbours {
        if other.id == agent.id || !other.is_alive() {
            continue;
        }
        let to_agent = agent.position - other.position;
        let distance = to_agent.length();
        let safe_distance = agent.safe_radius + other.safe_radius;

        if distance < safe_distance {
            sum += to_agent.normalize_or_zero() * ((safe_distance - distance) / safe_distance);
        }
    }

    clamp_unit(sum) * strength
}

/// Read-only view of everything steering needs for one tick.
///
/// Built once after the averages are refreshed; shared by every agent's
/// computation (and across threads with the `parallel` feature).
#[derive(Clone, Copy)]
pub struct SteeringContext<'a> {
    pub params:           &'a FlockParams,
    pub target:           Vec3,
    pub average_velocity: Vec3,
    pub agents:           &'a [Agent],
}

impl SteeringContext<'_> {
    /// Sum of alignment, cohesion and separation for `agent`, unscaled.
    pub fn acceleration(&self, agent: &Agent) -> Vec3 {
        alignment(agent, self.average_velocity, self.params.alignment_strength)
            + cohesion(agent, self.target, self.params.flock_radius, self.params.cohesion_strength)
            + separation(agent, self.agents, self.params.separation_strength)
    }
}
