//! Plain data rows written by output backends.

use flock_agent::Agent;
use flock_core::{Tick, Vec3};

/// One agent's motion state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub position: Vec3,
    pub velocity: Vec3,
    pub heading:  Vec3,
}

impl AgentSnapshotRow {
    pub fn from_agent(agent: &Agent, tick: Tick) -> Self {
        Self {
            agent_id: agent.id.0,
            tick:     tick.0,
            position: agent.position,
            velocity: agent.velocity,
            heading:  agent.heading,
        }
    }
}

/// Flock-wide state at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:             u64,
    pub elapsed_secs:     f64,
    pub agent_count:      u64,
    pub average_position: Vec3,
    pub average_velocity: Vec3,
}
