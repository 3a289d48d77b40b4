//! Flock-wide tunables and preset modes.

use std::fmt;

use flock_agent::SpawnSpec;
use flock_core::Vec3;

use crate::{SimError, SimResult};

/// Tunables shared by every agent in one flock.
///
/// All fields may be changed between ticks.  `max_speed`, `safe_radius`
/// and `spawn_heading` are copied into agents when they spawn, so editing
/// them later only affects agents added afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockParams {
    /// Weight of the pull toward the flock's average velocity, in `[0, 1]`.
    pub alignment_strength:    f32,
    /// Weight of the pull toward the target point, in `[0, 1]`.
    pub cohesion_strength:     f32,
    /// Weight of the push away from crowding neighbours, in `[0, 1]`.
    pub separation_strength:   f32,
    /// Speed cap given to newly spawned agents.
    pub max_speed:             f32,
    /// Clearance radius given to newly spawned agents.
    pub safe_radius:           f32,
    /// Spawn cube half-width and cohesion falloff distance.  Must be > 0.
    pub flock_radius:          f32,
    /// How many agents [`Flock::add_flock`](crate::Flock::add_flock) spawns.
    /// Additive, not a target population.
    pub flock_size:            usize,
    /// Spawn at rest instead of with a random velocity.
    pub zero_initial_velocity: bool,
    /// Centre of the spawn cube.
    pub origin:                Vec3,
    /// Facing direction of newly spawned agents.
    pub spawn_heading:         Vec3,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            alignment_strength:    0.5,
            cohesion_strength:     0.5,
            separation_strength:   0.5,
            max_speed:             10.0,
            safe_radius:           1.0,
            flock_radius:          5.0,
            flock_size:            0,
            zero_initial_velocity: false,
            origin:                Vec3::ZERO,
            spawn_heading:         Vec3::Z,
        }
    }
}

impl FlockParams {
    /// Check the preconditions the steering maths relies on.
    pub fn validate(&self) -> SimResult<()> {
        let strengths = [
            ("alignment_strength", self.alignment_strength),
            ("cohesion_strength", self.cohesion_strength),
            ("separation_strength", self.separation_strength),
        ];
        for (name, value) in strengths {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::Config(format!("{name} must be in [0, 1], got {value}")));
            }
        }

        if !self.flock_radius.is_finite() || self.flock_radius <= 0.0 {
            return Err(SimError::Config(format!(
                "flock_radius must be finite and positive, got {}",
                self.flock_radius
            )));
        }
        for (name, value) in [("max_speed", self.max_speed), ("safe_radius", self.safe_radius)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if !self.origin.is_finite() || !self.spawn_heading.is_finite() {
            return Err(SimError::Config("origin and spawn_heading must be finite".into()));
        }
        Ok(())
    }

    /// Snapshot of the spawn-relevant fields.
    pub fn spawn_spec(&self) -> SpawnSpec {
        SpawnSpec {
            origin:        self.origin,
            spread:        self.flock_radius,
            max_speed:     self.max_speed,
            safe_radius:   self.safe_radius,
            zero_velocity: self.zero_initial_velocity,
            heading:       self.spawn_heading,
        }
    }
}

/// Preset behaviours selectable at runtime.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FlockMode {
    /// Alignment and separation off, every agent kicked in a random
    /// direction: a loose cloud orbiting the target.
    Swarm,
    /// Alignment and separation at full strength: a tight, ordered formation.
    Kite,
}

impl FlockMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FlockMode::Swarm => "swarm",
            FlockMode::Kite  => "kite",
        }
    }
}

impl fmt::Display for FlockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
