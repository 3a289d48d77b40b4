//! A single flock member.

use flock_core::math::{lerp_clamped, limit_length};
use flock_core::{AgentId, Vec3};

/// Motion state and per-unit limits of one agent.
///
/// Steering is computed by the owning flock and written straight into
/// `velocity`; the only operation the agent performs on itself is the
/// post-update [`clamp_speed`](Self::clamp_speed).  `position` is advanced by
/// whatever integrates velocity each tick (see `flock_sim::PositionIntegrator`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,

    /// World-space location.
    pub position: Vec3,

    /// Current motion vector.  `|velocity| <= max_speed` after every clamp.
    pub velocity: Vec3,

    /// Facing direction (unit length).  Smoothed toward the flock target
    /// independently of `velocity`.
    pub heading: Vec3,

    /// Non-negative speed cap.
    pub max_speed: f32,

    /// Non-negative clearance radius, summed pairwise to get the separation
    /// threshold between two agents.
    pub safe_radius: f32,

    /// Cleared by `AgentStore::kill`; dead agents are skipped and pruned by
    /// the next averaging pass.
    pub(crate) alive: bool,
}

impl Agent {
    /// A live agent facing +Z.
    pub fn new(id: AgentId, position: Vec3, velocity: Vec3, max_speed: f32, safe_radius: f32) -> Self {
        Self {
            id,
            position,
            velocity,
            heading: Vec3::Z,
            max_speed,
            safe_radius,
            alive: true,
        }
    }

    /// Builder-style heading override.  A zero `heading` keeps +Z.
    pub fn with_heading(mut self, heading: Vec3) -> Self {
        let heading = heading.normalize_or_zero();
        if heading != Vec3::ZERO {
            self.heading = heading;
        }
        self
    }

    /// `false` once the agent has been destroyed but not yet pruned.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Rescale `velocity` to `max_speed` if it is faster.
    ///
    /// Compares squared magnitudes, so agents within their limit never pay
    /// for a square root.  A zero velocity is left alone.
    #[inline]
    pub fn clamp_speed(&mut self) {
        if let Some(clamped) = limit_length(self.velocity, self.max_speed) {
            self.velocity = clamped;
        }
    }

    /// Blend `heading` toward the direction from `position` to `target` by
    /// `blend` (clamped to `[0, 1]`), then renormalise.
    ///
    /// No-op when `target == position`, where the direction is undefined.
    pub fn smooth_heading(&mut self, target: Vec3, blend: f32) {
        let desired = (target - self.position).normalize_or_zero();
        if desired == Vec3::ZERO {
            return;
        }
        let blended = lerp_clamped(self.heading, desired, blend).normalize_or_zero();
        // Exactly opposite headings blended halfway cancel out.
        self.heading = if blended == Vec3::ZERO { desired } else { blended };
    }
}
