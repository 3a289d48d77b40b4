//! Position integration - the step that turns velocity into movement.
//!
//! The flock only updates velocity and heading.  Something else must move
//! agents, exactly once per tick, between one tick's steering and the next
//! tick's averaging.  [`Sim`](crate::Sim) does this with a
//! `PositionIntegrator`; applications driving a physics engine instead use
//! [`ExternalIntegration`] and write positions back with
//! [`Flock::set_position`](crate::Flock::set_position).

use flock_core::Vec3;

/// Advances one agent's position given its post-steering velocity.
///
/// Swap implementations at compile time via `Sim<I>`'s type parameter.
pub trait PositionIntegrator {
    fn integrate(&self, position: Vec3, velocity: Vec3, dt: f32) -> Vec3;
}

/// Explicit Euler: `position + velocity * dt`.
#[derive(Copy, Clone, Debug, Default)]
pub struct EulerIntegrator;

impl PositionIntegrator for EulerIntegrator {
    #[inline]
    fn integrate(&self, position: Vec3, velocity: Vec3, dt: f32) -> Vec3 {
        position + velocity * dt
    }
}

/// Leaves positions untouched; an external physics step owns movement.
#[derive(Copy, Clone, Debug, Default)]
pub struct ExternalIntegration;

impl PositionIntegrator for ExternalIntegration {
    #[inline]
    fn integrate(&self, position: Vec3, _velocity: Vec3, _dt: f32) -> Vec3 {
        position
    }
}
