//! `flock-core` - foundational types for the flock simulation.
//!
//! This crate is a dependency of every other `flock-*` crate.  It has no
//! `flock-*` dependencies and only a few external ones (`glam`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`ids`]    | `AgentId`                                                 |
//! | [`math`]   | `Vec3` re-export, unit clamp, speed limit, clamped lerp    |
//! | [`time`]   | `Tick`, `SimClock`, `SimConfig`                           |
//! | [`rng`]    | `SimRng` (seeded, per flock)                              |
//! | [`error`]  | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod math;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use math::Vec3;
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
