//! `flock-agent` - per-unit motion state and agent storage.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`agent`]  | `Agent` (position, velocity, heading, limits), `clamp_speed`   |
//! | [`store`]  | `AgentStore` - sole owner of a flock's agents, liveness, pruning |
//! | [`spawn`]  | `SpawnSpec` - cube-spread spawn with zero or random velocity   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.  |

pub mod agent;
pub mod spawn;
pub mod store;


pub use agent::Agent;
pub use spawn::SpawnSpec;
pub use store::AgentStore;
