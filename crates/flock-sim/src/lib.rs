//! `flock-sim` - the flock coordinator and its driver loop.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Averages   - prune destroyed agents; mean velocity and position.
//!   ② Steering   - alignment + cohesion + separation per agent
//!                  (parallel with the `parallel` feature).
//!   ③ Apply      - velocity += acc * max_speed * dt; clamp; smooth heading.
//!   ④ Integrate  - PositionIntegrator moves each agent once.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the steering phase on Rayon's thread pool.        |
//! | `serde`    | Serde derives on `FlockParams` and `FlockMode`.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flock_core::SimConfig;
//! use flock_sim::{EulerIntegrator, FlockParams, NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), FlockParams::default(), EulerIntegrator)
//!     .initial_agents(100)
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod flock;
pub mod integrator;
pub mod observer;
pub mod params;
pub mod sim;
pub mod steering;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use flock::{Flock, HEADING_SMOOTHING};
pub use integrator::{EulerIntegrator, ExternalIntegration, PositionIntegrator};
pub use observer::{FlockObserver, NoopObserver};
pub use params::{FlockMode, FlockParams};
pub use sim::Sim;
pub use steering::SteeringContext;
