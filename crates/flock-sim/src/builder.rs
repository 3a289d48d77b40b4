//! Fluent builder for constructing a [`Sim`].

use flock_core::{SimConfig, Vec3};

use crate::{Flock, FlockParams, PositionIntegrator, Sim, SimResult};

/// Fluent builder for [`Sim<I>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default            |
/// |------------------------|--------------------|
/// | `.target(v)`           | `Vec3::ZERO`       |
/// | `.initial_agents(n)`   | no agents          |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, FlockParams::default(), EulerIntegrator)
///     .target(Vec3::new(0.0, 20.0, 0.0))
///     .initial_agents(50)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<I: PositionIntegrator> {
    config:         SimConfig,
    params:         FlockParams,
    integrator:     I,
    target:         Vec3,
    initial_agents: usize,
}

impl<I: PositionIntegrator> SimBuilder<I> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, params: FlockParams, integrator: I) -> Self {
        Self {
            config,
            params,
            integrator,
            target:         Vec3::ZERO,
            initial_agents: 0,
        }
    }

    /// Cohesion point the flock gathers around.
    pub fn target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    /// Spawn `count` agents before the first tick.
    pub fn initial_agents(mut self, count: usize) -> Self {
        self.initial_agents = count;
        self
    }

    /// Validate inputs, spawn the initial agents, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<I>> {
        self.config.validate()?;

        let mut flock = Flock::new(self.params, self.config.seed)?;
        flock.target = self.target;
        if self.initial_agents > 0 {
            flock.add_agents(self.initial_agents)?;
        }

        Ok(Sim {
            clock:      self.config.make_clock(),
            config:     self.config,
            flock,
            integrator: self.integrator,
        })
    }
}
