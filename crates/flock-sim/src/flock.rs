//! The `Flock` coordinator.

use flock_agent::{Agent, AgentStore};
use flock_core::{AgentId, CoreError, SimRng, Vec3};
use tracing::{debug, trace};

use crate::steering::{self, SteeringContext};
use crate::{FlockMode, FlockParams, PositionIntegrator, SimResult};

/// Rate at which headings turn toward the target, per second.
pub const HEADING_SMOOTHING: f32 = 5.0;

/// A set of agents steered as one group.
///
/// The flock is the sole owner of its agents; callers get shared slices
/// for reading and address individual agents by [`AgentId`].  Membership
/// changes ([`add_agents`](Self::add_agents), [`remove_all`](Self::remove_all),
/// [`destroy`](Self::destroy)) take `&mut self`, so they can only happen
/// between ticks.
///
/// # Per-tick flow
///
/// ```text
/// tick(dt):
///   compute_averages()         - prune destroyed agents, mean position/velocity
///   for each agent (read-only) - alignment + cohesion + separation
///   for each agent (write)     - velocity += acc * max_speed * dt
///                                clamp_speed()
///                                heading → target, blend HEADING_SMOOTHING * dt
/// ```
///
/// The flock never moves agents.  Positions are advanced by a
/// [`PositionIntegrator`] via [`integrate`](Self::integrate), or written
/// back with [`set_position`](Self::set_position) by an external physics
/// step, exactly once per tick.
pub struct Flock {
    /// Tunables, editable between ticks.
    pub params: FlockParams,

    /// Cohesion point ("mothership" / rally point), editable between ticks.
    pub target: Vec3,

    agents:           AgentStore,
    average_velocity: Vec3,
    average_position: Vec3,
    rng:              SimRng,
}

impl Flock {
    /// An empty flock.  Fails if `params` violates the steering preconditions.
    pub fn new(params: FlockParams, seed: u64) -> SimResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            target:           Vec3::ZERO,
            agents:           AgentStore::new(),
            average_velocity: Vec3::ZERO,
            average_position: Vec3::ZERO,
            rng:              SimRng::new(seed),
        })
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Every stored agent in ascending id order.  May include agents
    /// destroyed since the last tick; check [`Agent::is_alive`].
    pub fn agents(&self) -> &[Agent] {
        self.agents.as_slice()
    }

    /// Agents not destroyed since the last tick.
    pub fn live_agents(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.live()
    }

    pub fn live_count(&self) -> usize {
        self.agents.live_count()
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id)
    }

    /// Number of stored agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Mean velocity of the live agents as of the last averaging pass.
    pub fn average_velocity(&self) -> Vec3 {
        self.average_velocity
    }

    /// Mean position of the live agents as of the last averaging pass, or
    /// the target right after [`remove_all`](Self::remove_all).
    pub fn average_position(&self) -> Vec3 {
        self.average_position
    }

    // ── Averages & steering ───────────────────────────────────────────────

    /// Erase destroyed agents, then recompute the mean velocity and position
    /// over the survivors.  Returns the number of agents averaged.
    ///
    /// With no survivors the previous averages are left untouched.
    pub fn compute_averages(&mut self) -> usize {
        let pruned = self.agents.prune();
        if pruned > 0 {
            debug!(pruned, remaining = self.agents.len(), "pruned destroyed agents");
        }

        let count = self.agents.len();
        if count == 0 {
            return 0;
        }

        let (velocity_sum, position_sum) = self
            .agents
            .as_slice()
            .iter()
            .fold((Vec3::ZERO, Vec3::ZERO), |(v, p), a| (v + a.velocity, p + a.position));

        let n = count as f32;
        self.average_velocity = velocity_sum / n;
        self.average_position = position_sum / n;
        count
    }

    /// Alignment term for `agent` against the current average velocity.
    pub fn alignment_acceleration(&self, agent: &Agent) -> Vec3 {
        steering::alignment(agent, self.average_velocity, self.params.alignment_strength)
    }

    /// Cohesion term pulling `agent` toward `target`.
    pub fn cohesion_acceleration(&self, agent: &Agent, target: Vec3) -> Vec3 {
        steering::cohesion(agent, target, self.params.flock_radius, self.params.cohesion_strength)
    }

    /// Separation term pushing `agent` away from every other live agent.
    pub fn separation_acceleration(&self, agent: &Agent) -> Vec3 {
        steering::separation(agent, self.agents.as_slice(), self.params.separation_strength)
    }

    /// Combined, unscaled steering acceleration for `agent`.
    pub fn steer(&self, agent: &Agent) -> Vec3 {
        self.context().acceleration(agent)
    }

    fn context(&self) -> SteeringContext<'_> {
        SteeringContext {
            params:           &self.params,
            target:           self.target,
            average_velocity: self.average_velocity,
            agents:           self.agents.as_slice(),
        }
    }

    /// Advance steering by `dt` seconds.  Returns the number of agents
    /// steered; an empty flock is left completely unchanged.
    pub fn tick(&mut self, dt: f32) -> usize {
        if self.compute_averages() == 0 {
            return 0;
        }

        let accelerations = self.compute_accelerations();

        let target = self.target;
        let heading_blend = HEADING_SMOOTHING * dt;
        for (agent, acceleration) in self.agents.as_mut_slice().iter_mut().zip(accelerations) {
            agent.velocity += acceleration * (agent.max_speed * dt);
            agent.clamp_speed();
            agent.smooth_heading(target, heading_blend);
        }

        let steered = self.agents.len();
        trace!(
            steered,
            average_position = ?self.average_position,
            average_velocity = ?self.average_velocity,
            "flock tick"
        );
        steered
    }

    /// Steering for every agent, in storage order.  Reads only positions,
    /// the fresh averages and the tunables, so evaluation order is free.
    fn compute_accelerations(&self) -> Vec<Vec3> {
        let ctx = self.context();

        #[cfg(not(feature = "parallel"))]
        {
            ctx.agents.iter().map(|a| ctx.acceleration(a)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            ctx.agents.par_iter().map(|a| ctx.acceleration(a)).collect()
        }
    }

    /// Move every live agent once with `integrator`.  Call exactly once per
    /// tick, after [`tick`](Self::tick).
    pub fn integrate<I: PositionIntegrator>(&mut self, integrator: &I, dt: f32) {
        for agent in self.agents.as_mut_slice().iter_mut().filter(|a| a.is_alive()) {
            agent.position = integrator.integrate(agent.position, agent.velocity, dt);
        }
    }

    // ── Membership ────────────────────────────────────────────────────────

    /// Spawn `count` agents around `params.origin` with the current
    /// `max_speed`/`safe_radius`.  Returns their ids.
    ///
    /// Fails, spawning nothing, only once the flock's id space is used up.
    pub fn add_agents(&mut self, count: usize) -> SimResult<Vec<AgentId>> {
        let spec = self.params.spawn_spec();
        let ids = self.agents.spawn(&spec, count, &mut self.rng)?;
        debug!(added = count, total = self.agents.len(), "spawned agents");
        Ok(ids)
    }

    /// Spawn `params.flock_size` agents.
    pub fn add_flock(&mut self) -> SimResult<Vec<AgentId>> {
        self.add_agents(self.params.flock_size)
    }

    /// Drop every agent.  The average position then reports the target so
    /// readers see a meaningful value instead of stale data.
    pub fn remove_all(&mut self) {
        let removed = self.agents.len();
        self.agents.clear();
        self.average_position = self.target;
        debug!(removed, "removed all agents");
    }

    /// Mark one agent as destroyed.  It is ignored by steering and erased
    /// at the start of the next tick.
    pub fn destroy(&mut self, id: AgentId) -> SimResult<()> {
        self.agents.kill(id)?;
        Ok(())
    }

    /// Overwrite an agent's position, for physics engines that integrate
    /// velocity themselves.
    pub fn set_position(&mut self, id: AgentId, position: Vec3) -> SimResult<()> {
        let agent = self.agents.get_mut(id).ok_or(CoreError::AgentNotFound(id))?;
        agent.position = position;
        Ok(())
    }

    /// Overwrite an agent's velocity, e.g. after a physics engine's
    /// collision response.  The speed limit is enforced on the next tick.
    pub fn set_velocity(&mut self, id: AgentId, velocity: Vec3) -> SimResult<()> {
        let agent = self.agents.get_mut(id).ok_or(CoreError::AgentNotFound(id))?;
        agent.velocity = velocity;
        Ok(())
    }

    /// Apply a preset.
    ///
    /// [`FlockMode::Swarm`] also re-rolls every live agent's velocity to a
    /// random vector with components in `[-max_speed, max_speed]`, clamped.
    pub fn apply_mode(&mut self, mode: FlockMode) {
        match mode {
            FlockMode::Swarm => {
                self.params.alignment_strength = 0.0;
                self.params.separation_strength = 0.0;
                for agent in self.agents.as_mut_slice().iter_mut().filter(|a| a.is_alive()) {
                    agent.velocity = self.rng.in_cube(1.0) * agent.max_speed;
                    agent.clamp_speed();
                }
            }
            FlockMode::Kite => {
                self.params.alignment_strength = 1.0;
                self.params.separation_strength = 1.0;
            }
        }
        debug!(%mode, "flock mode applied");
    }
}
