//! `AgentStore` - exclusive owner of a flock's agents.
//!
//! Agents live in a `Vec<Agent>` ordered by ascending `AgentId` (ids are
//! handed out monotonically and pruning keeps relative order), so lookups by
//! id are a binary search.  Destroying an agent only clears its liveness
//! flag; the flock's next averaging pass calls [`AgentStore::prune`] to erase
//! it.  Nothing outside the store holds a reference to an agent across
//! ticks, so erasing is the whole of "destruction".

use flock_core::{AgentId, CoreError, CoreResult, SimRng};

use crate::{Agent, SpawnSpec};

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentStore {
    agents:  Vec<Agent>,
    next_id: u32,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store whose next spawned id is `next_id`.
    #[cfg(test)]
    pub(crate) fn starting_at(next_id: u32) -> Self {
        Self { agents: Vec::new(), next_id }
    }

    /// Number of stored agents, including destroyed ones not yet pruned.
    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Number of agents that are still alive.
    pub fn live_count(&self) -> usize {
        self.agents.iter().filter(|a| a.alive).count()
    }

    /// All stored agents in ascending id order.
    #[inline]
    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    /// Mutable access for the owning flock's apply phase.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// Iterator over live agents only.
    pub fn live(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter().filter(|a| a.alive)
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.index_of(id).map(|i| &self.agents[i])
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.index_of(id).map(move |i| &mut self.agents[i])
    }

    /// Spawn `count` agents from `spec`, returning their ids in order.
    ///
    /// All or nothing: fails without spawning if fewer than `count` ids
    /// remain below [`AgentId::INVALID`].
    pub fn spawn(
        &mut self,
        spec: &SpawnSpec,
        count: usize,
        rng: &mut SimRng,
    ) -> CoreResult<Vec<AgentId>> {
        let available = (AgentId::INVALID.0 - self.next_id) as usize;
        if count > available {
            return Err(CoreError::IdsExhausted { requested: count, available });
        }

        self.agents.reserve(count);
        let ids = (0..count)
            .map(|_| {
                let id = AgentId(self.next_id);
                self.next_id += 1;
                self.agents.push(spec.spawn(id, rng));
                id
            })
            .collect();
        Ok(ids)
    }

    /// Mark `id` as destroyed.  It stays in storage, invisible to steering,
    /// until the next [`prune`](Self::prune).
    pub fn kill(&mut self, id: AgentId) -> CoreResult<()> {
        let agent = self.get_mut(id).ok_or(CoreError::AgentNotFound(id))?;
        agent.alive = false;
        Ok(())
    }

    /// Erase every destroyed agent.  Returns how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.agents.len();
        self.agents.retain(|a| a.alive);
        before - self.agents.len()
    }

    /// Drop every agent.  Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.agents.clear();
    }

    fn index_of(&self, id: AgentId) -> Option<usize> {
        self.agents.binary_search_by_key(&id, |a| a.id).ok()
    }
}
