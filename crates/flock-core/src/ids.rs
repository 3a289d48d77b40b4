//! Stable agent identifiers.
//!
//! Agents are stored in a compacting `Vec`, so a position in that vector is
//! not a stable handle.  `AgentId` is assigned once at spawn from a
//! monotonically increasing counter and survives pruning of other agents.

use std::fmt;

/// Identifier of one agent within its flock.  Never reused by that flock.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Sentinel meaning "no valid ID".
    pub const INVALID: AgentId = AgentId(u32::MAX);
}

impl Default for AgentId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}
