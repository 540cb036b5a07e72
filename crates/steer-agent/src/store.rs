//! Core agent storage: `AgentStore` (SoA transforms) and `AgentRngs`
//! (per-agent RNG).
//!
//! # Why two structs?
//!
//! A motion manager's step needs `&mut AgentRngs` (the owning agent's RNG,
//! for wander sampling) and `&mut AgentStore` (to write the integrated
//! position) while behaviors concurrently read `&AgentStore` (target
//! lookups).  Keeping the RNGs in a separate struct lets the simulation loop
//! take both borrows from disjoint fields without fighting the borrow
//! checker.

use steer_core::{AgentId, AgentRng, SteerError, SteerResult, Vec2};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] so the
/// simulation loop can hold `&mut AgentRngs` alongside `&mut AgentStore`.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent transforms.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.position[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Behaviors hold targets as `AgentId` handles into this store rather than
/// direct references, so a despawned target can never dangle — a stale handle
/// simply resolves to `None` and the behavior falls back to the origin.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// World-space position of each agent.
    pub position: Vec<Vec2>,

    /// Orientation of each agent as a counter-clockwise angle in radians
    /// from +X.  Written by motion managers with rotation enabled.
    pub rotation: Vec<f32>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// `true` if `agent` indexes a live slot.
    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    /// Position of `agent`, or `None` for an out-of-range / stale handle.
    ///
    /// This is the target-resolution path used by behaviors: `None` routes
    /// to the origin-as-target degenerate case.
    #[inline]
    pub fn position(&self, agent: AgentId) -> Option<Vec2> {
        self.position.get(agent.index()).copied()
    }

    /// Rotation of `agent` in radians, or an error for an unknown handle.
    pub fn rotation(&self, agent: AgentId) -> SteerResult<f32> {
        self.rotation
            .get(agent.index())
            .copied()
            .ok_or(SteerError::AgentNotFound(agent))
    }

    /// Overwrite the position of `agent`.
    pub fn set_position(&mut self, agent: AgentId, position: Vec2) -> SteerResult<()> {
        match self.position.get_mut(agent.index()) {
            Some(p) => {
                *p = position;
                Ok(())
            }
            None => Err(SteerError::AgentNotFound(agent)),
        }
    }

    /// Overwrite the rotation of `agent` (radians, counter-clockwise from +X).
    pub fn set_rotation(&mut self, agent: AgentId, rotation: f32) -> SteerResult<()> {
        match self.rotation.get_mut(agent.index()) {
            Some(r) => {
                *r = rotation;
                Ok(())
            }
            None => Err(SteerError::AgentNotFound(agent)),
        }
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn new(count: usize) -> Self {
        Self {
            count,
            position: vec![Vec2::ZERO; count],
            rotation: vec![0.0_f32; count],
        }
    }
}
