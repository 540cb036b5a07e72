//! Fluent builder for constructing a [`Sim`].

use steer_agent::{AgentRngs, AgentStore};
use steer_core::{AgentId, FieldId, FrameClock};
use steer_motion::MotionManager;
use steer_space::{FlowField, ObstacleSet};

use crate::{Sim, SimConfig, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — time scale, fixed timestep, snapshot cadence
/// - [`AgentStore`] + [`AgentRngs`] — from
///   [`steer_agent::AgentStoreBuilder`]
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default              |
/// |-------------------|----------------------|
/// | `.steer(id, m)`   | agent is not steered |
/// | `.obstacles(set)` | empty set            |
/// | `.field(f)`       | no flow fields       |
///
/// Missing collaborators fail at build time rather than degrading at run
/// time: steering an agent the store does not contain, or steering the same
/// agent twice, is rejected by [`build`](Self::build).
///
/// # Example
///
/// ```rust,ignore
/// let (store, rngs) = AgentStoreBuilder::new(2, seed).build();
/// let mut manager = MotionManager::default();
/// manager.attach(Box::new(Seek::new(Some(AgentId(1)))));
///
/// let mut sim = SimBuilder::new(SimConfig::default(), store, rngs)
///     .steer(AgentId(0), manager)
///     .build()?;
/// sim.run_frames(100, 0.016, &mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    agents: AgentStore,
    rngs: AgentRngs,
    steered: Vec<(AgentId, MotionManager)>,
    obstacles: Option<ObstacleSet>,
    fields: Vec<FlowField>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, agents: AgentStore, rngs: AgentRngs) -> Self {
        Self {
            config,
            agents,
            rngs,
            steered: Vec::new(),
            obstacles: None,
            fields: Vec::new(),
        }
    }

    /// Attach a motion manager to `agent`.  At most one manager per agent.
    pub fn steer(mut self, agent: AgentId, manager: MotionManager) -> Self {
        self.steered.push((agent, manager));
        self
    }

    /// Supply the obstacle set used for avoidance raycasts.
    ///
    /// If not called, an empty set is used and every cast misses.
    pub fn obstacles(mut self, obstacles: ObstacleSet) -> Self {
        self.obstacles = Some(obstacles);
        self
    }

    /// Register a flow field.  Fields are addressed by [`FieldId`] in
    /// registration order: the first `.field(..)` call is `FieldId(0)`.
    pub fn field(mut self, field: FlowField) -> Self {
        self.fields.push(field);
        self
    }

    /// The [`FieldId`] the next `.field(..)` call will receive.
    pub fn next_field_id(&self) -> FieldId {
        FieldId(self.fields.len() as u32)
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if self.rngs.len() != self.agents.count {
            return Err(SimError::Config(format!(
                "rng count {} does not match agent count {}",
                self.rngs.len(),
                self.agents.count
            )));
        }

        let mut managers: Vec<Option<MotionManager>> = Vec::with_capacity(self.agents.count);
        managers.resize_with(self.agents.count, || None);

        for (agent, manager) in self.steered {
            if !self.agents.contains(agent) {
                return Err(SimError::UnknownAgent(agent));
            }
            let slot = &mut managers[agent.index()];
            if slot.is_some() {
                return Err(SimError::DuplicateManager(agent));
            }
            *slot = Some(manager);
        }

        let time_scale = self.config.time_scale.max(0.0);
        Ok(Sim {
            clock: FrameClock::new(time_scale, self.config.fixed_timestep),
            config: self.config,
            agents: self.agents,
            rngs: self.rngs,
            managers,
            obstacles: self.obstacles.unwrap_or_default(),
            fields: self.fields,
        })
    }
}
