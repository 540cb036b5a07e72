//! The per-agent motion manager: behavior blending and velocity integration.

use log::trace;
use steer_agent::AgentStore;
use steer_behavior::{SteerContext, SteeringBehavior};
use steer_core::{AgentId, AgentRng, BehaviorId, Kinematics, StepTiming, UpdatePhase, Vec2};
use steer_space::{FlowField, RayCaster};

use crate::{MotionConfig, MotionError, MotionResult};

/// Blends the proposals of its attached behaviors and integrates one agent's
/// motion, once per frame in its configured phase.
///
/// The manager is the exclusive owner of the agent's velocity; the agent
/// store only ever sees the integrated position and rotation.  Behaviors
/// observe the velocity through a read-only [`Kinematics`] snapshot taken at
/// the start of the step, so every behavior in the same step sees identical
/// inputs regardless of attachment order.
///
/// # Activation
///
/// Toggling [`set_active`](Self::set_active) in either direction resets the
/// velocity to zero: a manager that was paused and resumed accelerates from
/// rest rather than replaying stale momentum.
pub struct MotionManager {
    active: bool,
    phase: UpdatePhase,
    max_speed: f32,
    mass: f32,
    rotate: bool,
    timescale_independent: bool,
    debug: bool,

    velocity: Vec2,
    direction: Vec2,

    behaviors: Vec<Box<dyn SteeringBehavior>>,
    /// Indices into `behaviors` whose active flag was set at the last
    /// refresh.  Rebuilt by [`refresh_behaviors`](Self::refresh_behaviors).
    active_indices: Vec<usize>,
}

impl Default for MotionManager {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}

impl MotionManager {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            active: true,
            phase: config.phase,
            max_speed: config.max_speed.max(0.0),
            mass: config.mass.max(1.0),
            rotate: config.rotate,
            timescale_independent: config.timescale_independent,
            debug: config.debug,
            velocity: Vec2::ZERO,
            direction: Vec2::X,
            behaviors: Vec::new(),
            active_indices: Vec::new(),
        }
    }

    // ── Manager state ─────────────────────────────────────────────────────

    #[inline]
    pub fn active(&self) -> bool {
        self.active
    }

    /// Toggle the manager.  Any actual change resets the velocity to zero.
    pub fn set_active(&mut self, active: bool) {
        if active != self.active {
            self.active = active;
            self.velocity = Vec2::ZERO;
        }
    }

    #[inline]
    pub fn phase(&self) -> UpdatePhase {
        self.phase
    }

    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Speed ceiling clamps below to 0.
    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.max_speed = max_speed.max(0.0);
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Mass clamps below to 1.
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass.max(1.0);
    }

    #[inline]
    pub fn rotate(&self) -> bool {
        self.rotate
    }

    pub fn set_rotate(&mut self, rotate: bool) {
        self.rotate = rotate;
    }

    #[inline]
    pub fn timescale_independent(&self) -> bool {
        self.timescale_independent
    }

    pub fn set_timescale_independent(&mut self, independent: bool) {
        self.timescale_independent = independent;
    }

    #[inline]
    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// The current integrated velocity.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// The last nonzero movement direction (unit length; starts at +X).
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Read-only motion snapshot handed to behaviors.
    #[inline]
    pub fn kinematics(&self) -> Kinematics {
        Kinematics {
            velocity: self.velocity,
            direction: self.direction,
            max_speed: self.max_speed,
            mass: self.mass,
        }
    }

    // ── Behavior attachment ───────────────────────────────────────────────

    /// Attach a behavior, returning its handle.  Handles are dense indices
    /// and stay valid for the manager's lifetime (behaviors are never
    /// removed, only deactivated).
    pub fn attach(&mut self, behavior: Box<dyn SteeringBehavior>) -> BehaviorId {
        let id = BehaviorId(self.behaviors.len() as u32);
        self.behaviors.push(behavior);
        self.refresh_behaviors();
        id
    }

    pub fn behavior(&self, id: BehaviorId) -> MotionResult<&dyn SteeringBehavior> {
        self.behaviors
            .get(id.index())
            .map(|b| b.as_ref())
            .ok_or(MotionError::UnknownBehavior(id))
    }

    pub fn behavior_mut(&mut self, id: BehaviorId) -> MotionResult<&mut dyn SteeringBehavior> {
        self.behaviors
            .get_mut(id.index())
            .map(|b| b.as_mut())
            .ok_or(MotionError::UnknownBehavior(id))
    }

    /// Set one behavior's active flag.
    ///
    /// Change-triggered: an actual flip fires the behavior's
    /// [`on_active_changed`](SteeringBehavior::on_active_changed) hook (the
    /// pursuit family resets its velocity tracker there) and rebuilds the
    /// active list.  Setting the flag to its current value does nothing.
    pub fn set_behavior_active(&mut self, id: BehaviorId, active: bool) -> MotionResult<()> {
        let behavior = self
            .behaviors
            .get_mut(id.index())
            .ok_or(MotionError::UnknownBehavior(id))?;
        if behavior.params().active() != active {
            behavior.params_mut().set_active(active);
            behavior.on_active_changed(active);
            self.refresh_behaviors();
        }
        Ok(())
    }

    /// Rebuild the cached active list by re-scanning every attached
    /// behavior's flag.
    ///
    /// Must be called after editing an active flag directly through
    /// [`behavior_mut`](Self::behavior_mut);
    /// [`set_behavior_active`](Self::set_behavior_active) and
    /// [`attach`](Self::attach) call it themselves.
    pub fn refresh_behaviors(&mut self) {
        self.active_indices.clear();
        self.active_indices.extend(
            self.behaviors
                .iter()
                .enumerate()
                .filter(|(_, b)| b.params().active())
                .map(|(i, _)| i),
        );
    }

    /// Number of attached behaviors (active or not).
    pub fn behavior_count(&self) -> usize {
        self.behaviors.len()
    }

    // ── Step ──────────────────────────────────────────────────────────────

    /// Run one update phase for `agent`.
    ///
    /// A phase that does not match the manager's configured phase, or an
    /// inactive manager, is a no-op returning `Ok(false)`.  Otherwise the
    /// manager polls its active behaviors, averages their desired velocities
    /// (zero with none active), integrates, writes the new position (and
    /// rotation, when enabled) into `agents`, and returns `Ok(true)`.
    pub fn step(
        &mut self,
        agent: AgentId,
        timing: StepTiming,
        agents: &mut AgentStore,
        caster: &dyn RayCaster,
        fields: &[FlowField],
        rng: &mut AgentRng,
    ) -> MotionResult<bool> {
        if timing.phase != self.phase || !self.active {
            return Ok(false);
        }

        let position = agents
            .position(agent)
            .ok_or(MotionError::Agent(steer_core::SteerError::AgentNotFound(agent)))?;

        let desired = {
            let ctx = SteerContext {
                agent,
                position,
                kin: self.kinematics(),
                timing,
                agents,
                caster,
                fields,
            };
            // Take the index list so behaviors can be borrowed mutably while
            // iterating it.
            let indices = std::mem::take(&mut self.active_indices);
            let mut sum = Vec2::ZERO;
            for &i in &indices {
                sum += self.behaviors[i].desired_velocity(&ctx, rng);
            }
            let desired = if indices.is_empty() {
                Vec2::ZERO
            } else {
                sum / indices.len() as f32
            };
            self.active_indices = indices;
            desired
        };

        let steering = desired - self.velocity;
        self.velocity += steering / self.mass;

        let dt = if self.timescale_independent {
            timing.unscaled_delta
        } else {
            timing.delta
        };
        agents.set_position(agent, position + self.velocity * dt)?;

        if self.velocity != Vec2::ZERO {
            self.direction = self.velocity.normalize();
            if self.rotate {
                agents.set_rotation(agent, self.velocity.y.atan2(self.velocity.x))?;
            }
        }

        trace!(
            "{agent} {}: desired {desired:?}, velocity {:?}",
            timing.phase, self.velocity
        );
        Ok(true)
    }
}
