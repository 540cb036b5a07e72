//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use steer_agent::AgentStoreBuilder;
//! use steer_core::Vec2;
//!
//! let (store, rngs) = AgentStoreBuilder::new(3, /*seed=*/ 42)
//!     .position(1, Vec2::new(10.0, 0.0))
//!     .build();
//!
//! assert_eq!(store.count, 3);
//! assert_eq!(rngs.len(), 3);
//! assert_eq!(store.position[1], Vec2::new(10.0, 0.0));
//! ```

use steer_core::Vec2;

use crate::{AgentRngs, AgentStore};

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// All arrays are pre-allocated at construction time so later writes are
/// simple indexed assignments, not pushes.
pub struct AgentStoreBuilder {
    count: usize,
    seed: u64,
    positions: Vec<Vec2>,
    rotations: Vec<f32>,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            positions: vec![Vec2::ZERO; count],
            rotations: vec![0.0; count],
        }
    }

    /// Set the initial position of agent `index`.
    ///
    /// # Panics
    /// Panics if `index >= count` — builder misuse is a programming error,
    /// not a runtime condition.
    pub fn position(mut self, index: usize, position: Vec2) -> Self {
        self.positions[index] = position;
        self
    }

    /// Set the initial rotation (radians) of agent `index`.
    pub fn rotation(mut self, index: usize, rotation: f32) -> Self {
        self.rotations[index] = rotation;
        self
    }

    /// Replace all initial positions at once (length must equal `count`).
    pub fn positions(mut self, positions: Vec<Vec2>) -> Self {
        assert_eq!(positions.len(), self.count, "positions length mismatch");
        self.positions = positions;
        self
    }

    /// Construct `AgentStore` and `AgentRngs`.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let mut store = AgentStore::new(self.count);
        store.position = self.positions;
        store.rotation = self.rotations;
        let rngs = AgentRngs::new(self.count, self.seed);
        (store, rngs)
    }
}
