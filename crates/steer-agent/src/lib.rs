//! `steer-agent` — Structure-of-Arrays agent transform storage for the
//! `rust_steer` engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|--------------------------------------------------------|
//! | [`store`]   | `AgentStore` (SoA arrays), `AgentRngs` (per-agent RNG) |
//! | [`builder`] | `AgentStoreBuilder` (fluent construction)              |
//!
//! The store is the engine's "transform provider": it owns every agent's 2D
//! position and orientation.  Velocity is deliberately NOT stored here — it
//! is exclusively owned by each agent's motion manager, which writes the
//! integrated position/rotation back through this store.

pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use store::{AgentRngs, AgentStore};
