//! `steer-behavior` — the steering behavior contract and the built-in
//! behavior set for the `rust_steer` engine.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                       |
//! |------------------|----------------------------------------------------------------|
//! | [`params`]       | `BehaviorParams` — active flag, weight, target handle          |
//! | [`context`]      | `SteerContext<'a>` — read-only per-phase snapshot              |
//! | [`behavior`]     | `SteeringBehavior` trait                                       |
//! | [`steering`]     | `seek` / `flee` base formulas as free functions                |
//! | [`basic`]        | `Seek`, `Flee`, `Arrival`, `Eschew`, `Magnet`                  |
//! | [`wander`]       | `Wander` — integrated random angle around a carrot circle      |
//! | [`avoid`]        | `Avoid` — raycast-based obstacle avoidance                     |
//! | [`pursuit`]      | `Pursuit`, `Evade`, `TargetTracker` velocity estimation        |
//! | [`field_follow`] | `FieldFollow` — steer along a sampled flow field               |
//!
//! # Design notes
//!
//! There is no behavior inheritance: every behavior is a flat struct
//! implementing the single-capability [`SteeringBehavior`] trait, and the
//! shared math (the seek/flee formulas, distance scaling, target prediction)
//! lives in composable free functions.  A motion manager polls each attached
//! behavior's [`desired_velocity`](SteeringBehavior::desired_velocity) once
//! per phase and blends the results; behaviors never write agent state
//! themselves.

pub mod avoid;
pub mod basic;
pub mod behavior;
pub mod context;
pub mod field_follow;
pub mod params;
pub mod pursuit;
pub mod steering;
pub mod wander;

#[cfg(test)]
mod tests;

pub use avoid::Avoid;
pub use basic::{Arrival, Eschew, Flee, Magnet, Seek};
pub use behavior::SteeringBehavior;
pub use context::SteerContext;
pub use field_follow::FieldFollow;
pub use params::BehaviorParams;
pub use pursuit::{Evade, Pursuit};
pub use wander::Wander;
