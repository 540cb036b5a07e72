//! `steer-core` — foundational types for the `rust_steer` 2D steering engine.
//!
//! This crate is a dependency of every other `steer-*` crate.  It intentionally
//! has no `steer-*` dependencies and minimal external ones (only `glam`,
//! `rand`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `BehaviorId`, `FieldId`, `ObstacleId`      |
//! | [`vec2`]        | `Rect`, degree rotation, bounded random sampling      |
//! | [`time`]        | `UpdatePhase`, `StepTiming`, `FrameClock`             |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`kinematics`]  | `Kinematics` — per-agent motion snapshot              |
//! | [`error`]       | `SteerError`, `SteerResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod kinematics;
pub mod rng;
pub mod time;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SteerError, SteerResult};
pub use ids::{AgentId, BehaviorId, FieldId, ObstacleId};
pub use kinematics::Kinematics;
pub use rng::{AgentRng, SimRng};
pub use time::{FrameClock, StepTiming, UpdatePhase};
pub use vec2::Rect;

/// The engine works exclusively in 2D; `glam::Vec2` is the vector type
/// throughout.  Re-exported so downstream crates need not depend on `glam`
/// directly.
pub use glam::Vec2;
