//! `steer-motion` — per-agent steering blend and motion integration.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`manager`] | `MotionManager` — blends behavior proposals, integrates     |
//! | [`config`]  | `MotionConfig` — phase, speed/mass limits, flags            |
//! | [`error`]   | `MotionError`, `MotionResult<T>`                            |
//!
//! # Integration model
//!
//! Each steered agent owns one [`MotionManager`].  Once per frame, in the
//! manager's configured [`UpdatePhase`][steer_core::UpdatePhase], the manager
//! polls every attached active behavior for a desired velocity,
//! arithmetic-averages the proposals, and integrates:
//!
//! ```text
//! steering = average_desired − velocity
//! velocity += steering / mass
//! position += velocity × dt
//! ```
//!
//! Velocity is owned exclusively by the manager; behaviors only ever read it
//! through the [`Kinematics`][steer_core::Kinematics] snapshot.  Toggling the
//! manager's active flag in either direction resets velocity to zero.

pub mod config;
pub mod error;
pub mod manager;


pub use config::MotionConfig;
pub use error::{MotionError, MotionResult};
pub use manager::MotionManager;
