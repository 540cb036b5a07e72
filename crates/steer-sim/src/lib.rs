//! `steer-sim` — the frame loop that drives motion managers over update
//! phases.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`sim`]      | `Sim` — frame loop, per-phase manager stepping         |
//! | [`builder`]  | `SimBuilder` — validated construction                  |
//! | [`config`]   | `SimConfig` — time scale, fixed step, snapshot cadence |
//! | [`observer`] | `SimObserver` trait + `NoopObserver`                   |
//! | [`error`]    | `SimError`, `SimResult<T>`                             |
//!
//! # Frame model
//!
//! Each call to [`Sim::advance`] spans one host frame.  The
//! [`FrameClock`][steer_core::FrameClock] converts the frame's real duration
//! into an ordered phase list (fixed sub-steps, update, late update), and
//! every phase steps the steered agents in ascending `AgentId` order.  The
//! whole frame therefore has a single deterministic order of operations:
//! all behavior reads for an agent happen before its integration, which
//! happens before its position write, and agents never interleave.

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
