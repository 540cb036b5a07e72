//! `steer-space` — spatial data structures for the `rust_steer` engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`field`]    | `FlowField` — dense grid of 2D vectors over a world rect |
//! | [`raycast`]  | `RayCaster` trait, `RayHit`, `LayerMask`                 |
//! | [`obstacle`] | `Obstacle`, `ObstacleSet` (R-tree indexed `RayCaster`)   |
//! | [`error`]    | `SpaceError`, `SpaceResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on plain data types.      |

pub mod error;
pub mod field;
pub mod obstacle;
pub mod raycast;


pub use error::{SpaceError, SpaceResult};
pub use field::FlowField;
pub use obstacle::{Obstacle, ObstacleSet};
pub use raycast::{LayerMask, RayCaster, RayHit};
