//! The base seek/flee formulas as composable free functions.
//!
//! Every built-in behavior reduces to one of these two, optionally scaled by
//! a distance factor or evaluated against a predicted target.  Keeping the
//! formulas free of any struct lets derived behaviors compose them instead
//! of subclassing.

use steer_core::Vec2;

/// Full-speed velocity straight toward `target`.
///
/// Zero when `position == target` (no preferred direction).
#[inline]
pub fn seek(position: Vec2, target: Vec2, max_speed: f32) -> Vec2 {
    (target - position).normalize_or_zero() * max_speed
}

/// Full-speed velocity straight away from `target` — the exact negation of
/// [`seek`] for the same inputs.
#[inline]
pub fn flee(position: Vec2, target: Vec2, max_speed: f32) -> Vec2 {
    -seek(position, target, max_speed)
}
