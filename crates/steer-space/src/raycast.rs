//! The raycast boundary contract consumed by the avoid behavior.

use steer_core::Vec2;

// ── LayerMask ─────────────────────────────────────────────────────────────────

/// A 32-bit layer bitmask used to filter which obstacles a cast can hit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches every layer.
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Matches no layer at all — casts against it never hit.
    pub const NONE: LayerMask = LayerMask(0);

    /// Mask with only bit `n` set (`n` in `0..32`).
    #[inline]
    pub const fn layer(n: u32) -> LayerMask {
        LayerMask(1 << n)
    }

    /// `true` if the two masks share at least one layer.
    #[inline]
    pub const fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::ALL
    }
}

impl std::ops::BitOr for LayerMask {
    type Output = LayerMask;
    #[inline]
    fn bitor(self, rhs: LayerMask) -> LayerMask {
        LayerMask(self.0 | rhs.0)
    }
}

// ── RayHit ────────────────────────────────────────────────────────────────────

/// The nearest blocking surface found by a cast.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    /// Point on the obstacle surface where the cast first touches it.
    pub point: Vec2,

    /// Center of the hit obstacle.  The avoid behavior steers along
    /// `point - center`, i.e. directly away from the obstacle's core.
    pub center: Vec2,

    /// Distance along the ray from the origin to the contact, in world
    /// units.  Zero when the origin already overlaps the obstacle.
    pub distance: f32,
}

// ── RayCaster ─────────────────────────────────────────────────────────────────

/// The raycast provider boundary.
///
/// Given an origin, direction, and length, returns the nearest blocking
/// surface on a layer matching `mask`, or `None` for a clear path.  A
/// `radius` of zero requests a thin ray; a positive radius sweeps a circle
/// of that radius along the ray instead.
///
/// Implementations must treat a zero `direction` as a miss rather than
/// panicking — a stationary agent's avoid query is a legitimate input.
pub trait RayCaster {
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        length: f32,
        radius: f32,
        mask: LayerMask,
    ) -> Option<RayHit>;
}
