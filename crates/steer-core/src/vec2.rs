//! 2D vector helpers and the axis-aligned `Rect` used for field bounds.
//!
//! The engine standardises on `glam::Vec2`; this module only adds the few
//! operations `glam` lacks that the steering math needs: rotation by an angle
//! in degrees and bounded uniform random sampling.

use glam::Vec2;
use rand::Rng;

/// Rotate `v` counter-clockwise by `degrees`.
///
/// Plain 2×2 rotation-matrix multiply.  Degrees rather than radians because
/// every angle in the behavior configuration surface (wander angle, Perlin
/// fill) is specified in degrees.
#[inline]
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// A random vector with each axis sampled uniformly in `[-100, 100)`.
///
/// The bound matches the magnitude cap used by flow-field random fills.
#[inline]
pub fn random_vec2<R: Rng>(rng: &mut R) -> Vec2 {
    Vec2::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0))
}

// ── Rect ──────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle: minimum corner plus size.
///
/// Containment is min-inclusive, max-exclusive, so adjacent rects tile a
/// plane without double-claiming boundary points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min:  Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Rect of the given `size` centered on `center`.
    #[inline]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self { min: center - size * 0.5, size }
    }

    #[inline]
    pub fn xmin(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn ymin(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// `true` if `p` lies inside the rect (min-inclusive, max-exclusive).
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x
            && p.y >= self.min.y
            && p.x < self.min.x + self.size.x
            && p.y < self.min.y + self.size.y
    }
}
