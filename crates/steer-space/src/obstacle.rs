//! Circular obstacles with an R-tree index, implementing [`RayCaster`].
//!
//! # Data layout
//!
//! Obstacles are stored twice: a dense `Vec<Obstacle>` indexed by
//! [`ObstacleId`] for direct access, and an R-tree of AABB envelopes
//! (inflated by each obstacle's radius) for cast queries.  A cast only
//! examines obstacles whose envelope intersects the swept segment's bounding
//! box, so scenes with many obstacles stay cheap.

use rstar::{RTree, RTreeObject, AABB};
use steer_core::{ObstacleId, Vec2};

use crate::raycast::{LayerMask, RayCaster, RayHit};

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// A circular blocking obstacle on one or more layers.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub center: Vec2,
    pub radius: f32,
    pub layer: LayerMask,
}

impl Obstacle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius: radius.max(0.0), layer: LayerMask::ALL }
    }

    pub fn on_layer(center: Vec2, radius: f32, layer: LayerMask) -> Self {
        Self { center, radius: radius.max(0.0), layer }
    }
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: the obstacle's AABB (center ± radius) plus
/// its dense-array ID.
#[derive(Clone)]
struct ObstacleEntry {
    envelope: AABB<[f32; 2]>,
    id: ObstacleId,
}

impl RTreeObject for ObstacleEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

// ── ObstacleSet ───────────────────────────────────────────────────────────────

/// An indexed collection of circular obstacles.
///
/// The default empty set is a valid [`RayCaster`] that never hits — useful
/// for scenes without obstacles.
#[derive(Default)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
    tree: RTree<ObstacleEntry>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an obstacle, returning its ID.
    pub fn insert(&mut self, obstacle: Obstacle) -> ObstacleId {
        let id = ObstacleId(self.obstacles.len() as u32);
        let half = Vec2::splat(obstacle.radius);
        let min = obstacle.center - half;
        let max = obstacle.center + half;
        self.tree.insert(ObstacleEntry {
            envelope: AABB::from_corners([min.x, min.y], [max.x, max.y]),
            id,
        });
        self.obstacles.push(obstacle);
        id
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Intersect a circle sweep against one obstacle.
    ///
    /// Returns the ray parameter `t` (distance along the normalized
    /// direction) of first contact, or `None` for a miss.  The sweep circle's
    /// radius is added to the obstacle's (Minkowski inflation), reducing the
    /// sweep to a thin ray against a fatter circle.
    fn sweep_circle(
        origin: Vec2,
        dir: Vec2,
        length: f32,
        sweep_radius: f32,
        obstacle: &Obstacle,
    ) -> Option<f32> {
        let inflated = obstacle.radius + sweep_radius;
        let oc = origin - obstacle.center;
        let c = oc.length_squared() - inflated * inflated;
        if c <= 0.0 {
            // Origin already overlaps the inflated circle.
            return Some(0.0);
        }
        let b = oc.dot(dir);
        if b >= 0.0 {
            // Circle is behind the ray (and we are outside it).
            return None;
        }
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let t = -b - disc.sqrt();
        (t >= 0.0 && t <= length).then_some(t)
    }
}

impl RayCaster for ObstacleSet {
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        length: f32,
        radius: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        let dir = direction.normalize_or_zero();
        if dir == Vec2::ZERO || length <= 0.0 {
            return None;
        }

        // Bounding box of the swept segment, inflated by the sweep radius.
        // Obstacle envelopes already include their own radius.
        let end = origin + dir * length;
        let min = origin.min(end) - Vec2::splat(radius);
        let max = origin.max(end) + Vec2::splat(radius);
        let query = AABB::from_corners([min.x, min.y], [max.x, max.y]);

        let mut nearest: Option<(f32, &Obstacle)> = None;
        for entry in self.tree.locate_in_envelope_intersecting(&query) {
            let obstacle = &self.obstacles[entry.id.index()];
            if !mask.intersects(obstacle.layer) {
                continue;
            }
            if let Some(t) = Self::sweep_circle(origin, dir, length, radius, obstacle) {
                if nearest.is_none_or(|(best, _)| t < best) {
                    nearest = Some((t, obstacle));
                }
            }
        }

        nearest.map(|(t, obstacle)| {
            // Surface contact: project the sweep center at time t onto the
            // obstacle's actual (uninflated) boundary.
            let sweep_center = origin + dir * t;
            let outward = (sweep_center - obstacle.center).normalize_or(Vec2::X);
            RayHit {
                point: obstacle.center + outward * obstacle.radius,
                center: obstacle.center,
                distance: t,
            }
        })
    }
}
