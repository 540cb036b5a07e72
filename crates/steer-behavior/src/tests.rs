//! Unit tests for steer-behavior.

use steer_agent::{AgentStore, AgentStoreBuilder};
use steer_core::{AgentId, AgentRng, Kinematics, StepTiming, UpdatePhase, Vec2};
use steer_space::{FlowField, LayerMask, ObstacleSet, RayCaster, RayHit};

use crate::{SteerContext, SteeringBehavior};

const EPS: f32 = 1e-5;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A caster that always reports the same hit (or none) — lets avoid tests
/// pin the exact hit geometry.
struct FixedCaster(Option<RayHit>);

impl RayCaster for FixedCaster {
    fn cast(&self, _: Vec2, _: Vec2, _: f32, _: f32, _: LayerMask) -> Option<RayHit> {
        self.0
    }
}

fn store_with(positions: &[Vec2]) -> AgentStore {
    let (store, _) = AgentStoreBuilder::new(positions.len(), 0)
        .positions(positions.to_vec())
        .build();
    store
}

fn rng() -> AgentRng {
    AgentRng::new(0, AgentId(0))
}

fn make_ctx<'a>(
    position: Vec2,
    kin: Kinematics,
    dt: f32,
    store: &'a AgentStore,
    caster: &'a dyn RayCaster,
    fields: &'a [FlowField],
) -> SteerContext<'a> {
    SteerContext {
        agent: AgentId(0),
        position,
        kin,
        timing: StepTiming::new(UpdatePhase::Update, dt, dt),
        agents: store,
        caster,
        fields,
    }
}

fn assert_vec2_eq(a: Vec2, b: Vec2) {
    assert!((a - b).length() < EPS, "{a:?} != {b:?}");
}

// ── Seek / Flee ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod seek_flee {
    use super::*;
    use crate::{Flee, Seek};

    #[test]
    fn seek_heads_at_max_speed() {
        let store = store_with(&[Vec2::ZERO, Vec2::new(10.0, 0.0)]);
        let caster = ObstacleSet::new();
        let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 0.02, &store, &caster, &[]);
        let mut rng = rng();

        let mut seek = Seek::new(Some(AgentId(1)));
        assert_vec2_eq(seek.desired_velocity(&ctx, &mut rng), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn flee_is_exact_negation_of_seek() {
        let positions = [
            Vec2::new(1.0, 2.0),
            Vec2::new(-7.5, 3.25),
            Vec2::new(0.0, -4.0),
            Vec2::new(123.0, -456.0),
        ];
        let store = store_with(&[Vec2::ZERO, Vec2::new(3.0, -9.0)]);
        let caster = ObstacleSet::new();
        let mut rng = rng();

        for p in positions {
            let ctx = make_ctx(p, Kinematics::default(), 0.02, &store, &caster, &[]);
            let mut seek = Seek::new(Some(AgentId(1)));
            let mut flee = Flee::new(Some(AgentId(1)));
            assert_eq!(
                flee.desired_velocity(&ctx, &mut rng),
                -seek.desired_velocity(&ctx, &mut rng)
            );
        }
    }

    #[test]
    fn unset_target_seeks_the_origin() {
        let store = store_with(&[Vec2::ZERO]);
        let caster = ObstacleSet::new();
        let ctx = make_ctx(
            Vec2::new(4.0, 0.0),
            Kinematics::default(),
            0.02,
            &store,
            &caster,
            &[],
        );
        let mut rng = rng();

        let mut seek = Seek::new(None);
        assert_vec2_eq(seek.desired_velocity(&ctx, &mut rng), Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn stale_target_handle_also_routes_to_origin() {
        let store = store_with(&[Vec2::ZERO]);
        let caster = ObstacleSet::new();
        let ctx = make_ctx(
            Vec2::new(4.0, 0.0),
            Kinematics::default(),
            0.02,
            &store,
            &caster,
            &[],
        );
        let mut rng = rng();

        let mut seek = Seek::new(Some(AgentId(999)));
        assert_vec2_eq(seek.desired_velocity(&ctx, &mut rng), Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn weight_scales_desired_velocity_but_not_compute() {
        let store = store_with(&[Vec2::ZERO, Vec2::new(10.0, 0.0)]);
        let caster = ObstacleSet::new();
        let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 0.02, &store, &caster, &[]);
        let mut rng = rng();

        let mut seek = Seek::new(Some(AgentId(1)));
        seek.params.set_weight(0.5);
        assert_vec2_eq(seek.desired_velocity(&ctx, &mut rng), Vec2::new(2.5, 0.0));
        assert_vec2_eq(
            seek.compute(Vec2::new(10.0, 0.0), &ctx, &mut rng),
            Vec2::new(5.0, 0.0),
        );
    }

    #[test]
    fn weight_setter_clamps_to_unit_interval() {
        let mut seek = Seek::new(None);
        seek.params.set_weight(3.0);
        assert_eq!(seek.params.weight(), 1.0);
        seek.params.set_weight(-1.0);
        assert_eq!(seek.params.weight(), 0.0);
    }
}

// ── Arrival / Eschew / Magnet ─────────────────────────────────────────────────

#[cfg(test)]
mod distance_scaled {
    use super::*;
    use crate::{Arrival, Eschew, Magnet, Seek};

    #[test]
    fn arrival_full_speed_outside_slowing_radius() {
        let store = store_with(&[Vec2::ZERO, Vec2::new(10.0, 0.0)]);
        let caster = ObstacleSet::new();
        let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 0.02, &store, &caster, &[]);
        let mut rng = rng();

        let mut arrival = Arrival::new(Some(AgentId(1)), 4.0);
        let mut seek = Seek::new(Some(AgentId(1)));
        assert_eq!(
            arrival.desired_velocity(&ctx, &mut rng),
            seek.desired_velocity(&ctx, &mut rng)
        );
    }

    #[test]
    fn arrival_decelerates_inside_slowing_radius() {
        let store = store_with(&[Vec2::ZERO, Vec2::new(2.0, 0.0)]);
        let caster = ObstacleSet::new();
        let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 0.02, &store, &caster, &[]);
        let mut rng = rng();

        // d = 2, r = 4 → factor 0.5, |v| = 5 × 0.5.
        let mut arrival = Arrival::new(Some(AgentId(1)), 4.0);
        let v = arrival.desired_velocity(&ctx, &mut rng);
        assert!((v.length() - 2.5).abs() < EPS);
        assert_vec2_eq(v, Vec2::new(2.5, 0.0));
    }

    #[test]
    fn arrival_radius_clamps_below_to_one() {
        let arrival = Arrival::new(None, 0.25);
        assert_eq!(arrival.slowing_radius(), 1.0);
    }

    #[test]
    fn eschew_push_weakens_with_distance() {
        let store = store_with(&[Vec2::ZERO, Vec2::ZERO]);
        let caster = ObstacleSet::new();
        let mut rng = rng();

        let mut eschew = Eschew::new(Some(AgentId(1)), 4.0);

        // One unit from the threat: factor = 1 − 1/4.
        let ctx = make_ctx(Vec2::new(1.0, 0.0), Kinematics::default(), 0.02, &store, &caster, &[]);
        let v = eschew.desired_velocity(&ctx, &mut rng);
        assert_vec2_eq(v, Vec2::new(5.0 * 0.75, 0.0));

        // Outside the safe radius: no push at all.
        let ctx = make_ctx(Vec2::new(9.0, 0.0), Kinematics::default(), 0.02, &store, &caster, &[]);
        assert_vec2_eq(eschew.desired_velocity(&ctx, &mut rng), Vec2::ZERO);
    }

    #[test]
    fn magnet_pulls_only_near_the_target() {
        let store = store_with(&[Vec2::ZERO, Vec2::ZERO]);
        let caster = ObstacleSet::new();
        let mut rng = rng();

        let mut magnet = Magnet::new(Some(AgentId(1)), 4.0);

        // Beyond the attraction radius: zero pull.
        let ctx = make_ctx(Vec2::new(6.0, 0.0), Kinematics::default(), 0.02, &store, &caster, &[]);
        assert_vec2_eq(magnet.desired_velocity(&ctx, &mut rng), Vec2::ZERO);

        // Exactly at the radius boundary: still inside (d > r is the cutoff),
        // factor = 1 − 4/4 = 0.
        let ctx = make_ctx(Vec2::new(4.0, 0.0), Kinematics::default(), 0.02, &store, &caster, &[]);
        assert_vec2_eq(magnet.desired_velocity(&ctx, &mut rng), Vec2::ZERO);

        // Halfway in: factor 0.5.
        let ctx = make_ctx(Vec2::new(2.0, 0.0), Kinematics::default(), 0.02, &store, &caster, &[]);
        assert_vec2_eq(magnet.desired_velocity(&ctx, &mut rng), Vec2::new(-2.5, 0.0));
    }
}

// ── Wander ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wander {
    use super::*;
    use crate::Wander;

    #[test]
    fn wander_moves_at_max_speed() {
        let store = store_with(&[Vec2::ZERO]);
        let caster = ObstacleSet::new();
        let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 0.02, &store, &caster, &[]);
        let mut rng = rng();

        let mut wander = Wander::new(3.0, 0.5);
        let v = wander.desired_velocity(&ctx, &mut rng);
        assert!((v.length() - 5.0).abs() < EPS);
    }

    #[test]
    fn wander_is_deterministic_under_a_fixed_seed() {
        let store = store_with(&[Vec2::ZERO]);
        let caster = ObstacleSet::new();
        let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 0.02, &store, &caster, &[]);

        let mut rng_a = AgentRng::new(7, AgentId(0));
        let mut rng_b = AgentRng::new(7, AgentId(0));
        let mut wander_a = Wander::new(3.0, 0.5);
        let mut wander_b = Wander::new(3.0, 0.5);

        for _ in 0..32 {
            assert_eq!(
                wander_a.desired_velocity(&ctx, &mut rng_a),
                wander_b.desired_velocity(&ctx, &mut rng_b)
            );
        }
    }

    #[test]
    fn wander_angle_integrates_instead_of_resampling() {
        // Per-frame angle change is bounded by 360° × dt, so with a small dt
        // consecutive headings stay close: their dot product is positive.
        let store = store_with(&[Vec2::ZERO]);
        let caster = ObstacleSet::new();
        let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 0.016, &store, &caster, &[]);
        let mut rng = rng();

        let mut wander = Wander::new(3.0, 0.5);
        let mut prev = wander.desired_velocity(&ctx, &mut rng);
        for _ in 0..64 {
            let next = wander.desired_velocity(&ctx, &mut rng);
            assert!(prev.dot(next) > 0.0, "heading flipped: {prev:?} → {next:?}");
            prev = next;
        }
    }

    #[test]
    fn wander_angle_is_frozen_at_zero_dt() {
        let store = store_with(&[Vec2::ZERO]);
        let caster = ObstacleSet::new();
        let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 0.0, &store, &caster, &[]);
        let mut rng = rng();

        let mut wander = Wander::new(3.0, 0.5);
        wander.desired_velocity(&ctx, &mut rng);
        assert_eq!(wander.wander_angle(), 0.0);
    }

    #[test]
    fn parameter_floors() {
        let wander = Wander::new(0.0, -2.0);
        assert_eq!(wander.circle_distance(), 1.0);
        assert_eq!(wander.circle_radius(), 0.0);
    }
}

// ── Avoid ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod avoid {
    use super::*;
    use crate::Avoid;

    #[test]
    fn no_hit_contributes_nothing() {
        let store = store_with(&[Vec2::ZERO]);
        let caster = FixedCaster(None);
        let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 0.02, &store, &caster, &[]);
        let mut rng = rng();

        let mut avoid = Avoid::new(2.0, 0.0);
        assert_eq!(avoid.desired_velocity(&ctx, &mut rng), Vec2::ZERO);
    }

    #[test]
    fn hit_blends_push_away_with_momentum() {
        // Obstacle center at (2, -1), contact at (2, 0): push is straight +Y
        // at max speed (0, 5).  Current velocity (5, 0) blends 1:1 and the
        // sum is renormalized to max speed.
        let store = store_with(&[Vec2::ZERO]);
        let caster = FixedCaster(Some(RayHit {
            point: Vec2::new(2.0, 0.0),
            center: Vec2::new(2.0, -1.0),
            distance: 2.0,
        }));
        let kin = Kinematics { velocity: Vec2::new(5.0, 0.0), ..Kinematics::default() };
        let ctx = make_ctx(Vec2::ZERO, kin, 0.02, &store, &caster, &[]);
        let mut rng = rng();

        let mut avoid = Avoid::new(2.0, 0.0);
        let v = avoid.desired_velocity(&ctx, &mut rng);
        let expected = (Vec2::new(0.0, 5.0) + Vec2::new(5.0, 0.0)).normalize() * 5.0;
        assert_vec2_eq(v, expected);
        assert!((v.length() - 5.0).abs() < EPS);
    }

    #[test]
    fn real_obstacle_set_end_to_end() {
        use steer_space::{Obstacle, ObstacleSet};

        let mut set = ObstacleSet::new();
        set.insert(Obstacle::new(Vec2::new(3.0, 0.0), 1.0));
        let store = store_with(&[Vec2::ZERO]);
        let kin = Kinematics { velocity: Vec2::new(5.0, 0.0), ..Kinematics::default() };
        let ctx = make_ctx(Vec2::ZERO, kin, 0.02, &store, &set, &[]);
        let mut rng = rng();

        // Dead-ahead hit: the push-away points straight back along the ray,
        // cancelling part of the momentum but keeping max magnitude... the
        // blend of (-5, 0) and (5, 0) is zero, so the result stays zero.
        let mut avoid = Avoid::new(5.0, 0.0);
        let v = avoid.desired_velocity(&ctx, &mut rng);
        assert_vec2_eq(v, Vec2::ZERO);
    }

    #[test]
    fn parameter_floors() {
        let avoid = Avoid::new(0.5, -1.0);
        assert_eq!(avoid.see_ahead_distance(), 1.0);
        assert_eq!(avoid.cast_radius(), 0.0);
    }
}

// ── Pursuit / Evade ───────────────────────────────────────────────────────────

#[cfg(test)]
mod pursuit {
    use super::*;
    use crate::{Evade, Pursuit, Seek};

    #[test]
    fn stationary_target_degenerates_to_seek() {
        let store = store_with(&[Vec2::ZERO, Vec2::new(30.0, 40.0)]);
        let caster = ObstacleSet::new();
        let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 0.5, &store, &caster, &[]);
        let mut rng = rng();

        let mut pursuit = Pursuit::new(Some(AgentId(1)));
        let mut seek = Seek::new(Some(AgentId(1)));

        // Several sampling intervals pass; the target never moves, so the
        // estimate stays zero and the prediction is the target itself.
        for _ in 0..8 {
            assert_eq!(
                pursuit.desired_velocity(&ctx, &mut rng),
                seek.desired_velocity(&ctx, &mut rng)
            );
        }
        assert_eq!(pursuit.target_velocity(), Vec2::ZERO);
    }

    #[test]
    fn tracker_samples_on_one_second_cadence() {
        let (mut store, _) = AgentStoreBuilder::new(2, 0).build();
        store.set_position(AgentId(1), Vec2::new(10.0, 0.0)).unwrap();
        let caster = ObstacleSet::new();
        let mut rng = rng();

        let mut pursuit = Pursuit::new(Some(AgentId(1)));

        // First evaluation seeds the tracker; no estimate yet.
        {
            let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 0.5, &store, &caster, &[]);
            pursuit.desired_velocity(&ctx, &mut rng);
        }
        assert_eq!(pursuit.target_velocity(), Vec2::ZERO);

        // Target moves 2 units; two half-second evaluations complete one
        // sampling interval.
        store.set_position(AgentId(1), Vec2::new(12.0, 0.0)).unwrap();
        for _ in 0..2 {
            let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 0.5, &store, &caster, &[]);
            pursuit.desired_velocity(&ctx, &mut rng);
        }
        assert_eq!(pursuit.target_velocity(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn prediction_leads_a_moving_target() {
        let (mut store, _) = AgentStoreBuilder::new(2, 0).build();
        store.set_position(AgentId(1), Vec2::new(20.0, 0.0)).unwrap();
        let caster = ObstacleSet::new();
        let mut rng = rng();

        let mut pursuit = Pursuit::new(Some(AgentId(1)));

        // Seed, then move the target +2 in y over one interval.
        {
            let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 1.0, &store, &caster, &[]);
            pursuit.desired_velocity(&ctx, &mut rng);
        }
        store.set_position(AgentId(1), Vec2::new(20.0, 2.0)).unwrap();
        let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 1.0, &store, &caster, &[]);
        let v = pursuit.desired_velocity(&ctx, &mut rng);

        // distance ≈ 20.1, max_speed 5 → steps = round(4.02) = 4, capped at 4 ≤ 5.
        // Predicted target = (20, 2) + (0, 2) × 4 = (20, 10).
        let expected = Vec2::new(20.0, 10.0).normalize() * 5.0;
        assert_vec2_eq(v, expected);
    }

    #[test]
    fn deactivation_zeroes_the_estimate_synchronously() {
        let (mut store, _) = AgentStoreBuilder::new(2, 0).build();
        store.set_position(AgentId(1), Vec2::new(10.0, 0.0)).unwrap();
        let caster = ObstacleSet::new();
        let mut rng = rng();

        let mut pursuit = Pursuit::new(Some(AgentId(1)));
        {
            let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 1.0, &store, &caster, &[]);
            pursuit.desired_velocity(&ctx, &mut rng); // seed
        }
        store.set_position(AgentId(1), Vec2::new(13.0, 0.0)).unwrap();
        {
            let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 1.0, &store, &caster, &[]);
            pursuit.desired_velocity(&ctx, &mut rng); // sample: estimate (3, 0)
        }
        assert_eq!(pursuit.target_velocity(), Vec2::new(3.0, 0.0));

        pursuit.on_active_changed(false);
        assert_eq!(pursuit.target_velocity(), Vec2::ZERO);
    }

    #[test]
    fn reactivation_reseeds_from_the_current_target_position() {
        let (mut store, _) = AgentStoreBuilder::new(2, 0).build();
        let caster = ObstacleSet::new();
        let mut rng = rng();

        let mut pursuit = Pursuit::new(Some(AgentId(1)));
        {
            let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 1.0, &store, &caster, &[]);
            pursuit.desired_velocity(&ctx, &mut rng); // seed at (0, 0)
        }

        // Deactivate; target teleports far away while the behavior is off.
        pursuit.on_active_changed(false);
        store.set_position(AgentId(1), Vec2::new(100.0, 0.0)).unwrap();
        pursuit.on_active_changed(true);

        // The first evaluation after reactivation re-seeds; a full interval
        // later the estimate covers only post-reactivation movement.
        {
            let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 1.0, &store, &caster, &[]);
            pursuit.desired_velocity(&ctx, &mut rng);
        }
        store.set_position(AgentId(1), Vec2::new(101.0, 0.0)).unwrap();
        {
            let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 1.0, &store, &caster, &[]);
            pursuit.desired_velocity(&ctx, &mut rng);
        }
        assert_eq!(pursuit.target_velocity(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn evade_is_exact_negation_of_pursuit() {
        let (mut store, _) = AgentStoreBuilder::new(2, 0).build();
        store.set_position(AgentId(1), Vec2::new(10.0, 5.0)).unwrap();
        let caster = ObstacleSet::new();
        let mut rng = rng();

        let mut pursuit = Pursuit::new(Some(AgentId(1)));
        let mut evade = Evade::new(Some(AgentId(1)));

        // Drive both through identical evaluation histories, including a
        // target move, so their trackers stay in lock-step.
        for step in 0..6 {
            if step == 3 {
                store.set_position(AgentId(1), Vec2::new(8.0, 6.0)).unwrap();
            }
            let ctx = make_ctx(Vec2::new(1.0, 1.0), Kinematics::default(), 0.5, &store, &caster, &[]);
            let p = pursuit.desired_velocity(&ctx, &mut rng);
            let e = evade.desired_velocity(&ctx, &mut rng);
            assert_eq!(e, -p);
        }
    }

    #[test]
    fn degenerate_speeds_do_not_panic() {
        let store = store_with(&[Vec2::ZERO, Vec2::new(10.0, 0.0)]);
        let caster = ObstacleSet::new();
        let mut rng = rng();

        let kin = Kinematics { max_speed: 0.0, ..Kinematics::default() };

        // distance / 0 = inf → steps saturate at the ceiling; result is zero
        // anyway because seek scales by max_speed.
        let ctx = make_ctx(Vec2::ZERO, kin, 1.0, &store, &caster, &[]);
        let mut pursuit = Pursuit::new(Some(AgentId(1)));
        assert_eq!(pursuit.desired_velocity(&ctx, &mut rng), Vec2::ZERO);

        // 0 / 0 = NaN → 0 steps.
        let ctx = make_ctx(Vec2::new(10.0, 0.0), kin, 1.0, &store, &caster, &[]);
        assert_eq!(pursuit.desired_velocity(&ctx, &mut rng), Vec2::ZERO);
    }

    #[test]
    fn max_future_steps_floor() {
        let mut pursuit = Pursuit::new(None);
        pursuit.set_max_future_steps(-3);
        assert_eq!(pursuit.max_future_steps(), 0);
        pursuit.set_max_future_steps(9);
        assert_eq!(pursuit.max_future_steps(), 9);
    }
}

// ── FieldFollow ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod field_follow {
    use super::*;
    use crate::FieldFollow;
    use steer_core::FieldId;

    #[test]
    fn follows_the_sampled_direction_at_max_speed() {
        let mut field = FlowField::new(Vec2::ZERO, Vec2::ONE, 4, 4);
        field.fill_with(Vec2::new(0.0, 2.0));
        let fields = vec![field];
        let store = store_with(&[Vec2::ZERO]);
        let caster = ObstacleSet::new();
        let ctx = make_ctx(Vec2::new(0.5, 0.5), Kinematics::default(), 0.02, &store, &caster, &fields);
        let mut rng = rng();

        let mut follow = FieldFollow::new(FieldId(0));
        assert_vec2_eq(follow.desired_velocity(&ctx, &mut rng), Vec2::new(0.0, 5.0));
    }

    #[test]
    fn outside_bounds_or_zero_cell_contributes_nothing() {
        let fields = vec![FlowField::new(Vec2::ZERO, Vec2::ONE, 2, 2)]; // all zero
        let store = store_with(&[Vec2::ZERO]);
        let caster = ObstacleSet::new();
        let mut rng = rng();

        let mut follow = FieldFollow::new(FieldId(0));
        let ctx = make_ctx(Vec2::new(0.5, 0.5), Kinematics::default(), 0.02, &store, &caster, &fields);
        assert_eq!(follow.desired_velocity(&ctx, &mut rng), Vec2::ZERO);

        let ctx = make_ctx(Vec2::new(50.0, 0.0), Kinematics::default(), 0.02, &store, &caster, &fields);
        assert_eq!(follow.desired_velocity(&ctx, &mut rng), Vec2::ZERO);
    }

    #[test]
    fn unknown_field_id_contributes_nothing() {
        let store = store_with(&[Vec2::ZERO]);
        let caster = ObstacleSet::new();
        let ctx = make_ctx(Vec2::ZERO, Kinematics::default(), 0.02, &store, &caster, &[]);
        let mut rng = rng();

        let mut follow = FieldFollow::new(FieldId(7));
        assert_eq!(follow.desired_velocity(&ctx, &mut rng), Vec2::ZERO);
    }
}
