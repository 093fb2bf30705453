//! Behavioural tests for the flocking kernel and its algebra.

use approx::assert_relative_eq;
use mindful_boids::{
    Boid, Error, Flock, Mat4, Mindset, MovementDecision, Processing, SituationalAwareness, Transform, Vec3,
    WorldBounds,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::{fixture, rstest};

fn assert_vec_eq(actual: Vec3, expected: Vec3) {
    for axis in 0..3 {
        assert_relative_eq!(actual[axis], expected[axis], epsilon = 1e-5);
    }
}

fn awareness(total: f32, directions: Vec3, velocities: Vec3) -> SituationalAwareness {
    SituationalAwareness {
        total_inverse_distance_sq: total,
        total_scaled_directions: directions,
        total_scaled_velocities: velocities,
    }
}

#[fixture]
fn moving_flock() -> Flock {
    let mut rng = StdRng::seed_from_u64(42);
    let boids = (0..64)
        .map(|_| {
            let position = Vec3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            let velocity = Vec3::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
            Boid::new(position, velocity)
        })
        .collect();
    Flock::new(boids)
}

#[test]
fn accumulation_is_antisymmetric_in_direction() {
    let a = Boid::new(Vec3::new(1.0, 2.0, 3.0), Vec3::X);
    let b = Boid::new(Vec3::new(4.0, -1.0, 0.5), Vec3::Y);

    let mut seen_by_a = SituationalAwareness::new();
    let mut seen_by_b = SituationalAwareness::new();
    a.consider(&mut seen_by_a, &b);
    b.consider(&mut seen_by_b, &a);

    assert_eq!(seen_by_a.total_scaled_directions, -seen_by_b.total_scaled_directions);
    assert_eq!(seen_by_a.total_inverse_distance_sq, seen_by_b.total_inverse_distance_sq);
}

#[rstest]
#[case(awareness(1.0, Vec3::new(100.0, 0.0, 0.0), Vec3::new(0.0, 50.0, 0.0)), 0.5)]
#[case(awareness(0.01, Vec3::new(3.0, -4.0, 12.0), Vec3::new(-7.0, 1.0, 2.0)), 1.0)]
#[case(awareness(1.0e5, Vec3::new(1.0e5, 1.0e5, 1.0e5), Vec3::new(1.0e5, 0.0, 0.0)), 2.5)]
#[case(awareness(0.0, Vec3::ZERO, Vec3::ZERO), 0.75)]
#[case(awareness(3.0, Vec3::new(0.5, 0.5, 0.5), Vec3::new(9.0, 9.0, 9.0)), 0.0)]
fn decision_never_exceeds_the_movement_budget(#[case] awareness: SituationalAwareness, #[case] budget: f32) {
    let mindset = Mindset::new(1.5, 2.0, 2.0, budget).unwrap();
    let decision = awareness.into_decision(&mindset);
    assert!(decision.decided_velocity.magnitude() <= budget + 1e-4);
}

#[rstest]
fn flock_decisions_respect_the_budget(moving_flock: Flock) {
    let mindset = Mindset::new(2.0, 2.0, 2.0, 0.3).unwrap();
    for decision in moving_flock.decide(&mindset, Processing::Sequential) {
        assert!(decision.decided_velocity.magnitude() <= 0.3 + 1e-5);
    }
}

#[test]
fn obstacle_avoiding_has_first_claim_on_the_budget() {
    let mindset = Mindset::new(1.0, 0.5, 1.0, 2.0).unwrap();
    let decision = awareness(1.0, Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)).into_decision(&mindset);

    // obstacle_avoiding = (-10, 0, 0) alone exceeds M = 2
    assert_vec_eq(decision.decided_velocity, Vec3::new(-2.0, 0.0, 0.0));
    assert_relative_eq!(decision.decided_velocity.magnitude(), 2.0, epsilon = 1e-6);
}

#[test]
fn conforming_is_clipped_before_centering_is_considered() {
    // obstacle_avoiding = (0, 0, -0.6), conforming = (0, 1, 0), centering = (0, 0, 0.6)
    let mindset = Mindset::new(1.0, 1.0, 1.0, 1.0).unwrap();
    let decision = awareness(1.0, Vec3::new(0.0, 0.0, 0.6), Vec3::new(0.0, 1.0, 0.0)).into_decision(&mindset);

    // 0.36 of the 1.0 budget goes to avoidance; conforming takes the remaining 0.64
    assert_vec_eq(decision.decided_velocity, Vec3::new(0.0, 0.8, -0.6));
}

#[test]
fn influences_under_budget_add_up_exactly() {
    let mindset = Mindset::new(1.0, 1.0, 1.0, 10.0).unwrap();
    let decision = awareness(2.0, Vec3::new(0.2, 0.0, 0.0), Vec3::new(0.0, 0.4, 0.0)).into_decision(&mindset);

    let obstacle_avoiding = Vec3::new(-0.2, 0.0, 0.0);
    let conforming = Vec3::new(0.0, 0.2, 0.0);
    let centering = Vec3::new(0.1, 0.0, 0.0);
    assert_vec_eq(decision.decided_velocity, obstacle_avoiding + conforming + centering);
}

#[test]
fn integration_moves_by_the_old_velocity() {
    let mut boid = Boid::new(Vec3::ZERO, Vec3::X);
    boid.act_upon(&MovementDecision {
        decided_velocity: Vec3::Y,
    });
    assert_eq!(boid.position, Vec3::X);
    assert_eq!(boid.velocity, Vec3::Y);
}

#[test]
fn boid_at_rest_faces_positive_z() {
    let frame = Boid::at_rest(Vec3::new(3.0, 2.0, 1.0)).orientation_frame();
    assert_eq!(frame.matrix.row(2).to_array(), [0.0, 0.0, 1.0, 0.0]);
    assert_eq!(frame.matrix.row(0).to_array(), [1.0, 0.0, 0.0, 0.0]);
    assert_eq!(frame.matrix.row(3).to_array(), [3.0, 2.0, 1.0, 1.0]);
}

#[rstest]
#[case(Vec3::new(0.0, 5.0, 0.0))]
#[case(Vec3::new(0.0, -0.1, 0.0))]
fn vertical_flight_has_a_finite_frame(#[case] velocity: Vec3) {
    let frame = Boid::new(Vec3::ZERO, velocity).orientation_frame();
    assert!(frame.matrix.as_slice().iter().all(|c| c.is_finite()));
    assert_eq!(frame.matrix.row(0).to_array(), [1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn perspective_matches_closed_form() {
    let projection = Transform::perspective(90f32.to_radians(), 1.0, 1.0, 2.0).matrix;

    assert_relative_eq!(projection.get(0, 0), 1.0, epsilon = 1e-6);
    assert_relative_eq!(projection.get(1, 1), 1.0, epsilon = 1e-6);
    assert_relative_eq!(projection.get(2, 2), -3.0, epsilon = 1e-6);
    assert_relative_eq!(projection.get(3, 2), -1.0);
    assert_relative_eq!(projection.get(2, 3), -4.0, epsilon = 1e-6);
    assert_eq!(projection.get(3, 3), 0.0);
    assert_eq!(projection, Mat4::perspective(90f32.to_radians(), 1.0, 1.0, 2.0));
}

#[rstest]
fn sequential_and_parallel_decisions_are_identical(moving_flock: Flock) {
    let mindset = Mindset::default();
    assert_eq!(
        moving_flock.decide(&mindset, Processing::Sequential),
        moving_flock.decide(&mindset, Processing::Parallel)
    );
}

#[rstest]
fn step_outcome_does_not_depend_on_boid_order(moving_flock: Flock) {
    let mindset = Mindset::default();
    let mut reversed = Flock::new(moving_flock.boids().iter().rev().copied().collect());
    let mut forward = moving_flock;

    forward.step(&mindset, Processing::Sequential);
    reversed.step(&mindset, Processing::Sequential);

    for (a, b) in forward.boids().iter().zip(reversed.boids().iter().rev()) {
        assert_vec_eq(a.position, b.position);
        assert_vec_eq(a.velocity, b.velocity);
    }
}

#[rstest]
fn step_applies_decisions_from_the_snapshot(moving_flock: Flock) {
    let mindset = Mindset::default();
    let snapshot = moving_flock.clone();
    let decisions = snapshot.decide(&mindset, Processing::Sequential);

    let mut stepped = moving_flock;
    stepped.step(&mindset, Processing::Parallel);

    for ((before, after), decision) in snapshot.boids().iter().zip(stepped.boids()).zip(&decisions) {
        assert_eq!(after.position, before.position + before.velocity);
        assert_eq!(after.velocity, decision.decided_velocity);
    }
}

#[test]
#[should_panic(expected = "one decision per boid")]
fn acting_on_too_few_decisions_panics() {
    let mut flock = Flock::new(vec![Boid::default(), Boid::default()]);
    flock.act_upon(&[MovementDecision::default()]);
}

#[rstest]
fn wrapped_flock_stays_in_the_world(moving_flock: Flock) {
    let bounds = WorldBounds::new(5.0);
    let mut flock = moving_flock;
    for _ in 0..20 {
        flock.step(&Mindset::default(), Processing::Parallel);
        flock.wrap(&bounds);
    }
    assert!(flock.boids().iter().all(|b| bounds.contains(b.position)));
}

#[test]
fn mindset_loads_from_json() {
    let mindset = Mindset::from_json_str(
        r#"{"obstacle_avoiding_bias": 0.5, "centering_bias": 0.1, "conforming_bias": 1.0, "maximum_movement": 0.25}"#,
    )
    .unwrap();
    assert_eq!(mindset, Mindset::new(0.5, 0.1, 1.0, 0.25).unwrap());
}

#[rstest]
#[case(r#"{"obstacle_avoiding_bias": 0.5, "centering_bias": 0.1, "conforming_bias": 1.0, "maximum_movement": -1.0}"#)]
#[case(r#"{"obstacle_avoiding_bias": 0.5}"#)]
#[case("not json")]
fn invalid_mindset_json_is_rejected(#[case] json: &str) {
    let err = Mindset::from_json_str(json).unwrap_err();
    assert!(matches!(err, Error::NegativeMovement(_) | Error::Parse(_)), "{err}");
}
