/*
 * Boid Module
 *
 * This module defines the Boid struct and its decision kernel.
 * Each frame a boid:
 * 1. Considers every other boid, accumulating inverse-square weighted sums
 * 2. Turns those sums into a single velocity decision under a movement budget
 * 3. Acts upon the decision (moves by its old velocity, then adopts the new one)
 *
 * Three influences compete for the budget, in priority order:
 * obstacle avoiding (separation), conforming (alignment), centering (cohesion).
 */

use crate::matrix::Mat4;
use crate::mindset::Mindset;
use crate::transform::Transform;
use crate::vector::Vec3;

/// Floor on the squared distance between two boids, keeping the inverse
/// weights finite when boids coincide.
pub const EPSILON: f32 = 1.0e-5;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Boid {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Running sums a boid builds up about its neighbours during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SituationalAwareness {
    pub total_inverse_distance_sq: f32,
    pub total_scaled_directions: Vec3,
    pub total_scaled_velocities: Vec3,
}

/// The velocity a boid will adopt on its next `act_upon`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MovementDecision {
    pub decided_velocity: Vec3,
}

impl Boid {
    pub const fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    pub const fn at_rest(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO)
    }

    /// Folds `other` into `awareness`, weighted by the inverse squared
    /// distance between the two boids.
    ///
    /// `other` must be a different boid; callers iterating a flock skip their
    /// own index.
    pub fn consider(&self, awareness: &mut SituationalAwareness, other: &Boid) {
        debug_assert!(
            !std::ptr::eq(self, other),
            "a boid must not consider itself"
        );

        let diff = other.position - self.position;
        let inv_dist_sq = 1.0 / diff.magnitude_sq().max(EPSILON);

        awareness.total_inverse_distance_sq += inv_dist_sq;
        awareness.total_scaled_directions += inv_dist_sq * diff;
        awareness.total_scaled_velocities += inv_dist_sq * other.velocity;
    }

    // Explicit Euler: move by last frame's velocity, then take the new one
    pub fn act_upon(&mut self, decision: &MovementDecision) {
        self.position += self.velocity;
        self.velocity = decision.decided_velocity;
    }

    /// Builds a render transform whose rows are `right`, `up`, `forward` and
    /// the boid's position.
    ///
    /// `forward` is the normalised velocity, or `+Z` for a boid at rest.
    /// `right` is the horizontal perpendicular `(forward.z, 0, -forward.x)`;
    /// when `forward` is vertical that vector vanishes and `+X` is used
    /// instead.
    pub fn orientation_frame(&self) -> Transform {
        let forward = self.velocity.normalized_or(Vec3::Z);
        let right = Vec3::new(forward.z(), 0.0, -forward.x()).normalized_or(Vec3::X);
        let up = forward.cross(right);
        let pos = self.position;

        Transform::new(Mat4::from_rows([
            [right.x(), right.y(), right.z(), 0.0],
            [up.x(), up.y(), up.z(), 0.0],
            [forward.x(), forward.y(), forward.z(), 0.0],
            [pos.x(), pos.y(), pos.z(), 1.0],
        ]))
    }
}

impl SituationalAwareness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the steering law.
    ///
    /// The decided velocity never exceeds `mindset.maximum_movement` in
    /// magnitude. With no neighbours considered the decision is zero.
    pub fn into_decision(self, mindset: &Mindset) -> MovementDecision {
        let obstacle_avoiding = mindset.obstacle_avoiding_bias * -self.total_scaled_directions;

        // Weighted averages are undefined without neighbours
        let (conforming, centering) = if self.total_inverse_distance_sq > 0.0 {
            let total = self.total_inverse_distance_sq;
            (
                mindset.conforming_bias / total * self.total_scaled_velocities,
                mindset.centering_bias / total * self.total_scaled_directions,
            )
        } else {
            (Vec3::ZERO, Vec3::ZERO)
        };

        let mut budget = MovementBudget::new(mindset.maximum_movement);
        for influence in [obstacle_avoiding, conforming, centering] {
            if budget.is_spent() {
                break;
            }
            budget.spend(influence);
        }

        MovementDecision {
            decided_velocity: budget.decided,
        }
    }
}

// Cascading movement budget: earlier influences get first claim on the
// squared magnitude allowance.
struct MovementBudget {
    remaining_sq: f32,
    decided: Vec3,
}

impl MovementBudget {
    fn new(maximum_movement: f32) -> Self {
        Self {
            remaining_sq: maximum_movement * maximum_movement,
            decided: Vec3::ZERO,
        }
    }

    fn is_spent(&self) -> bool {
        self.remaining_sq == 0.0
    }

    fn spend(&mut self, movement: Vec3) {
        let msq = movement.magnitude_sq();
        if msq < self.remaining_sq {
            self.decided += movement;
            self.remaining_sq -= msq;
        } else {
            // msq >= remaining_sq > 0 here, so the ratio is finite
            let scale = (self.remaining_sq / msq).sqrt();
            self.decided += scale * movement;
            self.remaining_sq = 0.0;
        }
    }
}
