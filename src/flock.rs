/*
 * Flock Module
 *
 * Owns every boid in a run and drives the per-frame two-phase step:
 * 1. Decide: each boid considers every other boid of the pre-frame snapshot
 *    (exact all-pairs) and produces a movement decision
 * 2. Act: every boid applies its own decision
 *
 * No boid moves until every decision for the frame exists, so the outcome
 * does not depend on iteration order. The decide phase only borrows the
 * flock immutably and can run on the rayon thread pool.
 */

use log::debug;
use rand::Rng;
use rayon::prelude::*;

use crate::boid::{Boid, MovementDecision, SituationalAwareness};
use crate::bounds::WorldBounds;
use crate::mindset::Mindset;
use crate::transform::Transform;
use crate::vector::Vec3;

/// How the decide phase is scheduled. Both modes produce identical results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Processing {
    Sequential,
    #[default]
    Parallel,
}

impl Processing {
    pub fn from_parallel(enabled: bool) -> Self {
        if enabled {
            Self::Parallel
        } else {
            Self::Sequential
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flock {
    boids: Vec<Boid>,
}

impl Flock {
    pub fn new(boids: Vec<Boid>) -> Self {
        Self { boids }
    }

    /// `count` boids at rest, uniformly placed in the cube
    /// `[-half_extent, half_extent)` on every axis.
    pub fn scattered<R: Rng + ?Sized>(count: usize, half_extent: f32, rng: &mut R) -> Self {
        let boids = (0..count).map(|_| random_boid(half_extent, &mut *rng)).collect();
        Self { boids }
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn boid(&self, index: usize) -> Option<&Boid> {
        self.boids.get(index)
    }

    // Grow with fresh boids at rest or truncate. Only between frames.
    pub fn resize<R: Rng + ?Sized>(&mut self, count: usize, half_extent: f32, rng: &mut R) {
        let previous = self.boids.len();
        self.boids.resize_with(count, || random_boid(half_extent, &mut *rng));
        debug!("flock resized from {previous} to {count} boids");
    }

    /// Read phase: one decision per boid, in flock order, computed from the
    /// current (pre-frame) state only.
    pub fn decide(&self, mindset: &Mindset, processing: Processing) -> Vec<MovementDecision> {
        match processing {
            Processing::Sequential => (0..self.boids.len())
                .map(|i| self.decide_for(i, mindset))
                .collect(),
            Processing::Parallel => (0..self.boids.len())
                .into_par_iter()
                .map(|i| self.decide_for(i, mindset))
                .collect(),
        }
    }

    fn decide_for(&self, index: usize, mindset: &Mindset) -> MovementDecision {
        let me = &self.boids[index];
        let mut awareness = SituationalAwareness::new();
        for (j, other) in self.boids.iter().enumerate() {
            if j != index {
                me.consider(&mut awareness, other);
            }
        }
        awareness.into_decision(mindset)
    }

    /// Write phase.
    ///
    /// # Panics
    ///
    /// If `decisions` does not hold exactly one decision per boid.
    pub fn act_upon(&mut self, decisions: &[MovementDecision]) {
        assert_eq!(
            decisions.len(),
            self.boids.len(),
            "one decision per boid is required"
        );
        for (boid, decision) in self.boids.iter_mut().zip(decisions) {
            boid.act_upon(decision);
        }
    }

    /// Advances the flock one frame.
    pub fn step(&mut self, mindset: &Mindset, processing: Processing) {
        let decisions = self.decide(mindset, processing);
        self.act_upon(&decisions);
    }

    /// Applies an external boundary policy to every boid. Call after `step`.
    pub fn wrap(&mut self, bounds: &WorldBounds) {
        for boid in &mut self.boids {
            bounds.wrap(boid);
        }
    }

    pub fn orientation_frames(&self) -> impl Iterator<Item = Transform> + '_ {
        self.boids.iter().map(Boid::orientation_frame)
    }

    pub fn mean_speed(&self) -> f32 {
        if self.boids.is_empty() {
            return 0.0;
        }
        let total: f32 = self.boids.iter().map(|b| b.velocity.magnitude()).sum();
        total / self.boids.len() as f32
    }
}

fn random_boid<R: Rng + ?Sized>(half_extent: f32, rng: &mut R) -> Boid {
    let mut coord = || {
        if half_extent > 0.0 {
            rng.gen_range(-half_extent..half_extent)
        } else {
            0.0
        }
    };
    let position = Vec3::new(coord(), coord(), coord());
    Boid::at_rest(position)
}
