/*
 * Bounds Module
 *
 * World wrapping for the embedding loop. The kernel never calls this: it is
 * applied to the flock after each step, so a boid leaving one face of the
 * world cube re-enters through the opposite face.
 */

use crate::boid::Boid;
use crate::vector::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    pub half_extent: f32,
}

impl WorldBounds {
    pub const fn new(half_extent: f32) -> Self {
        Self { half_extent }
    }

    pub fn size(&self) -> f32 {
        self.half_extent * 2.0
    }

    // Velocity is left untouched
    pub fn wrap(&self, boid: &mut Boid) {
        boid.position = self.wrap_point(boid.position);
    }

    /// Maps every coordinate into `[-half_extent, half_extent)`.
    pub fn wrap_point(&self, p: Vec3) -> Vec3 {
        if self.half_extent <= 0.0 {
            return p;
        }
        let size = self.size();
        let wrap = |c: f32| {
            let wrapped = (c + self.half_extent).rem_euclid(size) - self.half_extent;
            // rem_euclid can round up to `size` for tiny negative inputs
            if wrapped >= self.half_extent {
                -self.half_extent
            } else {
                wrapped
            }
        };
        Vec3::new(wrap(p.x()), wrap(p.y()), wrap(p.z()))
    }

    pub fn contains(&self, p: Vec3) -> bool {
        (0..3).all(|axis| (-self.half_extent..self.half_extent).contains(&p[axis]))
    }
}
