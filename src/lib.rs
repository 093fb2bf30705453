/*
 * Mindful Boids - Module Definitions
 *
 * This file defines the module structure of the crate.
 * The algebra (vector, matrix, transform) and the flocking kernel (mindset,
 * boid, flock, bounds) have no windowing dependencies; the remaining modules
 * make up the nannou viewer and the command line.
 */

// Re-export key components for easier access
pub use boid::{Boid, MovementDecision, SituationalAwareness};
pub use bounds::WorldBounds;
pub use error::{Error, Result};
pub use flock::{Flock, Processing};
pub use matrix::Mat4;
pub use mindset::Mindset;
pub use transform::Transform;
pub use vector::{Vec3, Vec4};

// Algebra
pub mod matrix;
pub mod transform;
pub mod vector;

// Flocking kernel
pub mod boid;
pub mod bounds;
pub mod error;
pub mod flock;
pub mod mindset;

// Viewer and binary support
pub mod app;
pub mod camera;
pub mod cli;
pub mod debug;
pub mod input;
pub mod logging;
pub mod params;
pub mod renderer;
pub mod ui;

// Constants
/// Length of a rendered boid in world units.
pub const BOID_SIZE: f32 = 1.2;
