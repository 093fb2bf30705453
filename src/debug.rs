/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and flock statistics to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Simulation steps run per rendered frame
 * - Mean boid speed
 */

use std::time::Duration;

use crate::flock::Flock;

#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub physics_updates_per_frame: usize,
    pub total_steps: u64,
    pub mean_speed: f32,
}

impl DebugInfo {
    // Refresh flock statistics after a batch of simulation steps
    pub fn record_steps(&mut self, steps: usize, flock: &Flock) {
        self.physics_updates_per_frame = steps;
        self.total_steps += steps as u64;
        if steps > 0 {
            self.mean_speed = flock.mean_speed();
        }
    }

    pub fn lines(&self, boid_count: usize) -> [String; 5] {
        [
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Boids: {boid_count}"),
            format!("Steps: {} ({} this frame)", self.total_steps, self.physics_updates_per_frame),
            format!("Mean speed: {:.3}", self.mean_speed),
        ]
    }
}
