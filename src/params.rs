/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains the
 * adjustable parameters of the viewer: the flock size, the world cube, the
 * shared mindset and the scheduling switches. The UI edits these values;
 * snapshot-based change detection tells the app when to rebuild the flock.
 */

use std::ops::RangeInclusive;

use crate::bounds::WorldBounds;
use crate::flock::Processing;
use crate::mindset::Mindset;

#[derive(Clone, Debug)]
pub struct SimulationParams {
    pub num_boids: usize,
    pub world_half_extent: f32,
    pub seed: u64,
    pub mindset: Mindset,
    pub show_debug: bool,
    pub pause_simulation: bool,
    pub enable_parallel: bool,
    pub fixed_physics_fps: f32,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Clone, Debug, PartialEq)]
struct ParamSnapshot {
    num_boids: usize,
    world_half_extent: f32,
    mindset: Mindset,
    show_debug: bool,
    pause_simulation: bool,
    enable_parallel: bool,
    fixed_physics_fps: f32,
}

/// What the latest UI pass changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParamChanges {
    pub num_boids_changed: bool,
    pub any_changed: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: 300,
            world_half_extent: 40.0,
            seed: 0x5eed,
            mindset: Mindset::default(),
            show_debug: false,
            pause_simulation: false,
            enable_parallel: true,
            fixed_physics_fps: 60.0,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    pub fn bounds(&self) -> WorldBounds {
        WorldBounds::new(self.world_half_extent)
    }

    pub fn processing(&self) -> Processing {
        Processing::from_parallel(self.enable_parallel)
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    // Compare against the last snapshot; nothing has changed without one
    pub fn detect_changes(&self) -> ParamChanges {
        let Some(prev) = &self.previous_values else {
            return ParamChanges::default();
        };
        let current = self.snapshot();
        ParamChanges {
            num_boids_changed: current.num_boids != prev.num_boids,
            any_changed: current != *prev,
        }
    }

    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            num_boids: self.num_boids,
            world_half_extent: self.world_half_extent,
            mindset: self.mindset,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
            enable_parallel: self.enable_parallel,
            fixed_physics_fps: self.fixed_physics_fps,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> RangeInclusive<usize> {
        1..=3000
    }

    pub fn get_world_half_extent_range() -> RangeInclusive<f32> {
        5.0..=200.0
    }

    pub fn get_physics_fps_range() -> RangeInclusive<f32> {
        10.0..=240.0
    }
}
