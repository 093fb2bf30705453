/*
 * Application Module
 *
 * This module defines the main application model and logic for the boid
 * simulation viewer. It handles the initialization and update of the
 * simulation; drawing lives in the renderer module.
 *
 * The flock advances on a fixed timestep: wall-clock time accumulates and
 * whole steps are drained from it, so flock behaviour does not depend on
 * the display's frame rate. Every step is the flock's two-phase
 * decide-then-act followed by world wrapping.
 */

use std::time::{Duration, Instant};

use log::{info, warn};
use nannou::prelude::{App, Update, Vec2};
use nannou_egui::Egui;
use once_cell::sync::OnceCell;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera::Camera;
use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::input::{key_pressed, mouse_moved, mouse_pressed, mouse_released, mouse_wheel, raw_window_event};
use crate::mindset::Mindset;
use crate::params::SimulationParams;
use crate::renderer::view;
use crate::ui;

// Upper bound on catch-up steps after a stall
const MAX_STEPS_PER_FRAME: usize = 8;

const FALLBACK_WINDOW_SIZE: (u32, u32) = (1280, 800);

/// Settings handed from the command line to the viewer before it starts.
#[derive(Clone, Debug)]
pub struct LaunchOptions {
    pub num_boids: usize,
    pub seed: u64,
    pub mindset: Mindset,
    pub parallel: bool,
}

static LAUNCH_OPTIONS: OnceCell<LaunchOptions> = OnceCell::new();

/// Must be called before `nannou::app(model)` runs; later calls are ignored.
pub fn set_launch_options(options: LaunchOptions) {
    if LAUNCH_OPTIONS.set(options).is_err() {
        warn!("launch options were already set, keeping the first ones");
    }
}

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub camera: Camera,
    pub mouse_position: Vec2,
    pub rng: StdRng,
    // Fixed timestep physics variables
    pub physics_accumulator: Duration,
    pub physics_step_size: Duration,
    pub last_update_time: Instant,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // 80% of the primary monitor, if there is one
    let (window_width, window_height) = app
        .primary_monitor()
        .map(|monitor| {
            let size = monitor.size();
            ((size.width as f32 * 0.8) as u32, (size.height as f32 * 0.8) as u32)
        })
        .unwrap_or(FALLBACK_WINDOW_SIZE);

    let window_id = app
        .new_window()
        .title("Mindful Boids")
        .size(window_width, window_height)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .mouse_wheel(mouse_wheel)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build the main window");

    let window = app.window(window_id).expect("main window vanished right after creation");
    let egui = Egui::from_window(&window);

    let mut params = SimulationParams::default();
    if let Some(options) = LAUNCH_OPTIONS.get() {
        params.num_boids = options.num_boids;
        params.seed = options.seed;
        params.mindset = options.mindset;
        params.enable_parallel = options.parallel;
    }
    info!(
        "starting viewer with {} boids, seed {:#x}, {:?}",
        params.num_boids, params.seed, params.mindset
    );

    let mut rng = StdRng::seed_from_u64(params.seed);
    let flock = Flock::scattered(params.num_boids, params.world_half_extent, &mut rng);
    let camera = Camera::new(params.world_half_extent);
    let physics_step_size = step_size(params.fixed_physics_fps);

    Model {
        flock,
        params,
        egui,
        debug_info: DebugInfo::default(),
        camera,
        mouse_position: Vec2::ZERO,
        rng,
        physics_accumulator: Duration::ZERO,
        physics_step_size,
        last_update_time: Instant::now(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let response = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if response.changes.any_changed {
        model.physics_step_size = step_size(model.params.fixed_physics_fps);
    }
    if response.reset_camera {
        model.camera = Camera::new(model.params.world_half_extent);
    }
    if response.reset_requested {
        reset_flock(model);
    } else if response.changes.num_boids_changed {
        model.flock.resize(model.params.num_boids, model.params.world_half_extent, &mut model.rng);
    }

    let now = Instant::now();
    let elapsed = now.duration_since(model.last_update_time);
    model.last_update_time = now;

    if model.params.pause_simulation {
        model.physics_accumulator = Duration::ZERO;
        model.debug_info.record_steps(0, &model.flock);
        return;
    }

    model.physics_accumulator += elapsed;
    let steps = run_physics_steps(model);
    model.debug_info.record_steps(steps, &model.flock);
}

// Drain whole steps from the accumulator
fn run_physics_steps(model: &mut Model) -> usize {
    let bounds = model.params.bounds();
    let processing = model.params.processing();
    let mut steps = 0;

    while model.physics_accumulator >= model.physics_step_size {
        if steps == MAX_STEPS_PER_FRAME {
            // Too far behind; drop the backlog instead of spiralling
            model.physics_accumulator = Duration::ZERO;
            break;
        }
        model.flock.step(&model.params.mindset, processing);
        model.flock.wrap(&bounds);
        model.physics_accumulator -= model.physics_step_size;
        steps += 1;
    }

    steps
}

/// Scatters a fresh flock at rest with the current parameters.
pub fn reset_flock(model: &mut Model) {
    model.flock = Flock::scattered(model.params.num_boids, model.params.world_half_extent, &mut model.rng);
    model.physics_accumulator = Duration::ZERO;
    info!("flock reset with {} boids", model.flock.len());
}

fn step_size(fps: f32) -> Duration {
    Duration::from_secs_f32(1.0 / fps.max(1.0))
}
