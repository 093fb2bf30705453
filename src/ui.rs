/*
 * UI Module
 *
 * This module contains the egui control panel. It edits SimulationParams in
 * place (including the shared Mindset) and reports what changed so the app
 * can rebuild the flock or re-time the physics loop.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::mindset::Mindset;
use crate::params::{ParamChanges, SimulationParams};

/// Result of one UI pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiResponse {
    pub reset_requested: bool,
    pub reset_camera: bool,
    pub changes: ParamChanges,
}

pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> UiResponse {
    let mut reset_requested = false;
    let mut reset_camera = false;

    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range())
                        .text("Number of Boids"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.world_half_extent,
                        SimulationParams::get_world_half_extent_range(),
                    )
                    .text("World Half Extent"),
                );
                if ui.button("Reset Boids").clicked() {
                    reset_requested = true;
                }
            });

            ui.collapsing("Mindset", |ui| {
                let mindset = &mut params.mindset;
                ui.add(
                    egui::Slider::new(&mut mindset.obstacle_avoiding_bias, Mindset::bias_range())
                        .text("Obstacle Avoiding"),
                );
                ui.add(
                    egui::Slider::new(&mut mindset.conforming_bias, Mindset::bias_range())
                        .text("Conforming"),
                );
                ui.add(
                    egui::Slider::new(&mut mindset.centering_bias, Mindset::bias_range())
                        .text("Centering"),
                );
                ui.add(
                    egui::Slider::new(&mut mindset.maximum_movement, Mindset::maximum_movement_range())
                        .text("Maximum Movement"),
                );
                if ui.button("Default Mindset").clicked() {
                    *mindset = Mindset::default();
                }
            });

            ui.collapsing("Camera Controls", |ui| {
                ui.label("Orbit: click and drag");
                ui.label("Zoom: mouse wheel");
                if ui.button("Reset Camera").clicked() {
                    reset_camera = true;
                }
            });

            ui.collapsing("Performance", |ui| {
                ui.checkbox(&mut params.enable_parallel, "Parallel Decisions");
                ui.add(
                    egui::Slider::new(&mut params.fixed_physics_fps, SimulationParams::get_physics_fps_range())
                        .text("Physics FPS"),
                );
                ui.separator();
                for line in debug_info.lines(params.num_boids) {
                    ui.label(line);
                }
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    UiResponse {
        reset_requested,
        reset_camera,
        changes: params.detect_changes(),
    }
}
