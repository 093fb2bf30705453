/*
 * Input Module
 *
 * This module handles user input events for the boid simulation.
 * It processes mouse movements, clicks, wheel and key events for camera
 * control and simulation shortcuts.
 *
 * Features:
 * - Camera orbiting with mouse drag
 * - Camera zooming with mouse wheel
 * - Space to pause, R to reset the flock
 * - Handling UI interaction
 */

use nannou::prelude::{App, Key, MouseButton, Point2, Vec2};
use nannou::winit::event::{MouseScrollDelta, TouchPhase, WindowEvent};

use crate::app::{reset_flock, Model};

// Pixel deltas come from trackpads and are much finer than wheel lines
const PIXELS_PER_LINE: f32 = 40.0;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let new_pos = Vec2::new(pos.x, pos.y);
    if model.camera.is_dragging {
        model.camera.drag(new_pos);
    }
    model.mouse_position = new_pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    // Clicks on the control panel belong to egui
    if button == MouseButton::Left && !model.egui.ctx().is_pointer_over_area() {
        model.camera.start_drag(model.mouse_position);
    }
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.camera.end_drag();
    }
}

// Mouse wheel event handler for zooming
pub fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }
    let scroll = match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
    };
    model.camera.zoom(scroll);
}

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }
    match key {
        Key::Space => model.params.pause_simulation = !model.params.pause_simulation,
        Key::R => reset_flock(model),
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);
}
