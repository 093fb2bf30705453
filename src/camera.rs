/*
 * Camera Module
 *
 * This module defines an orbiting Camera that looks at the centre of the
 * world cube. It builds its view and projection with the crate's own
 * Transform builder and projects world points into nannou's window space
 * (origin at the window centre, y up).
 */

use nannou::prelude::Vec2;

use crate::transform::Transform;
use crate::vector::{Vec3, Vec4};

const PITCH_LIMIT: f32 = 1.5;

pub struct Camera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub drag_start: Option<Vec2>,
    pub is_dragging: bool,
    pub last_cursor_pos: Vec2,
}

impl Camera {
    pub fn new(world_half_extent: f32) -> Self {
        Self {
            yaw: 0.6,
            pitch: 0.35,
            distance: world_half_extent * 3.0,
            fov: 70f32.to_radians(),
            near: 0.5,
            far: world_half_extent * 20.0,
            min_distance: world_half_extent * 0.25,
            max_distance: world_half_extent * 10.0,
            drag_start: None,
            is_dragging: false,
            last_cursor_pos: Vec2::ZERO,
        }
    }

    // World to camera space: orbit around the origin, then back off
    pub fn view(&self) -> Transform {
        Transform::identity()
            .rotate_y(self.yaw)
            .rotate_x(self.pitch)
            .translate(0.0, 0.0, -self.distance)
    }

    /// Horizontal field of view; `aspect_ratio` is width over height.
    pub fn projection(&self, aspect_ratio: f32) -> Transform {
        Transform::perspective(self.fov, aspect_ratio, self.near, self.far)
    }

    pub fn view_projection(&self, aspect_ratio: f32) -> Transform {
        self.view() * self.projection(aspect_ratio)
    }

    /// Projects a world point to window coordinates, or `None` when it lies
    /// behind the near plane.
    pub fn world_to_screen(&self, point: Vec3, view_projection: &Transform, window: Vec2) -> Option<Vec2> {
        clip_to_screen(view_projection.apply(Vec4::point(point)), window, self.near)
    }

    // Handle mouse wheel events for zooming
    pub fn zoom(&mut self, scroll: f32) {
        let zoom_factor = 1.0 - scroll * 0.1;
        self.distance = (self.distance * zoom_factor).clamp(self.min_distance, self.max_distance);
    }

    // Start dragging the camera
    pub fn start_drag(&mut self, position: Vec2) {
        self.drag_start = Some(position);
        self.last_cursor_pos = position;
        self.is_dragging = true;
    }

    // Orbit while dragging, using the delta from the last cursor position
    pub fn drag(&mut self, position: Vec2) {
        if self.is_dragging {
            let delta = position - self.last_cursor_pos;
            if delta.length_squared() > 0.0 {
                self.yaw += delta.x * 0.01;
                self.pitch = (self.pitch - delta.y * 0.01).clamp(-PITCH_LIMIT, PITCH_LIMIT);
                self.last_cursor_pos = position;
            }
        }
    }

    // End dragging
    pub fn end_drag(&mut self) {
        self.drag_start = None;
        self.is_dragging = false;
    }
}

/// Perspective divide and viewport mapping for an already transformed point.
pub fn clip_to_screen(clip: Vec4, window: Vec2, near: f32) -> Option<Vec2> {
    // w is the distance in front of the camera
    if clip.w() < near {
        return None;
    }
    let ndc = clip.xyz() * (1.0 / clip.w());
    Some(Vec2::new(ndc.x() * window.x / 2.0, ndc.y() * window.y / 2.0))
}
