/*
 * Renderer Module
 *
 * This module handles the rendering of the boid simulation.
 * Every frame each boid's orientation frame is composed with the camera's
 * view-projection, a small dart mesh is pushed through the result and the
 * projected triangles are drawn back to front. The world cube is drawn as a
 * wireframe so the wrapping bounds stay visible.
 */

use log::warn;
use nannou::prelude::{rgba, App, Draw, Frame, Vec2, BLACK, WHITE};

use crate::app::Model;
use crate::camera::{clip_to_screen, Camera};
use crate::flock::Flock;
use crate::transform::Transform;
use crate::vector::{Vec3, Vec4};
use crate::BOID_SIZE;

// Dart pointing along +Z (forward), wings along X (right), fin along Y (up)
const DART_VERTICES: [Vec3; 5] = [
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(-0.6, 0.0, -0.6),
    Vec3::new(0.6, 0.0, -0.6),
    Vec3::new(0.0, 0.0, -0.35),
    Vec3::new(0.0, 0.4, -0.5),
];

const DART_TRIANGLES: [([usize; 3], f32); 3] = [
    ([0, 1, 3], 0.85),
    ([0, 3, 2], 0.7),
    ([0, 4, 3], 1.0),
];

// Projected triangles of one boid, plus its depth for sorting
struct ProjectedBoid {
    depth: f32,
    triangles: Vec<[Vec2; 3]>,
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    let window = Vec2::new(window_rect.w(), window_rect.h());
    let aspect_ratio = window.x / window.y.max(1.0);
    let view_projection = model.camera.view_projection(aspect_ratio);

    draw_world_bounds(&draw, &model.camera, &view_projection, window, model.params.world_half_extent);
    draw_flock(&draw, &model.flock, &model.camera, &view_projection, window);

    if model.params.show_debug {
        draw_debug_info(&draw, &model.debug_info.lines(model.flock.len()), window_rect);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        warn!("failed to draw frame: {err:?}");
    }

    // Draw the egui UI on top
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        warn!("failed to draw ui: {err:?}");
    }
}

fn draw_flock(draw: &Draw, flock: &Flock, camera: &Camera, view_projection: &Transform, window: Vec2) {
    let model_scale = Transform::identity().scale_uniform(BOID_SIZE);

    let mut projected: Vec<ProjectedBoid> = flock
        .orientation_frames()
        .filter_map(|frame| project_boid(model_scale * frame * *view_projection, camera.near, window))
        .collect();

    // Painter's algorithm: farthest first
    projected.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    for boid in &projected {
        let shade = (1.0 - boid.depth / camera.far).clamp(0.25, 1.0);
        for (triangle, (_, brightness)) in boid.triangles.iter().zip(DART_TRIANGLES) {
            let level = shade * brightness;
            draw.polygon()
                .color(rgba(0.55 * level, 0.8 * level, level, 1.0))
                .points(triangle.iter().copied());
        }
    }
}

fn project_boid(mvp: Transform, near: f32, window: Vec2) -> Option<ProjectedBoid> {
    let clip: Vec<Vec4> = DART_VERTICES.iter().map(|&v| mvp.apply(Vec4::point(v))).collect();
    let depth = clip.iter().map(|c| c.w()).fold(f32::MIN, f32::max);

    let screen: Option<Vec<Vec2>> = clip.iter().map(|&c| clip_to_screen(c, window, near)).collect();
    let screen = screen?;

    let triangles = DART_TRIANGLES
        .iter()
        .map(|([a, b, c], _)| [screen[*a], screen[*b], screen[*c]])
        .collect();
    Some(ProjectedBoid { depth, triangles })
}

fn draw_world_bounds(draw: &Draw, camera: &Camera, view_projection: &Transform, window: Vec2, half_extent: f32) {
    let h = half_extent;
    let corner = |i: usize| {
        Vec3::new(
            if i & 1 == 0 { -h } else { h },
            if i & 2 == 0 { -h } else { h },
            if i & 4 == 0 { -h } else { h },
        )
    };

    // Edges join corners that differ in exactly one bit
    for a in 0..8usize {
        for bit in [1, 2, 4] {
            let b = a | bit;
            if b == a {
                continue;
            }
            let start = camera.world_to_screen(corner(a), view_projection, window);
            let end = camera.world_to_screen(corner(b), view_projection, window);
            if let (Some(start), Some(end)) = (start, end) {
                draw.line()
                    .start(start)
                    .end(end)
                    .weight(1.0)
                    .color(rgba(0.3, 0.3, 0.3, 1.0));
            }
        }
    }
}

// Draw debug information in the top-left corner
fn draw_debug_info(draw: &Draw, lines: &[String], window_rect: nannou::geom::Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * lines.len() as f32 + margin;

    draw.rect()
        .x_y(window_rect.left() + panel_width / 2.0, window_rect.top() - panel_height / 2.0)
        .w_h(panel_width, panel_height)
        .color(rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;
    for (i, text) in lines.iter().enumerate() {
        draw.text(text)
            .x_y(text_x + 80.0, text_y - i as f32 * line_height)
            .color(WHITE)
            .font_size(14);
    }
}
