/*
 * Transform Module
 *
 * A composable builder over `Mat4`. Every builder call returns a new
 * transform equal to `self.matrix * step`, so with row vectors the steps
 * apply to a point in the order they were chained.
 */

use std::ops::Mul;

use crate::matrix::Mat4;
use crate::vector::{Vec3, Vec4};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub matrix: Mat4,
}

impl From<Mat4> for Transform {
    fn from(matrix: Mat4) -> Self {
        Self { matrix }
    }
}

impl Transform {
    pub const fn new(matrix: Mat4) -> Self {
        Self { matrix }
    }

    pub const fn identity() -> Self {
        Self::new(Mat4::identity())
    }

    /// See [`Mat4::perspective`].
    pub fn perspective(fov: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self::new(Mat4::perspective(fov, aspect_ratio, near, far))
    }

    /// Adds the offsets straight into the translation row rather than
    /// composing a translation matrix.
    pub fn translate(&self, dx: f32, dy: f32, dz: f32) -> Self {
        Self::new(self.matrix.translate(dx, dy, dz))
    }

    pub fn rotate_x(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        self.then(Mat4::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, cos, sin, 0.0, //
            0.0, -sin, cos, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]))
    }

    pub fn rotate_y(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        self.then(Mat4::new([
            cos, 0.0, sin, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -sin, 0.0, cos, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]))
    }

    pub fn rotate_z(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        self.then(Mat4::new([
            cos, sin, 0.0, 0.0, //
            -sin, cos, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]))
    }

    pub fn scale(&self, sx: f32, sy: f32, sz: f32) -> Self {
        self.then(Mat4::new([
            sx, 0.0, 0.0, 0.0, //
            0.0, sy, 0.0, 0.0, //
            0.0, 0.0, sz, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]))
    }

    pub fn scale_uniform(&self, s: f32) -> Self {
        self.scale(s, s, s)
    }

    /// Transforms a homogeneous row vector.
    pub fn apply(&self, v: Vec4) -> Vec4 {
        v * self.matrix
    }

    /// Transforms a point (`w = 1`) and drops the homogeneous coordinate
    /// without dividing. Only meaningful for affine transforms.
    pub fn apply_point(&self, p: Vec3) -> Vec3 {
        self.apply(Vec4::point(p)).xyz()
    }

    fn then(&self, step: Mat4) -> Self {
        Self::new(self.matrix * step)
    }
}

impl Mul for Transform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.matrix * rhs.matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).magnitude() < 1e-5
    }

    #[test]
    fn rotations_turn_axes_by_quarter_turns() {
        let rx = Transform::identity().rotate_x(FRAC_PI_2);
        assert!(close(rx.apply_point(Vec3::Y), Vec3::Z));

        let ry = Transform::identity().rotate_y(FRAC_PI_2);
        assert!(close(ry.apply_point(Vec3::X), Vec3::Z));

        let rz = Transform::identity().rotate_z(FRAC_PI_2);
        assert!(close(rz.apply_point(Vec3::X), Vec3::Y));
    }

    #[test]
    fn builder_steps_apply_in_chain_order() {
        // Scale first, then translate.
        let t = Transform::identity().scale_uniform(2.0).translate(1.0, 0.0, 0.0);
        assert!(close(t.apply_point(Vec3::new(1.0, 1.0, 1.0)), Vec3::new(3.0, 2.0, 2.0)));
    }

    #[test]
    fn scale_after_translate_scales_the_offset() {
        let t = Transform::identity().translate(1.0, 0.0, 0.0).scale(3.0, 1.0, 1.0);
        assert!(close(t.apply_point(Vec3::ZERO), Vec3::new(3.0, 0.0, 0.0)));
    }

    #[test]
    fn composition_matches_sequential_application() {
        let a = Transform::identity().rotate_z(0.3).translate(0.5, 1.0, -2.0);
        let b = Transform::identity().rotate_x(-1.1).scale(1.0, 2.0, 0.5);
        let p = Vec3::new(0.2, -0.7, 1.3);
        assert!(close((a * b).apply_point(p), b.apply_point(a.apply_point(p))));
    }
}
