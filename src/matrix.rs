/*
 * Matrix Module
 *
 * A 4x4 `f32` matrix for the row-vector convention used throughout the
 * crate: points are row vectors and are transformed as `point * matrix`, so
 * the translation of an affine matrix lives in its last row.
 *
 * Storage is row-major: `get(col, row)` addresses `elements[row * 4 + col]`.
 */

use std::ops::Mul;

use crate::vector::Vec4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    elements: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub const ZERO: Self = Self { elements: [0.0; 16] };

    /// Builds a matrix from 16 scalars listed row by row.
    pub const fn new(elements: [f32; 16]) -> Self {
        Self { elements }
    }

    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self::new([
            r0[0], r0[1], r0[2], r0[3], //
            r1[0], r1[1], r1[2], r1[3], //
            r2[0], r2[1], r2[2], r2[3], //
            r3[0], r3[1], r3[2], r3[3],
        ])
    }

    pub const fn identity() -> Self {
        Self::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Element at logical column `col` and row `row`.
    #[inline]
    pub const fn get(&self, col: usize, row: usize) -> f32 {
        self.elements[row * 4 + col]
    }

    #[inline]
    pub fn get_mut(&mut self, col: usize, row: usize) -> &mut f32 {
        debug_assert!(col < 4 && row < 4, "Mat4 index ({col}, {row}) out of range");
        &mut self.elements[row * 4 + col]
    }

    pub fn row(&self, row: usize) -> Vec4 {
        Vec4::new(
            self.get(0, row),
            self.get(1, row),
            self.get(2, row),
            self.get(3, row),
        )
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.elements
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.elements.as_ptr()
    }

    pub const fn to_array(self) -> [f32; 16] {
        self.elements
    }

    /// Returns a copy with `(dx, dy, dz)` added into the first three columns
    /// of the last row.
    pub fn translate(&self, dx: f32, dy: f32, dz: f32) -> Self {
        let mut ret = *self;
        *ret.get_mut(0, 3) += dx;
        *ret.get_mut(1, 3) += dy;
        *ret.get_mut(2, 3) += dz;
        ret
    }

    /// OpenGL-style perspective projection for row vectors.
    ///
    /// `fov` is the field of view in radians across the axis scaled by
    /// `1 / tan(fov / 2)` (x); the y axis is additionally scaled by
    /// `aspect_ratio`. Depth maps `-near..-far` onto `-1..1`.
    pub fn perspective(fov: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let xy_scale = 1.0 / (fov / 2.0).tan();
        let (n, f) = (near, far);
        Self::new([
            xy_scale, 0.0, 0.0, 0.0, //
            0.0, xy_scale * aspect_ratio, 0.0, 0.0, //
            0.0, 0.0, (n + f) / (n - f), -1.0, //
            0.0, 0.0, 2.0 * n * f / (n - f), 0.0,
        ])
    }
}

impl Mul for Mat4 {
    type Output = Self;

    // (A * B).get(x, y) = sum_i A.get(i, y) * B.get(x, i)
    fn mul(self, rhs: Self) -> Self {
        let mut ret = Self::ZERO;
        for x in 0..4 {
            for y in 0..4 {
                *ret.get_mut(x, y) = (0..4).map(|i| self.get(i, y) * rhs.get(x, i)).sum();
            }
        }
        ret
    }
}

impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: Mat4) -> Vec4 {
        let mut ret = Vec4::ZERO;
        for x in 0..4 {
            ret[x] = (0..4).map(|i| self[i] * rhs.get(x, i)).sum();
        }
        ret
    }
}
