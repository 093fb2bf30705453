/*
 * Vector Module
 *
 * Fixed-size 3- and 4-component vectors used by the flocking kernel and the
 * renderer. Components live in a plain array so the storage can be handed
 * straight to a graphics backend.
 */

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3-component `f32` vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    arr: [f32; 3],
}

/// A 4-component `f32` vector, treated as a row vector when multiplied with a
/// [`Mat4`](crate::matrix::Mat4).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec4 {
    arr: [f32; 4],
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { arr: [x, y, z] }
    }

    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self { arr }
    }

    #[inline]
    pub const fn x(self) -> f32 {
        self.arr[0]
    }

    #[inline]
    pub const fn y(self) -> f32 {
        self.arr[1]
    }

    #[inline]
    pub const fn z(self) -> f32 {
        self.arr[2]
    }

    pub const fn to_array(self) -> [f32; 3] {
        self.arr
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.arr
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.arr.as_ptr()
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    #[inline]
    pub fn magnitude_sq(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        self.magnitude_sq().sqrt()
    }

    /// Returns the unit vector in this direction, or `fallback` when the
    /// squared magnitude is zero (including underflow to zero).
    pub fn normalized_or(self, fallback: Self) -> Self {
        let mag_sq = self.magnitude_sq();
        if mag_sq == 0.0 {
            return fallback;
        }
        (1.0 / mag_sq.sqrt()) * self
    }
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { arr: [x, y, z, w] }
    }

    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self { arr }
    }

    /// A position in homogeneous coordinates (`w = 1`).
    pub const fn point(v: Vec3) -> Self {
        Self::new(v.x(), v.y(), v.z(), 1.0)
    }

    /// A direction in homogeneous coordinates (`w = 0`), unaffected by
    /// translation.
    pub const fn direction(v: Vec3) -> Self {
        Self::new(v.x(), v.y(), v.z(), 0.0)
    }

    #[inline]
    pub const fn x(self) -> f32 {
        self.arr[0]
    }

    #[inline]
    pub const fn y(self) -> f32 {
        self.arr[1]
    }

    #[inline]
    pub const fn z(self) -> f32 {
        self.arr[2]
    }

    #[inline]
    pub const fn w(self) -> f32 {
        self.arr[3]
    }

    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }

    pub const fn to_array(self) -> [f32; 4] {
        self.arr
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.arr
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.arr.as_ptr()
    }
}

// Element-wise arithmetic, shared by both vector widths
macro_rules! impl_vector_ops {
    ($ty:ident, $n:literal) => {
        impl Index<usize> for $ty {
            type Output = f32;

            #[inline]
            fn index(&self, i: usize) -> &f32 {
                &self.arr[i]
            }
        }

        impl IndexMut<usize> for $ty {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut f32 {
                &mut self.arr[i]
            }
        }

        impl From<[f32; $n]> for $ty {
            fn from(arr: [f32; $n]) -> Self {
                Self { arr }
            }
        }

        impl From<$ty> for [f32; $n] {
            fn from(v: $ty) -> Self {
                v.arr
            }
        }

        impl Add for $ty {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { arr: std::array::from_fn(|i| self.arr[i] + rhs.arr[i]) }
            }
        }

        impl AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                for (a, b) in self.arr.iter_mut().zip(rhs.arr) {
                    *a += b;
                }
            }
        }

        impl Sub for $ty {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { arr: std::array::from_fn(|i| self.arr[i] - rhs.arr[i]) }
            }
        }

        impl SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                for (a, b) in self.arr.iter_mut().zip(rhs.arr) {
                    *a -= b;
                }
            }
        }

        impl Neg for $ty {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { arr: self.arr.map(|a| -a) }
            }
        }

        impl Mul<f32> for $ty {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self { arr: self.arr.map(|a| a * rhs) }
            }
        }

        impl Mul<$ty> for f32 {
            type Output = $ty;

            #[inline]
            fn mul(self, rhs: $ty) -> $ty {
                rhs * self
            }
        }

        impl MulAssign<f32> for $ty {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                for a in &mut self.arr {
                    *a *= rhs;
                }
            }
        }
    };
}

impl_vector_ops!(Vec3, 3);
impl_vector_ops!(Vec4, 4);
