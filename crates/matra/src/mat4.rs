use crate::{Scalar, Vec3, Vec4};
use core::ops::Mul;

/// 4x4 matrix, row-major storage.
///
/// Affine transform helper (translation + rotation + scale composition).
/// Stored as four row vectors so products are plain [`Vec4::dot`] calls.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4<S> {
    pub r0: Vec4<S>,
    pub r1: Vec4<S>,
    pub r2: Vec4<S>,
    pub r3: Vec4<S>,
}

impl<S: Scalar> Mat4<S> {
    /// Construct from elements in row-major order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: S, m01: S, m02: S, m03: S,
        m10: S, m11: S, m12: S, m13: S,
        m20: S, m21: S, m22: S, m23: S,
        m30: S, m31: S, m32: S, m33: S,
    ) -> Self {
        Self {
            r0: Vec4::new(m00, m01, m02, m03),
            r1: Vec4::new(m10, m11, m12, m13),
            r2: Vec4::new(m20, m21, m22, m23),
            r3: Vec4::new(m30, m31, m32, m33),
        }
    }

    #[inline]
    pub fn from_rows(r0: Vec4<S>, r1: Vec4<S>, r2: Vec4<S>, r3: Vec4<S>) -> Self {
        Self { r0, r1, r2, r3 }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_rows(Vec4::zero(), Vec4::zero(), Vec4::zero(), Vec4::zero())
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(
            S::ONE,  S::ZERO, S::ZERO, S::ZERO,
            S::ZERO, S::ONE,  S::ZERO, S::ZERO,
            S::ZERO, S::ZERO, S::ONE,  S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Translation matrix
    pub fn translation(t: Vec3<S>) -> Self {
        Self::new(
            S::ONE,  S::ZERO, S::ZERO, t.x,
            S::ZERO, S::ONE,  S::ZERO, t.y,
            S::ZERO, S::ZERO, S::ONE,  t.z,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Non-uniform scale matrix
    pub fn scaling(sx: S, sy: S, sz: S) -> Self {
        Self::new(
            sx,      S::ZERO, S::ZERO, S::ZERO,
            S::ZERO, sy,      S::ZERO, S::ZERO,
            S::ZERO, S::ZERO, sz,      S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Rotation about X axis
    pub fn rotation_x(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            S::ONE,  S::ZERO, S::ZERO, S::ZERO,
            S::ZERO, c,       -s,      S::ZERO,
            S::ZERO, s,       c,       S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Rotation about Y axis
    pub fn rotation_y(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            c,       S::ZERO, s,       S::ZERO,
            S::ZERO, S::ONE,  S::ZERO, S::ZERO,
            -s,      S::ZERO, c,       S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Rotation about Z axis
    pub fn rotation_z(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            c,       -s,      S::ZERO, S::ZERO,
            s,       c,       S::ZERO, S::ZERO,
            S::ZERO, S::ZERO, S::ONE,  S::ZERO,
            S::ZERO, S::ZERO, S::ZERO, S::ONE,
        )
    }

    /// Rotation about an arbitrary unit axis (Rodrigues' formula)
    pub fn rotation_axis(axis: Vec3<S>, angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        let t = S::ONE - c;
        let Vec3 { x, y, z } = axis;
        Self::new(
            t * x * x + c,     t * x * y - s * z, t * x * z + s * y, S::ZERO,
            t * x * y + s * z, t * y * y + c,     t * y * z - s * x, S::ZERO,
            t * x * z - s * y, t * y * z + s * x, t * z * z + c,     S::ZERO,
            S::ZERO,           S::ZERO,           S::ZERO,           S::ONE,
        )
    }

    /// Element access (row, col)
    pub fn get(&self, row: usize, col: usize) -> S {
        let r = match row { 0 => &self.r0, 1 => &self.r1, 2 => &self.r2, _ => &self.r3 };
        match col { 0 => r.x, 1 => r.y, 2 => r.z, _ => r.w }
    }

    /// Extract the translation column
    #[inline]
    pub fn translation_vec(&self) -> Vec3<S> {
        Vec3::new(self.r0.w, self.r1.w, self.r2.w)
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(
            self.r0.x, self.r1.x, self.r2.x, self.r3.x,
            self.r0.y, self.r1.y, self.r2.y, self.r3.y,
            self.r0.z, self.r1.z, self.r2.z, self.r3.z,
            self.r0.w, self.r1.w, self.r2.w, self.r3.w,
        )
    }

    /// Matrix-Vec4 product, one dot per row
    #[inline]
    pub fn mul_vec4(&self, v: Vec4<S>) -> Vec4<S> {
        Vec4::new(self.r0.dot(v), self.r1.dot(v), self.r2.dot(v), self.r3.dot(v))
    }

    /// Transform a point (w=1, includes translation)
    #[inline]
    pub fn transform_point(&self, p: Vec3<S>) -> Vec3<S> {
        self.mul_vec4(p.extend(S::ONE)).truncate()
    }

    /// Transform a vector (w=0, ignores translation)
    #[inline]
    pub fn transform_vec(&self, v: Vec3<S>) -> Vec3<S> {
        self.mul_vec4(v.extend(S::ZERO)).truncate()
    }

    /// Matrix-matrix product, unrolled as row-by-column dots
    pub fn mul_mat(&self, rhs: &Mat4<S>) -> Mat4<S> {
        let t = rhs.transpose();
        Self::from_rows(
            Vec4::new(self.r0.dot(t.r0), self.r0.dot(t.r1), self.r0.dot(t.r2), self.r0.dot(t.r3)),
            Vec4::new(self.r1.dot(t.r0), self.r1.dot(t.r1), self.r1.dot(t.r2), self.r1.dot(t.r3)),
            Vec4::new(self.r2.dot(t.r0), self.r2.dot(t.r1), self.r2.dot(t.r2), self.r2.dot(t.r3)),
            Vec4::new(self.r3.dot(t.r0), self.r3.dot(t.r1), self.r3.dot(t.r2), self.r3.dot(t.r3)),
        )
    }
}

impl<S: Scalar> Default for Mat4<S> {
    fn default() -> Self { Self::identity() }
}

// Mat4 * Vec4
impl<S: Scalar> Mul<Vec4<S>> for Mat4<S> {
    type Output = Vec4<S>;
    #[inline] fn mul(self, rhs: Vec4<S>) -> Vec4<S> { self.mul_vec4(rhs) }
}

// Mat4 * Mat4
impl<S: Scalar> Mul for Mat4<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { self.mul_mat(&rhs) }
}
