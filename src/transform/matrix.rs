//! Column-major 4x4 matrices.
//!
//! Storage follows the fixed-function pipeline layout: element `(row, col)`
//! lives at index `col * 4 + row`, and the translation occupies indices
//! 12, 13 and 14. A matrix can be handed to such a pipeline as-is via
//! [`Matrix4::to_cols_array`].

use super::vec3::Vec3;
use std::ops::{Mul, MulAssign};

/// A 4x4 transform stored column-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    m: [f32; 16],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// The identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Build from 16 column-major elements.
    #[must_use]
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// The 16 column-major elements.
    #[must_use]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.m
    }

    /// Borrow the column-major elements.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.m
    }

    /// Translation by `(x, y, z)`.
    #[must_use]
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut mat = Self::IDENTITY;
        mat.m[12] = x;
        mat.m[13] = y;
        mat.m[14] = z;
        mat
    }

    /// Non-uniform scale along the axes.
    #[must_use]
    pub fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        let mut mat = Self::IDENTITY;
        mat.m[0] = sx;
        mat.m[5] = sy;
        mat.m[10] = sz;
        mat
    }

    /// Shear of the xy plane: `y' = y + k * x`, other coordinates unchanged.
    ///
    /// `k` sits at index 1, i.e. element `(1, 0)` of the column-major layout.
    #[must_use]
    pub fn shear_xy(k: f32) -> Self {
        let mut mat = Self::IDENTITY;
        mat.m[1] = k;
        mat
    }

    /// Rotation of `angle_degrees` about the axis `(x, y, z)`, right-handed.
    ///
    /// Uses the axis-angle (Rodrigues) form with `c = cos θ`, `s = sin θ`,
    /// `t = 1 - c`. The axis is normalized first; an axis shorter than
    /// [`NORMALIZE_EPSILON`](super::vec3::NORMALIZE_EPSILON) becomes the zero
    /// vector, leaving `c` on the diagonal and zeros elsewhere in the 3x3
    /// block. Callers must supply a real axis.
    #[must_use]
    pub fn rotation(angle_degrees: f32, x: f32, y: f32, z: f32) -> Self {
        let rad = angle_degrees.to_radians();
        let c = rad.cos();
        let s = rad.sin();
        let t = 1.0 - c;
        let a = Vec3::new(x, y, z).normalize();

        let mut mat = Self::IDENTITY;
        mat.m[0] = a.x * a.x * t + c;
        mat.m[1] = a.y * a.x * t + a.z * s;
        mat.m[2] = a.z * a.x * t - a.y * s;
        mat.m[4] = a.x * a.y * t - a.z * s;
        mat.m[5] = a.y * a.y * t + c;
        mat.m[6] = a.z * a.y * t + a.x * s;
        mat.m[8] = a.x * a.z * t + a.y * s;
        mat.m[9] = a.y * a.z * t - a.x * s;
        mat.m[10] = a.z * a.z * t + c;
        mat
    }

    /// Element at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[col * 4 + row]
    }

    /// Row `i` as `[m(i,0), m(i,1), m(i,2), m(i,3)]`.
    #[must_use]
    pub fn row(&self, i: usize) -> [f32; 4] {
        [self.m[i], self.m[4 + i], self.m[8 + i], self.m[12 + i]]
    }

    /// Column `j`.
    #[must_use]
    pub fn column(&self, j: usize) -> [f32; 4] {
        [self.m[j * 4], self.m[j * 4 + 1], self.m[j * 4 + 2], self.m[j * 4 + 3]]
    }

    /// Swap rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = self.m[col * 4 + row];
            }
        }
        Self::from_cols_array(out)
    }

    /// Apply to a point (`w = 1`), ignoring the projective row.
    #[must_use]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0] * p.x + m[4] * p.y + m[8] * p.z + m[12],
            m[1] * p.x + m[5] * p.y + m[9] * p.z + m[13],
            m[2] * p.x + m[6] * p.y + m[10] * p.z + m[14],
        )
    }

    /// Apply to a direction (`w = 0`); translation has no effect.
    #[must_use]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0] * v.x + m[4] * v.y + m[8] * v.z,
            m[1] * v.x + m[5] * v.y + m[9] * v.z,
            m[2] * v.x + m[6] * v.y + m[10] * v.z,
        )
    }

    /// Element-wise absolute difference within `epsilon`.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

/// `self * rhs`: the result applies `rhs` first, then `self`.
impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.m[k * 4 + row] * rhs.m[col * 4 + k];
                }
                out[col * 4 + row] = sum;
            }
        }
        Matrix4::from_cols_array(out)
    }
}

impl MulAssign for Matrix4 {
    fn mul_assign(&mut self, rhs: Matrix4) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Matrix4 {
    type Output = Vec3;

    fn mul(self, p: Vec3) -> Vec3 {
        self.transform_point(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f32 = 1e-5;

    fn assert_vec_eq(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, EPS),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Matrix4::default(), Matrix4::IDENTITY);
        assert_eq!(Matrix4::identity().row(3), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_translation_layout() {
        let t = Matrix4::translation(1.0, 2.0, 3.0);
        let cols = t.to_cols_array();
        assert_eq!(&cols[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(t.get(0, 3), 1.0);
        assert_eq!(t.column(3), [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_translation_moves_points_not_vectors() {
        let t = Matrix4::translation(1.0, 2.0, 3.0);
        assert_vec_eq(t.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
        assert_vec_eq(t.transform_vector(Vec3::X), Vec3::X);
    }

    #[test]
    fn test_scale() {
        let s = Matrix4::scale(80.0, 1.0, 3.5);
        assert_vec_eq(s * Vec3::new(1.0, 1.0, 1.0), Vec3::new(80.0, 1.0, 3.5));
    }

    #[test]
    fn test_shear_xy() {
        let sh = Matrix4::shear_xy(0.3);
        assert_eq!(sh.to_cols_array()[1], 0.3);
        assert_eq!(sh.get(1, 0), 0.3);
        assert_vec_eq(sh.transform_point(Vec3::new(10.0, 0.0, 0.0)), Vec3::new(10.0, 3.0, 0.0));
        assert_vec_eq(sh.transform_point(Vec3::new(0.0, 5.0, 2.0)), Vec3::new(0.0, 5.0, 2.0));
        assert_eq!(Matrix4::shear_xy(0.0), Matrix4::IDENTITY);
    }

    #[test]
    fn test_rotation_y_90_maps_x_to_neg_z() {
        let r = Matrix4::rotation(90.0, 0.0, 1.0, 0.0);
        assert_vec_eq(r * Vec3::X, Vec3::new(0.0, 0.0, -1.0));
        assert_vec_eq(r * Vec3::Z, Vec3::X);
    }

    #[test]
    fn test_rotation_z_90_maps_x_to_y() {
        let r = Matrix4::rotation(90.0, 0.0, 0.0, 1.0);
        assert_vec_eq(r * Vec3::X, Vec3::Y);
    }

    #[test]
    fn test_rotation_x_90_maps_y_to_z() {
        let r = Matrix4::rotation(90.0, 1.0, 0.0, 0.0);
        assert_vec_eq(r * Vec3::Y, Vec3::Z);
    }

    #[test]
    fn test_rotation_normalizes_axis() {
        let a = Matrix4::rotation(30.0, 0.0, 5.0, 0.0);
        let b = Matrix4::rotation(30.0, 0.0, 1.0, 0.0);
        assert!(a.abs_diff_eq(&b, EPS));
    }

    #[test]
    fn test_rotation_translation_column_is_zero() {
        let r = Matrix4::rotation(47.0, 1.0, 2.0, 3.0);
        assert_eq!(r.column(3), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(r.row(3), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_rotation_degenerate_axis_not_corrected() {
        let r = Matrix4::rotation(90.0, 0.0, 0.0, 0.0);
        let c = 90.0_f32.to_radians().cos();
        // Only cos θ survives on the diagonal; everything else in the block is zero
        assert_abs_diff_eq!(r.get(0, 0), c);
        assert_abs_diff_eq!(r.get(1, 1), c);
        assert_abs_diff_eq!(r.get(2, 2), c);
        assert_eq!(r.get(0, 1), 0.0);
        assert_eq!(r.get(2, 0), 0.0);
    }

    #[test]
    fn test_rotation_is_orthonormal() {
        let r = Matrix4::rotation(33.0, 1.0, -2.0, 0.5);
        let product = r * r.transpose();
        assert!(product.abs_diff_eq(&Matrix4::IDENTITY, EPS));
    }

    #[test]
    fn test_multiply_applies_right_operand_first() {
        let t = Matrix4::translation(10.0, 0.0, 0.0);
        let s = Matrix4::scale(2.0, 2.0, 2.0);

        // Scale first, then translate
        assert_vec_eq((t * s) * Vec3::X, Vec3::new(12.0, 0.0, 0.0));
        // Translate first, then scale
        assert_vec_eq((s * t) * Vec3::X, Vec3::new(22.0, 0.0, 0.0));
    }

    #[test]
    fn test_multiply_identity() {
        let r = Matrix4::rotation(12.0, 0.3, 0.4, 0.5);
        assert_eq!(r * Matrix4::IDENTITY, r);
        assert_eq!(Matrix4::IDENTITY * r, r);
    }

    #[test]
    fn test_mul_assign() {
        let mut m = Matrix4::translation(1.0, 0.0, 0.0);
        m *= Matrix4::translation(0.0, 2.0, 0.0);
        assert_eq!(m, Matrix4::translation(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_transpose_roundtrip() {
        let m = Matrix4::from_cols_array(std::array::from_fn(|i| i as f32));
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().row(0), m.column(0));
    }
}
