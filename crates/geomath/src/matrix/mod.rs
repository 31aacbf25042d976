//! Square matrices of order 2, 3 and 4.
//!
//! Purpose
//! - `Matrix<N>` stores `N × N` values row-major in `[[f64; N]; N]`.
//!   `m[r]` is a row view, `m[r][c]` a scalar (0-based; `m[0][0]` is the
//!   conventional `m11`), `as_slice()` the flat view over the same storage.
//! - All algebra delegates to the order-generic engine in `ops`.
//!
//! Conventions
//! - Vectors are rows: a point transforms as `p · M`, so translations live in
//!   the last row (see `transform`).
//! - `Default` is the identity.
//!
//! Singular inverse policy
//! - `inverse()` never fails. When `det(M)` compares equal to zero under
//!   `cfg::approx_eq`, it returns the identity of the same order. Use
//!   `try_inverse()` to observe singularity.

pub mod interop;
pub mod ops;
pub mod transform;

use std::ops::{Index, IndexMut, Mul};

use crate::cfg;
use crate::vectors::Vec2;

/// Row-major square matrix of order `N`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<const N: usize> {
    rows: [[f64; N]; N],
}

pub type Mat2 = Matrix<2>;
pub type Mat3 = Matrix<3>;
pub type Mat4 = Matrix<4>;

impl<const N: usize> Matrix<N> {
    #[inline]
    pub const fn new(rows: [[f64; N]; N]) -> Self {
        Self { rows }
    }

    pub fn identity() -> Self {
        let mut rows = [[0.0; N]; N];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { rows }
    }

    #[inline]
    pub fn zeros() -> Self {
        Self {
            rows: [[0.0; N]; N],
        }
    }

    /// Build from `N²` row-major values. Returns `None` on a length mismatch.
    pub fn from_row_slice(values: &[f64]) -> Option<Self> {
        if values.len() != N * N {
            return None;
        }
        let mut m = Self::zeros();
        m.as_mut_slice().copy_from_slice(values);
        Some(m)
    }

    #[inline]
    pub const fn order(&self) -> usize {
        N
    }

    #[inline]
    pub fn rows(&self) -> &[[f64; N]; N] {
        &self.rows
    }

    /// Flat row-major view.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.rows.as_flattened()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.rows.as_flattened_mut()
    }

    fn from_flat(values: &[f64]) -> Self {
        debug_assert_eq!(values.len(), N * N);
        let mut m = Self::zeros();
        m.as_mut_slice().copy_from_slice(values);
        m
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros();
        ops::transpose_into(self.as_slice(), N, N, out.as_mut_slice());
        out
    }

    pub fn determinant(&self) -> f64 {
        ops::determinant_unchecked(self.as_slice(), N)
    }

    pub fn minor(&self) -> Self {
        Self::from_flat(&ops::minor_unchecked(self.as_slice(), N))
    }

    pub fn cofactor(&self) -> Self {
        let minor = ops::minor_unchecked(self.as_slice(), N);
        Self::from_flat(&ops::cofactor_unchecked(&minor, N, N))
    }

    pub fn adjugate(&self) -> Self {
        self.cofactor().transpose()
    }

    /// `adjugate / det`, or `None` when the determinant is (near-)zero.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if cfg::approx_eq(det, 0.0) {
            return None;
        }
        Some(self.adjugate() * (1.0 / det))
    }

    /// Inverse with identity fallback for singular matrices.
    ///
    /// This is a deliberate contract: a singular input yields `identity()`,
    /// not an error and not NaNs.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or_else(Self::identity)
    }

    /// Componentwise `cfg::approx_eq`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(&a, &b)| cfg::approx_eq(a, b))
    }

    /// Largest absolute componentwise difference.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .fold(0.0, |acc: f64, (a, b)| acc.max((a - b).abs()))
    }
}

impl<const N: usize> Default for Matrix<N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const N: usize> Index<usize> for Matrix<N> {
    type Output = [f64; N];
    #[inline]
    fn index(&self, row: usize) -> &[f64; N] {
        &self.rows[row]
    }
}

impl<const N: usize> IndexMut<usize> for Matrix<N> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut [f64; N] {
        &mut self.rows[row]
    }
}

impl<const N: usize> Mul for Matrix<N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::zeros();
        ops::product_into(self.as_slice(), N, N, rhs.as_slice(), N, out.as_mut_slice());
        out
    }
}

impl<const N: usize> Mul<f64> for Matrix<N> {
    type Output = Self;
    fn mul(mut self, rhs: f64) -> Self {
        for v in self.as_mut_slice() {
            *v *= rhs;
        }
        self
    }
}

/// Row vector times matrix: `v · M` (the vector is read as a 1×2 row).
impl Mul<Mat2> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: Mat2) -> Vec2 {
        let mut out = [0.0; 2];
        ops::product_into(self.as_slice(), 1, 2, rhs.as_slice(), 2, &mut out);
        Vec2::from(out)
    }
}

impl Mat2 {
    #[inline]
    pub const fn from_elements(m11: f64, m12: f64, m21: f64, m22: f64) -> Self {
        Self::new([[m11, m12], [m21, m22]])
    }
}

impl Mat3 {
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn from_elements(
        m11: f64,
        m12: f64,
        m13: f64,
        m21: f64,
        m22: f64,
        m23: f64,
        m31: f64,
        m32: f64,
        m33: f64,
    ) -> Self {
        Self::new([[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]])
    }

    /// Drop row `row` and column `col`. Panics when either is past 2.
    pub fn cut(&self, row: usize, col: usize) -> Mat2 {
        assert!(row < 3 && col < 3, "cut index out of range");
        Mat2::from_flat(&ops::cut_unchecked(self.as_slice(), 3, row, col))
    }
}

impl Mat4 {
    /// Drop row `row` and column `col`. Panics when either is past 3.
    pub fn cut(&self, row: usize, col: usize) -> Mat3 {
        assert!(row < 4 && col < 4, "cut index out of range");
        Mat3::from_flat(&ops::cut_unchecked(self.as_slice(), 4, row, col))
    }
}
