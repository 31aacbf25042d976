//! Lossless matrix conversions to and from nalgebra.
//!
//! Both sides index as `(row, col)`; nalgebra stores column-major internally,
//! which the conversions hide. Vectors need no conversion: `Vec2`/`Vec3` are
//! nalgebra types.

use nalgebra::{Matrix2, Matrix3, Matrix4, SMatrix};

use super::Matrix;

impl<const N: usize> From<Matrix<N>> for SMatrix<f64, N, N> {
    fn from(m: Matrix<N>) -> Self {
        SMatrix::from_fn(|r, c| m[r][c])
    }
}

impl<const N: usize> From<SMatrix<f64, N, N>> for Matrix<N> {
    fn from(m: SMatrix<f64, N, N>) -> Self {
        let mut out = Matrix::zeros();
        for r in 0..N {
            for c in 0..N {
                out[r][c] = m[(r, c)];
            }
        }
        out
    }
}

/// Shorthand for the nalgebra counterparts of `Mat2`/`Mat3`/`Mat4`.
pub type NaMat2 = Matrix2<f64>;
pub type NaMat3 = Matrix3<f64>;
pub type NaMat4 = Matrix4<f64>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Mat2, Mat3};
    use nalgebra::matrix;

    #[test]
    fn matrix_roundtrip_keeps_row_major_layout() {
        let m = Mat3::from_elements(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0);
        let na: NaMat3 = m.into();
        assert_eq!(na[(0, 2)], 3.0);
        assert_eq!(na[(2, 0)], 7.0);
        let back: Mat3 = na.into();
        assert_eq!(back, m);
    }

    #[test]
    fn from_nalgebra_literal() {
        let na = matrix![1.0, 2.0; 3.0, 4.0];
        let m: Mat2 = na.into();
        assert_eq!(m, Mat2::from_elements(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn row_vector_product_is_transposed_column_product() {
        let m = Mat2::from_elements(1.0, 2.0, 3.0, 4.0);
        let v = crate::vectors::Vec2::new(-1.0, 0.5);
        let na: NaMat2 = m.into();
        assert_eq!(v * m, na.transpose() * v);
    }
}
