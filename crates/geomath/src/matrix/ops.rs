//! Order-generic matrix engine over row-major flat slices.
//!
//! Every fixed-order operation on `Matrix<N>` delegates here with its order as
//! a runtime parameter, so transpose/multiply/determinant/minor/cofactor are
//! written once. The recursion is
//!
//! `determinant(n) → cofactor(n) → minor(n) → cut(n) → determinant(n-1)`
//!
//! and bottoms out at the closed-form order-2 determinant; order 2 never
//! recurses (its minor is the diagonal swap).
//!
//! The public functions take runtime shapes and validate them, returning
//! `MathError` instead of indexing out of bounds. `Matrix<N>` holds statically
//! sized buffers and calls the unchecked `pub(crate)` kernels directly.

use crate::error::{MathError, Result};

#[inline]
fn check_len(buf: &[f64], rows: usize, cols: usize) -> Result<()> {
    let expected = rows * cols;
    if buf.len() != expected {
        return Err(MathError::BufferLength {
            expected,
            found: buf.len(),
        });
    }
    Ok(())
}

/// Square input of order `n` that can lose a row and a column.
#[inline]
fn check_reducible(src: &[f64], n: usize) -> Result<()> {
    check_len(src, n, n)?;
    if n < 2 {
        return Err(MathError::UnsupportedOrder(n));
    }
    Ok(())
}

/// Transpose a `rows × cols` matrix into a `cols × rows` one.
pub fn transpose(src: &[f64], rows: usize, cols: usize) -> Result<Vec<f64>> {
    check_len(src, rows, cols)?;
    let mut out = vec![0.0; rows * cols];
    transpose_into(src, rows, cols, &mut out);
    Ok(out)
}

pub(crate) fn transpose_into(src: &[f64], rows: usize, cols: usize, out: &mut [f64]) {
    debug_assert_eq!(src.len(), rows * cols);
    debug_assert_eq!(out.len(), rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            out[c * rows + r] = src[r * cols + c];
        }
    }
}

/// Matrix product `A (a_rows × a_cols) · B (b_rows × b_cols)`.
///
/// Errors
/// - `DimensionMismatch` when `a_cols != b_rows`.
/// - `BufferLength` when a slice does not match its declared shape.
pub fn multiply(
    a: &[f64],
    a_rows: usize,
    a_cols: usize,
    b: &[f64],
    b_rows: usize,
    b_cols: usize,
) -> Result<Vec<f64>> {
    if a_cols != b_rows {
        return Err(MathError::DimensionMismatch { a_cols, b_rows });
    }
    check_len(a, a_rows, a_cols)?;
    check_len(b, b_rows, b_cols)?;
    let mut out = vec![0.0; a_rows * b_cols];
    product_into(a, a_rows, a_cols, b, b_cols, &mut out);
    Ok(out)
}

/// Unchecked product kernel; `b` has `a_cols` rows.
pub(crate) fn product_into(
    a: &[f64],
    a_rows: usize,
    a_cols: usize,
    b: &[f64],
    b_cols: usize,
    out: &mut [f64],
) {
    debug_assert_eq!(out.len(), a_rows * b_cols);
    for i in 0..a_rows {
        for j in 0..b_cols {
            let mut sum = 0.0;
            for k in 0..a_cols {
                sum += a[i * a_cols + k] * b[k * b_cols + j];
            }
            out[i * b_cols + j] = sum;
        }
    }
}

/// Copy every entry outside row `row` and column `col` of an `n × n` matrix,
/// in row-major scan order, into an `(n-1) × (n-1)` matrix.
///
/// Errors: `BufferLength`, `UnsupportedOrder` for `n < 2`, `IndexOutOfRange`.
pub fn cut(src: &[f64], n: usize, row: usize, col: usize) -> Result<Vec<f64>> {
    check_reducible(src, n)?;
    if row >= n || col >= n {
        return Err(MathError::IndexOutOfRange { row, col, order: n });
    }
    Ok(cut_unchecked(src, n, row, col))
}

pub(crate) fn cut_unchecked(src: &[f64], n: usize, row: usize, col: usize) -> Vec<f64> {
    debug_assert!(n >= 2 && row < n && col < n);
    let mut out = Vec::with_capacity((n - 1) * (n - 1));
    for i in 0..n {
        if i == row {
            continue;
        }
        for j in 0..n {
            if j == col {
                continue;
            }
            out.push(src[i * n + j]);
        }
    }
    out
}

/// Determinant of an `n × n` matrix by Laplace expansion along the first row.
/// The empty matrix has determinant 1.
pub fn determinant(src: &[f64], n: usize) -> Result<f64> {
    check_len(src, n, n)?;
    Ok(determinant_unchecked(src, n))
}

pub(crate) fn determinant_unchecked(src: &[f64], n: usize) -> f64 {
    match n {
        0 => 1.0,
        1 => src[0],
        2 => src[0] * src[3] - src[2] * src[1],
        _ => {
            let cof = cofactor_unchecked(&minor_unchecked(src, n), n, n);
            (0..n).map(|i| src[i] * cof[i]).sum()
        }
    }
}

/// Minor matrix of an `n × n` matrix.
///
/// - order 2: diagonal swap `(m22, m21, m12, m11)`.
/// - order ≥ 3: `minor[i,j] = det(cut(M, i, j))`.
///
/// Errors: `BufferLength`, `UnsupportedOrder` for `n < 2`.
pub fn minor(src: &[f64], n: usize) -> Result<Vec<f64>> {
    check_reducible(src, n)?;
    Ok(minor_unchecked(src, n))
}

pub(crate) fn minor_unchecked(src: &[f64], n: usize) -> Vec<f64> {
    match n {
        // Each entry is the determinant of an empty matrix.
        0 | 1 => vec![1.0; n * n],
        2 => vec![src[3], src[2], src[1], src[0]],
        _ => {
            let mut out = vec![0.0; n * n];
            for i in 0..n {
                for j in 0..n {
                    out[i * n + j] = determinant_unchecked(&cut_unchecked(src, n, i, j), n - 1);
                }
            }
            out
        }
    }
}

/// Apply the checkerboard sign `(−1)^(i+j)` to a `rows × cols` minor matrix.
pub fn cofactor(minor: &[f64], rows: usize, cols: usize) -> Result<Vec<f64>> {
    check_len(minor, rows, cols)?;
    Ok(cofactor_unchecked(minor, rows, cols))
}

pub(crate) fn cofactor_unchecked(minor: &[f64], rows: usize, cols: usize) -> Vec<f64> {
    let mut out = vec![0.0; rows * cols];
    for i in 0..rows {
        for j in 0..cols {
            let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
            out[i * cols + j] = minor[i * cols + j] * sign;
        }
    }
    out
}

/// Transpose of the cofactor matrix.
pub fn adjugate(src: &[f64], n: usize) -> Result<Vec<f64>> {
    let cof = cofactor_unchecked(&minor(src, n)?, n, n);
    transpose(&cof, n, n)
}
