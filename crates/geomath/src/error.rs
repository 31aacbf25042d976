//! Error types for the runtime-sized matrix entry points.
//!
//! Fixed-order APIs (`Mat2`, `Mat3`, `Mat4`) are total and never return these;
//! only the flat-slice engine in `matrix::ops` can see shapes that disagree.

use thiserror::Error;

/// Errors reported by the order-generic matrix engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Inner dimensions of a product disagree (`a_cols != b_rows`).
    #[error("dimension mismatch: left operand has {a_cols} columns, right operand has {b_rows} rows")]
    DimensionMismatch { a_cols: usize, b_rows: usize },

    /// A flat buffer does not hold `rows * cols` values.
    #[error("buffer length mismatch: expected {expected} values, found {found}")]
    BufferLength { expected: usize, found: usize },

    /// Operation needs a larger square matrix (`cut` and `minor` need order ≥ 2).
    #[error("unsupported matrix order: {0}")]
    UnsupportedOrder(usize),

    /// Row or column index past the matrix order.
    #[error("index ({row}, {col}) out of range for order {order}")]
    IndexOutOfRange { row: usize, col: usize, order: usize },
}

pub type Result<T> = std::result::Result<T, MathError>;
