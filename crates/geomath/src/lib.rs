//! Small linear algebra and 2D geometry.
//!
//! - `vectors`: `Vec2`, `Vec3` (nalgebra `f64` vectors) and `VecExt`.
//! - `matrix`: `Mat2`, `Mat3`, `Mat4` over an order-generic engine
//!   (transpose, product, determinant by cofactor expansion, minor, cofactor,
//!   adjugate, inverse) plus affine transform builders.
//! - `geom2`: 2D shapes with containment and intersection predicates.
//!
//! Everything is a pure function over `Copy` values; nothing here allocates
//! shared state or logs.
//!
//! Conventions
//! - Row vectors: points transform as `p · M`.
//! - Builder angles are degrees; `Vec2::angle`/`Vec3::angle` return radians.
//! - Float equality is `cfg::approx_eq` (scale-relative, machine epsilon).
//! - `Matrix::inverse` returns the identity for singular input; see
//!   `Matrix::try_inverse` for the checked form.

pub mod cfg;
pub mod error;
pub mod geom2;
pub mod matrix;
pub mod vectors;

pub use error::MathError;
pub use matrix::{Mat2, Mat3, Mat4, Matrix};
pub use vectors::{Vec2, Vec3, VecExt};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{approx_eq, deg2rad, rad2deg};
    pub use crate::geom2::{
        circle_circle, circle_rectangle, line_circle, line_oriented_rectangle, line_rectangle,
        point_in_circle, point_in_oriented_rectangle, point_in_rectangle, point_on_line,
        rectangle_rectangle, Circle, Line2D, OrientedRectangle, Point2D, Rectangle2D,
    };
    pub use crate::matrix::transform;
    pub use crate::matrix::{Mat2, Mat3, Mat4, Matrix};
    pub use crate::vectors::{Vec2, Vec3, VecExt};
}
