//! 2D and 3D vectors.
//!
//! `Vec2`/`Vec3` are nalgebra column vectors over `f64`. Named access (`v.x`)
//! and indexed access (`v[0]`) read the same storage, and nalgebra supplies
//! the arithmetic (`+`, `-`, `* f64`, `component_mul`), `dot`, `magnitude`,
//! `normalize`, `cross`, `angle` (radians) and `metric_distance`.
//!
//! `VecExt` adds the few operations nalgebra has no method for.
//!
//! Equality
//! - `PartialEq` is exact (float `==` per component).
//! - `VecExt::approx_eq` applies `cfg::approx_eq` per component; use it
//!   wherever the values come out of arithmetic.

use crate::cfg;

pub use nalgebra::{Vector2, Vector3};

/// 2D vector (also used as a point, see `geom2::Point2D`).
pub type Vec2 = Vector2<f64>;

/// 3D vector.
pub type Vec3 = Vector3<f64>;

/// Projection helpers and tolerance equality for `Vec2`/`Vec3`.
pub trait VecExt: Sized {
    /// Component of `self` along `dir`.
    fn project(&self, dir: &Self) -> Self;

    /// Component of `self` orthogonal to `dir`.
    fn perpendicular(&self, dir: &Self) -> Self;

    /// Mirror `self` about the line (plane in 3D) orthogonal to `normal`.
    fn reflection(&self, normal: &Self) -> Self;

    fn approx_eq(&self, other: &Self) -> bool;
}

macro_rules! impl_vec_ext {
    ($($ty:ty),+) => {$(
        impl VecExt for $ty {
            #[inline]
            fn project(&self, dir: &Self) -> Self {
                dir * (self.dot(dir) / dir.norm_squared())
            }

            #[inline]
            fn perpendicular(&self, dir: &Self) -> Self {
                self - self.project(dir)
            }

            #[inline]
            fn reflection(&self, normal: &Self) -> Self {
                self - self.project(normal) * 2.0
            }

            fn approx_eq(&self, other: &Self) -> bool {
                self.iter()
                    .zip(other.iter())
                    .all(|(&a, &b)| cfg::approx_eq(a, b))
            }
        }
    )+};
}

impl_vec_ext!(Vec2, Vec3);
