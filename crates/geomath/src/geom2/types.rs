//! 2D shape value types.
//!
//! - `Line2D`: directed segment `start → end`.
//! - `Circle`: center + radius (radius is not validated).
//! - `Rectangle2D`: axis-aligned, `origin` is a corner, `size` may be negative.
//! - `OrientedRectangle`: centered at `origin`, rotated by `rotation` degrees.

use crate::vectors::Vec2;

/// A point is a `Vec2`; the alias documents intent at call sites.
pub type Point2D = Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Line2D {
    pub start: Point2D,
    pub end: Point2D,
}

impl Line2D {
    #[inline]
    pub const fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().magnitude()
    }
    #[inline]
    pub fn length_sq(&self) -> f64 {
        self.direction().norm_squared()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point2D,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub const fn new(center: Point2D, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(Point2D::zeros(), 1.0)
    }
}

/// Axis-aligned rectangle. Corners are `origin` and `origin + size`; use
/// `get_min`/`get_max` for normalized bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle2D {
    pub origin: Point2D,
    pub size: Vec2,
}

impl Rectangle2D {
    #[inline]
    pub const fn new(origin: Point2D, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Componentwise minimum corner.
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.origin.inf(&(self.origin + self.size))
    }

    /// Componentwise maximum corner.
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin.sup(&(self.origin + self.size))
    }

    #[inline]
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::new(min, max - min)
    }
}

impl Default for Rectangle2D {
    fn default() -> Self {
        Self::new(Point2D::zeros(), Vec2::repeat(1.0))
    }
}

/// Rectangle centered at `origin`, rotated counterclockwise by `rotation` degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedRectangle {
    pub origin: Point2D,
    pub half_extents: Vec2,
    pub rotation: f64,
}

impl OrientedRectangle {
    #[inline]
    pub const fn new(origin: Point2D, half_extents: Vec2, rotation: f64) -> Self {
        Self {
            origin,
            half_extents,
            rotation,
        }
    }

    /// The same rectangle before rotation, expressed in its local frame:
    /// corner at the origin, size `2 · half_extents`.
    #[inline]
    pub fn local_rectangle(&self) -> Rectangle2D {
        Rectangle2D::new(Point2D::zeros(), self.half_extents * 2.0)
    }
}

impl Default for OrientedRectangle {
    fn default() -> Self {
        Self::new(Point2D::zeros(), Vec2::repeat(1.0), 0.0)
    }
}
