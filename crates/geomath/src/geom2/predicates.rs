//! Containment and intersection predicates for 2D shapes.
//!
//! All predicates are pure and take shapes by reference. Degenerate inputs
//! (zero-length lines, zero radii) are not rejected; they flow through the
//! float arithmetic and may produce NaN, which makes comparisons false.
//!
//! Oriented shapes are handled by moving the query into the shape's local
//! frame (translate by `-origin`, rotate by `-rotation`, re-center on the
//! corner) and reusing the axis-aligned test.

use super::types::{Circle, Line2D, OrientedRectangle, Point2D, Rectangle2D};
use crate::cfg;
use crate::matrix::transform::rotation2x2;
use crate::vectors::Vec2;

/// Normalized lower corner of `rect`.
#[inline]
pub fn get_min(rect: &Rectangle2D) -> Vec2 {
    rect.min()
}

/// Normalized upper corner of `rect`.
#[inline]
pub fn get_max(rect: &Rectangle2D) -> Vec2 {
    rect.max()
}

#[inline]
pub fn from_min_max(min: Vec2, max: Vec2) -> Rectangle2D {
    Rectangle2D::from_min_max(min, max)
}

/// Does `point` lie on the infinite line through `line`?
///
/// Uses slope/intercept form with `cfg::approx_eq`. Vertical lines
/// (`dx == 0`, including zero-length lines) compare `x` instead.
pub fn point_on_line(point: Point2D, line: &Line2D) -> bool {
    let dx = line.end.x - line.start.x;
    let dy = line.end.y - line.start.y;
    if dx == 0.0 {
        return cfg::approx_eq(point.x, line.start.x);
    }
    let m = dy / dx;
    let c = line.end.y - m * line.end.x;
    cfg::approx_eq(point.y, m * point.x + c)
}

/// Strictly inside: boundary points are outside.
#[inline]
pub fn point_in_circle(point: Point2D, circle: &Circle) -> bool {
    (point - circle.center).norm_squared() < circle.radius * circle.radius
}

/// Inclusive bounds test against the normalized corners.
pub fn point_in_rectangle(point: Point2D, rect: &Rectangle2D) -> bool {
    let min = rect.min();
    let max = rect.max();
    min.x <= point.x && point.x <= max.x && min.y <= point.y && point.y <= max.y
}

/// Map `point` into the local frame of `rect`, where the rectangle is
/// `local_rectangle()` (corner at the origin, unrotated).
pub fn to_local_frame(point: Point2D, rect: &OrientedRectangle) -> Point2D {
    let rel = point - rect.origin;
    rel * rotation2x2(-rect.rotation) + rect.half_extents
}

pub fn point_in_oriented_rectangle(point: Point2D, rect: &OrientedRectangle) -> bool {
    point_in_rectangle(to_local_frame(point, rect), &rect.local_rectangle())
}

/// Closest point to `point` on the segment `line` (parameter clamped to [0, 1]).
pub fn closest_point(line: &Line2D, point: Point2D) -> Point2D {
    let ab = line.direction();
    let t = (point - line.start).dot(&ab) / ab.norm_squared();
    line.start + ab * t.clamp(0.0, 1.0)
}

/// Does the segment come strictly closer to the center than the radius?
pub fn line_circle(line: &Line2D, circle: &Circle) -> bool {
    let closest = closest_point(line, circle.center);
    (circle.center - closest).norm_squared() < circle.radius * circle.radius
}

/// Segment vs. axis-aligned rectangle (slab test).
///
/// Accepts immediately when an endpoint is inside. Otherwise intersects the
/// per-axis entry/exit parameters along the normalized direction; the hit
/// parameter must lie strictly after `start` and before `end`.
///
/// An axis the segment does not move along adds no interval. The segment is
/// rejected when its start lies outside that axis' slab. Mapping the zero
/// component to a `[0, 0]` interval instead would miss axis-parallel
/// segments that cross the rectangle.
pub fn line_rectangle(line: &Line2D, rect: &Rectangle2D) -> bool {
    if point_in_rectangle(line.start, rect) || point_in_rectangle(line.end, rect) {
        return true;
    }
    let min = rect.min();
    let max = rect.max();
    let dir = line.direction().normalize();

    let mut t_min = f64::NEG_INFINITY;
    let mut t_max = f64::INFINITY;
    for axis in 0..2 {
        let d = dir[axis];
        let s = line.start[axis];
        if d == 0.0 {
            // Parallel to this slab: either always inside it or never.
            if s < min[axis] || s > max[axis] {
                return false;
            }
            continue;
        }
        let inv = 1.0 / d;
        let t0 = (min[axis] - s) * inv;
        let t1 = (max[axis] - s) * inv;
        t_min = t_min.max(t0.min(t1));
        t_max = t_max.min(t0.max(t1));
    }

    if t_max < 0.0 || t_min > t_max {
        return false;
    }
    let t = if t_min < 0.0 { t_max } else { t_min };
    t > 0.0 && t * t < line.length_sq()
}

pub fn line_oriented_rectangle(line: &Line2D, rect: &OrientedRectangle) -> bool {
    let local = Line2D::new(
        to_local_frame(line.start, rect),
        to_local_frame(line.end, rect),
    );
    line_rectangle(&local, &rect.local_rectangle())
}

/// Touching circles intersect.
#[inline]
pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    let r = a.radius + b.radius;
    (a.center - b.center).norm_squared() <= r * r
}

/// Circle vs. axis-aligned rectangle via the closest point on the rectangle.
pub fn circle_rectangle(circle: &Circle, rect: &Rectangle2D) -> bool {
    let min = rect.min();
    let max = rect.max();
    let closest = circle.center.sup(&min).inf(&max);
    (circle.center - closest).norm_squared() <= circle.radius * circle.radius
}

/// Axis-aligned overlap; shared edges count.
pub fn rectangle_rectangle(a: &Rectangle2D, b: &Rectangle2D) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    a_min.x <= b_max.x && b_min.x <= a_max.x && a_min.y <= b_max.y && b_min.y <= a_max.y
}
