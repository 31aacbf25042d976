//! 2D shapes and their containment/intersection predicates.
//!
//! Purpose
//! - Plain `Copy` shape values (`Line2D`, `Circle`, `Rectangle2D`,
//!   `OrientedRectangle`) and pure boolean predicates over them.
//!
//! Conventions
//! - Circles exclude their boundary for point containment; rectangles include
//!   it. Circle–circle treats touching as intersecting.
//! - Oriented rectangles rotate counterclockwise by `rotation` degrees about
//!   their center; predicates transform the query into the local frame.
//! - No validation: degenerate shapes yield IEEE-754 results, never panics.
//!
//! Code cross-refs: `crate::matrix::transform::rotation2x2`, `crate::cfg::approx_eq`

mod predicates;
mod types;

pub use predicates::{
    circle_circle, circle_rectangle, closest_point, from_min_max, get_max, get_min,
    line_circle, line_oriented_rectangle, line_rectangle, point_in_circle,
    point_in_oriented_rectangle, point_in_rectangle, point_on_line, rectangle_rectangle,
    to_local_frame,
};
pub use types::{Circle, Line2D, OrientedRectangle, Point2D, Rectangle2D};
