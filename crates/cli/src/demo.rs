//! `cli demo`: a fixed walkthrough of the library, one labelled value per step.

use geomath::geom2::{
    circle_circle, line_circle, line_oriented_rectangle, line_rectangle, point_in_circle,
    point_in_oriented_rectangle, point_in_rectangle, Circle, Line2D, OrientedRectangle,
    Rectangle2D,
};
use geomath::matrix::transform;
use geomath::{cfg, Mat2, Mat3, Vec2, Vec3};

pub struct Step {
    pub label: &'static str,
    pub value: String,
}

fn step(label: &'static str, value: impl ToString) -> Step {
    Step {
        label,
        value: value.to_string(),
    }
}

pub fn steps() -> Vec<Step> {
    let right = Vec2::new(1.0, 0.0);
    let left = Vec2::new(-1.0, 0.0);
    let ship_dir = Vec2::new(2.0, 3.0);

    let m2 = Mat2::from_elements(1.0, 0.0, 0.0, -1.0);
    let m3 = Mat3::from_elements(2.0, 0.0, 1.0, 1.0, 3.0, 0.0, 0.0, 1.0, 4.0);
    let spin = transform::axis_angle3x3(Vec3::new(0.0, 0.0, 1.0), 90.0);
    let turned = transform::multiply_vector3(Vec3::new(1.0, 0.0, 0.0), &spin);

    let origin = Vec2::zeros();
    let circle = Circle::new(origin, 2.0);
    let unit = Rectangle2D::new(origin, Vec2::new(1.0, 1.0));
    let tilted = OrientedRectangle::new(origin, Vec2::new(2.0, 1.0), 45.0);
    let diagonal = Line2D::new(Vec2::new(-1.0, -1.0), Vec2::new(2.0, 2.0));

    vec![
        step("right.x", right.x),
        step("right[0]", right[0]),
        step("(right + ship_dir).x", (right + ship_dir).x),
        step("dot(right, ship_dir)", right.dot(&ship_dir)),
        step("|ship_dir|^2", ship_dir.magnitude_squared()),
        step("|ship_dir|", ship_dir.magnitude()),
        step("distance(right, ship_dir)", right.metric_distance(&ship_dir)),
        step("angle(right, left) [deg]", cfg::rad2deg(right.angle(&left))),
        step("m2[1][1]", m2[1][1]),
        step("det(m3)", m3.determinant()),
        step(
            "m3 * inverse(m3) ~ I",
            (m3 * m3.inverse()).max_abs_diff(&Mat3::identity()) < 1e-12,
        ),
        step(
            "x rotated 90deg about z",
            format!("({:.3}, {:.3}, {:.3})", turned.x, turned.y, turned.z),
        ),
        step("line length", diagonal.length()),
        step(
            "point (1,0) in circle r=2",
            point_in_circle(Vec2::new(1.0, 0.0), &circle),
        ),
        step(
            "point (2,0) in circle r=2",
            point_in_circle(Vec2::new(2.0, 0.0), &circle),
        ),
        step(
            "point (1,1) in unit rect",
            point_in_rectangle(Vec2::new(1.0, 1.0), &unit),
        ),
        step(
            "point (1,1) in tilted rect",
            point_in_oriented_rectangle(Vec2::new(1.0, 1.0), &tilted),
        ),
        step("diagonal vs circle", line_circle(&diagonal, &circle)),
        step("diagonal vs unit rect", line_rectangle(&diagonal, &unit)),
        step("diagonal vs tilted rect", line_oriented_rectangle(&diagonal, &tilted)),
        step(
            "touching circles intersect",
            circle_circle(&Circle::new(origin, 1.0), &Circle::new(Vec2::new(2.0, 0.0), 1.0)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(label: &str) -> String {
        steps()
            .into_iter()
            .find(|s| s.label == label)
            .map(|s| s.value)
            .unwrap()
    }

    #[test]
    fn walkthrough_values() {
        assert_eq!(value_of("dot(right, ship_dir)"), "2");
        let angle: f64 = value_of("angle(right, left) [deg]").parse().unwrap();
        assert!((angle - 180.0).abs() < 1e-9);
        assert_eq!(value_of("det(m3)"), "25");
        assert_eq!(value_of("x rotated 90deg about z"), "(0.000, 1.000, 0.000)");
        assert_eq!(value_of("m3 * inverse(m3) ~ I"), "true");
        assert_eq!(value_of("point (2,0) in circle r=2"), "false");
        assert_eq!(value_of("point (1,1) in unit rect"), "true");
        assert_eq!(value_of("point (1,1) in tilted rect"), "true");
        assert_eq!(value_of("touching circles intersect"), "true");
    }
}
