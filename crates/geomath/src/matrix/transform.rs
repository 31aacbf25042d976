//! Affine transform builders (row-vector convention, angles in degrees).
//!
//! A point `p` maps as `p · M`; composition reads left to right, so
//! `scale · rotation · translation` scales first and translates last.

use super::{Mat2, Mat3, Mat4};
use crate::cfg::{self, deg2rad};
use crate::vectors::Vec3;

/// 2D rotation by `degrees` (counterclockwise for row vectors).
pub fn rotation2x2(degrees: f64) -> Mat2 {
    let (s, c) = deg2rad(degrees).sin_cos();
    Mat2::from_elements(c, s, -s, c)
}

pub fn translation(x: f64, y: f64, z: f64) -> Mat4 {
    Mat4::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [x, y, z, 1.0],
    ])
}

#[inline]
pub fn translation_vec(pos: Vec3) -> Mat4 {
    translation(pos.x, pos.y, pos.z)
}

pub fn get_translation(m: &Mat4) -> Vec3 {
    Vec3::new(m[3][0], m[3][1], m[3][2])
}

pub fn scale(x: f64, y: f64, z: f64) -> Mat4 {
    Mat4::new([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

#[inline]
pub fn scale_vec(v: Vec3) -> Mat4 {
    scale(v.x, v.y, v.z)
}

/// Diagonal scale factors (exact only for pure scale matrices).
pub fn get_scale(m: &Mat4) -> Vec3 {
    Vec3::new(m[0][0], m[1][1], m[2][2])
}

/// Embed a 3×3 linear part into a 4×4 affine matrix.
fn expand(m: Mat3) -> Mat4 {
    let mut out = Mat4::identity();
    for r in 0..3 {
        out[r][..3].copy_from_slice(&m[r]);
    }
    out
}

pub fn x_rotation3x3(degrees: f64) -> Mat3 {
    let (s, c) = deg2rad(degrees).sin_cos();
    Mat3::from_elements(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
}

pub fn y_rotation3x3(degrees: f64) -> Mat3 {
    let (s, c) = deg2rad(degrees).sin_cos();
    Mat3::from_elements(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
}

pub fn z_rotation3x3(degrees: f64) -> Mat3 {
    let (s, c) = deg2rad(degrees).sin_cos();
    Mat3::from_elements(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
}

pub fn x_rotation(degrees: f64) -> Mat4 {
    expand(x_rotation3x3(degrees))
}

pub fn y_rotation(degrees: f64) -> Mat4 {
    expand(y_rotation3x3(degrees))
}

pub fn z_rotation(degrees: f64) -> Mat4 {
    expand(z_rotation3x3(degrees))
}

/// Euler rotation: roll about z, then pitch about x, then yaw about y.
pub fn rotation3x3(pitch: f64, yaw: f64, roll: f64) -> Mat3 {
    z_rotation3x3(roll) * x_rotation3x3(pitch) * y_rotation3x3(yaw)
}

pub fn rotation(pitch: f64, yaw: f64, roll: f64) -> Mat4 {
    z_rotation(roll) * x_rotation(pitch) * y_rotation(yaw)
}

/// Rotation by `degrees` about `axis` (normalized here if it is not unit length).
pub fn axis_angle3x3(axis: Vec3, degrees: f64) -> Mat3 {
    let (s, c) = deg2rad(degrees).sin_cos();
    let t = 1.0 - c;
    let a = if cfg::approx_eq(axis.norm_squared(), 1.0) {
        axis
    } else {
        axis.normalize()
    };
    let (x, y, z) = (a.x, a.y, a.z);
    Mat3::from_elements(
        t * x * x + c,
        t * x * y + s * z,
        t * x * z - s * y,
        t * x * y - s * z,
        t * y * y + c,
        t * y * z + s * x,
        t * x * z + s * y,
        t * y * z - s * x,
        t * z * z + c,
    )
}

pub fn axis_angle(axis: Vec3, degrees: f64) -> Mat4 {
    expand(axis_angle3x3(axis, degrees))
}

/// Transform a point (`w = 1`, translation applies).
pub fn multiply_point(p: Vec3, m: &Mat4) -> Vec3 {
    Vec3::new(
        p.x * m[0][0] + p.y * m[1][0] + p.z * m[2][0] + m[3][0],
        p.x * m[0][1] + p.y * m[1][1] + p.z * m[2][1] + m[3][1],
        p.x * m[0][2] + p.y * m[1][2] + p.z * m[2][2] + m[3][2],
    )
}

/// Transform a direction (`w = 0`, translation ignored).
pub fn multiply_vector(v: Vec3, m: &Mat4) -> Vec3 {
    Vec3::new(
        v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0],
        v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1],
        v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2],
    )
}

pub fn multiply_vector3(v: Vec3, m: &Mat3) -> Vec3 {
    Vec3::new(
        v.dot(&Vec3::new(m[0][0], m[1][0], m[2][0])),
        v.dot(&Vec3::new(m[0][1], m[1][1], m[2][1])),
        v.dot(&Vec3::new(m[0][2], m[1][2], m[2][2])),
    )
}

/// Scale, then Euler rotation (`euler = (pitch, yaw, roll)`), then translation.
pub fn transform(scale_v: Vec3, euler: Vec3, translate: Vec3) -> Mat4 {
    scale_vec(scale_v) * rotation(euler.x, euler.y, euler.z) * translation_vec(translate)
}

/// Scale, then axis-angle rotation, then translation.
pub fn transform_axis_angle(scale_v: Vec3, axis: Vec3, degrees: f64, translate: Vec3) -> Mat4 {
    scale_vec(scale_v) * axis_angle(axis, degrees) * translation_vec(translate)
}

/// View matrix looking from `pos` toward `target` (right = x, up = y, forward = z).
pub fn look_at(pos: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let forward = (target - pos).normalize();
    let right = up.cross(&forward).normalize();
    let new_up = forward.cross(&right);
    Mat4::new([
        [right.x, new_up.x, forward.x, 0.0],
        [right.y, new_up.y, forward.y, 0.0],
        [right.z, new_up.z, forward.z, 0.0],
        [-right.dot(&pos), -new_up.dot(&pos), -forward.dot(&pos), 1.0],
    ])
}

/// Left-handed perspective projection, depth mapped to [0, 1]. `fov` is vertical, in degrees.
pub fn projection(fov: f64, aspect: f64, z_near: f64, z_far: f64) -> Mat4 {
    let fov_y = 1.0 / deg2rad(fov * 0.5).tan();
    let fov_x = fov_y / aspect;
    let range = z_far / (z_far - z_near);
    Mat4::new([
        [fov_x, 0.0, 0.0, 0.0],
        [0.0, fov_y, 0.0, 0.0],
        [0.0, 0.0, range, 1.0],
        [0.0, 0.0, -z_near * range, 0.0],
    ])
}

/// Orthographic projection, depth mapped to [0, 1].
pub fn ortho(left: f64, right: f64, bottom: f64, top: f64, z_near: f64, z_far: f64) -> Mat4 {
    Mat4::new([
        [2.0 / (right - left), 0.0, 0.0, 0.0],
        [0.0, 2.0 / (top - bottom), 0.0, 0.0],
        [0.0, 0.0, 1.0 / (z_far - z_near), 0.0],
        [
            (left + right) / (left - right),
            (top + bottom) / (bottom - top),
            z_near / (z_near - z_far),
            1.0,
        ],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectors::Vec2;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).magnitude() < 1e-12
    }

    #[test]
    fn z_rotation_turns_x_into_y() {
        let p = multiply_vector(Vec3::new(1.0, 0.0, 0.0), &z_rotation(90.0));
        assert!(close(p, Vec3::new(0.0, 1.0, 0.0)));
        let q = Vec2::new(1.0, 0.0) * rotation2x2(90.0);
        assert!((q - Vec2::new(0.0, 1.0)).magnitude() < 1e-12);
    }

    #[test]
    fn axis_angle_matches_axis_rotations() {
        let ax = axis_angle3x3(Vec3::new(1.0, 0.0, 0.0), 30.0);
        let ay = axis_angle3x3(Vec3::new(0.0, 2.0, 0.0), -45.0);
        let az = axis_angle(Vec3::new(0.0, 0.0, 5.0), 70.0);
        assert!(ax.max_abs_diff(&x_rotation3x3(30.0)) < 1e-12);
        assert!(ay.max_abs_diff(&y_rotation3x3(-45.0)) < 1e-12);
        assert!(az.max_abs_diff(&z_rotation(70.0)) < 1e-12);
    }

    #[test]
    fn rotations_are_orthonormal() {
        let r = rotation3x3(20.0, -35.0, 110.0);
        assert!((r * r.transpose()).max_abs_diff(&Mat3::identity()) < 1e-12);
        assert!((r.determinant() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn translation_moves_points_not_vectors() {
        let t = translation(1.0, 2.0, 3.0);
        let p = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(multiply_point(p, &t), Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(multiply_vector(p, &t), p);
        assert_eq!(get_translation(&t), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(get_scale(&scale(2.0, 3.0, 4.0)), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn transform_scales_then_rotates_then_translates() {
        let m = transform(
            Vec3::new(2.0, 2.0, 2.0),
            Vec3::new(0.0, 0.0, 90.0),
            Vec3::new(10.0, 0.0, 0.0),
        );
        let p = multiply_point(Vec3::new(1.0, 0.0, 0.0), &m);
        assert!(close(p, Vec3::new(10.0, 2.0, 0.0)));
        let m2 = transform_axis_angle(
            Vec3::new(2.0, 2.0, 2.0),
            Vec3::new(0.0, 0.0, 1.0),
            90.0,
            Vec3::new(10.0, 0.0, 0.0),
        );
        assert!(m.max_abs_diff(&m2) < 1e-12);
    }

    #[test]
    fn look_at_maps_target_onto_forward_axis() {
        let pos = Vec3::new(0.0, 0.0, -5.0);
        let view = look_at(pos, Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0));
        let p = multiply_point(Vec3::zeros(), &view);
        assert!(close(p, Vec3::new(0.0, 0.0, 5.0)));
        assert!(close(multiply_point(pos, &view), Vec3::zeros()));
    }

    #[test]
    fn projection_maps_near_and_far_planes() {
        let m = projection(90.0, 1.0, 1.0, 10.0);
        // z_clip / w_clip with w_clip = z
        let depth = |z: f64| (z * m[2][2] + m[3][2]) / z;
        assert!(depth(1.0).abs() < 1e-12);
        assert!((depth(10.0) - 1.0).abs() < 1e-12);
        assert!((m[0][0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ortho_maps_box_to_clip_volume() {
        let m = ortho(-2.0, 2.0, -1.0, 1.0, 0.0, 10.0);
        let lo = multiply_point(Vec3::new(-2.0, -1.0, 0.0), &m);
        let hi = multiply_point(Vec3::new(2.0, 1.0, 10.0), &m);
        assert!(close(lo, Vec3::new(-1.0, -1.0, 0.0)));
        assert!(close(hi, Vec3::new(1.0, 1.0, 1.0)));
    }
}
