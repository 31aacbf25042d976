//! Tolerance defaults and angle-unit conversions.
//!
//! Policy
//! - Float equality is scale-relative: `|a − b| <= EPS · max(1, |a|, |b|)`.
//!   Small magnitudes fall back to an absolute `EPS` band, large magnitudes
//!   widen it proportionally. See
//!   <http://realtimecollisiondetection.net/pubs/Tolerances/>.
//! - The tolerance is a fixed constant. Call sites never pass their own
//!   epsilon; if that becomes necessary, add a small config struct here.

/// Machine epsilon for the scalar type used across the crate.
pub const EPS: f64 = f64::EPSILON;

/// Degrees → radians factor.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
/// Radians → degrees factor.
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Scale-relative float comparison.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS * 1.0f64.max(a.abs().max(b.abs()))
}

#[inline]
pub fn deg2rad(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

#[inline]
pub fn rad2deg(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_is_relative_for_large_values() {
        assert!(approx_eq(1.0, 1.0 + EPS));
        assert!(!approx_eq(1.0, 1.0 + 4.0 * EPS));
        // 1e6 + 1e-12 is within EPS * 1e6 ≈ 2.2e-10.
        assert!(approx_eq(1e6, 1e6 + 1e-12));
        assert!(!approx_eq(1e6, 1e6 + 1e-6));
    }

    #[test]
    fn approx_eq_is_absolute_near_zero() {
        assert!(approx_eq(0.0, 1e-17));
        assert!(!approx_eq(0.0, 1e-10));
    }

    #[test]
    fn angle_conversions_roundtrip() {
        assert!((deg2rad(180.0) - std::f64::consts::PI).abs() < 1e-15);
        assert!((rad2deg(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
        assert!((rad2deg(deg2rad(37.5)) - 37.5).abs() < 1e-12);
    }
}
