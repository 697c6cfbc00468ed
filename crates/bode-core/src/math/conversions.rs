//! Unit conversion functions
//!
//! Reduces complex responses to linear magnitude, dB and principal-value
//! phase in degrees.

use num_complex::Complex64;

/// Convert complex number to linear magnitude |z|
#[inline]
pub fn complex_2_magnitude(z: Complex64) -> f64 {
    z.norm()
}

/// Convert complex number to phase in degrees, principal value in (-180, 180]
pub fn complex_2_degree(z: Complex64) -> f64 {
    wrap_degree(z.arg().to_degrees())
}

/// Convert magnitude to dB (20*log10(mag))
///
/// A zero magnitude maps to negative infinity.
#[inline]
pub fn magnitude_2_db(mag: f64) -> f64 {
    20.0 * mag.log10()
}

/// Map an angle already in [-180, 180] (up to rounding) onto (-180, 180]
///
/// `atan2` returns -pi for a negative real axis approached from below, which
/// is the same direction as +pi. NaN passes through unchanged.
pub fn wrap_degree(deg: f64) -> f64 {
    if deg.is_nan() {
        deg
    } else if deg <= -180.0 {
        deg + 360.0
    } else {
        deg.min(180.0)
    }
}
