//! Tolerance predicates
//!
//! Every zero or equality test against a computed `f64` goes through these
//! helpers instead of `==`.

use glam::DVec3;

/// Default tolerance for zero and equality checks
pub const EPS: f64 = 1.0e-9;

/// True iff `|value| < tolerance`
#[inline]
pub fn is_zero_with(value: f64, tolerance: f64) -> bool {
    tolerance > value.abs()
}

/// True iff `|value| < EPS`
#[inline]
pub fn is_zero(value: f64) -> bool {
    is_zero_with(value, EPS)
}

/// True iff `a` and `b` differ by less than `EPS`
#[inline]
pub fn is_equal(a: f64, b: f64) -> bool {
    is_zero(b - a)
}

/// Component-wise [`is_equal`] on two points
pub fn points_equal(a: DVec3, b: DVec3) -> bool {
    is_equal(a.x, b.x) && is_equal(a.y, b.y) && is_equal(a.z, b.z)
}
