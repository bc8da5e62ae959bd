//! Sign utilities for slope scanning.
//! - `opposite_sign` : `true` if values have strictly opposite sign
//! - `brackets_zero` : `true` if a zero lies between two slope samples

/// Returns `true` if `x` and `y` have opposite signs.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() != y.is_sign_positive()
}


/// Returns `true` if consecutive slopes `x`, `y` enclose a zero of the
/// derivative: they change sign or either one is exactly zero.
///
/// NaN never brackets.
#[inline]
pub(crate) fn brackets_zero(x: f64, y: f64) -> bool {
    if x.is_nan() || y.is_nan() {
        return false;
    }
    x == 0.0 || y == 0.0 || opposite_sign(x, y)
}
