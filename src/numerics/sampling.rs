//! Grid and interval helpers.
//!
//! - [`subdivide`]          : `n` evenly spaced points over `[low, high]`
//! - [`min_finite`]         : minimum ignoring NaN
//! - [`max_finite`]         : maximum ignoring NaN
//! - [`pad`]                : widen an interval by a fraction of its width
//! - [`smallest_magnitude`] : the `n` values nearest the origin

use std::cmp::Ordering;


/// Subdivides the inclusive interval `[low, high]` into `n` evenly spaced
/// points.
///
/// Returns an empty vector for `n == 0` and `[low]` for `n == 1`.
///
/// ```
/// use plotdomain::numerics::sampling::subdivide;
/// assert_eq!(subdivide(0.0, 5.0, 6), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn subdivide(low: f64, high: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![low],
        _ => {
            let dx = (high - low) / (n - 1) as f64;
            (0..n).map(|i| low + i as f64 * dx).collect()
        }
    }
}


/// Minimum of `values`, skipping NaN. `None` if nothing remains.
pub fn min_finite(values: &[f64]) -> Option<f64> {
    values.iter().copied().filter(|v| !v.is_nan()).reduce(f64::min)
}

/// Maximum of `values`, skipping NaN. `None` if nothing remains.
pub fn max_finite(values: &[f64]) -> Option<f64> {
    values.iter().copied().filter(|v| !v.is_nan()).reduce(f64::max)
}


/// Pads `(lo, hi)` by `fraction` of its width on each side.
///
/// ```
/// use plotdomain::numerics::sampling::pad;
/// assert_eq!(pad(0.0, 1.0, 0.1), (-0.1, 1.1));
/// ```
#[inline]
pub fn pad(lo: f64, hi: f64, fraction: f64) -> (f64, f64) {
    let width = hi - lo;
    (lo - fraction * width, hi + fraction * width)
}


/// Total order on `f64` used for sorting; NaN compares greater than
/// everything so it collects at the end.
#[inline]
pub(crate) fn total_cmp_nan_last(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true)   => Ordering::Equal,
        (true, false)  => Ordering::Greater,
        (false, true)  => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}


/// Keeps the `n` values with the smallest magnitude, ordered by magnitude.
pub fn smallest_magnitude(mut values: Vec<f64>, n: usize) -> Vec<f64> {
    values.sort_by(|a, b| total_cmp_nan_last(&a.abs(), &b.abs()));
    values.truncate(n);
    values
}
