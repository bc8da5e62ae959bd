//! Near-duplicate removal for real numbers.

use super::sampling::total_cmp_nan_last;


/// Merges values closer than `epsilon`.
///
/// Sorts `values` ascending (NaN last), then keeps an element only if it
/// differs from the last *kept* element by more than `epsilon`. The first
/// element is always kept.
///
/// # Notes
/// - `epsilon == 0` or fewer than two values: the input is returned as-is,
///   unsorted.
/// - Comparison is against the last kept element, not against the
///   immediately preceding input. A run of values with gaps below `epsilon`
///   therefore collapses to points spaced just over `epsilon` apart
///   instead of a single point. This keeps the output strictly
///   `epsilon`-separated, so a second pass changes nothing.
/// - NaN never compares within `epsilon`, so every NaN survives at the end.
///
/// ```
/// use plotdomain::numerics::dedupe::dedupe;
/// assert_eq!(dedupe(&[1.0, 0.0, 0.05, 1.02], 0.1), vec![0.0, 1.0]);
/// ```
pub fn dedupe(values: &[f64], epsilon: f64) -> Vec<f64> {
    if values.len() <= 1 || epsilon == 0.0 {
        return values.to_vec();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(total_cmp_nan_last);

    let mut kept: Vec<f64> = Vec::with_capacity(sorted.len());
    for v in sorted {
        match kept.last() {
            Some(&last) if (v - last).abs() <= epsilon => {}
            _ => kept.push(v),
        }
    }
    kept
}
