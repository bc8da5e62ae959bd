//! Vertical window for plotting a function over a chosen range.
//!
//! Singularities would otherwise dominate the scale, so the largest
//! samples by magnitude are trimmed before taking the extent.

use crate::domain::config::WindowCfg;
use crate::domain::report::Range;
use crate::numerics::eval::Evaluate;
use crate::numerics::sampling::{pad, subdivide, total_cmp_nan_last};


/// Computes a y-window for plotting `f` over `domain`.
///
/// # Behavior
/// - Samples `f` at `samples` points across `domain`, dropping non-finite
///   values.
/// - Discards the `trim` samples with the largest magnitude.
/// - Takes min/max of the rest and pads by `padding`.
/// - A flat remainder widens to `value ± max(1, |value| / 10)`; no
///   remainder gives `[-1, 1]`.
///
/// ```
/// use plotdomain::domain::config::WindowCfg;
/// use plotdomain::domain::report::Range;
/// use plotdomain::domain::window::vertical_window;
///
/// let w = vertical_window(|x: f64| x, Range::new(0.0, 10.0), &WindowCfg::new().with_trim(0));
/// assert!(w.lo < 0.0 && w.hi > 10.0);
/// ```
pub fn vertical_window<E>(f: E, domain: Range, cfg: &WindowCfg) -> Range
where E: Evaluate {
    let mut ys: Vec<f64> = subdivide(domain.lo, domain.hi, cfg.samples())
        .into_iter()
        .map(|x| f.eval(x))
        .filter(|y| y.is_finite())
        .collect();

    ys.sort_by(|a, b| total_cmp_nan_last(&a.abs(), &b.abs()));
    ys.truncate(ys.len().saturating_sub(cfg.trim()));

    let lo = ys.iter().copied().reduce(f64::min);
    let hi = ys.iter().copied().reduce(f64::max);

    match (lo, hi) {
        (Some(lo), Some(hi)) if lo < hi => {
            let (lo, hi) = pad(lo, hi, cfg.padding());
            Range::new(lo, hi)
        }
        (Some(v), Some(_)) => Range::around(v, (0.1 * v.abs()).max(1.0)),
        _                  => Range::new(-1.0, 1.0),
    }
}
