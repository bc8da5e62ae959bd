//! Plot-range orchestration.
//!
//! Turns the searches into one interval. Almost entirely heuristics for
//! what "looks good":
//!
//! ┌ constant functions   → padded unit window
//! ├ affine functions     → unit window widened to include the root
//! └ everything else      → span of interesting points, padded
//!     ├ stationary points of f and f'
//!     ├ points where |f'| = 1          (if ≤ 1 distinct point so far)
//!     ├ roots of f                     (if still ≤ 1)
//!     └ cusp-tolerant stationary search (if still ≤ 1)

use crate::domain::classify::classify;
use crate::domain::config::{RangeCfg, StationaryCfg};
use crate::domain::report::{Range, RangeReport, Shape, Tier};
use crate::domain::stationary::stationary_points;
use crate::domain::zeros::find_roots;
use crate::numerics::dedupe::dedupe;
use crate::numerics::derivative::{derivative, Derivative, DEFAULT_STEP};
use crate::numerics::eval::{Counted, Evaluate};
use crate::numerics::sampling::{max_finite, min_finite, pad};


/// Points beyond this magnitude are discarded from stationary results.
const POINT_LIMIT: f64 = 1e18;

/// Points beyond this magnitude are dropped if at least two others remain.
const LARGE_POINT: f64 = 1e8;

/// Spacing below which points count as one when deciding to widen the search.
const SPREAD_EPSILON: f64 = 0.1;

/// Spacing below which points are merged for the final range.
const MERGE_EPSILON: f64 = 1e-4;

const UNIT_WINDOW: (f64, f64) = (-1.0, 1.0);


/// Determines a plot interval for `f` with default settings.
///
/// ```
/// use plotdomain::domain::range::determine_range;
///
/// let r = determine_range(|x: f64| 1.0 + x * x);
/// assert!(r.lo < 0.0 && 0.0 < r.hi);
/// ```
pub fn determine_range<E>(f: E) -> Range
where E: Evaluate {
    analyze(&f, &RangeCfg::default()).range
}


/// Determines a plot interval for `f`, reporting how it was chosen.
///
/// Never fails: every degenerate case resolves to a fallback window. The
/// returned range is finite with `lo < hi`.
pub fn analyze<E>(f: &E, cfg: &RangeCfg) -> RangeReport
where E: Evaluate + ?Sized {
    let f = Counted::new(f);

    let shape = classify(&f, cfg.classify());
    tracing::debug!(shape = ?shape, "classified");

    match shape {
        Shape::Constant => {
            let points = vec![UNIT_WINDOW.0, UNIT_WINDOW.1];
            RangeReport {
                range       : span(&points, cfg.padding()),
                shape,
                tier        : Tier::Classified,
                points,
                unbounded   : false,
                evaluations : f.calls(),
            }
        }
        Shape::Affine => {
            let mut points = vec![0.0, 1.0];
            points.extend(find_roots(&f, cfg.zeros()));
            let points = dedupe(&points, MERGE_EPSILON);
            RangeReport {
                range       : span(&points, cfg.padding()),
                shape,
                tier        : Tier::Classified,
                points,
                unbounded   : false,
                evaluations : f.calls(),
            }
        }
        Shape::General => general(&f, cfg),
    }
}


/// Point search for functions that are neither constant nor affine.
fn general<E>(f: &Counted<'_, E>, cfg: &RangeCfg) -> RangeReport
where E: Evaluate + ?Sized {
    let df = Derivative::new(f);
    let search = cfg.stationary();
    let mut unbounded = false;

    let mut tier = Tier::Stationary;
    let mut points = gather(f, search, &mut unbounded);
    points.extend(gather(&df, search, &mut unbounded));

    let moderate: Vec<f64> = points.iter().copied().filter(|p| p.abs() < LARGE_POINT).collect();
    if moderate.len() > 1 {
        points = moderate;
    }

    if dedupe(&points, SPREAD_EPSILON).len() <= 1 {
        tier = Tier::UnitSlope;
        let unit_slope = |x: f64| (derivative(f, x, DEFAULT_STEP).abs() - 1.0).powi(2);
        points.extend(gather(&unit_slope, search, &mut unbounded));
    }
    points = dedupe(&points, MERGE_EPSILON);

    if points.len() <= 1 {
        tier = Tier::Roots;
        points.extend(find_roots(f, cfg.zeros()));
        points = dedupe(&points, MERGE_EPSILON);
    }

    if points.len() <= 1 {
        tier = Tier::Cusps;
        let cusps = search.with_cusps(true);
        points.extend(gather(f, &cusps, &mut unbounded));
        points.extend(gather(&df, &cusps, &mut unbounded));
        points = dedupe(&points, MERGE_EPSILON);
    }

    let half = cfg.fallback_half_width();
    let range = match points.as_slice() {
        []  => Range::around(0.0, half),
        [p] => Range::around(*p, half),
        _   => span(&points, cfg.padding()),
    };

    tracing::debug!(
        tier = ?tier,
        points = points.len(),
        unbounded,
        lo = range.lo,
        hi = range.hi,
        "range"
    );

    RangeReport {
        range,
        shape: Shape::General,
        tier,
        points,
        unbounded,
        evaluations: f.calls(),
    }
}


/// Stationary points of `g`, merged at the spacing they are spread over
/// and stripped of absurd magnitudes.
fn gather<E>(g: &E, cfg: &StationaryCfg, unbounded: &mut bool) -> Vec<f64>
where E: Evaluate + ?Sized {
    let found = stationary_points(g, cfg);
    *unbounded |= found.is_unbounded;

    let points = found.candidates;
    let (Some(lo), Some(hi)) = (min_finite(&points), max_finite(&points)) else {
        return points;
    };

    let epsilon = (hi - lo) / points.len() as f64;
    dedupe(&points, epsilon)
        .into_iter()
        .filter(|p| p.abs() < POINT_LIMIT)
        .collect()
}


/// Span of `points` padded by `padding` of its width per side.
///
/// Callers guarantee at least two distinct finite points.
fn span(points: &[f64], padding: f64) -> Range {
    let lo = min_finite(points).unwrap_or(UNIT_WINDOW.0);
    let hi = max_finite(points).unwrap_or(UNIT_WINDOW.1);
    let (lo, hi) = pad(lo, hi, padding);
    Range::new(lo, hi)
}
