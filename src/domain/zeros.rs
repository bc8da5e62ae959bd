//! Coarse root search.
//!
//! Much cheaper and much less careful than the stationary-point finder:
//! sample a fixed grid, polish the most promising samples with descent on
//! `f²`, and keep whatever polished roots are about as good as the best.

use crate::domain::config::ZeroCfg;
use crate::numerics::descent::find_zero;
use crate::numerics::eval::Evaluate;
use crate::numerics::sampling::{min_finite, subdivide, total_cmp_nan_last};


/// Finds approximate roots of `f`.
///
/// # Algorithm
/// 1. Sample `samples` points over the configured interval.
/// 2. Rank them by `|f(x)|` and refine the best `candidates` with
///    [`find_zero`].
/// 3. Keep refined points whose residual `|f(x)|` is at most
///    `residual_factor` times the smallest residual found.
///
/// # Notes
/// - This is an outlier filter, not root certification: a function with no
///   roots still returns its closest approaches to zero.
/// - Returned roots may contain near-duplicates; callers deduplicate.
pub fn find_roots<E>(f: &E, cfg: &ZeroCfg) -> Vec<f64>
where E: Evaluate + ?Sized {
    let mut ranked: Vec<(f64, f64)> = subdivide(cfg.low(), cfg.high(), cfg.samples())
        .into_iter()
        .map(|x| (x, f.eval(x).abs()))
        .filter(|(_, r)| !r.is_nan())
        .collect();
    ranked.sort_by(|a, b| total_cmp_nan_last(&a.1, &b.1));
    ranked.truncate(cfg.candidates());

    let refined: Vec<(f64, f64)> = ranked
        .into_iter()
        .map(|(x, _)| {
            let report = find_zero(f, x, cfg.descent());
            (report.x, report.value.sqrt())
        })
        .filter(|(x, r)| x.is_finite() && !r.is_nan())
        .collect();

    let residuals: Vec<f64> = refined.iter().map(|&(_, r)| r).collect();
    let Some(best) = min_finite(&residuals) else {
        return Vec::new();
    };
    let threshold = cfg.residual_factor() * best;

    let roots: Vec<f64> = refined
        .into_iter()
        .filter(|&(_, r)| r <= threshold)
        .map(|(x, _)| x)
        .collect();

    tracing::debug!(best_residual = best, found = roots.len(), "roots");
    roots
}
