//! Stationary-point finder
//!
//! Locates points where `f'` changes sign with a single explicit worklist:
//!
//! ┌ refinement : a sub-interval whose discrete slopes change sign is
//! │              re-sampled one depth deeper, at `cuts / cuts_divisor^depth`
//! │              points, until the resolution floor
//! ├ extension  : when a full drain found something new, the domain is
//! │              widened on both sides and the drain repeats
//! └ caps       : point count, extension rounds and an evaluation budget turn
//!                "possibly infinitely many points" into a bounded sample
//!
//! The unbounded flag this produces is a heuristic signal, not a proof.

use crate::domain::config::StationaryCfg;
use crate::domain::report::PointSet;
use crate::numerics::dedupe::dedupe;
use crate::numerics::derivative::{derivative, DEFAULT_STEP};
use crate::numerics::descent::find_stationary;
use crate::numerics::eval::{Counted, Evaluate};
use crate::numerics::sampling::{smallest_magnitude, subdivide, total_cmp_nan_last};
use crate::numerics::signs::brackets_zero;


/// Slope jump, per unit of floor width, above which a floor interval is a
/// cusp rather than a smooth stationary point.
pub const CUSP_SLOPE_FACTOR: f64 = 1000.0;


/// Unit of work in the finder's worklist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchTask {
    pub low: f64,
    pub high: f64,
    pub depth: usize,
}

impl SearchTask {
    #[inline]
    pub fn new(low: f64, high: f64, depth: usize) -> Self {
        Self { low, high, depth }
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) * 0.5
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}


/// What a single task resolved to.
/// - [`Scan::Candidate`] : resolution floor reached; midpoint is a candidate
/// - [`Scan::Cusp`]      : floor reached, but the slope jump marks a cusp
///                         and cusps are excluded
/// - [`Scan::Split`]     : sign-changing sub-intervals one depth deeper,
///                         farthest from the origin first
#[derive(Debug, Clone, PartialEq)]
pub enum Scan {
    Candidate(f64),
    Cusp,
    Split(Vec<SearchTask>),
}


/// `true` if the one-sided slopes at `low` and `high` disagree by at least
/// [`CUSP_SLOPE_FACTOR`] times the interval width.
pub fn is_cusp<E>(f: &E, low: f64, high: f64) -> bool
where E: Evaluate + ?Sized {
    let jump = (derivative(f, low, DEFAULT_STEP) - derivative(f, high, DEFAULT_STEP)).abs();
    !(jump < CUSP_SLOPE_FACTOR * (high - low))
}


/// Resolves one task.
///
/// # Behavior
/// - Floor (`resolution <= 1`, or `depth >= max_depth`): the midpoint is a
///   candidate unless [`is_cusp`] holds and cusps are excluded.
/// - Otherwise `f` is sampled at `resolution` evenly spaced points (NaN
///   samples skipped) and every adjacent pair of discrete slopes that
///   brackets zero yields the sub-interval spanning both slopes.
pub fn scan<E>(f: &E, task: SearchTask, cfg: &StationaryCfg) -> Scan
where E: Evaluate + ?Sized {
    let cuts = cfg.resolution(task.depth);

    if cuts <= 1 || task.depth >= cfg.max_depth() {
        if !cfg.include_cusps() && is_cusp(f, task.low, task.high) {
            return Scan::Cusp;
        }
        return Scan::Candidate(task.midpoint());
    }

    let samples: Vec<(f64, f64)> = subdivide(task.low, task.high, cuts)
        .into_iter()
        .map(|x| (x, f.eval(x)))
        .filter(|(_, y)| !y.is_nan())
        .collect();

    if samples.len() < 3 {
        return Scan::Split(Vec::new());
    }

    let slopes: Vec<f64> = samples
        .windows(2)
        .map(|w| (w[1].1 - w[0].1) / (w[1].0 - w[0].0))
        .collect();

    let mut children: Vec<SearchTask> = slopes
        .windows(2)
        .enumerate()
        .filter(|(_, s)| brackets_zero(s[0], s[1]))
        .map(|(i, _)| SearchTask::new(samples[i].0, samples[i + 2].0, task.depth + 1))
        .collect();

    // popped last-in first-out, so the nearest-to-origin child goes last
    children.sort_by(|a, b| total_cmp_nan_last(&b.midpoint().abs(), &a.midpoint().abs()));

    Scan::Split(children)
}


/// Finds stationary points of `f`.
///
/// # Algorithm
/// 1. Seed the worklist with the configured interval at depth 0.
/// 2. Drain the worklist with [`scan`], collecting candidates. Draining
///    stops early, flagging the set unbounded, once candidates exceed
///    `max_point_count` or evaluations exceed `max_evaluations`.
/// 3. If the drain found nothing new, stop. Otherwise start extension
///    round `k`: if `k > max_depth` flag unbounded and stop, else push a
///    window of width `k * (high - low)` on each side of the domain
///    covered so far and drain again.
/// 4. Deduplicate raw candidates with the widest floor interval as epsilon.
/// 5. Refine each survivor with [`find_stationary`], dropping non-finite
///    results; if unbounded keep the `unbounded_sample` values nearest
///    the origin.
///
/// # Notes
/// - Evaluator calls never exceed [`StationaryCfg::evaluation_ceiling`].
/// - Candidate order is not part of the contract.
pub fn stationary_points<E>(f: &E, cfg: &StationaryCfg) -> PointSet
where E: Evaluate + ?Sized {
    let f = Counted::new(f);

    let width = cfg.high() - cfg.low();
    let mut covered = (cfg.low(), cfg.high());
    let mut stack: Vec<SearchTask> = vec![SearchTask::new(cfg.low(), cfg.high(), 0)];

    let mut raw: Vec<f64> = Vec::new();
    let mut epsilon: f64 = 0.0;
    let mut unbounded = false;
    let mut round: usize = 0;

    loop {
        let before = raw.len();

        while !unbounded {
            let Some(task) = stack.pop() else { break };

            match scan(&f, task, cfg) {
                Scan::Candidate(x) => {
                    epsilon = epsilon.max(task.width());
                    raw.push(x);
                }
                Scan::Cusp => {}
                Scan::Split(children) => stack.extend(children),
            }

            if raw.len() > cfg.max_point_count() || f.calls() > cfg.max_evaluations() {
                unbounded = true;
            }
        }

        tracing::debug!(
            round,
            found = raw.len() - before,
            total = raw.len(),
            evaluations = f.calls(),
            unbounded,
            "stationary_round"
        );

        if unbounded || raw.len() == before {
            break;
        }

        round += 1;
        if round > cfg.max_depth() {
            unbounded = true;
            break;
        }

        let grow = round as f64 * width;
        stack.push(SearchTask::new(covered.1, covered.1 + grow, 0));
        stack.push(SearchTask::new(covered.0 - grow, covered.0, 0));
        covered = (covered.0 - grow, covered.1 + grow);
    }

    let survivors = dedupe(&raw, epsilon);
    let mut candidates: Vec<f64> = survivors
        .into_iter()
        .map(|x| find_stationary(&f, x, cfg.descent()).x)
        .filter(|x| x.is_finite())
        .collect();

    if unbounded {
        candidates = smallest_magnitude(candidates, cfg.unbounded_sample());
    }

    tracing::trace!(
        raw = raw.len(),
        kept = candidates.len(),
        epsilon,
        "stationary_refined"
    );

    PointSet {
        candidates,
        is_unbounded: unbounded,
        evaluations: f.calls(),
        rounds: round,
    }
}
