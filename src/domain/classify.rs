//! Constant / affine detection.
//!
//! Both tests ask whether some derivative is numerically zero across a wide
//! grid, against absolute thresholds widened only by the round-off a
//! central difference of `f` can produce at that point:
//!
//! - constant : `f'`,  noise `ROUNDOFF_ULPS · |f| · ε / h`
//! - affine   : `f''`, noise `ROUNDOFF_ULPS · |f| · ε / h²`, with the wider
//!              curvature step since nested differences at `1e-6` drown in
//!              round-off

use crate::domain::config::ClassifyCfg;
use crate::domain::report::Shape;
use crate::numerics::derivative::{derivative, DEFAULT_STEP};
use crate::numerics::eval::Evaluate;
use crate::numerics::sampling::subdivide;


/// Rounding errors, in units of `ε·|f|`, tolerated per difference quotient.
pub const ROUNDOFF_ULPS: f64 = 4.0;


/// `true` if `(value, magnitude)` pairs are flat under `cfg`'s tolerances.
///
/// `noise` is the round-off allowance per unit of `magnitude`:
/// ├ every `|value| <= loose_tol + noise * magnitude`
/// └ at least `strict_fraction` of them `|value| < strict_tol + noise * magnitude`
///
/// NaN values are never flat. An empty grid is not flat.
pub fn is_flat(pairs: &[(f64, f64)], noise: f64, cfg: &ClassifyCfg) -> bool {
    if pairs.is_empty() {
        return false;
    }

    let mut strict = 0usize;
    for &(value, magnitude) in pairs {
        let slack = noise * magnitude.abs();
        if !(value.abs() <= cfg.loose_tol() + slack) {
            return false;
        }
        if value.abs() < cfg.strict_tol() + slack {
            strict += 1;
        }
    }

    strict as f64 >= cfg.strict_fraction() * pairs.len() as f64
}


/// `true` if `f'` is numerically zero across the grid.
pub fn is_constant<E>(f: &E, cfg: &ClassifyCfg) -> bool
where E: Evaluate + ?Sized {
    let pairs: Vec<(f64, f64)> = subdivide(cfg.low(), cfg.high(), cfg.samples())
        .into_iter()
        .map(|x| (derivative(f, x, DEFAULT_STEP), f.eval(x)))
        .collect();
    is_flat(&pairs, ROUNDOFF_ULPS * f64::EPSILON / DEFAULT_STEP, cfg)
}


/// `true` if `f''` is numerically zero across the grid.
pub fn is_affine<E>(f: &E, cfg: &ClassifyCfg) -> bool
where E: Evaluate + ?Sized {
    let h = cfg.curvature_step();
    let slope = |x: f64| derivative(f, x, h);
    let pairs: Vec<(f64, f64)> = subdivide(cfg.low(), cfg.high(), cfg.samples())
        .into_iter()
        .map(|x| (derivative(&slope, x, h), f.eval(x)))
        .collect();
    is_flat(&pairs, ROUNDOFF_ULPS * f64::EPSILON / (h * h), cfg)
}


/// Classifies `f` as [`Shape::Constant`], [`Shape::Affine`] or
/// [`Shape::General`], checking in that order.
pub fn classify<E>(f: &E, cfg: &ClassifyCfg) -> Shape
where E: Evaluate + ?Sized {
    if is_constant(f, cfg) {
        Shape::Constant
    } else if is_affine(f, cfg) {
        Shape::Affine
    } else {
        Shape::General
    }
}
