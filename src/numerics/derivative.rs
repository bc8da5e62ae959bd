//! Central finite-difference derivative.
//!
//! `f'(x) ≈ (f(x + h) - f(x - h)) / (2h)`
//!
//! [`derivative`] evaluates the difference at a single point. [`Derivative`]
//! bundles a borrowed evaluator with its step so it can itself be passed
//! anywhere an [`Evaluate`] is expected, including to another
//! [`Derivative`] for curvature.

use super::errors::DescentError;
use super::eval::Evaluate;


/// Default finite-difference step.
pub const DEFAULT_STEP: f64 = 1e-6;


/// Central difference of `f` at `x` with step `step`.
#[inline]
pub fn derivative<E>(f: &E, x: f64, step: f64) -> f64
where E: Evaluate + ?Sized {
    (f.eval(x + step) - f.eval(x - step)) * (0.5 / step)
}


/// Derivative operator over a borrowed evaluator.
///
/// ```
/// use plotdomain::numerics::derivative::Derivative;
/// use plotdomain::numerics::eval::Evaluate;
///
/// let f  = |x: f64| x * x;
/// let df = Derivative::new(&f);
/// assert!((df.eval(2.0) - 4.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Derivative<'a, E: ?Sized> {
    f: &'a E,
    step: f64,
}

impl<'a, E: Evaluate + ?Sized> Derivative<'a, E> {
    #[must_use]
    pub fn new(f: &'a E) -> Self {
        Self { f, step: DEFAULT_STEP }
    }

    /// Replaces the difference step. Must be finite and > 0.
    pub fn set_step(mut self, v: f64) -> Result<Self, DescentError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(DescentError::InvalidStep { got: v });
        }
        self.step = v;
        Ok(self)
    }

    #[inline]
    pub fn step(&self) -> f64 { self.step }
}

impl<E: Evaluate + ?Sized> Evaluate for Derivative<'_, E> {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        derivative(self.f, x, self.step)
    }
}
