//! Adaptive-step gradient descent
//!
//! Used to polish root and stationary-point guesses. The gradient is the
//! central difference from [`derivative`], so the objective only needs to
//! be evaluable, not differentiable in closed form.

use super::derivative::{derivative, DEFAULT_STEP};
use super::errors::DescentError;
use super::eval::{Counted, Evaluate};


/// Reasons a descent stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Measured gradient was exactly zero.
    ZeroGradient,
    /// Step budget exhausted.
    StepLimit,
    /// Position left the allowed magnitude; result reset to the start.
    Diverged,
}


/// Descent configuration.
///
/// # Defaults
/// ┌ `steps`        : 100
/// ├ `initial_rate` : 1e-8
/// ├ `step`         : 1e-6 (finite-difference step for the gradient)
/// ├ `max_position` : 1e18
/// └ `trace`        : off
///
/// # Validation
/// Setters reject invalid values with a [`DescentError`]:
/// ├ `steps`        >= 1
/// ├ `initial_rate` finite and > 0
/// ├ `step`         finite and > 0
/// └ `max_position` > 0 (infinity disables the bound)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DescentCfg {
    steps: usize,
    initial_rate: f64,
    step: f64,
    max_position: f64,
    trace: bool,
}

impl DescentCfg {
    pub const DEFAULT_STEPS: usize = 100;
    pub const DEFAULT_INITIAL_RATE: f64 = 1e-8;
    pub const DEFAULT_MAX_POSITION: f64 = 1e18;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_steps(mut self, v: usize) -> Result<Self, DescentError> {
        if v == 0 {
            return Err(DescentError::InvalidSteps { got: v });
        }
        self.steps = v;
        Ok(self)
    }

    pub fn set_initial_rate(mut self, v: f64) -> Result<Self, DescentError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(DescentError::InvalidRate { got: v });
        }
        self.initial_rate = v;
        Ok(self)
    }

    pub fn set_step(mut self, v: f64) -> Result<Self, DescentError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(DescentError::InvalidStep { got: v });
        }
        self.step = v;
        Ok(self)
    }

    pub fn set_max_position(mut self, v: f64) -> Result<Self, DescentError> {
        if v.is_nan() || v <= 0.0 {
            return Err(DescentError::InvalidMaxPosition { got: v });
        }
        self.max_position = v;
        Ok(self)
    }

    /// Records every accepted objective value in [`DescentReport::trace`].
    #[must_use]
    pub fn with_trace(mut self, on: bool) -> Self { self.trace = on; self }

    #[inline] #[must_use] pub fn steps(&self)        -> usize { self.steps }
    #[inline] #[must_use] pub fn initial_rate(&self) -> f64   { self.initial_rate }
    #[inline] #[must_use] pub fn step(&self)         -> f64   { self.step }
    #[inline] #[must_use] pub fn max_position(&self) -> f64   { self.max_position }
    #[inline] #[must_use] pub fn trace(&self)        -> bool  { self.trace }
}

impl Default for DescentCfg {
    fn default() -> Self {
        Self {
            steps:        Self::DEFAULT_STEPS,
            initial_rate: Self::DEFAULT_INITIAL_RATE,
            step:         DEFAULT_STEP,
            max_position: Self::DEFAULT_MAX_POSITION,
            trace:        false,
        }
    }
}


/// Result of a descent run.
///
/// [`DescentReport`]
/// - `x`           : refined position (the start on divergence)
/// - `value`       : objective at `x`
/// - `iterations`  : steps taken, accepted or not
/// - `evaluations` : evaluator calls spent
/// - `termination` : why it stopped ([`Termination`])
/// - `trace`       : accepted objective values, starting with `objective(start)`;
///                   `None` unless [`DescentCfg::with_trace`] is on
#[derive(Debug, Clone)]
pub struct DescentReport {
    pub x           : f64,
    pub value       : f64,
    pub iterations  : usize,
    pub evaluations : usize,
    pub termination : Termination,
    pub trace       : Option<Vec<f64>>,
}


/// Minimizes `objective` starting from `start`.
///
/// # Behavior
/// - Each step moves `x ← x − rate · objective'(x)`.
/// - Improving moves are kept and double `rate`.
/// - Non-improving moves are reverted and halve `rate`, so the kept
///   objective sequence never increases.
/// - Stops early when the measured gradient is exactly zero.
/// - If a proposed position is non-finite or exceeds `max_position` in
///   magnitude the run is abandoned and `start` is returned with
///   [`Termination::Diverged`].
///
/// # Notes
/// Convergence is not guaranteed; callers re-validate the result.
pub fn descend<E>(objective: &E, start: f64, cfg: &DescentCfg) -> DescentReport
where E: Evaluate + ?Sized {
    let counted = Counted::new(objective);

    let f_start = counted.eval(start);
    let mut trace = cfg.trace.then(|| vec![f_start]);

    let diverged = |iterations: usize, evaluations: usize, trace: Option<Vec<f64>>| {
        DescentReport {
            x           : start,
            value       : f_start,
            iterations,
            evaluations,
            termination : Termination::Diverged,
            trace,
        }
    };

    if !start.is_finite() || start.abs() > cfg.max_position {
        return diverged(0, counted.calls(), trace);
    }

    let mut x    = start;
    let mut fx   = f_start;
    let mut rate = cfg.initial_rate;

    for iter in 1..=cfg.steps {
        let gradient = derivative(&counted, x, cfg.step);
        if gradient == 0.0 {
            return DescentReport {
                x,
                value       : fx,
                iterations  : iter - 1,
                evaluations : counted.calls(),
                termination : Termination::ZeroGradient,
                trace,
            };
        }

        let x_next = x - rate * gradient;
        if !x_next.is_finite() || x_next.abs() > cfg.max_position {
            return diverged(iter, counted.calls(), trace);
        }

        let f_next = counted.eval(x_next);
        if f_next < fx {
            x  = x_next;
            fx = f_next;
            rate *= 2.0;
            if let Some(t) = trace.as_mut() {
                t.push(f_next);
            }
        } else {
            rate *= 0.5;
        }
    }

    DescentReport {
        x,
        value       : fx,
        iterations  : cfg.steps,
        evaluations : counted.calls(),
        termination : Termination::StepLimit,
        trace,
    }
}


/// Refines a root guess of `f` near `start` by minimizing `f(x)²`.
///
/// `evaluations` counts calls to `f`.
pub fn find_zero<E>(f: &E, start: f64, cfg: &DescentCfg) -> DescentReport
where E: Evaluate + ?Sized {
    descend(&|x: f64| f.eval(x).powi(2), start, cfg)
}


/// Refines a stationary-point guess of `f` near `start` by minimizing
/// `f'(x)²`.
///
/// `evaluations` counts calls to `f` (two per objective evaluation).
pub fn find_stationary<E>(f: &E, start: f64, cfg: &DescentCfg) -> DescentReport
where E: Evaluate + ?Sized {
    let counted = Counted::new(f);
    let step = cfg.step;
    let mut report = descend(
        &|x: f64| derivative(&counted, x, step).powi(2),
        start,
        cfg,
    );
    report.evaluations = counted.calls();
    report
}
