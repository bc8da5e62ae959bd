//! Domain-finding configuration errors.
//!
//! ┌ [`ConfigError`] : invalid search settings
//! │   ├ sampling grid (`cuts`, `cuts_divisor`, `samples`)
//! │   ├ budgets (`max_depth`, `max_point_count`, `max_evaluations`)
//! │   ├ seed interval / padding / residual factor
//! │   └ descent settings, via [`DescentError`]
//! │
//! └ searches themselves never fail: degenerate inputs fall back to
//!   default windows instead.

use thiserror::Error;
use crate::numerics::errors::DescentError;


#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error(transparent)]
    Descent(#[from] DescentError),

    #[error("invalid seed interval: bounds must be finite with low < high. got [{low}, {high}]")]
    InvalidInterval { low: f64, high: f64 },

    #[error("invalid cuts: must be >= 3. got cuts={got}")]
    InvalidCuts { got: usize },

    #[error("invalid cuts divisor: must be >= 2. got cuts_divisor={got}")]
    InvalidCutsDivisor { got: usize },

    #[error("invalid max depth: must be >= 1. got max_depth={got}")]
    InvalidMaxDepth { got: usize },

    #[error("invalid max point count: must be >= 1. got max_point_count={got}")]
    InvalidMaxPointCount { got: usize },

    #[error("invalid max evaluations: must be >= 1. got max_evaluations={got}")]
    InvalidMaxEvaluations { got: usize },

    #[error("invalid unbounded sample size: must be >= 1. got {got}")]
    InvalidUnboundedSample { got: usize },

    #[error("invalid sample count: must be >= {min}. got samples={got}")]
    InvalidSamples { got: usize, min: usize },

    #[error("invalid candidate count: must be >= 1. got candidates={got}")]
    InvalidCandidates { got: usize },

    #[error("invalid residual factor: must be finite and >= 1. got {got}")]
    InvalidResidualFactor { got: f64 },

    #[error("invalid padding: must be finite and >= 0. got {got}")]
    InvalidPadding { got: f64 },

    #[error("invalid flatness tolerance: must be finite and > 0. got {got}")]
    InvalidFlatTolerance { got: f64 },

    #[error("invalid flat fraction: must be in (0, 1]. got {got}")]
    InvalidFlatFraction { got: f64 },
}
