//! Numerical primitive error types.
//!
//! [`DescentError`] : invalid optimizer or derivative settings
//!  ├ non-positive step budget
//!  ├ non-finite or non-positive rate / difference step
//!  └ non-positive divergence bound
//!
//! The primitives themselves never fail at run time; only configuration
//! can be rejected.

use thiserror::Error;


#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DescentError {
    #[error("invalid steps: must be >= 1. got steps={got}")]
    InvalidSteps { got: usize },

    #[error("invalid initial rate: must be finite and > 0. got {got}")]
    InvalidRate { got: f64 },

    #[error("invalid difference step: must be finite and > 0. got {got}")]
    InvalidStep { got: f64 },

    #[error("invalid max position: must be > 0 (may be infinite). got {got}")]
    InvalidMaxPosition { got: f64 },
}
