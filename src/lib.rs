//! Automatic plot framing for black-box scalar functions.
//!
//! ┌ [`numerics`] : derivative, local descent, deduplication, sampling grids
//! └ [`domain`]   : stationary-point search, zero search, range orchestration
//!
//! The entry point is [`domain::range::determine_range`], which picks an
//! x-interval showing a function's roots, extrema and inflections.
//!
//! ```
//! use plotdomain::domain::range::determine_range;
//!
//! let range = determine_range(|x: f64| (x - 5.0) * (x - 5.0) + 8.0);
//! assert!(range.lo < 5.0 && range.hi > 5.0);
//! ```

pub mod numerics;
pub mod domain;
