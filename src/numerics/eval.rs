//! Evaluation capability shared by every search in the crate.
//!
//! - [`Evaluate`] : anything that maps `f64 -> f64` (closures included)
//! - [`Counted`]  : wrapper that tallies evaluator calls
//!
//! Evaluators are expected to be total: singular points should return a
//! finite sentinel instead of panicking.

use std::cell::Cell;


/// A scalar function `f(x) -> y`.
///
/// Implemented for every `Fn(f64) -> f64`, so plain closures can be passed
/// anywhere an evaluator is expected. Composite evaluators such as
/// [`Derivative`](super::derivative::Derivative) implement it directly.
pub trait Evaluate {
    fn eval(&self, x: f64) -> f64;
}

impl<F> Evaluate for F
where F: Fn(f64) -> f64 {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}


/// Counts calls made through it to the wrapped evaluator.
///
/// Interior mutability keeps `eval(&self)` usable from shared borrows;
/// a `Counted` is never shared across threads.
#[derive(Debug)]
pub struct Counted<'a, E: ?Sized> {
    inner: &'a E,
    calls: Cell<usize>,
}

impl<'a, E: Evaluate + ?Sized> Counted<'a, E> {
    pub fn new(inner: &'a E) -> Self {
        Self { inner, calls: Cell::new(0) }
    }

    /// Number of evaluations made so far.
    #[inline]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<E: Evaluate + ?Sized> Evaluate for Counted<'_, E> {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self.calls.set(self.calls.get() + 1);
        self.inner.eval(x)
    }
}
