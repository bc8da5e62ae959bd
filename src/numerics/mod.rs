// common helpers
pub mod errors;
pub mod eval;
pub mod sampling;
pub(crate) mod signs;

// primitives
pub mod derivative;
pub mod descent;
pub mod dedupe;
