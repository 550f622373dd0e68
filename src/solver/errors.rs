//! Shared solver error types.
//!
//! ┌ invalid global parameters (tolerance, max_iter)
//! └ non-finite function evaluation mid-run
//!
//! Method-specific failures (degenerate secant denominator, missing sign
//! change, vanishing derivative) live in each method's own error enum and
//! wrap [`SolveError`] transparently.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },
}
