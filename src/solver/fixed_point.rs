//! Fixed-point iteration

use super::config::SolverCfg;
use super::driver::{self, eval_checked, StepOutcome};
use super::errors::SolveError;
use super::methods::Method;
use super::report::{IterationRecord, SolveReport};
use crate::expression::{self, ExpressionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixedPointError {
    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error(transparent)]
    Expression(#[from] ExpressionError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },
}

/// Finds a fixed point of `g` — an `x` with `g(x) = x` — by direct
/// [fixed-point iteration](https://en.wikipedia.org/wiki/Fixed-point_iteration).
///
/// # Arguments
/// ┌ `expr` : formula text for the iteration function `g(x)`
/// ├ `x0`   : finite initial guess
/// └ `cfg`  : [`SolverCfg`] (tolerance, iteration cap)
///
/// # Returns
/// [`SolveReport`] tagged [`Method::FixedPoint`]; history rows are
/// [`IterationRecord::FixedPoint`] (k, x_k, g(x_k), error).
///
/// # Errors
/// ┌ [`FixedPointError::InvalidGuess`]    : `x0` non-finite
/// ├ [`ExpressionError`] (transparent)    : formula does not compile
/// └ [`SolveError::NonFiniteEvaluation`] (transparent) : `g(x)` NaN/inf
///
/// # Behavior
/// - Update: x2 = g(x1); error measure |x2 - x1|
/// - No degenerate-step failure exists for this method; divergence shows up
///   as [`TerminationReason::IterationLimit`] with the full trace.
/// - Converges when |g'| < 1 near the fixed point; otherwise iterates
///   wander or oscillate until the cap.
///
/// [`TerminationReason::IterationLimit`]: super::report::TerminationReason::IterationLimit
pub fn fixed_point(expr: &str, x0: f64, cfg: SolverCfg) -> Result<SolveReport, FixedPointError> {
    if !x0.is_finite() {
        return Err(FixedPointError::InvalidGuess { x0 });
    }

    let g = expression::compile(expr)?;

    let mut evals = 0;
    let mut report = driver::drive(
        Method::FixedPoint,
        x0,
        x0,
        &cfg,
        |k, x| -> Result<StepOutcome<f64>, FixedPointError> {
            let x2 = eval_checked(&g, x, &mut evals)?;
            let gx2 = eval_checked(&g, x2, &mut evals)?;
            let error = (x2 - x).abs();

            Ok(StepOutcome::Advance {
                state: x2,
                record: IterationRecord::FixedPoint { k, x_k: x2, g_x_k: gx2, error },
                value: x2,
                error,
            })
        },
    )?;
    report.evaluations = evals;

    Ok(report)
}
