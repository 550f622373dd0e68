use super::config::{SolverCfg, NEAR_ZERO};
use super::driver::{self, eval_checked, StepOutcome};
use super::errors::SolveError;
use super::methods::Method;
use super::report::{IterationRecord, SolveReport};
use crate::expression::{self, ExpressionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecantError {
    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error(transparent)]
    Expression(#[from] ExpressionError),

    #[error("invalid initial guesses: x0 and x1 must be finite and distinct. got x0={x0}, x1={x1}")]
    InvalidGuess { x0: f64, x1: f64 },

    #[error("degenerate secant step: |f(x1) - f(x0)| near zero, f(x0)={fx0}, f(x1)={fx1}")]
    DegenerateStep { fx0: f64, fx1: f64 },
}

/// Finds a root of the compiled expression using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// ┌ `expr` : formula text for `f(x)` (compiled via [`expression::compile`])
/// ├ `x0`   : first initial guess. Must be finite and not equal to `x1`
/// ├ `x1`   : second initial guess. Must be finite and not equal to `x0`
/// └ `cfg`  : [`SolverCfg`] (tolerance, iteration cap)
///
/// # Returns
/// [`SolveReport`] tagged [`Method::Secant`] with
/// - `value`   : approximate root
/// - `history` : one [`IterationRecord::Secant`] per step (k, x_k, f(x_k), error)
/// - exhaustion of the iteration cap is reported, not an error
///
/// # Errors
/// ┌ [`SecantError::InvalidGuess`]    : `x0`/`x1` non-finite or equal
/// ├ [`SecantError::DegenerateStep`]  : secant denominator collapses below
/// │                                    the fixed near-zero threshold
/// │
/// * Propagated via [`SecantError::Expression`]
/// ├ [`ExpressionError`]              : formula text does not compile
/// * Propagated via [`SecantError::Solve`]
/// └ [`SolveError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
///
/// # Behavior
/// - Update: x2 = x1 - (x1 - x0) * f(x1) / (f(x1) - f(x0))
/// - Error measure: |x2 - x1|, compared against `cfg.tol()`
/// - Function values are carried between steps; each iteration costs one
///   new evaluation after the two seed evaluations.
pub fn secant(expr: &str, x0: f64, x1: f64, cfg: SolverCfg) -> Result<SolveReport, SecantError> {
    if !(x0.is_finite() && x1.is_finite()) || x0 == x1 {
        return Err(SecantError::InvalidGuess { x0, x1 });
    }

    let f = expression::compile(expr)?;

    let mut evals = 0;
    let fx0 = eval_checked(&f, x0, &mut evals)?;
    let fx1 = eval_checked(&f, x1, &mut evals)?;

    let mut report = driver::drive(
        Method::Secant,
        ((x0, fx0), (x1, fx1)),
        x1,
        &cfg,
        |k, ((x0, fx0), (x1, fx1))| {
            let denom = fx1 - fx0;
            if denom.abs() < NEAR_ZERO {
                return Err(SecantError::DegenerateStep { fx0, fx1 });
            }

            let x2 = x1 - (x1 - x0) * fx1 / denom;
            let fx2 = eval_checked(&f, x2, &mut evals)?;
            let error = (x2 - x1).abs();

            Ok(StepOutcome::Advance {
                state: ((x1, fx1), (x2, fx2)),
                record: IterationRecord::Secant { k, x_k: x2, f_x_k: fx2, error },
                value: x2,
                error,
            })
        },
    )?;
    report.evaluations = evals;

    Ok(report)
}
