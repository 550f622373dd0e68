//! Newton-Raphson method

use super::config::{SolverCfg, NEAR_ZERO};
use super::driver::{self, eval_checked, StepOutcome};
use super::errors::SolveError;
use super::methods::Method;
use super::report::{IterationRecord, SolveReport};
use crate::expression::{self, ExpressionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error(transparent)]
    Expression(#[from] ExpressionError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("derivative near zero at x={x}, f'(x)={dfx}; likely a local extremum or inflection point, try another x0")]
    DerivativeNearZero { x: f64, dfx: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },
}

/// Finds a root of the compiled expression using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton_method).
/// The derivative is computed symbolically from the formula text, so the
/// caller never supplies `f'`.
///
/// # Arguments
/// ┌ `expr` : formula text for `f(x)`; must be differentiable by the
/// │          supported rule set (see [`Expr::derivative`])
/// ├ `x0`   : finite initial guess
/// └ `cfg`  : [`SolverCfg`] (tolerance, iteration cap)
///
/// # Returns
/// [`SolveReport`] tagged [`Method::NewtonRaphson`] with
/// - `value`   : approximate root
/// - `history` : one [`IterationRecord::Newton`] per step
///               (k, x_k, f(x_k), f'(x_k), error)
///
/// # Errors
/// ┌ [`NewtonError::InvalidGuess`]        : `x0` non-finite
/// ├ [`NewtonError::DerivativeNearZero`]  : |f'(x)| below the near-zero
/// │                                        threshold mid-iteration
/// ├ [`NewtonError::DerivativeNotFinite`] : f'(x) produced NaN/inf
/// │
/// * Propagated via [`NewtonError::Expression`]
/// ├ [`ExpressionError`] : formula does not compile, or has no closed-form
/// │                       derivative (e.g. contains `abs`)
/// * Propagated via [`NewtonError::Solve`]
/// └ [`SolveError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
///
/// # Behavior
/// - Update: x2 = x1 - f(x1) / f'(x1); error measure |x2 - x1|
/// - The derivative tree is built once per call, not per iteration
/// - Convergence is local only; poor guesses can diverge or cycle. For
///   guaranteed convergence use the bracketing [`bisection`] method.
///
/// [`Expr::derivative`]: crate::expression::Expr::derivative
/// [`bisection`]: super::bisection::bisection
pub fn newton_raphson(expr: &str, x0: f64, cfg: SolverCfg) -> Result<SolveReport, NewtonError> {
    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    let f = expression::compile(expr)?;
    let df = f.derivative()?;

    let mut evals = 0;
    let mut report = driver::drive(Method::NewtonRaphson, x0, x0, &cfg, |k, x| {
        let fx = eval_checked(&f, x, &mut evals)?;

        let dfx = {
            evals += 1;
            df.eval(x)
        };
        if !dfx.is_finite() {
            return Err(NewtonError::DerivativeNotFinite { x, dfx });
        }
        if dfx.abs() < NEAR_ZERO {
            return Err(NewtonError::DerivativeNearZero { x, dfx });
        }

        let x2 = x - fx / dfx;
        let fx2 = eval_checked(&f, x2, &mut evals)?;
        let error = (x2 - x).abs();

        Ok(StepOutcome::Advance {
            state: x2,
            record: IterationRecord::Newton { k, x_k: x2, f_x_k: fx2, df_x_k: dfx, error },
            value: x2,
            error,
        })
    })?;
    report.evaluations = evals;

    Ok(report)
}
