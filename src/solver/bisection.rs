use super::config::{SolverCfg, NEAR_ZERO};
use super::driver::{self, eval_checked, StepOutcome};
use super::errors::SolveError;
use super::methods::Method;
use super::report::{IterationRecord, SolveReport};
use crate::expression::{self, ExpressionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error(transparent)]
    Expression(#[from] ExpressionError),

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0")]
    NoSignChange { a: f64, b: f64 },
}

/// Report for an endpoint that is already a root: zero iterations,
/// empty history.
fn endpoint_report(root: f64, evals: usize) -> SolveReport {
    SolveReport {
        value               : root,
        iterations          : 0,
        evaluations         : evals,
        termination_reason  : super::report::TerminationReason::ToleranceReached,
        tolerance_satisfied : super::report::ToleranceSatisfied::AbsFxReached,
        history             : Vec::new(),
        method              : Method::Bisection,
    }
}

/// Finds a root of the compiled expression using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Assumes `f` is continuous on `[a, b]` with `f(a)` and `f(b)` of opposite
/// signs, guaranteeing a root inside the interval.
///
/// # Arguments
/// ┌ `expr` : formula text for `f(x)`
/// ├ `a`    : lower bound. Must be finite and less than `b`
/// ├ `b`    : upper bound. Must be finite and greater than `a`
/// └ `cfg`  : [`SolverCfg`] (tolerance on the half-width, iteration cap)
///
/// # Returns
/// [`SolveReport`] tagged [`Method::Bisection`] with
/// - `value`   : approximate root (midpoint of the final interval, or the
///               exact-hit midpoint)
/// - `history` : one [`IterationRecord::Bisection`] per step
///               (k, a, b, c, f(c), error) where a/b are the bounds *before*
///               the shrink and error is the post-shrink half-width
///
/// # Errors
/// ┌ [`BisectionError::InvalidBounds`] : `a`/`b` NaN/inf or `a >= b`
/// ├ [`BisectionError::NoSignChange`]  : `f(a) * f(b) > 0` at the start
/// │
/// * Propagated via [`BisectionError::Expression`] / [`BisectionError::Solve`]
/// ├ [`ExpressionError`]                  : formula text does not compile
/// └ [`SolveError::NonFiniteEvaluation`]  : `f(x)` produced NaN/inf
///
/// # Behavior
/// Each iteration checks, in order:
/// ├ exact-root hit: |f(c)| below the fixed near-zero threshold converges
/// │   immediately on `c` ([`AbsFxReached`])
/// └ half-width rule: (b - a) / 2 <= `cfg.tol()` after the shrink
///   ([`HalfWidthReached`])
///
/// An endpoint whose function value is already below the near-zero
/// threshold is returned immediately with zero iterations and an empty
/// history; the sign-change guard only rejects strictly positive products.
///
/// [`AbsFxReached`]: super::report::ToleranceSatisfied::AbsFxReached
/// [`HalfWidthReached`]: super::report::ToleranceSatisfied::HalfWidthReached
pub fn bisection(expr: &str, a: f64, b: f64, cfg: SolverCfg) -> Result<SolveReport, BisectionError> {
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let f = expression::compile(expr)?;

    let mut evals = 0;

    // an endpoint that is already a root short-circuits before the
    // sign-change guard; a zero product would otherwise let the shrink
    // rule drift away from it
    let fa = eval_checked(&f, a, &mut evals)?;
    if fa.abs() < NEAR_ZERO {
        return Ok(endpoint_report(a, evals));
    }
    let fb = eval_checked(&f, b, &mut evals)?;
    if fb.abs() < NEAR_ZERO {
        return Ok(endpoint_report(b, evals));
    }

    if fa * fb > 0.0 {
        return Err(BisectionError::NoSignChange { a, b });
    }

    let mut report = driver::drive(
        Method::Bisection,
        (a, fa, b),
        a + (b - a) * 0.5,
        &cfg,
        |k, (a, fa, b)| -> Result<StepOutcome<(f64, f64, f64)>, BisectionError> {
            let c = a + (b - a) * 0.5;
            let fc = eval_checked(&f, c, &mut evals)?;

            // exact-root hit, checked before the half-width rule
            if fc.abs() < NEAR_ZERO {
                return Ok(StepOutcome::RootHit {
                    record: IterationRecord::Bisection {
                        k,
                        a,
                        b,
                        c,
                        f_c: fc,
                        error: (b - a) * 0.5,
                    },
                    value: c,
                });
            }

            let (a2, fa2, b2) = if fa * fc < 0.0 { (a, fa, c) } else { (c, fc, b) };
            let error = (b2 - a2) * 0.5;

            Ok(StepOutcome::Advance {
                state: (a2, fa2, b2),
                record: IterationRecord::Bisection { k, a, b, c, f_c: fc, error },
                value: a2 + (b2 - a2) * 0.5,
                error,
            })
        },
    )?;
    report.evaluations = evals;

    Ok(report)
}
