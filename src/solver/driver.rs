//! Shared convergence-loop skeleton.
//!
//! All iterative methods share the same stopping policy: run a
//! method-specific step up to `max_iter` times, append an
//! [`IterationRecord`] per step, stop when the step's error measure falls
//! within tolerance. The step formula is the only thing that differs, so it
//! is supplied as a closure and everything else lives here once.

use super::config::SolverCfg;
use super::methods::Method;
use super::report::{IterationRecord, SolveReport, TerminationReason, ToleranceSatisfied};

/// Outcome of one method-specific step.
///
/// ├ `Advance` : normal step; driver records it, checks `error <= tol`,
/// │             and either converges on `value` or continues from `state`
/// └ `RootHit` : immediate converged short-circuit (|f(c)| effectively
///               zero); checked by the step before its tolerance rule
pub(crate) enum StepOutcome<S> {
    Advance {
        state: S,
        record: IterationRecord,
        value: f64,
        error: f64,
    },
    RootHit {
        record: IterationRecord,
        value: f64,
    },
}

/// Drives `step` until convergence, hard failure, or iteration exhaustion.
///
/// # Arguments
/// ├ `method`        : tag carried into the report (record/label selection)
/// ├ `state`         : method-specific seed state
/// ├ `initial_value` : reported estimate if the cap is hit with no steps
/// ├ `cfg`           : validated tolerance and iteration cap
/// └ `step`          : per-iteration update; `Err` aborts the run
///
/// # Returns
/// ├ `Ok(report)` with [`TerminationReason::ToleranceReached`] on success
/// ├ `Ok(report)` with [`TerminationReason::IterationLimit`] on exhaustion
/// │   (not an error; the report carries the last estimate and full history)
/// └ `Err(e)` propagated from the step (degenerate denominator, non-finite
///     evaluation); partial history is discarded
///
/// The caller owns evaluation counting; `evaluations` is left at 0 here and
/// patched by each method after the run.
pub(crate) fn drive<S, E, F>(
    method: Method,
    mut state: S,
    initial_value: f64,
    cfg: &SolverCfg,
    mut step: F,
) -> Result<SolveReport, E>
where
    F: FnMut(usize, S) -> Result<StepOutcome<S>, E>,
{
    let tol = cfg.tol();
    let max_iter = cfg.max_iter();

    let converged_via = match method {
        Method::Bisection => ToleranceSatisfied::HalfWidthReached,
        _                 => ToleranceSatisfied::StepSizeReached,
    };

    let mut history = Vec::new();
    let mut value = initial_value;

    for k in 1..=max_iter {
        match step(k, state)? {
            StepOutcome::RootHit { record, value } => {
                history.push(record);
                return Ok(SolveReport {
                    value,
                    iterations          : k,
                    evaluations         : 0,
                    termination_reason  : TerminationReason::ToleranceReached,
                    tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
                    history,
                    method,
                });
            }

            StepOutcome::Advance { state: next, record, value: v, error } => {
                history.push(record);
                value = v;

                if error <= tol {
                    return Ok(SolveReport {
                        value,
                        iterations          : k,
                        evaluations         : 0,
                        termination_reason  : TerminationReason::ToleranceReached,
                        tolerance_satisfied : converged_via,
                        history,
                        method,
                    });
                }

                state = next;
            }
        }
    }

    Ok(SolveReport {
        value,
        iterations          : max_iter,
        evaluations         : 0,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        history,
        method,
    })
}

/// Evaluates `expr` at `x` with a finiteness check, counting the evaluation.
///
/// # Returns
/// ├ `Ok(fx)` if the evaluation is finite
/// └ `Err(SolveError::NonFiniteEvaluation)` otherwise
#[inline]
pub(crate) fn eval_checked(
    expr: &crate::expression::Expr,
    x: f64,
    evals: &mut usize,
) -> Result<f64, super::errors::SolveError> {
    *evals += 1;
    let fx = expr.eval(x);
    if !fx.is_finite() {
        return Err(super::errors::SolveError::NonFiniteEvaluation { x, fx });
    }
    Ok(fx)
}
