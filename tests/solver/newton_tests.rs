//! tests for the Newton-Raphson method
use riza::expression::ExpressionError;
use riza::solver::newton::{newton_raphson, NewtonError};
use riza::solver::{IterationRecord, SolverCfg, TerminationReason};

type TestResult = Result<(), NewtonError>;

#[test]
fn finds_sqrt_2_with_default_tolerance_quickly() -> TestResult {
    let res = newton_raphson("x^2 - 2", 1.0, SolverCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!((res.value - 1.414214).abs() < 1e-5);
    assert!(res.iterations < 10);
    Ok(())
}

#[test]
fn finds_cube_root() -> TestResult {
    let cfg = SolverCfg::new().set_tol(1e-12)?.set_max_iter(50)?;
    let res = newton_raphson("x^3 - 8", 3.0, cfg)?;

    assert!((res.value - 2.0).abs() < 1e-10);
    Ok(())
}

#[test]
fn derivative_is_computed_symbolically() -> TestResult {
    let cfg = SolverCfg::new().set_tol(1e-10)?;
    let res = newton_raphson("x^2 - 2", 1.0, cfg)?;

    // records carry f'(x_k) = 2 x evaluated at the *previous* iterate
    let first = res.history[0];
    match first {
        IterationRecord::Newton { df_x_k, .. } => assert_eq!(df_x_k, 2.0),
        _ => panic!("expected newton records"),
    }
    Ok(())
}

#[test]
fn records_follow_the_newton_update() -> TestResult {
    let cfg = SolverCfg::new().set_tol(1e-10)?;
    let res = newton_raphson("x^2 - 2", 1.0, cfg)?;

    assert_eq!(res.column_labels(), &["k", "x_k", "f(x_k)", "f'(x_k)", "error"]);

    let mut prev = 1.0;
    for rec in &res.history {
        match *rec {
            IterationRecord::Newton { x_k, df_x_k, error, .. } => {
                let expected = prev - (prev * prev - 2.0) / df_x_k;
                assert!((x_k - expected).abs() < 1e-12);
                assert!((error - (x_k - prev).abs()).abs() < 1e-12);
                prev = x_k;
            }
            _ => panic!("expected newton records"),
        }
    }
    Ok(())
}

#[test]
fn vanishing_derivative_rejected() {
    // f'(x) = 2x is zero at the initial guess
    let err = newton_raphson("x^2", 0.0, SolverCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::DerivativeNearZero { x, .. } if x == 0.0));
}

#[test]
fn non_finite_derivative_rejected() {
    // f'(x) = 1 / (2 sqrt(x)) blows up at the guess
    let err = newton_raphson("sqrt(x)", 0.0, SolverCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::DerivativeNotFinite { .. }));
}

#[test]
fn non_differentiable_formula_rejected() {
    let err = newton_raphson("abs(x)", 1.0, SolverCfg::new()).unwrap_err();
    assert!(matches!(
        err,
        NewtonError::Expression(ExpressionError::NonDifferentiable { what: "abs" })
    ));
}

#[test]
fn invalid_formula_rejected() {
    let err = newton_raphson("x +", 1.0, SolverCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::Expression(_)));
}

#[test]
fn non_finite_guess_rejected() {
    let err = newton_raphson("x", f64::INFINITY, SolverCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::InvalidGuess { .. }));
}

#[test]
fn iteration_limit_reports_exhaustion() -> TestResult {
    // x^2 + 1 has no real root; Newton wanders until the cap
    let cfg = SolverCfg::new().set_tol(1e-30)?.set_max_iter(8)?;
    let res = newton_raphson("x^2 + 1", 0.5, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 8);
    assert_eq!(res.history.len(), 8);
    Ok(())
}

#[test]
fn counts_function_and_derivative_evaluations() -> TestResult {
    let cfg = SolverCfg::new().set_tol(1e-10)?;
    let res = newton_raphson("x^2 - 2", 1.0, cfg)?;

    // f(x), f'(x), and f(x2) per iteration
    assert_eq!(res.evaluations, 3 * res.iterations);
    Ok(())
}
