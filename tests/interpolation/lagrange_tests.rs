//! tests for Lagrange interpolation
use riza::interpolation::lagrange::{interpolate, interpolate_at};
use riza::interpolation::InterpolationError;

type TestResult = Result<(), InterpolationError>;

#[test]
fn exact_at_every_node() -> TestResult {
    let x = [0.0, 1.0, 2.5, 4.0];
    let y = [1.0, -2.0, 0.5, 3.0];

    for (xi, yi) in x.iter().zip(y.iter()) {
        let v = interpolate_at(*xi, &x, &y)?;
        assert!((v - yi).abs() < 1e-10);
    }
    Ok(())
}

#[test]
fn reproduces_a_quadratic() -> TestResult {
    // three nodes pin down x^2 - 3x + 1 exactly
    let f = |t: f64| t * t - 3.0 * t + 1.0;
    let x = [-1.0, 0.5, 3.0];
    let y = [f(-1.0), f(0.5), f(3.0)];

    for q in [-2.0, 0.0, 1.7, 2.9, 5.0] {
        let v = interpolate_at(q, &x, &y)?;
        assert!((v - f(q)).abs() < 1e-9);
    }
    Ok(())
}

#[test]
fn single_node_is_a_constant() -> TestResult {
    assert_eq!(interpolate_at(-100.0, &[2.0], &[7.0])?, 7.0);
    assert_eq!(interpolate_at(100.0, &[2.0], &[7.0])?, 7.0);
    Ok(())
}

#[test]
fn unsorted_nodes_accepted() -> TestResult {
    let f = |t: f64| 2.0 * t - 5.0;
    let x = [3.0, -1.0, 0.0];
    let y = [f(3.0), f(-1.0), f(0.0)];

    let v = interpolate_at(1.5, &x, &y)?;
    assert!((v - f(1.5)).abs() < 1e-10);
    Ok(())
}

#[test]
fn extrapolation_outside_node_range() -> TestResult {
    let f = |t: f64| t * t;
    let x = [0.0, 1.0, 2.0];
    let y = [f(0.0), f(1.0), f(2.0)];

    let v = interpolate_at(10.0, &x, &y)?;
    assert!((v - 100.0).abs() < 1e-8);
    Ok(())
}

#[test]
fn multi_point_report_fields() -> TestResult {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0, 4.0];
    let xq = [0.5, 1.5];

    let report = interpolate(&xq, &x, &y)?;
    assert_eq!(report.algorithm_name, "lagrange");
    assert_eq!(report.n_provided, 3);
    assert_eq!(report.n_evaluated, 2);
    assert_eq!(report.evaluated.len(), 2);
    // interpolant of x^2 through these nodes
    assert!((report.evaluated[0] - 0.25).abs() < 1e-10);
    assert!((report.evaluated[1] - 2.25).abs() < 1e-10);
    Ok(())
}

#[test]
fn empty_query_slice_is_allowed() -> TestResult {
    let report = interpolate(&[], &[0.0, 1.0], &[1.0, 2.0])?;
    assert_eq!(report.n_evaluated, 0);
    assert!(report.evaluated.is_empty());
    Ok(())
}

#[test]
fn adjacent_duplicate_nodes_rejected() {
    let err = interpolate_at(0.5, &[1.0, 1.0, 2.0], &[0.0, 0.0, 0.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { i: 0, j: 1, .. }));
}

#[test]
fn non_adjacent_duplicate_nodes_rejected() {
    // distinctness is pairwise, not neighbor-only
    let err = interpolate_at(0.5, &[1.0, 2.0, 1.0], &[0.0, 0.0, 0.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { i: 0, j: 2, .. }));
}

#[test]
fn nearly_coincident_nodes_rejected() {
    let err = interpolate_at(0.5, &[1.0, 1.0 + 1e-15], &[0.0, 1.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));
}

#[test]
fn unequal_lengths_rejected() {
    let err = interpolate_at(0.5, &[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::UnequalLength { x_len: 3, y_len: 2 }
    ));
}

#[test]
fn empty_nodes_rejected() {
    let err = interpolate_at(0.5, &[], &[]).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
}

#[test]
fn non_finite_node_rejected() {
    let err = interpolate_at(0.5, &[0.0, f64::NAN], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));
}

#[test]
fn non_finite_value_rejected() {
    let err = interpolate_at(0.5, &[0.0, 1.0], &[1.0, f64::INFINITY]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));
}

#[test]
fn non_finite_query_rejected() {
    let err = interpolate_at(f64::NAN, &[0.0, 1.0], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteQuery { .. }));

    let err = interpolate(&[0.5, f64::INFINITY], &[0.0, 1.0], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteQuery { .. }));
}
