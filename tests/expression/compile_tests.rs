//! tests for expression compilation and evaluation
use riza::expression::{compile, ExpressionError};

type TestResult = Result<(), ExpressionError>;

#[test]
fn evaluates_polynomial() -> TestResult {
    let f = compile("x^2 + 3*x - 1")?;
    assert_eq!(f.eval(2.0), 9.0);
    assert_eq!(f.eval(0.0), -1.0);
    Ok(())
}

#[test]
fn evaluates_trig_and_exp() -> TestResult {
    let f = compile("sin(x) + cos(x)")?;
    assert!((f.eval(0.0) - 1.0).abs() < 1e-15);

    let g = compile("exp(x) - 1")?;
    assert!((g.eval(0.0)).abs() < 1e-15);

    let h = compile("tan(x)")?;
    assert!((h.eval(std::f64::consts::FRAC_PI_4) - 1.0).abs() < 1e-12);
    Ok(())
}

#[test]
fn constants_pi_and_e() -> TestResult {
    let f = compile("sin(pi)")?;
    assert!(f.eval(0.0).abs() < 1e-12);

    let g = compile("log(e)")?;
    assert!((g.eval(0.0) - 1.0).abs() < 1e-15);
    Ok(())
}

#[test]
fn exponent_literal_does_not_swallow_constant_e() -> TestResult {
    // `2e3` is a number; `2*e` is the constant
    let f = compile("2e3")?;
    assert_eq!(f.eval(0.0), 2000.0);

    let g = compile("2*e")?;
    assert!((g.eval(0.0) - 2.0 * std::f64::consts::E).abs() < 1e-12);
    Ok(())
}

#[test]
fn power_is_right_associative() -> TestResult {
    let f = compile("2^3^2")?;
    assert_eq!(f.eval(0.0), 512.0);
    Ok(())
}

#[test]
fn unary_minus_binds_correctly() -> TestResult {
    let f = compile("-x^2")?;
    assert_eq!(f.eval(3.0), -9.0);

    let g = compile("x^-1")?;
    assert_eq!(g.eval(4.0), 0.25);

    let h = compile("-(x + 1)")?;
    assert_eq!(h.eval(2.0), -3.0);
    Ok(())
}

#[test]
fn nested_function_calls() -> TestResult {
    let f = compile("sqrt(abs(x))")?;
    assert_eq!(f.eval(-9.0), 3.0);
    Ok(())
}

#[test]
fn out_of_domain_yields_non_finite_not_error() -> TestResult {
    let f = compile("sqrt(x)")?;
    assert!(f.eval(-1.0).is_nan());

    let g = compile("1/x")?;
    assert!(g.eval(0.0).is_infinite());
    Ok(())
}

#[test]
fn empty_text_rejected() {
    assert!(matches!(compile(""), Err(ExpressionError::Empty)));
    assert!(matches!(compile("   "), Err(ExpressionError::Empty)));
}

#[test]
fn unknown_identifier_rejected() {
    let err = compile("foo(x)").unwrap_err();
    assert!(matches!(err, ExpressionError::UnknownIdentifier { name } if name == "foo"));
}

#[test]
fn function_without_parens_rejected() {
    let err = compile("sin x").unwrap_err();
    assert!(matches!(err, ExpressionError::MissingArgument { name } if name == "sin"));
}

#[test]
fn dangling_operator_rejected() {
    assert!(matches!(compile("2 +"), Err(ExpressionError::UnexpectedEnd)));
}

#[test]
fn unbalanced_parens_rejected() {
    assert!(matches!(compile("(x + 1"), Err(ExpressionError::UnbalancedParens)));
    assert!(matches!(compile("sin(x"), Err(ExpressionError::UnbalancedParens)));
}

#[test]
fn trailing_garbage_rejected() {
    assert!(matches!(compile("x 3"), Err(ExpressionError::UnexpectedToken { .. })));
}

#[test]
fn unexpected_character_rejected() {
    let err = compile("x $ 2").unwrap_err();
    assert!(matches!(err, ExpressionError::UnexpectedChar { ch: '$', .. }));
}
