//! tests for numeric list parsing
use riza::sequence::{parse_numeric_list, SequenceError};

type TestResult = Result<(), SequenceError>;

#[test]
fn comma_separated() -> TestResult {
    assert_eq!(parse_numeric_list("1, 2, 3")?, vec![1.0, 2.0, 3.0]);
    Ok(())
}

#[test]
fn bracketed_whitespace_separated() -> TestResult {
    assert_eq!(parse_numeric_list("[1 2 3]")?, vec![1.0, 2.0, 3.0]);
    Ok(())
}

#[test]
fn mixed_separators_and_padding() -> TestResult {
    assert_eq!(
        parse_numeric_list("  [ 1,2  3.5 ,, -4 ] ")?,
        vec![1.0, 2.0, 3.5, -4.0]
    );
    Ok(())
}

#[test]
fn scientific_notation_and_signs() -> TestResult {
    assert_eq!(
        parse_numeric_list("1e3, -2.5e-2, +0.5")?,
        vec![1000.0, -0.025, 0.5]
    );
    Ok(())
}

#[test]
fn single_value() -> TestResult {
    assert_eq!(parse_numeric_list("42")?, vec![42.0]);
    Ok(())
}

#[test]
fn order_preserved() -> TestResult {
    assert_eq!(parse_numeric_list("3, 1, 2")?, vec![3.0, 1.0, 2.0]);
    Ok(())
}

#[test]
fn invalid_token_rejected() {
    let err = parse_numeric_list("1, two, 3").unwrap_err();
    assert!(matches!(err, SequenceError::InvalidToken { token } if token == "two"));
}

#[test]
fn unclosed_bracket_is_an_invalid_token() {
    // only a matched outer pair is stripped, so "[1" reaches the parser
    let err = parse_numeric_list("[1, 2").unwrap_err();
    assert!(matches!(err, SequenceError::InvalidToken { token } if token == "[1"));
}

#[test]
fn overflowing_literal_rejected() {
    // parses as +inf, which is not a usable node
    let err = parse_numeric_list("1, 1e309").unwrap_err();
    assert!(matches!(err, SequenceError::NonFiniteValue { token } if token == "1e309"));
}

#[test]
fn literal_nan_rejected() {
    let err = parse_numeric_list("NaN").unwrap_err();
    assert!(matches!(err, SequenceError::NonFiniteValue { .. }));
}

#[test]
fn empty_text_rejected() {
    assert!(matches!(parse_numeric_list("").unwrap_err(), SequenceError::Empty));
    assert!(matches!(parse_numeric_list("   ").unwrap_err(), SequenceError::Empty));
    assert!(matches!(parse_numeric_list("[ ]").unwrap_err(), SequenceError::Empty));
    assert!(matches!(parse_numeric_list(",,,").unwrap_err(), SequenceError::Empty));
}
