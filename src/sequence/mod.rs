//! Numeric list parsing.
//!
//! Turns delimited text (`"1, 2, 3"`, `"[1 2 3]"`) into an ordered `Vec<f64>`
//! for use as interpolation nodes and values.

pub mod errors;
pub use errors::SequenceError;

/// Parses a delimited numeric list from text.
///
/// ├ separators : any mix of whitespace and commas
/// └ wrapping   : at most one outer `[` `]` pair, stripped before splitting
///
/// # Errors
/// ┌ [`SequenceError::InvalidToken`]   - a token does not parse as `f64`
/// ├ [`SequenceError::NonFiniteValue`] - a token parses as NaN or infinity
/// └ [`SequenceError::Empty`]          - no values remain after splitting
pub fn parse_numeric_list(text: &str) -> Result<Vec<f64>, SequenceError> {
    let trimmed = text.trim();
    let inner = match trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(s) => s,
        None => trimmed,
    };

    let mut values = Vec::new();
    for token in inner.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        let v = token
            .parse::<f64>()
            .map_err(|_| SequenceError::InvalidToken { token: token.to_string() })?;
        if !v.is_finite() {
            return Err(SequenceError::NonFiniteValue { token: token.to_string() });
        }
        values.push(v);
    }

    if values.is_empty() {
        return Err(SequenceError::Empty);
    }

    Ok(values)
}
