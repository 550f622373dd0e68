//! Expression compilation and differentiation errors.
//!
//! ┌ lexing   : unexpected characters, malformed numbers
//! ├ parsing  : unknown identifiers, dangling operators, paren mismatch
//! └ calculus : sub-expressions with no closed-form derivative

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpressionError {
    #[error("empty expression: enter a formula over `x` (e.g. x^2 + 3*x - 1)")]
    Empty,

    #[error("unexpected character `{ch}` at position {at}")]
    UnexpectedChar { ch: char, at: usize },

    #[error("malformed number `{text}`")]
    MalformedNumber { text: String },

    #[error("unknown identifier `{name}`: expected `x`, `pi`, `e`, or a function name")]
    UnknownIdentifier { name: String },

    #[error("function `{name}` requires a parenthesized argument (e.g. {name}(x))")]
    MissingArgument { name: String },

    #[error("unexpected token at position {at}")]
    UnexpectedToken { at: usize },

    #[error("expression ended unexpectedly")]
    UnexpectedEnd,

    #[error("unbalanced parentheses")]
    UnbalancedParens,

    #[error("`{what}` has no closed-form derivative under the supported rule set")]
    NonDifferentiable { what: &'static str },
}
