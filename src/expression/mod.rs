// expression compilation
pub mod errors;
pub mod ast;
pub mod derivative;
pub(crate) mod lexer;
pub(crate) mod parser;

pub use ast::{Expr, Func};
pub use errors::ExpressionError;

/// Compiles expression text over the variable `x` into an [`Expr`] tree.
///
/// # Errors
/// └ [`ExpressionError`] - text is empty, lexes badly, or does not parse
pub fn compile(text: &str) -> Result<Expr, ExpressionError> {
    let tokens = lexer::tokenize(text)?;
    parser::parse(&tokens)
}
