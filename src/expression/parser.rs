//! Recursive-descent parser producing an [`Expr`] tree.
//!
//! Grammar (precedence low to high):
//! ├ expr   := term  (('+' | '-') term)*
//! ├ term   := unary (('*' | '/') unary)*
//! ├ unary  := '-' unary | power
//! ├ power  := atom ('^' unary)?          (right-associative)
//! └ atom   := number | 'x' | 'pi' | 'e' | func '(' expr ')' | '(' expr ')'

use super::ast::{Expr, Func};
use super::errors::ExpressionError;
use super::lexer::Token;

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

pub(crate) fn parse(tokens: &[Token]) -> Result<Expr, ExpressionError> {
    let mut p = Parser { tokens, pos: 0 };
    let expr = p.expr()?;
    if p.pos != tokens.len() {
        return Err(ExpressionError::UnexpectedToken { at: p.pos });
    }
    Ok(expr)
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&Token> {
        let t = self.tokens.get(self.pos);
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn expect_cparen(&mut self) -> Result<(), ExpressionError> {
        match self.bump() {
            Some(Token::CParen) => Ok(()),
            Some(_) => Err(ExpressionError::UnbalancedParens),
            None => Err(ExpressionError::UnbalancedParens),
        }
    }

    fn expr(&mut self) -> Result<Expr, ExpressionError> {
        let mut lhs = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    lhs = Expr::Add(lhs.boxed(), self.term()?.boxed());
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    lhs = Expr::Sub(lhs.boxed(), self.term()?.boxed());
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn term(&mut self) -> Result<Expr, ExpressionError> {
        let mut lhs = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    lhs = Expr::Mul(lhs.boxed(), self.unary()?.boxed());
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    lhs = Expr::Div(lhs.boxed(), self.unary()?.boxed());
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn unary(&mut self) -> Result<Expr, ExpressionError> {
        if let Some(Token::Minus) = self.peek() {
            self.pos += 1;
            return Ok(Expr::Neg(self.unary()?.boxed()));
        }
        self.power()
    }

    fn power(&mut self) -> Result<Expr, ExpressionError> {
        let base = self.atom()?;
        if let Some(Token::Caret) = self.peek() {
            self.pos += 1;
            // right-associative; exponent may carry a unary minus (x^-2)
            let exponent = self.unary()?;
            return Ok(Expr::Pow(base.boxed(), exponent.boxed()));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr, ExpressionError> {
        let at = self.pos;
        match self.bump() {
            Some(Token::Num(v)) => Ok(Expr::Num(*v)),

            Some(Token::OParen) => {
                let inner = self.expr()?;
                self.expect_cparen()?;
                Ok(inner)
            }

            Some(Token::Ident(name)) => {
                let name = name.clone();
                match name.as_str() {
                    "x"  => Ok(Expr::Var),
                    "pi" => Ok(Expr::Num(std::f64::consts::PI)),
                    "e"  => Ok(Expr::Num(std::f64::consts::E)),
                    _ => match Func::from_name(&name) {
                        Some(func) => {
                            match self.bump() {
                                Some(Token::OParen) => {}
                                _ => return Err(ExpressionError::MissingArgument { name }),
                            }
                            let arg = self.expr()?;
                            self.expect_cparen()?;
                            Ok(Expr::Call(func, arg.boxed()))
                        }
                        None => Err(ExpressionError::UnknownIdentifier { name }),
                    },
                }
            }

            Some(_) => Err(ExpressionError::UnexpectedToken { at }),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }
}
