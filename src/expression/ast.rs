//! Expression tree for single-variable formulas.
//!
//! [`Expr`] is an immutable compiled form of a textual formula over `x`.
//! Evaluation is a plain tree walk; out-of-domain inputs produce NaN or
//! infinity, which solver callers must treat as a computation failure.

use std::fmt;

/// Unary functions supported in formulas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Log,    // natural logarithm
    Exp,
    Abs,
    Sqrt,
}

impl Func {
    pub const fn name(self) -> &'static str {
        match self {
            Func::Sin  => "sin",
            Func::Cos  => "cos",
            Func::Tan  => "tan",
            Func::Log  => "log",
            Func::Exp  => "exp",
            Func::Abs  => "abs",
            Func::Sqrt => "sqrt",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin"  => Some(Func::Sin),
            "cos"  => Some(Func::Cos),
            "tan"  => Some(Func::Tan),
            "log"  => Some(Func::Log),
            "exp"  => Some(Func::Exp),
            "abs"  => Some(Func::Abs),
            "sqrt" => Some(Func::Sqrt),
            _      => None,
        }
    }

    #[inline]
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Func::Sin  => v.sin(),
            Func::Cos  => v.cos(),
            Func::Tan  => v.tan(),
            Func::Log  => v.ln(),
            Func::Exp  => v.exp(),
            Func::Abs  => v.abs(),
            Func::Sqrt => v.sqrt(),
        }
    }
}

/// Compiled expression over the single variable `x`.
///
/// Variants:
/// ├ `Num`  : numeric literal or named constant (`pi`, `e`)
/// ├ `Var`  : the variable `x`
/// ├ `Neg`  : unary minus
/// ├ `Add`/`Sub`/`Mul`/`Div`/`Pow` : binary operators
/// └ `Call` : unary function application ([`Func`])
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    Var,
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Call(Func, Box<Expr>),
}

impl Expr {
    /// Evaluates the expression at `x`.
    ///
    /// Never fails: domain violations (e.g. `sqrt(-1)`, `1/0`) surface as
    /// NaN or infinity and are rejected by the solvers' finiteness checks.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Num(v)      => *v,
            Expr::Var         => x,
            Expr::Neg(u)      => -u.eval(x),
            Expr::Add(u, v)   => u.eval(x) + v.eval(x),
            Expr::Sub(u, v)   => u.eval(x) - v.eval(x),
            Expr::Mul(u, v)   => u.eval(x) * v.eval(x),
            Expr::Div(u, v)   => u.eval(x) / v.eval(x),
            Expr::Pow(u, v)   => u.eval(x).powf(v.eval(x)),
            Expr::Call(f, u)  => f.apply(u.eval(x)),
        }
    }

    #[inline]
    pub(crate) fn boxed(self) -> Box<Expr> {
        Box::new(self)
    }

    /// Constant value if the node is a literal.
    pub(crate) fn as_const(&self) -> Option<f64> {
        match self {
            Expr::Num(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(v)       => write!(f, "{}", v),
            Expr::Var          => write!(f, "x"),
            Expr::Neg(u)       => write!(f, "(-{})", u),
            Expr::Add(u, v)    => write!(f, "({} + {})", u, v),
            Expr::Sub(u, v)    => write!(f, "({} - {})", u, v),
            Expr::Mul(u, v)    => write!(f, "({} * {})", u, v),
            Expr::Div(u, v)    => write!(f, "({} / {})", u, v),
            Expr::Pow(u, v)    => write!(f, "({} ^ {})", u, v),
            Expr::Call(fun, u) => write!(f, "{}({})", fun.name(), u),
        }
    }
}
