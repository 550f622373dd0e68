//! Symbolic first derivative with respect to `x`.
//!
//! A small expression-tree transformation, applied recursively per node:
//! ┌ constants, `x`            : 0, 1
//! ├ sums and differences      : termwise
//! ├ products and quotients    : product and quotient rules
//! ├ powers                    : constant exponent, constant base, and the
//! │                             general `u^v` rule via `u^v*(v'*ln u + v*u'/u)`
//! └ sin, cos, tan, log, exp, sqrt with the chain rule
//!
//! `abs` has no closed-form derivative under this rule set and is rejected.

use super::ast::{Expr, Func};
use super::errors::ExpressionError;

impl Expr {
    /// Symbolic first derivative d/dx, simplified.
    ///
    /// # Errors
    /// └ [`ExpressionError::NonDifferentiable`] - expression contains `abs`
    pub fn derivative(&self) -> Result<Expr, ExpressionError> {
        Ok(self.diff()?.simplify())
    }

    fn diff(&self) -> Result<Expr, ExpressionError> {
        let d = match self {
            Expr::Num(_) => Expr::Num(0.0),
            Expr::Var    => Expr::Num(1.0),
            Expr::Neg(u) => Expr::Neg(u.diff()?.boxed()),

            Expr::Add(u, v) => Expr::Add(u.diff()?.boxed(), v.diff()?.boxed()),
            Expr::Sub(u, v) => Expr::Sub(u.diff()?.boxed(), v.diff()?.boxed()),

            // (u v)' = u' v + u v'
            Expr::Mul(u, v) => Expr::Add(
                Expr::Mul(u.diff()?.boxed(), v.clone()).boxed(),
                Expr::Mul(u.clone(), v.diff()?.boxed()).boxed(),
            ),

            // (u / v)' = (u' v - u v') / v^2
            Expr::Div(u, v) => Expr::Div(
                Expr::Sub(
                    Expr::Mul(u.diff()?.boxed(), v.clone()).boxed(),
                    Expr::Mul(u.clone(), v.diff()?.boxed()).boxed(),
                )
                .boxed(),
                Expr::Pow(v.clone(), Expr::Num(2.0).boxed()).boxed(),
            ),

            Expr::Pow(u, v) => diff_pow(u, v)?,

            Expr::Call(func, u) => {
                let inner = u.diff()?;
                let outer = match func {
                    // sin(u)' = cos(u)
                    Func::Sin => Expr::Call(Func::Cos, u.clone()),
                    // cos(u)' = -sin(u)
                    Func::Cos => Expr::Neg(Expr::Call(Func::Sin, u.clone()).boxed()),
                    // tan(u)' = 1 / cos(u)^2
                    Func::Tan => Expr::Div(
                        Expr::Num(1.0).boxed(),
                        Expr::Pow(
                            Expr::Call(Func::Cos, u.clone()).boxed(),
                            Expr::Num(2.0).boxed(),
                        )
                        .boxed(),
                    ),
                    // log(u)' = 1 / u
                    Func::Log => Expr::Div(Expr::Num(1.0).boxed(), u.clone()),
                    // exp(u)' = exp(u)
                    Func::Exp => Expr::Call(Func::Exp, u.clone()),
                    // sqrt(u)' = 1 / (2 sqrt(u))
                    Func::Sqrt => Expr::Div(
                        Expr::Num(1.0).boxed(),
                        Expr::Mul(
                            Expr::Num(2.0).boxed(),
                            Expr::Call(Func::Sqrt, u.clone()).boxed(),
                        )
                        .boxed(),
                    ),
                    Func::Abs => {
                        return Err(ExpressionError::NonDifferentiable { what: "abs" });
                    }
                };
                Expr::Mul(outer.boxed(), inner.boxed())
            }
        };

        Ok(d)
    }

    /// Constant folding and identity elimination, bottom-up.
    ///
    /// Folds literal arithmetic and removes the identities
    /// `u+0`, `u-0`, `0-u`, `u*0`, `u*1`, `0/u`, `u/1`, `u^0`, `u^1`,
    /// and double negation. Keeps derivative trees small; semantics of
    /// non-constant sub-trees are unchanged.
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Num(_) | Expr::Var => self.clone(),

            Expr::Neg(u) => match u.simplify() {
                Expr::Num(v) => Expr::Num(-v),
                Expr::Neg(inner) => *inner,
                u => Expr::Neg(u.boxed()),
            },

            Expr::Add(u, v) => {
                let (u, v) = (u.simplify(), v.simplify());
                match (u.as_const(), v.as_const()) {
                    (Some(a), Some(b)) => Expr::Num(a + b),
                    (Some(a), _) if a == 0.0 => v,
                    (_, Some(b)) if b == 0.0 => u,
                    _ => Expr::Add(u.boxed(), v.boxed()),
                }
            }

            Expr::Sub(u, v) => {
                let (u, v) = (u.simplify(), v.simplify());
                match (u.as_const(), v.as_const()) {
                    (Some(a), Some(b)) => Expr::Num(a - b),
                    (Some(a), _) if a == 0.0 => Expr::Neg(v.boxed()).simplify(),
                    (_, Some(b)) if b == 0.0 => u,
                    _ => Expr::Sub(u.boxed(), v.boxed()),
                }
            }

            Expr::Mul(u, v) => {
                let (u, v) = (u.simplify(), v.simplify());
                match (u.as_const(), v.as_const()) {
                    (Some(a), Some(b)) => Expr::Num(a * b),
                    (Some(a), _) if a == 0.0 => Expr::Num(0.0),
                    (_, Some(b)) if b == 0.0 => Expr::Num(0.0),
                    (Some(a), _) if a == 1.0 => v,
                    (_, Some(b)) if b == 1.0 => u,
                    _ => Expr::Mul(u.boxed(), v.boxed()),
                }
            }

            Expr::Div(u, v) => {
                let (u, v) = (u.simplify(), v.simplify());
                match (u.as_const(), v.as_const()) {
                    // leave literal x/0 unfolded; evaluation surfaces the infinity
                    (Some(a), Some(b)) if b != 0.0 => Expr::Num(a / b),
                    (Some(a), _) if a == 0.0 => Expr::Num(0.0),
                    (_, Some(b)) if b == 1.0 => u,
                    _ => Expr::Div(u.boxed(), v.boxed()),
                }
            }

            Expr::Pow(u, v) => {
                let (u, v) = (u.simplify(), v.simplify());
                match (u.as_const(), v.as_const()) {
                    (Some(a), Some(b)) => Expr::Num(a.powf(b)),
                    (_, Some(b)) if b == 0.0 => Expr::Num(1.0),
                    (_, Some(b)) if b == 1.0 => u,
                    _ => Expr::Pow(u.boxed(), v.boxed()),
                }
            }

            Expr::Call(func, u) => Expr::Call(*func, u.simplify().boxed()),
        }
    }
}

/// Power rule dispatch for `(u ^ v)'`.
///
/// ├ v constant : v * u^(v-1) * u'
/// ├ u constant : u^v * ln(u) * v'
/// └ general    : u^v * (v' * ln(u) + v * u' / u)
fn diff_pow(u: &Expr, v: &Expr) -> Result<Expr, ExpressionError> {
    if let Some(n) = v.as_const() {
        return Ok(Expr::Mul(
            Expr::Mul(
                Expr::Num(n).boxed(),
                Expr::Pow(u.clone().boxed(), Expr::Num(n - 1.0).boxed()).boxed(),
            )
            .boxed(),
            u.diff()?.boxed(),
        ));
    }

    if let Some(c) = u.as_const() {
        return Ok(Expr::Mul(
            Expr::Mul(
                Expr::Pow(Expr::Num(c).boxed(), v.clone().boxed()).boxed(),
                Expr::Num(c.ln()).boxed(),
            )
            .boxed(),
            v.diff()?.boxed(),
        ));
    }

    let ln_u = Expr::Call(Func::Log, u.clone().boxed());
    Ok(Expr::Mul(
        Expr::Pow(u.clone().boxed(), v.clone().boxed()).boxed(),
        Expr::Add(
            Expr::Mul(v.diff()?.boxed(), ln_u.boxed()).boxed(),
            Expr::Div(
                Expr::Mul(v.clone().boxed(), u.diff()?.boxed()).boxed(),
                u.clone().boxed(),
            )
            .boxed(),
        )
        .boxed(),
    ))
}
