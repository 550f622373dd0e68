//! Iterative method definitions.
//!
//! Provides the [`Method`] enum, which enumerates all supported iterative
//! methods, along with their names and trace-table column labels.

/// Iterative solver variants.
/// - [`Method::Bisection`] is the only bracketing method
/// - the rest are open methods seeded with point estimates
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Method {
    Secant,
    Bisection,
    NewtonRaphson,
    FixedPoint,
}

impl Method {
    pub const fn method_name(self) -> &'static str {
        match self {
            Method::Secant        => "secant",
            Method::Bisection     => "bisection",
            Method::NewtonRaphson => "newton_raphson",
            Method::FixedPoint    => "fixed_point",
        }
    }

    /// Column labels for the iteration trace, aligned with
    /// [`IterationRecord::row`](crate::solver::report::IterationRecord::row).
    ///
    /// Lets a caller render the history as a table without knowing the
    /// method-specific record shape.
    pub const fn column_labels(self) -> &'static [&'static str] {
        match self {
            Method::Secant        => &["k", "x_k", "f(x_k)", "error"],
            Method::Bisection     => &["k", "a", "b", "c", "f(c)", "error"],
            Method::NewtonRaphson => &["k", "x_k", "f(x_k)", "f'(x_k)", "error"],
            Method::FixedPoint    => &["k", "x_k", "g(x_k)", "error"],
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}
