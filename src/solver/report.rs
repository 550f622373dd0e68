//! Defines the [`SolveReport`] struct returned by all iterative methods,
//! and the per-iteration [`IterationRecord`] trace rows.

use super::methods::Method;

/// Reasons an iterative method may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
}

/// Which stopping condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - bisection's exact-root hit: |f(c)| below the near-zero threshold
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - open methods: |x_k - x_{k-1}| <= tol
/// - [`ToleranceSatisfied::HalfWidthReached`]
///     - bisection: (b - a) / 2 <= tol
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - alongside [`TerminationReason::IterationLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    StepSizeReached,
    HalfWidthReached,
    ToleranceNotReached,
}

/// One row of the convergence trace, method-tagged.
///
/// Fields per variant line up with [`Method::column_labels`]:
/// ├ `Secant`     : k, x_k, f(x_k), error
/// ├ `Bisection`  : k, a, b, c, f(c), error
/// ├ `Newton`     : k, x_k, f(x_k), f'(x_k), error
/// └ `FixedPoint` : k, x_k, g(x_k), error
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationRecord {
    Secant     { k: usize, x_k: f64, f_x_k: f64, error: f64 },
    Bisection  { k: usize, a: f64, b: f64, c: f64, f_c: f64, error: f64 },
    Newton     { k: usize, x_k: f64, f_x_k: f64, df_x_k: f64, error: f64 },
    FixedPoint { k: usize, x_k: f64, g_x_k: f64, error: f64 },
}

impl IterationRecord {
    /// Iteration index (1-based).
    pub fn k(&self) -> usize {
        match self {
            IterationRecord::Secant { k, .. }
            | IterationRecord::Bisection { k, .. }
            | IterationRecord::Newton { k, .. }
            | IterationRecord::FixedPoint { k, .. } => *k,
        }
    }

    /// Absolute error measure for this step.
    pub fn error(&self) -> f64 {
        match self {
            IterationRecord::Secant { error, .. }
            | IterationRecord::Bisection { error, .. }
            | IterationRecord::Newton { error, .. }
            | IterationRecord::FixedPoint { error, .. } => *error,
        }
    }

    /// Row values in column order, index first.
    /// Position i matches `column_labels()[i]` for the record's method.
    pub fn row(&self) -> Vec<f64> {
        match *self {
            IterationRecord::Secant { k, x_k, f_x_k, error } => {
                vec![k as f64, x_k, f_x_k, error]
            }
            IterationRecord::Bisection { k, a, b, c, f_c, error } => {
                vec![k as f64, a, b, c, f_c, error]
            }
            IterationRecord::Newton { k, x_k, f_x_k, df_x_k, error } => {
                vec![k as f64, x_k, f_x_k, df_x_k, error]
            }
            IterationRecord::FixedPoint { k, x_k, g_x_k, error } => {
                vec![k as f64, x_k, g_x_k, error]
            }
        }
    }
}

/// Final report returned by all iterative methods.
///
/// [`SolveReport`]
/// - `value`               : best estimate (root, or fixed point)
/// - `iterations`          : total iterations performed
/// - `evaluations`         : total expression evaluations (f, f', or g)
/// - `termination_reason`  : why the solver stopped ([`TerminationReason`])
/// - `tolerance_satisfied` : which stopping rule was met ([`ToleranceSatisfied`])
/// - `history`             : full iteration trace, one record per step
/// - `method`              : which method produced the report
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub value               : f64,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub history             : Vec<IterationRecord>,
    pub method              : Method,
}

impl SolveReport {
    /// Header set for rendering [`SolveReport::history`] as a table.
    pub fn column_labels(&self) -> &'static [&'static str] {
        self.method.column_labels()
    }

    /// Whether the run met a stopping tolerance (rather than the cap).
    pub fn converged(&self) -> bool {
        self.termination_reason == TerminationReason::ToleranceReached
    }
}
