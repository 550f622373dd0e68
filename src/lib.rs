//! riza — classical numerical methods driven by textual math expressions.
//!
//! ┌ [`expression`]    : compiles formula text over `x` into an evaluable
//! │                     tree, with symbolic first derivatives
//! ├ [`sequence`]      : parses delimited numeric lists from text
//! ├ [`solver`]        : iterative methods (secant, bisection,
//! │                     Newton-Raphson, fixed-point) over a shared
//! │                     convergence-loop skeleton, with full iteration
//! │                     traces
//! └ [`interpolation`] : Lagrange polynomial interpolation
//!
//! Every entry point is a pure, synchronous function of its arguments:
//! no shared state, no caches outliving a call, re-entrant by
//! construction. Failures are tagged errors at the call boundary; nothing
//! aborts the process.
//!
//! ```
//! use riza::solver::{bisection::bisection, SolverCfg};
//!
//! let cfg = SolverCfg::new().set_tol(1e-10).unwrap();
//! let report = bisection("x^2 - 2", 0.0, 2.0, cfg).unwrap();
//! assert!((report.value - 2.0_f64.sqrt()).abs() < 1e-6);
//! ```

pub mod expression;
pub mod interpolation;
pub mod sequence;
pub mod solver;
