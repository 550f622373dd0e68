//! Shared configuration for iterative solvers.
//!
//! Provides [`SolverCfg`] with the tolerance and iteration cap shared by
//! every method, validated at construction so no run starts with bad
//! parameters.
//!
//! [`SolverCfg`] — universal fields
//! ├ `tol`      : convergence tolerance on the per-step error measure
//! └ `max_iter` : iteration cap

use super::errors::SolveError;

pub const DEFAULT_TOL: f64 = 1e-6;
pub const DEFAULT_MAX_ITER: usize = 100;

/// Fixed closeness threshold for "effectively zero" checks: degenerate
/// denominators, vanishing derivatives, and bisection's exact-root hit.
/// Deliberately not user-configurable.
pub const NEAR_ZERO: f64 = 1e-12;

#[derive(Debug, Copy, Clone)]
pub struct SolverCfg {
    tol: f64,
    max_iter: usize,
}

impl SolverCfg {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tol(mut self, v: f64) -> Result<Self, SolveError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(SolveError::InvalidTolerance { got: v });
        }
        self.tol = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, SolveError> {
        if v == 0 {
            return Err(SolveError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }

    // getters
    #[inline] #[must_use] pub fn tol(&self) -> f64 { self.tol }
    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter }
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            tol: DEFAULT_TOL,
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}
