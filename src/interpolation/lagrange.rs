//! Lagrange polynomial interpolation
//!
//! Implements global polynomial interpolation using the
//! [Lagrange form](https://en.wikipedia.org/wiki/Lagrange_polynomial):
//!
//! ```text
//! P(xq) = Σ_i  y[i] * Π_{j≠i} (xq - x[j]) / (x[i] - x[j])
//! ```
//!
//! Single pass, O(n²) per evaluation point, no iteration state and no
//! convergence concept. Nodes need not be sorted; they only need to be
//! pairwise distinct. Evaluation outside the node range is permitted
//! (polynomial extrapolation).

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;

const ALGORITHM: &str = "lagrange";

/// Minimum allowed separation between any two nodes. Pairs closer than
/// this make the basis denominators numerically meaningless.
pub const DISTINCT_X_TOL: f64 = 1e-12;

/// Validates node/value vectors before any arithmetic.
///
/// ┌ non-empty and equal length
/// ├ all entries finite
/// └ all node pairs (i, j) at least [`DISTINCT_X_TOL`] apart
fn validate_nodes(x: &[f64], y: &[f64]) -> Result<(), InterpolationError> {
    if x.is_empty() || y.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if x.len() != y.len() {
        return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
    }
    if let Some(idx) = x.iter().position(|v| !v.is_finite()) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    if let Some(idx) = y.iter().position(|v| !v.is_finite()) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }

    // nodes are not required to be sorted, so every pair is checked
    for i in 0..x.len() {
        for j in (i + 1)..x.len() {
            if (x[i] - x[j]).abs() < DISTINCT_X_TOL {
                return Err(InterpolationError::DuplicateX {
                    i,
                    j,
                    x1: x[i],
                    x2: x[j],
                });
            }
        }
    }

    Ok(())
}

/// Basis sum at a single query point. Inputs already validated.
#[inline]
fn basis_sum(xq: f64, x: &[f64], y: &[f64]) -> f64 {
    let mut acc = 0.0;
    for i in 0..x.len() {
        let mut l = 1.0;
        for j in 0..x.len() {
            if j != i {
                l *= (xq - x[j]) / (x[i] - x[j]);
            }
        }
        acc += l * y[i];
    }
    acc
}

/// Evaluates the Lagrange interpolant of `(x, y)` at a single point.
///
/// # Arguments
/// ┌ `xq` : evaluation point. Must be finite
/// ├ `x`  : interpolation nodes, pairwise distinct beyond [`DISTINCT_X_TOL`]
/// └ `y`  : values at the nodes, same length as `x`
///
/// # Returns
/// - `Ok(P(xq))` for the unique degree-(n-1) polynomial through the nodes.
///   Exact at each node: `interpolate_at(x[i], x, y) == y[i]` up to
///   floating-point rounding. A single node yields the constant `y[0]`.
///
/// # Errors
/// ┌ [`InterpolationError::EmptyInput`]     - `x` or `y` empty
/// ├ [`InterpolationError::UnequalLength`]  - `x.len() != y.len()`
/// ├ [`InterpolationError::NonFiniteVec`]   - NaN/inf node or value
/// ├ [`InterpolationError::NonFiniteQuery`] - NaN/inf evaluation point
/// └ [`InterpolationError::DuplicateX`]     - two nodes too close
pub fn interpolate_at(xq: f64, x: &[f64], y: &[f64]) -> Result<f64, InterpolationError> {
    if !xq.is_finite() {
        return Err(InterpolationError::NonFiniteQuery { got: xq });
    }
    validate_nodes(x, y)?;
    Ok(basis_sum(xq, x, y))
}

/// Evaluates the Lagrange interpolant at many points.
///
/// Validation runs once; each point then costs one O(n²) basis sum.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"lagrange"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values, in `xq` order
pub fn interpolate(
    xq: &[f64],
    x: &[f64],
    y: &[f64],
) -> Result<InterpolationReport, InterpolationError> {
    validate_nodes(x, y)?;
    if let Some(&bad) = xq.iter().find(|v| !v.is_finite()) {
        return Err(InterpolationError::NonFiniteQuery { got: bad });
    }

    let evaluated: Vec<f64> = xq.iter().map(|&q| basis_sum(q, x, y)).collect();

    Ok(InterpolationReport {
        algorithm_name: ALGORITHM,
        n_provided: x.len(),
        n_evaluated: xq.len(),
        evaluated,
    })
}
