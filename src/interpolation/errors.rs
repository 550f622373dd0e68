use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("non-finite evaluation point: {got}")]
    NonFiniteQuery { got: f64 },

    #[error("duplicate x-values detected: x[{i}]={x1} and x[{j}]={x2} are closer than the distinctness threshold")]
    DuplicateX { i: usize, j: usize, x1: f64, x2: f64 },
}
