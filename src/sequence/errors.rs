use thiserror::Error;

/// Numeric list parsing errors.
#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("invalid value `{token}`: every entry must be a real number")]
    InvalidToken { token: String },

    #[error("non-finite value `{token}`: entries must be finite")]
    NonFiniteValue { token: String },

    #[error("empty list: at least one value is required")]
    Empty,
}
