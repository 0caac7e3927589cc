use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the solver and its configuration layer.
#[derive(Debug, Error)]
pub enum Error {
    /// A simulation constant is out of its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// A particle ended a step at a non-finite position.
    #[error("particle {index} has a non-finite position after the step")]
    NonFinite { index: usize },

    /// Malformed parameter file.
    #[error(transparent)]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
