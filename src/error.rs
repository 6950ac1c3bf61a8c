//! Error type shared by all optimizers.

use thiserror::Error;

/// Errors raised before a search starts (or while rendering its output).
///
/// Optimizers validate their inputs up front and never fail mid-run: once
/// the first random draw has happened, a run always completes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[cfg(feature = "plot")]
    #[error("plot rendering failed: {0}")]
    Render(String),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
