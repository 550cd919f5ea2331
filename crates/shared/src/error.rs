//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced to HTTP callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Amount is numeric but not acceptable (e.g. negative).
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Currency code is not in the rate table or symbol lookup.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Amount could not be parsed as a number.
    #[error("Malformed amount: {0}")]
    MalformedAmount(String),

    /// A required query parameter was not supplied.
    #[error("Missing parameter: {0}")]
    MissingParameter(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidAmount(_)
            | Self::UnknownCurrency(_)
            | Self::MalformedAmount(_)
            | Self::MissingParameter(_) => 400,
        }
    }

    /// Returns the machine-readable error kind for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "invalid_amount",
            Self::UnknownCurrency(_) => "unknown_currency",
            Self::MalformedAmount(_) => "malformed_amount",
            Self::MissingParameter(_) => "missing_parameter",
        }
    }

    /// Returns the human-readable message without the kind prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidAmount(msg)
            | Self::UnknownCurrency(msg)
            | Self::MalformedAmount(msg)
            | Self::MissingParameter(msg) => msg,
        }
    }
}
