//! Conversion error types.

use forex_shared::AppError;
use thiserror::Error;

/// Message used when a negative amount is rejected.
pub const NEGATIVE_AMOUNT_MESSAGE: &str =
    "The value is less than 0. It should be a non-negative number.";

/// Errors produced while validating, converting or formatting an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Amount is numeric but unacceptable (negative, or out of range).
    #[error("{0}")]
    InvalidAmount(String),

    /// Currency code is absent from the rate table or symbol lookup.
    #[error("unknown currency code '{0}'")]
    UnknownCurrency(String),

    /// Amount is not a number.
    #[error("'{0}' is not a valid number")]
    MalformedAmount(String),

    /// Required request parameter is missing.
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),
}

impl ConversionError {
    /// Create an unknown currency error.
    #[must_use]
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency(code.into())
    }

    /// Create a malformed amount error.
    #[must_use]
    pub fn malformed_amount(raw: impl Into<String>) -> Self {
        Self::MalformedAmount(raw.into())
    }

    /// Create the error for a number too large or too precise to convert.
    #[must_use]
    pub fn out_of_range(raw: &str) -> Self {
        Self::InvalidAmount(format!("'{raw}' is out of the supported range"))
    }

    /// Create the error for a negative amount.
    #[must_use]
    pub fn negative_amount() -> Self {
        Self::InvalidAmount(NEGATIVE_AMOUNT_MESSAGE.to_string())
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        let message = err.to_string();
        match err {
            ConversionError::InvalidAmount(_) => Self::InvalidAmount(message),
            ConversionError::UnknownCurrency(_) => Self::UnknownCurrency(message),
            ConversionError::MalformedAmount(_) => Self::MalformedAmount(message),
            ConversionError::MissingParameter(_) => Self::MissingParameter(message),
        }
    }
}
