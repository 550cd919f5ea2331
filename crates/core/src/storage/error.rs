//! Backup storage error types.

use thiserror::Error;

/// Backup storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackupError {
    /// No backup has been written yet.
    #[error("backup not found: {key}")]
    NotFound {
        /// Storage key that was not found.
        key: String,
    },

    /// Backup exists but holds no usable data.
    #[error("backup {key} is empty")]
    Empty {
        /// Storage key of the empty backup.
        key: String,
    },

    /// Backup could not be decoded or does not match the configured base.
    #[error("backup {key} is invalid: {reason}")]
    Invalid {
        /// Storage key of the invalid backup.
        key: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Snapshot could not be encoded.
    #[error("failed to encode backup: {0}")]
    Encode(String),

    /// Storage provider configuration error.
    #[error("backup storage configuration error: {0}")]
    Configuration(String),

    /// OpenDAL operation error.
    #[error("backup storage operation failed: {0}")]
    Operation(String),
}

impl BackupError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create an empty backup error.
    #[must_use]
    pub fn empty(key: impl Into<String>) -> Self {
        Self::Empty { key: key.into() }
    }

    /// Create an invalid backup error.
    #[must_use]
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

impl From<opendal::Error> for BackupError {
    fn from(err: opendal::Error) -> Self {
        match err.kind() {
            opendal::ErrorKind::NotFound => Self::NotFound {
                key: err.to_string(),
            },
            _ => Self::Operation(err.to_string()),
        }
    }
}
