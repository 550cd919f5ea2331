//! Backup storage configuration types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where backups are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackupProvider {
    /// Local filesystem directory.
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
    /// In-process memory (tests only; lost on exit).
    Memory,
}

impl BackupProvider {
    /// Create local filesystem provider.
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Get the provider name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LocalFs { .. } => "local",
            Self::Memory => "memory",
        }
    }
}

/// Object keys of the two snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupKeys {
    /// Rate-table snapshot key.
    pub rates: String,
    /// Supported-currency snapshot key.
    pub supported: String,
}

impl BackupKeys {
    /// Default rate-table key.
    pub const DEFAULT_RATES: &'static str = "forex_backup.json";
    /// Default supported-currency key.
    pub const DEFAULT_SUPPORTED: &'static str = "forex_supported_backup.json";

    /// Create keys from explicit names.
    #[must_use]
    pub fn new(rates: impl Into<String>, supported: impl Into<String>) -> Self {
        Self {
            rates: rates.into(),
            supported: supported.into(),
        }
    }
}

impl Default for BackupKeys {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATES, Self::DEFAULT_SUPPORTED)
    }
}
