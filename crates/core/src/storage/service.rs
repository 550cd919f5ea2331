//! Backup store implementation using Apache OpenDAL.

use opendal::{ErrorKind, Operator, services};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::config::BackupProvider;
use super::error::BackupError;

/// JSON snapshot store.
#[derive(Debug, Clone)]
pub struct BackupStore {
    operator: Operator,
    provider: BackupProvider,
}

impl BackupStore {
    /// Create a store for the given provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_provider(provider: BackupProvider) -> Result<Self, BackupError> {
        let operator = Self::create_operator(&provider)?;
        Ok(Self { operator, provider })
    }

    /// In-memory store, empty on creation.
    ///
    /// # Errors
    ///
    /// Returns an error if the memory backend cannot be initialized.
    pub fn in_memory() -> Result<Self, BackupError> {
        Self::from_provider(BackupProvider::Memory)
    }

    /// Create OpenDAL operator from provider config.
    fn create_operator(provider: &BackupProvider) -> Result<Operator, BackupError> {
        let operator = match provider {
            BackupProvider::LocalFs { root } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| BackupError::configuration("invalid path"))?,
                );
                Operator::new(builder)
                    .map_err(|e| BackupError::configuration(e.to_string()))?
                    .finish()
            }
            BackupProvider::Memory => Operator::new(services::Memory::default())
                .map_err(|e| BackupError::configuration(e.to_string()))?
                .finish(),
        };
        Ok(operator)
    }

    /// Serialize `value` as JSON and write it under `key`, replacing any
    /// previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the write fails.
    pub async fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), BackupError> {
        let bytes =
            serde_json::to_vec_pretty(value).map_err(|e| BackupError::Encode(e.to_string()))?;
        self.operator
            .write(key, bytes)
            .await
            .map_err(BackupError::from)?;
        Ok(())
    }

    /// Read and decode the snapshot under `key`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing was saved yet, `Invalid` if the content
    /// is not the expected JSON shape.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<T, BackupError> {
        let buffer = match self.operator.read(key).await {
            Ok(buffer) => buffer,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(BackupError::not_found(key)),
            Err(e) => return Err(BackupError::from(e)),
        };

        serde_json::from_slice(&buffer.to_vec()).map_err(|e| BackupError::invalid(key, e.to_string()))
    }

    /// Get the storage provider name.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}
