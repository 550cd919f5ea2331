//! Source of live exchange-rate data.

use std::collections::BTreeMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

/// Failures talking to the remote rate API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Transport(String),

    /// API answered with a non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// API answered with an error body (`"success": false`).
    #[error("API error {code}: {info}")]
    Api {
        /// Provider error code.
        code: i64,
        /// Provider error description.
        info: String,
    },

    /// Response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Response lacked the expected member.
    #[error("response has no '{0}' member")]
    MissingField(&'static str),

    /// Response member was present but empty.
    #[error("response '{0}' member is empty")]
    Empty(&'static str),
}

/// Live quotes keyed `<BASE><CODE>` (e.g. `USDEUR`).
pub type Quotes = BTreeMap<String, Decimal>;

/// Currency names keyed by code.
pub type CurrencyNames = BTreeMap<String, String>;

/// A remote exchange-rate API.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches live quotes relative to `base`.
    async fn live_quotes(&self, base: &str) -> Result<Quotes, ProviderError>;

    /// Fetches the names of every currency the API knows.
    async fn currency_names(&self) -> Result<CurrencyNames, ProviderError>;
}
