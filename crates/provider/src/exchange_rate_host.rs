//! exchangerate.host-style API client.
//!
//! ```text
//! GET {base_url}/live?access_key=KEY&source=USD -> {"quotes": {"USDEUR": 0.91, ...}}
//! GET {base_url}/list?access_key=KEY            -> {"currencies": {"EUR": "Euro", ...}}
//! ```
//!
//! Failures are reported in-band as
//! `{"success": false, "error": {"code": 101, "info": "..."}}`.

use std::time::Duration;

use async_trait::async_trait;
use forex_core::ProviderError;
use forex_core::RateProvider;
use forex_core::provider::{CurrencyNames, Quotes};
use forex_shared::ProviderConfig;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// In-band API failure.
#[derive(Debug, Deserialize)]
struct ApiFailure {
    #[serde(default)]
    code: i64,
    info: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Envelope shared by both endpoints.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: Option<bool>,
    error: Option<ApiFailure>,
    #[serde(flatten)]
    body: T,
}

#[derive(Debug, Deserialize)]
struct LiveBody {
    quotes: Option<Quotes>,
}

#[derive(Debug, Deserialize)]
struct ListBody {
    currencies: Option<CurrencyNames>,
}

impl<T> Envelope<T> {
    /// Unwraps the body, turning in-band failures into errors.
    fn into_body(self) -> Result<T, ProviderError> {
        match (self.success, self.error) {
            (_, Some(failure)) => Err(ProviderError::Api {
                code: failure.code,
                info: failure.info.or(failure.kind).unwrap_or_default(),
            }),
            (Some(false), None) => Err(ProviderError::Api {
                code: 0,
                info: "request was not successful".to_string(),
            }),
            _ => Ok(self.body),
        }
    }
}

/// Client for the remote rate API.
pub struct ExchangeRateHost {
    client: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl ExchangeRateHost {
    /// Creates a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        access_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_key: access_key.into(),
        })
    }

    /// Creates a client from the `provider` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        Self::new(
            config.base_url.clone(),
            config.access_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Envelope<T>, ProviderError> {
        let url = format!("{}/{path}", self.base_url);
        debug!(url = %url, "Requesting exchange-rate API");

        let response = self
            .client
            .get(&url)
            .query(&[("access_key", self.access_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        response
            .json::<Envelope<T>>()
            .await
            .map_err(|e| ProviderError::Decode(e.without_url().to_string()))
    }
}

#[async_trait]
impl RateProvider for ExchangeRateHost {
    async fn live_quotes(&self, base: &str) -> Result<Quotes, ProviderError> {
        let body: LiveBody = self.get("live", &[("source", base)]).await?.into_body()?;
        body.quotes.ok_or(ProviderError::MissingField("quotes"))
    }

    async fn currency_names(&self) -> Result<CurrencyNames, ProviderError> {
        let body: ListBody = self.get("list", &[]).await?.into_body()?;
        body.currencies.ok_or(ProviderError::MissingField("currencies"))
    }
}
