//! Rate acquisition with backup fallback.
//!
//! Every fetch first asks the remote API. A successful answer is persisted
//! as the new backup; a failed one falls back to the last backup. Callers
//! learn which path was taken through [`RateOrigin`], and get
//! [`RateError::Unavailable`] when neither path produced data.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::currency::{Forex, RateTable, SupportedSet, SymbolTable, normalize_code};
use crate::provider::{ProviderError, RateProvider};
use crate::storage::{BackupError, BackupKeys, BackupStore};

/// Where a piece of rate data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RateOrigin {
    /// Fetched from the remote API just now.
    Live,
    /// Loaded from the last saved backup.
    Backup,
    /// Neither source had data; the value is an empty placeholder.
    Unavailable,
}

/// A value together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acquired<T> {
    /// The data.
    pub value: T,
    /// Where it came from.
    pub origin: RateOrigin,
}

impl<T> Acquired<T> {
    /// Wrap freshly fetched data.
    #[must_use]
    pub const fn live(value: T) -> Self {
        Self {
            value,
            origin: RateOrigin::Live,
        }
    }

    /// Wrap data read from a backup.
    #[must_use]
    pub const fn backup(value: T) -> Self {
        Self {
            value,
            origin: RateOrigin::Backup,
        }
    }

    /// Placeholder for data that could not be acquired.
    #[must_use]
    pub const fn unavailable(value: T) -> Self {
        Self {
            value,
            origin: RateOrigin::Unavailable,
        }
    }

    /// True if the data came from a backup.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.origin == RateOrigin::Backup
    }
}

/// Acquisition errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateError {
    /// Live fetch failed and no usable backup exists.
    #[error("no {what} available: live fetch failed ({live}); {backup}")]
    Unavailable {
        /// Which dataset was requested.
        what: &'static str,
        /// Why the live fetch failed.
        live: ProviderError,
        /// Why the backup could not be used.
        backup: BackupError,
    },
}

/// Fetches rate tables and currency names, keeping backups current.
pub struct RateBook<P> {
    provider: P,
    store: BackupStore,
    base: String,
    keys: BackupKeys,
}

impl<P: RateProvider> RateBook<P> {
    /// Creates a book for `base` with default backup keys.
    pub fn new(provider: P, store: BackupStore, base: &str) -> Self {
        Self {
            provider,
            store,
            base: normalize_code(base),
            keys: BackupKeys::default(),
        }
    }

    /// Overrides the backup keys.
    #[must_use]
    pub fn with_keys(mut self, keys: BackupKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Base currency of every table this book produces.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Fetches live quotes, falling back to the rate backup.
    pub async fn fetch_rates(&self) -> Result<Acquired<RateTable>, RateError> {
        let live = match self.live_table().await {
            Ok(table) => {
                info!(base = %self.base, count = table.len(), "Fetched live exchange rates");
                self.persist(&self.keys.rates, table.rates()).await;
                return Ok(Acquired::live(table));
            }
            Err(e) => e,
        };

        warn!(error = %live, "Live exchange rates unavailable, falling back to backup");
        match self.backup_table().await {
            Ok(table) => {
                info!(
                    key = %self.keys.rates,
                    count = table.len(),
                    "Loaded exchange rates from backup"
                );
                Ok(Acquired::backup(table))
            }
            Err(backup) => Err(RateError::Unavailable {
                what: "exchange rates",
                live,
                backup,
            }),
        }
    }

    /// Fetches currency names, falling back to the names backup.
    ///
    /// Names are filtered to the codes in `table` on both paths.
    pub async fn fetch_supported(
        &self,
        table: &RateTable,
    ) -> Result<Acquired<SupportedSet>, RateError> {
        let live = match self.live_supported(table).await {
            Ok(supported) => {
                info!(count = supported.len(), "Fetched live currency list");
                self.persist(&self.keys.supported, supported.names()).await;
                return Ok(Acquired::live(supported));
            }
            Err(e) => e,
        };

        warn!(error = %live, "Live currency list unavailable, falling back to backup");
        match self.backup_supported(table).await {
            Ok(supported) => {
                info!(
                    key = %self.keys.supported,
                    count = supported.len(),
                    "Loaded currency list from backup"
                );
                Ok(Acquired::backup(supported))
            }
            Err(backup) => Err(RateError::Unavailable {
                what: "currency list",
                live,
                backup,
            }),
        }
    }

    /// Fetches rates then names and bundles them with `symbols`.
    ///
    /// Missing rates are fatal. Missing names only empty the supported set,
    /// since conversion needs the rate table alone.
    pub async fn load(&self, symbols: SymbolTable) -> Result<Forex, RateError> {
        let rates = self.fetch_rates().await?;
        let supported = match self.fetch_supported(&rates.value).await {
            Ok(supported) => supported,
            Err(e) => {
                warn!(error = %e, "Serving without a currency list");
                Acquired::unavailable(SupportedSet::default())
            }
        };
        Ok(Forex::new(rates, supported, symbols))
    }

    async fn live_table(&self) -> Result<RateTable, ProviderError> {
        let quotes = self.provider.live_quotes(&self.base).await?;
        let table = RateTable::from_quotes(&self.base, quotes);
        if table.has_only_base() {
            return Err(ProviderError::Empty("quotes"));
        }
        Ok(table)
    }

    async fn backup_table(&self) -> Result<RateTable, BackupError> {
        let key = &self.keys.rates;
        let rates: BTreeMap<String, Decimal> = self.store.load(key).await?;

        if let Some(rate) = rates.get(&self.base)
            && *rate != Decimal::ONE
        {
            return Err(BackupError::invalid(
                key.as_str(),
                format!("base {} has rate {rate}, expected 1", self.base),
            ));
        }

        let table = RateTable::from_rates(&self.base, rates);
        if table.has_only_base() {
            return Err(BackupError::empty(key.as_str()));
        }
        Ok(table)
    }

    async fn live_supported(&self, table: &RateTable) -> Result<SupportedSet, ProviderError> {
        let names = self.provider.currency_names().await?;
        let supported = SupportedSet::filtered(names, table);
        if supported.is_empty() {
            return Err(ProviderError::Empty("currencies"));
        }
        Ok(supported)
    }

    async fn backup_supported(&self, table: &RateTable) -> Result<SupportedSet, BackupError> {
        let key = &self.keys.supported;
        let names: BTreeMap<String, String> = self.store.load(key).await?;
        let supported = SupportedSet::filtered(names, table);
        if supported.is_empty() {
            return Err(BackupError::empty(key.as_str()));
        }
        Ok(supported)
    }

    /// A failed backup write keeps the live data; it is only logged.
    async fn persist<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.store.save(key, value).await {
            error!(
                error = %e,
                key = %key,
                provider = self.store.provider_name(),
                "Failed to write backup"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::provider::{CurrencyNames, Quotes};

    /// Provider returning canned answers.
    struct FakeProvider {
        quotes: Result<Quotes, ProviderError>,
        names: Result<CurrencyNames, ProviderError>,
        requested_bases: Mutex<Vec<String>>,
    }

    impl FakeProvider {
        fn up() -> Self {
            Self {
                quotes: Ok(Quotes::from([
                    ("USDEUR".to_string(), dec!(0.25)),
                    ("USDGBP".to_string(), dec!(0.79)),
                ])),
                names: Ok(CurrencyNames::from([
                    ("USD".to_string(), "United States Dollar".to_string()),
                    ("EUR".to_string(), "Euro".to_string()),
                    ("GBP".to_string(), "British Pound Sterling".to_string()),
                    ("XAU".to_string(), "Gold (troy ounce)".to_string()),
                ])),
                requested_bases: Mutex::new(Vec::new()),
            }
        }

        fn down() -> Self {
            Self {
                quotes: Err(ProviderError::Transport("connection refused".into())),
                names: Err(ProviderError::Transport("connection refused".into())),
                requested_bases: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RateProvider for FakeProvider {
        async fn live_quotes(&self, base: &str) -> Result<Quotes, ProviderError> {
            self.requested_bases
                .lock()
                .expect("lock")
                .push(base.to_string());
            self.quotes.clone()
        }

        async fn currency_names(&self) -> Result<CurrencyNames, ProviderError> {
            self.names.clone()
        }
    }

    fn store() -> BackupStore {
        BackupStore::in_memory().expect("memory store")
    }

    #[tokio::test]
    async fn test_live_rates_are_tagged_and_backed_up() {
        let store = store();
        let book = RateBook::new(FakeProvider::up(), store.clone(), "usd");

        let rates = book.fetch_rates().await.expect("rates");

        assert_eq!(rates.origin, RateOrigin::Live);
        assert_eq!(rates.value.rate("EUR"), Ok(dec!(0.25)));
        assert_eq!(rates.value.rate("USD"), Ok(Decimal::ONE));
        assert_eq!(
            book.provider.requested_bases.lock().expect("lock").as_slice(),
            ["USD".to_string()]
        );

        let saved: BTreeMap<String, Decimal> =
            store.load(BackupKeys::DEFAULT_RATES).await.expect("backup written");
        assert_eq!(&saved, rates.value.rates());
    }

    #[tokio::test]
    async fn test_fallback_equals_last_backup_exactly() {
        let store = store();
        let live_book = RateBook::new(FakeProvider::up(), store.clone(), "USD");
        let live = live_book.fetch_rates().await.expect("live rates");

        let offline_book = RateBook::new(FakeProvider::down(), store, "USD");
        let cached = offline_book.fetch_rates().await.expect("cached rates");

        assert!(cached.is_fallback());
        assert_eq!(cached.value, live.value);
    }

    #[tokio::test]
    async fn test_no_live_and_no_backup_is_unavailable() {
        let book = RateBook::new(FakeProvider::down(), store(), "USD");

        let result = book.fetch_rates().await;

        assert_eq!(
            result,
            Err(RateError::Unavailable {
                what: "exchange rates",
                live: ProviderError::Transport("connection refused".into()),
                backup: BackupError::not_found(BackupKeys::DEFAULT_RATES),
            })
        );
    }

    #[tokio::test]
    async fn test_empty_live_quotes_fall_back() {
        let store = store();
        store
            .save(
                BackupKeys::DEFAULT_RATES,
                &BTreeMap::from([("EUR".to_string(), dec!(0.5)), ("USD".to_string(), dec!(1))]),
            )
            .await
            .expect("seed backup");
        let provider = FakeProvider {
            quotes: Ok(Quotes::new()),
            ..FakeProvider::up()
        };
        let book = RateBook::new(provider, store, "USD");

        let rates = book.fetch_rates().await.expect("rates");

        assert_eq!(rates.origin, RateOrigin::Backup);
        assert_eq!(rates.value.rate("EUR"), Ok(dec!(0.5)));
    }

    #[tokio::test]
    async fn test_backup_with_numeric_rates_loads() {
        let store = store();
        store
            .save(
                BackupKeys::DEFAULT_RATES,
                &serde_json::json!({"EUR": 0.25, "USD": 1}),
            )
            .await
            .expect("seed backup");
        let book = RateBook::new(FakeProvider::down(), store, "USD");

        let rates = book.fetch_rates().await.expect("rates");

        assert_eq!(rates.value.rate("EUR"), Ok(dec!(0.25)));
    }

    #[tokio::test]
    async fn test_backup_for_other_base_is_rejected() {
        let store = store();
        store
            .save(
                BackupKeys::DEFAULT_RATES,
                &BTreeMap::from([("USD".to_string(), dec!(1.08)), ("EUR".to_string(), dec!(1))]),
            )
            .await
            .expect("seed backup");
        let book = RateBook::new(FakeProvider::down(), store, "USD");

        let result = book.fetch_rates().await;

        assert!(matches!(
            result,
            Err(RateError::Unavailable {
                backup: BackupError::Invalid { .. },
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_supported_is_filtered_and_backed_up() {
        let store = store();
        let book = RateBook::new(FakeProvider::up(), store.clone(), "USD");
        let rates = book.fetch_rates().await.expect("rates");

        let supported = book.fetch_supported(&rates.value).await.expect("names");

        assert_eq!(supported.origin, RateOrigin::Live);
        assert_eq!(supported.value.len(), 3);
        assert_eq!(supported.value.name("XAU"), None);

        let saved: BTreeMap<String, String> = store
            .load(BackupKeys::DEFAULT_SUPPORTED)
            .await
            .expect("backup written");
        assert_eq!(&saved, supported.value.names());
    }

    #[tokio::test]
    async fn test_supported_backup_is_filtered_against_table() {
        let store = store();
        store
            .save(
                "names.json",
                &BTreeMap::from([
                    ("EUR".to_string(), "Euro".to_string()),
                    ("JPY".to_string(), "Japanese Yen".to_string()),
                ]),
            )
            .await
            .expect("seed backup");
        let book = RateBook::new(FakeProvider::down(), store, "USD")
            .with_keys(BackupKeys::new("rates.json", "names.json"));
        let table = RateTable::from_rates("USD", [("EUR".to_string(), dec!(0.25))]);

        let supported = book.fetch_supported(&table).await.expect("names");

        assert!(supported.is_fallback());
        assert_eq!(supported.value.len(), 1);
        assert_eq!(supported.value.name("EUR"), Some("Euro"));
    }

    #[tokio::test]
    async fn test_load_builds_forex() {
        let book = RateBook::new(FakeProvider::up(), store(), "USD");

        let forex = book.load(SymbolTable::builtin()).await.expect("forex");

        assert_eq!(forex.rates_origin(), RateOrigin::Live);
        assert_eq!(forex.supported_origin(), RateOrigin::Live);
        assert_eq!(
            forex.format_converted("USD", "EUR", dec!(10)),
            Ok("€ 2.50".to_string())
        );
    }

    #[tokio::test]
    async fn test_load_fails_without_any_data() {
        let book = RateBook::new(FakeProvider::down(), store(), "USD");

        let result = book.load(SymbolTable::builtin()).await;

        assert!(matches!(
            result,
            Err(RateError::Unavailable {
                what: "exchange rates",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_load_without_names_still_converts() {
        let provider = FakeProvider {
            names: Err(ProviderError::Status(503)),
            ..FakeProvider::up()
        };
        let book = RateBook::new(provider, store(), "USD");

        let forex = book.load(SymbolTable::builtin()).await.expect("forex");

        assert_eq!(forex.rates_origin(), RateOrigin::Live);
        assert_eq!(forex.supported_origin(), RateOrigin::Unavailable);
        assert!(forex.supported().is_empty());
        assert_eq!(
            forex.convert_request("USD", "GBP", "100"),
            Ok("£ 79.00".to_string())
        );
    }
}
