//! Rate table and supported-currency set.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use super::conversion::convert_via_base;
use super::error::ConversionError;

/// Normalizes a currency code for lookup (`" eur "` -> `"EUR"`).
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Exchange rates relative to a single base currency.
///
/// Invariants: the base is always present with rate 1, and every rate is
/// strictly positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    base: String,
    rates: BTreeMap<String, Decimal>,
}

impl RateTable {
    /// Builds a table from live API quotes keyed `<BASE><CODE>` (e.g. `USDEUR`).
    ///
    /// The base prefix is stripped from each key. Keys without the prefix and
    /// non-positive quotes are dropped.
    #[must_use]
    pub fn from_quotes(
        base: &str,
        quotes: impl IntoIterator<Item = (String, Decimal)>,
    ) -> Self {
        let base = normalize_code(base);
        let stripped = quotes.into_iter().filter_map(|(key, rate)| {
            let key = normalize_code(&key);
            match key.strip_prefix(base.as_str()) {
                Some(code) if !code.is_empty() => Some((code.to_string(), rate)),
                _ => {
                    debug!(quote = %key, base = %base, "Skipping quote without base prefix");
                    None
                }
            }
        });
        Self::from_rates(&base, stripped)
    }

    /// Builds a table from rates already keyed by currency code.
    ///
    /// The base is (re)set to 1 and non-positive rates are dropped.
    #[must_use]
    pub fn from_rates(base: &str, rates: impl IntoIterator<Item = (String, Decimal)>) -> Self {
        let base = normalize_code(base);
        let mut table: BTreeMap<String, Decimal> = rates
            .into_iter()
            .filter_map(|(code, rate)| {
                let code = normalize_code(&code);
                if rate > Decimal::ZERO {
                    Some((code, rate))
                } else {
                    warn!(code = %code, rate = %rate, "Dropping non-positive exchange rate");
                    None
                }
            })
            .collect();
        table.insert(base.clone(), Decimal::ONE);
        Self { base, rates: table }
    }

    /// Base currency code.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// All rates keyed by code, in code order.
    #[must_use]
    pub fn rates(&self) -> &BTreeMap<String, Decimal> {
        &self.rates
    }

    /// Number of currencies, base included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True when only the base currency is known.
    #[must_use]
    pub fn has_only_base(&self) -> bool {
        self.rates.len() <= 1
    }

    /// Always false: the base is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Returns true if `code` has a rate.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(&normalize_code(code))
    }

    /// Looks up the rate of `code` relative to the base.
    pub fn rate(&self, code: &str) -> Result<Decimal, ConversionError> {
        let code = normalize_code(code);
        self.rates
            .get(&code)
            .copied()
            .ok_or(ConversionError::UnknownCurrency(code))
    }

    /// Converts `amount` from one currency to another.
    ///
    /// Both codes must be known. Equal codes return `amount` unchanged;
    /// otherwise the result is rounded to 2 decimal places.
    pub fn convert(&self, from: &str, to: &str, amount: Decimal) -> Result<Decimal, ConversionError> {
        let from_rate = self.rate(from)?;
        let to_rate = self.rate(to)?;

        if normalize_code(from) == normalize_code(to) {
            return Ok(amount);
        }

        convert_via_base(amount, from_rate, to_rate).ok_or_else(|| {
            ConversionError::InvalidAmount(format!("{amount} is too large to convert"))
        })
    }
}

/// Currency names for every code the rate table knows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SupportedSet {
    names: BTreeMap<String, String>,
}

impl SupportedSet {
    /// Keeps only the names whose code exists in `table`.
    #[must_use]
    pub fn filtered(
        names: impl IntoIterator<Item = (String, String)>,
        table: &RateTable,
    ) -> Self {
        let names = names
            .into_iter()
            .map(|(code, name)| (normalize_code(&code), name))
            .filter(|(code, _)| table.contains(code))
            .collect();
        Self { names }
    }

    /// Name of `code`, if supported.
    #[must_use]
    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(&normalize_code(code)).map(String::as_str)
    }

    /// All names keyed by code, in code order.
    #[must_use]
    pub fn names(&self) -> &BTreeMap<String, String> {
        &self.names
    }

    /// Number of supported currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if no currency is supported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
