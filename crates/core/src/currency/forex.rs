//! Read-only conversion facade built once at startup.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::conversion::{format_amount, parse_amount, validate_amount};
use super::error::ConversionError;
use super::symbols::SymbolTable;
use super::table::{RateTable, SupportedSet};
use crate::acquisition::{Acquired, RateOrigin};

/// Rates, supported names and symbols, plus where the data came from.
#[derive(Debug, Clone)]
pub struct Forex {
    rates: Acquired<RateTable>,
    supported: Acquired<SupportedSet>,
    symbols: SymbolTable,
    as_of: DateTime<Utc>,
}

impl Forex {
    /// Bundles acquired data; `as_of` is set to now.
    #[must_use]
    pub fn new(
        rates: Acquired<RateTable>,
        supported: Acquired<SupportedSet>,
        symbols: SymbolTable,
    ) -> Self {
        Self {
            rates,
            supported,
            symbols,
            as_of: Utc::now(),
        }
    }

    /// The rate table.
    #[must_use]
    pub fn table(&self) -> &RateTable {
        &self.rates.value
    }

    /// Supported currency names.
    #[must_use]
    pub fn supported(&self) -> &SupportedSet {
        &self.supported.value
    }

    /// Symbol lookup.
    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Where the rate table came from.
    #[must_use]
    pub fn rates_origin(&self) -> RateOrigin {
        self.rates.origin
    }

    /// Where the supported names came from.
    #[must_use]
    pub fn supported_origin(&self) -> RateOrigin {
        self.supported.origin
    }

    /// When the data was acquired.
    #[must_use]
    pub fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }

    /// Rejects negative amounts.
    pub fn validate(&self, amount: Decimal) -> Result<(), ConversionError> {
        validate_amount(amount)
    }

    /// Converts `amount` between two known currencies.
    pub fn convert(&self, from: &str, to: &str, amount: Decimal) -> Result<Decimal, ConversionError> {
        self.table().convert(from, to, amount)
    }

    /// Converts and renders as `"<symbol> <amount>"`, e.g. `"€ 2.50"`.
    pub fn format_converted(
        &self,
        from: &str,
        to: &str,
        amount: Decimal,
    ) -> Result<String, ConversionError> {
        let converted = self.convert(from, to, amount)?;
        let symbol = self.symbols.symbol(to)?;
        Ok(format!("{symbol} {}", format_amount(converted)))
    }

    /// Parses, validates, converts and formats a raw request amount.
    pub fn convert_request(
        &self,
        from: &str,
        to: &str,
        raw_amount: &str,
    ) -> Result<String, ConversionError> {
        let amount = parse_amount(raw_amount)?;
        self.validate(amount)?;
        self.format_converted(from, to, amount)
    }
}
