//! HTTP client for the exchange-rate API.
//!
//! Implements [`forex_core::RateProvider`] against an
//! exchangerate.host-style API exposing `/live` and `/list`.

pub mod exchange_rate_host;

pub use exchange_rate_host::ExchangeRateHost;
