//! Core logic for the forex conversion service.
//!
//! This crate contains the rate tables, conversion arithmetic and rate
//! acquisition with ZERO web dependencies. The remote API client lives in
//! `forex-provider` and the HTTP routes in `forex-api`.
//!
//! # Modules
//!
//! - `currency` - Rate tables, conversion, validation and formatting
//! - `acquisition` - Live fetch with backup fallback
//! - `provider` - Remote rate API abstraction
//! - `storage` - JSON backup snapshots over OpenDAL

pub mod acquisition;
pub mod currency;
pub mod provider;
pub mod storage;

pub use acquisition::{Acquired, RateBook, RateError, RateOrigin};
pub use currency::{ConversionError, Forex, RateTable, SupportedSet, SymbolTable};
pub use provider::{ProviderError, RateProvider};
pub use storage::{BackupError, BackupKeys, BackupProvider, BackupStore};
