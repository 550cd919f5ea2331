//! Shared configuration and error types for the forex service.
//!
//! This crate provides the pieces every other crate agrees on:
//! - Application-wide error type with HTTP status mapping
//! - Configuration management (files + `FOREX__*` environment)

pub mod config;
pub mod error;

pub use config::{AppConfig, BackupConfig, ProviderConfig, ServerConfig, SymbolsConfig};
pub use error::{AppError, AppResult};
