//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote exchange-rate API configuration.
    pub provider: ProviderConfig,
    /// Backup storage configuration.
    #[serde(default)]
    pub backup: BackupConfig,
    /// Currency symbol lookup configuration.
    #[serde(default)]
    pub symbols: SymbolsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Remote exchange-rate API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the API, without the `/live` or `/list` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Access token sent as the `access_key` query parameter.
    pub access_key: String,
    /// Currency every quote is expressed against.
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://api.exchangerate.host".to_string()
}

fn default_base_currency() -> String {
    "USD".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Backup storage configuration.
///
/// Backups always live on the local filesystem under `root`.
#[derive(Debug, Clone, Deserialize)]
pub struct BackupConfig {
    /// Directory holding the backup files.
    #[serde(default = "default_backup_root")]
    pub root: PathBuf,
    /// File name of the rate-table backup.
    #[serde(default = "default_rates_key")]
    pub rates_key: String,
    /// File name of the supported-currency backup.
    #[serde(default = "default_supported_key")]
    pub supported_key: String,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            root: default_backup_root(),
            rates_key: default_rates_key(),
            supported_key: default_supported_key(),
        }
    }
}

fn default_backup_root() -> PathBuf {
    PathBuf::from("./data")
}

fn default_rates_key() -> String {
    "forex_backup.json".to_string()
}

fn default_supported_key() -> String {
    "forex_supported_backup.json".to_string()
}

/// Currency symbol lookup configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SymbolsConfig {
    /// Optional JSON file (`{"EUR": "€", ...}`) merged over the built-in table.
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FOREX").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
