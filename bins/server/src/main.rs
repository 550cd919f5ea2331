//! Forex API Server
//!
//! Main entry point for the currency conversion service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forex_api::{AppState, create_router};
use forex_core::{BackupKeys, BackupProvider, BackupStore, RateBook, SymbolTable};
use forex_provider::ExchangeRateHost;
use forex_shared::{AppConfig, SymbolsConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forex=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Remote API client
    let provider = ExchangeRateHost::from_config(&config.provider)
        .context("Failed to build exchange-rate client")?;
    info!(base_url = %provider.base_url(), "Exchange-rate client configured");

    // Backup storage
    let store = BackupStore::from_provider(BackupProvider::local_fs(&config.backup.root))
        .context("Failed to open backup storage")?;
    info!(root = %config.backup.root.display(), "Backup storage configured");

    let symbols = load_symbols(&config.symbols)?;

    // Acquire rates; no live data and no backup is fatal
    let book = RateBook::new(provider, store, &config.provider.base_currency).with_keys(
        BackupKeys::new(&config.backup.rates_key, &config.backup.supported_key),
    );
    let forex = book
        .load(symbols)
        .await
        .context("No exchange-rate data available; check provider settings or restore a backup")?;

    if forex.rates_origin() == forex_core::RateOrigin::Backup {
        warn!("Serving exchange rates from backup");
    }
    info!(
        base = %forex.table().base(),
        rates = forex.table().len(),
        supported = forex.supported().len(),
        rates_origin = ?forex.rates_origin(),
        supported_origin = ?forex.supported_origin(),
        "Exchange rates loaded"
    );

    // Create router
    let app = create_router(AppState::new(forex));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn load_symbols(config: &SymbolsConfig) -> anyhow::Result<SymbolTable> {
    match &config.path {
        Some(path) => {
            let symbols = SymbolTable::load_with_overrides(path)?;
            info!(path = %path.display(), count = symbols.len(), "Loaded currency symbols");
            Ok(symbols)
        }
        None => Ok(SymbolTable::builtin()),
    }
}
