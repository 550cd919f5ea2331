//! Supported currency listing route.

use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use forex_core::RateOrigin;
use serde::Serialize;

use crate::AppState;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/currencies", get(list_currencies))
}

/// Response for a currency.
#[derive(Debug, Serialize)]
pub struct CurrencyResponse {
    /// Currency code (ISO 4217).
    pub code: String,
    /// Currency name.
    pub name: String,
    /// Display symbol, if known.
    pub symbol: Option<String>,
}

/// Response for the currency listing.
#[derive(Debug, Serialize)]
pub struct CurrencyListResponse {
    /// Base currency of the rate table.
    pub base: String,
    /// Where the rate table came from.
    pub rates_origin: RateOrigin,
    /// Where the currency names came from.
    pub supported_origin: RateOrigin,
    /// When the data was loaded.
    pub as_of: DateTime<Utc>,
    /// Supported currencies sorted by code.
    pub currencies: Vec<CurrencyResponse>,
}

/// GET `/currencies` - List supported currencies.
async fn list_currencies(State(state): State<AppState>) -> Json<CurrencyListResponse> {
    let forex = &state.forex;
    let currencies = forex
        .supported()
        .names()
        .iter()
        .map(|(code, name)| CurrencyResponse {
            code: code.clone(),
            name: name.clone(),
            symbol: forex.symbols().symbol(code).ok().map(str::to_string),
        })
        .collect();

    Json(CurrencyListResponse {
        base: forex.table().base().to_string(),
        rates_origin: forex.rates_origin(),
        supported_origin: forex.supported_origin(),
        as_of: forex.as_of(),
        currencies,
    })
}
