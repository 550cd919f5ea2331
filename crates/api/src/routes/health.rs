//! Health check endpoints.

use axum::{Json, Router, extract::State, routing::get};
use forex_core::RateOrigin;
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `healthy` on live rates, `degraded` when serving a backup.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Where the rate table came from.
    pub rates_origin: RateOrigin,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let rates_origin = state.forex.rates_origin();
    Json(HealthResponse {
        status: match rates_origin {
            RateOrigin::Live => "healthy",
            RateOrigin::Backup | RateOrigin::Unavailable => "degraded",
        },
        version: env!("CARGO_PKG_VERSION"),
        rates_origin,
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
