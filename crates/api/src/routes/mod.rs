//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod conversion;
pub mod currencies;
pub mod health;

/// Creates the router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(conversion::routes())
        .merge(currencies::routes())
}
