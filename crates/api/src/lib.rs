//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - The `/conv` conversion endpoint
//! - Currency listing and health routes
//! - JSON error responses

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use forex_core::Forex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Rates, names and symbols loaded at startup.
    pub forex: Arc<Forex>,
}

impl AppState {
    /// Wraps loaded rate data.
    #[must_use]
    pub fn new(forex: Forex) -> Self {
        Self {
            forex: Arc::new(forex),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
