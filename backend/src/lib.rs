//! # Mock Price/Balance Provider
//!
//! A small axum service standing in for the third-party pricing/wallet API
//! the swap frontend consumes. Prices fluctuate deterministically around
//! fixed base values so the demo behaves like a live feed without any
//! external dependency.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod handlers;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};

use services::{gas::GasOracle, prices::PriceSource};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub prices: Arc<PriceSource>,
    pub gas: Arc<GasOracle>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            prices: Arc::new(PriceSource::new()),
            gas: Arc::new(GasOracle::new(config.base_gas_price_gwei)),
        }
    }
}

/// Build the provider router with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/api/tokens", get(handlers::tokens::list_tokens))
        .route("/api/tokens/:symbol", get(handlers::tokens::get_token))
        .route("/api/gas", get(handlers::gas::get_gas_estimate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
