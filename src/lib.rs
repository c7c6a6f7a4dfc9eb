//! Pricing service for the car-sharing marketplace.
//!
//! The web UI calls this service for every price it shows: listing cards,
//! the car detail booking panel and the host/admin dashboards.

pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::PricingConfig;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pricing: Arc<PricingConfig>,
}

impl AppState {
    pub fn new(pricing: PricingConfig) -> Self {
        Self {
            pricing: Arc::new(pricing),
        }
    }
}

/// Build the application router
pub fn app(pricing: PricingConfig) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .nest("/api", pricing::router())
        .fallback(routes::not_found)
        .with_state(AppState::new(pricing))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
