//! Commuter discover page
//!
//! Renders the feed of discovered notebooks served by the commuter API.
//! Uses hexagonal (ports & adapters) architecture: the discovery API sits
//! behind the `DiscoverySource` port so the loader and page can be tested
//! without a network.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;
pub mod handlers;

#[cfg(test)]
mod test_utils;


use app::DiscoveryFeedLoader;
use domain::ports::DiscoverySource;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<DiscoveryFeedLoader<dyn DiscoverySource>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router serving the discover page
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/discover", get(handlers::get_discover))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
