//! Commuter discover page server
//!
//! Serves `/discover`, rendered server-side from the local commuter API.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commuter_discover::adapters::HttpDiscoverySource;
use commuter_discover::app::DiscoveryFeedLoader;
use commuter_discover::config::Config;
use commuter_discover::domain::ports::DiscoverySource;
use commuter_discover::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,commuter_discover=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting commuter discover...");

    let config = Config::from_env();
    tracing::info!(
        "Discovery API expected at 127.0.0.1:{}",
        config.commuter_port
    );

    let source: Arc<dyn DiscoverySource> = Arc::new(
        HttpDiscoverySource::new(config.request_timeout)
            .context("Failed to build HTTP client")?,
    );
    let state = AppState {
        loader: Arc::new(DiscoveryFeedLoader::new(source, config.commuter_port)),
    };

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.listen_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
