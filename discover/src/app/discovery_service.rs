//! Discovery feed loader
//!
//! Resolves where the discovery listing lives for the current render and
//! loads it once per page.

use std::sync::Arc;

use axum::http::Uri;
use reqwest::Url;

use crate::domain::entities::DiscoveryResponse;
use crate::domain::ports::DiscoverySource;
use crate::error::{AppError, DiscoveryError};

/// Path of the discovery endpoint on the commuter API
pub const DISCOVERY_PATH: &str = "/api/v1/discovery";

/// Where a page load is running
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadContext {
    /// Server-side render of an inbound request; talks to the local API
    Server { inbound: Uri },
    /// Running in a client; the endpoint is relative to the page origin
    Client { origin: Url },
}

/// Loads the discovery feed for a page
pub struct DiscoveryFeedLoader<S>
where
    S: DiscoverySource + ?Sized,
{
    source: Arc<S>,
    commuter_port: u16,
}

impl<S> DiscoveryFeedLoader<S>
where
    S: DiscoverySource + ?Sized,
{
    pub fn new(source: Arc<S>, commuter_port: u16) -> Self {
        Self {
            source,
            commuter_port,
        }
    }

    /// The endpoint as the page would address it
    pub fn resolve_endpoint(&self, context: &LoadContext) -> String {
        match context {
            LoadContext::Server { .. } => {
                format!("http://127.0.0.1:{}{}", self.commuter_port, DISCOVERY_PATH)
            }
            LoadContext::Client { .. } => DISCOVERY_PATH.to_string(),
        }
    }

    /// The absolute URL the request is sent to
    pub fn request_url(&self, context: &LoadContext) -> Result<Url, DiscoveryError> {
        let endpoint = self.resolve_endpoint(context);
        let url = match context {
            LoadContext::Server { .. } => Url::parse(&endpoint),
            LoadContext::Client { origin } => origin.join(&endpoint),
        };
        url.map_err(|e| DiscoveryError::InvalidUrl(format!("{}: {}", endpoint, e)))
    }

    /// Fetch the discovery listing for one page load
    pub async fn load(&self, context: &LoadContext) -> Result<DiscoveryResponse, AppError> {
        let url = self.request_url(context)?;

        match context {
            LoadContext::Server { inbound } => {
                tracing::debug!("Loading discoveries from {} for {}", url, inbound)
            }
            LoadContext::Client { .. } => tracing::debug!("Loading discoveries from {}", url),
        }

        let reply = self.source.fetch(&url).await?;
        let response = DiscoveryResponse {
            results: reply.results.unwrap_or_default(),
            status_code: reply.status,
        };

        if !response.is_success() {
            tracing::warn!("Discovery API at {} answered {}", url, response.status_code);
        }

        Ok(response)
    }
}
