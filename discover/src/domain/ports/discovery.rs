//! Discovery source port trait
//!
//! Defines the interface for fetching the discovery listing.

use async_trait::async_trait;
use reqwest::Url;

use crate::domain::entities::DiscoveryItem;
use crate::error::DiscoveryError;

/// Raw outcome of one discovery request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryReply {
    /// HTTP status code of the response
    pub status: u16,
    /// Decoded `results`, or `None` when the body carried no list
    pub results: Option<Vec<DiscoveryItem>>,
}

/// Source of the discovery listing
#[async_trait]
pub trait DiscoverySource: Send + Sync {
    /// Issue a single GET against `url` and decode the body
    ///
    /// Transport failures and undecodable success bodies are errors.
    /// Non-2xx statuses are not: they come back in `DiscoveryReply::status`.
    async fn fetch(&self, url: &Url) -> Result<DiscoveryReply, DiscoveryError>;
}
