//! Commuter discovery API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::domain::entities::DiscoveryItem;
use crate::domain::ports::{DiscoveryReply, DiscoverySource};
use crate::error::DiscoveryError;

/// reqwest-backed implementation of [`DiscoverySource`]
pub struct HttpDiscoverySource {
    http: Client,
}

impl HttpDiscoverySource {
    /// Create a client; without a timeout a hung request waits indefinitely
    pub fn new(timeout: Option<Duration>) -> Result<Self, DiscoveryError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
        })
    }
}

/// Response body of `GET /api/v1/discovery`
#[derive(Deserialize)]
struct DiscoveryPayload {
    #[serde(default)]
    results: Option<Vec<DiscoveryItem>>,
}

#[async_trait]
impl DiscoverySource for HttpDiscoverySource {
    async fn fetch(&self, url: &Url) -> Result<DiscoveryReply, DiscoveryError> {
        let response = self
            .http
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        decode_body(status, &body)
    }
}

/// Interpret a discovery body for the given status
///
/// A success body must decode. Any other status keeps whatever list it
/// carries, or none at all.
fn decode_body(status: u16, body: &[u8]) -> Result<DiscoveryReply, DiscoveryError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(DiscoveryReply {
            status,
            results: None,
        });
    }

    match serde_json::from_slice::<DiscoveryPayload>(body) {
        Ok(payload) => Ok(DiscoveryReply {
            status,
            results: payload.results,
        }),
        Err(e) if (200..300).contains(&status) => Err(DiscoveryError::Decode(e.to_string())),
        Err(e) => {
            tracing::warn!("Discarding undecodable discovery body (status {}): {}", status, e);
            Ok(DiscoveryReply {
                status,
                results: None,
            })
        }
    }
}
