//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They record what was requested so tests can verify behavior.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use reqwest::Url;

use crate::domain::ports::{DiscoveryReply, DiscoverySource};
use crate::error::DiscoveryError;

// ============================================================================
// Mock Discovery Source
// ============================================================================

pub struct MockDiscoverySource {
    reply: DiscoveryReply,
    decode_failure: Option<String>,
    requested: Arc<RwLock<Vec<String>>>,
}

impl Default for MockDiscoverySource {
    fn default() -> Self {
        Self {
            reply: DiscoveryReply {
                status: 200,
                results: Some(vec![]),
            },
            decode_failure: None,
            requested: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl MockDiscoverySource {
    /// An empty, successful listing
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(mut self, reply: DiscoveryReply) -> Self {
        self.reply = reply;
        self
    }

    /// Fail every fetch with a decode error carrying `message`
    pub fn failing_with(mut self, message: &str) -> Self {
        self.decode_failure = Some(message.to_string());
        self
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.read().unwrap().clone()
    }
}

#[async_trait]
impl DiscoverySource for MockDiscoverySource {
    async fn fetch(&self, url: &Url) -> Result<DiscoveryReply, DiscoveryError> {
        self.requested.write().unwrap().push(url.to_string());

        match &self.decode_failure {
            Some(message) => Err(DiscoveryError::Decode(message.clone())),
            None => Ok(self.reply.clone()),
        }
    }
}
