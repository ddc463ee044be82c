//! Application layer
//!
//! Contains use cases and service orchestration.

pub mod discovery_service;

pub use discovery_service::{DiscoveryFeedLoader, LoadContext, DISCOVERY_PATH};
