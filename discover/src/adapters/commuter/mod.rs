//! Commuter adapter
//!
//! HTTP client for the commuter discovery API.

pub mod client;

pub use client::HttpDiscoverySource;
