//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod commuter;

pub use commuter::HttpDiscoverySource;
