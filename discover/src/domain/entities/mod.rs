//! Domain entities
//!
//! Records decoded from the discovery API.

pub mod discovery;

pub use discovery::{Author, DiscoveryItem, DiscoveryResponse, ItemMetadata, NteractMetadata};
