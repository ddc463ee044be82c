//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod discovery;

pub use discovery::{DiscoveryReply, DiscoverySource};
