//! Domain layer
//!
//! Contains the discovery data model with no transport concerns.
//! - `entities`: Discovery feed records as served by the commuter API
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
