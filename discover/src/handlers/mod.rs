//! HTTP handlers
//!
//! Axum request handlers for the page endpoints.

pub mod discover;

pub use discover::get_discover;
