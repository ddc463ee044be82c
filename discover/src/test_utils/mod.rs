//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Manual mocks keep the recorded requests explicit and easy to assert on.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
