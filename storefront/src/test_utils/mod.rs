//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Display channel mocks either record every opened certificate or refuse
//! them all, so adoption can be tested with and without a working outbox.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
