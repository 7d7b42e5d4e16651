//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The enrichment client and lead store are manual in-memory mocks so tests
//! can inspect what was requested and written. The notifier uses the
//! mockall-generated `MockLeadNotifier` where call counts matter.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
