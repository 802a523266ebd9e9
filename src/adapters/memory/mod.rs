//! In-process document store
//!
//! Backs `run --dry-run` and the test suite.

pub mod store;

pub use store::InMemoryStore;
