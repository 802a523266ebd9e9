//! Document store abstraction layer
//!
//! A trait-based abstraction over document stores, so the walkthrough runs
//! unchanged against Cosmos DB or the in-memory store.

pub mod factory;
pub mod traits;

pub use factory::create_document_store;
pub use traits::{ContainerSpec, DocumentStore, ItemResponse, ResponseMetadata, DEFAULT_THROUGHPUT};
