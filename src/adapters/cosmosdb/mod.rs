//! Azure Cosmos DB integration
//!
//! [`CosmosDbClient`] wraps the `azure_data_cosmos` SDK client and implements
//! [`DocumentStore`](crate::adapters::database::DocumentStore). SDK error and
//! response types stop at this module boundary.

pub mod adapter;
pub mod client;

pub use client::{parse_connection_string, CosmosDbClient};
