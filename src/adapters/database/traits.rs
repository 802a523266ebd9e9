//! Document store abstraction
//!
//! This module defines the trait that document store backends implement.
//! Every operation is a single request/response exchange; conflict handling
//! is left to the caller.

use crate::domain::ids::{DocumentId, PartitionKeyValue};
use crate::domain::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Manual throughput used when a container spec doesn't name one (RU/s)
pub const DEFAULT_THROUGHPUT: u32 = 400;

/// Diagnostic metadata returned with every response
///
/// Logged only; never part of an operation's functional result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseMetadata {
    /// HTTP status code
    pub status: u16,

    /// Server-assigned request tracing identifier (`x-ms-activity-id`)
    pub activity_id: Option<String>,

    /// Request units consumed (`x-ms-request-charge`)
    pub request_charge: Option<f64>,
}

impl ResponseMetadata {
    /// Build metadata from raw header values
    ///
    /// An unparsable request charge is dropped rather than reported.
    pub fn from_parts(status: u16, activity_id: Option<&str>, request_charge: Option<&str>) -> Self {
        Self {
            status,
            activity_id: activity_id
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            request_charge: request_charge.and_then(|s| s.trim().parse::<f64>().ok()),
        }
    }
}

/// Container to provision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSpec {
    /// Container name
    pub name: String,

    /// Single partition key path, e.g. `/customerId`
    pub partition_key_path: String,

    /// Manual throughput in RU/s; `None` means [`DEFAULT_THROUGHPUT`]
    pub throughput: Option<u32>,
}

impl ContainerSpec {
    /// Creates a spec with the default throughput
    pub fn new(name: impl Into<String>, partition_key_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            partition_key_path: partition_key_path.into(),
            throughput: None,
        }
    }

    /// Sets an explicit manual throughput
    pub fn with_throughput(mut self, throughput: u32) -> Self {
        self.throughput = Some(throughput);
        self
    }

    /// Throughput that will actually be requested
    pub fn effective_throughput(&self) -> u32 {
        self.throughput.unwrap_or(DEFAULT_THROUGHPUT)
    }
}

/// A point-read result: raw JSON body plus response metadata
#[derive(Debug, Clone)]
pub struct ItemResponse {
    /// Response body as returned by the store
    pub body: Value,

    /// Response metadata
    pub metadata: ResponseMetadata,
}

/// Document store trait
///
/// Implementations report "already exists" as
/// [`CosmosDbError::Conflict`](crate::domain::CosmosDbError::Conflict) and
/// missing resources as
/// [`CosmosDbError::NotFound`](crate::domain::CosmosDbError::NotFound).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short name of the backend, used in log output
    fn backend_name(&self) -> &'static str;

    /// Create a database
    async fn create_database(&self, database: &str) -> Result<ResponseMetadata>;

    /// Create a container inside a database
    async fn create_container(&self, database: &str, spec: &ContainerSpec)
        -> Result<ResponseMetadata>;

    /// Insert a JSON item under a partition key value
    ///
    /// Writes request session consistency.
    async fn create_item(
        &self,
        database: &str,
        container: &str,
        partition_key: &PartitionKeyValue,
        item: Value,
    ) -> Result<ResponseMetadata>;

    /// Point-read an item by (partition key, id)
    async fn read_item(
        &self,
        database: &str,
        container: &str,
        partition_key: &PartitionKeyValue,
        id: &DocumentId,
    ) -> Result<ItemResponse>;

    /// Delete an item by (partition key, id)
    async fn delete_item(
        &self,
        database: &str,
        container: &str,
        partition_key: &PartitionKeyValue,
        id: &DocumentId,
    ) -> Result<ResponseMetadata>;
}
