//! In-memory document store
//!
//! Mirrors the Cosmos DB status semantics the quickstart depends on:
//! - 409 when a database, container or item already exists
//! - 404 when a database, container or item is missing
//! - 400 when an item's partition key property doesn't match the supplied value
//!
//! Items are keyed by (partition key value, id), so the same id may exist
//! once per logical partition.

use crate::adapters::database::traits::{ContainerSpec, DocumentStore, ItemResponse, ResponseMetadata};
use crate::domain::ids::{DocumentId, PartitionKeyValue};
use crate::domain::{CosmosDbError, QuickstartError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

// Rough RU costs for a 1 KB item
const WRITE_CHARGE: f64 = 6.29;
const READ_CHARGE: f64 = 1.0;

type ItemKey = (String, String);

#[derive(Debug)]
struct MemoryContainer {
    partition_key_path: String,
    throughput: u32,
    items: HashMap<ItemKey, Value>,
}

type Databases = HashMap<String, HashMap<String, MemoryContainer>>;

/// Document store held entirely in process memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    databases: Mutex<Databases>,
    requests: AtomicU64,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items in a container, if it exists
    pub fn item_count(&self, database: &str, container: &str) -> Option<usize> {
        self.lock()
            .get(database)
            .and_then(|db| db.get(container))
            .map(|c| c.items.len())
    }

    /// Provisioned throughput of a container, if it exists
    pub fn container_throughput(&self, database: &str, container: &str) -> Option<u32> {
        self.lock()
            .get(database)
            .and_then(|db| db.get(container))
            .map(|c| c.throughput)
    }

    fn lock(&self) -> MutexGuard<'_, Databases> {
        // A panic while holding the lock leaves the maps consistent; keep going.
        self.databases
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn metadata(&self, status: u16, charge: f64) -> ResponseMetadata {
        let n = self.requests.fetch_add(1, Ordering::Relaxed) + 1;
        ResponseMetadata {
            status,
            activity_id: Some(format!("memory-{n:08}")),
            request_charge: Some(charge),
        }
    }
}

fn error(status: u16, message: String) -> QuickstartError {
    QuickstartError::CosmosDb(CosmosDbError::from_status(Some(status), message))
}

fn container_mut<'a>(
    databases: &'a mut Databases,
    database: &str,
    container: &str,
) -> Result<&'a mut MemoryContainer> {
    databases
        .get_mut(database)
        .ok_or_else(|| error(404, format!("Database {database} does not exist")))?
        .get_mut(container)
        .ok_or_else(|| error(404, format!("Container {container} does not exist")))
}

/// Resolve a partition key path such as `/customerId` or `/address/zip` against a document
fn value_at_path<'a>(item: &'a Value, path: &str) -> Option<&'a Value> {
    path.trim_start_matches('/')
        .split('/')
        .try_fold(item, |current, segment| current.get(segment))
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create_database(&self, database: &str) -> Result<ResponseMetadata> {
        let mut databases = self.lock();
        if databases.contains_key(database) {
            return Err(error(409, format!("Database {database} already exists")));
        }
        databases.insert(database.to_string(), HashMap::new());
        drop(databases);

        Ok(self.metadata(201, WRITE_CHARGE))
    }

    async fn create_container(
        &self,
        database: &str,
        spec: &ContainerSpec,
    ) -> Result<ResponseMetadata> {
        let mut databases = self.lock();
        let containers = databases
            .get_mut(database)
            .ok_or_else(|| error(404, format!("Database {database} does not exist")))?;

        if containers.contains_key(&spec.name) {
            return Err(error(409, format!("Container {} already exists", spec.name)));
        }

        containers.insert(
            spec.name.clone(),
            MemoryContainer {
                partition_key_path: spec.partition_key_path.clone(),
                throughput: spec.effective_throughput(),
                items: HashMap::new(),
            },
        );
        drop(databases);

        Ok(self.metadata(201, WRITE_CHARGE))
    }

    async fn create_item(
        &self,
        database: &str,
        container: &str,
        partition_key: &PartitionKeyValue,
        item: Value,
    ) -> Result<ResponseMetadata> {
        let id = item
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| error(400, "Item is missing a string 'id' property".to_string()))?
            .to_string();

        let mut databases = self.lock();
        let target = container_mut(&mut databases, database, container)?;

        let embedded = value_at_path(&item, &target.partition_key_path).and_then(Value::as_str);
        if embedded != Some(partition_key.as_str()) {
            return Err(error(
                400,
                format!(
                    "Partition key {} extracted from item doesn't match supplied value {partition_key}",
                    target.partition_key_path
                ),
            ));
        }

        let key = (partition_key.as_str().to_string(), id);
        if target.items.contains_key(&key) {
            return Err(error(
                409,
                format!("Item {} already exists in partition {partition_key}", key.1),
            ));
        }
        target.items.insert(key, item);
        drop(databases);

        Ok(self.metadata(201, WRITE_CHARGE))
    }

    async fn read_item(
        &self,
        database: &str,
        container: &str,
        partition_key: &PartitionKeyValue,
        id: &DocumentId,
    ) -> Result<ItemResponse> {
        let mut databases = self.lock();
        let target = container_mut(&mut databases, database, container)?;

        let key = (partition_key.as_str().to_string(), id.as_str().to_string());
        let body = target.items.get(&key).cloned().ok_or_else(|| {
            error(404, format!("Item {id} not found in partition {partition_key}"))
        })?;
        drop(databases);

        Ok(ItemResponse {
            body,
            metadata: self.metadata(200, READ_CHARGE),
        })
    }

    async fn delete_item(
        &self,
        database: &str,
        container: &str,
        partition_key: &PartitionKeyValue,
        id: &DocumentId,
    ) -> Result<ResponseMetadata> {
        let mut databases = self.lock();
        let target = container_mut(&mut databases, database, container)?;

        let key = (partition_key.as_str().to_string(), id.as_str().to_string());
        if target.items.remove(&key).is_none() {
            return Err(error(404, format!("Item {id} not found in partition {partition_key}")));
        }
        drop(databases);

        Ok(self.metadata(204, WRITE_CHARGE))
    }
}
