//! Provisioning and CRUD client
//!
//! Thin layer over a [`DocumentStore`] that adds idempotent-create
//! semantics: a conflict on database, container or item creation is
//! reported as [`Provisioned::AlreadyExists`] instead of an error.

use crate::adapters::database::{ContainerSpec, DocumentStore, ResponseMetadata};
use crate::domain::ids::{DocumentId, PartitionKeyValue};
use crate::domain::{CustomerDocument, QuickstartError, Result};
use crate::log_cosmos_response;
use std::sync::Arc;

/// Outcome of an idempotent create
#[derive(Debug, Clone, PartialEq)]
pub enum Provisioned {
    /// The resource was created by this call
    Created(ResponseMetadata),

    /// The resource already existed (HTTP 409)
    AlreadyExists,
}

impl Provisioned {
    /// Returns true if this call created the resource
    pub fn was_created(&self) -> bool {
        matches!(self, Provisioned::Created(_))
    }
}

/// Client that provisions resources and performs single-document CRUD
#[derive(Clone)]
pub struct ProvisioningClient {
    store: Arc<dyn DocumentStore>,
}

impl ProvisioningClient {
    /// Wrap a document store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Name of the underlying backend
    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Ensure a database exists
    ///
    /// # Errors
    ///
    /// Propagates every store error except a conflict.
    pub async fn ensure_database(&self, name: &str) -> Result<Provisioned> {
        tracing::debug!(database = name, "Creating database");
        let result = self.store.create_database(name).await;
        absorb_conflict(result, "Database", name)
    }

    /// Ensure a container exists with the given partition key and throughput
    ///
    /// # Errors
    ///
    /// Propagates every store error except a conflict.
    pub async fn ensure_container(
        &self,
        database: &str,
        container: &ContainerSpec,
    ) -> Result<Provisioned> {
        tracing::debug!(
            database = database,
            container = %container.name,
            partition_key = %container.partition_key_path,
            throughput = container.effective_throughput(),
            "Creating container"
        );
        let result = self.store.create_container(database, container).await;
        absorb_conflict(result, "Container", &container.name)
    }

    /// Insert a document under a partition key with session consistency
    ///
    /// An existing document with the same (partition key, id) is logged
    /// and reported as [`Provisioned::AlreadyExists`].
    ///
    /// # Errors
    ///
    /// Returns [`QuickstartError::Serialization`] if the document can't be
    /// encoded, otherwise propagates every store error except a conflict.
    pub async fn create_document(
        &self,
        database: &str,
        container: &str,
        partition_key: &PartitionKeyValue,
        document: &CustomerDocument,
    ) -> Result<Provisioned> {
        let item = serde_json::to_value(document)?;
        let result = self
            .store
            .create_item(database, container, partition_key, item)
            .await;
        absorb_conflict(result, "Item", document.id.as_str())
    }

    /// Point-read a document
    ///
    /// # Errors
    ///
    /// Propagates store errors (including not found) unchanged. A body
    /// that doesn't decode as a [`CustomerDocument`] is a
    /// [`QuickstartError::Serialization`] error.
    pub async fn read_document(
        &self,
        database: &str,
        container: &str,
        partition_key: &PartitionKeyValue,
        id: &DocumentId,
    ) -> Result<CustomerDocument> {
        let response = self
            .store
            .read_item(database, container, partition_key, id)
            .await?;
        log_cosmos_response!("Item read", &response.metadata);

        serde_json::from_value(response.body).map_err(|e| {
            QuickstartError::Serialization(format!("Failed to decode item {id}: {e}"))
        })
    }

    /// Delete a document
    ///
    /// # Errors
    ///
    /// Propagates store errors unchanged; deleting a missing document is
    /// a not-found error.
    pub async fn delete_document(
        &self,
        database: &str,
        container: &str,
        partition_key: &PartitionKeyValue,
        id: &DocumentId,
    ) -> Result<ResponseMetadata> {
        let metadata = self
            .store
            .delete_item(database, container, partition_key, id)
            .await?;
        log_cosmos_response!("Item deleted", &metadata);
        Ok(metadata)
    }
}

fn absorb_conflict(
    result: Result<ResponseMetadata>,
    kind: &str,
    name: &str,
) -> Result<Provisioned> {
    match result {
        Ok(metadata) => {
            log_cosmos_response!(format!("{kind} created"), &metadata);
            Ok(Provisioned::Created(metadata))
        }
        Err(e) if e.is_conflict() => {
            tracing::info!(resource = name, "{kind} already exists");
            Ok(Provisioned::AlreadyExists)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::database::ItemResponse;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::CosmosDbError;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    const DB: &str = "quickstart";
    const CONTAINER: &str = "customers";

    fn client() -> ProvisioningClient {
        ProvisioningClient::new(Arc::new(InMemoryStore::new()))
    }

    fn spec() -> ContainerSpec {
        ContainerSpec::new(CONTAINER, "/customerId")
    }

    fn document(id: &str, customer_id: &str) -> CustomerDocument {
        CustomerDocument::builder()
            .id(DocumentId::new(id).unwrap())
            .customer_id(PartitionKeyValue::new(customer_id).unwrap())
            .title("Mr")
            .first_name("Test")
            .last_name("User")
            .email_address("test@example.com")
            .phone_number("123-456-7890")
            .build()
            .unwrap()
    }

    async fn provisioned_client() -> ProvisioningClient {
        let client = client();
        client.ensure_database(DB).await.unwrap();
        client.ensure_container(DB, &spec()).await.unwrap();
        client
    }

    #[tokio::test]
    async fn test_ensure_database_is_idempotent() {
        let client = client();
        assert!(client.ensure_database(DB).await.unwrap().was_created());
        assert_eq!(
            client.ensure_database(DB).await.unwrap(),
            Provisioned::AlreadyExists
        );
    }

    #[tokio::test]
    async fn test_ensure_container_is_idempotent() {
        let client = client();
        client.ensure_database(DB).await.unwrap();
        assert!(client.ensure_container(DB, &spec()).await.unwrap().was_created());
        assert_eq!(
            client.ensure_container(DB, &spec()).await.unwrap(),
            Provisioned::AlreadyExists
        );
    }

    #[tokio::test]
    async fn test_ensure_container_propagates_missing_database() {
        let err = client().ensure_container("nope", &spec()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_create_then_read() {
        let client = provisioned_client().await;
        let doc = document("1", "1");
        let pk = doc.partition_key().clone();

        client.create_document(DB, CONTAINER, &pk, &doc).await.unwrap();
        let read = client
            .read_document(DB, CONTAINER, &pk, &doc.id)
            .await
            .unwrap();

        assert_eq!(read.customer_id.as_str(), "1");
        assert_eq!(read, doc);
    }

    #[tokio::test]
    async fn test_duplicate_create_is_not_an_error() {
        let client = provisioned_client().await;
        let doc = document("1", "1");
        let pk = doc.partition_key().clone();

        assert!(client
            .create_document(DB, CONTAINER, &pk, &doc)
            .await
            .unwrap()
            .was_created());
        assert_eq!(
            client.create_document(DB, CONTAINER, &pk, &doc).await.unwrap(),
            Provisioned::AlreadyExists
        );
    }

    #[tokio::test]
    async fn test_delete_never_created_is_not_found() {
        let client = provisioned_client().await;
        let err = client
            .delete_document(
                DB,
                CONTAINER,
                &PartitionKeyValue::new("1").unwrap(),
                &DocumentId::new("missing").unwrap(),
            )
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_read_after_delete_is_not_found() {
        let client = provisioned_client().await;
        let doc = document("1", "1");
        let pk = doc.partition_key().clone();

        client.create_document(DB, CONTAINER, &pk, &doc).await.unwrap();
        let meta = client
            .delete_document(DB, CONTAINER, &pk, &doc.id)
            .await
            .unwrap();
        assert_eq!(meta.status, 204);

        let err = client
            .read_document(DB, CONTAINER, &pk, &doc.id)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_read_with_other_partition_key_is_not_found() {
        let client = provisioned_client().await;
        let doc = document("1", "1");
        client
            .create_document(DB, CONTAINER, doc.partition_key(), &doc)
            .await
            .unwrap();

        let err = client
            .read_document(DB, CONTAINER, &PartitionKeyValue::new("2").unwrap(), &doc.id)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    /// Store whose reads return a body that isn't a customer document
    struct MalformedStore;

    #[async_trait]
    impl DocumentStore for MalformedStore {
        fn backend_name(&self) -> &'static str {
            "malformed"
        }

        async fn create_database(&self, _: &str) -> Result<ResponseMetadata> {
            Err(CosmosDbError::from_status(Some(503), "unavailable").into())
        }

        async fn create_container(&self, _: &str, _: &ContainerSpec) -> Result<ResponseMetadata> {
            Err(CosmosDbError::from_status(None, "connection reset").into())
        }

        async fn create_item(
            &self,
            _: &str,
            _: &str,
            _: &PartitionKeyValue,
            _: Value,
        ) -> Result<ResponseMetadata> {
            Ok(ResponseMetadata::default())
        }

        async fn read_item(
            &self,
            _: &str,
            _: &str,
            _: &PartitionKeyValue,
            _: &DocumentId,
        ) -> Result<ItemResponse> {
            Ok(ItemResponse {
                body: json!({"id": 42}),
                metadata: ResponseMetadata::default(),
            })
        }

        async fn delete_item(
            &self,
            _: &str,
            _: &str,
            _: &PartitionKeyValue,
            _: &DocumentId,
        ) -> Result<ResponseMetadata> {
            Ok(ResponseMetadata::default())
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_serialization_error() {
        let client = ProvisioningClient::new(Arc::new(MalformedStore));
        let err = client
            .read_document(
                DB,
                CONTAINER,
                &PartitionKeyValue::new("1").unwrap(),
                &DocumentId::new("1").unwrap(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, QuickstartError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_non_conflict_errors_propagate() {
        let client = ProvisioningClient::new(Arc::new(MalformedStore));

        let err = client.ensure_database(DB).await.unwrap_err();
        assert!(matches!(
            err,
            QuickstartError::CosmosDb(CosmosDbError::RequestFailed { status: 503, .. })
        ));

        let err = client.ensure_container(DB, &spec()).await.unwrap_err();
        assert!(matches!(
            err,
            QuickstartError::CosmosDb(CosmosDbError::Transport(_))
        ));
    }
}
