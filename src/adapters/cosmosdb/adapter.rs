//! Cosmos DB implementation of the document store trait

use crate::adapters::cosmosdb::client::{map_sdk_error, response_metadata, CosmosDbClient};
use crate::adapters::database::traits::{ContainerSpec, DocumentStore, ItemResponse, ResponseMetadata};
use crate::domain::ids::{DocumentId, PartitionKeyValue};
use crate::domain::{CosmosDbError, QuickstartError, Result};
use async_trait::async_trait;
use azure_data_cosmos::models::{
    ContainerProperties, PartitionKeyDefinition, PartitionKeyKind, ThroughputProperties,
};
use azure_data_cosmos::{ConsistencyLevel, CreateContainerOptions, ItemOptions, PartitionKey};
use serde_json::Value;
use std::borrow::Cow;

fn partition_key(value: &PartitionKeyValue) -> PartitionKey {
    PartitionKey::from(value.as_str().to_string())
}

#[async_trait]
impl DocumentStore for CosmosDbClient {
    fn backend_name(&self) -> &'static str {
        "cosmosdb"
    }

    async fn create_database(&self, database: &str) -> Result<ResponseMetadata> {
        let response = self
            .sdk_client()
            .create_database(database, None)
            .await
            .map_err(|e| map_sdk_error(e, &format!("Failed to create database {database}")))?;

        Ok(response_metadata(u16::from(response.status()), response.headers()))
    }

    async fn create_container(
        &self,
        database: &str,
        spec: &ContainerSpec,
    ) -> Result<ResponseMetadata> {
        let properties = ContainerProperties {
            id: Cow::Owned(spec.name.clone()),
            partition_key: PartitionKeyDefinition {
                paths: vec![spec.partition_key_path.clone()],
                kind: PartitionKeyKind::Hash,
                version: None,
            },
            ..Default::default()
        };

        let options = CreateContainerOptions {
            throughput: Some(ThroughputProperties::manual(
                spec.effective_throughput() as usize,
            )),
            ..Default::default()
        };

        let response = self
            .database_client(database)
            .create_container(properties, Some(options))
            .await
            .map_err(|e| {
                map_sdk_error(
                    e,
                    &format!("Failed to create container {} in {database}", spec.name),
                )
            })?;

        Ok(response_metadata(u16::from(response.status()), response.headers()))
    }

    async fn create_item(
        &self,
        database: &str,
        container: &str,
        partition_key_value: &PartitionKeyValue,
        item: Value,
    ) -> Result<ResponseMetadata> {
        let options = ItemOptions {
            consistency_level: Some(ConsistencyLevel::Session),
            ..Default::default()
        };

        let response = self
            .container_client(database, container)
            .create_item(partition_key(partition_key_value), item, Some(options))
            .await
            .map_err(|e| {
                map_sdk_error(
                    e,
                    &format!("Failed to create item in partition {partition_key_value}"),
                )
            })?;

        Ok(response_metadata(u16::from(response.status()), response.headers()))
    }

    async fn read_item(
        &self,
        database: &str,
        container: &str,
        partition_key_value: &PartitionKeyValue,
        id: &DocumentId,
    ) -> Result<ItemResponse> {
        let response = self
            .container_client(database, container)
            .read_item::<Value>(partition_key(partition_key_value), id.as_str(), None)
            .await
            .map_err(|e| {
                map_sdk_error(
                    e,
                    &format!("Failed to read item {id} in partition {partition_key_value}"),
                )
            })?;

        let metadata = response_metadata(u16::from(response.status()), response.headers());
        let body = response.into_body().map_err(|e| {
            QuickstartError::CosmosDb(CosmosDbError::DeserializationFailed(format!(
                "Failed to deserialize item {id}: {e}"
            )))
        })?;

        Ok(ItemResponse { body, metadata })
    }

    async fn delete_item(
        &self,
        database: &str,
        container: &str,
        partition_key_value: &PartitionKeyValue,
        id: &DocumentId,
    ) -> Result<ResponseMetadata> {
        let response = self
            .container_client(database, container)
            .delete_item(partition_key(partition_key_value), id.as_str(), None)
            .await
            .map_err(|e| {
                map_sdk_error(
                    e,
                    &format!("Failed to delete item {id} in partition {partition_key_value}"),
                )
            })?;

        Ok(response_metadata(u16::from(response.status()), response.headers()))
    }
}
