//! External system integrations.
//!
//! - [`database`] - Document store abstraction (trait-based) and factory
//! - [`cosmosdb`] - Azure Cosmos DB implementation
//! - [`memory`] - In-memory implementation for dry runs and tests
//!
//! # Cosmos DB Adapter
//!
//! ```rust,no_run
//! use cosmos_quickstart::adapters::cosmosdb::CosmosDbClient;
//! use cosmos_quickstart::adapters::database::DocumentStore;
//! use cosmos_quickstart::config::{secret_string, CosmosDbConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CosmosDbConfig {
//!     endpoint: "https://account.documents.azure.com:443/".to_string(),
//!     key: Some(secret_string("key".to_string())),
//!     connection_string: None,
//!     database_name: "quickstart".to_string(),
//!     container_name: "customers".to_string(),
//!     partition_key: "/customerId".to_string(),
//!     throughput: 400,
//! };
//!
//! let client = CosmosDbClient::new(&config)?;
//! client.create_database(&config.database_name).await?;
//! # Ok(())
//! # }
//! ```

pub mod cosmosdb;
pub mod database;
pub mod memory;
