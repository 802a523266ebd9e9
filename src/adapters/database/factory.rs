//! Document store factory
//!
//! Creates the document store implementation selected by configuration.

use crate::adapters::cosmosdb::CosmosDbClient;
use crate::adapters::database::traits::DocumentStore;
use crate::adapters::memory::InMemoryStore;
use crate::config::QuickstartConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Create a document store based on the configuration
///
/// Returns the in-memory store when `dry_run` is set (from the CLI or
/// `application.dry_run`), otherwise a Cosmos DB client.
///
/// # Errors
///
/// Returns an error if the Cosmos DB client cannot be created. Callers
/// treat this as fatal.
pub fn create_document_store(
    config: &QuickstartConfig,
    dry_run: bool,
) -> Result<Arc<dyn DocumentStore>> {
    if dry_run || config.application.dry_run {
        tracing::info!("Dry run: using in-memory document store");
        return Ok(Arc::new(InMemoryStore::new()) as Arc<dyn DocumentStore>);
    }

    tracing::info!(endpoint = %config.cosmosdb.endpoint, "Creating Cosmos DB client");
    let client = CosmosDbClient::new(&config.cosmosdb)?;

    Ok(Arc::new(client) as Arc<dyn DocumentStore>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    const CONFIG: &str = r#"
[cosmosdb]
endpoint = "https://test.documents.azure.com:443/"
key = "dGVzdC1rZXk="
database_name = "quickstart"
container_name = "customers"
"#;

    #[test]
    fn test_dry_run_selects_memory_store() {
        let config = parse_config(CONFIG).unwrap();
        let store = create_document_store(&config, true).unwrap();
        assert_eq!(store.backend_name(), "memory");
    }

    #[test]
    fn test_default_selects_cosmos() {
        let config = parse_config(CONFIG).unwrap();
        let store = create_document_store(&config, false).unwrap();
        assert_eq!(store.backend_name(), "cosmosdb");
    }
}
