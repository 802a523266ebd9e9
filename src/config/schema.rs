//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML file.

use crate::config::SecretString;
use crate::domain::{CustomerDocument, DocumentId, PartitionKeyValue};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use url::Url;

/// Lowest manual throughput Cosmos DB accepts for a container (RU/s)
pub const MIN_THROUGHPUT: u32 = 400;

/// Highest manual throughput accepted without a support request (RU/s)
pub const MAX_THROUGHPUT: u32 = 1_000_000;

/// Main quickstart configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// It is built once at process entry and passed down by reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickstartConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Azure Cosmos DB connection and resource names
    pub cosmosdb: CosmosDbConfig,

    /// Sample document written by the walkthrough
    #[serde(default)]
    pub document: DocumentConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl QuickstartConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        // Dry runs never reach Cosmos DB, so credentials are optional
        self.cosmosdb.validate(!self.application.dry_run)?;
        self.document.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (run against an in-memory store instead of Cosmos DB)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Azure Cosmos DB configuration
///
/// Authenticate with either `endpoint` + `key`, or a `connection_string`
/// of the form `AccountEndpoint=...;AccountKey=...;`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CosmosDbConfig {
    /// Cosmos DB endpoint URL (required with `key`)
    #[serde(default)]
    pub endpoint: String,

    /// Cosmos DB primary or secondary account key
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub key: Option<SecretString>,

    /// Full account connection string
    #[serde(default)]
    pub connection_string: Option<SecretString>,

    /// Database name
    pub database_name: String,

    /// Container name
    pub container_name: String,

    /// Partition key path
    #[serde(default = "default_partition_key")]
    pub partition_key: String,

    /// Manual throughput provisioned on container creation (RU/s)
    #[serde(default = "default_throughput")]
    pub throughput: u32,
}

impl CosmosDbConfig {
    pub(crate) fn validate(&self, require_credentials: bool) -> Result<(), String> {
        match (&self.key, &self.connection_string) {
            (Some(_), Some(_)) => {
                return Err(
                    "cosmosdb.key and cosmosdb.connection_string are mutually exclusive"
                        .to_string(),
                )
            }
            (None, None) if require_credentials => {
                return Err(
                    "cosmosdb.key or cosmosdb.connection_string must be provided".to_string()
                )
            }
            (Some(key), None) => {
                if key.expose_secret().is_empty() {
                    return Err("cosmosdb.key cannot be empty".to_string());
                }
                validate_endpoint(&self.endpoint)?;
            }
            (None, Some(connection_string)) => {
                if !connection_string
                    .expose_secret()
                    .as_ref()
                    .contains("AccountEndpoint=")
                {
                    return Err(
                        "cosmosdb.connection_string must contain AccountEndpoint=".to_string()
                    );
                }
            }
            (None, None) => {}
        }

        if self.database_name.trim().is_empty() {
            return Err("cosmosdb.database_name cannot be empty".to_string());
        }

        if self.container_name.trim().is_empty() {
            return Err("cosmosdb.container_name cannot be empty".to_string());
        }

        if !self.partition_key.starts_with('/') || self.partition_key.len() < 2 {
            return Err(format!(
                "cosmosdb.partition_key must be a path like '/customerId', got '{}'",
                self.partition_key
            ));
        }

        if !(MIN_THROUGHPUT..=MAX_THROUGHPUT).contains(&self.throughput)
            || self.throughput % 100 != 0
        {
            return Err(format!(
                "cosmosdb.throughput must be a multiple of 100 between {MIN_THROUGHPUT} and {MAX_THROUGHPUT}, got {}",
                self.throughput
            ));
        }

        Ok(())
    }
}

/// Endpoints must be https, except for a local emulator
fn validate_endpoint(endpoint: &str) -> Result<(), String> {
    if endpoint.is_empty() {
        return Err("cosmosdb.endpoint cannot be empty".to_string());
    }

    let url = Url::parse(endpoint)
        .map_err(|e| format!("cosmosdb.endpoint is not a valid URL: {e}"))?;

    let is_local = matches!(url.host_str(), Some("localhost") | Some("127.0.0.1"));
    match url.scheme() {
        "https" => Ok(()),
        "http" if is_local => Ok(()),
        _ => Err("cosmosdb.endpoint must start with https://".to_string()),
    }
}

/// Sample customer document used by the walkthrough
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    #[serde(default = "default_document_id")]
    pub id: String,

    /// Partition key value
    #[serde(default = "default_document_id")]
    pub customer_id: String,

    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_first_name")]
    pub first_name: String,

    #[serde(default = "default_last_name")]
    pub last_name: String,

    #[serde(default = "default_email_address")]
    pub email_address: String,

    #[serde(default = "default_phone_number")]
    pub phone_number: String,
}

impl DocumentConfig {
    fn validate(&self) -> Result<(), String> {
        DocumentId::new(self.id.as_str()).map_err(|e| format!("document.id: {e}"))?;
        PartitionKeyValue::new(self.customer_id.as_str())
            .map_err(|e| format!("document.customer_id: {e}"))?;
        Ok(())
    }

    /// Build the document, stamped with the current time
    pub fn to_document(&self) -> Result<CustomerDocument, String> {
        CustomerDocument::builder()
            .id(DocumentId::new(self.id.as_str())?)
            .customer_id(PartitionKeyValue::new(self.customer_id.as_str())?)
            .title(self.title.as_str())
            .first_name(self.first_name.as_str())
            .last_name(self.last_name.as_str())
            .email_address(self.email_address.as_str())
            .phone_number(self.phone_number.as_str())
            .build()
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            id: default_document_id(),
            customer_id: default_document_id(),
            title: default_title(),
            first_name: default_first_name(),
            last_name: default_last_name(),
            email_address: default_email_address(),
            phone_number: default_phone_number(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_partition_key() -> String {
    "/customerId".to_string()
}

fn default_throughput() -> u32 {
    MIN_THROUGHPUT
}

fn default_document_id() -> String {
    "1".to_string()
}

fn default_title() -> String {
    "Mr".to_string()
}

fn default_first_name() -> String {
    "Test".to_string()
}

fn default_last_name() -> String {
    "User".to_string()
}

fn default_email_address() -> String {
    "test@example.com".to_string()
}

fn default_phone_number() -> String {
    "123-456-7890".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use test_case::test_case;

    fn cosmos_config() -> CosmosDbConfig {
        CosmosDbConfig {
            endpoint: "https://myaccount.documents.azure.com:443/".to_string(),
            key: Some(secret_string("test-key".to_string())),
            connection_string: None,
            database_name: "quickstart".to_string(),
            container_name: "customers".to_string(),
            partition_key: "/customerId".to_string(),
            throughput: 400,
        }
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cosmosdb_config_validation() {
        assert!(cosmos_config().validate(true).is_ok());
    }

    #[test]
    fn test_cosmosdb_key_and_connection_string_exclusive() {
        let mut config = cosmos_config();
        config.connection_string = Some(secret_string(
            "AccountEndpoint=https://a.documents.azure.com:443/;AccountKey=abc;".to_string(),
        ));
        let err = config.validate(true).unwrap_err();
        assert!(err.contains("mutually exclusive"));

        config.key = None;
        config.endpoint = String::new();
        assert!(config.validate(true).is_ok());

        config.connection_string = None;
        assert!(config.validate(true).is_err());
    }

    #[test]
    fn test_cosmosdb_credentials_optional_for_dry_run() {
        let mut config = cosmos_config();
        config.key = None;
        assert!(config.validate(true).is_err());
        assert!(config.validate(false).is_ok());
    }

    #[test]
    fn test_cosmosdb_connection_string_requires_endpoint() {
        let mut config = cosmos_config();
        config.key = None;
        config.connection_string = Some(secret_string("AccountKey=abc;".to_string()));
        assert!(config.validate(true).is_err());
    }

    #[test_case("https://myaccount.documents.azure.com:443/" => true ; "azure https")]
    #[test_case("http://localhost:8081/" => true ; "local emulator")]
    #[test_case("http://127.0.0.1:8081/" => true ; "loopback emulator")]
    #[test_case("http://myaccount.documents.azure.com/" => false ; "remote plain http")]
    #[test_case("not a url" => false ; "garbage")]
    #[test_case("" => false ; "empty")]
    fn test_endpoint_validation(endpoint: &str) -> bool {
        validate_endpoint(endpoint).is_ok()
    }

    #[test_case(400 => true ; "minimum")]
    #[test_case(1000 => true ; "round")]
    #[test_case(300 => false ; "below minimum")]
    #[test_case(450 => false ; "not multiple of 100")]
    #[test_case(2_000_000 => false ; "above maximum")]
    fn test_throughput_validation(throughput: u32) -> bool {
        let mut config = cosmos_config();
        config.throughput = throughput;
        config.validate(true).is_ok()
    }

    #[test]
    fn test_partition_key_must_be_path() {
        let mut config = cosmos_config();
        config.partition_key = "customerId".to_string();
        assert!(config.validate(true).is_err());

        config.partition_key = "/".to_string();
        assert!(config.validate(true).is_err());
    }

    #[test]
    fn test_empty_names_rejected() {
        let mut config = cosmos_config();
        config.database_name = " ".to_string();
        assert!(config.validate(true).is_err());

        let mut config = cosmos_config();
        config.container_name = String::new();
        assert!(config.validate(true).is_err());
    }

    #[test]
    fn test_document_config_default_builds() {
        let config = DocumentConfig::default();
        assert!(config.validate().is_ok());

        let document = config.to_document().unwrap();
        assert_eq!(document.id.as_str(), "1");
        assert_eq!(document.customer_id.as_str(), "1");
        assert_eq!(document.email_address, "test@example.com");
    }

    #[test]
    fn test_document_config_rejects_bad_id() {
        let config = DocumentConfig {
            id: "a/b".to_string(),
            ..DocumentConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert!(!config.local_enabled);
        assert_eq!(config.local_rotation, "daily");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_config_invalid_rotation() {
        let config = LoggingConfig {
            local_rotation: "size".to_string(),
            ..LoggingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_log_level(), "info");
        assert_eq!(default_partition_key(), "/customerId");
        assert_eq!(default_throughput(), 400);
    }
}
