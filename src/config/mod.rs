//! Configuration management for the quickstart.
//!
//! # Overview
//!
//! Configuration comes from a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `COSMOS_QUICKSTART_<SECTION>_<KEY>` overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! The loaded [`QuickstartConfig`] is immutable and passed explicitly to
//! the components that need it.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [cosmosdb]
//! endpoint = "https://your-account.documents.azure.com:443/"
//! key = "${COSMOS_KEY}"
//! database_name = "quickstart"
//! container_name = "customers"
//! partition_key = "/customerId"
//! throughput = 400
//!
//! [document]
//! id = "1"
//! customer_id = "1"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cosmos_quickstart::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("cosmos-quickstart.toml")?;
//! println!("Cosmos DB: {}", config.cosmosdb.database_name);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{
    load_config, load_config_with_dry_run, parse_config, parse_config_with_dry_run,
};
pub use schema::{
    ApplicationConfig, CosmosDbConfig, DocumentConfig, LoggingConfig, QuickstartConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
