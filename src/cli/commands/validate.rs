//! Validate config command implementation
//!
//! Loads the configuration file, which validates it, and prints a summary.

use crate::config::load_config;
use crate::cli::exit_codes;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(exit_codes::CONFIG_ERROR);
            }
        };

        let auth = match (&config.cosmosdb.key, &config.cosmosdb.connection_string) {
            (Some(_), _) => "key",
            (None, Some(_)) => "connection string",
            (None, None) => "none (dry run)",
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        if !config.cosmosdb.endpoint.is_empty() {
            println!("  Cosmos DB Endpoint: {}", config.cosmosdb.endpoint);
        }
        println!("  Authentication: {auth}");
        println!("  Database: {}", config.cosmosdb.database_name);
        println!("  Container: {}", config.cosmosdb.container_name);
        println!("  Partition Key: {}", config.cosmosdb.partition_key);
        println!("  Throughput: {} RU/s", config.cosmosdb.throughput);
        println!(
            "  Document: id={} customerId={}",
            config.document.id, config.document.customer_id
        );
        println!();
        Ok(exit_codes::SUCCESS)
    }
}
