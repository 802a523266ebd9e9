//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::cli::exit_codes;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "cosmos-quickstart.toml")]
    pub output: String,

    /// Include every setting with comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Cosmos DB quickstart configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(exit_codes::CONFIG_ERROR);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set COSMOS_ENDPOINT and COSMOS_KEY (or use a .env file)");
                println!("  3. Validate configuration: cosmos-quickstart validate-config");
                println!("  4. Run the walkthrough: cosmos-quickstart run");
                println!("     (or try it offline first: cosmos-quickstart run --dry-run)");
                println!();
                Ok(exit_codes::SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(exit_codes::FATAL)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Cosmos DB Quickstart Configuration

[application]
log_level = "info"

[cosmosdb]
endpoint = "${COSMOS_ENDPOINT}"
key = "${COSMOS_KEY}"
database_name = "quickstart"
container_name = "customers"
partition_key = "/customerId"
"#
        .to_string()
    }

    /// Generate configuration with every setting documented
    fn generate_config_with_examples() -> String {
        r#"# Cosmos DB Quickstart Configuration
#
# Values of the form ${VAR} are read from the environment (or a .env file).
# Any setting can also be overridden with COSMOS_QUICKSTART_<SECTION>_<KEY>,
# e.g. COSMOS_QUICKSTART_COSMOSDB_DATABASE_NAME=demo

[application]
# trace, debug, info, warn or error
log_level = "info"
# Run against an in-memory store instead of Cosmos DB
dry_run = false

[cosmosdb]
# Authenticate with endpoint + key ...
endpoint = "${COSMOS_ENDPOINT}"
key = "${COSMOS_KEY}"
# ... or with a connection string instead (not both)
# connection_string = "${COSMOS_CONNECTION_STRING}"

database_name = "quickstart"
container_name = "customers"
# Single-path partition key
partition_key = "/customerId"
# Manual throughput in RU/s (400 - 1000000, multiple of 100)
throughput = 400

[document]
# The sample document that is created, read back and deleted
id = "1"
customer_id = "1"
title = "Mr"
first_name = "Test"
last_name = "User"
email_address = "test@example.com"
phone_number = "123-456-7890"

[logging]
# Write JSON logs to a rolling file as well as the console
local_enabled = false
local_path = "./logs"
# daily, hourly or never
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use tempfile::TempDir;

    fn with_credentials(config: &str) -> String {
        config
            .replace("${COSMOS_ENDPOINT}", "https://test.documents.azure.com:443/")
            .replace("${COSMOS_KEY}", "dGVzdC1rZXk=")
    }

    #[test]
    fn test_generate_minimal_config() {
        let config = InitArgs::generate_minimal_config();
        assert!(config.contains("[application]"));
        assert!(config.contains("[cosmosdb]"));

        let parsed = parse_config(&with_credentials(&config)).unwrap();
        assert_eq!(parsed.cosmosdb.container_name, "customers");
    }

    #[test]
    fn test_generate_config_with_examples() {
        let config = InitArgs::generate_config_with_examples();
        assert!(config.contains("connection_string"));

        // The commented-out connection string must not be substituted
        let parsed = parse_config(&with_credentials(&config)).unwrap();
        assert!(parsed.cosmosdb.connection_string.is_none());
        assert_eq!(parsed.document.phone_number, "123-456-7890");
        assert_eq!(parsed.logging.local_rotation, "daily");
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("cosmos-quickstart.toml");
        fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            with_examples: false,
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "existing");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&output).unwrap().contains("[cosmosdb]"));
    }
}
