//! Run command implementation
//!
//! Executes the walkthrough: ensure database, ensure container, then
//! create, read and delete the sample document.

use crate::adapters::database::create_document_store;
use crate::config::{load_config_with_dry_run, QuickstartConfig};
use crate::core::provision::ProvisioningClient;
use crate::core::walkthrough::{run_walkthrough, WalkthroughPlan, WalkthroughSummary};
use crate::cli::exit_codes;
use clap::Args;

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Use an in-memory store instead of Cosmos DB
    #[arg(long)]
    pub dry_run: bool,

    /// Override the sample document's id
    #[arg(long)]
    pub document_id: Option<String>,

    /// Override the sample document's customerId (partition key value)
    #[arg(long)]
    pub customer_id: Option<String>,

    /// Keep the document instead of deleting it at the end
    #[arg(long)]
    pub keep: bool,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_with_dry_run(config_path, self.dry_run) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(exit_codes::CONFIG_ERROR);
            }
        };

        self.run_with_config(config).await
    }

    /// Execute the walkthrough against an already loaded configuration
    pub async fn run_with_config(&self, mut config: QuickstartConfig) -> anyhow::Result<i32> {
        if let Some(id) = &self.document_id {
            config.document.id = id.clone();
        }
        if let Some(customer_id) = &self.customer_id {
            config.document.customer_id = customer_id.clone();
        }

        let plan = match WalkthroughPlan::from_config(&config) {
            Ok(plan) => plan.keep_document(self.keep),
            Err(e) => {
                eprintln!("Invalid document: {e}");
                return Ok(exit_codes::CONFIG_ERROR);
            }
        };

        let dry_run = self.dry_run || config.application.dry_run;
        if dry_run {
            println!("🔍 DRY RUN MODE - using an in-memory store, nothing is sent to Cosmos DB");
            println!();
        }

        let store = match create_document_store(&config, dry_run) {
            Ok(store) => store,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create Cosmos DB client");
                eprintln!("Failed to create Cosmos DB client: {e}");
                return Ok(exit_codes::CLIENT_ERROR);
            }
        };

        let client = ProvisioningClient::new(store);
        let summary = run_walkthrough(&client, &plan).await;

        print_summary(&summary)?;
        Ok(exit_codes::SUCCESS)
    }
}

fn print_summary(summary: &WalkthroughSummary) -> anyhow::Result<()> {
    if let Some(document) = &summary.read_document {
        println!("Read item with customerId {}", document.customer_id);
        println!("{}", document.to_pretty_json()?);
        println!();
    }

    println!("📊 Walkthrough Summary ({}):", summary.backend);
    for outcome in &summary.steps {
        let marker = if outcome.status.is_failure() { "❌" } else { "✅" };
        println!(
            "  {marker} {:<17} {} ({} ms)",
            outcome.step.to_string(),
            outcome.status,
            outcome.duration.as_millis()
        );
    }
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();

    Ok(())
}
