// Cosmos Quickstart - Azure Cosmos DB provisioning and CRUD walkthrough
// Copyright (c) 2025 Cosmos Quickstart Contributors
// Licensed under the MIT License

use clap::Parser;
use cosmos_quickstart::cli::{exit_codes, Cli, Commands};
use std::process;

#[tokio::main]
async fn main() {
    // Optional; a missing .env file is ignored
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let guard = match cli.init_logging() {
        Ok(guard) => guard,
        Err(code) => process::exit(code),
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Cosmos Quickstart - Azure Cosmos DB walkthrough"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            exit_codes::FATAL
        }
    };

    // process::exit skips destructors; flush the file writer first
    drop(guard);
    process::exit(exit_code);
}

async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Run(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
