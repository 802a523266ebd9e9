//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use crate::config::load_config_with_dry_run;
use crate::logging::{init_logging, LoggingGuard};
use clap::{Parser, Subcommand};

/// Process exit codes
pub mod exit_codes {
    /// Command completed; walkthrough step failures are reported, not fatal
    pub const SUCCESS: i32 = 0;

    /// Configuration could not be loaded or is invalid
    pub const CONFIG_ERROR: i32 = 2;

    /// The Cosmos DB client could not be constructed
    pub const CLIENT_ERROR: i32 = 4;

    /// Anything else, including logging initialization
    pub const FATAL: i32 = 5;
}

/// Cosmos DB quickstart: provision a database and container, then create,
/// read and delete one document
#[derive(Parser, Debug)]
#[command(name = "cosmos-quickstart")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "cosmos-quickstart.toml",
        env = "COSMOS_QUICKSTART_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "COSMOS_QUICKSTART_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// True when `run --dry-run` was given
    pub fn dry_run_requested(&self) -> bool {
        matches!(&self.command, Commands::Run(args) if args.dry_run)
    }

    /// Initialize logging from `--log-level` and the config file's settings
    ///
    /// A config file that doesn't load falls back to default logging; the
    /// command reports the load error itself. A logging setup failure
    /// yields [`exit_codes::FATAL`].
    pub fn init_logging(&self) -> Result<LoggingGuard, i32> {
        let file_config = load_config_with_dry_run(&self.config, self.dry_run_requested()).ok();
        let logging_config = file_config
            .as_ref()
            .map(|c| c.logging.clone())
            .unwrap_or_default();
        let log_level = self
            .log_level
            .clone()
            .or_else(|| file_config.as_ref().map(|c| c.application.log_level.clone()))
            .unwrap_or_else(|| "info".to_string());

        init_logging(&log_level, &logging_config).map_err(|e| {
            eprintln!("Failed to initialize logging: {e}");
            exit_codes::FATAL
        })
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the walkthrough against the configured store
    Run(commands::run::RunArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from(["cosmos-quickstart", "run"]);
        assert_eq!(cli.config, "cosmos-quickstart.toml");
        assert!(matches!(cli.command, Commands::Run(_)));
    }

    #[test]
    fn test_cli_parse_run_flags() {
        let cli = Cli::parse_from([
            "cosmos-quickstart",
            "run",
            "--dry-run",
            "--keep",
            "--document-id",
            "7",
            "--customer-id",
            "42",
        ]);
        let Commands::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert!(args.dry_run);
        assert!(args.keep);
        assert_eq!(args.document_id.as_deref(), Some("7"));
        assert_eq!(args.customer_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["cosmos-quickstart", "--config", "custom.toml", "run"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["cosmos-quickstart", "--log-level", "debug", "run"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["cosmos-quickstart", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_dry_run_requested() {
        let cli = Cli::parse_from(["cosmos-quickstart", "run", "--dry-run"]);
        assert!(cli.dry_run_requested());

        let cli = Cli::parse_from(["cosmos-quickstart", "validate-config"]);
        assert!(!cli.dry_run_requested());
    }

    #[test]
    fn test_logging_init_failure_is_fatal() {
        // An unknown level is rejected before any subscriber is installed
        let cli = Cli::parse_from([
            "cosmos-quickstart",
            "--config",
            "does-not-exist.toml",
            "--log-level",
            "loud",
            "run",
        ]);
        assert_eq!(cli.init_logging().err(), Some(exit_codes::FATAL));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["cosmos-quickstart", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref args) if args.force));
    }
}
