//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::QuickstartConfig;
use super::secret::secret_string;
use crate::domain::errors::QuickstartError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "COSMOS_QUICKSTART";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`QuickstartConfig`]
/// 4. Applies environment variable overrides (`COSMOS_QUICKSTART_*`)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a configuration error if the file cannot be read or parsed, a
/// referenced variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use cosmos_quickstart::config::load_config;
///
/// let config = load_config("cosmos-quickstart.toml").expect("Failed to load config");
/// println!("{}", config.cosmosdb.database_name);
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<QuickstartConfig> {
    parse_config(&read_config_file(path.as_ref())?)
}

/// Loads configuration like [`load_config`], forcing dry-run mode when asked
///
/// A forced dry run is applied before validation, so Cosmos DB credentials
/// are not required.
///
/// # Errors
///
/// Same as [`load_config`].
pub fn load_config_with_dry_run(
    path: impl AsRef<Path>,
    dry_run: bool,
) -> Result<QuickstartConfig> {
    parse_config_with_dry_run(&read_config_file(path.as_ref())?, dry_run)
}

/// Parses configuration from TOML text, applying substitution, overrides and validation
pub fn parse_config(contents: &str) -> Result<QuickstartConfig> {
    parse_config_with_dry_run(contents, false)
}

/// Parses configuration from TOML text, forcing dry-run mode before validation when asked
pub fn parse_config_with_dry_run(contents: &str, dry_run: bool) -> Result<QuickstartConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: QuickstartConfig = toml::from_str(&contents)
        .map_err(|e| QuickstartError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);
    config.application.dry_run |= dry_run;

    config.validate().map_err(|e| {
        QuickstartError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

fn read_config_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(QuickstartError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    fs::read_to_string(path).map_err(|e| {
        QuickstartError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched. Every missing variable is reported
/// in a single error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| QuickstartError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = re.replace_all(line, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(QuickstartError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(section: &str, key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{section}_{key}")).ok()
}

/// Applies environment variable overrides using the `COSMOS_QUICKSTART_` prefix
///
/// Variables follow the pattern `COSMOS_QUICKSTART_<SECTION>_<KEY>`, for
/// example `COSMOS_QUICKSTART_COSMOSDB_DATABASE_NAME`.
fn apply_env_overrides(config: &mut QuickstartConfig) {
    if let Some(val) = env_override("APPLICATION", "LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Some(val) = env_override("APPLICATION", "DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    let cosmos = &mut config.cosmosdb;
    if let Some(val) = env_override("COSMOSDB", "ENDPOINT") {
        cosmos.endpoint = val;
    }
    if let Some(val) = env_override("COSMOSDB", "KEY") {
        cosmos.key = Some(secret_string(val));
    }
    if let Some(val) = env_override("COSMOSDB", "CONNECTION_STRING") {
        cosmos.connection_string = Some(secret_string(val));
    }
    if let Some(val) = env_override("COSMOSDB", "DATABASE_NAME") {
        cosmos.database_name = val;
    }
    if let Some(val) = env_override("COSMOSDB", "CONTAINER_NAME") {
        cosmos.container_name = val;
    }
    if let Some(val) = env_override("COSMOSDB", "PARTITION_KEY") {
        cosmos.partition_key = val;
    }
    if let Some(val) = env_override("COSMOSDB", "THROUGHPUT") {
        if let Ok(throughput) = val.parse() {
            cosmos.throughput = throughput;
        }
    }

    if let Some(val) = env_override("DOCUMENT", "ID") {
        config.document.id = val;
    }
    if let Some(val) = env_override("DOCUMENT", "CUSTOMER_ID") {
        config.document.customer_id = val;
    }

    if let Some(val) = env_override("LOGGING", "LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = env_override("LOGGING", "LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_override("LOGGING", "LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}
