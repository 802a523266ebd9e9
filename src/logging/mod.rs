//! Logging and observability
//!
//! Structured logging through `tracing`, with:
//! - Console output
//! - Configurable log levels (`RUST_LOG` wins when set)
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use cosmos_quickstart::logging::init_logging;
//! use cosmos_quickstart::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the diagnostic metadata of a Cosmos DB response
///
/// # Example
///
/// ```no_run
/// use cosmos_quickstart::log_cosmos_response;
/// use cosmos_quickstart::adapters::database::ResponseMetadata;
///
/// let metadata = ResponseMetadata::from_parts(201, Some("activity"), Some("6.29"));
/// log_cosmos_response!("Item created", &metadata);
/// ```
#[macro_export]
macro_rules! log_cosmos_response {
    ($operation:expr, $metadata:expr) => {
        tracing::info!(
            status = $metadata.status,
            activity_id = $metadata.activity_id.as_deref().unwrap_or("-"),
            request_charge = $metadata.request_charge.unwrap_or_default(),
            "{}",
            $operation
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use cosmos_quickstart::log_error_with_context;
/// use cosmos_quickstart::domain::QuickstartError;
///
/// let error = QuickstartError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::adapters::database::ResponseMetadata;
    use crate::domain::QuickstartError;

    #[test]
    fn test_macros_expand_without_subscriber() {
        let metadata = ResponseMetadata::from_parts(200, None, Some("1"));
        log_cosmos_response!("Item read", &metadata);

        let error = QuickstartError::Validation("bad".to_string());
        log_error_with_context!(&error, "Validation failed");
    }
}
