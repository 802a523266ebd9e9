//! Domain error types
//!
//! This module defines the error hierarchy for the quickstart.
//! Errors are domain-specific and don't expose third-party SDK types.

use thiserror::Error;

/// Main quickstart error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum QuickstartError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Cosmos DB-related errors
    #[error("Cosmos DB error: {0}")]
    CosmosDb(#[from] CosmosDbError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl QuickstartError {
    /// Returns true if the remote store reported that the resource already exists (HTTP 409)
    ///
    /// This is the single predicate every idempotent create path consults.
    pub fn is_conflict(&self) -> bool {
        matches!(self, QuickstartError::CosmosDb(e) if e.is_conflict())
    }

    /// Returns true if the remote store reported that the resource does not exist (HTTP 404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, QuickstartError::CosmosDb(e) if e.is_not_found())
    }
}

/// Cosmos DB-specific errors
///
/// Errors that occur when interacting with Azure Cosmos DB.
/// These errors don't expose third-party SDK types.
#[derive(Debug, Error)]
pub enum CosmosDbError {
    /// Failed to build the credential or client
    #[error("Failed to connect to Cosmos DB: {0}")]
    ConnectionFailed(String),

    /// Authentication failed (401/403)
    #[error("Authentication failed ({status}): {message}")]
    AuthenticationFailed { status: u16, message: String },

    /// Conflict error (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Throttling error (429)
    #[error("Request rate too large (429): {0}")]
    Throttled(String),

    /// Any other HTTP error status
    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    /// The request never produced an HTTP response
    #[error("Transport error: {0}")]
    Transport(String),

    /// Failed to deserialize response
    #[error("Failed to deserialize response: {0}")]
    DeserializationFailed(String),
}

impl CosmosDbError {
    /// Classify a failed request by its HTTP status code
    ///
    /// `None` means the failure happened before a response was received.
    pub fn from_status(status: Option<u16>, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            Some(409) => CosmosDbError::Conflict(message),
            Some(404) => CosmosDbError::NotFound(message),
            Some(429) => CosmosDbError::Throttled(message),
            Some(status @ (401 | 403)) => CosmosDbError::AuthenticationFailed { status, message },
            Some(status) => CosmosDbError::RequestFailed { status, message },
            None => CosmosDbError::Transport(message),
        }
    }

    /// HTTP status code associated with this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            CosmosDbError::Conflict(_) => Some(409),
            CosmosDbError::NotFound(_) => Some(404),
            CosmosDbError::Throttled(_) => Some(429),
            CosmosDbError::AuthenticationFailed { status, .. }
            | CosmosDbError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for HTTP 409 responses
    pub fn is_conflict(&self) -> bool {
        matches!(self, CosmosDbError::Conflict(_))
    }

    /// Returns true for HTTP 404 responses
    pub fn is_not_found(&self) -> bool {
        matches!(self, CosmosDbError::NotFound(_))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for QuickstartError {
    fn from(err: std::io::Error) -> Self {
        QuickstartError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for QuickstartError {
    fn from(err: serde_json::Error) -> Self {
        QuickstartError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for QuickstartError {
    fn from(err: toml::de::Error) -> Self {
        QuickstartError::Configuration(format!("TOML parse error: {err}"))
    }
}
