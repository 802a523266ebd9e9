//! Cosmos DB client implementation
//!
//! Builds the SDK client from configuration and translates SDK errors and
//! responses into domain types.

use crate::adapters::database::traits::ResponseMetadata;
use crate::config::CosmosDbConfig;
use crate::domain::{CosmosDbError, QuickstartError, Result};
use azure_core::credentials::Secret;
use azure_core::http::headers::{HeaderName, Headers};
use azure_data_cosmos::clients::{ContainerClient, DatabaseClient};
use azure_data_cosmos::{CosmosClient, CosmosClientOptions};
use secrecy::ExposeSecret;

const ACTIVITY_ID_HEADER: &str = "x-ms-activity-id";
const REQUEST_CHARGE_HEADER: &str = "x-ms-request-charge";

/// Cosmos DB client
///
/// Long-lived and read-only after construction; reused for every request.
pub struct CosmosDbClient {
    client: CosmosClient,
    endpoint: String,
}

impl CosmosDbClient {
    /// Create a new Cosmos DB client from key or connection string credentials
    ///
    /// # Errors
    ///
    /// Returns [`CosmosDbError::ConnectionFailed`] if the credentials are
    /// unusable or the SDK client cannot be built. Callers treat this as fatal.
    pub fn new(config: &CosmosDbConfig) -> Result<Self> {
        let (endpoint, key) = match (&config.key, &config.connection_string) {
            (Some(key), _) => {
                let key: String = key.expose_secret().clone().into();
                (config.endpoint.clone(), key)
            }
            (None, Some(connection_string)) => {
                parse_connection_string(connection_string.expose_secret().as_ref())?
            }
            (None, None) => {
                return Err(QuickstartError::CosmosDb(CosmosDbError::ConnectionFailed(
                    "No Cosmos DB credential configured".to_string(),
                )))
            }
        };

        let options = Some(CosmosClientOptions::default());
        let client = CosmosClient::with_key(&endpoint, Secret::new(key), options).map_err(|e| {
            QuickstartError::CosmosDb(CosmosDbError::ConnectionFailed(format!(
                "Failed to create Cosmos client: {e}"
            )))
        })?;

        tracing::debug!(endpoint = %endpoint, "Cosmos DB client created");

        Ok(Self { client, endpoint })
    }

    /// Underlying SDK client
    pub fn sdk_client(&self) -> &CosmosClient {
        &self.client
    }

    /// Get a database client
    pub fn database_client(&self, database: &str) -> DatabaseClient {
        self.client.database_client(database)
    }

    /// Get a container client
    pub fn container_client(&self, database: &str, container: &str) -> ContainerClient {
        self.client
            .database_client(database)
            .container_client(container)
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Split an `AccountEndpoint=...;AccountKey=...;` connection string
///
/// Keys are base64 and may end in `=`, so each pair is split on the first `=` only.
pub fn parse_connection_string(connection_string: &str) -> Result<(String, String)> {
    let mut endpoint = None;
    let mut key = None;

    for pair in connection_string.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        match pair.split_once('=') {
            Some((name, value)) if name.eq_ignore_ascii_case("AccountEndpoint") => {
                endpoint = Some(value.to_string());
            }
            Some((name, value)) if name.eq_ignore_ascii_case("AccountKey") => {
                key = Some(value.to_string());
            }
            _ => {}
        }
    }

    match (endpoint, key) {
        (Some(endpoint), Some(key)) if !endpoint.is_empty() && !key.is_empty() => {
            Ok((endpoint, key))
        }
        _ => Err(QuickstartError::CosmosDb(CosmosDbError::ConnectionFailed(
            "Connection string must contain AccountEndpoint and AccountKey".to_string(),
        ))),
    }
}

/// Map an SDK error to a domain error, classified by HTTP status
pub(crate) fn map_sdk_error(err: azure_core::Error, context: &str) -> QuickstartError {
    let status = err.http_status().map(u16::from);
    QuickstartError::CosmosDb(CosmosDbError::from_status(status, format!("{context}: {err}")))
}

/// Extract diagnostic metadata from a response's status and headers
pub(crate) fn response_metadata(status: u16, headers: &Headers) -> ResponseMetadata {
    ResponseMetadata::from_parts(
        status,
        headers.get_optional_str(&HeaderName::from_static(ACTIVITY_ID_HEADER)),
        headers.get_optional_str(&HeaderName::from_static(REQUEST_CHARGE_HEADER)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use azure_core::error::ErrorKind;
    use azure_core::http::StatusCode;
    use test_case::test_case;

    fn config() -> CosmosDbConfig {
        CosmosDbConfig {
            endpoint: "https://test.documents.azure.com:443/".to_string(),
            key: Some(secret_string("dGVzdC1rZXk=".to_string())),
            connection_string: None,
            database_name: "quickstart".to_string(),
            container_name: "customers".to_string(),
            partition_key: "/customerId".to_string(),
            throughput: 400,
        }
    }

    #[test]
    fn test_parse_connection_string() {
        let (endpoint, key) = parse_connection_string(
            "AccountEndpoint=https://acct.documents.azure.com:443/;AccountKey=abc123==;",
        )
        .unwrap();
        assert_eq!(endpoint, "https://acct.documents.azure.com:443/");
        assert_eq!(key, "abc123==");
    }

    #[test]
    fn test_parse_connection_string_missing_key() {
        let result = parse_connection_string("AccountEndpoint=https://acct.documents.azure.com/;");
        assert!(matches!(
            result,
            Err(QuickstartError::CosmosDb(CosmosDbError::ConnectionFailed(_)))
        ));
    }

    #[test]
    fn test_client_from_key() {
        let client = CosmosDbClient::new(&config()).unwrap();
        assert_eq!(client.endpoint(), "https://test.documents.azure.com:443/");
    }

    #[test]
    fn test_client_from_connection_string() {
        let mut config = config();
        config.key = None;
        config.connection_string = Some(secret_string(
            "AccountEndpoint=https://cs.documents.azure.com:443/;AccountKey=dGVzdC1rZXk=;"
                .to_string(),
        ));

        let client = CosmosDbClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "https://cs.documents.azure.com:443/");
    }

    #[test]
    fn test_client_without_credentials_is_fatal() {
        let mut config = config();
        config.key = None;
        assert!(CosmosDbClient::new(&config).is_err());
    }

    fn http_error(status: StatusCode) -> azure_core::Error {
        azure_core::Error::with_message(
            ErrorKind::HttpResponse {
                status,
                error_code: None,
                raw_response: None,
            },
            "service error",
        )
    }

    #[test_case(StatusCode::Conflict => matches QuickstartError::CosmosDb(CosmosDbError::Conflict(_)) ; "conflict")]
    #[test_case(StatusCode::NotFound => matches QuickstartError::CosmosDb(CosmosDbError::NotFound(_)) ; "not found")]
    #[test_case(StatusCode::TooManyRequests => matches QuickstartError::CosmosDb(CosmosDbError::Throttled(_)) ; "throttled")]
    #[test_case(StatusCode::Forbidden => matches QuickstartError::CosmosDb(CosmosDbError::AuthenticationFailed { status: 403, .. }) ; "forbidden")]
    #[test_case(StatusCode::ServiceUnavailable => matches QuickstartError::CosmosDb(CosmosDbError::RequestFailed { status: 503, .. }) ; "unavailable")]
    fn test_map_sdk_http_error(status: StatusCode) -> QuickstartError {
        map_sdk_error(http_error(status), "Create item")
    }

    #[test]
    fn test_mapped_conflict_feeds_conflict_predicate() {
        let err = map_sdk_error(http_error(StatusCode::Conflict), "Create database");
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("Create database"));

        let err = map_sdk_error(http_error(StatusCode::NotFound), "Read item");
        assert!(err.is_not_found());
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_map_sdk_error_without_response_is_transport() {
        let err = azure_core::Error::with_message(ErrorKind::Io, "connection reset");
        let mapped = map_sdk_error(err, "Read item");
        assert!(matches!(
            mapped,
            QuickstartError::CosmosDb(CosmosDbError::Transport(ref message)) if message.contains("connection reset")
        ));
        assert!(!mapped.is_conflict());
    }
}
