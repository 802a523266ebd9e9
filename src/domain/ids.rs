//! Domain identifier types with validation
//!
//! Newtype wrappers for the two halves of a document's composite key.
//! Both must be non-empty; Cosmos DB additionally rejects ids containing
//! `/`, `\`, `?` or `#`, so those are refused up front.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const FORBIDDEN_ID_CHARS: [char; 4] = ['/', '\\', '?', '#'];

/// Document identifier, unique within a logical partition
///
/// # Examples
///
/// ```
/// use cosmos_quickstart::domain::ids::DocumentId;
/// use std::str::FromStr;
///
/// let id = DocumentId::from_str("1").unwrap();
/// assert_eq!(id.as_str(), "1");
/// assert!(DocumentId::new("a/b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates a new DocumentId from a string
    ///
    /// Returns `Err` if the id is blank or contains a character Cosmos DB
    /// does not allow in resource ids.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Document ID cannot be empty".to_string());
        }
        if let Some(c) = id.chars().find(|c| FORBIDDEN_ID_CHARS.contains(c)) {
            return Err(format!("Document ID '{id}' contains invalid character '{c}'"));
        }
        Ok(Self(id))
    }

    /// Returns the document ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DocumentId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

/// Value of a document's partition key
///
/// Must match between create, read and delete for the same document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartitionKeyValue(String);

impl PartitionKeyValue {
    /// Creates a new PartitionKeyValue from a string
    pub fn new(value: impl Into<String>) -> Result<Self, String> {
        let value = value.into();
        if value.is_empty() {
            return Err("Partition key value cannot be empty".to_string());
        }
        Ok(Self(value))
    }

    /// Returns the partition key value as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartitionKeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PartitionKeyValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PartitionKeyValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PartitionKeyValue {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PartitionKeyValue> for String {
    fn from(value: PartitionKeyValue) -> Self {
        value.0
    }
}
