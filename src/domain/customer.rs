//! Customer document model
//!
//! The single document shape written to and read back from the container.
//! `customerId` doubles as the partition key value.

use crate::domain::ids::{DocumentId, PartitionKeyValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer record stored as one Cosmos DB item
///
/// Unknown properties on read (such as the `_rid`/`_etag`/`_ts` system
/// properties Cosmos DB adds) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDocument {
    /// Document ID, unique within the partition
    pub id: DocumentId,

    /// Customer ID (partition key value)
    pub customer_id: PartitionKeyValue,

    /// Honorific, e.g. "Mr"
    #[serde(default)]
    pub title: String,

    /// Given name
    #[serde(default)]
    pub first_name: String,

    /// Family name
    #[serde(default)]
    pub last_name: String,

    /// Contact email address
    #[serde(default)]
    pub email_address: String,

    /// Contact phone number
    #[serde(default)]
    pub phone_number: String,

    /// When the record was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
}

impl CustomerDocument {
    /// Creates a new builder for CustomerDocument
    pub fn builder() -> CustomerDocumentBuilder {
        CustomerDocumentBuilder::default()
    }

    /// Partition key value this document is stored under
    pub fn partition_key(&self) -> &PartitionKeyValue {
        &self.customer_id
    }

    /// Pretty-print with four-space indentation
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Builder for CustomerDocument
#[derive(Debug, Default)]
pub struct CustomerDocumentBuilder {
    id: Option<DocumentId>,
    customer_id: Option<PartitionKeyValue>,
    title: String,
    first_name: String,
    last_name: String,
    email_address: String,
    phone_number: String,
    creation_date: Option<DateTime<Utc>>,
}

impl CustomerDocumentBuilder {
    /// Creates a new CustomerDocumentBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document ID
    pub fn id(mut self, id: DocumentId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the customer ID (partition key value)
    pub fn customer_id(mut self, customer_id: PartitionKeyValue) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email_address(mut self, email_address: impl Into<String>) -> Self {
        self.email_address = email_address.into();
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    /// Sets the creation timestamp (defaults to now)
    pub fn creation_date(mut self, creation_date: DateTime<Utc>) -> Self {
        self.creation_date = Some(creation_date);
        self
    }

    /// Builds the CustomerDocument
    ///
    /// # Errors
    ///
    /// Returns an error if `id` or `customer_id` is missing
    pub fn build(self) -> Result<CustomerDocument, String> {
        Ok(CustomerDocument {
            id: self.id.ok_or("id is required")?,
            customer_id: self.customer_id.ok_or("customer_id is required")?,
            title: self.title,
            first_name: self.first_name,
            last_name: self.last_name,
            email_address: self.email_address,
            phone_number: self.phone_number,
            creation_date: Some(self.creation_date.unwrap_or_else(Utc::now)),
        })
    }
}
