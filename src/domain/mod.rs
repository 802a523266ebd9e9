//! Domain models and types for the quickstart.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`DocumentId`], [`PartitionKeyValue`])
//! - **The document model** ([`CustomerDocument`])
//! - **Error types** ([`QuickstartError`], [`CosmosDbError`])
//! - **Result type alias** ([`Result`])
//!
//! # Builder Pattern
//!
//! ```rust
//! use cosmos_quickstart::domain::{CustomerDocument, DocumentId, PartitionKeyValue};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let document = CustomerDocument::builder()
//!     .id(DocumentId::new("1")?)
//!     .customer_id(PartitionKeyValue::new("1")?)
//!     .title("Mr")
//!     .first_name("Test")
//!     .last_name("User")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod customer;
pub mod errors;
pub mod ids;
pub mod result;

pub use customer::{CustomerDocument, CustomerDocumentBuilder};
pub use errors::{CosmosDbError, QuickstartError};
pub use ids::{DocumentId, PartitionKeyValue};
pub use result::Result;
