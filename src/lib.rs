// Cosmos Quickstart - Azure Cosmos DB provisioning and CRUD walkthrough
// Copyright (c) 2025 Cosmos Quickstart Contributors
// Licensed under the MIT License

//! # Cosmos Quickstart
//!
//! A small walkthrough of the Azure Cosmos DB SDK: it ensures a database
//! and a container exist, then creates, reads and deletes one document.
//!
//! ## Overview
//!
//! - **Idempotent provisioning**: creating a database, container or document
//!   that already exists (HTTP 409) counts as success
//! - **Point operations**: read and delete by (partition key, id)
//! - **Best effort**: a failing step is logged and the next one still runs
//! - **Dry runs** against an in-memory store with the same semantics
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Provisioning client and walkthrough
//! - [`adapters`] - Document stores (Cosmos DB, in-memory)
//! - [`domain`] - Document model, identifiers and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cosmos_quickstart::adapters::database::create_document_store;
//! use cosmos_quickstart::config::load_config;
//! use cosmos_quickstart::core::provision::ProvisioningClient;
//! use cosmos_quickstart::core::walkthrough::{run_walkthrough, WalkthroughPlan};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("cosmos-quickstart.toml")?;
//!     let client = ProvisioningClient::new(create_document_store(&config, false)?);
//!
//!     let summary = run_walkthrough(&client, &WalkthroughPlan::from_config(&config)?).await;
//!     summary.log_summary();
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All library errors are [`domain::QuickstartError`]. Conflicts are
//! recognised with a single predicate:
//!
//! ```rust
//! use cosmos_quickstart::domain::{CosmosDbError, QuickstartError};
//!
//! let err: QuickstartError = CosmosDbError::from_status(Some(409), "exists").into();
//! assert!(err.is_conflict());
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
