//! Core logic for the quickstart.
//!
//! # Modules
//!
//! - [`provision`] - Idempotent provisioning and single-document CRUD
//! - [`walkthrough`] - The linear walkthrough and its summary
//!
//! # Walkthrough
//!
//! 1. **Ensure database**: create it, or accept that it already exists
//! 2. **Ensure container**: same, with partition key and throughput
//! 3. **Create item**: insert the sample document (a duplicate is logged)
//! 4. **Read item**: point-read it back by (partition key, id)
//! 5. **Delete item**: remove it again
//!
//! A failing step is logged and the next step still runs.
//!
//! # Example
//!
//! ```rust,no_run
//! use cosmos_quickstart::adapters::database::create_document_store;
//! use cosmos_quickstart::config::load_config;
//! use cosmos_quickstart::core::provision::ProvisioningClient;
//! use cosmos_quickstart::core::walkthrough::{run_walkthrough, WalkthroughPlan};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("cosmos-quickstart.toml")?;
//! let store = create_document_store(&config, false)?;
//! let client = ProvisioningClient::new(store);
//!
//! let plan = WalkthroughPlan::from_config(&config)?;
//! let summary = run_walkthrough(&client, &plan).await;
//!
//! println!("Successful: {}", summary.is_successful());
//! # Ok(())
//! # }
//! ```

pub mod provision;
pub mod walkthrough;
