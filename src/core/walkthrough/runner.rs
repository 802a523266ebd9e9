//! Walkthrough runner
//!
//! Runs the provisioning and CRUD steps in order. A failing step is logged
//! and recorded, and the next step still runs.

use super::summary::{Step, StepStatus, WalkthroughSummary};
use crate::adapters::database::ContainerSpec;
use crate::config::QuickstartConfig;
use crate::core::provision::{Provisioned, ProvisioningClient};
use crate::domain::{CustomerDocument, QuickstartError, Result};
use std::time::Instant;

/// What a walkthrough run operates on
#[derive(Debug, Clone)]
pub struct WalkthroughPlan {
    /// Database to provision
    pub database: String,

    /// Container to provision
    pub container: ContainerSpec,

    /// Document to insert, read and delete
    pub document: CustomerDocument,

    /// Leave the document in place instead of deleting it
    pub keep_document: bool,
}

impl WalkthroughPlan {
    /// Build a plan from configuration
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configured document is invalid.
    pub fn from_config(config: &QuickstartConfig) -> Result<Self> {
        let document = config
            .document
            .to_document()
            .map_err(QuickstartError::Validation)?;

        Ok(Self {
            database: config.cosmosdb.database_name.clone(),
            container: ContainerSpec::new(
                config.cosmosdb.container_name.clone(),
                config.cosmosdb.partition_key.clone(),
            )
            .with_throughput(config.cosmosdb.throughput),
            document,
            keep_document: false,
        })
    }

    /// Skip the delete step
    pub fn keep_document(mut self, keep: bool) -> Self {
        self.keep_document = keep;
        self
    }
}

fn provisioned_status(result: Result<Provisioned>) -> Result<StepStatus> {
    result.map(|outcome| match outcome {
        Provisioned::Created(_) => StepStatus::Created,
        Provisioned::AlreadyExists => StepStatus::AlreadyExists,
    })
}

/// Record a step result, logging failures
fn record<T>(
    summary: &mut WalkthroughSummary,
    step: Step,
    started: Instant,
    result: Result<T>,
    status: impl FnOnce(T) -> StepStatus,
) {
    let status = match result {
        Ok(value) => status(value),
        Err(e) => {
            tracing::error!(step = %step, error = %e, "Walkthrough step failed");
            StepStatus::Failed(e.to_string())
        }
    };
    tracing::debug!(step = %step, status = %status, "Step finished");
    summary.record(step, status, started.elapsed());
}

/// Run every step of the walkthrough against the client
///
/// Never fails: step errors end up in the returned summary.
pub async fn run_walkthrough(
    client: &ProvisioningClient,
    plan: &WalkthroughPlan,
) -> WalkthroughSummary {
    let start_time = Instant::now();
    let mut summary = WalkthroughSummary::new(client.backend_name());
    let database = plan.database.as_str();
    let container = plan.container.name.as_str();
    let partition_key = plan.document.partition_key();

    tracing::info!(
        backend = client.backend_name(),
        database = database,
        container = container,
        "Starting walkthrough"
    );

    let started = Instant::now();
    let result = provisioned_status(client.ensure_database(database).await);
    record(&mut summary, Step::CreateDatabase, started, result, |s| s);

    let started = Instant::now();
    let result = provisioned_status(client.ensure_container(database, &plan.container).await);
    record(&mut summary, Step::CreateContainer, started, result, |s| s);

    let started = Instant::now();
    let result = provisioned_status(
        client
            .create_document(database, container, partition_key, &plan.document)
            .await,
    );
    record(&mut summary, Step::CreateItem, started, result, |s| s);

    let started = Instant::now();
    let result = client
        .read_document(database, container, partition_key, &plan.document.id)
        .await;
    let mut read_document = None;
    record(&mut summary, Step::ReadItem, started, result, |document| {
        tracing::info!(customer_id = %document.customer_id, "Read item");
        read_document = Some(document);
        StepStatus::Succeeded
    });
    summary.read_document = read_document;

    if plan.keep_document {
        tracing::info!(id = %plan.document.id, "Keeping document, delete skipped");
        summary.record(Step::DeleteItem, StepStatus::Skipped, Default::default());
    } else {
        let started = Instant::now();
        let result = client
            .delete_document(database, container, partition_key, &plan.document.id)
            .await;
        record(&mut summary, Step::DeleteItem, started, result, |_| {
            StepStatus::Succeeded
        });
    }

    let summary = summary.with_duration(start_time.elapsed());
    summary.log_summary();
    summary
}
