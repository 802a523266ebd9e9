//! Walkthrough summary and reporting
//!
//! Tracks the outcome of each step so the run can be reported once it ends.

use crate::domain::CustomerDocument;
use std::fmt;
use std::time::Duration;

/// A walkthrough step, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Ensure the database exists
    CreateDatabase,
    /// Ensure the container exists
    CreateContainer,
    /// Insert the sample document
    CreateItem,
    /// Point-read the sample document
    ReadItem,
    /// Delete the sample document
    DeleteItem,
}

impl Step {
    /// Every step in execution order
    pub const ALL: [Step; 5] = [
        Step::CreateDatabase,
        Step::CreateContainer,
        Step::CreateItem,
        Step::ReadItem,
        Step::DeleteItem,
    ];
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::CreateDatabase => "create-database",
            Step::CreateContainer => "create-container",
            Step::CreateItem => "create-item",
            Step::ReadItem => "read-item",
            Step::DeleteItem => "delete-item",
        };
        f.write_str(name)
    }
}

/// How a step ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    /// The resource was created
    Created,
    /// The resource already existed
    AlreadyExists,
    /// A read or delete completed
    Succeeded,
    /// The step was not run
    Skipped,
    /// The step failed; the walkthrough carried on
    Failed(String),
}

impl StepStatus {
    /// Returns true for [`StepStatus::Failed`]
    pub fn is_failure(&self) -> bool {
        matches!(self, StepStatus::Failed(_))
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepStatus::Created => f.write_str("created"),
            StepStatus::AlreadyExists => f.write_str("already exists"),
            StepStatus::Succeeded => f.write_str("ok"),
            StepStatus::Skipped => f.write_str("skipped"),
            StepStatus::Failed(message) => write!(f, "failed: {message}"),
        }
    }
}

/// Outcome of a single step
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// Which step ran
    pub step: Step,

    /// How it ended
    pub status: StepStatus,

    /// Wall-clock time spent in the step
    pub duration: Duration,
}

/// Summary of a walkthrough run
#[derive(Debug, Clone, Default)]
pub struct WalkthroughSummary {
    /// Backend the run was executed against
    pub backend: String,

    /// Step outcomes in execution order
    pub steps: Vec<StepOutcome>,

    /// The document returned by the read step, if it succeeded
    pub read_document: Option<CustomerDocument>,

    /// Total duration of the run
    pub duration: Duration,
}

impl WalkthroughSummary {
    /// Create an empty summary for a backend
    pub fn new(backend: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            ..Self::default()
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a step outcome
    pub fn record(&mut self, step: Step, status: StepStatus, duration: Duration) {
        self.steps.push(StepOutcome {
            step,
            status,
            duration,
        });
    }

    /// Status of a step, if it was recorded
    pub fn status_of(&self, step: Step) -> Option<&StepStatus> {
        self.steps
            .iter()
            .find(|outcome| outcome.step == step)
            .map(|outcome| &outcome.status)
    }

    /// Steps that failed
    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps.iter().filter(|outcome| outcome.status.is_failure())
    }

    /// Check if every step succeeded (conflicts and skips count as success)
    pub fn is_successful(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        let failed = self.failures().count();
        tracing::info!(
            backend = %self.backend,
            steps = self.steps.len(),
            failed = failed,
            duration_ms = self.duration.as_millis() as u64,
            "Walkthrough completed"
        );

        for outcome in self.failures() {
            tracing::warn!(
                step = %outcome.step,
                status = %outcome.status,
                "Walkthrough step failed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_tracks_failures() {
        let mut summary = WalkthroughSummary::new("memory");
        summary.record(Step::CreateDatabase, StepStatus::AlreadyExists, Duration::ZERO);
        summary.record(Step::DeleteItem, StepStatus::Skipped, Duration::ZERO);
        assert!(summary.is_successful());

        summary.record(
            Step::ReadItem,
            StepStatus::Failed("Not found".to_string()),
            Duration::ZERO,
        );
        assert!(!summary.is_successful());
        assert_eq!(summary.failures().count(), 1);
        assert_eq!(
            summary.status_of(Step::CreateDatabase),
            Some(&StepStatus::AlreadyExists)
        );
        assert_eq!(summary.status_of(Step::CreateItem), None);
    }

    #[test]
    fn test_step_display() {
        let names: Vec<String> = Step::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            [
                "create-database",
                "create-container",
                "create-item",
                "read-item",
                "delete-item"
            ]
        );
        assert_eq!(
            StepStatus::Failed("boom".to_string()).to_string(),
            "failed: boom"
        );
    }

    #[test]
    fn test_summary_with_duration() {
        let summary = WalkthroughSummary::new("cosmosdb").with_duration(Duration::from_secs(3));
        assert_eq!(summary.duration, Duration::from_secs(3));
        assert!(summary.steps.is_empty());
    }
}
