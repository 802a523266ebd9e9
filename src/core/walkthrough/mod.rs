//! Walkthrough orchestration
//!
//! Runs ensure-database, ensure-container, create, read and delete in
//! order and reports the outcome of each step.

pub mod runner;
pub mod summary;

pub use runner::{run_walkthrough, WalkthroughPlan};
pub use summary::{Step, StepOutcome, StepStatus, WalkthroughSummary};
