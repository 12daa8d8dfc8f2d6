//! CLI command implementations.
//!
//! Each report is implemented in its own module.
//! Commands orchestrate the library components: load, aggregate, render
//! charts in memory, write them, then print the summary.

pub mod all;
pub mod deployment;
pub mod execution;
pub mod gas;
pub mod models;
pub mod utils;
pub mod variability;

// Re-export main command functions
pub use all::{execute_all, AllReports};
pub use deployment::execute_deployment;
pub use execution::execute_execution;
pub use gas::execute_gas;
pub use models::{DeploymentArgs, ExecutionArgs, GasArgs, VariabilityArgs};
pub use utils::display_version;
pub use variability::execute_variability;
