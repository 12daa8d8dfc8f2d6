//! Report results and their console rendering.
//!
//! `schema` holds the result object every report command returns;
//! `terminal` turns those results into plain-text summaries for stdout.

pub mod schema;
pub mod terminal;

pub use schema::{
    ChartOutcome, DeploymentReport, ExecutionReport, GasReport, NetworkTotals, VariabilityReport,
};
pub use terminal::{
    render_deployment_report, render_execution_report, render_gas_report,
    render_variability_report,
};
