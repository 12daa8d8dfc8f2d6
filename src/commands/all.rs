//! Run every report from one configuration.

use super::deployment::execute_deployment;
use super::execution::execute_execution;
use super::gas::execute_gas;
use super::models::{DeploymentArgs, ExecutionArgs, GasArgs, VariabilityArgs};
use super::variability::execute_variability;
use crate::report::{DeploymentReport, ExecutionReport, GasReport, VariabilityReport};
use crate::utils::config::ReportConfig;
use crate::utils::error::LoadError;
use anyhow::Result;
use log::info;

/// Results of a full run
#[derive(Debug, Clone, PartialEq)]
pub struct AllReports {
    pub gas: GasReport,
    pub variability: VariabilityReport,
    pub deployment: DeploymentReport,
    pub execution: ExecutionReport,
}

/// Execute all four reports
///
/// **Public** - main entry point for the `all` command
///
/// Every input is checked before the first report runs, so a missing file
/// aborts the run without writing any chart.
///
/// # Errors
/// * `LoadError::FileNotFound` - one of the configured inputs does not exist
/// * Any error of the individual reports
pub fn execute_all(config: &ReportConfig, print_summary: bool) -> Result<AllReports> {
    for path in [
        &config.inputs.gas,
        &config.inputs.deployment,
        &config.inputs.execution,
    ] {
        if !path.is_file() {
            return Err(LoadError::FileNotFound(path.clone()).into());
        }
    }

    info!("Running gas report (1/4)");
    let gas = execute_gas(GasArgs {
        print_summary,
        ..GasArgs::from_config(config)
    })?;

    info!("Running variability report (2/4)");
    let variability = execute_variability(VariabilityArgs {
        print_summary,
        ..VariabilityArgs::from_config(config)
    })?;

    info!("Running deployment report (3/4)");
    let deployment = execute_deployment(DeploymentArgs {
        print_summary,
        ..DeploymentArgs::from_config(config)
    })?;

    info!("Running execution report (4/4)");
    let execution = execute_execution(ExecutionArgs {
        print_summary,
        ..ExecutionArgs::from_config(config)
    })?;

    Ok(AllReports {
        gas,
        variability,
        deployment,
        execution,
    })
}
