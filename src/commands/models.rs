use crate::parser::schema::ColumnMapping;
use crate::utils::config::{ChartSettings, ReportConfig};
use std::path::PathBuf;

/// Arguments for the gas command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct GasArgs {
    /// Per-function average cost CSV
    pub input_path: PathBuf,

    /// Directory chart files are written to
    pub output_dir: PathBuf,

    /// Header names of the input file
    pub columns: ColumnMapping,

    /// Function value identifying deployment rows
    pub deployment_sentinel: String,

    /// Chart dimensions and file names
    pub charts: ChartSettings,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl GasArgs {
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            input_path: config.inputs.gas.clone(),
            output_dir: config.output_dir.clone(),
            columns: config.columns.gas(),
            deployment_sentinel: config.deployment_sentinel.clone(),
            charts: config.charts.clone(),
            print_summary: true,
        }
    }
}

impl Default for GasArgs {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}

/// The variability report reads the same file as the gas report
pub type VariabilityArgs = GasArgs;

/// Arguments for the deployment command
#[derive(Debug, Clone)]
pub struct DeploymentArgs {
    /// Deployment estimate CSV; ignored with `demo`
    pub input_path: PathBuf,

    pub output_dir: PathBuf,
    pub columns: ColumnMapping,

    /// Network every other network is compared against
    pub baseline_network: String,

    pub deployment_sentinel: String,
    pub charts: ChartSettings,

    /// Use the built-in sample dataset instead of reading a file
    pub demo: bool,

    pub print_summary: bool,
}

impl DeploymentArgs {
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            input_path: config.inputs.deployment.clone(),
            output_dir: config.output_dir.clone(),
            columns: config.columns.deployment(),
            baseline_network: config.baseline_network.clone(),
            deployment_sentinel: config.deployment_sentinel.clone(),
            charts: config.charts.clone(),
            demo: false,
            print_summary: true,
        }
    }
}

impl Default for DeploymentArgs {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}

/// Arguments for the execution command
#[derive(Debug, Clone)]
pub struct ExecutionArgs {
    /// Gas reporter export CSV
    pub input_path: PathBuf,

    pub output_dir: PathBuf,
    pub columns: ColumnMapping,
    pub deployment_sentinel: String,
    pub charts: ChartSettings,
    pub print_summary: bool,
}

impl ExecutionArgs {
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            input_path: config.inputs.execution.clone(),
            output_dir: config.output_dir.clone(),
            columns: config.columns.execution(),
            deployment_sentinel: config.deployment_sentinel.clone(),
            charts: config.charts.clone(),
            print_summary: true,
        }
    }
}

impl Default for ExecutionArgs {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}
