//! Configuration and constants for the CLI.
//!
//! Every path and chart file name used by the reports lives here with a
//! documented default. A TOML file can override any subset of them; missing
//! sections fall back to the defaults below.

use crate::parser::schema::ColumnMapping;
use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory charts are written to when none is configured
pub const DEFAULT_OUTPUT_DIR: &str = "gas_cost_analysis_charts";

/// Network used as the reference for deployment discounts
pub const DEFAULT_BASELINE_NETWORK: &str = "Ethereum";

/// Function/method value marking one-time contract creation rows
pub const DEPLOYMENT_SENTINEL: &str = "deployment";

/// Currency symbol stripped from the front of cost fields
pub const CURRENCY_SYMBOL: char = '$';

/// Digit group separator accepted in the integer part of a cost ("1,250.00")
pub const THOUSANDS_SEPARATOR: char = ',';

/// Unit suffixes stripped from cost fields (e.g. "12.5 USD")
pub const COST_UNIT_SUFFIXES: &[&str] = &["USD"];

/// Label printed wherever an aggregate has no underlying rows
pub const NO_DATA_LABEL: &str = "no data";

pub const DEFAULT_CHART_WIDTH: usize = 1200;
pub const DEFAULT_CHART_HEIGHT: usize = 800;

/// Panel grid used by the per-contract charts (columns x rows)
pub const PANEL_GRID_COLUMNS: usize = 2;

/// Top-level report configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory all chart files are written to
    pub output_dir: PathBuf,

    /// Network the deployment report compares against
    pub baseline_network: String,

    /// Function value identifying deployment rows
    pub deployment_sentinel: String,

    /// CSV input paths per report
    pub inputs: InputPaths,

    /// Header names per input file
    pub columns: ColumnSets,

    /// Chart dimensions and file names
    pub charts: ChartSettings,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            baseline_network: DEFAULT_BASELINE_NETWORK.to_string(),
            deployment_sentinel: DEPLOYMENT_SENTINEL.to_string(),
            inputs: InputPaths::default(),
            columns: ColumnSets::default(),
            charts: ChartSettings::default(),
        }
    }
}

impl ReportConfig {
    /// Check values that would make every report meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output_dir cannot be empty".to_string()));
        }

        if self.baseline_network.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "baseline_network cannot be empty".to_string(),
            ));
        }

        if self.deployment_sentinel.is_empty() {
            return Err(ConfigError::Invalid(
                "deployment_sentinel cannot be empty".to_string(),
            ));
        }

        if self.charts.width < 200 || self.charts.height < 150 {
            return Err(ConfigError::Invalid(format!(
                "chart size {}x{} is too small (min 200x150)",
                self.charts.width, self.charts.height
            )));
        }

        Ok(())
    }
}

/// CSV input locations
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputPaths {
    /// Per-function average costs (gas and variability reports)
    pub gas: PathBuf,

    /// Estimated deployment costs
    pub deployment: PathBuf,

    /// Hardhat gas reporter export
    pub execution: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            gas: PathBuf::from("contract.csv"),
            deployment: PathBuf::from("deploymentgasestimation.csv"),
            execution: PathBuf::from("output.csv"),
        }
    }
}

/// Column header overrides per input file
///
/// Each file starts from its own built-in mapping; only the headers named
/// in the TOML section are replaced.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColumnSets {
    pub gas: ColumnOverrides,
    pub deployment: ColumnOverrides,
    pub execution: ColumnOverrides,
}

impl ColumnSets {
    pub fn gas(&self) -> ColumnMapping {
        self.gas.apply(ColumnMapping::function_costs())
    }

    pub fn deployment(&self) -> ColumnMapping {
        self.deployment.apply(ColumnMapping::deployment_estimates())
    }

    pub fn execution(&self) -> ColumnMapping {
        self.execution.apply(ColumnMapping::gas_reporter())
    }
}

/// Optional header names replacing a built-in column mapping
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColumnOverrides {
    pub network: Option<String>,
    pub contract: Option<String>,
    pub function: Option<String>,
    pub cost: Option<String>,
}

impl ColumnOverrides {
    pub fn apply(&self, mut base: ColumnMapping) -> ColumnMapping {
        if let Some(network) = &self.network {
            base.network = network.clone();
        }
        if let Some(contract) = &self.contract {
            base.contract = contract.clone();
        }
        if let Some(function) = &self.function {
            base.function = Some(function.clone());
        }
        if let Some(cost) = &self.cost {
            base.cost = cost.clone();
        }
        base
    }
}

/// Chart dimensions and output file names
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Width in pixels of each chart
    pub width: usize,

    /// Height in pixels of single-panel charts
    pub height: usize,

    pub files: ChartFiles,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            files: ChartFiles::default(),
        }
    }
}

/// Output file name of every chart the reports produce
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartFiles {
    pub merged_comparison: String,
    pub heatmap: String,
    pub boxplot: String,
    pub line_chart: String,
    pub variability: String,
    pub deployment_bars: String,
    pub deployment_lines: String,
    pub deployment_summary: String,
    pub execution_stacked: String,
    pub deployment_stacked: String,
}

impl Default for ChartFiles {
    fn default() -> Self {
        Self {
            merged_comparison: "merged_contract_cost_comparison.png".to_string(),
            heatmap: "cost_heatmap.png".to_string(),
            boxplot: "cost_distribution_boxplot.png".to_string(),
            line_chart: "merged_contract_costs_line_chart.png".to_string(),
            variability: "function_cost_variability_stddev_chart.png".to_string(),
            deployment_bars: "deployment_costs_bar_charts.png".to_string(),
            deployment_lines: "deployment_costs_line_charts.png".to_string(),
            deployment_summary: "deployment_costs_summary.png".to_string(),
            execution_stacked: "total_execution_cost_by_function.png".to_string(),
            deployment_stacked: "deployment_cost_by_contract.png".to_string(),
        }
    }
}

/// Load a report configuration from a TOML file
///
/// # Errors
/// * `ConfigError::Io` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
/// * `ConfigError::Invalid` - If values fail validation
///
/// # Example
/// ```ignore
/// let config = load_config("report.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ReportConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: ReportConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = ReportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.baseline_network, "Ethereum");
        assert_eq!(config.charts.files.heatmap, "cost_heatmap.png");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
output_dir = "charts"
baseline_network = "Polygon"

[columns.gas]
cost = "USD Avg"

[charts.files]
heatmap = "heat.svg"
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.output_dir, PathBuf::from("charts"));
        assert_eq!(config.baseline_network, "Polygon");
        assert_eq!(config.columns.gas().cost, "USD Avg");
        assert_eq!(config.columns.gas().network, "Network");
        assert_eq!(config.columns.deployment().function, None);
        assert_eq!(config.charts.files.heatmap, "heat.svg");
        assert_eq!(config.charts.files.boxplot, "cost_distribution_boxplot.png");
        assert_eq!(config.inputs.gas, PathBuf::from("contract.csv"));
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output_dir = [").unwrap();
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::ParseFailed(_))
        ));
    }

    #[test]
    fn test_empty_baseline_rejected() {
        let config = ReportConfig {
            baseline_network: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tiny_chart_rejected() {
        let mut config = ReportConfig::default();
        config.charts.width = 10;
        assert!(config.validate().is_err());
    }
}
