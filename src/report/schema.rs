//! Result objects returned by the report commands.
//!
//! Each report carries the aggregates it printed and the chart files it
//! produced, so callers (and tests) can inspect a run without parsing stdout.

use crate::aggregator::{ContractVariability, GroupExtreme, Ranking};
use crate::compare::{BaselineAverages, BaselineComparison};
use crate::parser::schema::{CleanStats, CostRecord};
use std::path::PathBuf;

/// Chart files written and charts skipped for lack of data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartOutcome {
    pub written: Vec<PathBuf>,

    /// Titles of charts that had nothing to draw
    pub skipped: Vec<String>,
}

/// Per-function average cost report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GasReport {
    /// ISO 8601 timestamp of the run
    pub generated_at: String,

    pub clean_stats: CleanStats,

    /// Networks by mean cost, cheapest first
    pub network_ranking: Ranking,

    pub most_expensive: Option<CostRecord>,
    pub least_expensive: Option<CostRecord>,
    pub most_expensive_per_network: Vec<GroupExtreme>,
    pub charts: ChartOutcome,
}

/// Cross-network cost variability report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariabilityReport {
    /// ISO 8601 timestamp of the run
    pub generated_at: String,

    pub clean_stats: CleanStats,
    pub contracts: Vec<ContractVariability>,
    pub charts: ChartOutcome,
}

/// Deployment cost report against a baseline network
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeploymentReport {
    /// ISO 8601 timestamp of the run
    pub generated_at: String,

    /// Input file or "built-in demo dataset"
    pub source: String,

    pub clean_stats: CleanStats,
    pub baseline: String,

    /// None when the baseline has no rows
    pub averages: Option<BaselineAverages>,

    pub comparison: BaselineComparison,

    /// Cheapest non-baseline network per contract
    pub cheapest_per_contract: Vec<GroupExtreme>,

    /// Most expensive non-baseline network per contract
    pub most_expensive_per_contract: Vec<GroupExtreme>,

    pub charts: ChartOutcome,
}

/// Total cost of one network, split by row kind
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkTotals {
    pub network: String,

    /// Sum over execution rows; None without any
    pub execution_usd: Option<f64>,

    /// Sum over deployment rows; None without any
    pub deployment_usd: Option<f64>,
}

/// Execution vs deployment cost report of a gas reporter export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionReport {
    /// ISO 8601 timestamp of the run
    pub generated_at: String,

    pub clean_stats: CleanStats,
    pub totals: Vec<NetworkTotals>,
    pub charts: ChartOutcome,
}
