//! Cost record and table definitions.
//!
//! A `CostTable` is loaded once per run and never mutated afterwards.
//! Every filter returns a new table so the source can be reused across
//! any number of aggregation calls.

use std::collections::HashSet;
use std::fmt;

/// One cleaned row of input
#[derive(Debug, Clone, PartialEq)]
pub struct CostRecord {
    /// Execution environment (e.g. "Arbitrum")
    pub network: String,

    /// Contract or module name
    pub contract: String,

    /// Function/method name, or the deployment sentinel
    pub function: String,

    /// Cost in USD, always finite and >= 0
    pub cost_usd: f64,
}

impl CostRecord {
    pub fn new(
        network: impl Into<String>,
        contract: impl Into<String>,
        function: impl Into<String>,
        cost_usd: f64,
    ) -> Self {
        Self {
            network: network.into(),
            contract: contract.into(),
            function: function.into(),
            cost_usd,
        }
    }

    /// True for one-time contract creation rows
    pub fn is_deployment(&self, sentinel: &str) -> bool {
        self.function == sentinel
    }

    /// Label of this record along a grouping dimension
    pub fn label(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Network => &self.network,
            Dimension::Contract => &self.contract,
            Dimension::Function => &self.function,
        }
    }
}

/// Categorical columns records can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Network,
    Contract,
    Function,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Network => "Network",
            Dimension::Contract => "Contract",
            Dimension::Function => "Function",
        };
        f.write_str(name)
    }
}

/// Counters describing rows removed while loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    /// Data rows read from the file
    pub total_rows: usize,

    /// Rows skipped because the CSV line was unreadable or a key was blank
    pub malformed_rows: usize,

    /// Rows dropped because the cost field failed numeric coercion
    pub invalid_costs: usize,
}

impl CleanStats {
    /// Rows that made it into the table
    pub fn kept(&self) -> usize {
        self.total_rows - self.dropped()
    }

    pub fn dropped(&self) -> usize {
        self.malformed_rows + self.invalid_costs
    }
}

/// Header names for each field of a `CostRecord`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub network: String,
    pub contract: String,

    /// None when every row of the file is a deployment estimate
    pub function: Option<String>,

    pub cost: String,
}

impl ColumnMapping {
    /// Per-function average costs (`Network,Contract,Function,usd avg`)
    pub fn function_costs() -> Self {
        Self {
            network: "Network".to_string(),
            contract: "Contract".to_string(),
            function: Some("Function".to_string()),
            cost: "usd avg".to_string(),
        }
    }

    /// Deployment estimates (`Contract,Network,Est. Deployment Cost (USD)`)
    pub fn deployment_estimates() -> Self {
        Self {
            network: "Network".to_string(),
            contract: "Contract".to_string(),
            function: None,
            cost: "Est. Deployment Cost (USD)".to_string(),
        }
    }

    /// Gas reporter export (`Contract,Method,Network,...,USD Avg`)
    pub fn gas_reporter() -> Self {
        Self {
            network: "Network".to_string(),
            contract: "Contract".to_string(),
            function: Some("Method".to_string()),
            cost: "USD Avg".to_string(),
        }
    }
}

/// Immutable in-memory table of cleaned cost records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostTable {
    records: Vec<CostRecord>,
    stats: CleanStats,
}

impl CostTable {
    pub fn new(records: Vec<CostRecord>) -> Self {
        let stats = CleanStats {
            total_rows: records.len(),
            ..Default::default()
        };
        Self { records, stats }
    }

    pub fn with_stats(records: Vec<CostRecord>, stats: CleanStats) -> Self {
        Self { records, stats }
    }

    pub fn records(&self) -> &[CostRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Load-time counters (carried unchanged through filters)
    pub fn clean_stats(&self) -> CleanStats {
        self.stats
    }

    /// All cost values in row order
    pub fn costs(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.cost_usd).collect()
    }

    /// Derive a new table holding the rows matching `predicate`
    pub fn filter<F>(&self, predicate: F) -> CostTable
    where
        F: Fn(&CostRecord) -> bool,
    {
        CostTable {
            records: self
                .records
                .iter()
                .filter(|r| predicate(r))
                .cloned()
                .collect(),
            stats: self.stats,
        }
    }

    /// Rows whose label along `dimension` equals `value`
    pub fn matching(&self, dimension: Dimension, value: &str) -> CostTable {
        self.filter(|r| r.label(dimension) == value)
    }

    /// Rows whose label along `dimension` differs from `value`
    pub fn excluding(&self, dimension: Dimension, value: &str) -> CostTable {
        self.filter(|r| r.label(dimension) != value)
    }

    /// Deployment rows only
    pub fn deployments(&self, sentinel: &str) -> CostTable {
        self.filter(|r| r.is_deployment(sentinel))
    }

    /// Recurring execution rows only
    pub fn executions(&self, sentinel: &str) -> CostTable {
        self.filter(|r| !r.is_deployment(sentinel))
    }

    /// Distinct labels along a dimension, in first-appearance order
    pub fn unique(&self, dimension: Dimension) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.label(dimension))
            .filter(|label| seen.insert(*label))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CostTable {
        CostTable::new(vec![
            CostRecord::new("Arbitrum", "Token", "transfer", 0.02),
            CostRecord::new("Polygon", "Token", "transfer", 0.01),
            CostRecord::new("Arbitrum", "Vault", "deployment", 1.5),
            CostRecord::new("Arbitrum", "Token", "approve", 0.03),
        ])
    }

    #[test]
    fn test_unique_preserves_first_appearance() {
        let table = sample();
        assert_eq!(table.unique(Dimension::Network), vec!["Arbitrum", "Polygon"]);
        assert_eq!(
            table.unique(Dimension::Function),
            vec!["transfer", "deployment", "approve"]
        );
    }

    #[test]
    fn test_filters_do_not_touch_source() {
        let table = sample();
        let arbitrum = table.matching(Dimension::Network, "Arbitrum");
        let others = table.excluding(Dimension::Network, "Arbitrum");

        assert_eq!(arbitrum.len(), 3);
        assert_eq!(others.len(), 1);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_deployment_split() {
        let table = sample();
        assert_eq!(table.deployments("deployment").len(), 1);
        assert_eq!(table.executions("deployment").len(), 3);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let table = CostTable::new(vec![
            CostRecord::new("arbitrum", "Token", "transfer", 0.02),
            CostRecord::new("Arbitrum", "Token", "transfer", 0.01),
        ]);
        assert_eq!(table.unique(Dimension::Network).len(), 2);
    }

    #[test]
    fn test_clean_stats() {
        let stats = CleanStats {
            total_rows: 10,
            malformed_rows: 1,
            invalid_costs: 2,
        };
        assert_eq!(stats.dropped(), 3);
        assert_eq!(stats.kept(), 7);
    }
}
