//! Schema definitions for baseline comparisons.

use crate::parser::schema::Dimension;
use std::fmt;

/// Percentage discount relative to a baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Discount {
    Percent(f64),

    /// Baseline cost is exactly zero
    Undefined,
}

impl Discount {
    pub fn percent(&self) -> Option<f64> {
        match self {
            Discount::Percent(p) => Some(*p),
            Discount::Undefined => None,
        }
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discount::Percent(p) => write!(f, "{:.2}%", p),
            Discount::Undefined => f.write_str("undefined"),
        }
    }
}

/// Which dimension is compared and which one matches rows across groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonAxes {
    /// Dimension holding the baseline value (e.g. Network)
    pub group: Dimension,

    /// Shared key rows are matched on (e.g. Contract)
    pub key: Dimension,
}

impl Default for ComparisonAxes {
    fn default() -> Self {
        Self {
            group: Dimension::Network,
            key: Dimension::Contract,
        }
    }
}

/// One matched (group, key) pair compared with the baseline
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Shared key (e.g. contract name)
    pub key: String,

    /// Compared group (e.g. network name)
    pub group: String,

    /// Mean cost of the compared group for this key
    pub cost_usd: f64,

    /// Mean cost of the baseline for this key
    pub baseline_cost_usd: f64,

    /// baseline - cost
    pub discount_usd: f64,

    pub discount_pct: Discount,
}

/// Comparison of one or more groups against the baseline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaselineComparison {
    pub baseline: String,

    /// Matched rows ordered by (key, cost)
    pub rows: Vec<ComparisonRow>,

    /// Number of (group, key) pairs without a baseline entry
    pub excluded_missing_baseline: usize,
}

/// Average cost of one group compared with the baseline average
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDiscount {
    pub group: String,
    pub avg_cost_usd: f64,

    /// baseline average - group average
    pub difference_usd: f64,

    pub discount_pct: Discount,
    pub is_baseline: bool,
}

/// Per-group averages against the baseline's average
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineAverages {
    pub baseline: String,

    /// Sum over every baseline row
    pub baseline_total_usd: f64,

    /// Mean over every baseline row
    pub baseline_avg_usd: f64,

    /// All groups including the baseline, cheapest average first
    pub entries: Vec<GroupDiscount>,
}
