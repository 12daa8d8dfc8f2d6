//! Aggregation of cost records into group statistics.
//!
//! This module transforms a cleaned `CostTable` into:
//! - Per-group summaries (count, sum, mean, standard deviation, extrema)
//! - Stable ascending rankings
//! - Two-dimensional pivots with explicit "no data" cells
//! - Most/least expensive records overall and per group
//! - Cross-network variability of function costs

pub mod extrema;
pub mod group;
pub mod pivot;
pub mod ranking;
pub mod stats;
pub mod variability;

// Re-export main types and functions
pub use extrema::{least_expensive, least_expensive_per, most_expensive, most_expensive_per, GroupExtreme};
pub use group::{group_by, GroupKey, GroupStats};
pub use pivot::{Cell, Pivot};
pub use ranking::{rank_groups, RankedGroup, Ranking};
pub use stats::{sample_std_dev, Metric, Summary};
pub use variability::{variability_by_contract, ContractVariability, FunctionVariability};
