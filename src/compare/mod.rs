//! Cross-baseline cost comparison.
//!
//! Compares every group (e.g. network) against one designated baseline
//! group, matched by a shared key (e.g. contract), and produces discount
//! tables in USD and percent.
//!
//! # Example
//! ```ignore
//! use gas_cost_report::compare::{compare_to_baseline, ComparisonAxes};
//!
//! let comparison = compare_to_baseline(&table, ComparisonAxes::default(), "Ethereum");
//! println!("excluded: {}", comparison.excluded_missing_baseline);
//! ```

mod averages;
mod baseline;
mod discount;
mod schema;

// Public API exports
pub use averages::summarize_against_baseline;
pub use baseline::{compare_group, compare_to_baseline};
pub use discount::calculate_discount;
pub use schema::{
    BaselineAverages, BaselineComparison, ComparisonAxes, ComparisonRow, Discount, GroupDiscount,
};
