//! Gas Cost Report
//!
//! Aggregation, cross-network comparison and chart generation for smart
//! contract gas cost datasets.
//!
//! This crate provides the core implementation for the
//! `gas-cost-report` CLI tool: CSV loading and cost cleaning, grouped
//! statistics and pivots, baseline comparison, PNG/SVG charts and console
//! summaries.
//!
//! ## Getting Started
//!
//! ```bash
//! gas-cost-report gas --input contract.csv
//! gas-cost-report deployment --demo
//! gas-cost-report all --config report.toml
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod compare;
pub mod output;
pub mod parser;
pub mod report;
pub mod utils;
