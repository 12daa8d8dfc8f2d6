//! CSV loading, cost cleaning and the in-memory cost table.
//!
//! This module handles:
//! - Reading cost CSVs with configurable header names
//! - Coercing currency-formatted cost text into numbers
//! - Holding cleaned records in an immutable `CostTable`

pub mod cleaner;
pub mod demo;
pub mod loader;
pub mod schema;

// Re-export main types
pub use cleaner::clean_cost;
pub use loader::{load_cost_table, read_cost_table};
pub use schema::{CleanStats, ColumnMapping, CostRecord, CostTable, Dimension};
