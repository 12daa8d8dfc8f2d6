//! Two-dimensional pivot of an aggregate.
//!
//! Rows and columns are labels of two dimensions in first-appearance order.
//! A combination with no rows is `Cell::NoData`, never 0.0.

use super::group::{group_by, GroupKey};
use super::stats::{sample_std_dev, Metric};
use crate::parser::schema::{CostTable, Dimension};
use crate::utils::config::NO_DATA_LABEL;
use log::debug;
use std::collections::HashMap;
use std::fmt;

/// One pivot cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Value(f64),
    NoData,
}

impl Cell {
    pub fn value(&self) -> Option<f64> {
        match self {
            Cell::Value(v) => Some(*v),
            Cell::NoData => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Cell::NoData)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Value(v) => write!(f, "{:.6}", v),
            Cell::NoData => f.write_str(NO_DATA_LABEL),
        }
    }
}

/// Matrix of an aggregate indexed by two dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct Pivot {
    pub row_dimension: Dimension,
    pub column_dimension: Dimension,
    pub metric: Metric,
    rows: Vec<String>,
    columns: Vec<String>,
    cells: Vec<Vec<Cell>>,
}

impl Pivot {
    /// Build a pivot of `metric` over (`row_dimension`, `column_dimension`)
    ///
    /// **Public** - feeds heatmaps, stacked bars and variability analysis
    pub fn build(
        table: &CostTable,
        row_dimension: Dimension,
        column_dimension: Dimension,
        metric: Metric,
    ) -> Self {
        let rows = table.unique(row_dimension);
        let columns = table.unique(column_dimension);

        let values: HashMap<GroupKey, Option<f64>> =
            group_by(table, &[row_dimension, column_dimension])
                .into_iter()
                .map(|g| (g.key, g.summary.metric(metric)))
                .collect();

        let cells = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| {
                        match values.get(&GroupKey::new([row.as_str(), col.as_str()])) {
                            Some(Some(v)) => Cell::Value(*v),
                            _ => Cell::NoData,
                        }
                    })
                    .collect()
            })
            .collect();

        debug!(
            "Built {} pivot: {} {} x {} {}",
            metric,
            rows.len(),
            row_dimension,
            columns.len(),
            column_dimension
        );

        Self {
            row_dimension,
            column_dimension,
            metric,
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    /// Cell by label; None when either label is not part of the pivot
    pub fn get(&self, row: &str, column: &str) -> Option<Cell> {
        let i = self.rows.iter().position(|r| r == row)?;
        let j = self.columns.iter().position(|c| c == column)?;
        Some(self.cells[i][j])
    }

    /// Cells of row `index`, in column order
    pub fn row_cells(&self, index: usize) -> &[Cell] {
        &self.cells[index]
    }

    /// Values of one column in row order; all None for an unknown column
    pub fn column_values(&self, column: &str) -> Vec<Option<f64>> {
        match self.columns.iter().position(|c| c == column) {
            Some(j) => self.cells.iter().map(|row| row[j].value()).collect(),
            None => vec![None; self.rows.len()],
        }
    }

    /// Sample std dev across the columns of `row`, ignoring `NoData`
    pub fn row_std_dev(&self, row: &str) -> Option<f64> {
        let i = self.rows.iter().position(|r| r == row)?;
        let values: Vec<f64> = self.cells[i].iter().filter_map(Cell::value).collect();
        sample_std_dev(&values)
    }

    /// Smallest and largest defined cell
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.cells
            .iter()
            .flatten()
            .filter_map(Cell::value)
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::CostRecord;

    fn sample() -> CostTable {
        CostTable::new(vec![
            CostRecord::new("Arbitrum", "Token", "transfer", 0.02),
            CostRecord::new("Arbitrum", "Token", "transfer", 0.04),
            CostRecord::new("Polygon", "Token", "transfer", 0.01),
            CostRecord::new("Arbitrum", "Token", "mint", 0.10),
        ])
    }

    #[test]
    fn test_pivot_cells() {
        let pivot = Pivot::build(&sample(), Dimension::Function, Dimension::Network, Metric::Mean);

        assert_eq!(pivot.rows(), ["transfer", "mint"]);
        assert_eq!(pivot.columns(), ["Arbitrum", "Polygon"]);
        assert_eq!(pivot.get("transfer", "Arbitrum"), Some(Cell::Value(0.03)));
        assert_eq!(pivot.get("mint", "Polygon"), Some(Cell::NoData));
        assert_eq!(pivot.get("burn", "Polygon"), None);
    }

    #[test]
    fn test_no_data_differs_from_zero() {
        let table = CostTable::new(vec![
            CostRecord::new("A", "T", "free", 0.0),
            CostRecord::new("B", "T", "paid", 1.0),
        ]);
        let pivot = Pivot::build(&table, Dimension::Function, Dimension::Network, Metric::Sum);

        assert_eq!(pivot.get("free", "A"), Some(Cell::Value(0.0)));
        assert_eq!(pivot.get("free", "B"), Some(Cell::NoData));
        assert_eq!(Cell::NoData.to_string(), "no data");
    }

    #[test]
    fn test_row_std_dev_ignores_no_data() {
        let pivot = Pivot::build(&sample(), Dimension::Function, Dimension::Network, Metric::Mean);

        let transfer = pivot.row_std_dev("transfer").unwrap();
        assert!((transfer - 0.0141421356).abs() < 1e-9);
        assert_eq!(pivot.row_std_dev("mint"), None);
    }

    #[test]
    fn test_column_values() {
        let pivot = Pivot::build(&sample(), Dimension::Function, Dimension::Network, Metric::Mean);

        assert_eq!(pivot.column_values("Polygon"), vec![Some(0.01), None]);
        assert_eq!(pivot.column_values("Solana"), vec![None, None]);
    }

    #[test]
    fn test_value_range() {
        let pivot = Pivot::build(&sample(), Dimension::Function, Dimension::Network, Metric::Mean);
        assert_eq!(pivot.value_range(), Some((0.01, 0.10)));

        let empty = Pivot::build(&CostTable::default(), Dimension::Function, Dimension::Network, Metric::Mean);
        assert!(empty.is_empty());
        assert_eq!(empty.value_range(), None);
    }
}
