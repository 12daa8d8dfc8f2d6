//! Cross-network variability of function costs.

use super::pivot::Pivot;
use super::stats::Metric;
use crate::parser::schema::{CostTable, Dimension};
use std::cmp::Ordering;

/// Spread of one function's mean cost across networks
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionVariability {
    pub function: String,

    /// Sample std dev over the networks that have the function; None below two
    pub std_dev: Option<f64>,

    /// Networks contributing a mean cost
    pub networks: usize,
}

/// Functions of one contract, most variable first
#[derive(Debug, Clone, PartialEq)]
pub struct ContractVariability {
    pub contract: String,
    pub functions: Vec<FunctionVariability>,
}

/// Per contract, the std dev across networks of each function's mean cost
///
/// **Public** - backs the variability report
///
/// Functions are ordered by std dev descending; functions seen on fewer than
/// two networks have no defined spread and are listed last, in
/// first-appearance order.
pub fn variability_by_contract(table: &CostTable) -> Vec<ContractVariability> {
    table
        .unique(Dimension::Contract)
        .into_iter()
        .map(|contract| {
            let rows = table.matching(Dimension::Contract, &contract);
            let pivot = Pivot::build(&rows, Dimension::Function, Dimension::Network, Metric::Mean);

            let mut functions: Vec<FunctionVariability> = pivot
                .rows()
                .iter()
                .enumerate()
                .map(|(i, function)| FunctionVariability {
                    function: function.clone(),
                    std_dev: pivot.row_std_dev(function),
                    networks: pivot.row_cells(i).iter().filter(|c| !c.is_no_data()).count(),
                })
                .collect();

            functions.sort_by(|a, b| match (a.std_dev, b.std_dev) {
                (Some(x), Some(y)) => y.total_cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });

            ContractVariability { contract, functions }
        })
        .collect()
}
