//! Group averages against the baseline average.

use super::discount::calculate_discount;
use super::schema::{BaselineAverages, GroupDiscount};
use crate::aggregator::{group_by, rank_groups, Metric, Summary};
use crate::parser::schema::{CostTable, Dimension};
use crate::utils::error::CompareError;

/// Average cost per group compared with the baseline's average over all its rows
///
/// # Errors
/// * `CompareError::BaselineNotFound` - the baseline group has no rows
pub fn summarize_against_baseline(
    table: &CostTable,
    group_dimension: Dimension,
    baseline: &str,
) -> Result<BaselineAverages, CompareError> {
    let baseline_summary = Summary::from_values(&table.matching(group_dimension, baseline).costs())
        .map_err(|_| CompareError::BaselineNotFound(baseline.to_string()))?;

    let ranking = rank_groups(&group_by(table, &[group_dimension]), Metric::Mean);

    let entries = ranking
        .entries
        .into_iter()
        .map(|ranked| {
            let group = ranked.key.first().to_string();
            let is_baseline = group == baseline;
            let (difference_usd, discount_pct) =
                calculate_discount(baseline_summary.mean, ranked.value);

            GroupDiscount {
                group,
                avg_cost_usd: ranked.value,
                difference_usd,
                discount_pct,
                is_baseline,
            }
        })
        .collect();

    Ok(BaselineAverages {
        baseline: baseline.to_string(),
        baseline_total_usd: baseline_summary.sum,
        baseline_avg_usd: baseline_summary.mean,
        entries,
    })
}
