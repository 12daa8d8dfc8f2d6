//! Row-level comparison against a baseline group.

use super::discount::calculate_discount;
use super::schema::{BaselineComparison, ComparisonAxes, ComparisonRow};
use crate::aggregator::group_by;
use crate::parser::schema::CostTable;
use log::{debug, warn};
use std::collections::HashMap;

/// Compare every non-baseline group with `baseline`
///
/// **Public** - main entry point for baseline comparison
///
/// Costs on both sides are the mean per (group, key). Pairs whose key has
/// no baseline entry are excluded and counted, never compared against 0.
///
/// # Example
/// ```ignore
/// let comparison = compare_to_baseline(&table, ComparisonAxes::default(), "Ethereum");
/// for row in &comparison.rows {
///     println!("{} on {}: {}", row.key, row.group, row.discount_pct);
/// }
/// ```
pub fn compare_to_baseline(
    table: &CostTable,
    axes: ComparisonAxes,
    baseline: &str,
) -> BaselineComparison {
    let baseline_costs = baseline_costs(table, axes, baseline);

    let mut rows = Vec::new();
    let mut excluded = 0;

    for group in table.excluding(axes.group, baseline).unique(axes.group) {
        let (group_rows, group_excluded) = compare_against(table, axes, &baseline_costs, &group);
        rows.extend(group_rows);
        excluded += group_excluded;
    }

    finish(baseline, rows, excluded)
}

/// Compare a single group (which may be the baseline itself) with `baseline`
pub fn compare_group(
    table: &CostTable,
    axes: ComparisonAxes,
    baseline: &str,
    group: &str,
) -> BaselineComparison {
    let baseline_costs = baseline_costs(table, axes, baseline);
    let (rows, excluded) = compare_against(table, axes, &baseline_costs, group);
    finish(baseline, rows, excluded)
}

/// Mean baseline cost per key
fn baseline_costs(table: &CostTable, axes: ComparisonAxes, baseline: &str) -> HashMap<String, f64> {
    let costs: HashMap<String, f64> = group_by(&table.matching(axes.group, baseline), &[axes.key])
        .into_iter()
        .map(|g| (g.key.first().to_string(), g.summary.mean))
        .collect();

    if costs.is_empty() {
        warn!("Baseline '{}' has no rows; every comparison row will be excluded", baseline);
    } else {
        debug!("Baseline '{}' covers {} {} values", baseline, costs.len(), axes.key);
    }

    costs
}

fn compare_against(
    table: &CostTable,
    axes: ComparisonAxes,
    baseline_costs: &HashMap<String, f64>,
    group: &str,
) -> (Vec<ComparisonRow>, usize) {
    let mut rows = Vec::new();
    let mut excluded = 0;

    for stats in group_by(&table.matching(axes.group, group), &[axes.key]) {
        let key = stats.key.first();

        let Some(&baseline_cost) = baseline_costs.get(key) else {
            debug!("No baseline entry for {} '{}' ({})", axes.key, key, group);
            excluded += 1;
            continue;
        };

        let (discount_usd, discount_pct) = calculate_discount(baseline_cost, stats.summary.mean);

        rows.push(ComparisonRow {
            key: key.to_string(),
            group: group.to_string(),
            cost_usd: stats.summary.mean,
            baseline_cost_usd: baseline_cost,
            discount_usd,
            discount_pct,
        });
    }

    (rows, excluded)
}

fn finish(baseline: &str, mut rows: Vec<ComparisonRow>, excluded: usize) -> BaselineComparison {
    rows.sort_by(|a, b| a.key.cmp(&b.key).then(a.cost_usd.total_cmp(&b.cost_usd)));

    if excluded > 0 {
        warn!("{} rows excluded: no matching '{}' baseline entry", excluded, baseline);
    }

    BaselineComparison {
        baseline: baseline.to_string(),
        rows,
        excluded_missing_baseline: excluded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::schema::Discount;
    use crate::parser::schema::CostRecord;

    #[test]
    fn test_compare_two_networks() {
        let table = CostTable::new(vec![
            CostRecord::new("netA", "cX", "deployment", 10.0),
            CostRecord::new("netB", "cX", "deployment", 5.0),
        ]);

        let comparison = compare_to_baseline(&table, ComparisonAxes::default(), "netA");

        assert_eq!(comparison.rows.len(), 1);
        assert_eq!(comparison.rows[0].group, "netB");
        assert_eq!(comparison.rows[0].discount_usd, 5.0);
        assert_eq!(comparison.rows[0].discount_pct, Discount::Percent(50.0));
        assert_eq!(comparison.excluded_missing_baseline, 0);
    }

    #[test]
    fn test_missing_baseline_key_is_excluded() {
        let table = CostTable::new(vec![
            CostRecord::new("netA", "cX", "deployment", 10.0),
            CostRecord::new("netB", "cX", "deployment", 5.0),
            CostRecord::new("netB", "cZ", "deployment", 7.0),
            CostRecord::new("netC", "cZ", "deployment", 1.0),
        ]);

        let comparison = compare_to_baseline(&table, ComparisonAxes::default(), "netA");

        assert_eq!(comparison.rows.len(), 1);
        assert_eq!(comparison.excluded_missing_baseline, 2);
    }

    #[test]
    fn test_self_comparison_is_zero() {
        let table = CostTable::new(vec![
            CostRecord::new("netA", "cX", "deployment", 10.0),
            CostRecord::new("netA", "cY", "deployment", 3.0),
        ]);

        let comparison = compare_group(&table, ComparisonAxes::default(), "netA", "netA");

        assert_eq!(comparison.rows.len(), 2);
        for row in &comparison.rows {
            assert_eq!(row.discount_usd, 0.0);
            assert_eq!(row.discount_pct, Discount::Percent(0.0));
        }
    }

    #[test]
    fn test_rows_sorted_by_key_then_cost() {
        let table = CostTable::new(vec![
            CostRecord::new("base", "B", "deployment", 10.0),
            CostRecord::new("base", "A", "deployment", 10.0),
            CostRecord::new("x", "B", "deployment", 4.0),
            CostRecord::new("y", "B", "deployment", 2.0),
            CostRecord::new("x", "A", "deployment", 1.0),
        ]);

        let comparison = compare_to_baseline(&table, ComparisonAxes::default(), "base");
        let order: Vec<(&str, &str)> = comparison
            .rows
            .iter()
            .map(|r| (r.key.as_str(), r.group.as_str()))
            .collect();

        assert_eq!(order, vec![("A", "x"), ("B", "y"), ("B", "x")]);
    }

    #[test]
    fn test_zero_baseline_cost() {
        let table = CostTable::new(vec![
            CostRecord::new("netA", "cX", "deployment", 0.0),
            CostRecord::new("netB", "cX", "deployment", 2.0),
        ]);

        let comparison = compare_to_baseline(&table, ComparisonAxes::default(), "netA");

        assert_eq!(comparison.rows[0].discount_usd, -2.0);
        assert_eq!(comparison.rows[0].discount_pct, Discount::Undefined);
    }
}
