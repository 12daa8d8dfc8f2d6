use gas_cost_report::compare::{
    compare_group, compare_to_baseline, summarize_against_baseline, ComparisonAxes, Discount,
};
use gas_cost_report::parser::demo::demo_deployment_table;
use gas_cost_report::parser::{CostRecord, CostTable, Dimension};
use gas_cost_report::utils::error::CompareError;
use pretty_assertions::assert_eq;

fn deployments() -> CostTable {
    CostTable::new(vec![
        CostRecord::new("Ethereum", "Alpha", "deployment", 10.0),
        CostRecord::new("Ethereum", "Beta", "deployment", 0.0),
        CostRecord::new("Polygon", "Alpha", "deployment", 5.0),
        CostRecord::new("Polygon", "Beta", "deployment", 1.0),
        CostRecord::new("Polygon", "Gamma", "deployment", 2.0),
    ])
}

#[test]
fn test_rows_against_baseline() {
    let comparison = compare_to_baseline(&deployments(), ComparisonAxes::default(), "Ethereum");

    assert_eq!(comparison.baseline, "Ethereum");
    assert_eq!(comparison.rows.len(), 2);

    let alpha = &comparison.rows[0];
    assert_eq!(alpha.key, "Alpha");
    assert_eq!(alpha.group, "Polygon");
    assert_eq!(alpha.baseline_cost_usd, 10.0);
    assert_eq!(alpha.discount_usd, 5.0);
    assert_eq!(alpha.discount_pct, Discount::Percent(50.0));
}

#[test]
fn test_zero_baseline_cost_is_undefined() {
    let comparison = compare_to_baseline(&deployments(), ComparisonAxes::default(), "Ethereum");

    let beta = &comparison.rows[1];
    assert_eq!(beta.key, "Beta");
    assert_eq!(beta.discount_usd, -1.0);
    assert_eq!(beta.discount_pct, Discount::Undefined);
    assert_eq!(beta.discount_pct.to_string(), "undefined");
}

#[test]
fn test_keys_without_baseline_are_excluded() {
    let comparison = compare_to_baseline(&deployments(), ComparisonAxes::default(), "Ethereum");

    assert!(comparison.rows.iter().all(|r| r.key != "Gamma"));
    assert_eq!(comparison.excluded_missing_baseline, 1);
}

#[test]
fn test_unknown_baseline_excludes_everything() {
    let comparison = compare_to_baseline(&deployments(), ComparisonAxes::default(), "Optimism");

    assert!(comparison.rows.is_empty());
    assert_eq!(comparison.excluded_missing_baseline, 5);
}

#[test]
fn test_baseline_against_itself() {
    let comparison = compare_group(&deployments(), ComparisonAxes::default(), "Ethereum", "Ethereum");

    assert_eq!(comparison.rows.len(), 2);
    assert_eq!(comparison.rows[0].discount_pct, Discount::Percent(0.0));
}

#[test]
fn test_demo_network_averages() {
    let averages =
        summarize_against_baseline(&demo_deployment_table("deployment"), Dimension::Network, "Ethereum")
            .unwrap();

    assert_eq!(averages.baseline_total_usd, 751.75);

    let groups: Vec<(&str, bool)> = averages
        .entries
        .iter()
        .map(|e| (e.group.as_str(), e.is_baseline))
        .collect();
    assert_eq!(
        groups,
        vec![("Polygon", false), ("Arbitrum", false), ("Ethereum", true)]
    );

    let polygon = &averages.entries[0];
    assert!(polygon.difference_usd > 0.0);
    assert!(polygon.discount_pct.percent().unwrap() > 99.0);
    assert_eq!(averages.entries[2].discount_pct, Discount::Percent(0.0));
}

#[test]
fn test_missing_baseline_average() {
    let result = summarize_against_baseline(&deployments(), Dimension::Network, "Optimism");

    assert!(matches!(result, Err(CompareError::BaselineNotFound(b)) if b == "Optimism"));
}
