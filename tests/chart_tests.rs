use gas_cost_report::aggregator::{Metric, Pivot};
use gas_cost_report::chart::{
    generate_chart, BarPanel, BoxPanel, BoxStats, ChartConfig, HeatmapPanel, LinePanel, Panel,
    Scale,
};
use gas_cost_report::parser::{CostRecord, CostTable, Dimension};
use gas_cost_report::utils::error::ChartError;

fn categories(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_grouped_bar_chart() {
    let panel = BarPanel::new("Token", categories(&["transfer", "approve"]))
        .with_series("Arbitrum", vec![Some(0.02), Some(0.03)])
        .with_series("Polygon", vec![Some(0.01), None]);

    let svg = generate_chart(&[Panel::from(panel)], &ChartConfig::new("Costs")).unwrap();

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("Costs"));
    assert!(svg.contains("Arbitrum / transfer"));
    assert!(svg.contains("Polygon / transfer"));
    assert!(!svg.contains("Polygon / approve"));
}

#[test]
fn test_log_scale_axis_is_labelled() {
    let panel = LinePanel::new("Token", categories(&["transfer", "approve"]))
        .with_series("Ethereum", vec![Some(2.5), Some(4.0)])
        .with_scale(Scale::Log)
        .with_value_label("Average Cost (USD)");

    let svg = generate_chart(&[Panel::from(panel)], &ChartConfig::new("Trends")).unwrap();

    assert!(svg.contains("Average Cost (USD) (log scale)"));
}

#[test]
fn test_heatmap_shows_missing_cells() {
    let table = CostTable::new(vec![
        CostRecord::new("Arbitrum", "Token", "transfer", 0.02),
        CostRecord::new("Polygon", "Token", "approve", 0.01),
    ]);
    let pivot = Pivot::build(&table, Dimension::Function, Dimension::Network, Metric::Mean);

    let svg = generate_chart(
        &[Panel::from(HeatmapPanel::new("Heatmap", pivot))],
        &ChartConfig::new("Heatmap"),
    )
    .unwrap();

    assert!(svg.contains("transfer / Polygon: no data"));
    assert!(svg.contains("approve / Arbitrum: no data"));
}

#[test]
fn test_empty_panels_fail_with_empty_data() {
    let panels: Vec<Panel> = vec![
        BarPanel::new("Token", Vec::new()).into(),
        BoxPanel::new("Distribution").into(),
    ];

    let result = generate_chart(&panels, &ChartConfig::new("Nothing"));

    assert!(matches!(result, Err(ChartError::EmptyData(title)) if title == "Nothing"));
}

#[test]
fn test_grid_with_one_empty_panel() {
    let panels: Vec<Panel> = vec![
        BarPanel::new("Token", categories(&["transfer"]))
            .with_series("Arbitrum", vec![Some(0.02)])
            .into(),
        BarPanel::new("Vault", categories(&["deposit"]))
            .with_series("Arbitrum", vec![None])
            .into(),
    ];

    let svg = generate_chart(&panels, &ChartConfig::new("Grid").with_size(800, 600)).unwrap();

    assert!(svg.contains(">no data</text>"));
    assert!(svg.contains("Vault"));
}

#[test]
fn test_box_stats_quartiles() {
    let stats = BoxStats::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

    assert_eq!(stats.q1, 2.0);
    assert_eq!(stats.median, 3.0);
    assert_eq!(stats.q3, 4.0);
    assert!(stats.outliers.is_empty());
    assert!(BoxStats::from_values(&[]).is_none());
}
