//! Deployment command implementation.
//!
//! The deployment command:
//! 1. Loads deployment estimates (or the built-in demo dataset)
//! 2. Compares every network against the baseline network
//! 3. Renders per-contract bar and line charts plus a summary chart,
//!    all over the non-baseline networks
//! 4. Writes chart files and prints the summary

use super::models::DeploymentArgs;
use super::utils::{produce_charts, ChartJob};
use crate::aggregator::{
    group_by, least_expensive_per, most_expensive_per, rank_groups, Metric, Ranking,
};
use crate::chart::{series_color, BarPanel, BoxPanel, LinePanel, Panel, Scale};
use crate::compare::{compare_to_baseline, summarize_against_baseline, ComparisonAxes};
use crate::parser::demo::demo_deployment_table;
use crate::parser::{load_cost_table, CostTable, Dimension};
use crate::report::{render_deployment_report, DeploymentReport};
use crate::utils::config::ChartFiles;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::time::Instant;

/// Execute the deployment command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Deployment command arguments
///
/// # Returns
/// The report that was printed, with the chart files written
///
/// # Errors
/// * Input file missing or without the mapped columns (unless `demo`)
/// * Chart file write errors
///
/// # Example
/// ```ignore
/// let report = execute_deployment(DeploymentArgs {
///     demo: true,
///     ..Default::default()
/// })?;
/// assert_eq!(report.baseline, "Ethereum");
/// ```
pub fn execute_deployment(args: DeploymentArgs) -> Result<DeploymentReport> {
    let start_time = Instant::now();

    info!("Step 1/5: Loading deployment estimates...");
    let (table, source) = if args.demo {
        info!("Using built-in demo dataset");
        (
            demo_deployment_table(&args.deployment_sentinel),
            "built-in demo dataset".to_string(),
        )
    } else {
        let table = load_cost_table(&args.input_path, &args.columns, &args.deployment_sentinel)
            .with_context(|| format!("Failed to load {}", args.input_path.display()))?;
        (table, args.input_path.display().to_string())
    };

    info!(
        "Step 2/5: Comparing networks against baseline '{}'...",
        args.baseline_network
    );
    let comparison = compare_to_baseline(&table, ComparisonAxes::default(), &args.baseline_network);
    let averages = match summarize_against_baseline(&table, Dimension::Network, &args.baseline_network) {
        Ok(averages) => Some(averages),
        Err(e) => {
            warn!("{}", e);
            None
        }
    };
    debug!(
        "{} comparison rows, {} excluded",
        comparison.rows.len(),
        comparison.excluded_missing_baseline
    );

    info!("Step 3/5: Aggregating non-baseline networks...");
    let others = table.excluding(Dimension::Network, &args.baseline_network);

    info!("Step 4/5: Rendering charts...");
    let jobs = deployment_charts(&others, &args.baseline_network, &args.charts.files);

    info!("Step 5/5: Writing output files...");
    let charts = produce_charts(jobs, &args.output_dir, &args.charts)?;

    let report = DeploymentReport {
        generated_at: Utc::now().to_rfc3339(),
        source,
        clean_stats: table.clean_stats(),
        baseline: args.baseline_network.clone(),
        averages,
        comparison,
        cheapest_per_contract: least_expensive_per(&others, Dimension::Contract),
        most_expensive_per_contract: most_expensive_per(&others, Dimension::Contract),
        charts,
    };

    if args.print_summary {
        println!("{}", render_deployment_report(&report));
    }

    info!(
        "Deployment report completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Charts over the rows of every network except the baseline
fn deployment_charts(others: &CostTable, baseline: &str, files: &ChartFiles) -> Vec<ChartJob> {
    let networks = others.unique(Dimension::Network);
    let colors: HashMap<&str, String> = networks
        .iter()
        .enumerate()
        .map(|(i, network)| (network.as_str(), series_color(i, networks.len())))
        .collect();
    let color_of = |ranking: &Ranking| -> Vec<String> {
        ranking
            .entries
            .iter()
            .map(|e| colors.get(e.key.first()).cloned().unwrap_or_default())
            .collect()
    };

    let mut bars = Vec::new();
    let mut lines = Vec::new();

    for contract in others.unique(Dimension::Contract) {
        // mean per network, cheapest first
        let ranking = rank_groups(
            &group_by(&others.matching(Dimension::Contract, &contract), &[Dimension::Network]),
            Metric::Mean,
        );
        let labels: Vec<String> = ranking.entries.iter().map(|e| e.key.first().to_string()).collect();
        let values: Vec<Option<f64>> = ranking.entries.iter().map(|e| Some(e.value)).collect();

        bars.push(Panel::Bar(
            BarPanel::new(&contract, labels.clone())
                .with_series("deployment", values.clone())
                .with_category_colors(color_of(&ranking))
                .with_scale(Scale::Log)
                .with_value_label("Deployment Cost (USD)")
                .annotated(),
        ));
        lines.push(Panel::Line(
            LinePanel::new(&contract, labels)
                .with_series("deployment", values)
                .with_point_colors(color_of(&ranking))
                .with_scale(Scale::Log)
                .with_value_label("Deployment Cost (USD)")
                .annotated(),
        ));
    }

    let network_ranking = rank_groups(&group_by(others, &[Dimension::Network]), Metric::Mean);
    let averages = BarPanel::new(
        "Average Deployment Cost by Network (Across All Contracts)",
        network_ranking
            .entries
            .iter()
            .map(|e| e.key.first().to_string())
            .collect(),
    )
    .with_series(
        "average",
        network_ranking.entries.iter().map(|e| Some(e.value)).collect(),
    )
    .with_category_colors(color_of(&network_ranking))
    .with_value_label("Average Deployment Cost (USD)")
    .annotated();

    let distribution = others
        .unique(Dimension::Contract)
        .iter()
        .fold(
            BoxPanel::new("Deployment Cost Distribution by Contract (Across All Networks)"),
            |panel, contract| {
                panel.with_group(contract, others.matching(Dimension::Contract, contract).costs())
            },
        )
        .with_value_label("Deployment Cost (USD)");

    vec![
        ChartJob::new(
            &files.deployment_bars,
            format!("Deployment Costs by Contract (excluding {})", baseline),
            bars,
        ),
        ChartJob::new(
            &files.deployment_lines,
            format!("Deployment Cost Trends by Contract (excluding {})", baseline),
            lines,
        ),
        ChartJob::new(
            &files.deployment_summary,
            format!("Overall Deployment Cost Analysis (excluding {})", baseline),
            vec![averages.into(), distribution.into()],
        ),
    ]
}
