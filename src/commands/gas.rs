//! Gas command implementation.
//!
//! The gas command:
//! 1. Loads per-function average costs
//! 2. Ranks networks and finds the extreme operations
//! 3. Renders the comparison, heatmap and distribution charts
//! 4. Writes chart files and prints the summary

use super::models::GasArgs;
use super::utils::{produce_charts, ChartJob};
use crate::aggregator::{
    group_by, least_expensive, most_expensive, most_expensive_per, rank_groups, Metric, Pivot,
};
use crate::chart::{BarPanel, BoxPanel, HeatmapPanel, Panel, Scale};
use crate::parser::{load_cost_table, CostTable, Dimension};
use crate::report::{render_gas_report, GasReport};
use crate::utils::config::ChartFiles;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use std::time::Instant;

/// Execute the gas command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Gas command arguments
///
/// # Returns
/// The report that was printed, with the chart files written
///
/// # Errors
/// * Input file missing or without the mapped columns
/// * Chart file write errors
///
/// # Example
/// ```ignore
/// let report = execute_gas(GasArgs {
///     input_path: PathBuf::from("contract.csv"),
///     ..Default::default()
/// })?;
/// println!("{} charts", report.charts.written.len());
/// ```
pub fn execute_gas(args: GasArgs) -> Result<GasReport> {
    let start_time = Instant::now();

    info!("Step 1/4: Loading function costs...");
    let table = load_cost_table(&args.input_path, &args.columns, &args.deployment_sentinel)
        .with_context(|| format!("Failed to load {}", args.input_path.display()))?;

    info!("Step 2/4: Aggregating costs per network...");
    let network_ranking = rank_groups(&group_by(&table, &[Dimension::Network]), Metric::Mean);
    debug!(
        "Ranked {} networks ({} unranked)",
        network_ranking.entries.len(),
        network_ranking.unranked.len()
    );

    info!("Step 3/4: Rendering charts...");
    let jobs = gas_charts(&table, &args.charts.files);

    info!("Step 4/4: Writing output files...");
    let charts = produce_charts(jobs, &args.output_dir, &args.charts)?;

    let report = GasReport {
        generated_at: Utc::now().to_rfc3339(),
        clean_stats: table.clean_stats(),
        network_ranking,
        most_expensive: most_expensive(&table).cloned(),
        least_expensive: least_expensive(&table).cloned(),
        most_expensive_per_network: most_expensive_per(&table, Dimension::Network),
        charts,
    };

    if args.print_summary {
        println!("{}", render_gas_report(&report));
    }

    info!(
        "Gas report completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

fn gas_charts(table: &CostTable, files: &ChartFiles) -> Vec<ChartJob> {
    let networks = table.unique(Dimension::Network);

    let comparison: Vec<Panel> = table
        .unique(Dimension::Contract)
        .into_iter()
        .map(|contract| {
            let rows = table.matching(Dimension::Contract, &contract);
            let pivot = Pivot::build(&rows, Dimension::Function, Dimension::Network, Metric::Mean);

            let panel = networks
                .iter()
                .fold(BarPanel::new(&contract, pivot.rows().to_vec()), |panel, network| {
                    panel.with_series(network, pivot.column_values(network))
                })
                .with_value_label("Average Cost (USD)");
            Panel::Bar(panel)
        })
        .collect();

    let heatmap = HeatmapPanel::new(
        "",
        Pivot::build(table, Dimension::Function, Dimension::Network, Metric::Mean),
    );

    let distribution = networks
        .iter()
        .fold(BoxPanel::new(""), |panel, network| {
            panel.with_group(network, table.matching(Dimension::Network, network).costs())
        })
        .with_scale(Scale::Log)
        .with_value_label("Average Cost (USD)");

    vec![
        ChartJob::new(
            &files.merged_comparison,
            "Average Transaction Cost per Function by Contract",
            comparison,
        ),
        ChartJob::new(
            &files.heatmap,
            "Heatmap of Average Transaction Costs (USD)",
            vec![heatmap.into()],
        ),
        ChartJob::new(
            &files.boxplot,
            "Distribution of Transaction Costs by Network",
            vec![distribution.into()],
        ),
    ]
}
