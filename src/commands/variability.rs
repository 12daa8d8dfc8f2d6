//! Variability command implementation.
//!
//! Shows how much each function's cost moves between networks: one line
//! chart per contract (log scale) and one standard deviation bar chart per
//! contract, most variable function first.

use super::models::VariabilityArgs;
use super::utils::{produce_charts, ChartJob};
use crate::aggregator::{variability_by_contract, ContractVariability, Metric, Pivot};
use crate::chart::{BarPanel, LinePanel, Panel, Scale};
use crate::parser::{load_cost_table, CostTable, Dimension};
use crate::report::{render_variability_report, VariabilityReport};
use crate::utils::config::ChartFiles;
use anyhow::{Context, Result};
use chrono::Utc;
use log::info;
use std::time::Instant;

/// Execute the variability command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input file missing or without the mapped columns
/// * Chart file write errors
pub fn execute_variability(args: VariabilityArgs) -> Result<VariabilityReport> {
    let start_time = Instant::now();

    info!("Step 1/4: Loading function costs...");
    let table = load_cost_table(&args.input_path, &args.columns, &args.deployment_sentinel)
        .with_context(|| format!("Failed to load {}", args.input_path.display()))?;

    info!("Step 2/4: Measuring cross-network variability...");
    let contracts = variability_by_contract(&table);

    info!("Step 3/4: Rendering charts...");
    let jobs = variability_charts(&table, &contracts, &args.charts.files);

    info!("Step 4/4: Writing output files...");
    let charts = produce_charts(jobs, &args.output_dir, &args.charts)?;

    let report = VariabilityReport {
        generated_at: Utc::now().to_rfc3339(),
        clean_stats: table.clean_stats(),
        contracts,
        charts,
    };

    if args.print_summary {
        println!("{}", render_variability_report(&report));
    }

    info!(
        "Variability report completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

fn variability_charts(
    table: &CostTable,
    contracts: &[ContractVariability],
    files: &ChartFiles,
) -> Vec<ChartJob> {
    let lines: Vec<Panel> = table
        .unique(Dimension::Contract)
        .into_iter()
        .map(|contract| {
            let rows = table.matching(Dimension::Contract, &contract);
            let pivot = Pivot::build(&rows, Dimension::Function, Dimension::Network, Metric::Mean);

            let panel = pivot
                .columns()
                .iter()
                .fold(LinePanel::new(&contract, pivot.rows().to_vec()), |panel, network| {
                    panel.with_series(network, pivot.column_values(network))
                })
                .with_scale(Scale::Log)
                .with_value_label("Average Cost (USD)");
            Panel::Line(panel)
        })
        .collect();

    let spreads: Vec<Panel> = contracts
        .iter()
        .map(|contract| {
            let ranked: Vec<_> = contract
                .functions
                .iter()
                .filter(|f| f.std_dev.is_some())
                .collect();

            let panel = BarPanel::new(
                &contract.contract,
                ranked.iter().map(|f| f.function.clone()).collect(),
            )
            .with_series("std dev", ranked.iter().map(|f| f.std_dev).collect())
            .with_value_label("Standard Deviation (USD)");
            Panel::Bar(panel)
        })
        .collect();

    vec![
        ChartJob::new(
            &files.line_chart,
            "Function Costs Across Networks by Contract",
            lines,
        ),
        ChartJob::new(
            &files.variability,
            "Function Cost Variability Across Networks (Standard Deviation)",
            spreads,
        ),
    ]
}
