//! Execution command implementation.
//!
//! Splits a gas reporter export into recurring execution rows and one-time
//! deployment rows, and stacks their summed costs per network.

use super::models::ExecutionArgs;
use super::utils::{produce_charts, ChartJob};
use crate::aggregator::{Metric, Pivot, Summary};
use crate::chart::{BarPanel, Panel, Scale};
use crate::parser::{load_cost_table, CostTable, Dimension};
use crate::report::{render_execution_report, ExecutionReport, NetworkTotals};
use crate::utils::config::ChartFiles;
use anyhow::{Context, Result};
use chrono::Utc;
use log::info;
use std::time::Instant;

/// Execute the execution command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input file missing or without the mapped columns
/// * Chart file write errors
pub fn execute_execution(args: ExecutionArgs) -> Result<ExecutionReport> {
    let start_time = Instant::now();

    info!("Step 1/4: Loading gas reporter export...");
    let table = load_cost_table(&args.input_path, &args.columns, &args.deployment_sentinel)
        .with_context(|| format!("Failed to load {}", args.input_path.display()))?;

    info!("Step 2/4: Splitting execution and deployment rows...");
    let executions = table.executions(&args.deployment_sentinel);
    let deployments = table.deployments(&args.deployment_sentinel);
    info!(
        "{} execution rows, {} deployment rows",
        executions.len(),
        deployments.len()
    );

    let totals = network_totals(&table, &executions, &deployments);

    info!("Step 3/4: Rendering charts...");
    let jobs = execution_charts(&executions, &deployments, &args.charts.files);

    info!("Step 4/4: Writing output files...");
    let charts = produce_charts(jobs, &args.output_dir, &args.charts)?;

    let report = ExecutionReport {
        generated_at: Utc::now().to_rfc3339(),
        clean_stats: table.clean_stats(),
        totals,
        charts,
    };

    if args.print_summary {
        println!("{}", render_execution_report(&report));
    }

    info!(
        "Execution report completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Summed execution and deployment cost of every network in `table`
fn network_totals(
    table: &CostTable,
    executions: &CostTable,
    deployments: &CostTable,
) -> Vec<NetworkTotals> {
    let total = |rows: &CostTable, network: &str| {
        Summary::from_values(&rows.matching(Dimension::Network, network).costs())
            .ok()
            .map(|s| s.sum)
    };

    table
        .unique(Dimension::Network)
        .into_iter()
        .map(|network| NetworkTotals {
            execution_usd: total(executions, &network),
            deployment_usd: total(deployments, &network),
            network,
        })
        .collect()
}

fn stacked_panel(pivot: &Pivot, value_label: &str) -> Panel {
    let panel = pivot
        .columns()
        .iter()
        .fold(BarPanel::new("", pivot.rows().to_vec()), |panel, network| {
            panel.with_series(network, pivot.column_values(network))
        })
        .stacked()
        .with_scale(Scale::Log)
        .with_value_label(value_label);
    Panel::Bar(panel)
}

fn execution_charts(executions: &CostTable, deployments: &CostTable, files: &ChartFiles) -> Vec<ChartJob> {
    let by_function = Pivot::build(executions, Dimension::Function, Dimension::Network, Metric::Sum);
    let by_contract = Pivot::build(deployments, Dimension::Contract, Dimension::Network, Metric::Sum);

    vec![
        ChartJob::new(
            &files.execution_stacked,
            "Total Execution Cost per Function (USD)",
            vec![stacked_panel(&by_function, "Total Cost (USD)")],
        ),
        ChartJob::new(
            &files.deployment_stacked,
            "Deployment Cost per Contract (USD)",
            vec![stacked_panel(&by_contract, "Deployment Cost (USD)")],
        ),
    ]
}
