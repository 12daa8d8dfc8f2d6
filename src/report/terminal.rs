//! Terminal rendering of report results.
//!
//! Every renderer returns a `String`; the commands decide whether to print
//! it. Aggregates with no underlying rows print as "no data", never as 0.

use super::schema::{
    ChartOutcome, DeploymentReport, ExecutionReport, GasReport, NetworkTotals, VariabilityReport,
};
use crate::aggregator::Ranking;
use crate::chart::usd_label;
use crate::compare::{BaselineAverages, BaselineComparison};
use crate::parser::schema::{CleanStats, CostRecord};
use crate::utils::config::NO_DATA_LABEL;
use colored::*;

const RULE_WIDTH: usize = 80;

/// Render the per-function average cost report
pub fn render_gas_report(report: &GasReport) -> String {
    let mut out = String::new();

    out.push_str(&render_header("GAS COST SUMMARY", &report.generated_at));
    out.push_str(&render_clean_stats(&report.clean_stats));
    out.push_str(&render_ranking("Networks by average cost (cheapest first)", &report.network_ranking));

    out.push_str(&format!("\n{}\n", "Extremes".bold()));
    out.push_str(&format!(
        "  Most expensive operation:  {}\n",
        describe_record(report.most_expensive.as_ref())
    ));
    out.push_str(&format!(
        "  Least expensive operation: {}\n",
        describe_record(report.least_expensive.as_ref())
    ));

    out.push_str(&format!("\n{}\n", "Most expensive operation per network".bold()));
    if report.most_expensive_per_network.is_empty() {
        out.push_str(&format!("  {}\n", NO_DATA_LABEL));
    }
    for extreme in &report.most_expensive_per_network {
        out.push_str(&format!(
            "  {:<20} {} / {} ({})\n",
            extreme.group,
            extreme.record.contract,
            extreme.record.function,
            usd_label(extreme.record.cost_usd)
        ));
    }

    out.push_str(&render_charts(&report.charts));
    out
}

/// Render the cross-network variability report
pub fn render_variability_report(report: &VariabilityReport) -> String {
    let mut out = String::new();

    out.push_str(&render_header("COST VARIABILITY ACROSS NETWORKS", &report.generated_at));
    out.push_str(&render_clean_stats(&report.clean_stats));

    if report.contracts.is_empty() {
        out.push_str(&format!("\n  {}\n", NO_DATA_LABEL));
    }

    for contract in &report.contracts {
        out.push_str(&format!("\n{}\n", contract.contract.bold()));
        for function in &contract.functions {
            let spread = match function.std_dev {
                Some(std_dev) => format!("std dev {}", usd_label(std_dev)),
                None => format!("{} (seen on {} network)", NO_DATA_LABEL, function.networks),
            };
            out.push_str(&format!("  {:<32} {}\n", function.function, spread));
        }
    }

    out.push_str(&render_charts(&report.charts));
    out
}

/// Render the deployment cost report
pub fn render_deployment_report(report: &DeploymentReport) -> String {
    let mut out = String::new();

    out.push_str(&render_header("DEPLOYMENT COST SUMMARY", &report.generated_at));
    out.push_str(&format!("Source:   {}\n", report.source));
    out.push_str(&format!("Baseline: {}\n", report.baseline));
    out.push_str(&render_clean_stats(&report.clean_stats));

    out.push_str(&render_averages(&report.baseline, report.averages.as_ref()));
    out.push_str(&render_comparison_table(&report.comparison));

    out.push_str(&format!(
        "\n{}\n",
        format!("Cheapest / most expensive network per contract (excluding {})", report.baseline).bold()
    ));
    if report.cheapest_per_contract.is_empty() {
        out.push_str(&format!("  {}\n", NO_DATA_LABEL));
    }
    for cheapest in &report.cheapest_per_contract {
        let priciest = report
            .most_expensive_per_contract
            .iter()
            .find(|e| e.group == cheapest.group);
        out.push_str(&format!(
            "  {:<16} cheapest {:<12} {:>12}",
            cheapest.group,
            cheapest.record.network,
            usd_label(cheapest.record.cost_usd)
        ));
        match priciest {
            Some(p) => out.push_str(&format!(
                "   most expensive {:<12} {:>12}\n",
                p.record.network,
                usd_label(p.record.cost_usd)
            )),
            None => out.push('\n'),
        }
    }

    out.push_str(&render_charts(&report.charts));
    out
}

/// Render the execution vs deployment totals report
pub fn render_execution_report(report: &ExecutionReport) -> String {
    let mut out = String::new();

    out.push_str(&render_header("EXECUTION AND DEPLOYMENT TOTALS", &report.generated_at));
    out.push_str(&render_clean_stats(&report.clean_stats));

    out.push_str(&format!(
        "\n  {:<20} {:>18} {:>18}\n",
        "Network".bold(),
        "Execution".bold(),
        "Deployment".bold()
    ));
    if report.totals.is_empty() {
        out.push_str(&format!("  {}\n", NO_DATA_LABEL));
    }
    for NetworkTotals {
        network,
        execution_usd,
        deployment_usd,
    } in &report.totals
    {
        out.push_str(&format!(
            "  {:<20} {:>18} {:>18}\n",
            network,
            usd_or_no_data(*execution_usd),
            usd_or_no_data(*deployment_usd)
        ));
    }

    out.push_str(&render_charts(&report.charts));
    out
}

fn render_header(title: &str, generated_at: &str) -> String {
    let mut out = format!(
        "\n{rule}\n{}\n{rule}\n",
        title.bold(),
        rule = "=".repeat(RULE_WIDTH)
    );
    if !generated_at.is_empty() {
        out.push_str(&format!("Generated: {}\n", generated_at));
    }
    out
}

fn render_clean_stats(stats: &CleanStats) -> String {
    let mut out = format!(
        "Rows: {} read, {} kept",
        stats.total_rows,
        stats.kept()
    );
    if stats.dropped() > 0 {
        let dropped = format!(
            ", {} dropped ({} malformed, {} invalid cost)",
            stats.dropped(),
            stats.malformed_rows,
            stats.invalid_costs
        );
        out.push_str(&dropped.yellow().to_string());
    }
    out.push('\n');
    out
}

fn render_ranking(title: &str, ranking: &Ranking) -> String {
    let mut out = format!("\n{}\n", title.bold());

    if ranking.is_empty() && ranking.unranked.is_empty() {
        out.push_str(&format!("  {}\n", NO_DATA_LABEL));
        return out;
    }

    for entry in &ranking.entries {
        out.push_str(&format!(
            "  {:>3}. {:<24} {:>14}\n",
            entry.rank,
            entry.key.to_string(),
            usd_label(entry.value)
        ));
    }
    for key in &ranking.unranked {
        out.push_str(&format!("   --  {:<24} {:>14}\n", key.to_string(), NO_DATA_LABEL));
    }
    out
}

fn render_averages(baseline: &str, averages: Option<&BaselineAverages>) -> String {
    let mut out = format!("\n{}\n", "Average cost per network".bold());

    let Some(averages) = averages else {
        out.push_str(&format!(
            "  {} (baseline '{}' has no rows)\n",
            NO_DATA_LABEL, baseline
        ));
        return out;
    };

    out.push_str(&format!(
        "  {} total: {}   average: {}\n\n",
        averages.baseline,
        usd_label(averages.baseline_total_usd),
        usd_label(averages.baseline_avg_usd)
    ));

    for entry in &averages.entries {
        let line = format!(
            "  {:<20} avg {:>12}   diff {:>13}   {:>9}",
            entry.group,
            usd_label(entry.avg_cost_usd),
            signed_usd(entry.difference_usd),
            entry.discount_pct.to_string()
        );
        if entry.is_baseline {
            out.push_str(&format!("{} {}\n", line, "(baseline)".dimmed()));
        } else if entry.difference_usd < 0.0 {
            out.push_str(&format!("{}\n", line.red()));
        } else {
            out.push_str(&format!("{}\n", line));
        }
    }
    out
}

fn render_comparison_table(comparison: &BaselineComparison) -> String {
    let mut out = format!(
        "\n{}\n",
        format!("Per-contract comparison against {}", comparison.baseline).bold()
    );

    if comparison.rows.is_empty() {
        out.push_str(&format!("  {}\n", NO_DATA_LABEL));
    } else {
        out.push_str("  ┏━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━┳━━━━━━━━━━━┓\n");
        out.push_str(&format!(
            "  ┃ {:<16} ┃ {:<12} ┃ {:>12} ┃ {:>12} ┃ {:>12} ┃ {:>9} ┃\n",
            "Contract", "Network", "Cost", "Baseline", "Discount", "%"
        ));
        out.push_str("  ┣━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━╋━━━━━━━━━━━┫\n");
        for row in &comparison.rows {
            out.push_str(&format!(
                "  ┃ {:<16} ┃ {:<12} ┃ {:>12} ┃ {:>12} ┃ {:>12} ┃ {:>9} ┃\n",
                truncate(&row.key, 16),
                truncate(&row.group, 12),
                usd_label(row.cost_usd),
                usd_label(row.baseline_cost_usd),
                signed_usd(row.discount_usd),
                row.discount_pct.to_string()
            ));
        }
        out.push_str("  ┗━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━┻━━━━━━━━━━━┛\n");
    }

    if comparison.excluded_missing_baseline > 0 {
        out.push_str(&format!(
            "{}\n",
            format!(
                "  {} contract/network pair(s) excluded: no {} entry to compare with",
                comparison.excluded_missing_baseline, comparison.baseline
            )
            .yellow()
        ));
    }
    out
}

fn render_charts(charts: &ChartOutcome) -> String {
    let mut out = format!("\n{}\n", "Charts".bold());

    if charts.written.is_empty() && charts.skipped.is_empty() {
        out.push_str("  none\n");
    }
    for path in &charts.written {
        out.push_str(&format!("  {} {}\n", "✓".green(), path.display()));
    }
    for title in &charts.skipped {
        out.push_str(&format!("  {} {} ({})\n", "-".yellow(), title, NO_DATA_LABEL));
    }
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    out
}

fn describe_record(record: Option<&CostRecord>) -> String {
    match record {
        Some(r) => format!(
            "{} / {} on {} ({})",
            r.contract,
            r.function,
            r.network,
            usd_label(r.cost_usd)
        ),
        None => NO_DATA_LABEL.to_string(),
    }
}

fn usd_or_no_data(value: Option<f64>) -> String {
    value.map(usd_label).unwrap_or_else(|| NO_DATA_LABEL.to_string())
}

fn signed_usd(value: f64) -> String {
    if value < 0.0 {
        format!("-{}", usd_label(-value))
    } else {
        usd_label(value)
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max - 3).collect();
        format!("{}...", kept)
    }
}
