use crate::chart::{generate_chart, ChartConfig, Panel};
use crate::output::{write_charts, RenderedChart};
use crate::report::ChartOutcome;
use crate::utils::config::ChartSettings;
use crate::utils::error::ChartError;
use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;

/// One chart a report wants to produce
pub struct ChartJob {
    pub file_name: String,
    pub title: String,
    pub panels: Vec<Panel>,
}

impl ChartJob {
    pub fn new(file_name: &str, title: impl Into<String>, panels: Vec<Panel>) -> Self {
        Self {
            file_name: file_name.to_string(),
            title: title.into(),
            panels,
        }
    }
}

/// Render every job in memory, then write the ones that rendered
///
/// Charts without data are skipped with a warning. No file is written
/// until all jobs have been rendered.
pub fn produce_charts(
    jobs: Vec<ChartJob>,
    output_dir: &Path,
    settings: &ChartSettings,
) -> Result<ChartOutcome> {
    let mut rendered = Vec::with_capacity(jobs.len());
    let mut skipped = Vec::new();

    for job in jobs {
        let config = ChartConfig::new(&job.title).with_size(settings.width, settings.height);
        match generate_chart(&job.panels, &config) {
            Ok(svg) => rendered.push(RenderedChart::new(output_dir.join(&job.file_name), svg)),
            Err(ChartError::EmptyData(title)) => {
                warn!("Skipping chart '{}': no data to plot", title);
                skipped.push(title);
            }
        }
    }

    let written = write_charts(&rendered).context("Failed to write chart files")?;
    for path in &written {
        info!("✓ Chart written to: {}", path.display());
    }

    Ok(ChartOutcome { written, skipped })
}

/// Display version information
pub fn display_version() {
    println!("Gas Cost Report v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Cost aggregation, cross-network comparison and charts for contract gas reports.");
}
