//! Batch chart writer.
//!
//! A report renders every chart in memory first and hands the whole batch
//! to `write_charts`. Paths are validated and PNG files rasterised before
//! the first file is written, so a failure never leaves a partial set of
//! files behind.

use super::png::PngRasterizer;
use super::svg::{validate_chart_path, write_bytes};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// A chart rendered in memory, paired with its destination
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub path: PathBuf,
    pub svg: String,
}

impl RenderedChart {
    pub fn new(path: impl Into<PathBuf>, svg: String) -> Self {
        Self {
            path: path.into(),
            svg,
        }
    }

    pub fn format(&self) -> ChartFormat {
        ChartFormat::from_path(&self.path)
    }
}

/// On-disk encoding of a chart file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    /// `.svg` keeps the vector text, anything else is rasterised to PNG
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ChartFormat::Svg,
            Some(ext) if ext.eq_ignore_ascii_case("png") => ChartFormat::Png,
            _ => {
                debug!("No .png/.svg extension, writing PNG: {}", path.display());
                ChartFormat::Png
            }
        }
    }
}

/// Write a batch of rendered charts
///
/// **Public** - every path is validated and every PNG encoded before the
/// first file is written
///
/// # Returns
/// Paths written, in input order
///
/// # Errors
/// * `OutputError::InvalidPath` - Any path in the batch is invalid
/// * `OutputError::RasterFailed` - Any PNG chart could not be rasterised
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_charts(charts: &[RenderedChart]) -> Result<Vec<PathBuf>, OutputError> {
    for chart in charts {
        validate_chart_path(&chart.path)?;
    }

    let rasterizer = charts
        .iter()
        .any(|c| c.format() == ChartFormat::Png)
        .then(PngRasterizer::new);

    let mut encoded = Vec::with_capacity(charts.len());
    for chart in charts {
        let bytes = match (&rasterizer, chart.format()) {
            (Some(rasterizer), ChartFormat::Png) => rasterizer.rasterize(&chart.svg)?,
            _ => chart.svg.clone().into_bytes(),
        };
        encoded.push((&chart.path, bytes));
    }

    let mut written = Vec::with_capacity(encoded.len());
    for (path, bytes) in encoded {
        write_bytes(&bytes, path)?;
        written.push(path.clone());
    }

    info!("Wrote {} chart file(s)", written.len());
    Ok(written)
}
