//! SVG chart rendering.
//!
//! Charts are built as plain SVG strings in memory. A chart holds one or
//! more panels laid out on a grid; a panel is a bar, line, box or heatmap
//! plot. Nothing here touches the filesystem.

pub mod axis;
pub mod bar;
pub mod boxplot;
pub mod canvas;
pub mod heatmap;
pub mod line;

pub use axis::{Scale, ValueAxis};
pub use bar::{BarMode, BarPanel, BarSeries};
pub use boxplot::{BoxPanel, BoxStats};
pub use canvas::{series_color, usd_label};
pub use heatmap::HeatmapPanel;
pub use line::{LinePanel, LineSeries};

use crate::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, NO_DATA_LABEL, PANEL_GRID_COLUMNS};
use crate::utils::error::ChartError;
use canvas::{Anchor, Frame, SvgCanvas};
use log::{debug, info};

const TITLE_HEIGHT: f64 = 44.0;
const PANEL_TITLE_HEIGHT: f64 = 26.0;
const MIN_ROW_HEIGHT: usize = 360;

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,

    /// Total height of a single-panel chart; multi-row grids grow past it
    pub height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Gas Cost Report".to_string(),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl ChartConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// One plot inside a chart
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Bar(BarPanel),
    Line(LinePanel),
    Box(BoxPanel),
    Heatmap(HeatmapPanel),
}

impl Panel {
    pub fn title(&self) -> &str {
        match self {
            Panel::Bar(p) => &p.title,
            Panel::Line(p) => &p.title,
            Panel::Box(p) => &p.title,
            Panel::Heatmap(p) => &p.title,
        }
    }

    pub fn has_data(&self) -> bool {
        match self {
            Panel::Bar(p) => p.has_data(),
            Panel::Line(p) => p.has_data(),
            Panel::Box(p) => p.has_data(),
            Panel::Heatmap(p) => p.has_data(),
        }
    }

    fn render(&self, canvas: &mut SvgCanvas, area: Frame) {
        match self {
            Panel::Bar(p) => p.render(canvas, area),
            Panel::Line(p) => p.render(canvas, area),
            Panel::Box(p) => p.render(canvas, area),
            Panel::Heatmap(p) => p.render(canvas, area),
        }
    }
}

impl From<BarPanel> for Panel {
    fn from(panel: BarPanel) -> Self {
        Panel::Bar(panel)
    }
}

impl From<LinePanel> for Panel {
    fn from(panel: LinePanel) -> Self {
        Panel::Line(panel)
    }
}

impl From<BoxPanel> for Panel {
    fn from(panel: BoxPanel) -> Self {
        Panel::Box(panel)
    }
}

impl From<HeatmapPanel> for Panel {
    fn from(panel: HeatmapPanel) -> Self {
        Panel::Heatmap(panel)
    }
}

/// Render panels into one SVG document
///
/// **Public** - every report chart goes through here
///
/// # Arguments
/// * `panels` - Plots in reading order; more than one are laid out on a grid
/// * `config` - Title and pixel size
///
/// # Returns
/// Complete SVG document as a string
///
/// # Errors
/// * `ChartError::EmptyData` - No panel has a single value to draw
///
/// # Example
/// ```ignore
/// let panel = BarPanel::new("Token", functions).with_series("Arbitrum", costs);
/// let svg = generate_chart(&[panel.into()], &ChartConfig::new("Costs"))?;
/// ```
pub fn generate_chart(panels: &[Panel], config: &ChartConfig) -> Result<String, ChartError> {
    if !panels.iter().any(Panel::has_data) {
        return Err(ChartError::EmptyData(config.title.clone()));
    }

    let columns = if panels.len() == 1 { 1 } else { PANEL_GRID_COLUMNS };
    let rows = panels.len().div_ceil(columns);
    let row_height = if rows == 1 {
        config.height as f64 - TITLE_HEIGHT
    } else {
        (config.height / 2).max(MIN_ROW_HEIGHT) as f64
    };
    let total_height = (TITLE_HEIGHT + row_height * rows as f64).ceil() as usize;
    let panel_width = config.width as f64 / columns as f64;

    info!(
        "Rendering chart '{}' ({} panels, {}x{})",
        config.title,
        panels.len(),
        config.width,
        total_height
    );

    let mut canvas = SvgCanvas::new(config.width, total_height);
    canvas.bold_text(config.width as f64 / 2.0, 28.0, &config.title, 18, Anchor::Middle);

    for (i, panel) in panels.iter().enumerate() {
        let outer = Frame::new(
            panel_width * (i % columns) as f64,
            TITLE_HEIGHT + row_height * (i / columns) as f64,
            panel_width,
            row_height,
        );

        if panels.len() > 1 || !panel.title().is_empty() {
            canvas.bold_text(outer.center_x(), outer.y + 16.0, panel.title(), 13, Anchor::Middle);
        }
        let area = outer.inset(0.0, PANEL_TITLE_HEIGHT, 0.0, 0.0);

        if panel.has_data() {
            panel.render(&mut canvas, area);
        } else {
            debug!("Panel '{}' has no data", panel.title());
            canvas.text(
                area.center_x(),
                area.y + area.height / 2.0,
                NO_DATA_LABEL,
                14,
                Anchor::Middle,
            );
        }
    }

    let svg = canvas.finish();
    debug!("Chart '{}' generated ({} bytes)", config.title, svg.len());
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(title: &str, values: Vec<Option<f64>>) -> Panel {
        BarPanel::new(title, vec!["transfer".to_string(), "approve".to_string()])
            .with_series("Arbitrum", values)
            .into()
    }

    #[test]
    fn test_empty_chart_is_an_error() {
        let result = generate_chart(&[], &ChartConfig::default());
        assert!(matches!(result, Err(ChartError::EmptyData(_))));

        let result = generate_chart(&[bar("Token", vec![None, None])], &ChartConfig::default());
        assert!(matches!(result, Err(ChartError::EmptyData(_))));
    }

    #[test]
    fn test_grid_marks_empty_panels() {
        let panels = vec![
            bar("Token", vec![Some(0.02), Some(0.03)]),
            bar("Vault", vec![None, None]),
            bar("Proxy", vec![Some(1.0), None]),
        ];
        let svg = generate_chart(&panels, &ChartConfig::new("Costs")).unwrap();

        assert!(svg.contains(">Vault</text>"));
        assert!(svg.contains(">no data</text>"));
        // title plus two rows of half the configured height
        assert!(svg.contains(r#"height="844""#));
    }

    #[test]
    fn test_single_panel_keeps_configured_size() {
        let svg = generate_chart(
            &[bar("", vec![Some(1.0), Some(2.0)])],
            &ChartConfig::new("Costs").with_size(640, 480),
        )
        .unwrap();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="480""#));
    }
}
