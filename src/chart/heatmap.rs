//! Heatmap panels drawn from a pivot.

use super::canvas::{usd_label, viridis, Anchor, Frame, SvgCanvas, AXIS_STROKE, NO_DATA_FILL};
use crate::aggregator::pivot::{Cell, Pivot};
use crate::utils::config::NO_DATA_LABEL;

/// Pivot cells colored on a viridis scale; `NoData` cells stay gray
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapPanel {
    pub title: String,
    pub pivot: Pivot,
}

impl HeatmapPanel {
    pub fn new(title: impl Into<String>, pivot: Pivot) -> Self {
        Self {
            title: title.into(),
            pivot,
        }
    }

    pub fn has_data(&self) -> bool {
        self.pivot.value_range().is_some()
    }

    pub(crate) fn render(&self, canvas: &mut SvgCanvas, area: Frame) {
        let Some((lo, hi)) = self.pivot.value_range() else {
            return;
        };
        let rows = self.pivot.rows();
        let columns = self.pivot.columns();
        let plot = area.inset(160.0, 10.0, 100.0, 90.0);

        let cell_width = plot.width / columns.len() as f64;
        let cell_height = plot.height / rows.len() as f64;
        let normalize = |v: f64| if hi > lo { (v - lo) / (hi - lo) } else { 0.5 };

        for (i, row) in rows.iter().enumerate() {
            let y = plot.y + cell_height * i as f64;
            canvas.text(plot.x - 6.0, y + cell_height / 2.0 + 4.0, row, 10, Anchor::End);

            for (j, cell) in self.pivot.row_cells(i).iter().enumerate() {
                let frame = Frame::new(plot.x + cell_width * j as f64, y, cell_width, cell_height);
                let (fill, text) = match cell {
                    Cell::Value(v) => (viridis(normalize(*v)), usd_label(*v)),
                    Cell::NoData => (NO_DATA_FILL.to_string(), NO_DATA_LABEL.to_string()),
                };
                let tooltip = format!("{} / {}: {}", row, columns[j], text);
                canvas.rect(frame, &fill, Some(&tooltip));

                if cell_width > 56.0 && cell_height > 16.0 {
                    canvas.text(
                        frame.center_x(),
                        frame.y + cell_height / 2.0 + 4.0,
                        &text,
                        9,
                        Anchor::Middle,
                    );
                }
            }
        }

        for (j, column) in columns.iter().enumerate() {
            let x = plot.x + cell_width * (j as f64 + 0.5);
            canvas.rotated_text(x, plot.bottom() + 14.0, column, 10, -40.0, Anchor::End);
        }

        self.render_color_bar(canvas, &plot, lo, hi);
    }

    fn render_color_bar(&self, canvas: &mut SvgCanvas, plot: &Frame, lo: f64, hi: f64) {
        const STEPS: usize = 20;
        let x = plot.right() + 20.0;
        let step_height = plot.height / STEPS as f64;

        for step in 0..STEPS {
            let t = 1.0 - step as f64 / (STEPS - 1) as f64;
            canvas.rect(
                Frame::new(x, plot.y + step_height * step as f64, 16.0, step_height + 0.5),
                &viridis(t),
                None,
            );
        }
        canvas.outline(Frame::new(x, plot.y, 16.0, plot.height), AXIS_STROKE);
        canvas.text(x + 20.0, plot.y + 10.0, &usd_label(hi), 9, Anchor::Start);
        canvas.text(x + 20.0, plot.bottom(), &usd_label(lo), 9, Anchor::Start);
        canvas.text(
            x + 20.0,
            plot.y + plot.height / 2.0,
            &self.pivot.metric.to_string(),
            9,
            Anchor::Start,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::stats::Metric;
    use crate::parser::schema::{CostRecord, CostTable, Dimension};

    #[test]
    fn test_no_data_cells_are_labelled() {
        let table = CostTable::new(vec![
            CostRecord::new("Arbitrum", "Token", "transfer", 0.02),
            CostRecord::new("Polygon", "Token", "approve", 0.01),
        ]);
        let pivot = Pivot::build(&table, Dimension::Function, Dimension::Network, Metric::Mean);
        let panel = HeatmapPanel::new("Cost heatmap", pivot);

        let mut canvas = SvgCanvas::new(800, 400);
        panel.render(&mut canvas, Frame::new(0.0, 0.0, 800.0, 400.0));
        let svg = canvas.finish();

        assert!(svg.contains("transfer / Polygon: no data"));
        assert!(svg.contains("transfer / Arbitrum: $0.0200"));
        assert!(svg.contains(NO_DATA_FILL));
    }
}
