//! Line panels with point markers.

use super::axis::{category_centers, draw_category_labels, Scale, ValueAxis};
use super::canvas::{series_color, usd_label, Anchor, Frame, SvgCanvas};

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,

    /// Marker fill per point; the series color when absent
    pub point_colors: Option<Vec<String>>,
}

/// Line panel over ordered categories
///
/// A missing value breaks the line; the segments on either side are drawn
/// separately.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePanel {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<LineSeries>,
    pub scale: Scale,
    pub value_label: String,
    pub annotate: bool,
}

impl LinePanel {
    pub fn new(title: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            title: title.into(),
            categories,
            series: Vec::new(),
            scale: Scale::Linear,
            value_label: "Cost (USD)".to_string(),
            annotate: false,
        }
    }

    pub fn with_series(mut self, name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        self.series.push(LineSeries {
            name: name.into(),
            values,
            point_colors: None,
        });
        self
    }

    /// Color the markers of the most recently added series
    pub fn with_point_colors(mut self, colors: Vec<String>) -> Self {
        if let Some(last) = self.series.last_mut() {
            last.point_colors = Some(colors);
        }
        self
    }

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_value_label(mut self, label: impl Into<String>) -> Self {
        self.value_label = label.into();
        self
    }

    pub fn annotated(mut self) -> Self {
        self.annotate = true;
        self
    }

    pub fn has_data(&self) -> bool {
        !self.categories.is_empty()
            && self
                .series
                .iter()
                .any(|s| s.values.iter().any(Option::is_some))
    }

    pub(crate) fn render(&self, canvas: &mut SvgCanvas, area: Frame) {
        let show_legend = self.series.len() > 1;
        let legend_height = if show_legend { 22.0 } else { 0.0 };
        let plot = area.inset(80.0, legend_height + 10.0, 20.0, 90.0);

        if show_legend {
            let entries: Vec<(String, String)> = self
                .series
                .iter()
                .enumerate()
                .map(|(i, s)| (s.name.clone(), series_color(i, self.series.len())))
                .collect();
            canvas.legend(plot.x, area.y + 12.0, area.right(), &entries);
        }

        let values = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().flatten().copied());
        let Some(axis) = ValueAxis::fit(values, self.scale) else {
            return;
        };
        axis.draw(canvas, &plot, &self.value_label);

        let centers = category_centers(&plot, self.categories.len());

        for (s, series) in self.series.iter().enumerate() {
            let color = series_color(s, self.series.len());
            let points: Vec<Option<(f64, f64)>> = series
                .values
                .iter()
                .zip(&centers)
                .map(|(v, x)| v.map(|v| (*x, axis.project(v, &plot))))
                .collect();

            for segment in points.split(Option::is_none) {
                let segment: Vec<(f64, f64)> = segment.iter().flatten().copied().collect();
                canvas.polyline(&segment, &color, 2.0);
            }

            for (c, (value, point)) in series.values.iter().zip(&points).enumerate() {
                let (Some(value), Some(point)) = (value, point) else {
                    continue;
                };
                let fill = series
                    .point_colors
                    .as_ref()
                    .and_then(|colors| colors.get(c))
                    .unwrap_or(&color);
                let tooltip = format!(
                    "{} / {}: {}",
                    series.name,
                    self.categories[c],
                    usd_label(*value)
                );
                canvas.circle(*point, 4.5, fill, Some(&tooltip));

                if self.annotate {
                    canvas.text(point.0, point.1 - 8.0, &usd_label(*value), 9, Anchor::Middle);
                }
            }
        }

        draw_category_labels(canvas, &plot, &self.categories);
    }
}
