//! Grouped and stacked bar panels.

use super::axis::{category_centers, draw_category_labels, Scale, ValueAxis};
use super::canvas::{series_color, usd_label, Anchor, Frame, SvgCanvas};

/// How multiple series share a category slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarMode {
    /// Side by side
    #[default]
    Grouped,
    /// On top of each other, summing to the category total
    Stacked,
}

/// One named series; `values[i]` belongs to `categories[i]`
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// Bar panel over a list of categories
#[derive(Debug, Clone, PartialEq)]
pub struct BarPanel {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    pub mode: BarMode,
    pub scale: Scale,
    pub value_label: String,

    /// Per-category fill, used instead of series colors
    pub category_colors: Option<Vec<String>>,

    /// Print the value above every bar
    pub annotate: bool,
}

impl BarPanel {
    pub fn new(title: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            title: title.into(),
            categories,
            series: Vec::new(),
            mode: BarMode::Grouped,
            scale: Scale::Linear,
            value_label: "Cost (USD)".to_string(),
            category_colors: None,
            annotate: false,
        }
    }

    pub fn with_series(mut self, name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        self.series.push(BarSeries {
            name: name.into(),
            values,
        });
        self
    }

    pub fn stacked(mut self) -> Self {
        self.mode = BarMode::Stacked;
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

    pub fn with_category_colors(mut self, colors: Vec<String>) -> Self {
        self.category_colors = Some(colors);
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

    fn value(&self, series: usize, category: usize) -> Option<f64> {
        self.series
            .get(series)
            .and_then(|s| s.values.get(category).copied().flatten())
    }

    /// Sum of all defined segments in a category
    fn category_total(&self, category: usize) -> f64 {
        (0..self.series.len())
            .filter_map(|s| self.value(s, category))
            .sum()
    }

    fn fill(&self, series: usize, category: usize) -> String {
        match &self.category_colors {
            Some(colors) if category < colors.len() => colors[category].clone(),
            _ => series_color(series, self.series.len()),
        }
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

        let axis_values: Vec<f64> = match self.mode {
            BarMode::Grouped => self
                .series
                .iter()
                .flat_map(|s| s.values.iter().flatten().copied())
                .collect(),
            BarMode::Stacked => (0..self.categories.len())
                .map(|c| self.category_total(c))
                .collect(),
        };
        let Some(axis) = ValueAxis::fit(axis_values, self.scale) else {
            return;
        };
        axis.draw(canvas, &plot, &self.value_label);

        let slot = plot.width / self.categories.len() as f64;
        let centers = category_centers(&plot, self.categories.len());

        for (c, (category, center)) in self.categories.iter().zip(centers).enumerate() {
            match self.mode {
                BarMode::Grouped => self.render_grouped(canvas, &plot, &axis, c, category, center, slot),
                BarMode::Stacked => self.render_stacked(canvas, &plot, &axis, c, category, center, slot),
            }
        }

        draw_category_labels(canvas, &plot, &self.categories);
    }

    #[allow(clippy::too_many_arguments)]
    fn render_grouped(
        &self,
        canvas: &mut SvgCanvas,
        plot: &Frame,
        axis: &ValueAxis,
        c: usize,
        category: &str,
        center: f64,
        slot: f64,
    ) {
        let group_width = slot * 0.8;
        let bar_width = group_width / self.series.len().max(1) as f64;
        let start = center - group_width / 2.0;

        for (s, series) in self.series.iter().enumerate() {
            let Some(value) = self.value(s, c) else {
                continue;
            };
            let top = axis.project(value, plot);
            let x = start + bar_width * s as f64;
            let tooltip = format!("{} / {}: {}", series.name, category, usd_label(value));

            canvas.rect(
                Frame::new(x, top, bar_width * 0.95, plot.bottom() - top),
                &self.fill(s, c),
                Some(&tooltip),
            );

            if self.annotate {
                canvas.text(x + bar_width / 2.0, top - 4.0, &usd_label(value), 9, Anchor::Middle);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_stacked(
        &self,
        canvas: &mut SvgCanvas,
        plot: &Frame,
        axis: &ValueAxis,
        c: usize,
        category: &str,
        center: f64,
        slot: f64,
    ) {
        let bar_width = slot * 0.7;
        let x = center - bar_width / 2.0;
        let mut cumulative = 0.0;

        for (s, series) in self.series.iter().enumerate() {
            let Some(value) = self.value(s, c) else {
                continue;
            };
            let bottom = axis.project(cumulative, plot);
            cumulative += value;
            let top = axis.project(cumulative, plot);
            let tooltip = format!("{} / {}: {}", category, series.name, usd_label(value));

            canvas.rect(
                Frame::new(x, top, bar_width, (bottom - top).max(0.0)),
                &self.fill(s, c),
                Some(&tooltip),
            );
        }

        if self.annotate && cumulative > 0.0 {
            let top = axis.project(cumulative, plot);
            canvas.text(center, top - 4.0, &usd_label(cumulative), 9, Anchor::Middle);
        }
    }
}
