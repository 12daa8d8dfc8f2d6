//! Box-and-whisker panels.

use super::axis::{category_centers, draw_category_labels, Scale, ValueAxis};
use super::canvas::{series_color, usd_label, Frame, SvgCanvas, AXIS_STROKE};

/// Five-number summary plus outliers
///
/// Quartiles use linear interpolation between closest ranks. Whiskers reach
/// the furthest values within 1.5 IQR of the box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        let inside: Vec<f64> = sorted
            .iter()
            .copied()
            .filter(|v| *v >= low_fence && *v <= high_fence)
            .collect();
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < low_fence || *v > high_fence)
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            lower_whisker: inside.first().copied().unwrap_or(q1),
            upper_whisker: inside.last().copied().unwrap_or(q3),
            outliers,
        })
    }
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let frac = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

/// Distribution of values per labelled group
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPanel {
    pub title: String,
    pub groups: Vec<(String, Vec<f64>)>,
    pub scale: Scale,
    pub value_label: String,
}

impl BoxPanel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            groups: Vec::new(),
            scale: Scale::Linear,
            value_label: "Cost (USD)".to_string(),
        }
    }

    pub fn with_group(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.groups.push((label.into(), values));
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

    pub fn has_data(&self) -> bool {
        self.groups.iter().any(|(_, values)| !values.is_empty())
    }

    pub(crate) fn render(&self, canvas: &mut SvgCanvas, area: Frame) {
        let plot = area.inset(80.0, 10.0, 20.0, 90.0);
        let all_values = self.groups.iter().flat_map(|(_, v)| v.iter().copied());
        let Some(axis) = ValueAxis::fit(all_values, self.scale) else {
            return;
        };
        axis.draw(canvas, &plot, &self.value_label);

        let slot = plot.width / self.groups.len().max(1) as f64;
        let box_width = (slot * 0.5).min(80.0);
        let centers = category_centers(&plot, self.groups.len());

        for (i, ((label, values), center)) in self.groups.iter().zip(centers).enumerate() {
            let Some(stats) = BoxStats::from_values(values) else {
                continue;
            };
            let color = series_color(i, self.groups.len());
            let y = |v: f64| axis.project(v, &plot);
            let left = center - box_width / 2.0;
            let right = center + box_width / 2.0;

            canvas.line((center, y(stats.lower_whisker)), (center, y(stats.q1)), AXIS_STROKE, 1.0, false);
            canvas.line((center, y(stats.q3)), (center, y(stats.upper_whisker)), AXIS_STROKE, 1.0, false);
            for cap in [stats.lower_whisker, stats.upper_whisker] {
                canvas.line((left + box_width * 0.25, y(cap)), (right - box_width * 0.25, y(cap)), AXIS_STROKE, 1.0, false);
            }

            let tooltip = format!(
                "{}: median {} (q1 {}, q3 {}, n={})",
                label,
                usd_label(stats.median),
                usd_label(stats.q1),
                usd_label(stats.q3),
                values.len()
            );
            let top = y(stats.q3);
            canvas.rect(
                Frame::new(left, top, box_width, (y(stats.q1) - top).max(1.0)),
                &color,
                Some(&tooltip),
            );
            canvas.line((left, y(stats.median)), (right, y(stats.median)), "white", 2.0, false);

            for outlier in &stats.outliers {
                let tip = format!("{}: {}", label, usd_label(*outlier));
                canvas.circle((center, y(*outlier)), 3.0, AXIS_STROKE, Some(&tip));
            }
        }

        let labels: Vec<String> = self.groups.iter().map(|(label, _)| label.clone()).collect();
        draw_category_labels(canvas, &plot, &labels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quartiles_interpolate() {
        let stats = BoxStats::from_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.q1, 1.75);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.q3, 3.25);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn test_outlier_outside_whiskers() {
        let stats = BoxStats::from_values(&[1.0, 1.0, 1.0, 1.0, 100.0]).unwrap();
        assert_eq!(stats.outliers, vec![100.0]);
        assert_eq!(stats.upper_whisker, 1.0);
    }

    #[test]
    fn test_single_value() {
        let stats = BoxStats::from_values(&[0.5]).unwrap();
        assert_eq!(stats.median, 0.5);
        assert_eq!(stats.lower_whisker, 0.5);
        assert!(BoxStats::from_values(&[]).is_none());
    }

    #[test]
    fn test_has_data_ignores_empty_groups() {
        let panel = BoxPanel::new("t").with_group("Polygon", Vec::new());
        assert!(!panel.has_data());
        assert!(panel.with_group("Arbitrum", vec![0.1]).has_data());
    }
}
