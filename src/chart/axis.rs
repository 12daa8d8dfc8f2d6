//! Value axis fitting, projection and drawing.

use super::canvas::{usd_label, Anchor, Frame, SvgCanvas, AXIS_STROKE, GRID_STROKE};

/// Value axis scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    #[default]
    Linear,
    /// Base-10; non-positive values sit on the axis floor
    Log,
}

/// Vertical value axis mapped onto a plot frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAxis {
    pub min: f64,
    pub max: f64,
    pub scale: Scale,
}

impl ValueAxis {
    /// Fit an axis around `values`
    ///
    /// Linear axes start at zero with 10% headroom. Log axes snap to whole
    /// decades around the positive values. Returns None when there is
    /// nothing to fit.
    pub fn fit(values: impl IntoIterator<Item = f64>, scale: Scale) -> Option<Self> {
        let values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        if values.is_empty() {
            return None;
        }

        match scale {
            Scale::Linear => {
                let max = values.iter().copied().fold(0.0_f64, f64::max);
                let max = if max > 0.0 { max * 1.1 } else { 1.0 };
                Some(Self { min: 0.0, max, scale })
            }
            Scale::Log => {
                let positive: Vec<f64> = values.into_iter().filter(|v| *v > 0.0).collect();
                if positive.is_empty() {
                    return Some(Self { min: 0.1, max: 1.0, scale });
                }
                let lo = positive.iter().copied().fold(f64::INFINITY, f64::min);
                let hi = positive.iter().copied().fold(0.0_f64, f64::max);

                let min = 10f64.powf(lo.log10().floor());
                let mut max = 10f64.powf(hi.log10().ceil());
                if max <= min {
                    max = min * 10.0;
                }
                Some(Self { min, max, scale })
            }
        }
    }

    /// Vertical pixel position of `value` inside `frame`
    pub fn project(&self, value: f64, frame: &Frame) -> f64 {
        let fraction = match self.scale {
            Scale::Linear => (value - self.min) / (self.max - self.min),
            Scale::Log => {
                if value <= 0.0 {
                    0.0
                } else {
                    (value.log10() - self.min.log10()) / (self.max.log10() - self.min.log10())
                }
            }
        };
        frame.bottom() - fraction.clamp(0.0, 1.0) * frame.height
    }

    /// Tick values: five even steps, or one per decade on log axes
    pub fn ticks(&self) -> Vec<f64> {
        match self.scale {
            Scale::Linear => (0..=5)
                .map(|i| self.min + (self.max - self.min) * i as f64 / 5.0)
                .collect(),
            Scale::Log => {
                let first = self.min.log10().round() as i32;
                let last = self.max.log10().round() as i32;
                (first..=last).map(|p| 10f64.powi(p)).collect()
            }
        }
    }

    /// Gridlines, tick labels, axis lines and the rotated axis title
    pub fn draw(&self, canvas: &mut SvgCanvas, frame: &Frame, title: &str) {
        for tick in self.ticks() {
            let y = self.project(tick, frame);
            canvas.line((frame.x, y), (frame.right(), y), GRID_STROKE, 1.0, true);
            canvas.text(frame.x - 6.0, y + 4.0, &usd_label(tick), 10, Anchor::End);
        }

        canvas.line((frame.x, frame.y), (frame.x, frame.bottom()), AXIS_STROKE, 1.0, false);
        canvas.line(
            (frame.x, frame.bottom()),
            (frame.right(), frame.bottom()),
            AXIS_STROKE,
            1.0,
            false,
        );

        let label = match self.scale {
            Scale::Linear => title.to_string(),
            Scale::Log => format!("{} (log scale)", title),
        };
        canvas.rotated_text(
            frame.x - 62.0,
            frame.y + frame.height / 2.0,
            &label,
            11,
            -90.0,
            Anchor::Middle,
        );
    }
}

/// Horizontal slot centers for `count` categories
pub fn category_centers(frame: &Frame, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let slot = frame.width / count as f64;
    (0..count)
        .map(|i| frame.x + slot * (i as f64 + 0.5))
        .collect()
}

/// Category labels under the x axis, rotated when they would collide
pub fn draw_category_labels(canvas: &mut SvgCanvas, frame: &Frame, categories: &[String]) {
    let centers = category_centers(frame, categories.len());
    let slot = frame.width / categories.len().max(1) as f64;
    let longest = categories.iter().map(|c| c.chars().count()).max().unwrap_or(0);
    let rotate = longest as f64 * 6.0 > slot;

    for (label, x) in categories.iter().zip(centers) {
        if rotate {
            canvas.rotated_text(x, frame.bottom() + 14.0, label, 10, -40.0, Anchor::End);
        } else {
            canvas.text(x, frame.bottom() + 16.0, label, 10, Anchor::Middle);
        }
    }
}
