//! Low-level SVG drawing primitives shared by every panel type.

use std::fmt::Write;

/// Viridis stops, dark to light
const VIRIDIS: &[(u8, u8, u8)] = &[
    (68, 1, 84),
    (72, 40, 120),
    (62, 74, 137),
    (49, 104, 142),
    (38, 130, 142),
    (31, 158, 137),
    (53, 183, 121),
    (110, 206, 88),
    (181, 222, 43),
    (253, 231, 37),
];

pub const NO_DATA_FILL: &str = "rgb(230, 230, 230)";
pub const GRID_STROKE: &str = "rgb(220, 220, 220)";
pub const AXIS_STROKE: &str = "rgb(60, 60, 60)";

/// Text anchor
#[derive(Debug, Clone, Copy)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Rectangle in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Shrink by margins; never below 1px in either direction
    pub fn inset(&self, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            x: self.x + left,
            y: self.y + top,
            width: (self.width - left - right).max(1.0),
            height: (self.height - top - bottom).max(1.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// SVG document builder
pub struct SvgCanvas {
    out: String,
}

impl SvgCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = width,
            h = height
        );
        out.push_str(
            r#"<style>text { font-family: sans-serif; fill: rgb(30, 30, 30); } .mark:hover { stroke: black; stroke-width: 1; opacity: 0.85; }</style>"#,
        );
        let _ = write!(
            out,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
            width, height
        );
        Self { out }
    }

    pub fn rect(&mut self, frame: Frame, fill: &str, tooltip: Option<&str>) {
        let _ = write!(
            self.out,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" class="mark">"#,
            frame.x, frame.y, frame.width, frame.height, fill
        );
        self.close_with_tooltip("rect", tooltip);
    }

    pub fn outline(&mut self, frame: Frame, stroke: &str) {
        let _ = write!(
            self.out,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="{}" stroke-width="1"/>"#,
            frame.x, frame.y, frame.width, frame.height, stroke
        );
    }

    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &str, width: f64, dashed: bool) {
        let dash = if dashed { r#" stroke-dasharray="4 3""# } else { "" };
        let _ = write!(
            self.out,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"{}/>"#,
            from.0, from.1, to.0, to.1, stroke, width, dash
        );
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: &str, width: f64) {
        if points.len() < 2 {
            return;
        }
        let coords: Vec<String> = points
            .iter()
            .map(|(x, y)| format!("{:.2},{:.2}", x, y))
            .collect();
        let _ = write!(
            self.out,
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            coords.join(" "),
            stroke,
            width
        );
    }

    pub fn circle(&mut self, center: (f64, f64), radius: f64, fill: &str, tooltip: Option<&str>) {
        let _ = write!(
            self.out,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" stroke="white" stroke-width="0.5" class="mark">"#,
            center.0, center.1, radius, fill
        );
        self.close_with_tooltip("circle", tooltip);
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, size: usize, anchor: Anchor) {
        let _ = write!(
            self.out,
            r#"<text x="{:.2}" y="{:.2}" font-size="{}" text-anchor="{}">{}</text>"#,
            x,
            y,
            size,
            anchor.as_str(),
            escape_xml(content)
        );
    }

    pub fn bold_text(&mut self, x: f64, y: f64, content: &str, size: usize, anchor: Anchor) {
        let _ = write!(
            self.out,
            r#"<text x="{:.2}" y="{:.2}" font-size="{}" font-weight="bold" text-anchor="{}">{}</text>"#,
            x,
            y,
            size,
            anchor.as_str(),
            escape_xml(content)
        );
    }

    /// Text rotated around its anchor point
    pub fn rotated_text(&mut self, x: f64, y: f64, content: &str, size: usize, angle: f64, anchor: Anchor) {
        let _ = write!(
            self.out,
            r#"<text x="{x:.2}" y="{y:.2}" font-size="{size}" text-anchor="{anchor}" transform="rotate({angle} {x:.2} {y:.2})">{content}</text>"#,
            x = x,
            y = y,
            size = size,
            anchor = anchor.as_str(),
            angle = angle,
            content = escape_xml(content)
        );
    }

    /// Row of colored swatches with labels; wraps to the next line at `max_x`
    pub fn legend(&mut self, x: f64, y: f64, max_x: f64, entries: &[(String, String)]) {
        let mut cursor = x;
        let mut line_y = y;

        for (label, color) in entries {
            let item_width = 24.0 + label.chars().count() as f64 * 6.5 + 12.0;
            if cursor + item_width > max_x && cursor > x {
                cursor = x;
                line_y += 16.0;
            }
            let _ = write!(
                self.out,
                r#"<rect x="{:.2}" y="{:.2}" width="12" height="12" fill="{}" rx="2"/>"#,
                cursor,
                line_y - 10.0,
                color
            );
            self.text(cursor + 16.0, line_y, label, 11, Anchor::Start);
            cursor += item_width;
        }
    }

    pub fn finish(mut self) -> String {
        self.out.push_str("</svg>");
        self.out
    }

    fn close_with_tooltip(&mut self, tag: &str, tooltip: Option<&str>) {
        if let Some(tip) = tooltip {
            let _ = write!(self.out, "<title>{}</title>", escape_xml(tip));
        }
        let _ = write!(self.out, "</{}>", tag);
    }
}

/// Color `index` of `count` evenly spaced viridis colors
pub fn series_color(index: usize, count: usize) -> String {
    if count <= 1 {
        return viridis(0.35);
    }
    viridis(index as f64 / (count - 1) as f64 * 0.9)
}

/// Interpolated viridis color for `t` in [0, 1]
pub fn viridis(t: f64) -> String {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    let upper = (lower + 1).min(VIRIDIS.len() - 1);
    let frac = scaled - lower as f64;

    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (r0, g0, b0) = VIRIDIS[lower];
    let (r1, g1, b1) = VIRIDIS[upper];

    format!("rgb({}, {}, {})", mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

/// USD label with precision scaled to the magnitude of the value
pub fn usd_label(value: f64) -> String {
    if value < 0.001 {
        format!("${:.6}", value)
    } else if value < 1.0 {
        format!("${:.4}", value)
    } else {
        format!("${:.2}", value)
    }
}

pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
