//! Output writers for rendered charts.

pub mod batch;
pub mod png;
pub mod svg;

// Re-export main functions
pub use batch::{write_charts, ChartFormat, RenderedChart};
pub use png::{write_png, PngRasterizer, PNG_SIGNATURE};
pub use svg::write_svg;
