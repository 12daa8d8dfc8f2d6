//! PNG chart output.
//!
//! Charts are generated as SVG text; this module rasterises that text with
//! `resvg` at the size declared on the root `<svg>` element.

use super::svg::write_bytes;
use crate::utils::error::OutputError;
use log::{debug, info};
use resvg::{tiny_skia, usvg};
use std::path::Path;

/// PNG file signature, the first eight bytes of every PNG file
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Reusable SVG to PNG converter
///
/// Loading the system font database is the expensive part, so a batch of
/// charts shares one rasteriser.
pub struct PngRasterizer {
    options: usvg::Options<'static>,
}

impl PngRasterizer {
    pub fn new() -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        debug!("Loaded {} font face(s) for rasterising", options.fontdb.len());
        Self { options }
    }

    /// Rasterise SVG text into encoded PNG bytes
    ///
    /// # Errors
    /// * `OutputError::RasterFailed` - SVG could not be parsed, has a zero
    ///   size, or PNG encoding failed
    pub fn rasterize(&self, svg_content: &str) -> Result<Vec<u8>, OutputError> {
        let tree = usvg::Tree::from_str(svg_content, &self.options)
            .map_err(|e| OutputError::RasterFailed(e.to_string()))?;

        let size = tree.size().to_int_size();
        let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
            OutputError::RasterFailed(format!(
                "invalid canvas size {}x{}",
                size.width(),
                size.height()
            ))
        })?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        pixmap
            .encode_png()
            .map_err(|e| OutputError::RasterFailed(e.to_string()))
    }
}

impl Default for PngRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rasterise SVG content and write it as a PNG file
///
/// **Public** - single-chart counterpart of `write_svg`
///
/// # Errors
/// * `OutputError::RasterFailed` - SVG could not be rasterised
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
///
/// # Example
/// ```ignore
/// let svg = generate_chart(&panels, &config)?;
/// write_png(&svg, "charts/cost_heatmap.png")?;
/// ```
pub fn write_png(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing PNG to: {}", output_path.display());
    let png = PngRasterizer::new().rasterize(svg_content)?;
    write_bytes(&png, output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="30"><rect x="0" y="0" width="40" height="30" fill="white"/></svg>"#;

    #[test]
    fn test_rasterize_produces_png() {
        let png = PngRasterizer::new().rasterize(SQUARE).unwrap();
        assert_eq!(png[..8], PNG_SIGNATURE);
    }

    #[test]
    fn test_rasterize_rejects_non_svg() {
        let result = PngRasterizer::new().rasterize("not an svg");
        assert!(matches!(result, Err(OutputError::RasterFailed(_))));
    }

    #[test]
    fn test_write_png() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("charts/square.png");

        write_png(SQUARE, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes[..8], PNG_SIGNATURE);
    }
}
