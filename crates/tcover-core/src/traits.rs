//! The contracts that bind the pipeline together
//!
//! - [`Face`] - A font at a fixed pixel size: measures and rasterizes text
//! - [`Exporter`] - Where the finished canvas becomes file bytes

use crate::{
    error::Result,
    types::{GlyphMask, TextBox},
};
use image::RgbImage;

/// A font resolved at one pixel size
///
/// Text is measured and rasterized relative to its origin: the left edge of
/// the first glyph on the ascender line, with y growing downwards.
///
/// ```ignore
/// struct Monospace;
///
/// impl Face for Monospace {
///     fn name(&self) -> &str {
///         "monospace"
///     }
///
///     fn size(&self) -> f32 {
///         10.0
///     }
///
///     fn line_height(&self) -> f32 {
///         12.0
///     }
///
///     fn advance(&self, _ch: char) -> f32 {
///         6.0
///     }
///
///     fn rasterize(&self, _text: &str) -> Vec<GlyphMask> {
///         Vec::new()
///     }
/// }
/// ```
pub trait Face: Send + Sync {
    /// Where this face came from, for logs and reports
    fn name(&self) -> &str;

    /// The pixel size glyphs are scaled to
    fn size(&self) -> f32;

    /// Distance from the ascender line to the descender line in pixels
    fn line_height(&self) -> f32;

    /// How far the pen moves after drawing `ch`
    fn advance(&self, ch: char) -> f32;

    /// Measure `text` as a single line
    fn bbox(&self, text: &str) -> TextBox {
        let right = text.chars().map(|ch| self.advance(ch)).sum();
        TextBox {
            left: 0.0,
            top: 0.0,
            right,
            bottom: self.line_height(),
        }
    }

    /// Coverage masks for every inked glyph in `text`
    fn rasterize(&self, text: &str) -> Vec<GlyphMask>;
}

/// The final step: pixels become bytes
pub trait Exporter: Send + Sync {
    /// Who are you?
    fn name(&self) -> &'static str;

    /// Encode the canvas
    fn export(&self, image: &RgbImage) -> Result<Vec<u8>>;

    /// What file extension should be used?
    fn extension(&self) -> &'static str;

    /// What MIME type identifies your format?
    fn mime_type(&self) -> &'static str;
}
