//! JPEG export format
//!
//! Encodes the finished canvas with `jpeg-encoder`, using optimized Huffman
//! tables. JPEG dimensions are 16-bit, so larger canvases are rejected.

use image::RgbImage;
use jpeg_encoder::{ColorType, Encoder};
use tcover_core::{
    consts::JPEG_QUALITY,
    error::{ExportError, Result},
    traits::Exporter,
};

/// JPEG exporter for finished covers
///
/// # Examples
///
/// ```
/// use tcover_export::JpegExporter;
/// let exporter = JpegExporter::new();
/// assert_eq!(exporter.quality(), 90);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JpegExporter {
    quality: u8,
}

impl JpegExporter {
    /// Exporter at the cover quality of 90
    pub fn new() -> Self {
        Self::with_quality(JPEG_QUALITY)
    }

    /// Quality is clamped to 1..=100
    pub fn with_quality(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl Exporter for JpegExporter {
    fn name(&self) -> &'static str {
        "jpeg"
    }

    fn export(&self, image: &RgbImage) -> Result<Vec<u8>> {
        let (width, height) = match (u16::try_from(image.width()), u16::try_from(image.height())) {
            (Ok(width), Ok(height)) => (width, height),
            _ => {
                return Err(ExportError::EncodingFailed(format!(
                    "{}x{} is too large for JPEG",
                    image.width(),
                    image.height()
                ))
                .into())
            },
        };

        let mut jpeg_data = Vec::new();
        let mut encoder = Encoder::new(&mut jpeg_data, self.quality);
        encoder.set_optimized_huffman_tables(true);

        encoder
            .encode(image.as_raw(), width, height, ColorType::Rgb)
            .map_err(|e| ExportError::EncodingFailed(format!("JPEG encoding failed: {}", e)))?;

        log::debug!("Encoded {}x{} JPEG at quality {}", width, height, self.quality);
        Ok(jpeg_data)
    }

    fn extension(&self) -> &'static str {
        "jpg"
    }

    fn mime_type(&self) -> &'static str {
        "image/jpeg"
    }
}

impl Default for JpegExporter {
    fn default() -> Self {
        Self::new()
    }
}
