//! tcover - title covers for social media posts
//!
//! One call turns a title (and an optional subtitle) into a 900×1600 JPEG
//! on a note-paper background:
//!
//! 1. Font resolution: the first loadable font from a fixed list, else a built-in face
//! 2. Wrapping: the title is broken between characters to fit the margins
//! 3. Drawing: rulings, accent bar, centered title lines, bracketed subtitle
//! 4. Export: JPEG at quality 90, written over whatever was at the path
//!
//! # Example
//!
//! ```no_run
//! use tcover::prelude::*;
//!
//! let request = RenderRequest::new("美院学生都在用AI？我就笑了")
//!     .with_subtitle("副标题")
//!     .with_output("/tmp/cover.jpg");
//! let report = tcover::create_title_cover(&request)?;
//! println!("{} ({} lines)", report.output.display(), report.lines);
//! # Ok::<(), tcover::error::CoverError>(())
//! ```

use std::path::PathBuf;

pub use tcover_core::{consts, error, traits, types};
pub use tcover_export as export;
pub use tcover_fontdb as fontdb;
pub use tcover_render as render;

use tcover_core::{
    consts::MAX_FONT_SIZE,
    error::{CoverError, Result},
    traits::Exporter,
    types::RenderRequest,
};
use tcover_export::{write_output, JpegExporter};
use tcover_fontdb::FontResolver;
use tcover_render::CoverRenderer;

/// Common imports for typical usage
pub mod prelude {
    pub use tcover_core::{
        error::{CoverError, Result},
        traits::{Exporter, Face},
        types::{Color, CoverStyle, RenderRequest},
    };
    pub use tcover_fontdb::FontResolver;
}

/// What a finished render left behind
#[derive(Debug, Clone, PartialEq)]
pub struct CoverReport {
    /// Where the JPEG was written
    pub output: PathBuf,
    /// How many lines the title wrapped into
    pub lines: usize,
    /// The face the text was drawn with
    pub font: String,
    /// The pixel size of that face
    pub font_size: f32,
}

/// Renders `request` with the default font list and writes the JPEG
pub fn create_title_cover(request: &RenderRequest) -> Result<CoverReport> {
    create_title_cover_with(request, &FontResolver::new())
}

/// Renders `request` with fonts from `resolver` and writes the JPEG
///
/// Font sizes outside `1..=MAX_FONT_SIZE` are rejected. Nothing touches the
/// filesystem until the image is fully encoded.
pub fn create_title_cover_with(
    request: &RenderRequest,
    resolver: &FontResolver,
) -> Result<CoverReport> {
    let font_size = request.style().font_size;
    if !(1..=MAX_FONT_SIZE).contains(&font_size) {
        return Err(CoverError::Config(format!(
            "font size must be between 1 and {MAX_FONT_SIZE}, got {font_size}"
        )));
    }

    let face = resolver.resolve(font_size);
    log::debug!("Rendering with face {} at {}px", face.name(), face.size());

    let cover = CoverRenderer::new().render(request, face.as_ref())?;

    let exporter = JpegExporter::new();
    log::debug!("Exporting with backend: {}", exporter.name());
    let bytes = exporter.export(&cover.image)?;

    let output = write_output(request.output(), &bytes)?;
    log::info!("Cover written to {} ({} lines)", output.display(), cover.lines.len());

    Ok(CoverReport {
        output,
        lines: cover.lines.len(),
        font: face.name().to_string(),
        font_size: face.size(),
    })
}
