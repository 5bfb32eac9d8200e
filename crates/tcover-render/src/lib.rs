//! Cover rendering: from a request and a face to finished pixels
//!
//! The order never changes:
//!
//! 1. A 900×1600 canvas filled with the background color
//! 2. Paper rulings and the accent bar
//! 3. The title, wrapped by [`wrap_lines`] and centered line by line
//! 4. The subtitle in corner brackets, if there is one
//!
//! Encoding the result is someone else's job; see `tcover-export`.

pub mod canvas;
pub mod layout;
pub mod wrap;

#[cfg(test)]
mod proptests;

pub use canvas::Canvas;
pub use layout::{draw_background, draw_layout, layout_cover, CoverLayout, PlacedLine};
pub use wrap::wrap_lines;

use image::RgbImage;
use tcover_core::{
    consts::{CANVAS_HEIGHT, CANVAS_WIDTH, MAX_LINE_WIDTH},
    error::Result,
    types::RenderRequest,
    Face,
};

/// What a render produced
pub struct RenderedCover {
    pub image: RgbImage,
    /// The title as it was wrapped
    pub lines: Vec<String>,
}

/// Draws covers at the fixed portrait size
#[derive(Debug, Default, Clone, Copy)]
pub struct CoverRenderer;

impl CoverRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, request: &RenderRequest, face: &dyn Face) -> Result<RenderedCover> {
        let style = request.style();

        let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT, style.background)?;
        draw_background(&mut canvas, style);

        let lines = wrap_lines(request.title(), face, MAX_LINE_WIDTH);
        log::debug!("Wrapped title into {} lines with {}", lines.len(), face.name());

        let layout = layout_cover(&lines, request.subtitle(), face, style.font_size);
        if let Some(last) = layout.title.last() {
            if last.y + face.line_height() > CANVAS_HEIGHT as f32 {
                log::debug!("Title runs past the bottom edge and will be clipped");
            }
        }
        draw_layout(&mut canvas, &layout, face, style.text);

        Ok(RenderedCover {
            image: canvas.into_image(),
            lines,
        })
    }
}
