//! The pixel buffer a cover is drawn on
//!
//! Every draw call clips against the canvas edges: anything outside is
//! dropped without complaint.

use image::{Rgb, RgbImage};
use tcover_core::{
    error::{RenderError, Result},
    types::{Color, GlyphMask},
    Face,
};

/// RGB canvas, filled with the background on creation
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height }.into());
        }
        let image = RgbImage::from_pixel(width, height, Rgb(background.to_array()));
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color at `(x, y)`, `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|Rgb([r, g, b])| Color::rgb(*r, *g, *b))
    }

    /// Paints the rectangle at `(x, y)`; the part outside the canvas is dropped
    pub fn fill_rect(&mut self, x: i64, y: i64, width: u32, height: u32, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + width as i64).min(self.width() as i64);
        let y1 = (y + height as i64).min(self.height() as i64);

        for py in y0..y1 {
            for px in x0..x1 {
                self.image
                    .put_pixel(px as u32, py as u32, Rgb(color.to_array()));
            }
        }
    }

    /// Horizontal line from `x0` to `x1` inclusive, `width` pixels thick,
    /// centered on row `y`
    pub fn hline(&mut self, y: u32, x0: u32, x1: u32, color: Color, width: u32) {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let top = y as i64 - (width / 2) as i64;
        self.fill_rect(left as i64, top, right - left + 1, width, color);
    }

    /// Vertical line from `y0` to `y1` inclusive, `width` pixels thick,
    /// centered on column `x`
    pub fn vline(&mut self, x: u32, y0: u32, y1: u32, color: Color, width: u32) {
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        let left = x as i64 - (width / 2) as i64;
        self.fill_rect(left, top as i64, width, bottom - top + 1, color);
    }

    /// Alpha-blends `color` through the mask's coverage, with the mask's
    /// offsets taken relative to `(x, y)`
    pub fn blend_mask(&mut self, x: i32, y: i32, mask: &GlyphMask, color: Color) {
        let (width, height) = (self.width() as i64, self.height() as i64);
        let src = color.to_array();

        for my in 0..mask.height {
            let py = (y + mask.y) as i64 + my as i64;
            if py < 0 || py >= height {
                continue;
            }
            for mx in 0..mask.width {
                let px = (x + mask.x) as i64 + mx as i64;
                if px < 0 || px >= width {
                    continue;
                }

                let coverage = mask.coverage_at(mx, my) as u32;
                if coverage == 0 {
                    continue;
                }

                let dst = self.image.get_pixel_mut(px as u32, py as u32);
                let inv = 255 - coverage;
                for (d, s) in dst.0.iter_mut().zip(src) {
                    *d = ((s as u32 * coverage + *d as u32 * inv + 127) / 255) as u8;
                }
            }
        }
    }

    /// Draws one line of text with its origin (top-left, ascender line) at `(x, y)`
    ///
    /// Lines that sit wholly above or below the canvas are not rasterized.
    pub fn draw_text(&mut self, x: f32, y: f32, text: &str, face: &dyn Face, color: Color) {
        if y >= self.height() as f32 || y + face.line_height() <= 0.0 {
            return;
        }
        let (x, y) = (x.round() as i32, y.round() as i32);
        for mask in face.rasterize(text) {
            self.blend_mask(x, y, &mask, color);
        }
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tcover_fontdb::BuiltinFont;

    const BG: Color = Color::rgb(255, 248, 220);
    const INK: Color = Color::rgb(0, 0, 0);

    fn solid_mask(x: i32, y: i32, width: u32, height: u32) -> GlyphMask {
        GlyphMask {
            x,
            y,
            width,
            height,
            coverage: vec![255; (width * height) as usize],
        }
    }

    #[test]
    fn test_zero_sized_canvas_is_rejected() {
        assert!(Canvas::new(0, 10, BG).is_err());
        assert!(Canvas::new(10, 0, BG).is_err());
    }

    #[test]
    fn test_new_canvas_is_background() {
        let canvas = Canvas::new(4, 3, BG).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (4, 3));
        assert_eq!(canvas.pixel(3, 2), Some(BG));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_hline_thickness() {
        let mut canvas = Canvas::new(20, 20, BG).unwrap();
        canvas.hline(10, 2, 15, INK, 2);
        assert_eq!(canvas.pixel(2, 9), Some(INK));
        assert_eq!(canvas.pixel(15, 10), Some(INK));
        assert_eq!(canvas.pixel(16, 10), Some(BG));
        assert_eq!(canvas.pixel(5, 8), Some(BG));
        assert_eq!(canvas.pixel(5, 11), Some(BG));
    }

    #[test]
    fn test_vline_is_centered() {
        let mut canvas = Canvas::new(20, 20, BG).unwrap();
        canvas.vline(10, 0, 19, INK, 5);
        for x in 8..=12 {
            assert_eq!(canvas.pixel(x, 5), Some(INK));
        }
        assert_eq!(canvas.pixel(7, 5), Some(BG));
        assert_eq!(canvas.pixel(13, 5), Some(BG));
    }

    #[test]
    fn test_mask_is_clipped_at_edges() {
        let mut canvas = Canvas::new(10, 10, BG).unwrap();
        canvas.blend_mask(-2, 8, &solid_mask(0, 0, 4, 4), INK);
        assert_eq!(canvas.pixel(0, 8), Some(INK));
        assert_eq!(canvas.pixel(1, 9), Some(INK));
        assert_eq!(canvas.pixel(2, 9), Some(BG));

        // Entirely off canvas: nothing happens
        canvas.blend_mask(100, 100, &solid_mask(0, 0, 4, 4), INK);
    }

    #[test]
    fn test_partial_coverage_blends() {
        let mut canvas = Canvas::new(1, 1, Color::rgb(255, 255, 255)).unwrap();
        let mask = GlyphMask {
            x: 0,
            y: 0,
            width: 1,
            height: 1,
            coverage: vec![128],
        };
        canvas.blend_mask(0, 0, &mask, INK);
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(127, 127, 127)));
    }

    #[test]
    fn test_draw_text_with_builtin_face() {
        let mut canvas = Canvas::new(40, 20, BG).unwrap();
        canvas.draw_text(3.0, 4.0, "H I", &BuiltinFont::new(), INK);
        // The H stem starts at (3, 4 + 1)
        assert_eq!(canvas.pixel(3, 5), Some(INK));
        // The space leaves its cell empty
        assert_eq!(canvas.pixel(12, 5), Some(BG));
        // The I serif starts one pixel into its cell at x = 19
        assert_eq!(canvas.pixel(19, 5), Some(BG));
        assert_eq!(canvas.pixel(20, 5), Some(INK));
    }

    /// Counts how often it is asked for glyphs
    struct CountingFace(AtomicUsize);

    impl Face for CountingFace {
        fn name(&self) -> &str {
            "counting"
        }

        fn size(&self) -> f32 {
            10.0
        }

        fn line_height(&self) -> f32 {
            12.0
        }

        fn advance(&self, _ch: char) -> f32 {
            6.0
        }

        fn rasterize(&self, _text: &str) -> Vec<GlyphMask> {
            self.0.fetch_add(1, Ordering::SeqCst);
            vec![solid_mask(0, 0, 2, 2)]
        }
    }

    #[test]
    fn test_lines_off_canvas_are_not_rasterized() {
        let mut canvas = Canvas::new(20, 20, BG).unwrap();
        let face = CountingFace(AtomicUsize::new(0));

        canvas.draw_text(0.0, 20.0, "below", &face, INK);
        canvas.draw_text(0.0, -12.0, "above", &face, INK);
        assert_eq!(face.0.load(Ordering::SeqCst), 0);

        // Partly visible lines are still drawn
        canvas.draw_text(0.0, -1.0, "edge", &face, INK);
        assert_eq!(face.0.load(Ordering::SeqCst), 1);
        assert_eq!(canvas.pixel(0, 0), Some(INK));
    }
}
