//! Glyph outlines to coverage masks
//!
//! skrifa hands us outlines in y-up font space. The pen flips them into the
//! y-down text space on the way in, so zeno can rasterize them as-is.

use kurbo::Shape;
use tcover_core::types::GlyphMask;

/// Glyphs whose bounds cover more pixels than this are not rasterized
const MAX_MASK_PIXELS: u64 = 16 * 1024 * 1024;

/// Builds a zeno path string and a kurbo path for bounds in one pass
pub(crate) struct GlyphPathBuilder {
    commands: Vec<String>,
    kurbo_path: kurbo::BezPath,
    origin_x: f32,
    baseline: f32,
}

impl GlyphPathBuilder {
    /// `origin_x` is the pen position, `baseline` the distance from the
    /// ascender line down to the baseline
    pub(crate) fn new(origin_x: f32, baseline: f32) -> Self {
        Self {
            commands: Vec::new(),
            kurbo_path: kurbo::BezPath::new(),
            origin_x,
            baseline,
        }
    }

    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin_x + x, self.baseline - y)
    }

    /// Rasterizes the collected outline, `None` for glyphs without ink
    pub(crate) fn into_mask(self) -> Option<GlyphMask> {
        use zeno::Mask;

        if self.kurbo_path.elements().is_empty() {
            return None;
        }

        let bbox = self.kurbo_path.bounding_box();
        if !(bbox.x0.is_finite() && bbox.y0.is_finite() && bbox.x1.is_finite() && bbox.y1.is_finite())
        {
            return None;
        }

        let x0 = bbox.x0.floor();
        let y0 = bbox.y0.floor();
        let width = ((bbox.x1.ceil() - x0) as u32).max(1);
        let height = ((bbox.y1.ceil() - y0) as u32).max(1);

        let pixels = u64::from(width) * u64::from(height);
        if pixels > MAX_MASK_PIXELS {
            log::debug!("Skipping {}x{} glyph mask", width, height);
            return None;
        }

        let path_data = self.commands.join(" ");
        let mut coverage = vec![0u8; pixels as usize];
        Mask::new(path_data.as_str())
            .size(width, height)
            .offset((-x0 as i32, -y0 as i32))
            .render_into(&mut coverage, None);

        if coverage.iter().all(|&c| c == 0) {
            return None;
        }

        Some(GlyphMask {
            x: x0 as i32,
            y: y0 as i32,
            width,
            height,
            coverage,
        })
    }
}

impl skrifa::outline::OutlinePen for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.commands.push(format!("M {:.2},{:.2}", x, y));
        self.kurbo_path.move_to((x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.commands.push(format!("L {:.2},{:.2}", x, y));
        self.kurbo_path.line_to((x as f64, y as f64));
    }

    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        let (cx, cy) = self.map(cx, cy);
        let (x, y) = self.map(x, y);
        self.commands
            .push(format!("Q {:.2},{:.2} {:.2},{:.2}", cx, cy, x, y));
        self.kurbo_path
            .quad_to((cx as f64, cy as f64), (x as f64, y as f64));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (cx1, cy1) = self.map(cx1, cy1);
        let (x, y) = self.map(x, y);
        self.commands.push(format!(
            "C {:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            cx0, cy0, cx1, cy1, x, y
        ));
        self.kurbo_path.curve_to(
            (cx0 as f64, cy0 as f64),
            (cx1 as f64, cy1 as f64),
            (x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.commands.push("Z".to_string());
        self.kurbo_path.close_path();
    }
}
