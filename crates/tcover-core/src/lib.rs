//! tcover core: the shared vocabulary of the cover pipeline
//!
//! A cover is made in four steps:
//!
//! 1. **Font Resolution** - The first loadable font from a fixed list, or a built-in face
//! 2. **Wrapping** - The title is split into lines that fit the margins
//! 3. **Drawing** - Paper lines, the accent bar, then the text
//! 4. **Export** - The canvas is encoded to JPEG and written out
//!
//! This crate holds the types every step agrees on, the [`Face`] and
//! [`Exporter`] contracts and the error taxonomy in [`error`].

pub mod error;
pub mod traits;

pub use error::{CoverError, Result};
pub use traits::{Exporter, Face};

/// Fixed geometry of every cover
pub mod consts {
    /// Canvas width in pixels (9:16 portrait)
    pub const CANVAS_WIDTH: u32 = 900;
    /// Canvas height in pixels
    pub const CANVAS_HEIGHT: u32 = 1600;
    /// Horizontal margin kept free on each side of the title
    pub const MARGIN: u32 = 120;
    /// Widest a title line may measure
    pub const MAX_LINE_WIDTH: f32 = (CANVAS_WIDTH - MARGIN * 2) as f32;

    pub const DEFAULT_FONT_SIZE: u32 = 90;
    /// Largest accepted font size; one glyph at this size already spans the canvas
    pub const MAX_FONT_SIZE: u32 = 1000;
    pub const DEFAULT_OUTPUT: &str = "/tmp/title_cover.jpg";
    pub const JPEG_QUALITY: u8 = 90;

    /// Added to the font size between title lines
    pub const TITLE_LINE_PADDING: u32 = 15;
    /// Added to the font size per title line when placing the subtitle
    pub const SUBTITLE_LINE_PADDING: u32 = 20;
    /// Extra gap between the title block and the subtitle
    pub const SUBTITLE_GAP: u32 = 60;

    /// First paper line
    pub const RULE_START_Y: u32 = 140;
    /// Paper lines stop before `CANVAS_HEIGHT - RULE_END_INSET`
    pub const RULE_END_INSET: u32 = 100;
    pub const RULE_SPACING: u32 = 45;
    pub const RULE_LEFT: u32 = 100;
    pub const RULE_RIGHT_INSET: u32 = 50;
    pub const RULE_WIDTH: u32 = 2;

    pub const ACCENT_X: u32 = 90;
    /// The accent bar runs from this inset to `CANVAS_HEIGHT - ACCENT_INSET`
    pub const ACCENT_INSET: u32 = 110;
    pub const ACCENT_WIDTH: u32 = 5;
}

/// The data structures that flow between the stages
pub mod types {
    use std::fmt;
    use std::path::{Path, PathBuf};
    use std::str::FromStr;

    use crate::consts::{DEFAULT_FONT_SIZE, DEFAULT_OUTPUT};
    use crate::error::CoverError;

    /// An opaque RGB color
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Color {
        pub r: u8,
        pub g: u8,
        pub b: u8,
    }

    impl Color {
        pub const BLACK: Color = Color::rgb(0, 0, 0);
        /// Light yellow note paper
        pub const PAPER: Color = Color::rgb(255, 248, 220);
        /// Faint ruling on the paper
        pub const RULE: Color = Color::rgb(240, 235, 220);
        /// Red margin line
        pub const ACCENT: Color = Color::rgb(200, 50, 50);

        pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
            Self { r, g, b }
        }

        pub fn to_array(self) -> [u8; 3] {
            [self.r, self.g, self.b]
        }
    }

    impl From<(u8, u8, u8)> for Color {
        fn from((r, g, b): (u8, u8, u8)) -> Self {
            Color::rgb(r, g, b)
        }
    }

    impl fmt::Display for Color {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }

    /// Accepts `#RRGGBB`, `RRGGBB` or `r,g,b`
    impl FromStr for Color {
        type Err = CoverError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let s = s.trim();
            let invalid = || CoverError::Config(format!("Invalid color: {s:?}"));

            if s.contains(',') {
                let parts = s
                    .split(',')
                    .map(|part| part.trim().parse::<u8>().map_err(|_| invalid()))
                    .collect::<Result<Vec<_>, _>>()?;
                return match parts.as_slice() {
                    [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
                    _ => Err(invalid()),
                };
            }

            let hex = s.strip_prefix('#').unwrap_or(s);
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
        }
    }

    /// Everything about a cover's look that a caller may change
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CoverStyle {
        /// Requested font size in pixels
        pub font_size: u32,
        pub background: Color,
        pub text: Color,
        pub accent: Color,
    }

    impl Default for CoverStyle {
        fn default() -> Self {
            Self {
                font_size: DEFAULT_FONT_SIZE,
                background: Color::PAPER,
                text: Color::BLACK,
                accent: Color::ACCENT,
            }
        }
    }

    /// One cover to render
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RenderRequest {
        title: String,
        subtitle: Option<String>,
        output: PathBuf,
        style: CoverStyle,
    }

    impl RenderRequest {
        /// A request with the default style, no subtitle and the default output path
        pub fn new(title: impl Into<String>) -> Self {
            Self {
                title: title.into(),
                subtitle: None,
                output: PathBuf::from(DEFAULT_OUTPUT),
                style: CoverStyle::default(),
            }
        }

        /// An empty subtitle is the same as none
        pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
            let subtitle = subtitle.into();
            self.subtitle = (!subtitle.is_empty()).then_some(subtitle);
            self
        }

        pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
            self.output = output.into();
            self
        }

        pub fn with_style(mut self, style: CoverStyle) -> Self {
            self.style = style;
            self
        }

        pub fn title(&self) -> &str {
            &self.title
        }

        pub fn subtitle(&self) -> Option<&str> {
            self.subtitle.as_deref()
        }

        pub fn output(&self) -> &Path {
            &self.output
        }

        pub fn style(&self) -> &CoverStyle {
            &self.style
        }
    }

    /// Measured extent of a line of text, relative to its origin
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct TextBox {
        pub left: f32,
        pub top: f32,
        pub right: f32,
        pub bottom: f32,
    }

    impl TextBox {
        pub fn width(&self) -> f32 {
            self.right - self.left
        }
    }

    /// Anti-aliased coverage for one glyph, placed relative to the text origin
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GlyphMask {
        pub x: i32,
        pub y: i32,
        pub width: u32,
        pub height: u32,
        /// Row-major, one byte per pixel, 0 = empty, 255 = fully covered
        pub coverage: Vec<u8>,
    }

    impl GlyphMask {
        pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
            self.coverage
                .get((y * self.width + x) as usize)
                .copied()
                .unwrap_or(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::consts::*;
    use super::types::*;

    #[test]
    fn test_color_parsing() {
        assert_eq!("#c83232".parse::<Color>().unwrap(), Color::ACCENT);
        assert_eq!("FFF8DC".parse::<Color>().unwrap(), Color::PAPER);
        assert_eq!("0, 0, 0".parse::<Color>().unwrap(), Color::BLACK);
        assert!("#12345".parse::<Color>().is_err());
        assert!("300,0,0".parse::<Color>().is_err());
        assert!("1,2".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_display_round_trips() {
        let color = Color::rgb(1, 171, 255);
        assert_eq!(color.to_string(), "#01abff");
        assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
    }

    #[test]
    fn test_request_defaults() {
        let request = RenderRequest::new("Hello");
        assert_eq!(request.title(), "Hello");
        assert_eq!(request.subtitle(), None);
        assert_eq!(request.output().to_str(), Some(DEFAULT_OUTPUT));
        assert_eq!(request.style().font_size, 90);
        assert_eq!(request.style().background, Color::rgb(255, 248, 220));
    }

    #[test]
    fn test_empty_subtitle_is_none() {
        assert_eq!(RenderRequest::new("t").with_subtitle("").subtitle(), None);
        assert_eq!(
            RenderRequest::new("t").with_subtitle("sub").subtitle(),
            Some("sub")
        );
    }

    #[test]
    fn test_line_budget() {
        assert_eq!(MAX_LINE_WIDTH, 660.0);
        assert!(DEFAULT_FONT_SIZE <= MAX_FONT_SIZE);
    }

    #[test]
    fn test_mask_coverage_out_of_range() {
        let mask = GlyphMask {
            x: 0,
            y: 0,
            width: 2,
            height: 1,
            coverage: vec![10, 20],
        };
        assert_eq!(mask.coverage_at(1, 0), 20);
        assert_eq!(mask.coverage_at(0, 5), 0);
    }
}
