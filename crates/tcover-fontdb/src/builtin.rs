//! The face that is always there
//!
//! When no font file loads, covers are still drawn with this fixed-size
//! face: the 8×8 bitmap glyphs from `font8x8` on an 8 px grid. Basic Latin
//! and Latin-1 are covered; anything else is drawn as an empty box.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use tcover_core::{types::GlyphMask, Face};

/// Pixel size of the built-in face, whatever size was asked for
pub const BUILTIN_SIZE: f32 = 8.0;

const CELL: u32 = 8;
const ADVANCE: f32 = CELL as f32;
const LINE_HEIGHT: f32 = 10.0;
/// Glyph top, measured down from the ascender line
const GLYPH_TOP: i32 = 1;

/// Drawn for characters the bitmap font lacks
const MISSING_GLYPH: [u8; 8] = [0x7E, 0x42, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x00];

/// Fixed-size fallback face
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinFont;

impl BuiltinFont {
    pub fn new() -> Self {
        Self
    }

    fn bitmap(ch: char) -> [u8; 8] {
        BASIC_FONTS
            .get(ch)
            .or_else(|| LATIN_FONTS.get(ch))
            .unwrap_or(MISSING_GLYPH)
    }

    /// Rows top to bottom, bit 0 is the leftmost pixel
    fn glyph_mask(x: i32, rows: [u8; 8]) -> Option<GlyphMask> {
        if rows.iter().all(|&row| row == 0) {
            return None;
        }

        let coverage = rows
            .iter()
            .flat_map(|&row| (0..CELL).map(move |bit| if (row >> bit) & 1 == 1 { 255 } else { 0 }))
            .collect();

        Some(GlyphMask {
            x,
            y: GLYPH_TOP,
            width: CELL,
            height: CELL,
            coverage,
        })
    }
}

impl Face for BuiltinFont {
    fn name(&self) -> &str {
        "builtin"
    }

    fn size(&self) -> f32 {
        BUILTIN_SIZE
    }

    fn line_height(&self) -> f32 {
        LINE_HEIGHT
    }

    fn advance(&self, _ch: char) -> f32 {
        ADVANCE
    }

    fn rasterize(&self, text: &str) -> Vec<GlyphMask> {
        text.chars()
            .enumerate()
            .filter(|(_, ch)| !ch.is_whitespace())
            .filter_map(|(i, ch)| Self::glyph_mask((i as f32 * ADVANCE) as i32, Self::bitmap(ch)))
            .collect()
    }
}
