//! Where fonts come from: loading and the fallback chain for tcover
//!
//! Covers are drawn with the first font file from a fixed list that loads
//! at the requested size. If none does, the [`BuiltinFont`] takes over, so
//! resolving a face never fails.
//!
//! ## Memory Management
//!
//! Fonts store their raw data and create a skrifa `FontRef` on demand for
//! parsing. TTC collections are read at face 0.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use skrifa::{
    instance::{LocationRef, Size},
    outline::DrawSettings,
    raw::TableProvider,
    GlyphId, MetadataProvider,
};

use tcover_core::{
    error::{FontLoadError, Result},
    types::{GlyphMask, TextBox},
    Face,
};

mod builtin;
mod outline;

pub use builtin::{BuiltinFont, BUILTIN_SIZE};

use outline::GlyphPathBuilder;

/// Font files tried in order by [`FontResolver::new`]
pub const DEFAULT_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Bold.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

/// An outline font from disk, scaled to one pixel size
pub struct Font {
    name: String,
    data: Vec<u8>,
    face_index: u32,
    size: f32,
    ascent: f32,
    descent: f32,
}

impl Font {
    /// Opens a font file at `size` pixels
    pub fn from_file(path: impl AsRef<Path>, size: f32) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)
            .map_err(|_| FontLoadError::FileNotFound(path.display().to_string()))?;

        Self::from_data(data, size).map(|font| font.with_name(path.display().to_string()))
    }

    /// Turns raw font bytes into a face at `size` pixels
    pub fn from_data(data: Vec<u8>, size: f32) -> Result<Self> {
        let face_index = 0;
        let font_ref =
            skrifa::FontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;

        // A usable font must have a head table and outlines we can draw
        font_ref.head().map_err(|_| FontLoadError::InvalidData)?;
        if font_ref.outline_glyphs().format().is_none() {
            return Err(FontLoadError::NoOutlines("no glyf, CFF or CFF2 table".into()).into());
        }

        let metrics = font_ref.metrics(Size::new(size), LocationRef::default());
        let (ascent, descent) = (metrics.ascent, metrics.descent);

        Ok(Font {
            name: "memory".to_string(),
            data,
            face_index,
            size,
            ascent,
            descent,
        })
    }

    fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// Creates a FontRef on demand for parsing operations
    fn font_ref(&self) -> Option<skrifa::FontRef<'_>> {
        skrifa::FontRef::from_index(&self.data, self.face_index).ok()
    }

    /// Unmapped characters fall back to `.notdef`
    fn glyph_id(font: &skrifa::FontRef<'_>, ch: char) -> GlyphId {
        font.charmap().map(ch).unwrap_or(GlyphId::NOTDEF)
    }
}

impl Face for Font {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn line_height(&self) -> f32 {
        self.ascent - self.descent
    }

    fn advance(&self, ch: char) -> f32 {
        self.font_ref()
            .and_then(|font| {
                let glyph_metrics = font.glyph_metrics(Size::new(self.size), LocationRef::default());
                glyph_metrics.advance_width(Self::glyph_id(&font, ch))
            })
            .unwrap_or(self.size / 2.0)
    }

    // Measures a whole string with one parse of the font
    fn bbox(&self, text: &str) -> TextBox {
        let right = match self.font_ref() {
            Some(font) => {
                let glyph_metrics = font.glyph_metrics(Size::new(self.size), LocationRef::default());
                text.chars()
                    .map(|ch| {
                        glyph_metrics
                            .advance_width(Self::glyph_id(&font, ch))
                            .unwrap_or(self.size / 2.0)
                    })
                    .sum()
            },
            None => text.chars().count() as f32 * self.size / 2.0,
        };

        TextBox {
            left: 0.0,
            top: 0.0,
            right,
            bottom: self.line_height(),
        }
    }

    fn rasterize(&self, text: &str) -> Vec<GlyphMask> {
        let Some(font) = self.font_ref() else {
            return Vec::new();
        };

        let size = Size::new(self.size);
        let glyph_metrics = font.glyph_metrics(size, LocationRef::default());
        let outlines = font.outline_glyphs();

        let mut masks = Vec::new();
        let mut pen_x = 0.0;
        for ch in text.chars() {
            let glyph_id = Self::glyph_id(&font, ch);
            let advance = glyph_metrics
                .advance_width(glyph_id)
                .unwrap_or(self.size / 2.0);

            if let Some(glyph) = outlines.get(glyph_id) {
                let mut builder = GlyphPathBuilder::new(pen_x, self.ascent);
                let settings = DrawSettings::unhinted(size, LocationRef::default());
                match glyph.draw(settings, &mut builder) {
                    Ok(_) => masks.extend(builder.into_mask()),
                    Err(e) => log::debug!("Skipping glyph for {:?} in {}: {:?}", ch, self.name, e),
                }
            }

            pen_x += advance;
        }
        masks
    }
}

/// Picks the face a cover is drawn with
///
/// Candidates are tried in order; the first file that exists and loads at
/// the requested size wins. Nothing is cached: every call starts over.
#[derive(Debug, Clone)]
pub struct FontResolver {
    candidates: Vec<PathBuf>,
}

impl FontResolver {
    /// Resolver over [`DEFAULT_FONT_PATHS`]
    pub fn new() -> Self {
        Self::with_candidates(DEFAULT_FONT_PATHS.iter().copied())
    }

    /// Resolver over an explicit, ordered candidate list
    pub fn with_candidates<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Returns a face for `size` pixels; falls back to [`BuiltinFont`]
    pub fn resolve(&self, size: u32) -> Arc<dyn Face> {
        for path in &self.candidates {
            if !path.exists() {
                log::debug!("Font candidate {} does not exist", path.display());
                continue;
            }

            match Font::from_file(path, size as f32) {
                Ok(font) => {
                    log::debug!("Using font {} at {}px", path.display(), size);
                    return Arc::new(font);
                },
                Err(e) => {
                    log::debug!("Font candidate {} failed to load: {}", path.display(), e);
                },
            }
        }

        log::warn!(
            "No usable font among {} candidates, falling back to the built-in {}px face",
            self.candidates.len(),
            BUILTIN_SIZE
        );
        Arc::new(BuiltinFont::new())
    }
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new()
    }
}
