use crate::{Px, RenderError};
use ab_glyph::FontArc;
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use std::path::{Path, PathBuf};

/// A parsed font object. Fonts can be TTF or OTF fonts; only the first face of a
/// collection is used.
///
/// Sizes passed to the metric functions are point sizes, interpreted as pixels per em.
/// Glyph outlines are parsed once at load time and kept alongside the face.
pub struct Font {
    pub face: OwnedFace,
    outlines: FontArc,
}

/// A glyph positioned along a single line of text
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PositionedGlyph {
    pub id: GlyphId,
    /// Distance of the glyph's pen position from the start of the line
    pub x: Px,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, RenderError> {
        let face = OwnedFace::from_vec(bytes.clone(), 0)?;
        let outlines = FontArc::try_from_vec(bytes)?;

        Ok(Font { face, outlines })
    }

    /// Read and parse a font file
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Font, RenderError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::load(bytes)
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn find_name(&self, name_id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the full name of the font, if the font carries one
    pub fn name(&self) -> Option<String> {
        self.find_name(owned_ttf_parser::name_id::FULL_NAME)
    }

    fn scaling(&self, size: Px) -> f32 {
        size.0 / self.face().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Px) -> Px {
        Px(self.scaling(size) * self.face().ascender() as f32)
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Px) -> Px {
        Px(self.scaling(size) * self.face().descender() as f32)
    }

    /// Glyph for `ch`, falling back to the replacement character, then `?`, then `.notdef`
    pub fn glyph_id(&self, ch: char) -> GlyphId {
        let face = self.face();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
            .unwrap_or(GlyphId(0))
    }

    fn kerning(&self, left: GlyphId, right: GlyphId) -> i16 {
        let Some(kern) = self.face().tables().kern else {
            return 0;
        };
        kern.subtables
            .into_iter()
            .filter(|st| st.horizontal && !st.variable && !st.has_cross_stream)
            .find_map(|st| st.glyphs_kerning(left, right))
            .unwrap_or(0)
    }

    /// Lay out `text` along a single line, returning each glyph with its pen offset
    /// together with the total advance of the line
    pub fn glyph_positions(&self, text: &str, size: Px) -> (Vec<PositionedGlyph>, Px) {
        let scaling = self.scaling(size);
        let face = self.face();

        let mut glyphs: Vec<PositionedGlyph> = Vec::with_capacity(text.len());
        let mut pen: f32 = 0.0;
        let mut previous: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = self.glyph_id(ch);
            if let Some(prev) = previous {
                pen += self.kerning(prev, id) as f32 * scaling;
            }
            glyphs.push(PositionedGlyph { id, x: Px(pen) });
            pen += face.glyph_hor_advance(id).unwrap_or_default() as f32 * scaling;
            previous = Some(id);
        }

        (glyphs, Px(pen))
    }

    /// Measure the box `text` occupies on a single line at the given size, in whole pixels.
    /// The width is the pen advance of the whole run; the height is the font's ascent to
    /// descent span, which does not depend on the glyphs. Empty text measures `(0, 0)`.
    pub fn measure(&self, text: &str, size: Px) -> (Px, Px) {
        if text.is_empty() {
            return (Px::ZERO, Px::ZERO);
        }
        let (_, advance) = self.glyph_positions(text, size);
        let height = self.ascent(size) - self.descent(size);
        (advance.ceil(), height.ceil())
    }

    /// The font's glyph outlines, for rasterizing
    pub fn outlines(&self) -> &FontArc {
        &self.outlines
    }
}

/// A font file together with the point size to use it at
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontSpec {
    pub path: PathBuf,
    pub size: u32,
}

impl FontSpec {
    /// The font file at `path`, set at `size` points
    pub fn new<P: Into<PathBuf>>(path: P, size: u32) -> FontSpec {
        FontSpec {
            path: path.into(),
            size,
        }
    }

    /// The same font file at a different size
    pub fn with_size(&self, size: u32) -> FontSpec {
        FontSpec {
            path: self.path.clone(),
            size,
        }
    }

    /// The size as pixels per em
    pub fn px(&self) -> Px {
        Px(self.size as f32)
    }
}

/// Anything that can tell how large a string renders in a given font
pub trait TextMeasure {
    /// Measure `text` on a single line, returning `(width, height)` in pixels.
    /// The same font and text must always measure the same.
    fn measure(&mut self, font: &FontSpec, text: &str) -> Result<(Px, Px), RenderError>;
}
