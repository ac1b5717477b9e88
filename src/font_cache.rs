use crate::{
    canvas::Canvas,
    font::{Font, FontSpec, TextMeasure},
    raster,
    render::{GlyphRenderer, TextStyle},
    Px, RenderError,
};
use id_arena::{Arena, Id};
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Keeps every font file it has been asked for parsed in memory, so that repeated
/// measurements during fitting and wrapping don't re-read the file each time.
///
/// Fonts are stored once per canonical path regardless of size, so `./lato.ttf` and
/// `lato.ttf` share an entry. Sizes are applied on every measurement so the cache never
/// changes what is measured.
#[derive(Default)]
pub struct FontCache {
    pub fonts: Arena<Font>,
    by_path: HashMap<PathBuf, Id<Font>>,
}

impl FontCache {
    /// An empty cache; fonts are read on first use
    pub fn new() -> FontCache {
        FontCache::default()
    }

    /// Add an already-parsed font under the given path. Any later request for that path
    /// will use this font rather than reading the file.
    pub fn insert<P: Into<PathBuf>>(&mut self, path: P, font: Font) -> Id<Font> {
        let id = self.fonts.alloc(font);
        self.by_path.insert(cache_key(&path.into()), id);
        id
    }

    /// Get the id of the font at `path`, loading it from disk the first time
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<Id<Font>, RenderError> {
        let path = path.as_ref();
        if let Some(id) = self.by_path.get(&cache_key(path)) {
            return Ok(*id);
        }

        let font = Font::load_from_disk(path)?;
        debug!(
            "loaded font {} from {}",
            font.name().unwrap_or_else(|| "<unnamed>".to_string()),
            path.display()
        );
        Ok(self.insert(path, font))
    }

    /// Get the font at `path`, loading it from disk the first time
    pub fn font<P: AsRef<Path>>(&mut self, path: P) -> Result<&Font, RenderError> {
        let id = self.load(path)?;
        Ok(&self.fonts[id])
    }

    /// The number of distinct font files held
    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}

/// Paths that can't be resolved (usually because the file is missing) are kept as given
fn cache_key(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

impl TextMeasure for FontCache {
    fn measure(&mut self, font: &FontSpec, text: &str) -> Result<(Px, Px), RenderError> {
        let size = font.px();
        Ok(self.font(&font.path)?.measure(text, size))
    }
}

impl GlyphRenderer for FontCache {
    fn draw_text(
        &mut self,
        canvas: &mut Canvas,
        at: (Px, Px),
        text: &str,
        font: &FontSpec,
        style: &TextStyle,
    ) -> Result<(), RenderError> {
        let size = font.px();
        let face = self.font(&font.path)?;
        let mask = raster::rasterize_line(face, text, size);
        raster::paint(canvas, &mask, at, style);
        Ok(())
    }
}
