//! Deterministic stand-ins for real fonts, and helpers for locating test resources.

use crate::{Canvas, FontSpec, GlyphRenderer, Px, RenderError, TextMeasure, TextStyle};
use std::path::PathBuf;

/// How [FixedAdvance] measures widths
#[derive(Debug, Copy, Clone)]
pub enum Advance {
    /// Every character, spaces included, is this wide
    PerChar(f32),
    /// Every whitespace-separated word, with its following space, is this wide
    PerWord(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Draw {
    pub at: (Px, Px),
    pub text: String,
    pub size: u32,
    pub style: TextStyle,
}

/// A measurer and renderer with made-up metrics that records what it is asked to draw
pub struct FixedAdvance {
    pub advance: Advance,
    pub line_height: f32,
    /// Overrides `line_height` when set, for tests where line heights differ
    pub height_of: Option<fn(&str) -> f32>,
    pub draws: Vec<Draw>,
    pub measurements: usize,
}

impl FixedAdvance {
    /// Widths grow by `advance` per character; every non-empty line is `height` tall
    pub fn new(advance: f32, height: f32) -> FixedAdvance {
        FixedAdvance {
            advance: Advance::PerChar(advance),
            line_height: height,
            height_of: None,
            draws: Vec::new(),
            measurements: 0,
        }
    }

    /// Widths grow by `advance` per word
    pub fn per_word(advance: f32, height: f32) -> FixedAdvance {
        let mut fixed = FixedAdvance::new(0.0, height);
        fixed.advance = Advance::PerWord(advance);
        fixed
    }

    pub fn drawn_lines(&self) -> Vec<&str> {
        self.draws.iter().map(|d| d.text.as_str()).collect()
    }
}

impl TextMeasure for FixedAdvance {
    fn measure(&mut self, font: &FontSpec, text: &str) -> Result<(Px, Px), RenderError> {
        self.measurements += 1;
        if text.is_empty() {
            return Ok((Px::ZERO, Px::ZERO));
        }
        // sizes scale linearly from a nominal 10pt
        let scale = font.size as f32 / 10.0;
        let width = match self.advance {
            Advance::PerChar(w) => text.chars().count() as f32 * w,
            Advance::PerWord(w) => text.split_whitespace().count() as f32 * w,
        };
        let height = self.height_of.map_or(self.line_height, |f| f(text));
        Ok((Px(width * scale), Px(height * scale)))
    }
}

impl GlyphRenderer for FixedAdvance {
    fn draw_text(
        &mut self,
        _canvas: &mut Canvas,
        at: (Px, Px),
        text: &str,
        font: &FontSpec,
        style: &TextStyle,
    ) -> Result<(), RenderError> {
        self.draws.push(Draw {
            at,
            text: text.to_string(),
            size: font.size,
            style: *style,
        });
        Ok(())
    }
}

/// A TrueType font installed on the machine running the tests, if one can be found.
/// Set `QUOTE_CARD_TEST_FONT` to point at a specific file.
pub fn system_font() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("QUOTE_CARD_TEST_FONT") {
        return Some(PathBuf::from(path));
    }

    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .find(|p| p.is_file())
}

/// A unique path in the OS temp directory for a test to write to
pub fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("quote-card-{}-{}", std::process::id(), name))
}
