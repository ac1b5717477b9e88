use super::wrap::wrap_words;
use crate::{
    render::{write_text, GlyphRenderer, Position, TextStyle},
    Canvas, FontSpec, Px, RenderError, TextMeasure,
};
use serde::{Deserialize, Serialize};

/// How far each line of a text box advances down from the previous one
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineHeight {
    /// Every line advances by the height measured for the last candidate line tried while
    /// wrapping. Matches the pixel output of older quote cards.
    LastCandidate,
    /// Every line advances by its own measured height
    #[default]
    PerLine,
}

/// How a text box is laid out beyond its width and font
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct TextBoxOptions {
    /// Accepted for compatibility; lines are always centred, the last one included
    pub justify_last_line: bool,
    /// How far each line advances below the one before it
    pub line_height: LineHeight,
}

/// A wrapped line and where it goes
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    /// Top-left corner of the line box
    pub at: (Px, Px),
    /// The measured size of the line
    pub size: (Px, Px),
}

/// Wrapped, positioned lines of a text box
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextBoxLayout {
    pub lines: Vec<PlacedLine>,
    /// `(box_width, vertical extent)`. The width is always the requested box width.
    pub size: (Px, Px),
}

/// Wrap `text` into `box_width` and centre each line horizontally within the box, without
/// drawing anything.
///
/// Lines are stacked downward from `origin`; the cursor advances by a row height *before*
/// each line is placed, so the first line's box starts one row below `origin.1`. The
/// returned height is how far the cursor moved in total. Empty text places nothing and
/// measures `(box_width, 0)`.
pub fn layout_text_box<M: TextMeasure>(
    measure: &mut M,
    origin: (Px, Px),
    text: &str,
    box_width: Px,
    font: &FontSpec,
    options: TextBoxOptions,
) -> Result<TextBoxLayout, RenderError> {
    let wrapped = wrap_words(measure, font, text, box_width)?;

    let mut lines: Vec<PlacedLine> = Vec::with_capacity(wrapped.lines.len());
    let mut cursor = origin.1;
    for line in wrapped.lines.into_iter() {
        let size = measure.measure(font, &line)?;
        cursor += match options.line_height {
            LineHeight::LastCandidate => wrapped.last_candidate_height,
            LineHeight::PerLine => size.1,
        };
        let x = (origin.0 + (box_width - size.0) / 2.0).trunc();

        lines.push(PlacedLine {
            text: line,
            at: (x, cursor),
            size,
        });
    }

    Ok(TextBoxLayout {
        lines,
        size: (box_width, cursor - origin.1),
    })
}

/// Wrap `text` into a box `box_width` wide whose top-left corner is `origin`, and draw each
/// line centred within the box. See [layout_text_box] for how lines are placed.
///
/// Returns `(box_width, vertical extent)`.
pub fn write_text_box<R: GlyphRenderer>(
    renderer: &mut R,
    canvas: &mut Canvas,
    origin: (Px, Px),
    text: &str,
    box_width: Px,
    font: &FontSpec,
    style: &TextStyle,
    options: TextBoxOptions,
) -> Result<(Px, Px), RenderError> {
    let layout = layout_text_box(renderer, origin, text, box_width, font, options)?;
    for line in layout.lines.iter() {
        write_text(
            renderer,
            canvas,
            Position::from(line.at),
            &line.text,
            font,
            style,
        )?;
    }
    Ok(layout.size)
}
