use crate::{
    canvas::Canvas,
    colours,
    font::{FontSpec, TextMeasure},
    Colour, Px, RenderError,
};
use std::str::FromStr;

/// One axis of a text position: either a fixed pixel offset, or centred on the canvas
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Coord {
    At(Px),
    /// Centre the measured text on the canvas along this axis
    Center,
}

impl Coord {
    /// Resolve against the canvas extent and the text's measured extent along the same axis
    pub fn resolve(self, canvas_extent: Px, text_extent: Px) -> Px {
        match self {
            Coord::At(v) => v,
            Coord::Center => (canvas_extent - text_extent) / 2.0,
        }
    }
}

impl From<Px> for Coord {
    fn from(v: Px) -> Self {
        Coord::At(v)
    }
}

impl From<f32> for Coord {
    fn from(v: f32) -> Self {
        Coord::At(Px(v))
    }
}

impl FromStr for Coord {
    type Err = std::num::ParseFloatError;

    /// Accepts the literal token `center`, or a pixel offset
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "center" {
            Ok(Coord::Center)
        } else {
            s.parse::<f32>().map(Coord::from)
        }
    }
}

/// Where to put a line of text: the top-left corner of its line box
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Position {
    pub x: Coord,
    pub y: Coord,
}

impl Position {
    pub fn new<X: Into<Coord>, Y: Into<Coord>>(x: X, y: Y) -> Position {
        Position {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Centred on both axes
    pub fn centered() -> Position {
        Position::new(Coord::Center, Coord::Center)
    }
}

impl From<(f32, f32)> for Position {
    fn from(p: (f32, f32)) -> Self {
        Position::new(p.0, p.1)
    }
}

impl From<(Px, Px)> for Position {
    fn from(p: (Px, Px)) -> Self {
        Position::new(p.0, p.1)
    }
}

/// How text is painted: a fill colour and an optional outline
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub colour: Colour,
    pub stroke_colour: Colour,
    /// Width of the outline in pixels; 0 draws no outline
    pub stroke_width: u32,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            colour: colours::BLACK,
            stroke_colour: colours::BLACK,
            stroke_width: 0,
        }
    }
}

impl TextStyle {
    /// The same style with a different fill colour
    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    /// The same style outlined `width` pixels wide in `colour`
    pub fn with_stroke(mut self, colour: Colour, width: u32) -> Self {
        self.stroke_colour = colour;
        self.stroke_width = width;
        self
    }
}

/// Something that can both measure and draw text onto a [Canvas]
pub trait GlyphRenderer: TextMeasure {
    /// Draw `text` on a single line with the top-left corner of its line box at `at`.
    /// The baseline sits the font's ascent below `at`.
    fn draw_text(
        &mut self,
        canvas: &mut Canvas,
        at: (Px, Px),
        text: &str,
        font: &FontSpec,
        style: &TextStyle,
    ) -> Result<(), RenderError>;
}

/// Write a single line of text onto the canvas, resolving [Coord::Center] on either axis
/// against the canvas size and the measured size of the whole string.
///
/// Returns the measured `(width, height)` of the text.
pub fn write_text<R: GlyphRenderer>(
    renderer: &mut R,
    canvas: &mut Canvas,
    position: Position,
    text: &str,
    font: &FontSpec,
    style: &TextStyle,
) -> Result<(Px, Px), RenderError> {
    let (width, height) = renderer.measure(font, text)?;
    let (canvas_width, canvas_height) = canvas.size();

    let x = position.x.resolve(canvas_width, width);
    let y = position.y.resolve(canvas_height, height);

    renderer.draw_text(canvas, (x, y), text, font, style)?;
    Ok((width, height))
}
