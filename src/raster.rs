//! Turning a line of text into pixel coverage and painting it onto a canvas.

use crate::{font::Font, render::TextStyle, Canvas, Px};
use ab_glyph::{point, Font as _, GlyphId, PxScale};

/// Per-pixel coverage (0.0 to 1.0) of a rasterized line of text, positioned relative
/// to the top-left corner of the line box
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageMask {
    /// Offset of the mask's first column from the left of the line box
    pub left: i64,
    /// Offset of the mask's first row from the top of the line box
    pub top: i64,
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<f32>,
}

impl CoverageMask {
    /// A mask covering nothing
    pub fn empty() -> CoverageMask {
        CoverageMask {
            left: 0,
            top: 0,
            width: 0,
            height: 0,
            coverage: Vec::new(),
        }
    }

    fn new(left: i64, top: i64, width: usize, height: usize) -> CoverageMask {
        CoverageMask {
            left,
            top,
            width,
            height,
            coverage: vec![0.0; width * height],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Coverage at `(x, y)` within the mask; panics outside it
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.coverage[y * self.width + x]
    }

    fn accumulate(&mut self, x: usize, y: usize, c: f32) {
        let cell = &mut self.coverage[y * self.width + x];
        *cell = (*cell + c).min(1.0);
    }

    /// Grow the mask outwards by a disc of `radius` pixels: every output pixel takes the
    /// strongest coverage found within `radius` of it. This is the outline drawn for a
    /// text stroke.
    pub fn dilate(&self, radius: u32) -> CoverageMask {
        if radius == 0 || self.is_empty() {
            return self.clone();
        }

        let r = radius as i64;
        let offsets: Vec<(i64, i64)> = (-r..=r)
            .flat_map(|dy| (-r..=r).map(move |dx| (dx, dy)))
            .filter(|(dx, dy)| dx * dx + dy * dy <= r * r)
            .collect();

        let mut out = CoverageMask::new(
            self.left - r,
            self.top - r,
            self.width + 2 * radius as usize,
            self.height + 2 * radius as usize,
        );
        for y in 0..out.height as i64 {
            for x in 0..out.width as i64 {
                let mut strongest: f32 = 0.0;
                for (dx, dy) in offsets.iter() {
                    // position in the source mask
                    let sx = x - r + dx;
                    let sy = y - r + dy;
                    if sx < 0 || sy < 0 || sx >= self.width as i64 || sy >= self.height as i64 {
                        continue;
                    }
                    strongest = strongest.max(self.get(sx as usize, sy as usize));
                    if strongest >= 1.0 {
                        break;
                    }
                }
                out.coverage[y as usize * out.width + x as usize] = strongest;
            }
        }
        out
    }
}

/// Rasterize `text` as a single line at `size`, with the line box's top-left corner at
/// the origin and the baseline `ascent` below it.
pub fn rasterize_line(font: &Font, text: &str, size: Px) -> CoverageMask {
    if text.is_empty() {
        return CoverageMask::empty();
    }

    let outlines = font.outlines();
    // ab_glyph scales so that ascent - descent spans the given pixel height
    let scale = PxScale::from((font.ascent(size) - font.descent(size)).0);
    let baseline = font.ascent(size).0;

    let (glyphs, _) = font.glyph_positions(text, size);
    let outlined: Vec<_> = glyphs
        .iter()
        .filter_map(|g| {
            let glyph = GlyphId(g.id.0).with_scale_and_position(scale, point(g.x.0, baseline));
            outlines.outline_glyph(glyph)
        })
        .collect();
    if outlined.is_empty() {
        return CoverageMask::empty();
    }

    let min_x = outlined.iter().map(|g| g.px_bounds().min.x).fold(f32::MAX, f32::min);
    let min_y = outlined.iter().map(|g| g.px_bounds().min.y).fold(f32::MAX, f32::min);
    let max_x = outlined.iter().map(|g| g.px_bounds().max.x).fold(f32::MIN, f32::max);
    let max_y = outlined.iter().map(|g| g.px_bounds().max.y).fold(f32::MIN, f32::max);

    let left = min_x.floor() as i64;
    let top = min_y.floor() as i64;
    let width = (max_x.ceil() as i64 - left).max(0) as usize;
    let height = (max_y.ceil() as i64 - top).max(0) as usize;
    let mut mask = CoverageMask::new(left, top, width, height);

    for glyph in outlined.iter() {
        let bounds = glyph.px_bounds();
        let gx = bounds.min.x as i64 - left;
        let gy = bounds.min.y as i64 - top;
        glyph.draw(|x, y, c| {
            let mx = gx + x as i64;
            let my = gy + y as i64;
            if mx >= 0 && my >= 0 && (mx as usize) < mask.width && (my as usize) < mask.height {
                mask.accumulate(mx as usize, my as usize, c);
            }
        });
    }

    mask
}

/// Paint a rasterized line onto the canvas with its line box at `at`. The stroke, if
/// any, is painted first so that the fill sits on top of it.
pub fn paint(canvas: &mut Canvas, mask: &CoverageMask, at: (Px, Px), style: &TextStyle) {
    if mask.is_empty() {
        return;
    }

    let x0 = at.0 .0.round() as i64;
    let y0 = at.1 .0.round() as i64;

    if style.stroke_width > 0 {
        let stroke = mask.dilate(style.stroke_width);
        paint_mask(canvas, &stroke, x0, y0, style.stroke_colour);
    }
    paint_mask(canvas, mask, x0, y0, style.colour);
}

fn paint_mask(canvas: &mut Canvas, mask: &CoverageMask, x0: i64, y0: i64, colour: crate::Colour) {
    for y in 0..mask.height {
        for x in 0..mask.width {
            let c = mask.get(x, y);
            if c > 0.0 {
                canvas.blend(
                    x0 + mask.left + x as i64,
                    y0 + mask.top + y as i64,
                    colour,
                    c,
                );
            }
        }
    }
}
