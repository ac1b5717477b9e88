use crate::{FontSpec, Px, RenderError, TextMeasure};
use log::{debug, trace, warn};
use std::path::Path;

/// The largest point size [fit_font_size] will try before giving up. Text that is still
/// within bounds at this size (including empty text) is fitted at this size.
pub const MAX_FONT_SIZE: u32 = 1000;

fn check_bound(name: &'static str, bound: Option<Px>) -> Result<Px, RenderError> {
    let bound = bound.ok_or(RenderError::MissingBound(name))?;
    // written so that NaN is rejected too
    if !(bound.0 > 0.0) {
        return Err(RenderError::InvalidBound {
            name,
            value: bound.0,
        });
    }
    Ok(bound)
}

/// Find the largest point size at which `text`, set on a single line in the font at
/// `font_path`, stays strictly narrower than `max_width` and strictly shorter than
/// `max_height`.
///
/// Sizes are tried upwards from 1; the first size that reaches either bound stops the
/// search and the size before it is returned. This can be 0 when even size 1 is too big.
/// Both bounds are required and must be positive.
pub fn fit_font_size<M: TextMeasure, P: AsRef<Path>>(
    measure: &mut M,
    text: &str,
    font_path: P,
    max_width: Option<Px>,
    max_height: Option<Px>,
) -> Result<u32, RenderError> {
    let max_width = check_bound("max_width", max_width)?;
    let max_height = check_bound("max_height", max_height)?;

    let mut font = FontSpec::new(font_path.as_ref(), 1);
    loop {
        let (width, height) = measure.measure(&font, text)?;
        trace!("size {}: {} x {}", font.size, width, height);

        if width >= max_width || height >= max_height {
            let fitted = font.size - 1;
            debug!("fitted text into {max_width} x {max_height} at size {fitted}");
            return Ok(fitted);
        }

        if font.size >= MAX_FONT_SIZE {
            warn!(
                "text still fits {max_width} x {max_height} at size {MAX_FONT_SIZE}, stopping there"
            );
            return Ok(MAX_FONT_SIZE);
        }
        font.size += 1;
    }
}
