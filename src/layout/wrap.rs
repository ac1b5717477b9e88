use crate::{FontSpec, Px, RenderError, TextMeasure};
use log::{debug, trace};

/// The result of greedily wrapping text into a fixed width
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WrappedText {
    /// Each line's words, joined by single spaces
    pub lines: Vec<String>,
    /// The height measured for the last candidate line tried while wrapping
    pub last_candidate_height: Px,
}

/// Wrap `text` into lines no wider than `box_width`, keeping words whole.
///
/// Words are added to the current line one at a time for as long as the line, measured
/// in `font`, still fits. A word that doesn't fit starts the next line. A word that is
/// wider than the box on its own still gets a line of its own and overflows it.
pub fn wrap_words<M: TextMeasure>(
    measure: &mut M,
    font: &FontSpec,
    text: &str,
    box_width: Px,
) -> Result<WrappedText, RenderError> {
    let mut wrapped = WrappedText::default();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        let (width, height) = measure.measure(font, &candidate)?;
        trace!("candidate {candidate:?} measures {width} x {height}");
        wrapped.last_candidate_height = height;

        if width <= box_width {
            line = candidate;
        } else {
            if !line.is_empty() {
                wrapped.lines.push(line);
            }
            line = word.to_string();
        }
    }

    if !line.is_empty() {
        wrapped.lines.push(line);
    }

    debug!(
        "wrapped {} words into {} lines of at most {}",
        text.split_whitespace().count(),
        wrapped.lines.len(),
        box_width
    );
    Ok(wrapped)
}
