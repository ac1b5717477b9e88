//! Text layout: choosing a font size and wrapping text into centred lines.
//!
//! # Layout Functions
//!
//! - [`fit_font_size`](crate::layout::fit_font_size) - the largest size at which a string fits on one line within bounds
//! - [`wrap_words`](crate::layout::wrap_words) - greedy word wrapping into a fixed width, never splitting words
//! - [`layout_text_box`](crate::layout::layout_text_box) - wrapped lines centred in a box and stacked downwards
//! - [`write_text_box`](crate::layout::write_text_box) - the same, drawn onto a canvas
//!
//! # Example
//!
//! ```no_run
//! use quote_card::{colours, Canvas, ColourMode, FontCache, FontSpec, Px, TextStyle};
//! use quote_card::layout::{fit_font_size, write_text_box, TextBoxOptions};
//!
//! let mut fonts = FontCache::new();
//! let mut canvas = Canvas::blank(1080, 1350, ColourMode::Rgb, colours::BLACK);
//!
//! let text = "Simplicity is prerequisite for reliability.";
//! let size = fit_font_size(&mut fonts, text, "assets/lato.ttf", Some(Px(930.0)), Some(Px(1250.0)))
//!     .expect("can fit text");
//!
//! write_text_box(
//!     &mut fonts,
//!     &mut canvas,
//!     (Px(75.0), Px(200.0)),
//!     text,
//!     Px(930.0),
//!     &FontSpec::new("assets/lato.ttf", size * 2),
//!     &TextStyle::default().with_colour(colours::WHITE),
//!     TextBoxOptions::default(),
//! )
//! .expect("can draw text");
//! canvas.save(Some(std::path::Path::new("quote.png"))).expect("can save");
//! ```

mod fit;
mod text_box;
mod wrap;

pub use fit::*;
pub use text_box::*;
pub use wrap::*;
