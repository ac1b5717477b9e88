//! Lay out and rasterize short passages of text, such as a quote and its author, onto
//! images: fit a font size to bounds, wrap words into a centred box, and draw the
//! glyphs with an optional outline.

mod canvas;
pub use canvas::*;

mod card;
pub use card::*;

mod colour;
pub use colour::*;

/// Quote card settings, loaded from TOML
pub mod config;
pub use config::CardConfig;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod font_cache;
pub use font_cache::*;

/// Utility functions and structures to lay out text (font sizing and word wrapping)
pub mod layout;

/// Glyph coverage masks and painting them onto a canvas
pub mod raster;

mod render;
pub use render::*;

mod units;
pub use units::*;

#[cfg(test)]
pub(crate) mod testing;

/// Re-export of the font parser, for inspecting loaded faces
pub use owned_ttf_parser;
