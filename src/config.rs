//! Quote card settings, loaded from a TOML file.
//!
//! Every field has a default, so a file only needs the values it changes:
//!
//! ```toml
//! [font]
//! path = "assets/lato.ttf"
//!
//! [text]
//! colour = "white"
//! stroke_colour = "black"
//! stroke_width = 3
//! ```

use crate::{colours, layout::LineHeight, Colour, RenderError};
use chrono::{DateTime, TimeZone};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Quote card settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CardConfig {
    pub font: FontConfig,
    pub canvas: CanvasConfig,
    pub text: TextConfig,
    pub layout: LayoutConfig,
    pub output: OutputConfig,
}

/// Font settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// TrueType / OpenType font file used for both the quote and the author
    pub path: PathBuf,
    /// Point size of the author line; the quote's size is fitted
    pub author_size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            path: PathBuf::from("assets/lato.ttf"),
            author_size: 45,
        }
    }
}

/// Size of the card the text is laid out for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            width: 1080,
            height: 1350,
        }
    }
}

/// Text appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub colour: Colour,
    pub stroke_colour: Colour,
    /// Outline width in pixels, 0 for none
    pub stroke_width: u32,
    /// Shown when a quote has no author
    pub default_author: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        TextConfig {
            colour: colours::WHITE,
            stroke_colour: colours::BLACK,
            stroke_width: 3,
            default_author: "Unknown".to_string(),
        }
    }
}

/// Placement of the quote and author on the card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Total horizontal space left free; text boxes are `width - horizontal_margin` wide
    pub horizontal_margin: f32,
    /// Total vertical space left free when fitting the quote's size
    pub vertical_margin: f32,
    /// How far above the vertical centre the quote box starts
    pub quote_raise: f32,
    /// How far the author line is pulled up towards the end of the quote
    pub author_raise: f32,
    /// The quote's fitted single-line size is multiplied by one step per this many characters
    pub chars_per_scale_step: usize,
    /// Smallest multiplier applied to the quote's fitted size
    pub min_scale: u32,
    pub line_height: LineHeight,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            horizontal_margin: 150.0,
            vertical_margin: 100.0,
            quote_raise: 200.0,
            author_raise: 70.0,
            chars_per_scale_step: 28,
            min_scale: 2,
            line_height: LineHeight::default(),
        }
    }
}

/// Where finished cards are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    /// Image format, by file extension
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            dir: PathBuf::from("results"),
            extension: "jpg".to_string(),
        }
    }
}

impl OutputConfig {
    /// A file in the output directory named after the given time, e.g. `results/1697616000123.jpg`
    pub fn path_at<Tz: TimeZone>(&self, time: &DateTime<Tz>) -> PathBuf {
        self.dir
            .join(format!("{}.{}", time.timestamp_millis(), self.extension))
    }

    /// A file in the output directory named after the current time
    pub fn path_now(&self) -> PathBuf {
        self.path_at(&chrono::Utc::now())
    }
}

impl CardConfig {
    /// Parse settings from TOML text
    pub fn from_toml_str(s: &str) -> Result<CardConfig, RenderError> {
        Ok(toml::from_str(s)?)
    }

    /// Load settings from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<CardConfig, RenderError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!("loaded card config from {}", path.display());
        Ok(config)
    }
}
