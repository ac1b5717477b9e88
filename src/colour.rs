use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An 8-bit-per-channel RGBA colour. `a` is opacity: 0 is fully transparent,
/// 255 fully opaque.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new opaque colour, r, g, and b range from 0 to 255
    pub const fn rgb(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b, a: 255 }
    }

    /// Create a new colour with an explicit opacity
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour { r, g, b, a }
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::rgb(c.0, c.1, c.2)
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8, u8)) -> Self {
        Colour::rgba(c.0, c.1, c.2, c.3)
    }
}

impl From<[u8; 4]> for Colour {
    fn from(c: [u8; 4]) -> Self {
        let [r, g, b, a] = c;
        Colour::rgba(r, g, b, a)
    }
}

impl From<image::Rgba<u8>> for Colour {
    fn from(p: image::Rgba<u8>) -> Self {
        Colour::from(p.0)
    }
}

/// Text that could not be read as a [Colour]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{0}` is not a colour name, #rrggbb or #rrggbbaa value")]
pub struct ParseColourError(String);

impl FromStr for Colour {
    type Err = ParseColourError;

    /// Parse a colour name (`black`, `white`, ...) or a `#rrggbb` / `#rrggbbaa` hex value
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let named = match s.to_ascii_lowercase().as_str() {
            "black" => Some(colours::BLACK),
            "white" => Some(colours::WHITE),
            "red" => Some(colours::RED),
            "green" => Some(colours::GREEN),
            "blue" => Some(colours::BLUE),
            "transparent" => Some(colours::TRANSPARENT),
            _ => None,
        };
        if let Some(colour) = named {
            return Ok(colour);
        }

        let err = || ParseColourError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Colour::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl TryFrom<String> for Colour {
    type Error = ParseColourError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Colour> for String {
    fn from(c: Colour) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::rgb(0, 0, 0);
    pub const WHITE: Colour = Colour::rgb(255, 255, 255);
    pub const RED: Colour = Colour::rgb(255, 0, 0);
    pub const GREEN: Colour = Colour::rgb(0, 255, 0);
    pub const BLUE: Colour = Colour::rgb(0, 0, 255);
    /// Fully transparent black, the default background of a blank canvas
    pub const TRANSPARENT: Colour = Colour::rgba(0, 0, 0, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_hex() {
        assert_eq!("black".parse::<Colour>().unwrap(), colours::BLACK);
        assert_eq!("White".parse::<Colour>().unwrap(), colours::WHITE);
        assert_eq!(
            "#ff8000".parse::<Colour>().unwrap(),
            Colour::rgb(255, 128, 0)
        );
        assert_eq!(
            "#ffffffc8".parse::<Colour>().unwrap(),
            Colour::rgba(255, 255, 255, 200)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!("mauve-ish".parse::<Colour>().is_err());
        assert!("#12345".parse::<Colour>().is_err());
        assert!("#gg0000".parse::<Colour>().is_err());
    }

    #[test]
    fn parse_errors_name_the_input() {
        let err = "  mauve ".parse::<Colour>().unwrap_err();
        assert_eq!(err, ParseColourError("mauve".to_string()));
        assert_eq!(
            err.to_string(),
            "`mauve` is not a colour name, #rrggbb or #rrggbbaa value"
        );
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let c = Colour::rgba(1, 2, 3, 4);
        assert_eq!(c.to_string(), "#01020304");
        assert_eq!(c.to_string().parse::<Colour>().unwrap(), c);
    }

    #[test]
    fn tuples_convert() {
        assert_eq!(Colour::from((255, 255, 255)), colours::WHITE);
        assert_eq!(Colour::from([0, 0, 0, 0]), colours::TRANSPARENT);
    }
}
