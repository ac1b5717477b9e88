use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("`{0}` is required to fit a font size")]
    /// A fitting bound was not supplied
    MissingBound(&'static str),

    #[error("`{name}` must be positive, got {value}")]
    /// A fitting bound was zero, negative or not a number
    InvalidBound { name: &'static str, value: f32 },

    #[error("no path given to save to and the canvas was not loaded from a file")]
    /// [crate::Canvas::save] was called without a path on a blank canvas
    MissingSavePath,

    #[error(transparent)]
    /// The configuration file could not be parsed
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [ab_glyph] could not read glyph outlines from the font
    Rasterizer(#[from] ab_glyph::InvalidFont),

    #[error(transparent)]
    /// [image] failed to decode or encode the canvas
    Image(#[from] image::ImageError),
}

/// The two classes of failure: bad input from the caller, or an unusable resource
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid parameters or configuration
    Config,
    /// A font or image that is missing, unreadable or malformed
    Resource,
}

impl RenderError {
    /// Whether the error comes from how the call was set up or from a file it needed
    pub fn kind(&self) -> ErrorKind {
        match self {
            RenderError::MissingBound(_)
            | RenderError::InvalidBound { .. }
            | RenderError::MissingSavePath
            | RenderError::Config(_) => ErrorKind::Config,
            RenderError::Io(_)
            | RenderError::FaceParsing(_)
            | RenderError::Rasterizer(_)
            | RenderError::Image(_) => ErrorKind::Resource,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_classified() {
        assert_eq!(RenderError::MissingBound("max_width").kind(), ErrorKind::Config);
        assert_eq!(RenderError::MissingSavePath.kind(), ErrorKind::Config);
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(RenderError::from(io).kind(), ErrorKind::Resource);
    }

    #[test]
    fn bound_errors_name_the_bound() {
        let err = RenderError::InvalidBound {
            name: "max_height",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "`max_height` must be positive, got 0");
    }
}
