use crate::{colours, Colour, Px, RenderError};
use image::{ColorType, DynamicImage, ImageFormat, RgbaImage};
use log::debug;
use std::path::{Path, PathBuf};

/// How the canvas' pixels are stored when written out
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ColourMode {
    /// Greyscale
    Luma,
    /// Greyscale with alpha
    LumaAlpha,
    Rgb,
    #[default]
    Rgba,
}

impl ColourMode {
    /// Whether pixels in this mode carry an alpha channel
    pub fn has_alpha(&self) -> bool {
        matches!(self, ColourMode::LumaAlpha | ColourMode::Rgba)
    }

    /// The same mode with the alpha channel dropped
    pub fn without_alpha(self) -> ColourMode {
        match self {
            ColourMode::LumaAlpha => ColourMode::Luma,
            ColourMode::Rgba => ColourMode::Rgb,
            opaque => opaque,
        }
    }
}

impl From<ColorType> for ColourMode {
    fn from(c: ColorType) -> Self {
        match c {
            ColorType::L8 | ColorType::L16 => ColourMode::Luma,
            ColorType::La8 | ColorType::La16 => ColourMode::LumaAlpha,
            ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => ColourMode::Rgb,
            _ => ColourMode::Rgba,
        }
    }
}

/// Where a canvas' initial pixels come from
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasSource {
    /// Decode an existing raster file; its size and colour mode come from the file
    FromFile(PathBuf),
    /// A blank canvas filled with `background`
    FromSize {
        width: u32,
        height: u32,
        mode: ColourMode,
        background: Colour,
    },
}

impl CanvasSource {
    /// A blank RGBA canvas of the given size with a fully transparent background
    pub fn blank(width: u32, height: u32) -> CanvasSource {
        CanvasSource::FromSize {
            width,
            height,
            mode: ColourMode::Rgba,
            background: colours::TRANSPARENT,
        }
    }
}

/// A pixel buffer that text is drawn onto. Pixels are held as 8-bit RGBA regardless of
/// [ColourMode]; the mode is applied when the canvas is saved.
///
/// Every drawing call takes the canvas by `&mut`, so draws land in exactly the order
/// they are issued and later draws paint over earlier ones.
pub struct Canvas {
    image: RgbaImage,
    mode: ColourMode,
    origin: Option<PathBuf>,
}

impl Canvas {
    /// Create a canvas from a file or as a blank image, see [CanvasSource]
    pub fn new(source: CanvasSource) -> Result<Canvas, RenderError> {
        match source {
            CanvasSource::FromFile(path) => Self::open(path),
            CanvasSource::FromSize {
                width,
                height,
                mode,
                background,
            } => Ok(Self::blank(width, height, mode, background)),
        }
    }

    /// Create a canvas of the given size filled with `background`
    pub fn blank(width: u32, height: u32, mode: ColourMode, background: Colour) -> Canvas {
        Canvas {
            image: RgbaImage::from_pixel(width, height, background.to_rgba()),
            mode,
            origin: None,
        }
    }

    /// Decode a raster image from disk. The canvas remembers the path so that
    /// [Canvas::save] can write back to it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Canvas, RenderError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let format = image::guess_format(&data)?;
        let image = image::load_from_memory_with_format(&data, format)?;
        let mode = ColourMode::from(image.color());
        debug!(
            "opened {} as {:?} canvas, {}x{}",
            path.display(),
            mode,
            image.width(),
            image.height()
        );

        Ok(Canvas {
            image: image.to_rgba8(),
            mode,
            origin: Some(path.to_owned()),
        })
    }

    /// Write the canvas to `path`, or back to the file it was opened from when `path` is
    /// [None]. The image format is chosen from the file extension; formats that cannot
    /// store transparency (JPEG) are written without the alpha channel.
    pub fn save(&self, path: Option<&Path>) -> Result<(), RenderError> {
        let path = path
            .or(self.origin.as_deref())
            .ok_or(RenderError::MissingSavePath)?;
        let format = ImageFormat::from_path(path)?;

        let image = DynamicImage::ImageRgba8(self.image.clone());
        let mode = if format == ImageFormat::Jpeg && self.mode.has_alpha() {
            self.mode.without_alpha()
        } else {
            self.mode
        };
        let image = match mode {
            ColourMode::Luma => DynamicImage::ImageLuma8(image.to_luma8()),
            ColourMode::LumaAlpha => DynamicImage::ImageLumaA8(image.to_luma_alpha8()),
            ColourMode::Rgb => DynamicImage::ImageRgb8(image.to_rgb8()),
            ColourMode::Rgba => image,
        };

        image.save_with_format(path, format)?;
        debug!("saved {:?} canvas to {}", mode, path.display());
        Ok(())
    }

    /// Width of the canvas in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height of the canvas in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The canvas size in pixels, `(width, height)`
    pub fn size(&self) -> (Px, Px) {
        (Px::from(self.width()), Px::from(self.height()))
    }

    /// The colour mode the canvas is written out in
    pub fn mode(&self) -> ColourMode {
        self.mode
    }

    /// The file the canvas was opened from, if any
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// The colour at `(x, y)`, or [None] outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        (x < self.width() && y < self.height()).then(|| Colour::from(*self.image.get_pixel(x, y)))
    }

    /// The underlying RGBA pixels
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Paint `colour` over the pixel at `(x, y)` with the given coverage (0.0 to 1.0),
    /// compositing source-over. Pixels outside the canvas are ignored.
    pub fn blend(&mut self, x: i64, y: i64, colour: Colour, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        let alpha = coverage.clamp(0.0, 1.0) * colour.a as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }

        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        let dst_alpha = dst.0[3] as f32 / 255.0;
        let out_alpha = alpha + dst_alpha * (1.0 - alpha);
        let src = [colour.r, colour.g, colour.b];
        for (channel, src) in dst.0.iter_mut().take(3).zip(src) {
            let blended = if out_alpha > 0.0 {
                (src as f32 * alpha + *channel as f32 * dst_alpha * (1.0 - alpha)) / out_alpha
            } else {
                0.0
            };
            *channel = blended.round().clamp(0.0, 255.0) as u8;
        }
        dst.0[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::scratch_path;

    #[test]
    fn blank_canvas_is_filled_with_background() {
        let bg = Colour::rgba(255, 255, 255, 200);
        let canvas = Canvas::new(CanvasSource::FromSize {
            width: 8,
            height: 4,
            mode: ColourMode::Rgba,
            background: bg,
        })
        .expect("blank canvases always build");
        assert_eq!(canvas.size(), (Px(8.0), Px(4.0)));
        assert_eq!(canvas.pixel(7, 3), Some(bg));
        assert_eq!(canvas.pixel(8, 0), None);
        assert!(canvas.origin().is_none());
    }

    #[test]
    fn default_background_is_transparent_black() {
        let canvas = Canvas::new(CanvasSource::blank(2, 2)).unwrap();
        assert_eq!(canvas.pixel(0, 0), Some(colours::TRANSPARENT));
        assert_eq!(canvas.mode(), ColourMode::Rgba);
    }

    #[test]
    fn saving_without_any_path_is_a_config_error() {
        let canvas = Canvas::blank(2, 2, ColourMode::Rgb, colours::BLACK);
        let err = canvas.save(None).err().expect("fails");
        assert!(matches!(err, RenderError::MissingSavePath));
        assert_eq!(err.kind(), crate::ErrorKind::Config);
    }

    #[test]
    fn opening_a_missing_file_is_a_resource_error() {
        let err = Canvas::open("/no/such/background.jpg").err().expect("fails");
        assert_eq!(err.kind(), crate::ErrorKind::Resource);
    }

    #[test]
    fn saved_canvases_reopen_with_size_and_mode() {
        let path = scratch_path("roundtrip.png");
        let mut canvas = Canvas::blank(5, 3, ColourMode::Rgba, colours::TRANSPARENT);
        canvas.blend(1, 1, colours::RED, 1.0);
        canvas.save(Some(path.as_path())).expect("can save");

        let reopened = Canvas::open(&path).expect("can open");
        assert_eq!((reopened.width(), reopened.height()), (5, 3));
        assert_eq!(reopened.mode(), ColourMode::Rgba);
        assert_eq!(reopened.pixel(1, 1), Some(colours::RED));
        assert_eq!(reopened.pixel(0, 0), Some(colours::TRANSPARENT));
        assert_eq!(reopened.origin(), Some(path.as_path()));

        // saving with no path writes back to the origin file
        reopened.save(None).expect("can save to origin");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn file_sources_open_like_open() {
        let path = scratch_path("from-source.png");
        Canvas::blank(3, 2, ColourMode::Luma, colours::WHITE)
            .save(Some(path.as_path()))
            .expect("can save");

        let canvas = Canvas::new(CanvasSource::FromFile(path.clone())).expect("can open");
        assert_eq!(canvas.size(), (Px(3.0), Px(2.0)));
        assert_eq!(canvas.mode(), ColourMode::Luma);
        assert_eq!(canvas.pixel(2, 1), Some(colours::WHITE));
        assert_eq!(canvas.origin(), Some(path.as_path()));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn alpha_modes_drop_to_their_opaque_counterparts() {
        assert!(ColourMode::Rgba.has_alpha());
        assert!(ColourMode::LumaAlpha.has_alpha());
        assert!(!ColourMode::Rgb.has_alpha());
        assert!(!ColourMode::Luma.has_alpha());
        assert_eq!(ColourMode::Rgba.without_alpha(), ColourMode::Rgb);
        assert_eq!(ColourMode::LumaAlpha.without_alpha(), ColourMode::Luma);
        assert_eq!(ColourMode::Luma.without_alpha(), ColourMode::Luma);
    }

    #[test]
    fn jpeg_output_of_grey_with_alpha_is_grey() {
        let path = scratch_path("flattened-grey.jpg");
        let canvas = Canvas::blank(4, 4, ColourMode::LumaAlpha, Colour::rgba(90, 90, 90, 40));
        canvas.save(Some(path.as_path())).expect("can save jpeg");
        let reopened = Canvas::open(&path).expect("can open");
        assert_eq!(reopened.mode(), ColourMode::Luma);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn jpeg_output_drops_alpha() {
        let path = scratch_path("flattened.jpg");
        let canvas = Canvas::blank(4, 4, ColourMode::Rgba, Colour::rgba(10, 20, 30, 128));
        canvas.save(Some(path.as_path())).expect("can save jpeg");
        let reopened = Canvas::open(&path).expect("can open");
        assert_eq!(reopened.mode(), ColourMode::Rgb);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn blending_is_source_over_and_clipped() {
        let mut canvas = Canvas::blank(2, 1, ColourMode::Rgb, colours::BLACK);
        canvas.blend(0, 0, colours::WHITE, 1.0);
        assert_eq!(canvas.pixel(0, 0), Some(colours::WHITE));

        canvas.blend(1, 0, colours::WHITE, 0.5);
        let half = canvas.pixel(1, 0).unwrap();
        assert!((127..=128).contains(&half.r));
        assert_eq!(half.a, 255);

        // later draws win
        canvas.blend(0, 0, colours::RED, 1.0);
        assert_eq!(canvas.pixel(0, 0), Some(colours::RED));

        // off-canvas writes are ignored
        canvas.blend(-1, 0, colours::RED, 1.0);
        canvas.blend(0, 5, colours::RED, 1.0);
    }
}
