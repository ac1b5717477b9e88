use crate::{
    config::CardConfig,
    layout::{fit_font_size, layout_text_box, write_text_box, TextBoxOptions, MAX_FONT_SIZE},
    render::{GlyphRenderer, TextStyle},
    Canvas, FontSpec, Px, RenderError,
};
use log::{debug, info, warn};

/// What was drawn for a quote card
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    /// The point size the quote was set at
    pub quote_font_size: u32,
    /// `(box width, height)` of the quote box
    pub quote_size: (Px, Px),
    /// `(box width, height)` of the author box
    pub author_size: (Px, Px),
}

/// How much the quote's fitted single-line size is multiplied by. Longer quotes wrap over
/// more lines, so they can be set larger than the size that fits them on one line.
pub fn quote_scale(quote: &str, config: &CardConfig) -> u32 {
    let step = config.layout.chars_per_scale_step;
    if step == 0 {
        return config.layout.min_scale;
    }
    let steps = (quote.chars().count() / step) as u32;
    steps.max(config.layout.min_scale)
}

/// Draw `quote` and its author onto `canvas`: the quote wrapped and centred a little above
/// the middle of the card, with the author line underneath it.
///
/// The author falls back to the configured default when missing or blank. Positions are
/// computed from the card size in `config`, which `canvas` is expected to match.
pub fn compose_quote_card<R: GlyphRenderer>(
    renderer: &mut R,
    canvas: &mut Canvas,
    config: &CardConfig,
    quote: &str,
    author: Option<&str>,
) -> Result<CardLayout, RenderError> {
    let width = Px::from(config.canvas.width);
    let height = Px::from(config.canvas.height);
    if canvas.size() != (width, height) {
        warn!(
            "canvas is {}x{} but the card is laid out for {}x{}",
            canvas.width(),
            canvas.height(),
            config.canvas.width,
            config.canvas.height
        );
    }

    let author = author
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or(config.text.default_author.as_str());
    info!("quote: {quote:?} {author}");

    let box_width = width - Px(config.layout.horizontal_margin);
    let max_height = height - Px(config.layout.vertical_margin);

    let fitted = fit_font_size(
        renderer,
        quote,
        &config.font.path,
        Some(box_width),
        Some(max_height),
    )?;
    let scaled = fitted.saturating_mul(quote_scale(quote, config));
    if scaled > MAX_FONT_SIZE {
        warn!("scaled quote size {scaled} is above {MAX_FONT_SIZE}, using {MAX_FONT_SIZE}");
    }
    let quote_font = FontSpec::new(&config.font.path, scaled.min(MAX_FONT_SIZE));
    let author_font = FontSpec::new(&config.font.path, config.font.author_size);
    debug!("setting quote at size {}", quote_font.size);

    let options = TextBoxOptions {
        line_height: config.layout.line_height,
        ..Default::default()
    };

    // measure both boxes before drawing so they can be centred on the card
    let origin = (Px::ZERO, Px::ZERO);
    let quote_box = layout_text_box(renderer, origin, quote, box_width, &quote_font, options)?;
    let author_box = layout_text_box(renderer, origin, author, box_width, &author_font, options)?;
    let (quote_width, quote_height) = quote_box.size;
    let (author_width, _) = author_box.size;

    let style = TextStyle {
        colour: config.text.colour,
        stroke_colour: config.text.stroke_colour,
        stroke_width: config.text.stroke_width,
    };

    let top = (height - quote_height) / 2.0;
    let quote_size = write_text_box(
        renderer,
        canvas,
        (
            (width - quote_width) / 2.0,
            top - Px(config.layout.quote_raise),
        ),
        quote,
        box_width,
        &quote_font,
        &style,
        options,
    )?;
    let author_size = write_text_box(
        renderer,
        canvas,
        (
            (width - author_width) / 2.0,
            top - Px(config.layout.author_raise) + quote_height,
        ),
        author,
        box_width,
        &author_font,
        &style,
        options,
    )?;

    Ok(CardLayout {
        quote_font_size: quote_font.size,
        quote_size,
        author_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{scratch_path, system_font, FixedAdvance};
    use crate::{colours, ColourMode, FontCache};

    fn card_canvas(config: &CardConfig) -> Canvas {
        Canvas::blank(
            config.canvas.width,
            config.canvas.height,
            ColourMode::Rgb,
            colours::BLACK,
        )
    }

    #[test]
    fn scale_grows_with_quote_length() {
        let config = CardConfig::default();
        assert_eq!(quote_scale("short", &config), 2);
        assert_eq!(quote_scale(&"x".repeat(55), &config), 2);
        assert_eq!(quote_scale(&"x".repeat(84), &config), 3);
        assert_eq!(quote_scale(&"x".repeat(140), &config), 5);
    }

    #[test]
    fn places_quote_then_author() {
        let config = CardConfig::default();
        let mut canvas = card_canvas(&config);
        // at size s every character is s wide and s tall
        let mut fonts = FixedAdvance::new(10.0, 10.0);

        let quote = "Talk is cheap. Show me the code.";
        let card =
            compose_quote_card(&mut fonts, &mut canvas, &config, quote, Some("Linus")).unwrap();

        // 32 characters reach the 930px box at size 30
        assert_eq!(card.quote_font_size, 29 * 2);
        assert_eq!(card.quote_size.0, Px(930.0));
        assert_eq!(card.author_size, (Px(930.0), Px(45.0)));

        let quote_lines = card.quote_size.1 / 58.0;
        let drawn = fonts.drawn_lines();
        assert_eq!(drawn.len() as f32, quote_lines.0 + 1.0);
        assert_eq!(*drawn.last().unwrap(), "Linus");
        assert!(fonts.draws[..drawn.len() - 1].iter().all(|d| d.size == 58));

        let style = fonts.draws[0].style;
        assert_eq!(style.colour, colours::WHITE);
        assert_eq!(style.stroke_colour, colours::BLACK);
        assert_eq!(style.stroke_width, 3);

        // the quote box starts 200px above centre, its first line one row lower
        let top = (Px(1350.0) - card.quote_size.1) / 2.0;
        assert_eq!(fonts.draws[0].at.1, top - Px(200.0) + Px(58.0));
        // the author sits 70px above the quote's bottom edge, one row lower
        let author = fonts.draws.last().unwrap();
        assert_eq!(author.at.1, top - Px(70.0) + card.quote_size.1 + Px(45.0));
        // centred: (1080 - 930) / 2 + (930 - 5 * 45) / 2
        assert_eq!(author.at.0, Px(75.0 + 352.0));
    }

    #[test]
    fn huge_scales_are_capped() {
        let mut config = CardConfig::default();
        config.layout.min_scale = u32::MAX;
        let mut canvas = card_canvas(&config);
        let mut fonts = FixedAdvance::new(10.0, 10.0);

        let card =
            compose_quote_card(&mut fonts, &mut canvas, &config, "Be brief.", None).unwrap();
        assert_eq!(card.quote_font_size, MAX_FONT_SIZE);
    }

    #[test]
    fn missing_authors_are_unknown() {
        let config = CardConfig::default();
        for author in [None, Some(""), Some("   ")] {
            let mut canvas = card_canvas(&config);
            let mut fonts = FixedAdvance::new(10.0, 10.0);
            compose_quote_card(&mut fonts, &mut canvas, &config, "Be brief.", author).unwrap();
            assert_eq!(fonts.drawn_lines().last(), Some(&"Unknown"));
        }
    }

    #[test]
    fn renders_a_real_card() {
        let Some(path) = system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let mut config = CardConfig::default();
        config.font.path = path;
        config.canvas.width = 540;
        config.canvas.height = 675;
        config.output.dir = std::env::temp_dir();
        config.output.extension = "png".to_string();

        let mut canvas = card_canvas(&config);
        let mut fonts = FontCache::new();
        let card = compose_quote_card(
            &mut fonts,
            &mut canvas,
            &config,
            "Simple things should be simple, complex things should be possible.",
            Some("Alan Kay"),
        )
        .expect("renders");

        assert!(card.quote_font_size > 0);
        assert!(card.quote_size.1 > Px::ZERO);
        assert!(canvas.image().pixels().any(|p| p.0 == [255, 255, 255, 255]));

        let out = scratch_path("card.png");
        canvas.save(Some(out.as_path())).expect("saves");
        assert!(out.is_file());
        std::fs::remove_file(&out).ok();
    }
}
