//! Render a quote onto a background image.
//!
//! cargo run --example quote-card -- <background> <quote> [author] [config.toml]

use quote_card::{compose_quote_card, Canvas, CardConfig, FontCache};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(background), Some(quote)) = (args.next(), args.next()) else {
        eprintln!("usage: quote-card <background> <quote> [author] [config.toml]");
        std::process::exit(2);
    };
    let author = args.next();

    // settings for the card; without a file we get a 1080x1350 card with white text
    let config = match args.next() {
        Some(path) => CardConfig::load(path).expect("can load config"),
        None => CardConfig::default(),
    };

    // the background should already be sized to the card
    let mut canvas = Canvas::open(&background).expect("can open background");

    // fonts are loaded on first use and kept for the rest of the run
    let mut fonts = FontCache::new();
    let card = compose_quote_card(&mut fonts, &mut canvas, &config, &quote, author.as_deref())
        .expect("can render card");
    log::info!("quote set at size {}", card.quote_font_size);

    let out = config.output.path_now();
    std::fs::create_dir_all(&config.output.dir).expect("can create output directory");
    canvas.save(Some(out.as_path())).expect("can save card");
    println!("{}", out.display());
}
