//! termview binary
//!
//! Run with: termview <input> [options]
//!
//! The input is a URL (http:// or https://), an HTML file, or with
//! `--image` an image file. Output goes to stdout; logs go to stderr and
//! are controlled by `RUST_LOG` (default: warn, or debug with --verbose).

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::info;

use termview::app::{render_document, render_image};
use termview::config::{Config, OutputFormat};
use termview::core::GlyphSet;
use termview::document::ReduceMode;
use termview::source::{load_document, load_image, Source};

/// Render web pages, HTML files and images in the terminal
#[derive(Parser, Debug)]
#[command(name = "termview", version, about)]
struct Args {
    /// URL or .html file path (image path with --image)
    input: String,

    /// Render the input as an image
    #[arg(long)]
    image: bool,

    /// Document part to render: title, body or full
    #[arg(long, value_parser = parse_mode)]
    mode: Option<ReduceMode>,

    /// Neutral bold colouring instead of per-block colour
    #[arg(long)]
    grayscale: bool,

    /// Horizontal pixels per glyph
    #[arg(long)]
    block_width: Option<usize>,

    /// Vertical pixels per glyph
    #[arg(long)]
    block_height: Option<usize>,

    /// Resize the image to this width in pixels before rendering
    #[arg(long)]
    width: Option<u32>,

    /// Resize the image to this height in pixels before rendering
    #[arg(long)]
    height: Option<u32>,

    /// Glyph palette: blocks or ascii
    #[arg(long, value_parser = parse_glyphs)]
    glyphs: Option<GlyphSet>,

    /// Output format: ansi, plain or json
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Do not clear the screen before writing
    #[arg(long)]
    no_clear: bool,

    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_mode(s: &str) -> Result<ReduceMode, String> {
    ReduceMode::from_str(s).ok_or_else(|| format!("unknown mode '{}' (title, body, full)", s))
}

fn parse_glyphs(s: &str) -> Result<GlyphSet, String> {
    GlyphSet::from_str(s).ok_or_else(|| format!("unknown glyph set '{}' (blocks, ascii)", s))
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).ok_or_else(|| format!("unknown format '{}' (ansi, plain, json)", s))
}

impl Args {
    /// Config file (or defaults) with command line overrides applied
    fn config(&self) -> termview::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(glyphs) = self.glyphs {
            config.image.glyphs = glyphs;
        }
        if let Some(w) = self.block_width {
            config.image.block_width = w;
        }
        if let Some(h) = self.block_height {
            config.image.block_height = h;
        }
        if self.grayscale {
            config.image.grayscale = true;
        }
        if self.width.is_some() {
            config.resize.width = self.width;
        }
        if self.height.is_some() {
            config.resize.height = self.height;
        }
        if self.no_clear {
            config.clear = false;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = args.config()?;
    let source = Source::classify(&args.input);
    info!("Rendering {:?} as {}", source, if args.image { "image" } else { "document" });

    let output = if args.image {
        let buffer = load_image(&source, &config)?;
        render_image(&buffer, &config)?
    } else {
        let doc = load_document(&source, &config).await?;
        render_document(&doc, &config)?
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
