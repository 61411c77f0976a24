//! termview - terminal rendering for documents and images
//!
//! Renders two kinds of content in a character-cell terminal.
//!
//! # Overview
//!
//! termview provides:
//! - A document reducer that linearizes an HTML tree into styled text
//! - An image quantizer that turns pixel blocks into coloured glyphs
//! - Renderers that write either result as ANSI or plain text
//! - Loading glue: HTTP fetch, HTML parsing and image decoding
//!
//! # Example
//!
//! ```no_run
//! use termview::core::Rgb;
//! use termview::document::{parse_html, reduce};
//! use termview::raster::{quantize, PixelBuffer, QuantizeOptions};
//! use termview::renderer::{AnsiRenderer, Renderer};
//!
//! let doc = parse_html("<h1>Hello</h1><p>from the terminal</p>");
//! print!("{}", reduce(&doc));
//!
//! let buffer = PixelBuffer::filled(64, 32, Rgb::new(255, 128, 0));
//! let rows = quantize(&buffer, &QuantizeOptions::default());
//! let mut renderer = AnsiRenderer::default();
//! print!("{}", renderer.render_rows(&rows));
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod document;
pub mod error;
pub mod output;
pub mod raster;
pub mod renderer;
pub mod source;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use crate::core::{Attrs, Color, GlyphCell, GlyphSet, Ink, Rgb};
pub use document::{
    fragments, parse_html, reduce, reduce_body, reduce_document, reduce_title, Fragment,
    FragmentStyle, Node, ReduceMode,
};
pub use error::{Error, Result};
pub use raster::{quantize, PixelBuffer, QuantizeOptions, RenderedRow};
pub use renderer::{AnsiRenderer, PlainRenderer, Renderer};
pub use source::Source;
