//! Rendering entry points used by the binary
//!
//! Glue between the core and the sinks: reduce or quantize, then format for
//! the configured output.

use log::debug;

use crate::config::{Config, OutputFormat};
use crate::document::{document_fragments, fragments, Node};
use crate::error::Result;
use crate::output::{serialize_output, RenderOutput};
use crate::raster::{quantize, PixelBuffer};
use crate::renderer::{AnsiRenderer, PlainRenderer, Renderer};

fn renderer_for(config: &Config) -> Box<dyn Renderer> {
    match config.format {
        OutputFormat::Plain => Box::new(PlainRenderer::new()),
        _ => Box::new(AnsiRenderer::new(config.clear)),
    }
}

/// Render a document tree to the text written to stdout
pub fn render_document(doc: &Node, config: &Config) -> Result<String> {
    let whole = doc.is_document() || doc.tag() == Some("html");
    let fragments = if whole {
        document_fragments(doc, config.mode)
    } else {
        fragments(doc)
    };
    debug!("Reduced document to {} fragments", fragments.len());

    if config.format == OutputFormat::Json {
        let output = RenderOutput::Document {
            mode: whole.then_some(config.mode),
            fragments,
        };
        return Ok(serialize_output(&output)? + "\n");
    }

    let mut renderer = renderer_for(config);
    let mut text = renderer.init();
    text.push_str(&renderer.render_fragments(&fragments));
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(&renderer.shutdown());
    Ok(text)
}

/// Render a pixel buffer to the text written to stdout
pub fn render_image(buffer: &PixelBuffer, config: &Config) -> Result<String> {
    let options = &config.image;
    debug!(
        "Quantizing {}x{} image in {}x{} blocks",
        buffer.width(),
        buffer.height(),
        options.block_width,
        options.block_height
    );
    let rows = quantize(buffer, options);

    if config.format == OutputFormat::Json {
        let output = RenderOutput::Image {
            width: buffer.width(),
            height: buffer.height(),
            columns: rows.first().map_or(0, |r| r.len()),
            rows,
        };
        return Ok(serialize_output(&output)? + "\n");
    }

    let mut renderer = renderer_for(config);
    let mut text = renderer.init();
    text.push_str(&renderer.render_rows(&rows));
    text.push_str(&renderer.shutdown());
    Ok(text)
}
