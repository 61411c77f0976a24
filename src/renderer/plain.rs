//! Plain text renderer: glyphs and text only, no escape sequences.
//! Useful when output is piped to a file or another program.

use super::{sanitize, Renderer};
use crate::document::Fragment;
use crate::raster::RenderedRow;

#[derive(Debug, Default)]
pub struct PlainRenderer;

impl PlainRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for PlainRenderer {
    fn name(&self) -> &str {
        "plain"
    }

    fn init(&mut self) -> String {
        String::new()
    }

    fn shutdown(&self) -> String {
        String::new()
    }

    fn clear(&self) -> String {
        String::new()
    }

    fn render_fragments(&mut self, fragments: &[Fragment]) -> String {
        fragments.iter().map(|f| sanitize(&f.text)).collect()
    }

    fn render_rows(&mut self, rows: &[RenderedRow]) -> String {
        let mut output = String::new();
        for row in rows {
            output.push_str(&row.text());
            output.push('\n');
        }
        output
    }
}
