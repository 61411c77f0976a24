//! Renderer Module
//!
//! Renderers turn reduced documents and quantized images into the bytes
//! written to the terminal.

pub mod ansi;
pub mod plain;

pub use ansi::AnsiRenderer;
pub use plain::PlainRenderer;

use crate::document::Fragment;
use crate::raster::RenderedRow;

/// Trait for renderers
pub trait Renderer {
    /// Renderer name
    fn name(&self) -> &str;

    /// Sequence written before any content
    fn init(&mut self) -> String;

    /// Sequence written after all content
    fn shutdown(&self) -> String;

    /// Clear screen
    fn clear(&self) -> String;

    /// Render reduced document fragments
    fn render_fragments(&mut self, fragments: &[Fragment]) -> String;

    /// Render quantized image rows, one line per row
    fn render_rows(&mut self, rows: &[RenderedRow]) -> String;
}

/// Replace control characters other than newline and tab with spaces, so
/// page content cannot inject escape sequences.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\n' | '\t' => ch,
            c if c < ' ' || c == '\x7f' => ' ',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("a\x1b[2Jb\n\tc\x07\x7f"), "a [2Jb\n\tc  ");
        assert_eq!(sanitize("héllo █"), "héllo █");
    }
}
