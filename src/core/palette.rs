//! Glyph palettes
//!
//! A palette is a list of characters ordered by ink density, from blank at
//! index 0 to the densest glyph at the end. Brightness maps linearly onto
//! that order, so brighter blocks get more ink in their own colour.

use serde::{Deserialize, Serialize};

/// Block elements, ordered by coverage of the cell:
/// empty, one quadrant, light shade, two quadrants, medium shade,
/// three quadrants, dark shade, full.
pub const BLOCKS: [char; 18] = [
    ' ', '▘', '▝', '▖', '▗', '░', '▚', '▞', '▌', '▐', '▀', '▄', '▒', '▛', '▙', '▟', '▓', '█',
];

/// Plain ASCII ramp for terminals without block elements
pub const ASCII: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Selectable glyph palette
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphSet {
    #[default]
    Blocks,
    Ascii,
}

impl GlyphSet {
    pub fn glyphs(&self) -> &'static [char] {
        match self {
            GlyphSet::Blocks => &BLOCKS,
            GlyphSet::Ascii => &ASCII,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "blocks" | "unicode" => Some(GlyphSet::Blocks),
            "ascii" => Some(GlyphSet::Ascii),
            _ => None,
        }
    }

    /// Glyph for a block whose summed luma (in thousandths) over `count`
    /// pixels is `luma_milli_sum`.
    pub fn glyph_for(&self, luma_milli_sum: u64, count: u64) -> char {
        let glyphs = self.glyphs();
        glyphs[glyph_index(luma_milli_sum, count, glyphs.len())]
    }
}

/// `floor(avg / 255 * (len - 1))`, clamped to `0..len`.
///
/// Computed in integers: `avg = luma_milli_sum / (1000 * count)`, so the
/// index is `luma_milli_sum * (len - 1) / (255_000 * count)`. White lands on
/// the last index exactly.
pub fn glyph_index(luma_milli_sum: u64, count: u64, len: usize) -> usize {
    if len == 0 || count == 0 {
        return 0;
    }
    let top = (len - 1) as u64;
    let index = luma_milli_sum.saturating_mul(top) / 255_000u64.saturating_mul(count);
    index.min(top) as usize
}
