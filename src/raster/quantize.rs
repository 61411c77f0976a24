//! Image quantization
//!
//! The buffer is cut into a grid of `block_width x block_height` blocks,
//! scanned left-to-right, top-to-bottom. Blocks on the right and bottom
//! edges are truncated to the pixels that exist. Each block becomes one
//! [`GlyphCell`]: the glyph comes from the block's mean luma, the colour
//! from its mean RGB (or the fixed neutral ink in grayscale mode).

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::PixelBuffer;
use crate::core::{GlyphCell, GlyphSet, Rgb};

/// Pixels per terminal cell, horizontally
pub const DEFAULT_BLOCK_WIDTH: usize = 8;
/// Pixels per terminal cell, vertically
pub const DEFAULT_BLOCK_HEIGHT: usize = 16;

/// Quantizer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantizeOptions {
    pub block_width: usize,
    pub block_height: usize,
    /// Neutral bold colouring instead of per-block colour
    pub grayscale: bool,
    pub glyphs: GlyphSet,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            block_width: DEFAULT_BLOCK_WIDTH,
            block_height: DEFAULT_BLOCK_HEIGHT,
            grayscale: false,
            glyphs: GlyphSet::Blocks,
        }
    }
}

impl QuantizeOptions {
    pub fn grayscale(mut self) -> Self {
        self.grayscale = true;
        self
    }

    pub fn block_size(mut self, width: usize, height: usize) -> Self {
        self.block_width = width;
        self.block_height = height;
        self
    }

    pub fn glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Grid dimensions `(cols, rows)` for a buffer of the given size
    pub fn grid_size(&self, width: usize, height: usize) -> (usize, usize) {
        (
            width.div_ceil(self.block_width.max(1)),
            height.div_ceil(self.block_height.max(1)),
        )
    }
}

/// One line of glyph cells, one per block column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedRow {
    pub cells: Vec<GlyphCell>,
}

impl RenderedRow {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The glyphs alone, without colour
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.glyph).collect()
    }
}

/// Quantize `buffer` into rows of glyph cells.
///
/// Always returns `ceil(height / block_height)` rows of
/// `ceil(width / block_width)` cells; an empty buffer yields no rows.
/// Block sizes of zero are treated as one.
pub fn quantize(buffer: &PixelBuffer, options: &QuantizeOptions) -> Vec<RenderedRow> {
    if buffer.is_empty() {
        return Vec::new();
    }
    let bw = options.block_width.max(1);
    let bh = options.block_height.max(1);
    let (cols, rows) = options.grid_size(buffer.width(), buffer.height());

    // Rows are independent; the indexed collect keeps scan order.
    (0..rows)
        .into_par_iter()
        .map(|gy| {
            let y0 = gy * bh;
            let y1 = (y0 + bh).min(buffer.height());
            let cells = (0..cols)
                .map(|gx| {
                    let x0 = gx * bw;
                    let x1 = (x0 + bw).min(buffer.width());
                    quantize_block(buffer, x0..x1, y0..y1, options)
                })
                .collect();
            RenderedRow { cells }
        })
        .collect()
}

/// Running sums over a block's pixels
#[derive(Debug, Default, Clone, Copy)]
struct BlockSums {
    count: u64,
    luma_milli: u64,
    r: u64,
    g: u64,
    b: u64,
}

impl BlockSums {
    fn add(mut self, p: Rgb) -> Self {
        self.count += 1;
        self.luma_milli += u64::from(p.luma_milli());
        self.r += u64::from(p.r);
        self.g += u64::from(p.g);
        self.b += u64::from(p.b);
        self
    }

    /// Per-channel mean, truncated
    fn mean(&self) -> Rgb {
        if self.count == 0 {
            return Rgb::BLACK;
        }
        let channel = |sum: u64| (sum / self.count).min(255) as u8;
        Rgb::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

fn quantize_block(
    buffer: &PixelBuffer,
    xs: std::ops::Range<usize>,
    ys: std::ops::Range<usize>,
    options: &QuantizeOptions,
) -> GlyphCell {
    let sums = ys
        .flat_map(|y| buffer.row(y)[xs.clone()].iter().copied())
        .fold(BlockSums::default(), BlockSums::add);

    let glyph = options.glyphs.glyph_for(sums.luma_milli, sums.count);
    if options.grayscale {
        GlyphCell::neutral(glyph)
    } else {
        GlyphCell::colored(glyph, sums.mean())
    }
}
