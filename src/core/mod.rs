//! Core display primitives shared by both pipelines:
//! - Cell: colours, attributes and the quantized glyph cell
//! - Boxes: box-drawing sets and the title frame
//! - Palette: density-ordered glyph ramps

pub mod boxes;
pub mod cell;
pub mod palette;

pub use boxes::{box_styles, frame, BoxChars};
pub use cell::{Attrs, Color, GlyphCell, Ink, Rgb};
pub use palette::GlyphSet;
