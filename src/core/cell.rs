//! Glyph cells and colours
//!
//! Each rendered image cell carries:
//! - Glyph (Unicode block or ASCII character)
//! - Ink: a direct 24-bit colour, or a fixed pair from the 16-colour palette
//! - Attributes (bold, underline, etc.)

use serde::{Deserialize, Serialize};

/// Standard ANSI 16-color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,   // Gray
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl Default for Color {
    fn default() -> Self {
        Color::White
    }
}

impl Color {
    /// Get ANSI SGR code for foreground
    pub fn fg_code(&self) -> u8 {
        let v = *self as u8;
        if v < 8 { 30 + v } else { 90 + (v - 8) }
    }

    /// Get ANSI SGR code for background
    pub fn bg_code(&self) -> u8 {
        let v = *self as u8;
        if v < 8 { 40 + v } else { 100 + (v - 8) }
    }
}

/// A 24-bit colour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Luma with the Rec. 601 weights (0.299, 0.587, 0.114), scaled by 1000
    /// so that sums over a block stay exact.
    #[inline]
    pub fn luma_milli(&self) -> u32 {
        299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

/// How a glyph is coloured on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Ink {
    /// Direct colour foreground (SGR 38;2)
    True(Rgb),
    /// Fixed 16-colour foreground/background pair
    Ansi { fg: Color, bg: Color },
}

impl Ink {
    /// The colour used for every cell of a grayscale rendering
    pub const NEUTRAL: Ink = Ink::Ansi {
        fg: Color::White,
        bg: Color::Black,
    };
}

/// Cell attributes (bold, underline, etc.)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attrs {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if any attributes are set
    pub fn any(&self) -> bool {
        self.bold || self.dim || self.italic || self.underline || self.reverse
    }

    /// Generate ANSI SGR codes for these attributes
    pub fn sgr_codes(&self) -> Vec<u8> {
        let mut codes = Vec::new();
        if self.bold { codes.push(1); }
        if self.dim { codes.push(2); }
        if self.italic { codes.push(3); }
        if self.underline { codes.push(4); }
        if self.reverse { codes.push(7); }
        codes
    }
}

/// One quantized image block, ready for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphCell {
    pub glyph: char,
    pub ink: Ink,
    #[serde(default, skip_serializing_if = "is_plain")]
    pub attrs: Attrs,
}

fn is_plain(attrs: &Attrs) -> bool {
    !attrs.any()
}

impl GlyphCell {
    /// Create a cell coloured with a direct colour
    pub fn colored(glyph: char, rgb: Rgb) -> Self {
        Self {
            glyph,
            ink: Ink::True(rgb),
            attrs: Attrs::default(),
        }
    }

    /// Create a bold cell in the neutral grayscale colour
    pub fn neutral(glyph: char) -> Self {
        Self {
            glyph,
            ink: Ink::NEUTRAL,
            attrs: Attrs::new().bold(),
        }
    }
}
