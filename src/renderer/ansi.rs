//! ANSI Renderer
//!
//! Renders to ANSI terminals with direct-colour support.
//! - Image cells use 24-bit foreground colour (SGR 38;2)
//! - Grayscale cells use the 16-colour palette
//! - Document fragments get bold/underline styling by kind

use super::{sanitize, Renderer};
use crate::core::{Attrs, Color, GlyphCell, Ink, Rgb};
use crate::document::{Fragment, FragmentStyle};
use crate::raster::RenderedRow;

/// ANSI escape sequences
const CSI: &str = "\x1b[";

/// Foreground colour of a pen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fg {
    True(Rgb),
    Ansi(Color),
}

/// Everything an SGR sequence can set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Pen {
    fg: Option<Fg>,
    bg: Option<Color>,
    attrs: Attrs,
}

impl Pen {
    fn for_cell(cell: &GlyphCell) -> Self {
        let (fg, bg) = match cell.ink {
            Ink::True(rgb) => (Fg::True(rgb), None),
            Ink::Ansi { fg, bg } => (Fg::Ansi(fg), Some(bg)),
        };
        Pen {
            fg: Some(fg),
            bg,
            attrs: cell.attrs,
        }
    }

    fn for_fragment(style: FragmentStyle) -> Self {
        match style {
            FragmentStyle::Plain => Pen::default(),
            FragmentStyle::Heading | FragmentStyle::BoxedTitle => Pen {
                attrs: Attrs::new().bold(),
                ..Pen::default()
            },
            FragmentStyle::Link => Pen {
                fg: Some(Fg::Ansi(Color::BrightBlue)),
                bg: None,
                attrs: Attrs::new().underline(),
            },
        }
    }
}

/// ANSI Renderer
pub struct AnsiRenderer {
    /// Clear the screen in `init`
    pub clear_on_init: bool,
    /// Track current pen to minimize escape codes
    current: Pen,
}

impl Default for AnsiRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AnsiRenderer {
    pub fn new(clear_on_init: bool) -> Self {
        Self {
            clear_on_init,
            current: Pen::default(),
        }
    }

    /// Reset internal state
    pub fn reset(&mut self) {
        self.current = Pen::default();
    }

    /// Generate SGR sequence moving from the current pen to `pen`
    fn sgr(&mut self, pen: Pen) -> String {
        let mut codes: Vec<String> = Vec::new();
        let cur = self.current;

        // Attributes and colours are switched off with a full reset
        let needs_reset = (cur.attrs.bold && !pen.attrs.bold)
            || (cur.attrs.dim && !pen.attrs.dim)
            || (cur.attrs.italic && !pen.attrs.italic)
            || (cur.attrs.underline && !pen.attrs.underline)
            || (cur.attrs.reverse && !pen.attrs.reverse)
            || (cur.fg.is_some() && pen.fg.is_none())
            || (cur.bg.is_some() && pen.bg.is_none());

        if needs_reset {
            codes.push("0".to_string());
            self.current = Pen::default();
        }
        let cur = self.current;

        let turned_on = Attrs {
            bold: pen.attrs.bold && !cur.attrs.bold,
            dim: pen.attrs.dim && !cur.attrs.dim,
            italic: pen.attrs.italic && !cur.attrs.italic,
            underline: pen.attrs.underline && !cur.attrs.underline,
            reverse: pen.attrs.reverse && !cur.attrs.reverse,
        };
        codes.extend(turned_on.sgr_codes().iter().map(u8::to_string));

        if pen.fg != cur.fg {
            match pen.fg {
                Some(Fg::True(rgb)) => codes.push(format!("38;2;{};{};{}", rgb.r, rgb.g, rgb.b)),
                Some(Fg::Ansi(color)) => codes.push(color.fg_code().to_string()),
                None => {}
            }
        }
        if pen.bg != cur.bg {
            if let Some(color) = pen.bg {
                codes.push(color.bg_code().to_string());
            }
        }

        self.current = pen;

        if codes.is_empty() {
            String::new()
        } else {
            format!("{}{}m", CSI, codes.join(";"))
        }
    }

    /// Reset attributes if anything is set
    fn finish(&mut self) -> String {
        if self.current == Pen::default() {
            String::new()
        } else {
            self.reset();
            format!("{}0m", CSI)
        }
    }
}

impl Renderer for AnsiRenderer {
    fn name(&self) -> &str {
        "ansi"
    }

    fn init(&mut self) -> String {
        self.reset();
        if self.clear_on_init {
            format!("{}0m{}", CSI, self.clear())
        } else {
            format!("{}0m", CSI)
        }
    }

    fn shutdown(&self) -> String {
        format!("{}0m", CSI)
    }

    fn clear(&self) -> String {
        format!("{}2J{}H", CSI, CSI)
    }

    fn render_fragments(&mut self, fragments: &[Fragment]) -> String {
        let mut output = String::new();
        for fragment in fragments {
            output.push_str(&self.sgr(Pen::for_fragment(fragment.style)));
            output.push_str(&sanitize(&fragment.text));
        }
        output.push_str(&self.finish());
        output
    }

    fn render_rows(&mut self, rows: &[RenderedRow]) -> String {
        let cells: usize = rows.iter().map(RenderedRow::len).sum();
        let mut output = String::with_capacity(cells * 24);

        for row in rows {
            for cell in &row.cells {
                output.push_str(&self.sgr(Pen::for_cell(cell)));
                output.push(cell.glyph);
            }
            output.push_str(&self.finish());
            output.push('\n');
        }

        output
    }
}
