//! Box drawing
//!
//! Character sets for framing text, and the frame used for document titles.

use unicode_width::UnicodeWidthStr;

/// Box drawing character sets
pub struct BoxChars {
    pub tl: char,  // Top-left corner
    pub tr: char,  // Top-right corner
    pub bl: char,  // Bottom-left corner
    pub br: char,  // Bottom-right corner
    pub h: char,   // Horizontal line
    pub v: char,   // Vertical line
}

/// Predefined box styles
pub mod box_styles {
    use super::BoxChars;

    pub const ROUNDED: BoxChars = BoxChars {
        tl: '╭', tr: '╮', bl: '╰', br: '╯',
        h: '─', v: '│',
    };
}

/// Frame `text` in a box with one column of padding on each side.
///
/// Multi-line text gets one boxed line per input line, padded to the widest.
/// The result has no trailing newline.
pub fn frame(text: &str, style: &BoxChars) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let inner = lines.iter().map(|l| l.width()).max().unwrap_or(0);
    let rule: String = std::iter::repeat(style.h).take(inner + 2).collect();

    let mut out = String::with_capacity((inner + 4) * (lines.len() + 2) * 3);
    out.push(style.tl);
    out.push_str(&rule);
    out.push(style.tr);

    for line in lines {
        out.push('\n');
        out.push(style.v);
        out.push(' ');
        out.push_str(line);
        out.extend(std::iter::repeat(' ').take(inner - line.width()));
        out.push(' ');
        out.push(style.v);
    }

    out.push('\n');
    out.push(style.bl);
    out.push_str(&rule);
    out.push(style.br);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_frame_single_line() {
        assert_eq!(frame("Hi", &box_styles::ROUNDED), "╭────╮\n│ Hi │\n╰────╯");
    }

    #[test]
    fn test_frame_pads_to_widest() {
        let ascii = BoxChars { tl: '+', tr: '+', bl: '+', br: '+', h: '-', v: '|' };
        assert_eq!(frame("a\nbcd", &ascii), "+-----+\n| a   |\n| bcd |\n+-----+");
    }

    #[test]
    fn test_frame_wide_chars() {
        // Two CJK characters occupy four columns.
        assert_eq!(frame("日本", &box_styles::ROUNDED), "╭──────╮\n│ 日本 │\n╰──────╯");
    }

    #[test]
    fn test_frame_empty() {
        assert_eq!(frame("", &box_styles::ROUNDED), "╭──╮\n╰──╯");
    }
}
