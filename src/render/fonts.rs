//! Standard Type1 fonts, their metrics, and WinAnsi text encoding.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Byte written for characters with no WinAnsi representation.
const REPLACEMENT: u8 = b'?';

/// Width used for WinAnsi characters above ASCII in proportional fonts.
const DEFAULT_WIDTH: u16 = 556;

/// Helvetica advance widths for ASCII 32..=126, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for ASCII 32..=126, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// One of the standard 14 PDF fonts used by the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Font {
    /// Body text
    Helvetica,
    /// Headings
    HelveticaBold,
    /// Third-level headings
    HelveticaBoldOblique,
    /// Code
    Courier,
}

impl Font {
    /// All fonts, in resource order.
    pub const ALL: [Font; 4] = [
        Font::Helvetica,
        Font::HelveticaBold,
        Font::HelveticaBoldOblique,
        Font::Courier,
    ];

    /// PostScript base font name.
    pub fn base_font(self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaBoldOblique => "Helvetica-BoldOblique",
            Font::Courier => "Courier",
        }
    }

    /// Name of the font in the page resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
            Font::HelveticaBoldOblique => "F3",
            Font::Courier => "F4",
        }
    }

    /// Advance width of a WinAnsi byte, in 1/1000 em.
    pub fn glyph_width(self, byte: u8) -> u16 {
        let table = match self {
            Font::Courier => return 600,
            Font::Helvetica => &HELVETICA_WIDTHS,
            Font::HelveticaBold | Font::HelveticaBoldOblique => &HELVETICA_BOLD_WIDTHS,
        };
        match byte {
            32..=126 => table[(byte - 32) as usize],
            _ => DEFAULT_WIDTH,
        }
    }

    /// Width of text at the given size, in points.
    pub fn text_width(self, text: &str, size: f32) -> f32 {
        let units: u32 = encode_win_ansi(text)
            .iter()
            .map(|b| self.glyph_width(*b) as u32)
            .sum();
        units as f32 * size / 1000.0
    }
}

/// Map one character to its WinAnsi (CP1252) byte.
fn win_ansi_byte(c: char) -> Option<u8> {
    let code = c as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => {
            let byte = match c {
                '\u{20AC}' => 0x80,
                '\u{201A}' => 0x82,
                '\u{0192}' => 0x83,
                '\u{201E}' => 0x84,
                '\u{2026}' => 0x85,
                '\u{2020}' => 0x86,
                '\u{2021}' => 0x87,
                '\u{02C6}' => 0x88,
                '\u{2030}' => 0x89,
                '\u{0160}' => 0x8A,
                '\u{2039}' => 0x8B,
                '\u{0152}' => 0x8C,
                '\u{017D}' => 0x8E,
                '\u{2018}' => 0x91,
                '\u{2019}' => 0x92,
                '\u{201C}' => 0x93,
                '\u{201D}' => 0x94,
                '\u{2022}' => 0x95,
                '\u{2013}' => 0x96,
                '\u{2014}' => 0x97,
                '\u{02DC}' => 0x98,
                '\u{2122}' => 0x99,
                '\u{0161}' => 0x9A,
                '\u{203A}' => 0x9B,
                '\u{0153}' => 0x9C,
                '\u{017E}' => 0x9E,
                '\u{0178}' => 0x9F,
                _ => return None,
            };
            Some(byte)
        }
    }
}

/// Encode text for a standard font with `WinAnsiEncoding`.
///
/// Characters outside the encoding fall back to the base character of their
/// canonical decomposition (so `ő` becomes `o`), then to `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        if let Some(b) = win_ansi_byte(c) {
            out.push(b);
            continue;
        }
        let base = c.to_string().nfd().next().and_then(win_ansi_byte);
        match base {
            Some(b) => out.push(b),
            None => {
                log::debug!("No WinAnsi glyph for {:?}, substituting", c);
                out.push(REPLACEMENT);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ascii() {
        assert_eq!(encode_win_ansi("Hello"), b"Hello".to_vec());
    }

    #[test]
    fn test_encode_latin1_and_cp1252() {
        assert_eq!(encode_win_ansi("é"), vec![0xE9]);
        assert_eq!(encode_win_ansi("\u{2014}"), vec![0x97]);
        assert_eq!(encode_win_ansi("\u{201C}x\u{201D}"), vec![0x93, b'x', 0x94]);
        assert_eq!(encode_win_ansi("€"), vec![0x80]);
    }

    #[test]
    fn test_encode_decomposes_to_base() {
        // U+0151 LATIN SMALL LETTER O WITH DOUBLE ACUTE
        assert_eq!(encode_win_ansi("\u{0151}"), vec![b'o']);
    }

    #[test]
    fn test_encode_replaces_unknown() {
        assert_eq!(encode_win_ansi("→"), vec![b'?']);
        assert_eq!(encode_win_ansi("日本"), vec![b'?', b'?']);
    }

    #[test]
    fn test_widths() {
        assert_eq!(Font::Courier.glyph_width(b'i'), 600);
        assert_eq!(Font::Helvetica.glyph_width(b' '), 278);
        assert_eq!(Font::Helvetica.glyph_width(b'W'), 944);
        assert_eq!(Font::HelveticaBold.glyph_width(b'b'), 611);
        assert_eq!(Font::Helvetica.glyph_width(0xE9), 556);

        let width = Font::Courier.text_width("abcd", 10.0);
        assert!((width - 24.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_resource_names_unique() {
        let mut names: Vec<_> = Font::ALL.iter().map(|f| f.resource_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Font::ALL.len());
    }
}
