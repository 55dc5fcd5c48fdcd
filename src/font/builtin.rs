//! Built-in 5x7 bitmap face used when no system font can be loaded
//!
//! Each glyph is seven rows of five bits, most significant bit leftmost.
//! Lowercase letters render with their uppercase glyph and anything
//! without a glyph renders as `?`.

use super::TextBounds;

/// Glyph cell width in font units
pub const GLYPH_WIDTH: i32 = 5;
/// Glyph cell height in font units
pub const GLYPH_HEIGHT: i32 = 7;
/// Blank columns between adjacent glyphs
const GLYPH_GAP: i32 = 1;

/// Bitmap face drawn at an integer pixel scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinFont {
    scale: i32,
}

impl BuiltinFont {
    /// Scale used for placeholder labels; 14px tall glyphs.
    pub const DEFAULT_SCALE: u32 = 2;

    pub fn new(scale: u32) -> Self {
        Self { scale: scale.clamp(1, 16) as i32 }
    }

    /// Horizontal distance between the starts of two glyphs, in pixels.
    pub fn advance(&self) -> i32 {
        (GLYPH_WIDTH + GLYPH_GAP) * self.scale
    }

    /// Ink bounds of `text` relative to the pen origin (top-left of the first cell).
    pub fn measure(&self, text: &str) -> Option<TextBounds> {
        let mut bounds: Option<TextBounds> = None;
        self.for_each_cell(text, |x, y| {
            let cell = TextBounds { left: x, top: y, right: x + self.scale, bottom: y + self.scale };
            bounds = Some(match bounds {
                Some(b) => b.union(cell),
                None => cell,
            });
        });
        bounds
    }

    /// Call `plot` for every pixel covered by `text` with the pen at `origin`.
    pub fn draw(&self, text: &str, origin: (i32, i32), mut plot: impl FnMut(i32, i32, f32)) {
        self.for_each_cell(text, |x, y| {
            for dy in 0..self.scale {
                for dx in 0..self.scale {
                    plot(origin.0 + x + dx, origin.1 + y + dy, 1.0);
                }
            }
        });
    }

    /// Visit the top-left pixel of every lit font unit.
    fn for_each_cell(&self, text: &str, mut visit: impl FnMut(i32, i32)) {
        for (index, ch) in text.chars().enumerate() {
            let pen_x = index as i32 * self.advance();
            for (row, bits) in glyph_rows(ch).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (0b10000 >> col) != 0 {
                        visit(pen_x + col * self.scale, row as i32 * self.scale);
                    }
                }
            }
        }
    }
}

impl Default for BuiltinFont {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SCALE)
    }
}

fn glyph_rows(ch: char) -> [u8; 7] {
    match ch.to_ascii_uppercase() {
        ' ' => [0; 7],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '-' => [0, 0, 0, 0b11111, 0, 0, 0],
        '_' => [0, 0, 0, 0, 0, 0, 0b11111],
        '.' => [0, 0, 0, 0, 0, 0b01100, 0b01100],
        ':' => [0, 0b01100, 0b01100, 0, 0b01100, 0b01100, 0],
        '\'' => [0b00100, 0b00100, 0b01000, 0, 0, 0, 0],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0, 0b00100],
        _ => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0, 0b00100],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_uses_ink_extents() {
        let font = BuiltinFont::default();
        // L starts in column 0, G ends in column 4 of the third cell
        let bounds = font.measure("LOG").unwrap();
        assert_eq!(bounds, TextBounds { left: 0, top: 0, right: 34, bottom: 14 });
    }

    #[test]
    fn test_measure_period_excludes_blank_rows() {
        let font = BuiltinFont::default();
        let bounds = font.measure(".").unwrap();
        assert_eq!(bounds, TextBounds { left: 2, top: 10, right: 6, bottom: 14 });
    }

    #[test]
    fn test_measure_blank_text() {
        let font = BuiltinFont::default();
        assert_eq!(font.measure(""), None);
        assert_eq!(font.measure("   "), None);
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        let font = BuiltinFont::default();
        assert_eq!(font.measure("otter"), font.measure("OTTER"));
    }

    #[test]
    fn test_unknown_char_renders_question_mark() {
        assert_eq!(glyph_rows('~'), glyph_rows('?'));
        assert_ne!(glyph_rows('~'), [0; 7]);
    }

    #[test]
    fn test_draw_offsets_by_origin_and_scales() {
        let font = BuiltinFont::new(3);
        let mut pixels = Vec::new();
        font.draw("-", (10, 20), |x, y, coverage| {
            assert_eq!(coverage, 1.0);
            pixels.push((x, y));
        });
        // 5 lit units in row 3, each 3x3 pixels
        assert_eq!(pixels.len(), 5 * 9);
        assert!(pixels.iter().all(|&(_, y)| (29..32).contains(&y)));
        assert_eq!(pixels.iter().map(|p| p.0).min(), Some(10));
        assert_eq!(pixels.iter().map(|p| p.0).max(), Some(24));
    }

    #[test]
    fn test_scale_is_clamped() {
        assert_eq!(BuiltinFont::new(0).advance(), 6);
        assert_eq!(BuiltinFont::new(100).advance(), 6 * 16);
    }
}
