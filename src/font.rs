//! 8x8 bitmap glyphs for the on-screen rate counter.
//!
//! Each glyph is eight rows, most significant bit leftmost. Only the
//! characters the counter can produce are present.

pub const GLYPH_WIDTH: i32 = 8;
pub const GLYPH_HEIGHT: i32 = 8;

const DIGITS: [[u8; 8]; 10] = [
    [0x3C, 0x66, 0x6E, 0x76, 0x66, 0x66, 0x3C, 0x00], // 0
    [0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00], // 1
    [0x3C, 0x66, 0x06, 0x0C, 0x30, 0x60, 0x7E, 0x00], // 2
    [0x3C, 0x66, 0x06, 0x1C, 0x06, 0x66, 0x3C, 0x00], // 3
    [0x0C, 0x1C, 0x3C, 0x6C, 0x7E, 0x0C, 0x0C, 0x00], // 4
    [0x7E, 0x60, 0x7C, 0x06, 0x06, 0x66, 0x3C, 0x00], // 5
    [0x3C, 0x66, 0x60, 0x7C, 0x66, 0x66, 0x3C, 0x00], // 6
    [0x7E, 0x66, 0x0C, 0x18, 0x18, 0x18, 0x18, 0x00], // 7
    [0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x00], // 8
    [0x3C, 0x66, 0x66, 0x3E, 0x06, 0x66, 0x3C, 0x00], // 9
];

const MINUS: [u8; 8] = [0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00];

/// Bitmap for `c`, or `None` for characters drawn as blank cells.
pub fn glyph(c: char) -> Option<&'static [u8; 8]> {
    match c {
        '0'..='9' => Some(&DIGITS[c as usize - '0' as usize]),
        '-' => Some(&MINUS),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_have_glyphs() {
        for c in '0'..='9' {
            let g = glyph(c).unwrap();
            assert!(g.iter().any(|&row| row != 0), "glyph {c} is empty");
        }
        assert!(glyph(' ').is_none());
        assert_ne!(glyph('1'), glyph('7'));
    }
}
