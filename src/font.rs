//! 3x8 pixel glyphs for the matrix display.

/// Index of the `:` glyph in [`FONT`].
pub const COLON: u8 = 10;

pub const GLYPH_WIDTH: usize = 3;
pub const GLYPH_HEIGHT: usize = 8;

/// Expands 7 rows of 3-bit patterns (MSB is the left column) into a glyph.
/// The bottom row stays blank.
const fn glyph(rows: [u8; 7]) -> [[u8; GLYPH_WIDTH]; GLYPH_HEIGHT] {
    let mut out = [[0u8; GLYPH_WIDTH]; GLYPH_HEIGHT];
    let mut r = 0;
    while r < rows.len() {
        let mut c = 0;
        while c < GLYPH_WIDTH {
            out[r][c] = (rows[r] >> (GLYPH_WIDTH - 1 - c)) & 1;
            c += 1;
        }
        r += 1;
    }
    out
}

/// Digits `0`..=`9` followed by `:`.
pub static FONT: [[[u8; GLYPH_WIDTH]; GLYPH_HEIGHT]; 11] = [
    glyph([0b111, 0b101, 0b101, 0b101, 0b101, 0b101, 0b111]),
    glyph([0b010, 0b110, 0b010, 0b010, 0b010, 0b010, 0b111]),
    glyph([0b111, 0b001, 0b001, 0b111, 0b100, 0b100, 0b111]),
    glyph([0b111, 0b001, 0b001, 0b111, 0b001, 0b001, 0b111]),
    glyph([0b101, 0b101, 0b101, 0b111, 0b001, 0b001, 0b001]),
    glyph([0b111, 0b100, 0b100, 0b111, 0b001, 0b001, 0b111]),
    glyph([0b111, 0b100, 0b100, 0b111, 0b101, 0b101, 0b111]),
    glyph([0b111, 0b001, 0b001, 0b001, 0b001, 0b001, 0b001]),
    glyph([0b111, 0b101, 0b101, 0b111, 0b101, 0b101, 0b111]),
    glyph([0b111, 0b101, 0b101, 0b111, 0b001, 0b001, 0b111]),
    glyph([0b000, 0b000, 0b010, 0b000, 0b010, 0b000, 0b000]),
];
