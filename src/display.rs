//! Frame preparation for four chained MAX7219 8x8 modules (FC16 layout).

use crate::font::{COLON, FONT, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::time::TimeOfDay;

pub const DEVICES: usize = 4;

/// `HH:MM:SS` is eight glyphs.
const GLYPHS: usize = 8;

/// Renders `HH:MM:SS` into one 8-row buffer per device.
///
/// Glyphs are 3 columns wide with a 1 column gap. Column 0 is the MSB of
/// device 0, column 31 the LSB of device 3.
pub fn prepare_buffer(time: &TimeOfDay) -> [[u8; GLYPH_HEIGHT]; DEVICES] {
    let digits: [u8; GLYPHS] = [
        time.hour() / 10,
        time.hour() % 10,
        COLON,
        time.minute() / 10,
        time.minute() % 10,
        COLON,
        time.second() / 10,
        time.second() % 10,
    ];

    let mut fb_rows = [0u32; GLYPH_HEIGHT];
    let mut cursor = 0;

    for &d in digits.iter() {
        let glyph = &FONT[d as usize];
        for (r, row) in glyph.iter().enumerate() {
            for (c, &px) in row.iter().enumerate() {
                if px != 0 {
                    fb_rows[r] |= 1 << (31 - (cursor + c));
                }
            }
        }
        cursor += GLYPH_WIDTH + 1;
    }

    let mut device_buffers = [[0u8; GLYPH_HEIGHT]; DEVICES];
    for (dev_idx, buffer) in device_buffers.iter_mut().enumerate() {
        let shift = 24 - dev_idx * 8;
        for (r, byte) in buffer.iter_mut().enumerate() {
            *byte = ((fb_rows[r] >> shift) & 0xFF) as u8;
        }
    }

    device_buffers
}
