//! Bitmaps for the digits 0–9 on a 5×5 panel. Pure data; changing it changes only visuals.

use super::{Frame2d, PANEL_SIDE};
use crate::counter::Digit;
use crate::led_strip::Rgb;

const OFF: Rgb = Rgb::new(0, 0, 0);

// Rows top to bottom; bit 4 is the leftmost column.
const fn glyph(rows: [u8; PANEL_SIDE], on: Rgb) -> Frame2d {
    let mut frame = [[OFF; PANEL_SIDE]; PANEL_SIDE];
    let mut row = 0;
    while row < PANEL_SIDE {
        let mut col = 0;
        while col < PANEL_SIDE {
            if rows[row] & (1 << (PANEL_SIDE - 1 - col)) != 0 {
                frame[row][col] = on;
            }
            col += 1;
        }
        row += 1;
    }
    frame
}

/// Bitmap for each digit, indexed `[digit][row][col]`.
pub static DIGIT_BITMAPS: [Frame2d; 10] = [
    glyph(
        [0b01110, 0b01010, 0b01010, 0b01010, 0b01110],
        Rgb::new(193, 192, 191),
    ),
    glyph(
        [0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
        Rgb::new(0, 101, 13),
    ),
    glyph(
        [0b01110, 0b00010, 0b01110, 0b01000, 0b01110],
        Rgb::new(101, 0, 0),
    ),
    glyph(
        [0b01110, 0b00010, 0b01110, 0b00010, 0b01110],
        Rgb::new(0, 16, 101),
    ),
    glyph(
        [0b01010, 0b01010, 0b01110, 0b00010, 0b00010],
        Rgb::new(97, 0, 90),
    ),
    glyph(
        [0b01110, 0b01000, 0b01110, 0b00010, 0b01110],
        Rgb::new(0, 92, 97),
    ),
    glyph(
        [0b01110, 0b01000, 0b01110, 0b01010, 0b01110],
        Rgb::new(101, 0, 80),
    ),
    glyph(
        [0b01110, 0b00010, 0b00010, 0b00010, 0b00010],
        Rgb::new(248, 255, 0),
    ),
    glyph(
        [0b01110, 0b01010, 0b01110, 0b01010, 0b01110],
        Rgb::new(34, 255, 0),
    ),
    glyph(
        [0b01110, 0b01010, 0b01110, 0b00010, 0b00010],
        Rgb::new(255, 162, 0),
    ),
];

/// The bitmap for `digit`.
#[must_use]
pub fn bitmap(digit: Digit) -> &'static Frame2d {
    &DIGIT_BITMAPS[digit.get() as usize]
}
