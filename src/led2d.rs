//! A device abstraction for a 5×5 NeoPixel-style panel addressed by `(row, col)`.
//!
//! [`DigitPanel`] owns an [`LedMatrix`] and a [`LedLayout`](layout::LedLayout). It translates
//! logical cells to chain order, fills the buffer, and flushes the whole frame on every draw.
//!
//! The panel on the board is wired serpentine across rows and mounted upside down, which is
//! [`LED_LAYOUT_5X5`]:
//!
//! ```text
//!   row 0:  24 23 22 21 20
//!   row 1:  15 16 17 18 19
//!   row 2:  14 13 12 11 10
//!   row 3:   5  6  7  8  9
//!   row 4:   4  3  2  1  0
//! ```
//!
//! # Example
//!
//! ```rust
//! use digit_panel::counter::Digit;
//! use digit_panel::led2d::{DigitPanel, digits};
//! use digit_panel::led_strip::{LedMatrix, PulseQueue};
//!
//! #[derive(Default)]
//! struct Recorder(Vec<u8>);
//!
//! impl PulseQueue for Recorder {
//!     async fn submit(&mut self, byte: u8) {
//!         self.0.push(byte);
//!     }
//! }
//!
//! let mut panel = DigitPanel::new(LedMatrix::new(Recorder::default()));
//! let seven = Digit::new(7)?;
//! embassy_futures::block_on(panel.render(seven));
//!
//! assert_eq!(panel.read_frame_2d(), *digits::bitmap(seven));
//! assert_eq!(panel.matrix().queue().0.len(), 25 * 3);
//! # Ok::<(), digit_panel::Error>(())
//! ```

pub mod digits;
pub mod layout;

use crate::counter::Digit;
use crate::led_strip::{LedMatrix, PulseQueue, Rgb};
use layout::LedLayout;

/// Side length of the square panel.
pub const PANEL_SIDE: usize = 5;

/// Number of LEDs on the panel.
pub const PANEL_LEN: usize = PANEL_SIDE * PANEL_SIDE;

/// Wiring of the board's panel: serpentine rows, mounted rotated 180°.
pub const LED_LAYOUT_5X5: LedLayout<PANEL_LEN, PANEL_SIDE, PANEL_SIDE> =
    LedLayout::serpentine_row_major().rotate_180();

// Fixed points of the physical wiring.
const _: () = assert!(LED_LAYOUT_5X5.index(0, 0) == 24);
const _: () = assert!(LED_LAYOUT_5X5.index(PANEL_SIDE - 1, PANEL_SIDE - 1) == 0);

/// Colors of the panel in logical order, indexed `[row][col]`.
pub type Frame2d = [[Rgb; PANEL_SIDE]; PANEL_SIDE];

/// Renders digits (or any [`Frame2d`]) onto the 5×5 panel.
///
/// See the [module documentation](mod@crate::led2d) for an example.
pub struct DigitPanel<Q: PulseQueue> {
    matrix: LedMatrix<Q, PANEL_LEN>,
    layout: LedLayout<PANEL_LEN, PANEL_SIDE, PANEL_SIDE>,
}

impl<Q: PulseQueue> DigitPanel<Q> {
    /// A panel wired like the board's ([`LED_LAYOUT_5X5`]).
    #[must_use]
    pub const fn new(matrix: LedMatrix<Q, PANEL_LEN>) -> Self {
        Self::with_layout(matrix, LED_LAYOUT_5X5)
    }

    /// A panel with some other wiring.
    #[must_use]
    pub const fn with_layout(
        matrix: LedMatrix<Q, PANEL_LEN>,
        layout: LedLayout<PANEL_LEN, PANEL_SIDE, PANEL_SIDE>,
    ) -> Self {
        Self { matrix, layout }
    }

    /// Redraw the whole panel with `digit`'s bitmap.
    pub async fn render(&mut self, digit: Digit) {
        self.write_frame_2d(digits::bitmap(digit)).await;
    }

    /// Copy every cell of `frame` to its chain position, then send the full buffer.
    pub async fn write_frame_2d(&mut self, frame: &Frame2d) {
        for (row, row_colors) in frame.iter().enumerate() {
            for (col, color) in row_colors.iter().enumerate() {
                let index = self.layout.index(row, col);
                self.matrix.set_led(index, *color);
            }
        }
        self.matrix.write().await;
    }

    /// The buffer read back in logical order.
    #[must_use]
    pub fn read_frame_2d(&self) -> Frame2d {
        let mut frame = [[Rgb::default(); PANEL_SIDE]; PANEL_SIDE];
        for (row, row_colors) in frame.iter_mut().enumerate() {
            for (col, color) in row_colors.iter_mut().enumerate() {
                *color = self.matrix.led(self.layout.index(row, col));
            }
        }
        frame
    }

    /// Turn every LED off, immediately.
    pub async fn clear(&mut self) {
        self.matrix.clear().await;
    }

    /// The underlying chain.
    #[must_use]
    pub const fn matrix(&self) -> &LedMatrix<Q, PANEL_LEN> {
        &self.matrix
    }

    /// The wiring in use.
    #[must_use]
    pub const fn layout(&self) -> &LedLayout<PANEL_LEN, PANEL_SIDE, PANEL_SIDE> {
        &self.layout
    }
}
