//! Compile-time description of panel geometry and wiring.
//!
//! See [`LedLayout`] for examples including serpentine panels and 180° rotation.

use crate::{Error, Result};

/// Compile-time description of panel geometry and wiring.
///
/// `LedLayout` defines how a rectangular grid of LEDs maps to the linear order of
/// LEDs on a NeoPixel-style (WS2812) chain. Describe the wiring once, then address
/// the panel by `(row, col)` without caring about chain order.
///
/// Coordinates use a screen-style convention: `(0, 0)` is the top-left corner,
/// columns increase to the right, and rows increase downward. The stored map lists
/// `(col, row)` for each LED in chain order.
///
/// ## Validation
///
/// Layouts are validated at **compile time** when built in a `const`:
/// - coordinates must be in-bounds
/// - every cell must appear exactly once
///
/// Because of that, [`index`](Self::index) is a bijection from cells onto
/// `0..N`.
///
/// # Example
///
/// A serpentine 3×2 panel mounted upside down:
///
/// ```rust
/// use digit_panel::led2d::layout::LedLayout;
///
/// const UPSIDE_DOWN: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major().rotate_180();
/// const EXPECTED: LedLayout<6, 3, 2> =
///     LedLayout::new([(2, 1), (1, 1), (0, 1), (0, 0), (1, 0), (2, 0)]);
/// const _: () = assert!(UPSIDE_DOWN.equals(&EXPECTED)); // Compile-time assert
///
/// assert_eq!(UPSIDE_DOWN.index(0, 0), 3);
/// assert_eq!(UPSIDE_DOWN.index(1, 2), 0);
/// ```
///
/// ```text
/// Serpentine 3×2 rotated 180°:
///
///   Before:              After:
///     LED0  LED1  LED2     LED3  LED4  LED5
///     LED5  LED4  LED3     LED2  LED1  LED0
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedLayout<const N: usize, const W: usize, const H: usize> {
    map: [(u16, u16); N],
    inverse: [u16; N],
}

impl<const N: usize, const W: usize, const H: usize> LedLayout<N, W, H> {
    /// Return the array mapping LED wiring order to `(col, row)` coordinates.
    #[must_use]
    pub const fn index_to_xy(&self) -> &[(u16, u16); N] {
        &self.map
    }

    /// Number of columns in the layout.
    #[must_use]
    pub const fn width(&self) -> usize {
        W
    }

    /// Number of rows in the layout.
    #[must_use]
    pub const fn height(&self) -> usize {
        H
    }

    /// Total number of LEDs in the layout.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Chain index of the LED at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= H` or `col >= W`. An out-of-range position is a caller bug;
    /// use [`try_index`](Self::try_index) for unchecked input.
    #[must_use]
    pub const fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < H, "row out of bounds");
        assert!(col < W, "column out of bounds");
        self.inverse[row * W + col] as usize
    }

    /// Chain index of the LED at `(row, col)`, or an error if the position is off the panel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PositionOutOfBounds`] if `row >= H` or `col >= W`.
    pub const fn try_index(&self, row: usize, col: usize) -> Result<usize> {
        if row < H && col < W {
            Ok(self.index(row, col))
        } else {
            Err(Error::PositionOutOfBounds {
                row,
                col,
                width: W,
                height: H,
            })
        }
    }

    /// Const equality helper for compile-time checks.
    ///
    /// ```rust
    /// use digit_panel::led2d::layout::LedLayout;
    ///
    /// const SERPENTINE: LedLayout<4, 2, 2> = LedLayout::serpentine_row_major();
    /// const ROTATED: LedLayout<4, 2, 2> = SERPENTINE.rotate_180();
    ///
    /// const _: () = assert!(SERPENTINE.equals(&SERPENTINE)); // assert equal
    /// const _: () = assert!(!SERPENTINE.equals(&ROTATED));   // assert not equal
    /// ```
    #[must_use]
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < N {
            if self.map[i].0 != other.map[i].0 || self.map[i].1 != other.map[i].1 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Constructor: verifies the mapping covers every cell exactly once across the W×H panel.
    ///
    /// ```rust
    /// use digit_panel::led2d::layout::LedLayout;
    ///
    /// // 3×2 panel (landscape, W×H), listed as (col, row) in chain order
    /// const MAP: LedLayout<6, 3, 2> =
    ///     LedLayout::new([(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]);
    ///
    /// assert_eq!(MAP.index(1, 0), 5);
    /// ```
    ///
    /// ```text
    ///   LED0  LED1  LED2
    ///   LED5  LED4  LED3
    /// ```
    #[must_use]
    pub const fn new(map: [(u16, u16); N]) -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");
        assert!(
            N <= u16::MAX as usize,
            "total LEDs must fit in u16 for the inverse map"
        );

        let mut seen = [false; N];
        let mut inverse = [0_u16; N];

        let mut i = 0;
        while i < N {
            let (c, r) = map[i];
            let c = c as usize;
            let r = r as usize;

            assert!(c < W, "column out of bounds");
            assert!(r < H, "row out of bounds");

            let cell = r * W + c;
            assert!(!seen[cell], "duplicate (col,row) in mapping");
            seen[cell] = true;
            inverse[cell] = i as u16;

            i += 1;
        }

        let mut k = 0;
        while k < N {
            assert!(seen[k], "mapping does not cover every cell");
            k += 1;
        }

        Self { map, inverse }
    }

    /// Serpentine row-major mapping (alternating left-to-right and right-to-left across rows).
    ///
    /// ```rust
    /// use digit_panel::led2d::layout::LedLayout;
    ///
    /// const MAP: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
    /// const EXPECTED: LedLayout<6, 3, 2> =
    ///     LedLayout::new([(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]);
    /// const _: () = assert!(MAP.equals(&EXPECTED));
    /// ```
    ///
    /// ```text
    /// Strip snakes across rows (3×2 example):
    ///   LED0  LED1  LED2
    ///   LED5  LED4  LED3
    /// ```
    #[must_use]
    pub const fn serpentine_row_major() -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut mapping = [(0_u16, 0_u16); N];
        let mut y_index = 0;
        while y_index < H {
            let mut x_index = 0;
            while x_index < W {
                let led_index = if y_index % 2 == 0 {
                    y_index * W + x_index
                } else {
                    y_index * W + (W - 1 - x_index)
                };
                mapping[led_index] = (x_index as u16, y_index as u16);
                x_index += 1;
            }
            y_index += 1;
        }
        Self::new(mapping)
    }

    /// Rotate 180°, for panels mounted upside down.
    ///
    /// ```rust
    /// use digit_panel::led2d::layout::LedLayout;
    ///
    /// const ROTATED: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major().rotate_180();
    /// const EXPECTED: LedLayout<6, 3, 2> =
    ///     LedLayout::new([(2, 1), (1, 1), (0, 1), (0, 0), (1, 0), (2, 0)]);
    /// const _: () = assert!(ROTATED.equals(&EXPECTED));
    /// ```
    #[must_use]
    pub const fn rotate_180(self) -> Self {
        let mut rotated = [(0_u16, 0_u16); N];
        let mut led_index = 0;
        while led_index < N {
            let (col, row) = self.map[led_index];
            rotated[led_index] = ((W - 1 - col as usize) as u16, (H - 1 - row as usize) as u16);
            led_index += 1;
        }
        Self::new(rotated)
    }
}
