//! A device abstraction for NeoPixel-style (WS2812) LED chains fed one byte at a time.
//!
//! [`Frame1d`] holds the color of every LED in chain order. [`LedMatrix`] owns a frame plus
//! a [`PulseQueue`] and streams the frame to the wire as green, red, blue bytes.
//!
//! On hardware the queue is a PIO state machine claimed at start-up (see
//! [`pio_queue`](crate::led_strip::pio_queue)); in tests it is any in-memory recorder.
//!
//! See the [`led2d`](mod@crate::led2d) module for `(row, col)` panel usage.
//!
//! # Example: Write a Single Frame
//!
//! ```rust
//! use digit_panel::led_strip::{LedMatrix, PulseQueue, colors};
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
//! let mut matrix = LedMatrix::<_, 2>::new(Recorder::default());
//! matrix.set_led(0, colors::RED);
//! matrix.set_led(1, colors::BLUE);
//! embassy_futures::block_on(matrix.write());
//!
//! // Green, red, blue for each LED in chain order.
//! assert_eq!(matrix.queue().0, [0, 255, 0, 0, 0, 255]);
//! ```

/// Predefined RGB color constants from the `smart_leds` crate.
///
/// Common colors include `RED`, `GREEN`, `BLUE`, `YELLOW`, `WHITE`, `BLACK`.
#[doc(inline)]
pub use smart_leds::colors;

use core::ops::{Deref, DerefMut};
use smart_leds::RGB8;

use crate::{Error, Result};

// ============================================================================
// Submodules
// ============================================================================

pub mod claim;
#[cfg(not(feature = "host"))]
pub mod pio_queue;

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = RGB8;

/// Wire order of one LED's channels: WS2812 parts latch green, then red, then blue.
#[must_use]
pub const fn grb_bytes(color: Rgb) -> [u8; 3] {
    [color.g, color.r, color.b]
}

/// [`Rgb`] pixel data for an LED chain, indexed in chain order.
///
/// Frames deref to `[Rgb; N]`, so you can mutate pixels directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame1d<const N: usize>(pub [Rgb; N]);

impl<const N: usize> Frame1d<N> {
    /// Number of LEDs in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([Rgb::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: Rgb) -> Self {
        Self([color; N])
    }

    /// Overwrite one LED's three channels. No blending with the previous value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn set(&mut self, index: usize, red: u8, green: u8, blue: u8) {
        assert!(index < N, "LED index out of bounds");
        self.0[index] = Rgb::new(red, green, blue);
    }

    /// Current color of one LED.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn get(&self, index: usize) -> Rgb {
        assert!(index < N, "LED index out of bounds");
        self.0[index]
    }

    /// Current color of one LED, or an error for an index past the end of the chain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= N`.
    pub fn try_get(&self, index: usize) -> Result<Rgb> {
        self.0
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfBounds { index, len: N })
    }

    /// Set every LED to black.
    pub fn fill_black(&mut self) {
        self.0 = [Rgb::new(0, 0, 0); N];
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[Rgb; N]> for Frame1d<N> {
    fn from(array: [Rgb; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<Frame1d<N>> for [Rgb; N] {
    fn from(frame: Frame1d<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Pulse queue - hand-off to the hardware bit encoder
// ============================================================================

/// Bounded queue in front of a pulse engine that turns bytes into WS2812 symbols.
///
/// `submit` waits while the queue is full. That wait is the protocol's backpressure,
/// not an error, and there is no timeout: a stalled engine stalls the caller.
pub trait PulseQueue {
    /// Hand one byte to the engine, MSB first on the wire.
    async fn submit(&mut self, byte: u8);
}

impl<Q: PulseQueue + ?Sized> PulseQueue for &mut Q {
    async fn submit(&mut self, byte: u8) {
        (**self).submit(byte).await;
    }
}

// ============================================================================
// LedMatrix - frame buffer plus the queue that drains it
// ============================================================================

/// An LED chain of `N` elements: owns the frame buffer and the pulse queue that feeds the wire.
///
/// See the [module documentation](mod@crate::led_strip) for an example.
pub struct LedMatrix<Q: PulseQueue, const N: usize> {
    frame: Frame1d<N>,
    queue: Q,
}

impl<Q: PulseQueue, const N: usize> LedMatrix<Q, N> {
    /// Number of LEDs in the chain.
    pub const LEN: usize = N;

    /// Take ownership of a claimed queue. The buffer starts all black; nothing is sent yet.
    #[must_use]
    pub const fn new(queue: Q) -> Self {
        Self {
            frame: Frame1d::new(),
            queue,
        }
    }

    /// Overwrite one LED in the buffer. Not visible until [`write`](Self::write).
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn set_led(&mut self, index: usize, color: Rgb) {
        self.frame.set(index, color.r, color.g, color.b);
    }

    /// Buffered color of one LED.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn led(&self, index: usize) -> Rgb {
        self.frame.get(index)
    }

    /// The buffered frame in chain order.
    #[must_use]
    pub const fn frame(&self) -> &Frame1d<N> {
        &self.frame
    }

    /// Mutable access to the buffered frame.
    pub const fn frame_mut(&mut self) -> &mut Frame1d<N> {
        &mut self.frame
    }

    /// The queue this matrix drains into.
    #[must_use]
    pub const fn queue(&self) -> &Q {
        &self.queue
    }

    /// Stream the whole buffer to the wire: for LED 0..N, green, then red, then blue.
    ///
    /// Returns only after the last byte was accepted by the queue.
    pub async fn write(&mut self) {
        for color in self.frame.iter() {
            for byte in grb_bytes(*color) {
                self.queue.submit(byte).await;
            }
        }
    }

    /// Turn every LED off and send the black frame immediately.
    pub async fn clear(&mut self) {
        self.frame.fill_black();
        self.write().await;
    }
}
