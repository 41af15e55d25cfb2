//! A device abstraction for push buttons read by polling.
//!
//! See [`Button`] for usage example.

use embedded_hal::digital::InputPin;

use crate::{Error, Result};

// ============================================================================
// PressedTo - How the button is wired
// ============================================================================

/// Describes how the button is physically wired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub enum PressedTo {
    /// Button connects pin to voltage (3.3V) when pressed.
    /// Uses internal pull-down resistor. Pin reads HIGH when pressed.
    ///
    /// Note: The original Pico 2 (RP2350) has a known silicon bug with pull-down resistors
    /// that can cause pins to stay HIGH after button release. Use Ground instead.
    Voltage,

    /// Button connects pin to ground (GND) when pressed.
    /// Uses internal pull-up resistor. Pin reads LOW when pressed.
    Ground,
}

// ============================================================================
// Button Virtual Device
// ============================================================================

/// A push button sampled on demand.
///
/// There is no edge detection and no debouncing here: [`is_pressed`](Self::is_pressed)
/// reports the pin level right now. The counter loop debounces by waiting a fixed time
/// after it sees a press, so a held button repeats once per loop.
///
/// # Example
///
/// ```rust,ignore
/// use digit_panel::button::{Button, PressedTo};
///
/// let p = embassy_rp::init(Default::default());
/// let mut button = Button::new(p.PIN_5, PressedTo::Ground);
/// if button.is_pressed()? {
///     // handle press
/// }
/// ```
pub struct Button<P> {
    input: P,
    pressed_to: PressedTo,
}

impl<P: InputPin> Button<P> {
    /// Wraps an already-configured input pin.
    #[must_use]
    pub const fn from_input(input: P, pressed_to: PressedTo) -> Self {
        Self { input, pressed_to }
    }

    /// Returns whether the button is currently pressed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinState`] if the pin cannot be read. RP2040 pins never fail.
    pub fn is_pressed(&mut self) -> Result<bool> {
        let pressed = match self.pressed_to {
            PressedTo::Voltage => self.input.is_high(),
            PressedTo::Ground => self.input.is_low(),
        };
        pressed.map_err(|_| Error::PinState)
    }

    /// How the button is wired.
    #[must_use]
    pub const fn pressed_to(&self) -> PressedTo {
        self.pressed_to
    }
}

#[cfg(not(feature = "host"))]
impl<'a> Button<embassy_rp::gpio::Input<'a>> {
    /// Creates a new `Button` instance from a pin.
    ///
    /// The pin is configured based on the connection type:
    /// - [`PressedTo::Voltage`]: Uses internal pull-down (button to 3.3V)
    /// - [`PressedTo::Ground`]: Uses internal pull-up (button to GND)
    #[must_use]
    pub fn new<Pin: embassy_rp::gpio::Pin>(
        pin: embassy_rp::Peri<'a, Pin>,
        pressed_to: PressedTo,
    ) -> Self {
        let pull = match pressed_to {
            PressedTo::Voltage => embassy_rp::gpio::Pull::Down,
            PressedTo::Ground => embassy_rp::gpio::Pull::Up,
        };
        Self::from_input(embassy_rp::gpio::Input::new(pin, pull), pressed_to)
    }
}
